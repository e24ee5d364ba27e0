use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use serde::Serialize;

use fieldline::{io::xyz, FieldSample, FieldSampler, Molecule};

use crate::cli::{Command, FieldArgs, MoleculeArgs};
use crate::display;

pub fn dispatch(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Molecule(args) => molecule(args),
        Command::Field(args) => field(args),
    }
}

fn molecule(args: MoleculeArgs) -> anyhow::Result<()> {
    let molecule = xyz::read_file(&args.input)
        .with_context(|| format!("failed to read '{}'", args.input.display()))?;

    if args.json {
        serde_json::to_writer_pretty(std::io::stdout().lock(), &molecule)?;
        println!();
    } else {
        print_summary(&args.input, &molecule);
    }
    Ok(())
}

fn print_summary(input: &Path, molecule: &Molecule) {
    println!("{}", input.display());
    println!("  carbon atoms:    {}", molecule.carbons.len());
    println!("  hydrogen atoms:  {}", molecule.hydrogens.len());
    if molecule.skipped > 0 {
        println!("  skipped lines:   {}", molecule.skipped);
    }
}

#[derive(Serialize)]
struct Frame {
    frame: usize,
    phase: f32,
    samples: Vec<FieldSample>,
}

fn field(args: FieldArgs) -> anyhow::Result<()> {
    let mut sampler = FieldSampler::new(args.lines, args.arrows)
        .context("invalid field configuration")?;

    let bar = display::frame_progress(args.frames, args.quiet);
    let mut frames = Vec::with_capacity(args.frames);
    for n in 0..args.frames {
        if n > 0 {
            sampler.advance();
        }
        frames.push(Frame {
            frame: n,
            phase: sampler.phase(),
            samples: sampler.samples().to_vec(),
        });
        bar.inc(1);
    }
    bar.finish_and_clear();

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create '{}'", path.display()))?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer(&mut writer, &frames)?;
            writer.flush()?;
        }
        None => {
            serde_json::to_writer_pretty(std::io::stdout().lock(), &frames)?;
            println!();
        }
    }
    Ok(())
}
