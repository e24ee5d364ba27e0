use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "fieldline",
    about = "Molecule coordinate loading and field-line sample generation",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Load an XYZ coordinate file and summarize or dump it
    #[command(visible_alias = "m")]
    Molecule(MoleculeArgs),

    /// Generate animation frames of field-line arrow samples
    #[command(visible_alias = "f")]
    Field(FieldArgs),
}

#[derive(Args)]
pub struct MoleculeArgs {
    /// Input XYZ file
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Emit the parsed coordinates as JSON instead of a summary
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct FieldArgs {
    /// Number of field lines
    #[arg(long, value_name = "N", default_value_t = 12)]
    pub lines: usize,

    /// Arrows per field line
    #[arg(long, value_name = "N", default_value_t = 16)]
    pub arrows: usize,

    /// Number of animation frames to generate
    #[arg(long, value_name = "N", default_value_t = 1)]
    pub frames: usize,

    /// Output file (stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Suppress progress output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn parse() -> Cli {
    Cli::parse()
}
