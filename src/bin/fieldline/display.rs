use std::io::IsTerminal;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

pub fn print_error(err: &anyhow::Error) {
    eprintln!("error: {err}");
    for cause in err.chain().skip(1) {
        eprintln!("  caused by: {cause}");
    }
}

/// Progress bar for multi-frame dumps; hidden when quiet or not a TTY.
pub fn frame_progress(frames: usize, quiet: bool) -> ProgressBar {
    if quiet || frames <= 1 || !std::io::stderr().is_terminal() {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(frames as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("  {bar:30.cyan/dim} {pos}/{len} frames")
            .expect("invalid template"),
    );
    bar.enable_steady_tick(Duration::from_millis(80));
    bar
}
