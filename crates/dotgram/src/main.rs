use clap::Parser;
use console::Style;
use fern::Dispatch;
use log::debug;
use log::{Level, LevelFilter};
use miette::{IntoDiagnostic, Result};
use std::time::Instant;

use dotgram::*;

// ---------------------------------------------------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------------------------------------------------

fn main() -> Result<()> {
    let opt = Opt::parse();

    let level = if opt.verbose {
        LevelFilter::Debug
    } else if opt.quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    Dispatch::new()
        .format(|out, message, record| {
            let style = match record.level() {
                Level::Error => Style::new().red().bright(),
                Level::Warn => Style::new().yellow().bright(),
                Level::Info => Style::new().green().bright(),
                Level::Debug => Style::new().cyan().bright(),
                Level::Trace => Style::new().magenta().bright(),
            };
            let head = format!("{message}")
                .split_ascii_whitespace()
                .next()
                .map_or(0, |x| x.len());
            out.finish(format_args!(
                "{} {}{}",
                style.apply_to(format!("[{:<5}]", record.level())),
                " ".repeat(12usize.saturating_sub(head)),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()
        .into_diagnostic()?;

    let now = Instant::now();

    match opt.command {
        Commands::Check(x) => cmd_check::CmdCheck::new(x).exec()?,
        Commands::Dump(x) => cmd_dump::CmdDump::new(x).exec()?,
    }

    let elapsed_time = now.elapsed();
    debug!("Elapsed time ({} milliseconds)", elapsed_time.as_millis());

    Ok(())
}
