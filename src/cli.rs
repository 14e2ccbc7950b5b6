use std::env;
use std::fs;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use log::{LevelFilter, info};
use simplelog::{ColorChoice, TermLogger, TerminalMode};

use crate::config::Config;
use crate::process::SystemRunner;
use crate::style::StyleRunner;

const BANNER: &str = r"
                         Apache Wave Maintainer Helper!
                         ------------------------------

This tool is written for Apache Wave maintainers and may have undesired effects if used by other
developers. This tool will need certain permissions which are not given to it automatically and
will need to prompt the user for credentials.

Use -h or --help to see the list of commands.
----------------------------------------------------------------------------------------------------
";

#[derive(Parser, Debug, Clone)]
#[command(name = "wave-helper", version, about = "Apache Wave maintainer helper", long_about = None)]
pub struct Args {
    /// Clear all temporary files (deletes .helper)
    #[arg(long = "clear", action = ArgAction::SetTrue)]
    pub clear: bool,

    /// Run the style checker on the wave and pst projects
    #[arg(long = "style", action = ArgAction::SetTrue)]
    pub style: bool,

    /// Verbose logging
    #[arg(long = "verbose", short = 'v', action = ArgAction::Count)]
    pub verbose: u8,
}

/// Runs the CLI application.
///
/// All errors propagate back here untouched; only `main` turns one into a
/// process exit.
pub fn run() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    println!("{BANNER}");

    let cwd = env::current_dir().context("resolve working directory")?;
    let config = Config::at(&cwd);

    // Best effort; the directory already existing is the normal case.
    let _ = fs::create_dir(&config.temp_dir);

    if args.clear {
        clear(&config)?;
    }
    if args.style {
        StyleRunner::new(&config, SystemRunner).run()?;
    }
    Ok(())
}

/// Deletes the temp directory and everything under it. A missing directory is
/// a no-op, not an error.
pub fn clear(config: &Config) -> Result<()> {
    info!("Removing all temporary files.");
    if !config.temp_dir.exists() {
        return Ok(());
    }
    fs::remove_dir_all(&config.temp_dir)
        .with_context(|| format!("remove {}", config.temp_dir.display()))
}

fn init_logging(verbose: u8) {
    let level = if verbose > 0 {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    // Ignore double-init; tests may race to set the global logger.
    let _ = TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_default_off() {
        let args = Args::try_parse_from(["wave-helper"]).unwrap();
        assert!(!args.clear);
        assert!(!args.style);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn flags_combine() {
        let args = Args::try_parse_from(["wave-helper", "--clear", "--style", "-v"]).unwrap();
        assert!(args.clear);
        assert!(args.style);
        assert_eq!(args.verbose, 1);
    }
}
