use std::ffi::OsString;
use std::process::Command;

use anyhow::{Context, Result, bail};

/// Narrow seam around subprocess execution so the style runner can be tested
/// without a real Java toolchain installed.
pub trait CommandRunner {
    /// Runs `program` with `args`, blocking until it exits. Spawn failure and
    /// non-zero exit are both errors.
    fn run(&self, program: &str, args: &[OsString]) -> Result<()>;
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn run(&self, program: &str, args: &[OsString]) -> Result<()> {
        (**self).run(program, args)
    }
}

/// Real implementation over `std::process::Command`, inheriting stdio.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[OsString]) -> Result<()> {
        let status = Command::new(program)
            .args(args)
            .status()
            .with_context(|| format!("spawn {program}"))?;
        if !status.success() {
            bail!("{program} exited with {status}");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn zero_exit_is_ok() {
        assert!(SystemRunner.run("true", &[]).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_is_error() {
        let err = SystemRunner.run("false", &[]).unwrap_err();
        assert!(err.to_string().contains("false"));
    }

    #[test]
    fn missing_program_is_error() {
        assert!(
            SystemRunner
                .run("wave-helper-no-such-program", &[])
                .is_err()
        );
    }
}
