use std::{env, io, process::Command};

use tracing::{debug, warn};

use crate::{common::{DRIVER_BIN, DRIVER_ENV}, error::DriverError};

/// Launches the external `attack-shark-r1-driver` executable.
#[derive(Clone, Debug)]
pub struct Driver {
    program: String,
}

impl Driver {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }

    /// Driver on `PATH`, unless `ATTACK_SHARK_R1_DRIVER` names another program.
    pub fn from_env() -> Self {
        match env::var(DRIVER_ENV) {
            Ok(p) if !p.trim().is_empty() => Self::new(p),
            _ => Self::new(DRIVER_BIN),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Runs `cmd` to completion and returns its stdout. `cmd[0]` names the
    /// executable as the driver knows it; the configured program is spawned
    /// in its place.
    pub fn run(&self, cmd: &[String]) -> Result<String, DriverError> {
        let Some((_, args)) = cmd.split_first() else {
            return Err(DriverError::Unexpected("empty command".into()));
        };

        debug!(program = %self.program, ?args, "Running driver");

        let output = Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => DriverError::Launch(self.program.clone()),
                _ => DriverError::Unexpected(format!("failed to start {}: {e}", self.program)),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            warn!(code = ?output.status.code(), %stderr, "Driver failed");
            return Err(DriverError::Execution { code: output.status.code(), stderr });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Default for Driver {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[cfg(unix)]
    #[test]
    fn test_run_captures_stdout() {
        let driver = Driver::new("sh");
        let out = driver.run(&argv(&["attack-shark-r1-driver", "-c", "printf 'Charge: 87%%'"])).unwrap();
        assert_eq!(out, "Charge: 87%");
    }

    #[cfg(unix)]
    #[test]
    fn test_run_nonzero_exit_carries_stderr() {
        let driver = Driver::new("sh");
        let err = driver.run(&argv(&["x", "-c", "echo 'device not found' >&2; exit 3"])).unwrap_err();

        match err {
            DriverError::Execution { code, stderr } => {
                assert_eq!(code, Some(3));
                assert_eq!(stderr, "device not found\n");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_run_missing_program() {
        let driver = Driver::new("attack-shark-r1-driver-that-does-not-exist");
        let err = driver.run(&argv(&["attack-shark-r1-driver", "-query-charge"])).unwrap_err();
        assert!(matches!(err, DriverError::Launch(p) if p == "attack-shark-r1-driver-that-does-not-exist"));
    }

    #[test]
    fn test_run_empty_command() {
        let driver = Driver::new("sh");
        assert!(matches!(driver.run(&[]), Err(DriverError::Unexpected(_))));
    }
}
