//! Runtime backed by a docker-compatible command-line tool

use super::{async_trait, ContainerRuntime, RuntimeError};
use std::io::ErrorKind;
use tokio::process::Command;
use tracing::debug;

/// Invokes a docker-compatible executable (`docker`, `podman`, ...)
#[derive(Debug, Clone)]
pub struct CliRuntime {
    program: String,
}

impl CliRuntime {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Run the program with `args` and return its stdout as text
    async fn run(&self, args: &[&str]) -> Result<String, RuntimeError> {
        debug!(program = %self.program, args = ?args, "Invoking container runtime");

        let output = Command::new(&self.program)
            .args(args)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => RuntimeError::NotInstalled {
                    program: self.program.clone(),
                },
                _ => RuntimeError::Spawn {
                    program: self.program.clone(),
                    source: e,
                },
            })?;

        if !output.status.success() {
            return Err(RuntimeError::NonZeroExit {
                program: self.program.clone(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        String::from_utf8(output.stdout).map_err(|e| RuntimeError::Unparseable {
            program: self.program.clone(),
            reason: e.to_string(),
        })
    }
}

impl Default for CliRuntime {
    fn default() -> Self {
        Self::new("docker")
    }
}

#[async_trait]
impl ContainerRuntime for CliRuntime {
    fn name(&self) -> &str {
        &self.program
    }

    async fn running_container_names(&self) -> Result<Vec<String>, RuntimeError> {
        let stdout = self.run(&["ps", "--format", "{{.Names}}"]).await?;
        Ok(parse_names(&stdout))
    }

    async fn disk_usage_summary(&self) -> Result<String, RuntimeError> {
        self.run(&["system", "df"]).await
    }
}

/// One container name per non-empty line
pub(crate) fn parse_names(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
