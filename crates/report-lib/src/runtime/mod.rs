//! Container runtime access
//!
//! The report only ever asks the runtime two questions: which containers are
//! running, and what its disk-usage summary looks like. Both go through the
//! [`ContainerRuntime`] trait so steps can be exercised without a daemon.

mod cli;

#[cfg(test)]
pub(crate) mod testing;


pub use cli::CliRuntime;

pub use async_trait::async_trait;

/// Why a runtime invocation produced no usable output
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// The executable is not on `PATH`
    #[error("{program} is not installed")]
    NotInstalled { program: String },

    /// The executable exists but could not be started
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The command ran and reported failure
    #[error("{program} exited with {}: {stderr}", exit_label(.code))]
    NonZeroExit {
        program: String,
        code: Option<i32>,
        stderr: String,
    },

    /// The command succeeded but its output could not be read
    #[error("unreadable output from {program}: {reason}")]
    Unparseable { program: String, reason: String },
}

impl RuntimeError {
    /// Short machine-friendly label for logging
    pub fn kind(&self) -> &'static str {
        match self {
            RuntimeError::NotInstalled { .. } => "not_installed",
            RuntimeError::Spawn { .. } => "spawn_failed",
            RuntimeError::NonZeroExit { .. } => "non_zero_exit",
            RuntimeError::Unparseable { .. } => "unparseable",
        }
    }
}

/// Runtime name as shown at the start of a notice, e.g. `Docker`
pub fn display_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "signal".to_string(),
    }
}

/// Trait for container runtime implementations
#[async_trait]
pub trait ContainerRuntime: Send + Sync {
    /// Name used in user-facing notices
    fn name(&self) -> &str;

    /// Names of all currently running containers
    async fn running_container_names(&self) -> Result<Vec<String>, RuntimeError>;

    /// Raw text of the runtime's disk-usage summary
    async fn disk_usage_summary(&self) -> Result<String, RuntimeError>;
}
