//! In-memory runtime for unit tests

use super::{async_trait, ContainerRuntime, RuntimeError};

/// Runtime returning canned answers, or failing every call
pub(crate) struct StaticRuntime {
    names: Option<Vec<String>>,
    disk_usage: Option<String>,
}

impl StaticRuntime {
    pub(crate) fn new(names: &[&str], disk_usage: &str) -> Self {
        Self {
            names: Some(names.iter().map(|n| n.to_string()).collect()),
            disk_usage: Some(disk_usage.to_string()),
        }
    }

    /// Runtime whose every call fails as if the executable were missing
    pub(crate) fn unavailable() -> Self {
        Self {
            names: None,
            disk_usage: None,
        }
    }

    fn missing() -> RuntimeError {
        RuntimeError::NotInstalled {
            program: "fake".to_string(),
        }
    }
}

#[async_trait]
impl ContainerRuntime for StaticRuntime {
    fn name(&self) -> &str {
        "fake"
    }

    async fn running_container_names(&self) -> Result<Vec<String>, RuntimeError> {
        self.names.clone().ok_or_else(Self::missing)
    }

    async fn disk_usage_summary(&self) -> Result<String, RuntimeError> {
        self.disk_usage.clone().ok_or_else(Self::missing)
    }
}
