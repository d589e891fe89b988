//! Administrative command registry
//!
//! Commands are looked up by the action name in `/api/admin/{action}`. The
//! defaults are simulated and touch nothing; real commands plug in through
//! [`AdminRegistry::register`].

use async_trait::async_trait;
use shared_types::AdminActionResponse;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, warn};

use crate::error::{ApiError, ApiResult};

pub const RESTART: &str = "restart";
pub const RELOAD_CACHE: &str = "reload-cache";
pub const CLEAR_LOGS: &str = "clear-logs";

#[async_trait]
pub trait AdminCommand: Send + Sync {
    fn name(&self) -> &str;

    /// Run the command and return a human-readable status message
    async fn execute(&self) -> anyhow::Result<String>;
}

/// Command that only acknowledges the request
pub struct SimulatedCommand {
    name: &'static str,
    message: &'static str,
}

impl SimulatedCommand {
    pub fn new(name: &'static str, message: &'static str) -> Self {
        Self { name, message }
    }
}

#[async_trait]
impl AdminCommand for SimulatedCommand {
    fn name(&self) -> &str {
        self.name
    }

    async fn execute(&self) -> anyhow::Result<String> {
        Ok(self.message.to_string())
    }
}

#[derive(Clone, Default)]
pub struct AdminRegistry {
    commands: BTreeMap<String, Arc<dyn AdminCommand>>,
}

impl AdminRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the simulated `restart`, `reload-cache` and `clear-logs`
    pub fn with_simulated_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(SimulatedCommand::new(
            RESTART,
            "Simulated restart accepted (no-op in this environment).",
        ));
        registry.register(SimulatedCommand::new(
            RELOAD_CACHE,
            "Simulated cache reload completed.",
        ));
        registry.register(SimulatedCommand::new(
            CLEAR_LOGS,
            "Simulated log clearance completed.",
        ));
        registry
    }

    /// Add a command, replacing any command with the same name
    pub fn register<C: AdminCommand + 'static>(&mut self, command: C) {
        self.commands
            .insert(command.name().to_string(), Arc::new(command));
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn AdminCommand>> {
        self.commands.get(name).cloned()
    }

    pub fn names(&self) -> Vec<&str> {
        self.commands.keys().map(String::as_str).collect()
    }

    pub async fn run(&self, action: &str) -> ApiResult<AdminActionResponse> {
        let command = self.get(action).ok_or_else(|| {
            warn!(action = %action, "Rejected unknown admin action");
            ApiError::UnknownAdminAction(action.to_string())
        })?;

        let message = command
            .execute()
            .await
            .map_err(|e| ApiError::AdminAction(e.to_string()))?;

        info!(action = %action, "Admin action completed");

        Ok(AdminActionResponse {
            ok: true,
            action: action.to_string(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingCommand;

    #[async_trait]
    impl AdminCommand for FailingCommand {
        fn name(&self) -> &str {
            "explode"
        }

        async fn execute(&self) -> anyhow::Result<String> {
            Err(anyhow::anyhow!("boom"))
        }
    }

    #[tokio::test]
    async fn test_defaults_are_registered() {
        let registry = AdminRegistry::with_simulated_defaults();
        assert_eq!(registry.names(), vec![CLEAR_LOGS, RELOAD_CACHE, RESTART]);

        let response = registry.run(RELOAD_CACHE).await.unwrap();
        assert!(response.ok);
        assert_eq!(response.action, RELOAD_CACHE);
        assert_eq!(response.message, "Simulated cache reload completed.");
    }

    #[tokio::test]
    async fn test_unknown_action_is_rejected() {
        let registry = AdminRegistry::with_simulated_defaults();
        let err = registry.run("drop-tables").await.unwrap_err();
        assert!(matches!(err, ApiError::UnknownAdminAction(ref action) if action == "drop-tables"));
    }

    #[tokio::test]
    async fn test_registered_command_failure_is_reported() {
        let mut registry = AdminRegistry::new();
        registry.register(FailingCommand);

        let err = registry.run("explode").await.unwrap_err();
        assert!(matches!(err, ApiError::AdminAction(ref message) if message == "boom"));
    }
}
