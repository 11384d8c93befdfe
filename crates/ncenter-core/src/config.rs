//! Notification center configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{NotifyError, NotifyResult};
use crate::notification::model::AuditAction;

/// Actor label recorded for interactive actions.
pub const DEFAULT_ACTOR: &str = "Current User";

/// Environment variable overriding the interactive actor label.
pub const ACTOR_ENV: &str = "NCENTER_ACTOR";

/// How status-changing operations treat the current status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionPolicy {
    /// Any operation may be applied from any status.
    #[default]
    Permissive,
    /// Operations must follow `NotificationStatus::can_transition_to`.
    Strict,
}

/// Audit tag written by the escalate operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EscalationAudit {
    /// Reuse the `created` tag, matching existing audit histories.
    #[default]
    Created,
    /// Record a dedicated `escalated` tag.
    Escalated,
}

impl EscalationAudit {
    pub fn action(&self) -> AuditAction {
        match self {
            Self::Created => AuditAction::Created,
            Self::Escalated => AuditAction::Escalated,
        }
    }
}

/// Settings for a [`NotificationCenter`](crate::notification::NotificationCenter).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CenterConfig {
    pub actor: String,
    pub transition_policy: TransitionPolicy,
    pub escalation_action: EscalationAudit,
}

impl Default for CenterConfig {
    fn default() -> Self {
        Self {
            actor: DEFAULT_ACTOR.to_string(),
            transition_policy: TransitionPolicy::default(),
            escalation_action: EscalationAudit::default(),
        }
    }
}

impl CenterConfig {
    /// Parse a configuration from TOML text. Missing keys fall back to defaults.
    pub fn from_toml_str(s: &str) -> NotifyResult<Self> {
        let config: Self =
            toml::from_str(s).map_err(|e| NotifyError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file.
    pub fn load(path: &Path) -> NotifyResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            NotifyError::config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), "Configuration loaded");
        Ok(config)
    }

    /// Load from an optional path and apply environment overrides.
    ///
    /// No path means defaults; an explicit path must exist.
    pub fn resolve(path: Option<&Path>) -> NotifyResult<Self> {
        let mut config = match path {
            Some(p) => Self::load(p)?,
            None => Self::default(),
        };

        if let Ok(actor) = std::env::var(ACTOR_ENV) {
            config = config.with_actor(actor)?;
        }

        Ok(config)
    }

    pub fn with_actor(mut self, actor: impl Into<String>) -> NotifyResult<Self> {
        self.actor = actor.into();
        self.validate()?;
        Ok(self)
    }

    pub fn with_policy(mut self, policy: TransitionPolicy) -> Self {
        self.transition_policy = policy;
        self
    }

    pub fn with_escalation_action(mut self, escalation: EscalationAudit) -> Self {
        self.escalation_action = escalation;
        self
    }

    fn validate(&self) -> NotifyResult<()> {
        if self.actor.trim().is_empty() {
            return Err(NotifyError::config("actor must not be empty"));
        }
        Ok(())
    }
}
