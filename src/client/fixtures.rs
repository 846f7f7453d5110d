//! Test fixtures and builders for API model types
//!
//! Import via `use crate::client::fixtures::*` in test modules.

#![allow(dead_code)]

use super::models::TeamRole;

// ============================================================================
// TeamRoleBuilder
// ============================================================================

/// Builder for creating test TeamRole instances.
///
/// # Example
/// ```ignore
/// let role = TeamRoleBuilder::new(1, "engineer")
///     .description("A team role")
///     .notifications_enabled(true)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct TeamRoleBuilder {
    id: i64,
    tag: String,
    name: String,
    description: Option<String>,
    notifications_enabled: bool,
}

impl TeamRoleBuilder {
    /// Create a new builder. The name defaults to a title-cased tag.
    pub fn new(id: i64, tag: &str) -> Self {
        let mut chars = tag.chars();
        let name = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };
        Self {
            id,
            tag: tag.to_string(),
            name,
            description: None,
            notifications_enabled: false,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn notifications_enabled(mut self, enabled: bool) -> Self {
        self.notifications_enabled = enabled;
        self
    }

    /// Build the TeamRole.
    pub fn build(self) -> TeamRole {
        TeamRole {
            id: self.id,
            name: self.name,
            tag: self.tag,
            description: self.description,
            notifications_enabled: self.notifications_enabled,
        }
    }
}

/// The role used across the lifecycle tests.
pub fn engineer_role() -> TeamRole {
    TeamRoleBuilder::new(1, "engineer")
        .description("A team role")
        .notifications_enabled(true)
        .build()
}
