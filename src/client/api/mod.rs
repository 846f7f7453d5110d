//! API trait definitions
//!
//! - [`TeamRolesApi`] - Team role CRUD operations

mod team_roles;

pub use team_roles::TeamRolesApi;
