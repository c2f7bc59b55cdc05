//! GitHub project board linking.
//!
//! This module wraps Octocrab to parse project board URLs, validate personal
//! access tokens, resolve boards to their node identifiers, and create draft
//! items referencing the triggering issue. Errors are mapped into
//! user-friendly variants so that callers can surface precise failures
//! without exposing Octocrab internals.

pub mod body;
pub mod error;
pub mod gateway;
pub mod linker;
pub mod locator;
pub mod models;

pub use body::render_draft_body;
pub use error::LinkError;
pub use gateway::{OctocrabProjectGateway, ProjectGateway};
pub use linker::{DraftLinker, FALLBACK_ITEM_TITLE};
pub use locator::{BoardNumber, OwnerKind, PersonalAccessToken, ProjectLocator, ProjectOwner};
pub use models::{BoardHandle, DraftItem, IssueSnapshot};

#[cfg(test)]
pub use gateway::MockProjectGateway;

#[cfg(test)]
mod tests;
