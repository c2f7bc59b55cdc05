//! Boardlink library crate linking repository issues to GitHub Projects
//! (v2) boards.
//!
//! The library wraps Octocrab to parse project board URLs, validate tokens,
//! resolve boards to their opaque node identifiers over GraphQL, and create
//! draft items that reference the triggering issue, surfacing friendly
//! errors that can be displayed in the CLI.

pub mod config;
pub mod github;
pub mod workflow;

pub use config::BoardlinkConfig;
pub use github::{
    BoardHandle, DraftItem, DraftLinker, IssueSnapshot, LinkError, OctocrabProjectGateway,
    OwnerKind, PersonalAccessToken, ProjectGateway, ProjectLocator,
};
