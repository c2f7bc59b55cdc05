//! Gateways for resolving boards and creating draft items through Octocrab.
//!
//! This module provides a trait-based gateway for the two GraphQL calls the
//! linker performs. The trait-based design enables mocking in tests while
//! the Octocrab implementation handles real HTTP requests.

mod client;
mod error_mapping;

mod board;

pub use board::OctocrabProjectGateway;

use async_trait::async_trait;

use crate::github::error::LinkError;
use crate::github::locator::ProjectLocator;
use crate::github::models::{BoardHandle, DraftItem};

/// Gateway that can resolve project boards and create draft items on them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectGateway: Send + Sync {
    /// Resolve the board named by the locator to its opaque node identifier.
    async fn resolve_board(&self, locator: &ProjectLocator) -> Result<BoardHandle, LinkError>;

    /// Create a draft item with the given title and body on the board.
    async fn create_draft_item(
        &self,
        board: &BoardHandle,
        title: &str,
        body: &str,
    ) -> Result<DraftItem, LinkError>;
}
