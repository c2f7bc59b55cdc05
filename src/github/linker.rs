//! High-level linking facade used by the CLI.

use super::body::render_draft_body;
use super::error::LinkError;
use super::gateway::ProjectGateway;
use super::locator::ProjectLocator;
use super::models::{DraftItem, IssueSnapshot};

/// Title used when the triggering issue carries no title of its own.
pub const FALLBACK_ITEM_TITLE: &str = "Unknown Issue";

/// Creates a draft item for an issue on a project board using a gateway.
pub struct DraftLinker<'client, Gateway>
where
    Gateway: ProjectGateway,
{
    client: &'client Gateway,
}

impl<'client, Gateway> DraftLinker<'client, Gateway>
where
    Gateway: ProjectGateway,
{
    /// Create a new linker using the provided gateway.
    #[must_use]
    pub const fn new(client: &'client Gateway) -> Self {
        Self { client }
    }

    /// Resolve the board, render the draft body, and create the draft item.
    ///
    /// The stages run strictly in sequence; the first failure short-circuits
    /// the rest. A failed creation leaves no board-side state behind, so no
    /// cleanup is attempted.
    ///
    /// # Errors
    ///
    /// Propagates any failure from body rendering or the underlying gateway,
    /// including GitHub authentication errors and network problems.
    pub async fn link(
        &self,
        locator: &ProjectLocator,
        issue: &IssueSnapshot,
    ) -> Result<DraftItem, LinkError> {
        let board = self.client.resolve_board(locator).await?;
        let body = render_draft_body(issue)?;
        let title = issue.title.as_deref().unwrap_or(FALLBACK_ITEM_TITLE);
        self.client.create_draft_item(&board, title, &body).await
    }
}
