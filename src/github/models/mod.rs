//! Data models for issues, boards, and created draft items.
//!
//! Domain types live alongside the internal GraphQL deserialisation targets.
//! The response shapes are typed per owner kind so that board extraction is
//! an exhaustive match instead of a dynamic key lookup.

use serde::Deserialize;

#[cfg(feature = "test-support")]
pub mod test_support;

/// Snapshot of the triggering issue taken from the workflow event payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueSnapshot {
    /// Issue number within its repository.
    pub number: u64,
    /// Canonical HTML URL of the issue.
    pub html_url: Option<String>,
    /// Issue title.
    pub title: Option<String>,
    /// Raw issue body text.
    pub body: Option<String>,
}

/// Opaque node identifier of a resolved project board.
///
/// Produced by board resolution and consumed only by draft creation; never
/// persisted between runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardHandle(String);

impl BoardHandle {
    /// Wraps a node identifier returned by the API.
    #[must_use]
    pub fn new(node_id: impl Into<String>) -> Self {
        Self(node_id.into())
    }

    /// Borrow the node identifier.
    #[must_use]
    pub const fn node_id(&self) -> &str {
        self.0.as_str()
    }
}

/// Identifier of a draft item created on a project board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftItem(String);

impl DraftItem {
    /// Wraps a created item identifier returned by the API.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the item identifier.
    #[must_use]
    pub const fn id(&self) -> &str {
        self.0.as_str()
    }

    /// Consumes the wrapper, returning the owned identifier.
    #[must_use]
    pub fn into_id(self) -> String {
        self.0
    }
}

/// GraphQL response envelope: data plus any request-level errors.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct GraphQlEnvelope<T> {
    pub(crate) data: Option<T>,
    pub(crate) errors: Option<Vec<GraphQlErrorDetail>>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct GraphQlErrorDetail {
    pub(crate) message: String,
}

/// Board lookup response rooted at `organization(login:)`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct OrganizationBoardData {
    pub(crate) organization: Option<BoardOwnerNode>,
}

/// Board lookup response rooted at `user(login:)`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct UserBoardData {
    pub(crate) user: Option<BoardOwnerNode>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct BoardOwnerNode {
    #[serde(rename = "projectV2")]
    pub(crate) project_v2: Option<BoardNode>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct BoardNode {
    pub(crate) id: String,
}

/// `addProjectV2DraftIssue` mutation response.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct AddDraftIssueData {
    #[serde(rename = "addProjectV2DraftIssue")]
    pub(crate) add_draft_issue: Option<AddDraftIssuePayload>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct AddDraftIssuePayload {
    #[serde(rename = "projectItem")]
    pub(crate) project_item: Option<DraftItemNode>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct DraftItemNode {
    pub(crate) id: String,
}
