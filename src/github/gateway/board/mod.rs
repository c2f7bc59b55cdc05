//! Octocrab implementation of the project gateway over the GraphQL API.
//!
//! Owner name, board number, and draft inputs travel as bound GraphQL
//! variables rather than being interpolated into the documents. Each owner
//! kind has its own query document and its own typed response shape, so
//! extraction is an exhaustive match.

use async_trait::async_trait;
use octocrab::Octocrab;
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::github::error::LinkError;
use crate::github::locator::{OwnerKind, PersonalAccessToken, ProjectLocator};
use crate::github::models::{
    AddDraftIssueData, BoardHandle, BoardNode, DraftItem, GraphQlEnvelope, OrganizationBoardData,
    UserBoardData,
};

use super::ProjectGateway;
use super::client::build_octocrab_client;
use super::error_mapping::map_octocrab_error;

const ORGANIZATION_BOARD_QUERY: &str = "\
query boardNodeId($ownerName: String!, $boardNumber: Int!) {
    organization(login: $ownerName) {
        projectV2(number: $boardNumber) {
            id
        }
    }
}";

const USER_BOARD_QUERY: &str = "\
query boardNodeId($ownerName: String!, $boardNumber: Int!) {
    user(login: $ownerName) {
        projectV2(number: $boardNumber) {
            id
        }
    }
}";

const CREATE_DRAFT_ITEM_MUTATION: &str = "\
mutation createDraftItem($projectId: ID!, $itemTitle: String!, $itemBody: String!) {
    addProjectV2DraftIssue(input: {projectId: $projectId, title: $itemTitle, body: $itemBody}) {
        projectItem {
            id
        }
    }
}";

/// Octocrab-backed project gateway.
pub struct OctocrabProjectGateway {
    client: Octocrab,
}

impl OctocrabProjectGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds an Octocrab client for the given token and project locator.
    ///
    /// # Errors
    ///
    /// Returns `LinkError::InvalidUrl` when the base URI cannot be parsed or
    /// `LinkError::Api` when Octocrab fails to construct a client.
    pub fn for_token(
        token: &PersonalAccessToken,
        locator: &ProjectLocator,
    ) -> Result<Self, LinkError> {
        let octocrab = build_octocrab_client(token, locator.api_base().as_str())?;
        Ok(Self::new(octocrab))
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        operation: &str,
        payload: &serde_json::Value,
    ) -> Result<Option<T>, LinkError> {
        let envelope: GraphQlEnvelope<T> = self
            .client
            .graphql(payload)
            .await
            .map_err(|error| map_octocrab_error(operation, &error))?;

        graphql_data(operation, envelope)
    }
}

#[async_trait]
impl ProjectGateway for OctocrabProjectGateway {
    async fn resolve_board(&self, locator: &ProjectLocator) -> Result<BoardHandle, LinkError> {
        tracing::debug!(
            owner = locator.owner().as_str(),
            number = locator.number().get(),
            root = locator.owner_kind().query_root(),
            "resolving project board"
        );

        let payload = |document: &str| {
            json!({
                "query": document,
                "variables": {
                    "ownerName": locator.owner().as_str(),
                    "boardNumber": locator.number().get(),
                },
            })
        };

        let board: Option<BoardNode> = match locator.owner_kind() {
            OwnerKind::Organization => self
                .execute::<OrganizationBoardData>(
                    "resolve board",
                    &payload(ORGANIZATION_BOARD_QUERY),
                )
                .await?
                .and_then(|data| data.organization)
                .and_then(|node| node.project_v2),
            OwnerKind::User => self
                .execute::<UserBoardData>("resolve board", &payload(USER_BOARD_QUERY))
                .await?
                .and_then(|data| data.user)
                .and_then(|node| node.project_v2),
        };

        board
            .map(|node| BoardHandle::new(node.id))
            .ok_or_else(|| LinkError::BoardNotFound {
                owner: locator.owner().as_str().to_owned(),
                number: locator.number().get(),
            })
    }

    async fn create_draft_item(
        &self,
        board: &BoardHandle,
        title: &str,
        body: &str,
    ) -> Result<DraftItem, LinkError> {
        tracing::debug!(board = board.node_id(), title, "creating draft item");

        let payload = json!({
            "query": CREATE_DRAFT_ITEM_MUTATION,
            "variables": {
                "projectId": board.node_id(),
                "itemTitle": title,
                "itemBody": body,
            },
        });

        self.execute::<AddDraftIssueData>("create draft item", &payload)
            .await?
            .and_then(|data| data.add_draft_issue)
            .and_then(|response| response.project_item)
            .map(|item| DraftItem::new(item.id))
            .ok_or_else(|| LinkError::DraftCreationFailed {
                message: "mutation response did not include the created item id".to_owned(),
            })
    }
}

/// Unwraps a GraphQL envelope, surfacing request-level errors.
fn graphql_data<T>(operation: &str, envelope: GraphQlEnvelope<T>) -> Result<Option<T>, LinkError> {
    if let Some(errors) = envelope.errors {
        if !errors.is_empty() {
            let joined = errors
                .iter()
                .map(|error| error.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(LinkError::Api {
                message: format!("{operation} failed: {joined}"),
            });
        }
    }

    Ok(envelope.data)
}
