//! Error types exposed by the board linking layer.

use thiserror::Error;

/// Errors surfaced while parsing input or communicating with GitHub.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LinkError {
    /// The configuration did not include a project board URL.
    #[error("project URL is required")]
    MissingProjectUrl,

    /// The provided URL could not be parsed.
    #[error("project URL is invalid: {0}")]
    InvalidUrl(String),

    /// The project path is incomplete.
    #[error("project URL must match /orgs-or-users/<owner>/projects/<number>")]
    MissingPathSegments,

    /// The board number is not a valid integer.
    #[error("project number must be a positive integer")]
    InvalidBoardNumber,

    /// The owner-kind path segment is not one of the recognised values.
    #[error("unsupported owner kind: {kind}. Must be one of 'orgs' or 'users'")]
    UnsupportedOwnerKind {
        /// The path segment that selects neither organisations nor users.
        kind: String,
    },

    /// The authentication token was missing.
    #[error("personal access token is required")]
    MissingToken,

    /// The board lookup succeeded but yielded no node identifier.
    #[error("project board not found for {owner} number {number}")]
    BoardNotFound {
        /// Owner whose boards were searched.
        owner: String,
        /// Board number requested in the project URL.
        number: u32,
    },

    /// The creation mutation succeeded but returned no item identifier.
    #[error("draft item creation failed: {message}")]
    DraftCreationFailed {
        /// Detail describing the malformed mutation response.
        message: String,
    },

    /// The authentication token was rejected by GitHub.
    #[error("GitHub rejected the token: {message}")]
    Authentication {
        /// GitHub error message returned with the 401/403 response.
        message: String,
    },

    /// GitHub returned a non-authentication API error.
    #[error("GitHub API error: {message}")]
    Api {
        /// Response body from GitHub describing the failure.
        message: String,
    },

    /// Networking failed while calling GitHub.
    #[error("network error talking to GitHub: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// The workflow event payload was missing or malformed.
    #[error("event payload: {message}")]
    EventPayload {
        /// Details about the payload failure.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },
}
