//! Octocrab client construction for the project gateway.

use http::Uri;
use octocrab::Octocrab;

use crate::github::error::LinkError;
use crate::github::locator::PersonalAccessToken;

use super::error_mapping::map_octocrab_error;

/// Builds an Octocrab client for the given token and API base URL.
///
/// Octocrab appends the `graphql` route to the base when executing GraphQL
/// requests, so the base must be the API root rather than the GraphQL
/// endpoint itself.
///
/// # Errors
///
/// Returns `LinkError::InvalidUrl` when the base URI cannot be parsed or
/// `LinkError::Api` when Octocrab fails to construct a client.
pub(super) fn build_octocrab_client(
    token: &PersonalAccessToken,
    api_base: &str,
) -> Result<Octocrab, LinkError> {
    let base_uri: Uri = api_base
        .parse::<Uri>()
        .map_err(|error| LinkError::InvalidUrl(error.to_string()))?;

    Octocrab::builder()
        .personal_token(token.as_ref())
        .base_uri(base_uri)
        .map_err(|error| LinkError::Api {
            message: format!("build client failed: {error}"),
        })?
        .build()
        .map_err(|error| map_octocrab_error("build client", &error))
}
