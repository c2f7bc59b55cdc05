//! URL parsing and identity wrappers for project board linking.

use url::Url;

use super::error::LinkError;

/// Whether a project board belongs to an organisation or a user account.
///
/// The owner kind decides which root field resolves the board in the GraphQL
/// query, so each variant carries its own query document and response shape
/// downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerKind {
    /// Board owned by an organisation (`/orgs/<owner>/projects/<number>`).
    Organization,
    /// Board owned by a user account (`/users/<owner>/projects/<number>`).
    User,
}

impl OwnerKind {
    /// Maps the owner-kind path segment to its variant.
    ///
    /// # Errors
    ///
    /// Returns `LinkError::UnsupportedOwnerKind` naming the segment when it
    /// is neither `orgs` nor `users`.
    pub(crate) fn from_segment(segment: &str) -> Result<Self, LinkError> {
        match segment {
            "orgs" => Ok(Self::Organization),
            "users" => Ok(Self::User),
            other => Err(LinkError::UnsupportedOwnerKind {
                kind: other.to_owned(),
            }),
        }
    }

    /// GraphQL root field that resolves boards for this owner kind.
    #[must_use]
    pub const fn query_root(self) -> &'static str {
        match self {
            Self::Organization => "organization",
            Self::User => "user",
        }
    }
}

/// Board owner wrapper to avoid stringly typed parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectOwner(String);

impl ProjectOwner {
    pub(crate) fn new(value: &str) -> Result<Self, LinkError> {
        if value.is_empty() {
            return Err(LinkError::MissingPathSegments);
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the owner value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Project board number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardNumber(u32);

impl BoardNumber {
    pub(crate) const fn new(value: u32) -> Result<Self, LinkError> {
        if value == 0 {
            return Err(LinkError::InvalidBoardNumber);
        }
        Ok(Self(value))
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

/// Personal access token wrapper enforcing presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns `LinkError::MissingToken` when the supplied string is blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, LinkError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(LinkError::MissingToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PersonalAccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

/// Derives the GitHub API base URL from a host string.
///
/// Octocrab appends the `graphql` route to this base, so enterprise hosts map
/// to `<scheme>://<host>/api` (the GHES GraphQL root is `/api/graphql`).
fn derive_api_base_from_host(
    scheme: &str,
    host: &str,
    port: Option<u16>,
) -> Result<Url, LinkError> {
    if host.eq_ignore_ascii_case("github.com") {
        Url::parse("https://api.github.com")
            .map_err(|error| LinkError::InvalidUrl(error.to_string()))
    } else {
        let authority = if host.contains(':') {
            format!("[{host}]")
        } else {
            host.to_owned()
        };
        let mut api_url = Url::parse(&format!("{scheme}://{authority}"))
            .map_err(|error| LinkError::InvalidUrl(error.to_string()))?;

        api_url
            .set_port(port)
            .map_err(|()| LinkError::InvalidUrl("invalid port".to_owned()))?;
        api_url.set_path("api");
        Ok(api_url)
    }
}

/// Derives the GitHub API base URL from a parsed URL.
fn derive_api_base(parsed: &Url) -> Result<Url, LinkError> {
    let host = parsed
        .host_str()
        .ok_or_else(|| LinkError::InvalidUrl("URL must include a host".to_owned()))?;

    derive_api_base_from_host(parsed.scheme(), host, parsed.port())
}

/// Parsed project board URL with owner kind, owner, number, and derived API
/// base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLocator {
    api_base: Url,
    owner_kind: OwnerKind,
    owner: ProjectOwner,
    number: BoardNumber,
}

impl ProjectLocator {
    /// Parses a GitHub project board URL in the form
    /// `https://github.com/{orgs|users}/<owner>/projects/<number>`.
    ///
    /// The path is anchored on the `projects` marker, so enterprise hosts
    /// and trailing view segments (`.../projects/7/views/1`) parse as well.
    ///
    /// # Errors
    ///
    /// Returns `LinkError::InvalidUrl` when parsing fails,
    /// `MissingPathSegments` when the path does not carry
    /// `<kind>/<owner>/projects/<number>`, `UnsupportedOwnerKind` when the
    /// kind segment is neither `orgs` nor `users`, and `InvalidBoardNumber`
    /// when the number segment is not a positive integer.
    pub fn parse(input: &str) -> Result<Self, LinkError> {
        let parsed =
            Url::parse(input).map_err(|error| LinkError::InvalidUrl(error.to_string()))?;

        let segments: Vec<&str> = parsed
            .path_segments()
            .ok_or(LinkError::MissingPathSegments)?
            .collect();

        let marker = segments
            .iter()
            .enumerate()
            .find_map(|(index, segment)| (index >= 2 && *segment == "projects").then_some(index))
            .ok_or(LinkError::MissingPathSegments)?;

        let kind_segment = segments
            .get(marker - 2)
            .ok_or(LinkError::MissingPathSegments)?;
        let owner_segment = segments
            .get(marker - 1)
            .ok_or(LinkError::MissingPathSegments)?;
        let number_segment = segments
            .get(marker + 1)
            .ok_or(LinkError::MissingPathSegments)?;

        if number_segment.is_empty() {
            return Err(LinkError::MissingPathSegments);
        }

        let owner_kind = OwnerKind::from_segment(kind_segment)?;
        let owner = ProjectOwner::new(owner_segment)?;
        let number = number_segment
            .parse::<u32>()
            .map_err(|_| LinkError::InvalidBoardNumber)
            .and_then(BoardNumber::new)?;

        let api_base = derive_api_base(&parsed)?;

        Ok(Self {
            api_base,
            owner_kind,
            owner,
            number,
        })
    }

    /// API base URL derived from the project board host.
    #[must_use]
    pub const fn api_base(&self) -> &Url {
        &self.api_base
    }

    /// Owner kind extracted from the URL path.
    #[must_use]
    pub const fn owner_kind(&self) -> OwnerKind {
        self.owner_kind
    }

    /// Board owner.
    #[must_use]
    pub const fn owner(&self) -> &ProjectOwner {
        &self.owner
    }

    /// Board number.
    #[must_use]
    pub const fn number(&self) -> BoardNumber {
        self.number
    }
}
