//! Unit tests for the GitHub linking module.

use mockall::predicate::always;
use rstest::rstest;

use super::{
    DraftItem, DraftLinker, FALLBACK_ITEM_TITLE, IssueSnapshot, LinkError, MockProjectGateway,
    OwnerKind, PersonalAccessToken, ProjectLocator,
};
use crate::github::models::BoardHandle;

fn sample_locator() -> ProjectLocator {
    ProjectLocator::parse("https://github.com/users/floholz/projects/1")
        .expect("sample locator should parse")
}

fn sample_issue() -> IssueSnapshot {
    IssueSnapshot {
        number: 42,
        html_url: Some("https://github.com/x/y/issues/42".to_owned()),
        title: Some("Bug".to_owned()),
        body: Some("It crashes".to_owned()),
    }
}

#[rstest]
fn parses_user_board_url_segments() {
    let locator = sample_locator();
    assert_eq!(locator.owner_kind(), OwnerKind::User, "owner kind mismatch");
    assert_eq!(locator.owner().as_str(), "floholz", "owner mismatch");
    assert_eq!(locator.number().get(), 1_u32, "number mismatch");
}

#[rstest]
fn parses_organization_board_url_segments() {
    let locator = ProjectLocator::parse("https://github.com/orgs/acme/projects/7")
        .expect("should parse organization board URL");
    assert_eq!(
        locator.owner_kind(),
        OwnerKind::Organization,
        "owner kind mismatch"
    );
    assert_eq!(locator.owner().as_str(), "acme", "owner mismatch");
    assert_eq!(locator.number().get(), 7_u32, "number mismatch");
}

#[rstest]
fn parses_board_url_with_trailing_view_path() {
    let locator = ProjectLocator::parse("https://github.com/orgs/acme/projects/7/views/2")
        .expect("should parse board URL with view suffix");
    assert_eq!(locator.number().get(), 7_u32, "number mismatch");
}

#[rstest]
fn parses_standard_github_api_base() {
    let locator = sample_locator();
    assert_eq!(
        locator.api_base().as_str(),
        "https://api.github.com/",
        "api base mismatch"
    );
}

#[rstest]
fn parses_enterprise_api_base() {
    let locator = ProjectLocator::parse("https://ghe.example.com/orgs/acme/projects/3")
        .expect("should parse enterprise URL");
    assert_eq!(
        locator.api_base().as_str(),
        "https://ghe.example.com/api",
        "enterprise api base mismatch"
    );
}

#[rstest]
fn rejects_missing_number() {
    let result = ProjectLocator::parse("https://github.com/orgs/acme/projects/");
    assert!(
        matches!(result, Err(LinkError::MissingPathSegments)),
        "expected MissingPathSegments, got {result:?}"
    );
}

#[rstest]
fn rejects_missing_projects_marker() {
    let result = ProjectLocator::parse("https://github.com/orgs/acme/7");
    assert!(
        matches!(result, Err(LinkError::MissingPathSegments)),
        "expected MissingPathSegments, got {result:?}"
    );
}

#[rstest]
fn rejects_non_numeric_number() {
    let result = ProjectLocator::parse("https://github.com/orgs/acme/projects/seven");
    assert!(
        matches!(result, Err(LinkError::InvalidBoardNumber)),
        "expected InvalidBoardNumber, got {result:?}"
    );
}

#[rstest]
fn rejects_zero_number() {
    let result = ProjectLocator::parse("https://github.com/orgs/acme/projects/0");
    assert!(
        matches!(result, Err(LinkError::InvalidBoardNumber)),
        "expected InvalidBoardNumber for zero, got {result:?}"
    );
}

#[rstest]
fn rejects_unsupported_owner_kind() {
    let result = ProjectLocator::parse("https://github.com/teams/acme/projects/1");
    assert!(
        matches!(
            result,
            Err(LinkError::UnsupportedOwnerKind { ref kind }) if kind == "teams"
        ),
        "expected UnsupportedOwnerKind naming 'teams', got {result:?}"
    );
}

#[rstest]
fn rejects_invalid_url() {
    let result = ProjectLocator::parse("orgs/acme/projects/1");
    assert!(
        matches!(result, Err(LinkError::InvalidUrl(_))),
        "expected InvalidUrl for malformed URL, got {result:?}"
    );
}

#[rstest]
fn rejects_empty_token() {
    let result = PersonalAccessToken::new(String::new());
    assert!(
        matches!(result, Err(LinkError::MissingToken)),
        "expected MissingToken, got {result:?}"
    );
}

#[rstest]
fn owner_kind_query_roots_are_exhaustive() {
    assert_eq!(OwnerKind::Organization.query_root(), "organization");
    assert_eq!(OwnerKind::User.query_root(), "user");
}

/// Sets up a mock gateway expecting the full resolve-then-create exchange.
fn setup_linking_gateway() -> MockProjectGateway {
    let mut gateway = MockProjectGateway::new();

    gateway
        .expect_resolve_board()
        .withf(|locator: &ProjectLocator| {
            locator.owner_kind() == OwnerKind::User
                && locator.owner().as_str() == "floholz"
                && locator.number().get() == 1
        })
        .times(1)
        .returning(|_| Ok(BoardHandle::new("PVT_abc")));

    gateway
        .expect_create_draft_item()
        .withf(|board: &BoardHandle, title: &str, body: &str| {
            let sections = [
                "> Issue: [#42](https://github.com/x/y/issues/42)",
                "## Description",
                "## Tasks",
                "---",
                "## Original Description",
            ];
            let in_order = sections
                .iter()
                .try_fold(0_usize, |from, section| {
                    body.get(from..)
                        .and_then(|rest| rest.find(section))
                        .map(|at| from + at + section.len())
                })
                .is_some();

            board.node_id() == "PVT_abc" && title == "Bug" && in_order
        })
        .times(1)
        .returning(|_, _, _| Ok(DraftItem::new("PVTI_1")));

    gateway
}

#[tokio::test]
async fn links_issue_through_gateway() {
    let locator = sample_locator();
    let gateway = setup_linking_gateway();

    let linker = DraftLinker::new(&gateway);
    let item = linker
        .link(&locator, &sample_issue())
        .await
        .expect("linking should succeed");

    assert_eq!(item.id(), "PVTI_1", "created item id mismatch");
}

#[tokio::test]
async fn board_not_found_short_circuits_creation() {
    let locator = sample_locator();
    let mut gateway = MockProjectGateway::new();

    gateway
        .expect_resolve_board()
        .with(always())
        .times(1)
        .returning(|_| {
            Err(LinkError::BoardNotFound {
                owner: "floholz".to_owned(),
                number: 1,
            })
        });
    gateway.expect_create_draft_item().times(0);

    let linker = DraftLinker::new(&gateway);
    let result = linker.link(&locator, &sample_issue()).await;

    assert!(
        matches!(result, Err(LinkError::BoardNotFound { .. })),
        "expected BoardNotFound, got {result:?}"
    );
}

#[tokio::test]
async fn missing_title_falls_back_to_sentinel() {
    let locator = sample_locator();
    let mut gateway = MockProjectGateway::new();

    gateway
        .expect_resolve_board()
        .with(always())
        .times(1)
        .returning(|_| Ok(BoardHandle::new("PVT_abc")));
    gateway
        .expect_create_draft_item()
        .withf(|_, title: &str, _| title == FALLBACK_ITEM_TITLE)
        .times(1)
        .returning(|_, _, _| Ok(DraftItem::new("PVTI_2")));

    let issue = IssueSnapshot {
        title: None,
        ..sample_issue()
    };

    let linker = DraftLinker::new(&gateway);
    let item = linker
        .link(&locator, &issue)
        .await
        .expect("linking should succeed");

    assert_eq!(item.id(), "PVTI_2", "created item id mismatch");
}
