//! Test helpers for constructing `IssueSnapshot` fixtures.
//!
//! These builders keep test setup consistent across the unit and behavioural
//! suites.
//!
//! # Examples
//!
//! ```
//! use boardlink::github::models::test_support::{bare_issue, issue_snapshot};
//!
//! // A fully populated snapshot
//! let issue = issue_snapshot(42, "Bug", "It crashes");
//!
//! // A snapshot with every optional field absent
//! let minimal = bare_issue(7);
//! ```

use super::IssueSnapshot;

/// Constructs a fully populated `IssueSnapshot`.
///
/// The HTML URL follows the `https://github.com/x/y/issues/<number>` shape.
///
/// # Examples
///
/// ```
/// use boardlink::github::models::test_support::issue_snapshot;
///
/// let issue = issue_snapshot(42, "Bug", "It crashes");
/// assert_eq!(issue.number, 42);
/// assert_eq!(issue.title.as_deref(), Some("Bug"));
/// assert_eq!(
///     issue.html_url.as_deref(),
///     Some("https://github.com/x/y/issues/42")
/// );
/// ```
#[must_use]
pub fn issue_snapshot(number: u64, title: &str, body: &str) -> IssueSnapshot {
    IssueSnapshot {
        number,
        html_url: Some(format!("https://github.com/x/y/issues/{number}")),
        title: Some(title.to_owned()),
        body: Some(body.to_owned()),
    }
}

/// Constructs an `IssueSnapshot` with every optional field absent.
///
/// # Examples
///
/// ```
/// use boardlink::github::models::test_support::bare_issue;
///
/// let issue = bare_issue(7);
/// assert_eq!(issue.number, 7);
/// assert!(issue.title.is_none());
/// assert!(issue.body.is_none());
/// assert!(issue.html_url.is_none());
/// ```
#[must_use]
pub fn bare_issue(number: u64) -> IssueSnapshot {
    IssueSnapshot {
        number,
        ..Default::default()
    }
}
