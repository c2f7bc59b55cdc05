//! GitHub Actions workflow integration.
//!
//! Boardlink runs once per triggering event. This module covers the two
//! runner-facing surfaces: reading the event payload that describes the
//! triggering issue, and reporting the created item id as a step output so
//! later workflow steps can consume it.

use std::env;
use std::fs::OpenOptions;
use std::io::{self, Write};

use camino::Utf8Path;
use serde::Deserialize;

use crate::github::error::LinkError;
use crate::github::models::IssueSnapshot;

/// Step output key carrying the created draft item id.
pub const ITEM_ID_OUTPUT: &str = "project-v2-item-id";

/// Workflow event payload, reduced to the fields this tool reads.
#[derive(Debug, Clone, Deserialize)]
struct EventPayload {
    issue: Option<EventIssue>,
    repository: Option<EventRepository>,
}

#[derive(Debug, Clone, Deserialize)]
struct EventIssue {
    number: u64,
    html_url: Option<String>,
    title: Option<String>,
    body: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct EventRepository {
    full_name: Option<String>,
}

/// Reads the workflow event payload and extracts the triggering issue.
///
/// The repository name, when present, is surfaced only as a debug
/// diagnostic; it plays no part in board resolution.
///
/// # Errors
///
/// Returns [`LinkError::Io`] when the payload file cannot be read and
/// [`LinkError::EventPayload`] when it is not valid JSON or does not
/// describe an issue.
pub fn load_issue_snapshot(path: &Utf8Path) -> Result<IssueSnapshot, LinkError> {
    let raw = std::fs::read_to_string(path).map_err(|error| LinkError::Io {
        message: format!("failed to read event payload {path}: {error}"),
    })?;

    let payload: EventPayload =
        serde_json::from_str(&raw).map_err(|error| LinkError::EventPayload {
            message: format!("malformed event payload {path}: {error}"),
        })?;

    if let Some(repository) = &payload.repository {
        tracing::debug!(
            repository = repository.full_name.as_deref().unwrap_or("unknown"),
            "event repository"
        );
    }

    let issue = payload.issue.ok_or_else(|| LinkError::EventPayload {
        message: "event payload does not describe an issue".to_owned(),
    })?;

    Ok(IssueSnapshot {
        number: issue.number,
        html_url: issue.html_url,
        title: issue.title,
        body: issue.body,
    })
}

/// Formats a single step output assignment line.
fn output_line(name: &str, value: &str) -> String {
    format!("{name}={value}\n")
}

/// Reports a step output for later workflow steps.
///
/// When the runner provides a `GITHUB_OUTPUT` file, the assignment is
/// appended there; otherwise it is written to stdout.
///
/// # Errors
///
/// Returns [`LinkError::Io`] when the output destination cannot be written.
pub fn write_step_output(name: &str, value: &str) -> Result<(), LinkError> {
    let line = output_line(name, value);

    match env::var("GITHUB_OUTPUT") {
        Ok(path) if !path.trim().is_empty() => append_to_output_file(&path, &line),
        _ => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(line.as_bytes())
                .map_err(|error| LinkError::Io {
                    message: format!("failed to write step output: {error}"),
                })
        }
    }
}

fn append_to_output_file(path: &str, line: &str) -> Result<(), LinkError> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|error| LinkError::Io {
            message: format!("failed to open step output file {path}: {error}"),
        })?;

    file.write_all(line.as_bytes()).map_err(|error| LinkError::Io {
        message: format!("failed to append step output to {path}: {error}"),
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use camino::Utf8PathBuf;
    use rstest::rstest;
    use serde_json::json;
    use tempfile::NamedTempFile;

    use super::{ITEM_ID_OUTPUT, load_issue_snapshot, output_line, write_step_output};
    use crate::github::error::LinkError;

    fn write_payload(value: &serde_json::Value) -> (NamedTempFile, Utf8PathBuf) {
        let mut file = NamedTempFile::new().expect("should create temp payload");
        file.write_all(value.to_string().as_bytes())
            .expect("should write payload");
        let path = Utf8PathBuf::from_path_buf(file.path().to_path_buf())
            .expect("temp path should be UTF-8");
        (file, path)
    }

    #[rstest]
    fn extracts_issue_snapshot_from_payload() {
        let (_file, path) = write_payload(&json!({
            "issue": {
                "number": 42,
                "html_url": "https://github.com/x/y/issues/42",
                "title": "Bug",
                "body": "It crashes"
            },
            "repository": { "full_name": "x/y" }
        }));

        let snapshot = load_issue_snapshot(&path).expect("payload should load");

        assert_eq!(snapshot.number, 42, "number mismatch");
        assert_eq!(snapshot.title.as_deref(), Some("Bug"), "title mismatch");
        assert_eq!(
            snapshot.html_url.as_deref(),
            Some("https://github.com/x/y/issues/42"),
            "url mismatch"
        );
        assert_eq!(
            snapshot.body.as_deref(),
            Some("It crashes"),
            "body mismatch"
        );
    }

    #[rstest]
    fn tolerates_absent_optional_issue_fields() {
        let (_file, path) = write_payload(&json!({
            "issue": { "number": 7 }
        }));

        let snapshot = load_issue_snapshot(&path).expect("payload should load");

        assert_eq!(snapshot.number, 7, "number mismatch");
        assert!(snapshot.title.is_none(), "title should be absent");
        assert!(snapshot.body.is_none(), "body should be absent");
        assert!(snapshot.html_url.is_none(), "url should be absent");
    }

    #[rstest]
    fn payload_without_issue_is_an_event_error() {
        let (_file, path) = write_payload(&json!({
            "repository": { "full_name": "x/y" }
        }));

        let result = load_issue_snapshot(&path);
        assert!(
            matches!(result, Err(LinkError::EventPayload { .. })),
            "expected EventPayload, got {result:?}"
        );
    }

    #[rstest]
    fn malformed_payload_is_an_event_error() {
        let mut file = NamedTempFile::new().expect("should create temp payload");
        file.write_all(b"not json").expect("should write payload");
        let path = Utf8PathBuf::from_path_buf(file.path().to_path_buf())
            .expect("temp path should be UTF-8");

        let result = load_issue_snapshot(&path);
        assert!(
            matches!(result, Err(LinkError::EventPayload { .. })),
            "expected EventPayload, got {result:?}"
        );
    }

    #[rstest]
    fn missing_payload_file_is_an_io_error() {
        let result = load_issue_snapshot(Utf8PathBuf::from("/no/such/event.json").as_path());
        assert!(
            matches!(result, Err(LinkError::Io { .. })),
            "expected Io, got {result:?}"
        );
    }

    #[rstest]
    fn output_line_uses_assignment_format() {
        assert_eq!(
            output_line(ITEM_ID_OUTPUT, "PVTI_abc"),
            "project-v2-item-id=PVTI_abc\n",
            "output line format mismatch"
        );
    }

    #[rstest]
    fn step_output_appends_to_runner_file() {
        let file = NamedTempFile::new().expect("should create output file");
        let path = file
            .path()
            .to_str()
            .expect("temp path should be UTF-8")
            .to_owned();
        let _guard = env_lock::lock_env([("GITHUB_OUTPUT", Some(path.as_str()))]);

        write_step_output(ITEM_ID_OUTPUT, "PVTI_1").expect("first write should succeed");
        write_step_output("other", "value").expect("second write should succeed");

        let contents = std::fs::read_to_string(file.path()).expect("should read output file");
        assert_eq!(
            contents, "project-v2-item-id=PVTI_1\nother=value\n",
            "output file should accumulate assignments"
        );
    }
}
