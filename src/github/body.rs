//! Draft item body rendering.
//!
//! The draft body is a fixed sequence of markdown blocks rendered with the
//! `minijinja` template engine: a blockquote linking back to the source
//! issue, placeholder description and task sections for the board reader to
//! fill in, a divider, and the issue's original description carried over
//! verbatim. Rendering is deterministic: the same snapshot always produces
//! byte-identical output.

use minijinja::{Environment, context};

use super::error::LinkError;
use super::models::IssueSnapshot;

/// Fixed template for draft item bodies.
///
/// The issue body is inserted unescaped; draft bodies are markdown and the
/// original text must survive untouched.
const DRAFT_BODY_TEMPLATE: &str = "\
> Issue: [#{{ issue_number }}]({{ issue_url }})

## Description

_Add a description for this work item._

## Tasks

- [ ] ...
- [ ] ...
- [ ] ...

---

## Original Description

{{ original_body }}";

/// Renders the draft item body for the given issue snapshot.
///
/// Absent fields degrade gracefully: a missing HTML URL renders an empty
/// link target and a missing issue body leaves the original-description
/// section present but empty.
///
/// # Errors
///
/// Returns [`LinkError::Configuration`] if the embedded template fails to
/// compile or render.
pub fn render_draft_body(issue: &IssueSnapshot) -> Result<String, LinkError> {
    let mut env = Environment::new();

    // The issue body is raw markdown; never escape it.
    env.set_auto_escape_callback(|_| minijinja::AutoEscape::None);

    env.add_template("draft_body", DRAFT_BODY_TEMPLATE)
        .map_err(|error| LinkError::Configuration {
            message: format!("invalid draft body template: {error}"),
        })?;

    let ctx = context! {
        issue_number => issue.number,
        issue_url => issue.html_url.as_deref().unwrap_or_default(),
        original_body => issue.body.as_deref().unwrap_or_default(),
    };

    let template = env
        .get_template("draft_body")
        .map_err(|error| LinkError::Configuration {
            message: format!("failed to retrieve draft body template: {error}"),
        })?;

    template.render(ctx).map_err(|error| LinkError::Configuration {
        message: format!("draft body rendering failed: {error}"),
    })
}
