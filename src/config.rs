//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.boardlink.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `BOARDLINK_PROJECT_URL`,
//!    `BOARDLINK_TOKEN` (or legacy `GITHUB_TOKEN`), `BOARDLINK_EVENT_PATH`
//!    (or the runner-provided `GITHUB_EVENT_PATH`)
//! 4. **Command-line arguments** – `--project-url`/`-p`, `--token`/`-t`,
//!    `--event-path`/`-e`
//!
//! # Configuration File
//!
//! Place `.boardlink.toml` in the current directory, home directory, or
//! XDG config directory with:
//!
//! ```toml
//! project_url = "https://github.com/orgs/acme/projects/7"
//! token = "ghp_example"
//! event_path = "/github/workflow/event.json"
//! ```

use std::env;

use camino::Utf8PathBuf;
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::github::error::LinkError;

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `BOARDLINK_PROJECT_URL` or `--project-url`: Project board URL
/// - `BOARDLINK_TOKEN`, `GITHUB_TOKEN`, or `--token`: Authentication token
/// - `BOARDLINK_EVENT_PATH`, `GITHUB_EVENT_PATH`, or `--event-path`: Path to
///   the triggering workflow event payload
///
/// # Example
///
/// ```no_run
/// use boardlink::BoardlinkConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = BoardlinkConfig::load().expect("failed to load configuration");
/// let project_url = config.require_project_url().expect("project URL required");
/// let token = config.resolve_token().expect("token required");
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "BOARDLINK",
    discovery(
        dotfile_name = ".boardlink.toml",
        config_file_name = "boardlink.toml",
        app_name = "boardlink"
    )
)]
pub struct BoardlinkConfig {
    /// GitHub project board URL to link the issue onto.
    ///
    /// Can be provided via:
    /// - CLI: `--project-url <URL>` or `-p <URL>`
    /// - Environment: `BOARDLINK_PROJECT_URL`
    /// - Config file: `project_url = "..."`
    #[ortho_config(cli_short = 'p')]
    pub project_url: Option<String>,

    /// Personal access token for GitHub API authentication.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `BOARDLINK_TOKEN` or `GITHUB_TOKEN` (legacy)
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// Path to the workflow event payload describing the triggering issue.
    ///
    /// Can be provided via:
    /// - CLI: `--event-path <PATH>` or `-e <PATH>`
    /// - Environment: `BOARDLINK_EVENT_PATH` or the runner-provided
    ///   `GITHUB_EVENT_PATH`
    /// - Config file: `event_path = "..."`
    #[ortho_config(cli_short = 'e')]
    pub event_path: Option<String>,
}

impl BoardlinkConfig {
    /// Resolves the token from configuration or the legacy `GITHUB_TOKEN`
    /// environment variable.
    ///
    /// For compatibility with workflow runners, if no token is provided via
    /// `BOARDLINK_TOKEN`, the CLI, or a configuration file, this method
    /// falls back to reading `GITHUB_TOKEN` from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::MissingToken`] when no token source provides a
    /// value.
    pub fn resolve_token(&self) -> Result<String, LinkError> {
        self.token
            .clone()
            .or_else(|| env::var("GITHUB_TOKEN").ok())
            .ok_or(LinkError::MissingToken)
    }

    /// Returns the project board URL or an error if missing.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::MissingProjectUrl`] when no URL is configured.
    pub fn require_project_url(&self) -> Result<&str, LinkError> {
        self.project_url
            .as_deref()
            .ok_or(LinkError::MissingProjectUrl)
    }

    /// Resolves the event payload path from configuration or the
    /// runner-provided `GITHUB_EVENT_PATH` environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::Configuration`] when no source provides a path.
    pub fn resolve_event_path(&self) -> Result<Utf8PathBuf, LinkError> {
        self.event_path
            .clone()
            .or_else(|| env::var("GITHUB_EVENT_PATH").ok())
            .map(Utf8PathBuf::from)
            .ok_or_else(|| LinkError::Configuration {
                message: "event payload path is required (use --event-path or -e)".to_owned(),
            })
    }
}
