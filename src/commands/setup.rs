use std::path::Path;

use crate::commands::prompt;
use crate::config::Config;
use crate::error::Result;

/// Interactive credential setup. Collects the three fields, validates them,
/// and overwrites any existing record at `config_path`.
pub fn run(config_path: &Path) -> Result<Config> {
    println!("Setup Jira Configuration");

    let jira_url = prompt("Enter your Jira URL (e.g., https://your-domain.atlassian.net/): ")?;
    let username = prompt("Enter your Jira username (email): ")?;
    let api_token = prompt("Enter your Jira API token: ")?;

    let config = Config::new(jira_url, username, api_token)?;
    config.save(config_path)?;
    println!("Configuration saved successfully.");

    Ok(config)
}
