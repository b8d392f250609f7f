use crate::client::JiraClient;
use crate::commands::prompt;
use crate::error::{JiraError, Result};
use crate::output;

/// Fetch branch: look one issue up by key and render it. Provider failures
/// are reported to the operator, not propagated.
pub async fn run(client: &JiraClient) -> Result<()> {
    let key = prompt("Enter the Jira issue key (e.g., SCRUM-2): ")?;

    match client.search_by_key(&key).await {
        Ok(Some(issue)) => {
            println!();
            output::print_issue(&issue);
        }
        Ok(None) => println!("No issue found for key {key}."),
        Err(JiraError::Api { status, body }) => {
            println!("Failed to fetch issue: {status} {body}");
        }
        Err(e) => return Err(e),
    }

    Ok(())
}
