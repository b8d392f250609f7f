use crate::client::JiraClient;
use crate::commands::prompt;
use crate::error::{JiraError, Result};
use crate::output;

/// Create branch: probe for the key first, then collect the new issue's
/// fields and post it. The probe-then-create pair is not atomic against
/// concurrent creators; the server offers no locking primitive for it.
pub async fn run(client: &JiraClient) -> Result<()> {
    let key = prompt("Enter the Jira issue key (e.g., SCRUM-2): ")?;

    if client.exists(&key).await? {
        println!("\nIssue with key {key} already exists.");
        return Ok(());
    }

    let summary = prompt("Enter the summary for the new issue: ")?;
    // The create endpoint accepts no status field; the answer is collected
    // and dropped.
    let _status = prompt("Enter the status for the new issue (To Do/ In Progress/ Done): ")?;
    let description = prompt("Enter the description for the new issue: ")?;
    let issue_type = prompt("Enter the issue type (Task/Bug): ")?;

    match client.create(&summary, &description, &issue_type).await {
        Ok(issue) => {
            println!("\nIssue created successfully!");
            output::print_issue(&issue);
        }
        Err(JiraError::Api { status, body }) => {
            println!("Failed to create issue: {status} {body}");
        }
        Err(e) => return Err(e),
    }

    Ok(())
}
