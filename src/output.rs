use colored::Colorize;

use crate::types::Issue;

/// Render one issue as the card the operator sees after fetch or create.
pub fn print_issue(issue: &Issue) {
    println!("Issue Key: {}", issue.key);
    println!("Summary: {}", issue.summary);
    println!("Status: {}", status_colored(&issue.status));
    println!("Issue Type: {}", issue.issue_type);
    println!("Description: {}", issue.description);
}

/// Color a workflow status by name, plain text for anything unrecognized.
pub fn status_colored(status: &str) -> String {
    let lower = status.to_lowercase();
    if lower.contains("done") || lower.contains("complete") || lower.contains("closed") {
        status.green().to_string()
    } else if lower.contains("progress") || lower.contains("started") {
        status.blue().to_string()
    } else if lower.contains("to do") || lower.contains("backlog") {
        status.bright_black().to_string()
    } else {
        status.to_string()
    }
}
