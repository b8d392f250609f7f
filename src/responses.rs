//! Wire-format types for the Jira REST API v3 responses this client reads.

use serde::Deserialize;

use crate::types::Document;

/// Result of a JQL search. The same shape serves both the field-selected
/// lookup and the existence probe.
#[derive(Deserialize, Debug)]
pub struct SearchResponse {
    #[serde(default)]
    pub issues: Vec<IssueBean>,
}

/// One issue as returned by search and by a successful create.
#[derive(Deserialize, Debug)]
pub struct IssueBean {
    pub key: String,
    pub fields: IssueFields,
}

#[derive(Deserialize, Debug)]
pub struct IssueFields {
    pub summary: String,
    pub status: NamedField,
    pub issuetype: NamedField,
    pub description: Option<Document>,
}

/// Jira nests display names one level down, e.g. `status: {name}`.
#[derive(Deserialize, Debug)]
pub struct NamedField {
    pub name: String,
}
