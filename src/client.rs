use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::config::Config;
use crate::error::{JiraError, Result};
use crate::responses::{IssueBean, SearchResponse};
use crate::types::{Document, Issue};

const SEARCH_ENDPOINT: &str = "/rest/api/3/search";
const ISSUE_ENDPOINT: &str = "/rest/api/3/issue";

/// All created issues land in this project.
const PROJECT_KEY: &str = "SCRUM";

const SEARCH_FIELDS: &str = "summary,status,description,issuetype";

pub struct JiraClient {
    http: Client,
    base_url: String,
    username: String,
    api_token: String,
}

impl JiraClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: Client::new(),
            base_url: config.jira_url.clone(),
            username: config.username.clone(),
            api_token: config.api_token.clone(),
        }
    }

    /// Look one issue up by exact key. `Ok(None)` means the provider
    /// answered with an empty result set.
    pub async fn search_by_key(&self, key: &str) -> Result<Option<Issue>> {
        let response = self
            .http
            .get(format!("{}{}", self.base_url, SEARCH_ENDPOINT))
            .basic_auth(&self.username, Some(&self.api_token))
            .header(CONTENT_TYPE, "application/json")
            .query(&[
                ("jql", jql_for_key(key).as_str()),
                ("maxResults", "1"),
                ("fields", SEARCH_FIELDS),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        let parsed: SearchResponse = decode(response).await?;
        Ok(parsed.issues.into_iter().next().map(Issue::from))
    }

    /// Existence probe: the key lookup without field selection. A non-2xx
    /// probe response counts as absence; the create call that follows
    /// surfaces any real provider error.
    pub async fn exists(&self, key: &str) -> Result<bool> {
        let response = self
            .http
            .get(format!("{}{}", self.base_url, SEARCH_ENDPOINT))
            .basic_auth(&self.username, Some(&self.api_token))
            .header(CONTENT_TYPE, "application/json")
            .query(&[("jql", jql_for_key(key).as_str()), ("maxResults", "1")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Ok(false);
        }

        let parsed: SearchResponse = decode(response).await?;
        Ok(!parsed.issues.is_empty())
    }

    /// Create an issue under the fixed project key. Success is exactly 201;
    /// no retry and no idempotency key, so a caller-side retry can create
    /// duplicates.
    pub async fn create(
        &self,
        summary: &str,
        description: &str,
        issue_type: &str,
    ) -> Result<Issue> {
        let response = self
            .http
            .post(format!("{}{}", self.base_url, ISSUE_ENDPOINT))
            .basic_auth(&self.username, Some(&self.api_token))
            .header(CONTENT_TYPE, "application/json")
            .json(&create_payload(summary, description, issue_type))
            .send()
            .await?;

        if response.status() != StatusCode::CREATED {
            return Err(api_error(response).await);
        }

        let bean: IssueBean = decode(response).await?;
        Ok(Issue::from(bean))
    }
}

fn jql_for_key(key: &str) -> String {
    format!("key = {key}")
}

/// Build the create body. The payload carries no status field: Jira assigns
/// the initial workflow status server-side.
fn create_payload(summary: &str, description: &str, issue_type: &str) -> Value {
    json!({
        "fields": {
            "project": { "key": PROJECT_KEY },
            "summary": summary,
            "description": Document::from_text(description),
            "issuetype": { "name": issue_type },
        }
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| JiraError::UnexpectedShape(format!("{e}: {body}")))
}

async fn api_error(response: Response) -> JiraError {
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "<failed to read response body>".to_string());
    JiraError::Api { status, body }
}
