use anyhow::{Context, Result, anyhow};
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::config::Config;

const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// Thin client for the Admin GraphQL API. One endpoint, one credential,
/// no retries; every call is a single POST awaited to completion.
pub struct AdminClient {
    endpoint: String,
    token: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    data: Option<Value>,
    errors: Option<Vec<GraphqlError>>,
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    message: String,
}

impl AdminClient {
    pub fn new(config: &Config) -> Self {
        Self::with_endpoint(config.endpoint(), config.admin_token.clone())
    }

    /// Point the client at an explicit endpoint. Used when provisioning
    /// against a local stub or a staging proxy instead of the live store.
    pub fn with_endpoint(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            client: Client::new(),
        }
    }

    /// Executes one GraphQL document and returns the `data` payload.
    /// Non-success HTTP statuses and top-level GraphQL errors are fatal here;
    /// mutation-level `userErrors` are left for the caller to classify.
    pub async fn execute(&self, query: &str, variables: Value) -> Result<Value> {
        let resp = self
            .client
            .post(&self.endpoint)
            .header(ACCESS_TOKEN_HEADER, &self.token)
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await
            .context("Failed to reach the Admin API")?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(anyhow!("Admin API returned HTTP {}: {}", status, body));
        }

        let body: GraphqlResponse = resp
            .json()
            .await
            .context("Admin API response was not valid JSON")?;

        if let Some(errors) = body.errors.filter(|e| !e.is_empty()) {
            let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
            return Err(anyhow!("GraphQL query failed: {}", messages.join("; ")));
        }

        body.data
            .ok_or_else(|| anyhow!("Admin API response had no data payload"))
    }
}
