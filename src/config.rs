use anyhow::{Result, anyhow};

pub const STORE_DOMAIN_VAR: &str = "SHOPIFY_STORE_DOMAIN";
pub const ADMIN_TOKEN_VAR: &str = "SHOPIFY_ADMIN_TOKEN";
pub const API_VERSION_VAR: &str = "SHOPIFY_API_VERSION";

/// Connection parameters for the Admin API, resolved once at startup and
/// passed by reference from there on.
#[derive(Debug, Clone)]
pub struct Config {
    pub store_domain: String,
    pub admin_token: String,
    pub api_version: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from an arbitrary lookup so tests don't have to
    /// touch process-wide environment state. Blank values count as missing.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let fetch = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let store_domain = fetch(STORE_DOMAIN_VAR);
        let admin_token = fetch(ADMIN_TOKEN_VAR);
        let api_version = fetch(API_VERSION_VAR);

        let mut missing = Vec::new();
        if store_domain.is_none() {
            missing.push(STORE_DOMAIN_VAR);
        }
        if admin_token.is_none() {
            missing.push(ADMIN_TOKEN_VAR);
        }
        if api_version.is_none() {
            missing.push(API_VERSION_VAR);
        }

        match (store_domain, admin_token, api_version) {
            (Some(store_domain), Some(admin_token), Some(api_version)) => Ok(Self {
                store_domain,
                admin_token,
                api_version,
            }),
            _ => Err(anyhow!(
                "Missing required environment variables: {}",
                missing.join(", ")
            )),
        }
    }

    /// GraphQL endpoint for this store and API version.
    pub fn endpoint(&self) -> String {
        format!(
            "https://{}/admin/api/{}/graphql.json",
            self.store_domain, self.api_version
        )
    }
}
