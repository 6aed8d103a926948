//! API configuration resolved at build time.
//!
//! The WASM bundle has no process environment at runtime, so overrides are
//! baked in with `option_env!` when the crate is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001/api/v1";
pub const DEFAULT_TOKEN_STORAGE_KEY: &str = "autorisationToken";

/// Where the REST API lives and where the session token is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub token_storage_key: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::resolve(None, None)
    }
}

impl ApiConfig {
    /// Build config from variables captured at compile time.
    ///
    /// Optional:
    /// - `BANK_PORTAL_API_URL`: REST base URL (default `http://localhost:3001/api/v1`)
    /// - `BANK_PORTAL_TOKEN_KEY`: browser storage key for the session token
    pub fn from_build_env() -> Self {
        Self::resolve(option_env!("BANK_PORTAL_API_URL"), option_env!("BANK_PORTAL_TOKEN_KEY"))
    }

    /// Apply raw overrides on top of the defaults. Blank values are ignored.
    pub fn resolve(api_url: Option<&str>, token_key: Option<&str>) -> Self {
        let base_url = non_blank(api_url)
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        let token_storage_key = non_blank(token_key)
            .unwrap_or(DEFAULT_TOKEN_STORAGE_KEY)
            .to_owned();
        Self { base_url, token_storage_key }
    }

    /// Absolute URL for an API path such as `/user/login`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}
