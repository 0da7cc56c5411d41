//! Client configuration
//!
//! Where the REST API lives. Paths are resolved once, up front, so request
//! code never has to handle URL errors.

use reqwest::Url;

use crate::domain::RecipeId;
use crate::error::ConfigError;

/// Environment variable holding the API base URL
pub const API_URL_ENV: &str = "RECIPE_API_URL";

/// Base URL used when nothing is configured
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:3000";

const RECIPES_PATH: &str = "api/recipes";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: Url,
    recipes_url: Url,
}

impl ClientConfig {
    /// Build a config from a base URL such as `http://localhost:3000`.
    ///
    /// A base with a path prefix (`http://host/app`) keeps the prefix.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidUrl {
            url: base_url.to_string(),
            reason,
        };

        let mut base = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(invalid("not a hierarchical URL".to_string()));
        }
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let recipes_url = base.join(RECIPES_PATH).map_err(|e| invalid(e.to_string()))?;

        Ok(Self {
            base_url: base,
            recipes_url,
        })
    }

    /// Read the base URL from `RECIPE_API_URL`, falling back to the default
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(&url)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `GET`/`POST` target
    pub fn recipes_url(&self) -> Url {
        self.recipes_url.clone()
    }

    /// `PUT`/`DELETE` target for one recipe
    pub fn recipe_url(&self, id: RecipeId) -> Url {
        let mut url = self.recipes_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push(&id.to_string());
        }
        url
    }
}
