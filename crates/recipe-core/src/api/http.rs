//! HTTP implementation of [`RecipeApi`] on top of reqwest.
//!
//! Works unchanged on wasm32 (reqwest delegates to `fetch`) and natively.

use async_trait::async_trait;
use reqwest::{Client, Response};

use super::traits::{RecipeApi, RecipeEnvelope};
use crate::config::ClientConfig;
use crate::domain::{Draft, Recipe, RecipeId};
use crate::error::{ApiError, ApiResult};

#[derive(Debug, Clone)]
pub struct HttpRecipeApi {
    client: Client,
    config: ClientConfig,
}

impl HttpRecipeApi {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: ClientConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

/// Any non-2xx status is a rejection, whatever the code
fn check_status(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Rejected {
            status: status.as_u16(),
        })
    }
}

#[async_trait(?Send)]
impl RecipeApi for HttpRecipeApi {
    async fn list(&self) -> ApiResult<Vec<Recipe>> {
        let response = self.client.get(self.config.recipes_url()).send().await?;
        let recipes = check_status(response)?.json::<Vec<Recipe>>().await?;
        log::debug!("fetched {} recipes", recipes.len());
        Ok(recipes)
    }

    async fn create(&self, draft: &Draft) -> ApiResult<Recipe> {
        let response = self
            .client
            .post(self.config.recipes_url())
            .json(draft)
            .send()
            .await?;
        let envelope = check_status(response)?.json::<RecipeEnvelope>().await?;
        Ok(envelope.recipe)
    }

    async fn update(&self, recipe: &Recipe) -> ApiResult<Recipe> {
        let response = self
            .client
            .put(self.config.recipe_url(recipe.id))
            .json(recipe)
            .send()
            .await?;
        let envelope = check_status(response)?.json::<RecipeEnvelope>().await?;
        Ok(envelope.recipe)
    }

    async fn delete(&self, id: RecipeId) -> ApiResult<()> {
        let response = self.client.delete(self.config.recipe_url(id)).send().await?;
        check_status(response)?;
        Ok(())
    }
}
