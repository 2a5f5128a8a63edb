//! `/api/profile`

use async_trait::async_trait;
use folio_core::{ApiResult, Profile, ProfileApi, UpdateProfile};
use tracing::instrument;

use crate::client::ApiClient;

const PROFILE: &str = "/api/profile";

#[async_trait]
impl ProfileApi for ApiClient {
    #[instrument(skip(self))]
    async fn get_profile(&self) -> ApiResult<Profile> {
        self.fetch(self.get(PROFILE)).await
    }

    #[instrument(skip(self, payload))]
    async fn update_profile(&self, payload: &UpdateProfile) -> ApiResult<Profile> {
        self.fetch(self.put(PROFILE).json(payload)).await
    }
}
