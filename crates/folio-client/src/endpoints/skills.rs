//! `/api/skills`

use async_trait::async_trait;
use folio_core::{
    ApiResult, CreateSkill, Skill, SkillApi, SkillCategories, SkillQuery, UpdateSkill,
};
use serde::de::IgnoredAny;
use tracing::instrument;

use crate::client::ApiClient;

const SKILLS: &str = "/api/skills";

#[async_trait]
impl SkillApi for ApiClient {
    #[instrument(skip(self))]
    async fn list_skills(&self, query: &SkillQuery) -> ApiResult<Vec<Skill>> {
        self.fetch(self.get(SKILLS).query(query)).await
    }

    #[instrument(skip(self))]
    async fn get_skill(&self, id: i32) -> ApiResult<Skill> {
        self.fetch(self.get(&format!("{SKILLS}/{id}"))).await
    }

    #[instrument(skip(self, payload), fields(name = %payload.name))]
    async fn create_skill(&self, payload: &CreateSkill) -> ApiResult<Skill> {
        self.fetch(self.post(SKILLS).json(payload)).await
    }

    #[instrument(skip(self, payload))]
    async fn update_skill(&self, id: i32, payload: &UpdateSkill) -> ApiResult<Skill> {
        self.fetch(self.put(&format!("{SKILLS}/{id}")).json(payload))
            .await
    }

    #[instrument(skip(self))]
    async fn delete_skill(&self, id: i32) -> ApiResult<()> {
        self.fetch::<IgnoredAny>(self.delete(&format!("{SKILLS}/{id}")))
            .await
            .map(|_| ())
    }

    #[instrument(skip(self))]
    async fn skill_categories(&self) -> ApiResult<SkillCategories> {
        self.fetch(self.get(&format!("{SKILLS}/categories"))).await
    }
}
