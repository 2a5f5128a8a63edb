//! `/api/projects`

use async_trait::async_trait;
use folio_core::{
    ApiResult, CreateProject, Page, Project, ProjectApi, ProjectQuery, UpdateProject,
};
use serde::de::IgnoredAny;
use tracing::instrument;

use crate::client::ApiClient;

const PROJECTS: &str = "/api/projects";

#[async_trait]
impl ProjectApi for ApiClient {
    #[instrument(skip(self))]
    async fn list_projects(&self, query: &ProjectQuery) -> ApiResult<Page<Project>> {
        let decoded = self
            .execute::<Vec<Project>>(self.get(PROJECTS).query(query))
            .await?;

        Ok(Page {
            items: decoded.data,
            pagination: decoded.pagination,
        })
    }

    #[instrument(skip(self))]
    async fn get_project(&self, id: i32) -> ApiResult<Project> {
        self.fetch(self.get(&format!("{PROJECTS}/{id}"))).await
    }

    #[instrument(skip(self, payload), fields(title = %payload.title))]
    async fn create_project(&self, payload: &CreateProject) -> ApiResult<Project> {
        self.fetch(self.post(PROJECTS).json(payload)).await
    }

    #[instrument(skip(self, payload))]
    async fn update_project(&self, id: i32, payload: &UpdateProject) -> ApiResult<Project> {
        self.fetch(self.put(&format!("{PROJECTS}/{id}")).json(payload))
            .await
    }

    #[instrument(skip(self))]
    async fn delete_project(&self, id: i32) -> ApiResult<()> {
        self.fetch::<IgnoredAny>(self.delete(&format!("{PROJECTS}/{id}")))
            .await
            .map(|_| ())
    }
}
