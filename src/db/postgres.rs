use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::{EntityStore, clients, projects};
use crate::error::AppError;
use crate::models::{Client, NewClient, NewProject, Project, ProjectChanges};

/// Postgres-backed store. Each call maps to one statement in `db::clients`
/// or `db::projects`.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl EntityStore for PgStore {
    async fn list_clients(&self) -> Result<Vec<Client>, AppError> {
        Ok(clients::list(&self.pool).await?)
    }

    async fn find_client(&self, id: Uuid) -> Result<Option<Client>, AppError> {
        Ok(clients::find_by_id(&self.pool, id).await?)
    }

    async fn create_client(&self, client: NewClient) -> Result<Client, AppError> {
        Ok(clients::create(&self.pool, &client).await?)
    }

    async fn delete_client(&self, id: Uuid) -> Result<Option<Client>, AppError> {
        Ok(clients::delete(&self.pool, id).await?)
    }

    async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        Ok(projects::list(&self.pool).await?)
    }

    async fn list_projects_by_client(&self, client_id: Uuid) -> Result<Vec<Project>, AppError> {
        Ok(projects::list_by_client(&self.pool, client_id).await?)
    }

    async fn find_project(&self, id: Uuid) -> Result<Option<Project>, AppError> {
        Ok(projects::find_by_id(&self.pool, id).await?)
    }

    async fn create_project(&self, project: NewProject) -> Result<Project, AppError> {
        Ok(projects::create(&self.pool, &project).await?)
    }

    async fn update_project(
        &self,
        id: Uuid,
        changes: ProjectChanges,
    ) -> Result<Option<Project>, AppError> {
        if changes.is_empty() {
            return self.find_project(id).await;
        }
        Ok(projects::update(&self.pool, id, &changes).await?)
    }

    async fn delete_project(&self, id: Uuid) -> Result<Option<Project>, AppError> {
        Ok(projects::delete(&self.pool, id).await?)
    }
}
