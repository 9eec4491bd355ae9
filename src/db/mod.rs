pub mod clients;
pub mod memory;
pub mod postgres;
pub mod projects;

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{Client, NewClient, NewProject, Project, ProjectChanges};

pub use memory::MemoryStore;
pub use postgres::PgStore;

pub type SharedStore = Arc<dyn EntityStore>;

/// The two collections behind the API. Every method is a single round-trip;
/// lookups that miss return `Ok(None)` rather than an error.
#[async_trait]
pub trait EntityStore: Send + Sync {
    async fn list_clients(&self) -> Result<Vec<Client>, AppError>;
    async fn find_client(&self, id: Uuid) -> Result<Option<Client>, AppError>;
    async fn create_client(&self, client: NewClient) -> Result<Client, AppError>;
    /// Removes the client and returns its last state. Projects are left alone.
    async fn delete_client(&self, id: Uuid) -> Result<Option<Client>, AppError>;

    async fn list_projects(&self) -> Result<Vec<Project>, AppError>;
    async fn list_projects_by_client(&self, client_id: Uuid) -> Result<Vec<Project>, AppError>;
    async fn find_project(&self, id: Uuid) -> Result<Option<Project>, AppError>;
    async fn create_project(&self, project: NewProject) -> Result<Project, AppError>;
    /// Applies only the supplied fields and returns the updated record.
    async fn update_project(
        &self,
        id: Uuid,
        changes: ProjectChanges,
    ) -> Result<Option<Project>, AppError>;
    async fn delete_project(&self, id: Uuid) -> Result<Option<Project>, AppError>;
}
