use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use super::EntityStore;
use crate::error::AppError;
use crate::models::{Client, NewClient, NewProject, Project, ProjectChanges};

/// Process-local store used by tests and `CLIENTELE_STORE=memory`.
///
/// Listings come back in creation order, matching the Postgres queries.
#[derive(Default)]
pub struct MemoryStore {
    clients: DashMap<Uuid, Client>,
    projects: DashMap<Uuid, Project>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EntityStore for MemoryStore {
    async fn list_clients(&self) -> Result<Vec<Client>, AppError> {
        let mut clients: Vec<Client> = self.clients.iter().map(|e| e.value().clone()).collect();
        clients.sort_by_key(|c| (c.created_at, c.id));
        Ok(clients)
    }

    async fn find_client(&self, id: Uuid) -> Result<Option<Client>, AppError> {
        Ok(self.clients.get(&id).map(|entry| entry.value().clone()))
    }

    async fn create_client(&self, client: NewClient) -> Result<Client, AppError> {
        let now = Utc::now();
        let client = Client {
            id: Uuid::now_v7(),
            name: client.name,
            email: client.email,
            phone: client.phone,
            created_at: now,
            updated_at: now,
        };
        self.clients.insert(client.id, client.clone());
        Ok(client)
    }

    async fn delete_client(&self, id: Uuid) -> Result<Option<Client>, AppError> {
        Ok(self.clients.remove(&id).map(|(_, client)| client))
    }

    async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        let mut projects: Vec<Project> = self.projects.iter().map(|e| e.value().clone()).collect();
        projects.sort_by_key(|p| (p.created_at, p.id));
        Ok(projects)
    }

    async fn list_projects_by_client(&self, client_id: Uuid) -> Result<Vec<Project>, AppError> {
        let mut projects: Vec<Project> = self
            .projects
            .iter()
            .filter(|e| e.client_id == client_id)
            .map(|e| e.value().clone())
            .collect();
        projects.sort_by_key(|p| (p.created_at, p.id));
        Ok(projects)
    }

    async fn find_project(&self, id: Uuid) -> Result<Option<Project>, AppError> {
        Ok(self.projects.get(&id).map(|entry| entry.value().clone()))
    }

    async fn create_project(&self, project: NewProject) -> Result<Project, AppError> {
        let now = Utc::now();
        let project = Project {
            id: Uuid::now_v7(),
            client_id: project.client_id,
            name: project.name,
            description: project.description,
            status: project.status,
            created_at: now,
            updated_at: now,
        };
        self.projects.insert(project.id, project.clone());
        Ok(project)
    }

    async fn update_project(
        &self,
        id: Uuid,
        changes: ProjectChanges,
    ) -> Result<Option<Project>, AppError> {
        let Some(mut entry) = self.projects.get_mut(&id) else {
            return Ok(None);
        };
        if !changes.is_empty() {
            changes.apply_to(entry.value_mut());
            entry.updated_at = Utc::now();
        }
        Ok(Some(entry.value().clone()))
    }

    async fn delete_project(&self, id: Uuid) -> Result<Option<Project>, AppError> {
        Ok(self.projects.remove(&id).map(|(_, project)| project))
    }
}
