use async_graphql::{Context, ID, Object, Result, ResultExt};

use super::{parse_id, store};
use crate::error::AppError;
use crate::models::{Client, NewClient, NewProject, Project, ProjectChanges, ProjectStatus};

#[derive(Debug, Default)]
pub struct MutationRoot;

/// Resolve `addProject` arguments. An omitted status starts the project as
/// "Not Started"; a `clientId` that is not an id at all is rejected, while an
/// unknown but well-formed one is accepted.
pub fn new_project(
    name: String,
    description: String,
    status: Option<ProjectStatus>,
    client_id: &ID,
) -> Result<NewProject, AppError> {
    let client_id = parse_id(client_id)
        .ok_or_else(|| AppError::BadRequest(format!("Invalid clientId: {}", client_id.as_str())))?;

    Ok(NewProject {
        client_id,
        name,
        description,
        status: status.unwrap_or_default(),
    })
}

#[Object]
impl MutationRoot {
    async fn add_client(
        &self,
        ctx: &Context<'_>,
        name: String,
        email: String,
        phone: String,
    ) -> Result<Client> {
        let client = store(ctx)?
            .create_client(NewClient { name, email, phone })
            .await
            .extend()?;
        tracing::info!(client_id = %client.id, "Client added");
        Ok(client)
    }

    /// Projects that referenced the client are kept and resolve a null client.
    async fn delete_client(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Client>> {
        let Some(id) = parse_id(&id) else {
            return Ok(None);
        };
        let removed = store(ctx)?.delete_client(id).await.extend()?;
        if removed.is_some() {
            tracing::info!(client_id = %id, "Client deleted");
        }
        Ok(removed)
    }

    async fn add_project(
        &self,
        ctx: &Context<'_>,
        name: String,
        description: String,
        status: Option<ProjectStatus>,
        client_id: ID,
    ) -> Result<Project> {
        let project = new_project(name, description, status, &client_id).extend()?;
        let project = store(ctx)?.create_project(project).await.extend()?;
        tracing::info!(project_id = %project.id, client_id = %project.client_id, "Project added");
        Ok(project)
    }

    /// Only the arguments that are supplied change; the rest keep their values.
    async fn update_project(
        &self,
        ctx: &Context<'_>,
        id: ID,
        name: Option<String>,
        description: Option<String>,
        status: Option<ProjectStatus>,
    ) -> Result<Option<Project>> {
        let Some(id) = parse_id(&id) else {
            return Ok(None);
        };
        let changes = ProjectChanges {
            name,
            description,
            status,
        };
        let updated = store(ctx)?.update_project(id, changes).await.extend()?;
        if updated.is_some() {
            tracing::info!(project_id = %id, "Project updated");
        }
        Ok(updated)
    }

    async fn delete_project(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Project>> {
        let Some(id) = parse_id(&id) else {
            return Ok(None);
        };
        let removed = store(ctx)?.delete_project(id).await.extend()?;
        if removed.is_some() {
            tracing::info!(project_id = %id, "Project deleted");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omitted_status_defaults_to_not_started() {
        let client_id = ID(uuid::Uuid::now_v7().to_string());
        let project = new_project(
            "Site Redesign".to_string(),
            "Revamp homepage".to_string(),
            None,
            &client_id,
        )
        .unwrap();
        assert_eq!(project.status, ProjectStatus::NotStarted);
        assert_eq!(project.client_id.to_string(), client_id.as_str());
    }

    #[test]
    fn supplied_status_is_kept() {
        let client_id = ID(uuid::Uuid::now_v7().to_string());
        let project = new_project(
            "Site Redesign".to_string(),
            "Revamp homepage".to_string(),
            Some(ProjectStatus::Completed),
            &client_id,
        )
        .unwrap();
        assert_eq!(project.status, ProjectStatus::Completed);
    }

    #[test]
    fn malformed_client_id_is_rejected() {
        let result = new_project(
            "Site Redesign".to_string(),
            "Revamp homepage".to_string(),
            None,
            &ID("not-an-id".to_string()),
        );
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}
