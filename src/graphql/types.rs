use async_graphql::{Context, ID, Object, Result, ResultExt};

use super::store;
use crate::models::{Client, Project};

#[Object]
impl Client {
    async fn id(&self) -> ID {
        ID(self.id.to_string())
    }

    async fn name(&self) -> &str {
        &self.name
    }

    async fn email(&self) -> &str {
        &self.email
    }

    async fn phone(&self) -> &str {
        &self.phone
    }

    /// Every project whose `clientId` points at this client.
    async fn projects(&self, ctx: &Context<'_>) -> Result<Vec<Project>> {
        store(ctx)?.list_projects_by_client(self.id).await.extend()
    }
}

#[Object]
impl Project {
    async fn id(&self) -> ID {
        ID(self.id.to_string())
    }

    async fn name(&self) -> &str {
        &self.name
    }

    async fn description(&self) -> &str {
        &self.description
    }

    /// One of "Not Started", "In Progress" or "Completed".
    async fn status(&self) -> &'static str {
        self.status.as_str()
    }

    /// The owning client, or null once that client has been deleted.
    async fn client(&self, ctx: &Context<'_>) -> Result<Option<Client>> {
        store(ctx)?.find_client(self.client_id).await.extend()
    }
}
