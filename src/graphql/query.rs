use async_graphql::{Context, ID, Object, Result, ResultExt};

use super::{parse_id, store};
use crate::models::{Client, Project};

#[derive(Debug, Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn clients(&self, ctx: &Context<'_>) -> Result<Vec<Client>> {
        store(ctx)?.list_clients().await.extend()
    }

    async fn client(&self, ctx: &Context<'_>, id: Option<ID>) -> Result<Option<Client>> {
        let Some(id) = id.as_ref().and_then(parse_id) else {
            return Ok(None);
        };
        store(ctx)?.find_client(id).await.extend()
    }

    async fn projects(&self, ctx: &Context<'_>) -> Result<Vec<Project>> {
        store(ctx)?.list_projects().await.extend()
    }

    async fn project(&self, ctx: &Context<'_>, id: Option<ID>) -> Result<Option<Project>> {
        let Some(id) = id.as_ref().and_then(parse_id) else {
            return Ok(None);
        };
        store(ctx)?.find_project(id).await.extend()
    }
}
