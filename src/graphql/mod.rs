//! GraphQL surface: the `Client`/`Project` type graph, the query and mutation
//! roots, and the HTTP handlers that serve the composed schema.

mod mutation;
mod query;
mod types;

pub use mutation::MutationRoot;
pub use query::QueryRoot;

use std::collections::HashMap;

use async_graphql::http::{GraphiQLSource, parse_query_string};
use async_graphql::{Context, EmptySubscription, ID, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::{Query, RawQuery, State};
use axum::response::{Html, IntoResponse, Response};
use uuid::Uuid;

use crate::db::SharedStore;
use crate::error::AppError;
use crate::state::SharedState;

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Compose the schema around an injected store handle.
pub fn build_schema(store: SharedStore) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

pub(crate) fn store<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a SharedStore> {
    ctx.data::<SharedStore>()
}

/// Ids that are not UUIDs cannot match any record.
pub(crate) fn parse_id(id: &ID) -> Option<Uuid> {
    Uuid::parse_str(id.as_str()).ok()
}

pub async fn graphql_handler(
    State(state): State<SharedState>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    state.schema.execute(req.into_inner()).await.into()
}

/// `GET /graphql`: runs the operation carried in the query string, otherwise
/// serves the GraphiQL IDE (development only).
pub async fn graphql_get(
    State(state): State<SharedState>,
    Query(params): Query<HashMap<String, String>>,
    RawQuery(raw): RawQuery,
) -> Result<Response, AppError> {
    if params.contains_key("query") {
        let req = parse_query_string(raw.as_deref().unwrap_or_default())
            .map_err(|e| AppError::BadRequest(format!("Invalid GraphQL request: {e}")))?;
        let resp: GraphQLResponse = state.schema.execute(req).await.into();
        return Ok(resp.into_response());
    }

    if !state.config.graphiql {
        return Err(AppError::NotFound("Not found".to_string()));
    }
    Ok(Html(GraphiQLSource::build().endpoint("/graphql").finish()).into_response())
}
