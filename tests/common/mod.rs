use std::net::SocketAddr;
use std::sync::Arc;

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use uuid::Uuid;

use clientele::config::{Config, StoreKind};
use clientele::db::{MemoryStore, SharedStore};

/// A running test server backed by its own in-memory store.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// POST a GraphQL operation, return the full response body + status.
    pub async fn graphql(&self, query: &str, variables: Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/graphql"))
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await
            .expect("graphql request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Run an operation that is expected to succeed and return its `data`.
    pub async fn data(&self, query: &str, variables: Value) -> Value {
        let (body, status) = self.graphql(query, variables).await;
        assert_eq!(status, StatusCode::OK, "graphql non-200: {body}");
        assert!(body.get("errors").is_none(), "graphql errors: {body}");
        body["data"].clone()
    }

    /// Add a client, return the client JSON.
    pub async fn add_client(&self, name: &str, email: &str, phone: &str) -> Value {
        let data = self
            .data(
                "mutation($name: String!, $email: String!, $phone: String!) {
                    addClient(name: $name, email: $email, phone: $phone) { id name email phone }
                }",
                json!({ "name": name, "email": email, "phone": phone }),
            )
            .await;
        data["addClient"].clone()
    }

    /// Add a project for `client_id`, return the project JSON.
    pub async fn add_project(
        &self,
        client_id: &str,
        name: &str,
        description: &str,
        status: Option<&str>,
    ) -> Value {
        let data = self
            .data(
                "mutation($name: String!, $description: String!, $status: ProjectStatus, $clientId: ID!) {
                    addProject(name: $name, description: $description, status: $status, clientId: $clientId) {
                        id name description status
                    }
                }",
                json!({
                    "name": name,
                    "description": description,
                    "status": status,
                    "clientId": client_id,
                }),
            )
            .await;
        data["addProject"].clone()
    }

    pub async fn get_client(&self, id: &str) -> Value {
        let data = self
            .data(
                "query($id: ID) { client(id: $id) { id name email phone } }",
                json!({ "id": id }),
            )
            .await;
        data["client"].clone()
    }

    pub async fn get_project(&self, id: &str) -> Value {
        let data = self
            .data(
                "query($id: ID) { project(id: $id) { id name description status client { id } } }",
                json!({ "id": id }),
            )
            .await;
        data["project"].clone()
    }
}

pub fn test_config() -> Config {
    Config {
        store: StoreKind::Memory,
        database_url: None,
        db_max_connections: 1,
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        log_level: "warn".to_string(),
        graphiql: false,
    }
}

/// Spawn a test app over a fresh in-memory store.
pub async fn spawn_app() -> TestApp {
    spawn_app_with(test_config()).await
}

pub async fn spawn_app_with(config: Config) -> TestApp {
    let store: SharedStore = Arc::new(MemoryStore::new());
    let app = clientele::build_app(store, config);

    // Bind to random port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    TestApp {
        addr,
        client: Client::new(),
    }
}

/// A throwaway Postgres database with migrations applied.
#[allow(dead_code)]
pub struct TestDb {
    pub pool: PgPool,
    pub db_name: String,
}

fn admin_url(base_url: &str) -> String {
    base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/postgres"))
        .unwrap_or_else(|| base_url.to_string())
}

/// Create a uniquely named database next to `DATABASE_URL` and migrate it.
#[allow(dead_code)]
pub async fn create_test_db() -> TestDb {
    let _ = dotenvy::dotenv();

    let base_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for tests");
    let db_name = format!("clientele_test_{}", Uuid::now_v7().simple());

    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&admin_url(&base_url))
        .await
        .expect("Failed to connect to postgres for test DB creation");

    sqlx::query(&format!("CREATE DATABASE \"{db_name}\""))
        .execute(&admin_pool)
        .await
        .expect("Failed to create test database");

    admin_pool.close().await;

    let test_url = base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/{db_name}"))
        .unwrap_or_else(|| base_url.clone());

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&test_url)
        .await
        .expect("Failed to connect to test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations on test database");

    TestDb { pool, db_name }
}

/// Drop the test database after tests complete.
#[allow(dead_code)]
pub async fn drop_test_db(db: TestDb) {
    db.pool.close().await;

    let base_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for tests");
    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&admin_url(&base_url))
        .await
        .expect("Failed to connect for cleanup");

    let _ = sqlx::query(&format!(
        "DROP DATABASE IF EXISTS \"{}\" WITH (FORCE)",
        db.db_name
    ))
    .execute(&admin_pool)
    .await;

    admin_pool.close().await;
}
