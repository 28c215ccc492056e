//! HTTP client for the class and professor registries.
//!
//! Both registries are plain REST services: `GET {base}/{id}` answers 200 when
//! the resource exists. Errors are reported as [`CoreError`]; deciding what a
//! failure means is left to the caller.

use std::time::Duration;

use tracing::debug;

use crate::{types::ProfessorRecord, CoreError};

#[derive(Clone, Debug)]
pub struct RegistryClient {
    client: reqwest::Client,
    class_url: String,
    professor_url: String,
}

impl RegistryClient {
    /// Build a client with a per-request timeout.
    ///
    /// `class_url` and `professor_url` are collection URLs such as
    /// `http://localhost:5002/api/classes`; the id is appended as a path segment.
    pub fn new(class_url: &str, professor_url: &str, timeout: Duration) -> Result<Self, CoreError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CoreError::Network(e.to_string()))?;
        Ok(Self::with_client(client, class_url, professor_url))
    }

    /// Reuse an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, class_url: &str, professor_url: &str) -> Self {
        Self {
            client,
            class_url: class_url.trim_end_matches('/').to_string(),
            professor_url: professor_url.trim_end_matches('/').to_string(),
        }
    }

    /// `GET {class_url}/{id}`; `Ok(())` on 200 only.
    pub async fn fetch_class(&self, class_id: i32) -> Result<(), CoreError> {
        let url = format!("{}/{class_id}", self.class_url);
        let resp = self.get(&url).await?;
        debug!(%url, status = resp.status().as_u16(), "class registry responded");
        Ok(())
    }

    /// `GET {professor_url}/{id}` and decode the body.
    pub async fn fetch_professor(&self, professor_id: i32) -> Result<ProfessorRecord, CoreError> {
        let url = format!("{}/{professor_id}", self.professor_url);
        let resp = self.get(&url).await?;
        resp.json::<ProfessorRecord>()
            .await
            .map_err(|e| CoreError::Parse(e.to_string()))
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response, CoreError> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| CoreError::Network(e.to_string()))?;
        // only a plain 200 counts as "exists"
        if resp.status() != reqwest::StatusCode::OK {
            return Err(CoreError::Status(resp.status().as_u16()));
        }
        Ok(resp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::Path, http::StatusCode, routing::get, Json, Router};
    use serde_json::json;
    use tokio::net::TcpListener;

    async fn class_handler(Path(id): Path<i32>) -> StatusCode {
        match id {
            1 => StatusCode::OK,
            4 => StatusCode::NO_CONTENT,
            _ => StatusCode::NOT_FOUND,
        }
    }

    async fn professor_handler(Path(id): Path<i32>) -> (StatusCode, Json<serde_json::Value>) {
        match id {
            7 => (StatusCode::OK, Json(json!({"id": 7, "name": "Ada Lovelace"}))),
            8 => (StatusCode::OK, Json(json!({"id": 8}))),
            6 => (StatusCode::ACCEPTED, Json(json!({"id": 6, "name": "Pending"}))),
            9 => {
                tokio::time::sleep(Duration::from_secs(2)).await;
                (StatusCode::OK, Json(json!({"id": 9, "name": "Too Slow"})))
            }
            _ => (StatusCode::NOT_FOUND, Json(json!({"error": "not found"}))),
        }
    }

    async fn spawn_registry() -> anyhow::Result<String> {
        let app = Router::new()
            .route("/api/classes/:id", get(class_handler))
            .route("/api/professors/:id", get(professor_handler));
        let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        Ok(format!("http://{addr}"))
    }

    fn client_for(base: &str) -> RegistryClient {
        RegistryClient::new(
            &format!("{base}/api/classes/"),
            &format!("{base}/api/professors"),
            Duration::from_millis(300),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn class_lookup_follows_status() -> anyhow::Result<()> {
        let base = spawn_registry().await?;
        let c = client_for(&base);
        assert!(c.fetch_class(1).await.is_ok());
        assert!(matches!(c.fetch_class(2).await, Err(CoreError::Status(404))));
        Ok(())
    }

    #[tokio::test]
    async fn non_200_success_codes_are_rejected() -> anyhow::Result<()> {
        let base = spawn_registry().await?;
        let c = client_for(&base);
        assert!(matches!(c.fetch_class(4).await, Err(CoreError::Status(204))));
        assert!(matches!(c.fetch_professor(6).await, Err(CoreError::Status(202))));
        Ok(())
    }

    #[tokio::test]
    async fn professor_lookup_extracts_name() -> anyhow::Result<()> {
        let base = spawn_registry().await?;
        let c = client_for(&base);
        let p = c.fetch_professor(7).await?;
        assert_eq!(p.name, "Ada Lovelace");
        assert!(matches!(c.fetch_professor(8).await, Err(CoreError::Parse(_))));
        assert!(matches!(c.fetch_professor(3).await, Err(CoreError::Status(404))));
        Ok(())
    }

    #[tokio::test]
    async fn slow_registry_times_out() -> anyhow::Result<()> {
        let base = spawn_registry().await?;
        let c = client_for(&base);
        assert!(matches!(c.fetch_professor(9).await, Err(CoreError::Network(_))));
        Ok(())
    }

    #[tokio::test]
    async fn unreachable_registry_is_network_error() -> anyhow::Result<()> {
        // bind then drop to get a port nobody listens on
        let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
        let addr = listener.local_addr()?;
        drop(listener);
        let c = client_for(&format!("http://{addr}"));
        assert!(matches!(c.fetch_class(1).await, Err(CoreError::Network(_))));
        Ok(())
    }
}
