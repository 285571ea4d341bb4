//! REST backend gateway
//!
//! Talks to the backend over `reqwest`:
//!
//! | Operation | Request                    |
//! |-----------|----------------------------|
//! | list      | `GET /{collection}`        |
//! | create    | `POST /{collection}`       |
//! | update    | `PUT /{collection}/{id}`   |
//! | delete    | `DELETE /{collection}/{id}`|
//! | upload    | `POST /upload` (multipart) |
//!
//! Every response is classified into one of the gateway error kinds before
//! any decoding happens.

use std::time::Duration;

use async_trait::async_trait;
use parts_admin_core::{AdminError, AdminResult, ConnectorId, EntityKind, UserId};
use parts_admin_model::mapping::{connectors_from_backend, users_from_backend};
use parts_admin_model::{
    Attachments, BackendConnector, BackendUser, BackendUserPayload, Connector, UploadedPaths,
    User, UserDraft,
};
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info};

use crate::DataGateway;
use crate::media::media_url;
use crate::upload::{UploadResponse, build_form, resolve_paths};

/// Gateway backed by the REST API
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    origin: String,
}

impl HttpGateway {
    /// Create a gateway for `origin` with a per-request timeout
    pub fn new(origin: impl Into<String>, timeout: Duration) -> AdminResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AdminError::InvalidConfig(format!("cannot build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            origin: origin.into().trim_end_matches('/').to_string(),
        })
    }

    /// Backend origin requests go to
    pub fn origin(&self) -> &str {
        &self.origin
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.origin, path)
    }

    fn item_path(kind: EntityKind, id: impl std::fmt::Display) -> String {
        format!("/{}/{}", kind.collection(), id)
    }

    // ========================================================================
    // Generic request helpers
    // ========================================================================

    /// Send a request and return the body of a successful response
    async fn send(&self, method: Method, path: &str, req: RequestBuilder) -> AdminResult<String> {
        debug!(%method, url = %self.url(path), "Sending request");

        let response = req.send().await.map_err(|e| {
            if e.is_timeout() {
                AdminError::transport(format!("{} {} timed out", method, path))
            } else {
                AdminError::transport(format!("{} {}: {}", method, path, e))
            }
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AdminError::transport(format!("reading response body: {}", e)))?;

        debug!(%method, path, status = status.as_u16(), "Received response");

        if status.is_success() {
            Ok(body)
        } else {
            Err(classify_failure(status, &body))
        }
    }

    async fn request<T: DeserializeOwned>(&self, method: Method, path: &str) -> AdminResult<T> {
        let req = self.client.request(method.clone(), self.url(path));
        let body = self.send(method, path, req).await?;
        decode(&body)
    }

    async fn request_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        payload: &B,
    ) -> AdminResult<T> {
        let req = self
            .client
            .request(method.clone(), self.url(path))
            .json(payload);
        let body = self.send(method, path, req).await?;
        decode(&body)
    }

    async fn delete_item(&self, path: &str) -> AdminResult<()> {
        let req = self.client.delete(self.url(path));
        self.send(Method::DELETE, path, req).await?;
        Ok(())
    }
}

/// Decode a JSON response body, reporting an excerpt on failure
fn decode<T: DeserializeOwned>(body: &str) -> AdminResult<T> {
    serde_json::from_str(body).map_err(|e| {
        AdminError::format(format!(
            "{} (body: {})",
            e,
            parts_admin_core::excerpt(body, parts_admin_core::error::BODY_EXCERPT_LIMIT)
        ))
    })
}

/// Turn a non-success response into a gateway error
///
/// 400, 409 and 422 are business-rule rejections and keep the backend's
/// message. Everything else is a protocol failure.
pub fn classify_failure(status: StatusCode, body: &str) -> AdminError {
    let reason = status.canonical_reason().unwrap_or("Unknown");
    match status {
        StatusCode::BAD_REQUEST | StatusCode::CONFLICT | StatusCode::UNPROCESSABLE_ENTITY => {
            AdminError::validation(rejection_detail(body).unwrap_or_else(|| {
                format!("{} {}", status.as_u16(), reason)
            }))
        }
        _ => AdminError::protocol(status.as_u16(), reason, body),
    }
}

/// Message carried by a rejection body
///
/// Looks for a `detail`, `error` or `message` string field, falling back to
/// the raw text.
fn rejection_detail(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    if let Ok(Value::Object(obj)) = serde_json::from_str::<Value>(body) {
        for key in ["detail", "error", "message"] {
            if let Some(Value::String(text)) = obj.get(key) {
                return Some(text.clone());
            }
        }
    }
    Some(parts_admin_core::excerpt(
        body,
        parts_admin_core::error::BODY_EXCERPT_LIMIT,
    ))
}

#[async_trait]
impl DataGateway for HttpGateway {
    fn describe(&self) -> String {
        format!("backend {}", self.origin)
    }

    async fn list_users(&self) -> AdminResult<Vec<User>> {
        let rows: Vec<BackendUser> = self.request(Method::GET, "/users").await?;
        users_from_backend(rows)
    }

    async fn create_user(&self, draft: &UserDraft) -> AdminResult<User> {
        let payload = BackendUserPayload::from(draft);
        let row: BackendUser = self
            .request_json(Method::POST, "/users", &payload)
            .await?;
        let user = User::try_from(row)?;
        info!(id = %user.id, email = %user.email, "Created user");
        Ok(user)
    }

    async fn update_user(&self, id: UserId, draft: &UserDraft) -> AdminResult<User> {
        let payload = BackendUserPayload::from(draft);
        let path = Self::item_path(EntityKind::User, id);
        let row: BackendUser = self.request_json(Method::PUT, &path, &payload).await?;
        let user = User::try_from(row)?;
        info!(id = %user.id, "Updated user");
        Ok(user)
    }

    async fn delete_user(&self, id: UserId) -> AdminResult<()> {
        self.delete_item(&Self::item_path(EntityKind::User, id))
            .await?;
        info!(%id, "Deleted user");
        Ok(())
    }

    async fn list_connectors(&self) -> AdminResult<Vec<Connector>> {
        let rows: Vec<BackendConnector> = self.request(Method::GET, "/connectors").await?;
        connectors_from_backend(rows)
    }

    async fn create_connector(&self, connector: &Connector) -> AdminResult<Connector> {
        let mut payload = BackendConnector::from(connector);
        payload.id = None;
        let row: BackendConnector = self
            .request_json(Method::POST, "/connectors", &payload)
            .await?;
        let created = Connector::try_from(row)?;
        info!(yazaki_pn = %created.yazaki_pn, "Created connector");
        Ok(created)
    }

    async fn update_connector(
        &self,
        id: ConnectorId,
        connector: &Connector,
    ) -> AdminResult<Connector> {
        let mut payload = BackendConnector::from(connector);
        payload.id = Some(id.0);
        let path = Self::item_path(EntityKind::Connector, id);
        let row: BackendConnector = self.request_json(Method::PUT, &path, &payload).await?;
        let updated = Connector::try_from(row)?;
        info!(%id, yazaki_pn = %updated.yazaki_pn, "Updated connector");
        Ok(updated)
    }

    async fn delete_connector(&self, id: ConnectorId) -> AdminResult<()> {
        self.delete_item(&Self::item_path(EntityKind::Connector, id))
            .await?;
        info!(%id, "Deleted connector");
        Ok(())
    }

    async fn upload_attachments(
        &self,
        base_name: &str,
        attachments: &Attachments,
    ) -> AdminResult<UploadedPaths> {
        if attachments.is_empty() {
            return Ok(UploadedPaths::new());
        }
        let req = self
            .client
            .post(self.url("/upload"))
            .multipart(build_form(base_name, attachments));
        let body = self.send(Method::POST, "/upload", req).await?;
        let response: UploadResponse = decode(&body)?;
        let paths = resolve_paths(&response, attachments)?;
        info!(base_name, count = paths.len(), "Uploaded attachments");
        Ok(paths)
    }

    fn media_url(&self, path: &str) -> Option<String> {
        media_url(&self.origin, path)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::{Multipart, Path};
    use axum::http::StatusCode as AxumStatus;
    use axum::routing::{get, post, put};
    use axum::{Json, Router};
    use parts_admin_core::Role;
    use parts_admin_model::{Attachment, AttachmentSlot};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    /// Start `router` on an ephemeral port and return a gateway pointed at it
    async fn serve(router: Router) -> HttpGateway {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        HttpGateway::new(format!("http://{}", addr), Duration::from_secs(5)).unwrap()
    }

    fn backend_user(id: i64, role: Value) -> Value {
        json!({
            "id": id,
            "full_name": "Jane Doe",
            "email": "jane@example.com",
            "role": role,
            "created_at": "2024-01-15T10:30:00Z"
        })
    }

    #[tokio::test]
    async fn test_list_users_maps_fields() {
        let router = Router::new().route(
            "/users",
            get(|| async {
                Json(json!([backend_user(1, json!("Admin")), backend_user(2, Value::Null)]))
            }),
        );
        let gateway = serve(router).await;

        let users = gateway.list_users().await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].name, "Jane Doe");
        assert_eq!(users[0].role, Role::Admin);
        assert_eq!(users[1].role, Role::User);
    }

    #[tokio::test]
    async fn test_create_user_without_role_gets_baseline() {
        let router = Router::new().route(
            "/users",
            post(|Json(body): Json<Value>| async move {
                assert!(body.get("role").is_none());
                assert_eq!(body["full_name"], "Ann");
                let mut row = backend_user(9, body.get("role").cloned().unwrap_or(Value::Null));
                row["full_name"] = body["full_name"].clone();
                (AxumStatus::CREATED, Json(row))
            }),
        );
        let gateway = serve(router).await;

        let user = gateway
            .create_user(&UserDraft::new("Ann", "ann@example.com"))
            .await
            .unwrap();
        assert_eq!(user.id, UserId(9));
        assert_eq!(user.name, "Ann");
        assert_eq!(user.role, Role::BASELINE);
    }

    #[tokio::test]
    async fn test_server_error_is_protocol_with_excerpt() {
        let router = Router::new().route(
            "/connectors",
            get(|| async { (AxumStatus::INTERNAL_SERVER_ERROR, "database connection lost") }),
        );
        let gateway = serve(router).await;

        let err = gateway.list_connectors().await.unwrap_err();
        assert!(err.is_protocol());
        assert_eq!(err.status(), Some(500));
        let message = err.to_string();
        assert!(message.contains("500"));
        assert!(message.contains("database connection lost"));
    }

    #[tokio::test]
    async fn test_create_user_server_error_keeps_plain_text_body() {
        let long_trace = format!("Traceback: {}", "frame ".repeat(100));
        let router = Router::new().route(
            "/users",
            post(move || async move { (AxumStatus::INTERNAL_SERVER_ERROR, long_trace) }),
        );
        let gateway = serve(router).await;

        let err = gateway
            .create_user(&UserDraft::new("Ann", "ann@example.com"))
            .await
            .unwrap_err();
        assert!(err.is_protocol());
        assert!(!err.is_validation());
        assert_eq!(err.status(), Some(500));
        let message = err.to_string();
        assert!(message.starts_with("HTTP 500 Internal Server Error: Traceback: frame"));
        let AdminError::Protocol { body_excerpt, .. } = &err else {
            panic!("expected protocol error");
        };
        assert_eq!(
            body_excerpt.chars().count(),
            parts_admin_core::error::BODY_EXCERPT_LIMIT + 1
        );
        assert!(body_excerpt.ends_with('…'));
    }

    #[tokio::test]
    async fn test_duplicate_key_is_validation() {
        let router = Router::new().route(
            "/connectors",
            post(|| async {
                (
                    AxumStatus::BAD_REQUEST,
                    Json(json!({"error": "Yazaki PN already exists"})),
                )
            }),
        );
        let gateway = serve(router).await;

        let err = gateway
            .create_connector(&Connector::new("A1", "C1", "S1", "Acme"))
            .await
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Rejected by backend: Yazaki PN already exists");
    }

    #[tokio::test]
    async fn test_malformed_body_is_format() {
        let router = Router::new().route("/users", get(|| async { "<html>oops</html>" }));
        let gateway = serve(router).await;

        let err = gateway.list_users().await.unwrap_err();
        assert!(err.is_format());
        assert!(err.to_string().contains("<html>oops</html>"));
    }

    #[tokio::test]
    async fn test_refused_connection_is_transport() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let gateway =
            HttpGateway::new(format!("http://{}", addr), Duration::from_secs(5)).unwrap();

        let err = gateway.list_users().await.unwrap_err();
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn test_update_connector_addresses_by_id() {
        let router = Router::new().route(
            "/connectors/{id}",
            put(|Path(id): Path<i64>, Json(mut body): Json<Value>| async move {
                assert_eq!(body["id"], id);
                assert_eq!(body["yazaki_pn"], "A1");
                body["price"] = json!(12.5);
                Json(body)
            }),
        );
        let gateway = serve(router).await;

        let updated = gateway
            .update_connector(ConnectorId(4), &Connector::new("A1", "C1", "S1", "Acme"))
            .await
            .unwrap();
        assert_eq!(updated.id, Some(ConnectorId(4)));
        assert_eq!(updated.price, Some(12.5));
    }

    #[tokio::test]
    async fn test_delete_accepts_empty_body() {
        let router = Router::new().route(
            "/users/{id}",
            axum::routing::delete(|Path(_id): Path<i64>| async { AxumStatus::NO_CONTENT }),
        );
        let gateway = serve(router).await;
        gateway.delete_user(UserId(3)).await.unwrap();
    }

    #[tokio::test]
    async fn test_upload_sends_fields_and_normalizes_paths() {
        let router = Router::new().route(
            "/upload",
            post(|mut multipart: Multipart| async move {
                let mut base = String::new();
                let mut files = Vec::new();
                while let Some(field) = multipart.next_field().await.unwrap() {
                    let name = field.name().unwrap_or_default().to_string();
                    if name == "base_filename" {
                        base = field.text().await.unwrap();
                    } else if let Some(number) = name.strip_prefix("file") {
                        files.push(json!({
                            "file_number": number.parse::<u8>().unwrap(),
                            "file_path": format!("media/images/{}.png", base),
                        }));
                    }
                }
                Json(json!({ "files": files }))
            }),
        );
        let gateway = serve(router).await;

        let mut attachments = Attachments::new();
        attachments.set(AttachmentSlot::Image, Attachment::new("photo.png", vec![1, 2, 3]));
        let paths = gateway.upload_attachments("A1", &attachments).await.unwrap();
        assert_eq!(paths[&AttachmentSlot::Image], "/images/A1.png");
    }

    #[test]
    fn test_rejection_detail_fallbacks() {
        assert_eq!(
            rejection_detail(r#"{"detail":"bad email"}"#).as_deref(),
            Some("bad email")
        );
        assert_eq!(rejection_detail("plain text").as_deref(), Some("plain text"));
        assert_eq!(rejection_detail("  "), None);

        let err = classify_failure(StatusCode::UNPROCESSABLE_ENTITY, "");
        assert_eq!(err.to_string(), "Rejected by backend: 422 Unprocessable Entity");
    }

    #[test]
    fn test_media_url_uses_origin() {
        let gateway =
            HttpGateway::new("http://localhost:5000/", Duration::from_secs(5)).unwrap();
        assert_eq!(
            gateway.media_url("media/images/A1.png").as_deref(),
            Some("http://localhost:5000/media/images/A1.png")
        );
    }
}
