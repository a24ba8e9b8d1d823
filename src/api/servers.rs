//! Server management service.
//!
//! Account-wide operations (list, create, edit by ID, delete) require the
//! account token; [`current`](ServersService::current) and
//! [`edit_current`](ServersService::edit_current) act on the server the
//! in-use server token belongs to.

use std::sync::Arc;

use reqwest::Method;

use crate::client::{build_url, ClientInner, Query, TokenScope};
use crate::models::{Server, ServerCreateRequest, ServerEditRequest, ServersList};
use crate::Result;

/// Service for managing servers.
pub struct ServersService {
    inner: Arc<ClientInner>,
}

impl ServersService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get details for the server the current server token belongs to.
    pub async fn current(&self) -> Result<Server> {
        self.inner.get("server", TokenScope::Server).await
    }

    /// Update the server the current server token belongs to.
    pub async fn edit_current(&self, server: &Server) -> Result<Server> {
        self.inner.put("server", server, TokenScope::Server).await
    }

    /// Fetch a specific server by ID.
    pub async fn get(&self, server_id: i64) -> Result<Server> {
        self.inner
            .get(&format!("servers/{server_id}"), TokenScope::Account)
            .await
    }

    /// List servers on the account, limited by `count` and paged by
    /// `offset`, optionally filtered by name. The name filter is a
    /// substring search: `MyServer` matches `MyServer`, `MyServer
    /// Production` and `MyServer Test`.
    pub async fn list(&self, count: i64, offset: i64, name: &str) -> Result<ServersList> {
        let mut options = Query::new().with("count", count).with("offset", offset);
        if !name.is_empty() {
            options.insert("name", name);
        }
        self.inner
            .get(&build_url("servers", &options), TokenScope::Account)
            .await
    }

    /// Update a server by ID.
    pub async fn edit(&self, server_id: i64, request: &ServerEditRequest) -> Result<Server> {
        self.inner
            .put(&format!("servers/{server_id}"), request, TokenScope::Account)
            .await
    }

    /// Create a server.
    pub async fn create(&self, request: &ServerCreateRequest) -> Result<Server> {
        self.inner
            .post("servers", request, TokenScope::Account)
            .await
    }

    /// Remove a server.
    pub async fn delete(&self, server_id: i64) -> Result<()> {
        self.inner
            .execute_command(
                Method::DELETE,
                &format!("servers/{server_id}"),
                TokenScope::Account,
            )
            .await
    }
}
