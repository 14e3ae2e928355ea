//! Application state shared across all request handlers.
//!
//! `AppState` holds every shared resource a handler needs. It is built once
//! during startup and cloned for each request through Axum's state
//! extraction; all fields are cheap to clone (pools, `Arc`s, reference
//! counted clients).

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{carrier::CarrierClient, middleware::auth::JwtKeys, storage::ObjectStorage};

/// Application state containing shared resources and dependencies.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    ///
    /// Shared by every request; the only lifecycle-managed resource in the
    /// process (created at startup, dropped at exit).
    pub db: DatabaseConnection,

    /// Object storage backend used for media uploads/deletes and for
    /// building public URLs out of storage-relative keys.
    pub storage: Arc<dyn ObjectStorage>,

    /// Typed client for the shipping carrier HTTP API.
    pub carrier: CarrierClient,

    /// JWT signing/verification keys plus token lifetime.
    pub jwt: JwtKeys,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        storage: Arc<dyn ObjectStorage>,
        carrier: CarrierClient,
        jwt: JwtKeys,
    ) -> Self {
        Self {
            db,
            storage,
            carrier,
            jwt,
        }
    }
}
