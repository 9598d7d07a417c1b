/// The core application state that holds configuration, the session, and the
/// API client.
///
/// This struct contains all the data that needs to be shared across async
/// tasks in the application.
///
/// It is designed to be wrapped in thread-safe, async-friendly concurrency
/// primitives (see [`SharedState`]) to allow safe concurrent reads and
/// occasional writes from multiple tasks. The session store is the only part
/// that is ever written after startup, and the auth service is its only
/// writer.
#[derive(Debug, Clone)]
pub struct State {
    /// The loaded application configuration.
    pub config: annota_bridge::config::Config,
    /// The persisted bearer token, if any.
    pub session: crate::session::SessionStore,
    /// Client for the annotation API, wrapping a shared pooled HTTP client.
    pub api: crate::api::ApiClient,
}

/// Thread-safe, async-friendly shared reference to the application [`State`].
///
/// This is the recommended way to pass state into async handlers, background
/// tasks, or any context where multiple tasks need read access (and occasional
/// write access).
pub type SharedState = std::sync::Arc<tokio::sync::RwLock<State>>;
