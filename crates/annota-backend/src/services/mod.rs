//! Backend service handlers for frontend-driven requests.
//!
//! This module groups async request handlers that operate on the shared
//! `AppContext`, perform side effects (network, filesystem), and emit
//! responses or notifications back to the frontend.

pub mod article_service;
pub mod audio_service;
pub mod auth_service;
pub mod profile_service;
pub mod speaker_service;

/// Represents a type that is used in all handlers as an application context.
pub(crate) type AppContextHandle = std::sync::Arc<crate::app::AppContext>;
