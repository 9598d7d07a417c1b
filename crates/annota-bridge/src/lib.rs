//! Communication bridge between frontend and backend.
//!
//! This crate defines the types and protocols used to connect the graphical
//! frontend with an asynchronous backend responsible for talking to the
//! annotation API server: authentication, article listing and editing,
//! speaker lookup, and audio uploads.
//!
//! The design is deliberately lightweight and unidirectional:
//! - The frontend sends commands (e.g., log in, request a page of articles,
//!   upload an audio file).
//! - The backend pushes events (e.g., session state, fetched articles,
//!   upload results, notifications).
//!
//! Communication happens over bounded [`tokio::sync::mpsc`] channels wrapped
//! in [`BridgeChannels`], providing back-pressure, async compatibility, and
//! clean separation of concerns.

pub mod article;
pub mod config;
pub mod notification;

use std::path::PathBuf;

use tokio::sync::mpsc::{self, Receiver, Sender};

use crate::article::{Article, ArticleDraft, ArticlePage, AudioAsset, Credentials, Profile, Speaker};

/// Messages emitted by the backend to inform the frontend of state updates.
///
/// These are typically sent in response to frontend requests, since every
/// state change in this application is driven by a user action.
#[derive(Debug, Clone)]
pub enum MessageFromBackend {
    /// Generic message for all notifications in the application.
    NotificationMessage(notification::NotificationMessage),
    /// Whether a bearer token is currently held by the session store.
    SessionStateResponse {
        authenticated: bool,
    },
    /// The credentials were accepted and the token has been persisted.
    LoginSucceeded,
    /// The credentials were rejected, or the authentication request failed.
    /// The two cases are intentionally indistinguishable to the frontend.
    LoginFailed,
    /// The session token has been cleared.
    SignedOut,
    ProfileResponse(Profile),
    SpeakersListResponse(Vec<Speaker>),
    /// One page of the article listing, tagged with the page that was
    /// requested so the frontend only moves its cursor once data arrived.
    ArticlesPageResponse {
        page: u64,
        listing: ArticlePage,
    },
    /// A single article fetched for editing, along with the URL its audio
    /// can be played back from.
    ArticleResponse {
        article: Article,
        playback_url: String,
    },
    /// An audio upload completed and produced a server-side asset.
    AudioUploadFinished {
        asset: AudioAsset,
        playback_url: String,
    },
    /// An audio upload did not complete. Details go to the log only.
    AudioUploadFailed,
    /// A create-or-update submission completed.
    ArticleSaveFinished,
}

/// Commands issued by the frontend to control or query the backend.
///
/// These messages drive the core functionality of the application.
#[derive(Debug, Clone)]
pub enum MessageToBackend {
    /// Request for the current session state (token present or not).
    SessionStateRequest,
    /// Exchange credentials for a bearer token.
    LoginRequest(Credentials),
    /// Clear the persisted session token. No server call is made.
    SignOutRequest,
    ProfileRequest,
    SpeakersListRequest,
    /// Request one page of the article listing (1-based).
    ArticlesPageRequest {
        page: u64,
    },
    /// Request a single article for editing.
    ArticleRequest {
        id: u64,
    },
    /// Upload the audio file at the given local path.
    UploadAudioRequest {
        path: PathBuf,
    },
    /// Submit the draft; creates a new article when `id` is `None`,
    /// otherwise updates the existing one.
    SaveArticleRequest {
        id: Option<u64>,
        draft: ArticleDraft,
    },
}

/// Paired `tokio::mpsc` channels for bidirectional communication between
/// frontend and backend.
pub struct BridgeChannels {
    /// Receiver used by the frontend to get messages from the backend.
    pub frontend_rx: Receiver<MessageFromBackend>,
    /// Sender used by the frontend to send commands to the backend.
    pub frontend_tx: Sender<MessageToBackend>,

    /// Receiver used by the backend to get commands from the frontend.
    pub backend_rx: Receiver<MessageToBackend>,
    /// Sender used by the backend to send events/responses to the frontend.
    pub backend_tx: Sender<MessageFromBackend>,
}

impl BridgeChannels {
    /// Creates a new pair of bridged channels with the given buffer capacity.
    pub fn new(buffer: usize) -> Self {
        let (to_backend_tx, to_backend_rx) = mpsc::channel(buffer);
        let (to_frontend_tx, to_frontend_rx) = mpsc::channel(buffer);
        Self {
            frontend_tx: to_backend_tx,
            frontend_rx: to_frontend_rx,
            backend_rx: to_backend_rx,
            backend_tx: to_frontend_tx,
        }
    }
}

impl Default for BridgeChannels {
    fn default() -> Self {
        Self::new(64)
    }
}
