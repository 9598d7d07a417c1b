//! Application context and message dispatching utilities.
//!
//! The context contains the shared state and provides helpers for sending
//! responses and notifications back to the frontend bridge.

use std::sync::Arc;

use annota_bridge::{MessageFromBackend, MessageToBackend};
use tokio::sync::mpsc::{Receiver, Sender};

use crate::services;
use crate::state::SharedState;

/// Shared application context passed to services and message handlers.
pub(crate) struct AppContext {
    /// Mutable runtime application state shared across services.
    pub state: SharedState,
    /// Outbound channel to the frontend bridge.
    pub tx: Sender<MessageFromBackend>,
}

impl AppContext {
    /// Read and dispatch messages from the frontend bridge until it closes.
    pub async fn consume_bridge_messages(self: &Arc<Self>, mut rx: Receiver<MessageToBackend>) {
        while let Some(message) = rx.recv().await {
            log::debug!("Got a frontend message: {message:?}");
            self.dispatch_message(message).await;
        }
    }

    /// Dispatches the received message from frontend down to individual
    /// service handlers.
    async fn dispatch_message(self: &Arc<Self>, message: MessageToBackend) {
        match message {
            MessageToBackend::SessionStateRequest => {
                services::auth_service::handle_session_state_request(self.clone()).await;
            }
            MessageToBackend::LoginRequest(credentials) => {
                services::auth_service::handle_login_request(self.clone(), credentials).await;
            }
            MessageToBackend::SignOutRequest => {
                services::auth_service::handle_sign_out_request(self.clone()).await;
            }
            MessageToBackend::ProfileRequest => {
                services::profile_service::handle_profile_request(self.clone()).await;
            }
            MessageToBackend::SpeakersListRequest => {
                services::speaker_service::handle_speakers_list_request(self.clone()).await;
            }
            MessageToBackend::ArticlesPageRequest { page } => {
                services::article_service::handle_articles_page_request(self.clone(), page).await;
            }
            MessageToBackend::ArticleRequest { id } => {
                services::article_service::handle_article_request(self.clone(), id).await;
            }
            MessageToBackend::UploadAudioRequest { path } => {
                services::audio_service::handle_upload_audio_request(self.clone(), path).await;
            }
            MessageToBackend::SaveArticleRequest { id, draft } => {
                services::article_service::handle_save_article_request(self.clone(), id, draft)
                    .await;
            }
        }
    }

    /// Send a message to the frontend bridge.
    pub async fn send(&self, message: MessageFromBackend) {
        self.tx
            .send(message)
            .await
            .expect("failed to send message to frontend");
    }

    /// Send a notification message to the frontend bridge.
    pub async fn send_notification(
        &self,
        notification_type: annota_bridge::notification::NotificationType,
        content: impl Into<String>,
    ) {
        self.send(MessageFromBackend::NotificationMessage(
            annota_bridge::notification::NotificationMessage::new(notification_type, content),
        ))
        .await;
    }
}
