use std::path::PathBuf;

use annota_bridge::MessageFromBackend;
use annota_bridge::article::{ArticleDraft, Credentials};
use gpui::{AppContext, Application, Global, SharedString, TitlebarOptions, WindowOptions};
use gpui_component::{
    Root, WindowExt,
    notification::{Notification, NotificationType},
};
use tokio::sync::mpsc;

use crate::entities::{
    DataEntities, articles_entity::ArticlesEntity, editor_entity::EditorEntity,
    profile_entity::ProfileEntity, router_entity::Route, router_entity::RouterEntity,
    session_entity::SessionEntity, speakers_entity::SpeakersEntity,
};

pub mod components;
pub mod entities;
pub mod formatting;
mod views;

/// The frontend's handle to the backend: one async request method per
/// command the backend understands.
#[derive(Clone)]
pub struct BackendBridge {
    pub to_backend: mpsc::Sender<annota_bridge::MessageToBackend>,
}

impl BackendBridge {
    pub async fn request_session_state(&self) {
        self.to_backend
            .send(annota_bridge::MessageToBackend::SessionStateRequest)
            .await
            .expect("failed to request session state");
    }

    pub async fn login(&self, credentials: Credentials) {
        self.to_backend
            .send(annota_bridge::MessageToBackend::LoginRequest(credentials))
            .await
            .expect("failed to request login");
    }

    pub async fn sign_out(&self) {
        self.to_backend
            .send(annota_bridge::MessageToBackend::SignOutRequest)
            .await
            .expect("failed to request sign-out");
    }

    pub async fn request_profile(&self) {
        self.to_backend
            .send(annota_bridge::MessageToBackend::ProfileRequest)
            .await
            .expect("failed to request profile");
    }

    pub async fn request_speakers(&self) {
        self.to_backend
            .send(annota_bridge::MessageToBackend::SpeakersListRequest)
            .await
            .expect("failed to request speakers");
    }

    pub async fn request_articles_page(&self, page: u64) {
        self.to_backend
            .send(annota_bridge::MessageToBackend::ArticlesPageRequest { page })
            .await
            .expect("failed to request articles page");
    }

    pub async fn request_article(&self, id: u64) {
        self.to_backend
            .send(annota_bridge::MessageToBackend::ArticleRequest { id })
            .await
            .expect("failed to request article");
    }

    pub async fn upload_audio(&self, path: PathBuf) {
        self.to_backend
            .send(annota_bridge::MessageToBackend::UploadAudioRequest { path })
            .await
            .expect("failed to request audio upload");
    }

    pub async fn save_article(&self, id: Option<u64>, draft: ArticleDraft) {
        self.to_backend
            .send(annota_bridge::MessageToBackend::SaveArticleRequest { id, draft })
            .await
            .expect("failed to request article save");
    }
}

impl Global for BackendBridge {}

pub fn run(
    mut rx: mpsc::Receiver<annota_bridge::MessageFromBackend>,
    tx: mpsc::Sender<annota_bridge::MessageToBackend>,
) -> anyhow::Result<()> {
    let app = Application::new().with_assets(gpui_component_assets::Assets);

    app.run(move |cx| {
        gpui_component::init(cx);

        let session = cx.new(|_| SessionEntity::default());
        let profile = cx.new(|_| ProfileEntity::default());
        let speakers = cx.new(|_| SpeakersEntity::default());
        let articles = cx.new(|_| ArticlesEntity::default());
        let editor = cx.new(|_| EditorEntity::default());
        let router = cx.new(|_| RouterEntity::default());

        let data = DataEntities {
            session,
            profile,
            speakers,
            articles,
            editor,
            router,
        };
        let listener_data = data.clone();

        let bridge = BackendBridge {
            to_backend: tx.clone(),
        };
        cx.set_global(bridge.clone());

        let window_options = WindowOptions {
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::new_static("Audio Annotator")),
                ..Default::default()
            }),
            ..Default::default()
        };

        cx.spawn(async move |cx| {
            cx.open_window(window_options, |window, cx| {
                let window_handle = window.window_handle();
                cx.spawn(async move |cx| {
                    while let Some(message) = rx.recv().await {
                        log::debug!("Got a message from backend: {message:?}");
                        match message {
                            MessageFromBackend::NotificationMessage(notification) => {
                                let notification_type = match notification.notification_type {
                                    annota_bridge::notification::NotificationType::Info => {
                                        NotificationType::Info
                                    }
                                    annota_bridge::notification::NotificationType::Success => {
                                        NotificationType::Success
                                    }
                                    annota_bridge::notification::NotificationType::Warning => {
                                        NotificationType::Warning
                                    }
                                    annota_bridge::notification::NotificationType::Error => {
                                        NotificationType::Error
                                    }
                                };
                                window_handle
                                    .update(cx, |_, window, cx| {
                                        let notification = Notification::new()
                                            .message(notification.message)
                                            .with_type(notification_type);
                                        window.push_notification(notification, cx);
                                    })
                                    .expect("failed to push a new notification");
                            }
                            MessageFromBackend::SessionStateResponse { authenticated } => {
                                let _ = listener_data.session.update(cx, |model, cx| {
                                    model.authenticated = authenticated;
                                    cx.notify();
                                });
                            }
                            MessageFromBackend::LoginSucceeded => {
                                let _ = listener_data.session.update(cx, |model, cx| {
                                    model.login_pending = false;
                                    model.login_failed = false;
                                    cx.notify();
                                });
                                let _ = listener_data.router.update(cx, |model, cx| {
                                    model.route = Route::ArticleList;
                                    cx.notify();
                                });
                            }
                            MessageFromBackend::LoginFailed => {
                                let _ = listener_data.session.update(cx, |model, cx| {
                                    model.login_pending = false;
                                    model.login_failed = true;
                                    cx.notify();
                                });
                            }
                            MessageFromBackend::SignedOut => {
                                let _ = listener_data.router.update(cx, |model, cx| {
                                    model.route = Route::Login;
                                    cx.notify();
                                });
                            }
                            MessageFromBackend::ProfileResponse(profile) => {
                                let _ = listener_data.profile.update(cx, |model, cx| {
                                    model.profile = Some(profile);
                                    cx.notify();
                                });
                            }
                            MessageFromBackend::SpeakersListResponse(speakers) => {
                                let _ = listener_data.speakers.update(cx, |model, cx| {
                                    model.speakers = speakers;
                                    cx.notify();
                                });
                            }
                            MessageFromBackend::ArticlesPageResponse { page, listing } => {
                                let _ = listener_data.articles.update(cx, |model, cx| {
                                    model.page = page;
                                    model.total_pages = listing.total_pages;
                                    model.articles = listing.data;
                                    model.loading = false;
                                    cx.notify();
                                });
                            }
                            MessageFromBackend::ArticleResponse {
                                article,
                                playback_url,
                            } => {
                                let _ = listener_data.editor.update(cx, |model, cx| {
                                    model.audio = Some(article.audio.clone());
                                    model.playback_url = Some(playback_url);
                                    model.loaded_article = Some(article);
                                    cx.notify();
                                });
                            }
                            MessageFromBackend::AudioUploadFinished {
                                asset,
                                playback_url,
                            } => {
                                let _ = listener_data.editor.update(cx, |model, cx| {
                                    model.uploading = false;
                                    model.audio = Some(asset);
                                    model.playback_url = Some(playback_url);
                                    cx.notify();
                                });
                            }
                            MessageFromBackend::AudioUploadFailed => {
                                let _ = listener_data.editor.update(cx, |model, cx| {
                                    model.uploading = false;
                                    cx.notify();
                                });
                            }
                            MessageFromBackend::ArticleSaveFinished => {
                                let _ = listener_data.router.update(cx, |model, cx| {
                                    model.route = Route::ArticleList;
                                    cx.notify();
                                });
                            }
                        }
                    }
                })
                .detach();

                // The guard needs to know whether a previous session
                // survived before the first protected page settles.
                cx.spawn(async move |_| {
                    bridge.request_session_state().await;
                })
                .detach();

                let view = cx.new(|cx| crate::views::FrontendUi::new(&data, window, cx));
                cx.new(|cx| Root::new(view, window, cx))
            })?;

            Ok::<_, anyhow::Error>(())
        })
        .detach();
    });

    Ok(())
}
