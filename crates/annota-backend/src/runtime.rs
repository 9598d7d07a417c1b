//! Backend runtime setup and orchestration.
//!
//! This module wires together configuration, the persisted session, the API
//! client, and the message dispatch loop that listens to frontend bridge
//! requests.

use std::{sync::Arc, thread};

use annota_bridge::{MessageFromBackend, MessageToBackend};
use tokio::sync::{
    RwLock,
    mpsc::{Receiver, Sender},
};

use crate::api::ApiClient;
use crate::app::AppContext;
use crate::session::SessionStore;
use crate::state::State;

/// Initialize backend state and start processing frontend messages.
async fn setup_backend(rx: Receiver<MessageToBackend>, tx: Sender<MessageFromBackend>) {
    let (config, config_dir) = crate::config::load_config()
        .await
        .expect("failed to load config");

    let session = SessionStore::load(config_dir.join("session.toml"))
        .await
        .expect("failed to load session");
    let api = ApiClient::new(&config.api_config.base_url).expect("invalid API base URL in config");

    let state = Arc::new(RwLock::new(State {
        config,
        session,
        api,
    }));

    let context = Arc::new(AppContext { state, tx });
    context.consume_bridge_messages(rx).await;
}

/// Spawn the backend runtime and begin processing bridge messages.
pub fn run(rx: Receiver<MessageToBackend>, tx: Sender<MessageFromBackend>) {
    thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .expect("failed to build tokio runtime");
        runtime.block_on(async { setup_backend(rx, tx).await });
    });
}
