use annota_bridge::MessageFromBackend;
use annota_bridge::article::Credentials;
use annota_bridge::notification::NotificationType;

/// Handles an incoming session state request (see
/// [`annota_bridge::MessageToBackend::SessionStateRequest`]).
pub async fn handle_session_state_request(context: super::AppContextHandle) {
    let authenticated = {
        let state = context.state.read().await;
        state.session.is_authenticated()
    };
    context
        .send(MessageFromBackend::SessionStateResponse { authenticated })
        .await;
}

/// Handles a login request: exchanges the credentials for a bearer token and
/// persists it on success.
///
/// A response without a usable token, a transport error, and a malformed
/// response all collapse into the same [`MessageFromBackend::LoginFailed`];
/// the frontend shows one fixed message for all of them.
pub async fn handle_login_request(context: super::AppContextHandle, credentials: Credentials) {
    let api = {
        let state = context.state.read().await;
        state.api.clone()
    };

    match api.authenticate(&credentials).await {
        Ok(Some(token)) => {
            let persist_result = {
                let mut state = context.state.write().await;
                state.session.set_token(token).await
            };
            if let Err(error) = persist_result {
                // The session stays usable for this run, it just will not
                // survive a restart.
                log::error!("Failed to persist session token: {error}");
                context
                    .send_notification(
                        NotificationType::Warning,
                        "Could not save your session; you will need to log in again next time.",
                    )
                    .await;
            }
            context
                .send(MessageFromBackend::SessionStateResponse {
                    authenticated: true,
                })
                .await;
            context.send(MessageFromBackend::LoginSucceeded).await;
        }
        Ok(None) => {
            context.send(MessageFromBackend::LoginFailed).await;
        }
        Err(error) => {
            log::error!("Authentication request failed: {error}");
            context.send(MessageFromBackend::LoginFailed).await;
        }
    }
}

/// Handles a sign-out request: clears the persisted token. No server call is
/// made.
pub async fn handle_sign_out_request(context: super::AppContextHandle) {
    let clear_result = {
        let mut state = context.state.write().await;
        state.session.clear().await
    };
    if let Err(error) = clear_result {
        log::error!("Failed to clear session: {error}");
        context
            .send_notification(
                NotificationType::Warning,
                "Could not remove the saved session file.",
            )
            .await;
    }
    context
        .send(MessageFromBackend::SessionStateResponse {
            authenticated: false,
        })
        .await;
    context.send(MessageFromBackend::SignedOut).await;
}
