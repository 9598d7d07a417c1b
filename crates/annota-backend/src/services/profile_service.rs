use annota_bridge::MessageFromBackend;

/// Handles an incoming profile request (see
/// [`annota_bridge::MessageToBackend::ProfileRequest`]).
pub async fn handle_profile_request(context: super::AppContextHandle) {
    let (api, token) = {
        let state = context.state.read().await;
        (state.api.clone(), state.session.token().map(str::to_owned))
    };

    match api.fetch_profile(token.as_deref()).await {
        Ok(profile) => {
            context
                .send(MessageFromBackend::ProfileResponse(profile))
                .await;
        }
        // A failed read leaves the page without a profile; there is no
        // user-facing fallback for this.
        Err(error) => log::error!("Failed to fetch profile: {error}"),
    }
}
