use annota_bridge::MessageFromBackend;

/// Handles an incoming speakers list request (see
/// [`annota_bridge::MessageToBackend::SpeakersListRequest`]).
pub async fn handle_speakers_list_request(context: super::AppContextHandle) {
    let api = {
        let state = context.state.read().await;
        state.api.clone()
    };

    match api.fetch_speakers().await {
        Ok(speakers) => {
            context
                .send(MessageFromBackend::SpeakersListResponse(speakers))
                .await;
        }
        // Leaves the speaker dropdown empty; there is no user-facing
        // fallback for this.
        Err(error) => log::error!("Failed to fetch speakers: {error}"),
    }
}
