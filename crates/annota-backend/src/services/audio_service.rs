use std::path::PathBuf;

use annota_bridge::MessageFromBackend;

/// Handles an audio upload request (see
/// [`annota_bridge::MessageToBackend::UploadAudioRequest`]).
///
/// The upload runs in its own task so the dispatch loop keeps serving other
/// requests while the file transfers. A failed upload is logged and answered
/// with [`MessageFromBackend::AudioUploadFailed`] so the frontend can clear
/// its uploading flag; no user-facing message is shown for it.
pub async fn handle_upload_audio_request(context: super::AppContextHandle, path: PathBuf) {
    let (api, token) = {
        let state = context.state.read().await;
        (state.api.clone(), state.session.token().map(str::to_owned))
    };

    log::info!("Uploading audio file {path:?}");

    let context = context.clone();
    tokio::spawn(async move {
        match api.upload_audio(&path, token.as_deref()).await {
            Ok(asset) => {
                let playback_url = api.storage_url(&asset.filename).to_string();
                context
                    .send(MessageFromBackend::AudioUploadFinished {
                        asset,
                        playback_url,
                    })
                    .await;
            }
            Err(error) => {
                log::error!("Failed to upload audio file {path:?}: {error}");
                context.send(MessageFromBackend::AudioUploadFailed).await;
            }
        }
    });
}
