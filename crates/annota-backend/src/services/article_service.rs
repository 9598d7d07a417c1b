use annota_bridge::MessageFromBackend;
use annota_bridge::article::ArticleDraft;

/// Handles a request for one page of the article listing (see
/// [`annota_bridge::MessageToBackend::ArticlesPageRequest`]).
///
/// The response echoes the requested page, so the frontend moves its cursor
/// only once the data for that page actually arrived.
pub async fn handle_articles_page_request(context: super::AppContextHandle, page: u64) {
    let api = {
        let state = context.state.read().await;
        state.api.clone()
    };

    match api.fetch_articles_page(page).await {
        Ok(listing) => {
            context
                .send(MessageFromBackend::ArticlesPageResponse { page, listing })
                .await;
        }
        // Keeps the previous page on screen; there is no user-facing
        // fallback for this.
        Err(error) => log::error!("Failed to fetch articles page {page}: {error}"),
    }
}

/// Handles a request for a single article, used to pre-populate the editor
/// (see [`annota_bridge::MessageToBackend::ArticleRequest`]).
pub async fn handle_article_request(context: super::AppContextHandle, id: u64) {
    let api = {
        let state = context.state.read().await;
        state.api.clone()
    };

    match api.fetch_article(id).await {
        Ok(article) => {
            let playback_url = api.storage_url(&article.audio.filename).to_string();
            context
                .send(MessageFromBackend::ArticleResponse {
                    article,
                    playback_url,
                })
                .await;
        }
        Err(error) => log::error!("Failed to fetch article {id}: {error}"),
    }
}

/// Handles a create-or-update submission (see
/// [`annota_bridge::MessageToBackend::SaveArticleRequest`]).
///
/// [`MessageFromBackend::ArticleSaveFinished`] is sent whenever the request
/// completed, without branching on the response body; the frontend navigates
/// home on it unconditionally. A transport error only leaves a log line and
/// keeps the editor in place.
pub async fn handle_save_article_request(
    context: super::AppContextHandle,
    id: Option<u64>,
    draft: ArticleDraft,
) {
    let (api, token) = {
        let state = context.state.read().await;
        (state.api.clone(), state.session.token().map(str::to_owned))
    };

    match api.save_article(id, &draft, token.as_deref()).await {
        Ok(()) => {
            context.send(MessageFromBackend::ArticleSaveFinished).await;
        }
        Err(error) => log::error!("Failed to save article: {error}"),
    }
}
