use annota_bridge::article::{Article, AudioAsset};

/// The editor page's backend-driven state: the article being edited (update
/// mode only) and the audio upload sub-flow.
///
/// Text fields and the speaker selection live inside the editor view itself;
/// this entity only carries what the backend pushes. It is reset whenever an
/// editor page is opened, so drafts never leak between compositions.
#[derive(Debug, Clone, Default)]
pub struct EditorEntity {
    /// The fetched article when editing an existing one, used to pre-fill
    /// the form exactly once.
    pub loaded_article: Option<Article>,
    /// An upload is in flight; the audio control stays disabled.
    pub uploading: bool,
    /// The audio asset the draft currently references.
    pub audio: Option<AudioAsset>,
    /// Where the current asset can be played back from.
    pub playback_url: Option<String>,
}
