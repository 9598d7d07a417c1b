use annota_bridge::article::Speaker;

/// The speaker reference data loaded for the editor's dropdown.
#[derive(Debug, Clone, Default)]
pub struct SpeakersEntity {
    pub speakers: Vec<Speaker>,
}
