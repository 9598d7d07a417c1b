use gpui::Entity;

pub mod articles_entity;
pub mod editor_entity;
pub mod profile_entity;
pub mod router_entity;
pub mod session_entity;
pub mod speakers_entity;

/// Handles to every piece of shared frontend state, passed into views so
/// they can read and observe the parts they render.
#[derive(Debug, Clone)]
pub struct DataEntities {
    pub session: Entity<session_entity::SessionEntity>,
    pub profile: Entity<profile_entity::ProfileEntity>,
    pub speakers: Entity<speakers_entity::SpeakersEntity>,
    pub articles: Entity<articles_entity::ArticlesEntity>,
    pub editor: Entity<editor_entity::EditorEntity>,
    pub router: Entity<router_entity::RouterEntity>,
}
