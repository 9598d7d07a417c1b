use annota_bridge::article::Profile;

/// The authenticated user's profile, used to mark articles they created.
#[derive(Debug, Clone, Default)]
pub struct ProfileEntity {
    pub profile: Option<Profile>,
}

impl ProfileEntity {
    /// Whether the given creator name belongs to the current user.
    pub fn is_owner(&self, user_id: &str) -> bool {
        self.profile
            .as_ref()
            .is_some_and(|profile| profile.username == user_id)
    }
}
