//! Profile entity - represents a community member's public identity

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Profile entity for a registered community member
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Create a new Profile with required fields
    pub fn new(id: Uuid, username: String, email: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            username,
            email,
            display_name: None,
            avatar_url: None,
            bio: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Name shown next to messages and member lists (display name if set,
    /// otherwise the username)
    pub fn shown_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.username)
    }

    /// Update the display name
    pub fn set_display_name(&mut self, display_name: Option<String>) {
        self.display_name = display_name;
        self.updated_at = Utc::now();
    }

    /// Update the avatar URL
    pub fn set_avatar_url(&mut self, avatar_url: Option<String>) {
        self.avatar_url = avatar_url;
        self.updated_at = Utc::now();
    }

    /// Update the bio
    pub fn set_bio(&mut self, bio: Option<String>) {
        self.bio = bio;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Profile {
        Profile::new(
            Uuid::new_v4(),
            "inkwell".to_string(),
            "inkwell@example.com".to_string(),
        )
    }

    #[test]
    fn test_profile_creation() {
        let profile = sample();
        assert_eq!(profile.username, "inkwell");
        assert!(profile.display_name.is_none());
        assert!(profile.avatar_url.is_none());
    }

    #[test]
    fn test_shown_name_falls_back_to_username() {
        let mut profile = sample();
        assert_eq!(profile.shown_name(), "inkwell");

        profile.set_display_name(Some("Ink Well".to_string()));
        assert_eq!(profile.shown_name(), "Ink Well");

        profile.set_display_name(None);
        assert_eq!(profile.shown_name(), "inkwell");
    }
}
