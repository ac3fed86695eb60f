//! Session entity - one sign-in, from login to logout

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

/// A persisted sign-in session
///
/// Created at login, deleted at logout. Refresh tokens carry the session id
/// and are only honored while the row exists and has not expired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: Uuid,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Create a new Session valid for `ttl_seconds`
    pub fn new(id: Uuid, user_id: Uuid, ttl_seconds: i64) -> Self {
        let now = Utc::now();
        Self {
            id,
            user_id,
            created_at: now,
            expires_at: now + Duration::seconds(ttl_seconds),
        }
    }

    /// Check if the session has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_lifetime() {
        let session = Session::new(Uuid::new_v4(), Uuid::new_v4(), 3600);
        assert!(!session.is_expired());

        let mut stale = session.clone();
        stale.expires_at = Utc::now() - Duration::seconds(1);
        assert!(stale.is_expired());
    }
}
