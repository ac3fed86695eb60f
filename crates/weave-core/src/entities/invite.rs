//! ClubInvite entity - an invite code granting access to a private book club

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

/// Invite to a book club
///
/// Public clubs never need one; for private clubs a valid code is the only
/// way in. `uses` is advisory: it is bumped best-effort after a successful
/// join and exists for the creator's overview, not for enforcement of
/// anything beyond `max_uses`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClubInvite {
    pub code: String,
    pub club_id: Uuid,
    pub inviter_id: Uuid,
    pub uses: i32,
    pub max_uses: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl ClubInvite {
    /// Create a new ClubInvite with no limits
    pub fn new(code: String, club_id: Uuid, inviter_id: Uuid) -> Self {
        Self {
            code,
            club_id,
            inviter_id,
            uses: 0,
            max_uses: None,
            created_at: Utc::now(),
            expires_at: None,
        }
    }

    /// Limit the number of redemptions
    pub fn with_max_uses(mut self, max_uses: i32) -> Self {
        if max_uses > 0 {
            self.max_uses = Some(max_uses);
        }
        self
    }

    /// Expire the invite a number of hours after creation
    pub fn with_expiry_hours(mut self, hours: i64) -> Self {
        if hours > 0 {
            self.expires_at = Some(self.created_at + Duration::hours(hours));
        }
        self
    }

    /// Check if the invite is expired
    pub fn is_expired(&self) -> bool {
        if let Some(expires_at) = self.expires_at {
            Utc::now() > expires_at
        } else {
            false
        }
    }

    /// Check if the invite has reached its max uses
    pub fn is_exhausted(&self) -> bool {
        if let Some(max_uses) = self.max_uses {
            self.uses >= max_uses
        } else {
            false
        }
    }

    /// Check if the invite can still be redeemed
    pub fn is_valid(&self) -> bool {
        !self.is_expired() && !self.is_exhausted()
    }

    /// Remaining redemptions (None if unlimited)
    pub fn remaining_uses(&self) -> Option<i32> {
        self.max_uses.map(|max| max - self.uses)
    }
}

/// Generate a random 8-character alphanumeric invite code
pub fn generate_invite_code() -> String {
    use rand::Rng;

    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    const CODE_LEN: usize = 8;

    let mut rng = rand::thread_rng();
    (0..CODE_LEN)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect()
}
