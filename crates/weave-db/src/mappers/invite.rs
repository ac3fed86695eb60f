//! ClubInvite entity <-> model mapper

use weave_core::ClubInvite;

use crate::models::InviteModel;

/// Convert InviteModel to ClubInvite entity
impl From<InviteModel> for ClubInvite {
    fn from(model: InviteModel) -> Self {
        ClubInvite {
            code: model.code,
            club_id: model.club_id,
            inviter_id: model.inviter_id,
            uses: model.uses,
            max_uses: model.max_uses,
            created_at: model.created_at,
            expires_at: model.expires_at,
        }
    }
}
