//! Membership entity <-> model mappers

use weave_core::{ClubMember, MemberRole, Profile, WorkshopMember};

use crate::models::{
    ClubMemberModel, ClubMemberWithProfileModel, WorkshopMemberModel,
    WorkshopMemberWithProfileModel,
};

/// Convert WorkshopMemberModel to WorkshopMember entity
impl From<WorkshopMemberModel> for WorkshopMember {
    fn from(model: WorkshopMemberModel) -> Self {
        WorkshopMember {
            workshop_id: model.workshop_id,
            user_id: model.user_id,
            role: MemberRole::parse(&model.role),
            joined_at: model.joined_at,
        }
    }
}

/// Convert ClubMemberModel to ClubMember entity
impl From<ClubMemberModel> for ClubMember {
    fn from(model: ClubMemberModel) -> Self {
        ClubMember {
            club_id: model.club_id,
            user_id: model.user_id,
            role: MemberRole::parse(&model.role),
            joined_at: model.joined_at,
        }
    }
}

/// Split a profile-joined workshop membership row into its entity pair
pub fn workshop_member_with_profile(
    model: WorkshopMemberWithProfileModel,
) -> (WorkshopMember, Profile) {
    let member = WorkshopMember {
        workshop_id: model.workshop_id,
        user_id: model.user_id,
        role: MemberRole::parse(&model.role),
        joined_at: model.joined_at,
    };
    let profile = Profile {
        id: model.user_id,
        username: model.username,
        email: model.email,
        display_name: model.display_name,
        avatar_url: model.avatar_url,
        bio: model.bio,
        created_at: model.profile_created_at,
        updated_at: model.profile_updated_at,
    };
    (member, profile)
}

/// Split a profile-joined club membership row into its entity pair
pub fn club_member_with_profile(model: ClubMemberWithProfileModel) -> (ClubMember, Profile) {
    let member = ClubMember {
        club_id: model.club_id,
        user_id: model.user_id,
        role: MemberRole::parse(&model.role),
        joined_at: model.joined_at,
    };
    let profile = Profile {
        id: model.user_id,
        username: model.username,
        email: model.email,
        display_name: model.display_name,
        avatar_url: model.avatar_url,
        bio: model.bio,
        created_at: model.profile_created_at,
        updated_at: model.profile_updated_at,
    };
    (member, profile)
}
