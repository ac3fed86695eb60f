//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.
//! Repository reads that join profiles come back as tuples, so most list
//! mappers work from `(entity, Profile)` pairs.

use weave_core::entities::{
    BookClub, ChatMessage, ClubInvite, ClubMember, DiscussionThread, Profile, ThreadReply,
    Workshop, WorkshopMember,
};

use super::responses::{
    ClubResponse, CurrentProfileResponse, InviteResponse, MemberResponse, MessageResponse,
    ProfileWithStatsResponse, PublicProfileResponse, ReplyResponse, ThreadResponse,
    WorkshopDetailResponse, WorkshopResponse,
};

// ============================================================================
// Profile Mappers
// ============================================================================

impl From<&Profile> for CurrentProfileResponse {
    fn from(profile: &Profile) -> Self {
        Self {
            id: profile.id,
            username: profile.username.clone(),
            email: profile.email.clone(),
            display_name: profile.display_name.clone(),
            avatar_url: profile.avatar_url.clone(),
            bio: profile.bio.clone(),
            created_at: profile.created_at,
        }
    }
}

impl From<Profile> for CurrentProfileResponse {
    fn from(profile: Profile) -> Self {
        Self::from(&profile)
    }
}

impl From<&Profile> for PublicProfileResponse {
    fn from(profile: &Profile) -> Self {
        Self {
            id: profile.id,
            username: profile.username.clone(),
            display_name: profile.display_name.clone(),
            avatar_url: profile.avatar_url.clone(),
            bio: profile.bio.clone(),
            created_at: profile.created_at,
        }
    }
}

impl From<Profile> for PublicProfileResponse {
    fn from(profile: Profile) -> Self {
        Self::from(&profile)
    }
}

/// Helper struct for creating ProfileWithStatsResponse
pub struct ProfileWithStats {
    pub profile: Profile,
    pub workshops_created: i64,
    pub clubs_created: i64,
    pub threads_started: i64,
}

impl From<ProfileWithStats> for ProfileWithStatsResponse {
    fn from(pws: ProfileWithStats) -> Self {
        Self {
            id: pws.profile.id,
            username: pws.profile.username,
            display_name: pws.profile.display_name,
            avatar_url: pws.profile.avatar_url,
            bio: pws.profile.bio,
            created_at: pws.profile.created_at,
            workshops_created: pws.workshops_created,
            clubs_created: pws.clubs_created,
            threads_started: pws.threads_started,
        }
    }
}

// ============================================================================
// Workshop Mappers
// ============================================================================

impl From<&Workshop> for WorkshopResponse {
    fn from(workshop: &Workshop) -> Self {
        Self {
            id: workshop.id,
            title: workshop.title.clone(),
            description: workshop.description.clone(),
            genre: workshop.genre.clone(),
            creator_id: workshop.creator_id,
            status: workshop.status.as_str().to_string(),
            max_participants: workshop.max_participants,
            current_participants: workshop.current_participants,
            last_activity_at: workshop.last_activity_at,
            created_at: workshop.created_at,
        }
    }
}

impl From<Workshop> for WorkshopResponse {
    fn from(workshop: Workshop) -> Self {
        Self::from(&workshop)
    }
}

impl From<(Workshop, Profile)> for WorkshopDetailResponse {
    fn from((workshop, creator): (Workshop, Profile)) -> Self {
        Self {
            id: workshop.id,
            title: workshop.title,
            description: workshop.description,
            genre: workshop.genre,
            creator: PublicProfileResponse::from(creator),
            status: workshop.status.as_str().to_string(),
            max_participants: workshop.max_participants,
            current_participants: workshop.current_participants,
            last_activity_at: workshop.last_activity_at,
            created_at: workshop.created_at,
        }
    }
}

// ============================================================================
// Club Mappers
// ============================================================================

impl From<&BookClub> for ClubResponse {
    fn from(club: &BookClub) -> Self {
        Self {
            id: club.id,
            name: club.name.clone(),
            description: club.description.clone(),
            creator_id: club.creator_id,
            current_book_title: club.current_book_title.clone(),
            is_private: club.is_private,
            status: club.status.as_str().to_string(),
            max_members: club.max_members,
            current_member_count: club.current_member_count,
            created_at: club.created_at,
        }
    }
}

impl From<BookClub> for ClubResponse {
    fn from(club: BookClub) -> Self {
        Self::from(&club)
    }
}

// ============================================================================
// Member Mappers
// ============================================================================

impl From<(WorkshopMember, Profile)> for MemberResponse {
    fn from((member, profile): (WorkshopMember, Profile)) -> Self {
        Self {
            user: PublicProfileResponse::from(profile),
            role: member.role.as_str().to_string(),
            joined_at: member.joined_at,
        }
    }
}

impl From<(ClubMember, Profile)> for MemberResponse {
    fn from((member, profile): (ClubMember, Profile)) -> Self {
        Self {
            user: PublicProfileResponse::from(profile),
            role: member.role.as_str().to_string(),
            joined_at: member.joined_at,
        }
    }
}

// ============================================================================
// Message Mappers
// ============================================================================

impl From<(ChatMessage, Profile)> for MessageResponse {
    fn from((message, sender): (ChatMessage, Profile)) -> Self {
        Self {
            id: message.id,
            workshop_id: message.workshop_id,
            sender: PublicProfileResponse::from(sender),
            content: message.content,
            created_at: message.created_at,
        }
    }
}

// ============================================================================
// Thread Mappers
// ============================================================================

impl From<(DiscussionThread, Profile)> for ThreadResponse {
    fn from((thread, author): (DiscussionThread, Profile)) -> Self {
        Self {
            id: thread.id,
            title: thread.title,
            content: thread.content,
            author: PublicProfileResponse::from(author),
            category: thread.category,
            is_locked: thread.is_locked,
            reply_count: thread.reply_count,
            last_activity_at: thread.last_activity_at,
            created_at: thread.created_at,
        }
    }
}

impl From<(ThreadReply, Profile)> for ReplyResponse {
    fn from((reply, author): (ThreadReply, Profile)) -> Self {
        Self {
            id: reply.id,
            thread_id: reply.thread_id,
            author: PublicProfileResponse::from(author),
            parent_reply_id: reply.parent_reply_id,
            content: reply.content,
            is_edited: reply.is_edited,
            created_at: reply.created_at,
            updated_at: reply.updated_at,
        }
    }
}

// ============================================================================
// Invite Mappers
// ============================================================================

/// Helper struct for creating InviteResponse
pub struct InviteWithInviter {
    pub invite: ClubInvite,
    pub inviter: Profile,
}

impl From<InviteWithInviter> for InviteResponse {
    fn from(details: InviteWithInviter) -> Self {
        let remaining_uses = details.invite.remaining_uses();
        Self {
            code: details.invite.code,
            club_id: details.invite.club_id,
            inviter: PublicProfileResponse::from(details.inviter),
            uses: details.invite.uses,
            max_uses: details.invite.max_uses,
            remaining_uses,
            created_at: details.invite.created_at,
            expires_at: details.invite.expires_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn create_test_profile() -> Profile {
        Profile::new(
            Uuid::new_v4(),
            "inkwell".to_string(),
            "ink@example.com".to_string(),
        )
    }

    #[test]
    fn test_profile_to_current_response() {
        let profile = create_test_profile();
        let response = CurrentProfileResponse::from(&profile);

        assert_eq!(response.id, profile.id);
        assert_eq!(response.username, "inkwell");
        assert_eq!(response.email, "ink@example.com");
    }

    #[test]
    fn test_workshop_to_response() {
        let creator = Uuid::new_v4();
        let workshop = Workshop::new(Uuid::new_v4(), "Flash Fiction Friday".to_string(), creator);
        let response = WorkshopResponse::from(&workshop);

        assert_eq!(response.title, "Flash Fiction Friday");
        assert_eq!(response.creator_id, creator);
        assert_eq!(response.status, "recruiting");
        assert_eq!(response.current_participants, 1);
    }

    #[test]
    fn test_workshop_detail_joins_creator() {
        let creator = create_test_profile();
        let workshop = Workshop::new(Uuid::new_v4(), "Poetry Circle".to_string(), creator.id);

        let response = WorkshopDetailResponse::from((workshop, creator.clone()));

        assert_eq!(response.creator.id, creator.id);
        assert_eq!(response.creator.username, "inkwell");
    }

    #[test]
    fn test_profile_with_stats_to_response() {
        let profile = create_test_profile();
        let response = ProfileWithStatsResponse::from(ProfileWithStats {
            profile: profile.clone(),
            workshops_created: 2,
            clubs_created: 1,
            threads_started: 7,
        });

        assert_eq!(response.id, profile.id);
        assert_eq!(response.workshops_created, 2);
        assert_eq!(response.threads_started, 7);
    }

    #[test]
    fn test_club_to_response() {
        let creator = Uuid::new_v4();
        let club = BookClub::new(Uuid::new_v4(), "Slow Readers".to_string(), creator);
        let response = ClubResponse::from(&club);

        assert_eq!(response.name, "Slow Readers");
        assert!(!response.is_private);
        assert_eq!(response.status, "active");
        assert_eq!(response.current_member_count, 1);
    }

    #[test]
    fn test_member_tuple_to_response() {
        let profile = create_test_profile();
        let member = WorkshopMember::new_creator(Uuid::new_v4(), profile.id);

        let response = MemberResponse::from((member, profile.clone()));

        assert_eq!(response.user.username, "inkwell");
        assert_eq!(response.role, "creator");
    }

    #[test]
    fn test_message_tuple_to_response() {
        let sender = create_test_profile();
        let workshop_id = Uuid::new_v4();
        let message = ChatMessage::new(
            Uuid::new_v4(),
            workshop_id,
            sender.id,
            "First draft done!".to_string(),
        );

        let response = MessageResponse::from((message, sender.clone()));

        assert_eq!(response.workshop_id, workshop_id);
        assert_eq!(response.sender.id, sender.id);
        assert_eq!(response.content, "First draft done!");
    }

    #[test]
    fn test_invite_with_inviter_to_response() {
        let inviter = create_test_profile();
        let invite = ClubInvite::new("a1b2c3d4".to_string(), Uuid::new_v4(), inviter.id)
            .with_max_uses(5);

        let response = InviteResponse::from(InviteWithInviter {
            invite,
            inviter: inviter.clone(),
        });

        assert_eq!(response.code, "a1b2c3d4");
        assert_eq!(response.uses, 0);
        assert_eq!(response.max_uses, Some(5));
        assert_eq!(response.remaining_uses, Some(5));
        assert_eq!(response.inviter.id, inviter.id);
    }
}
