//! Book club service
//!
//! Clubs share the workshop membership model but add privacy: a private
//! club is joinable only through a live invite code issued by its creator.

use tracing::{info, instrument, warn};
use uuid::Uuid;
use weave_core::entities::{generate_invite_code, BookClub, ClubInvite, ClubMember};
use weave_core::DomainError;

use crate::dto::{
    ClubJoinResponse, ClubLeaveResponse, ClubResponse, CreateClubRequest, CreateInviteRequest,
    InviteResponse, InviteWithInviter, JoinClubRequest, MemberResponse, UpdateClubRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Maximum number of clubs returned per listing page
const MAX_LIST_LIMIT: i64 = 100;

/// Book club service
pub struct ClubService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ClubService<'a> {
    /// Create a new ClubService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a book club with the caller as its first member
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create_club(
        &self,
        creator_id: Uuid,
        request: CreateClubRequest,
    ) -> ServiceResult<ClubResponse> {
        let mut club = BookClub::new(self.ctx.generate_id(), request.name, creator_id);
        club.description = request.description.filter(|d| !d.is_empty());
        club.current_book_title = request.current_book_title.filter(|t| !t.is_empty());
        club.is_private = request.is_private;
        if let Some(max) = request.max_members {
            club.max_members = max;
        }

        // Club row and creator membership land in one transaction
        self.ctx.club_repo().create_with_creator(&club).await?;

        info!(club_id = %club.id, "Book club created");

        Ok(ClubResponse::from(club))
    }

    /// Fetch a single club
    #[instrument(skip(self))]
    pub async fn get_club(&self, club_id: Uuid) -> ServiceResult<ClubResponse> {
        let club = self
            .ctx
            .club_repo()
            .find_by_id(club_id)
            .await?
            .ok_or(DomainError::ClubNotFound(club_id))?;

        Ok(ClubResponse::from(club))
    }

    /// List clubs, newest first
    #[instrument(skip(self))]
    pub async fn list_clubs(&self, limit: i64, offset: i64) -> ServiceResult<Vec<ClubResponse>> {
        let clubs = self
            .ctx
            .club_repo()
            .list(limit.clamp(1, MAX_LIST_LIMIT), offset.max(0))
            .await?;

        Ok(clubs.into_iter().map(ClubResponse::from).collect())
    }

    /// Update club metadata (creator only)
    #[instrument(skip(self, request))]
    pub async fn update_club(
        &self,
        club_id: Uuid,
        user_id: Uuid,
        request: UpdateClubRequest,
    ) -> ServiceResult<ClubResponse> {
        let mut club = self
            .ctx
            .club_repo()
            .find_by_id(club_id)
            .await?
            .ok_or(DomainError::ClubNotFound(club_id))?;

        if !club.is_creator(user_id) {
            return Err(DomainError::NotCreator.into());
        }

        let mut changed = false;

        if let Some(description) = request.description {
            club.set_description(if description.is_empty() {
                None
            } else {
                Some(description)
            });
            changed = true;
        }

        if let Some(title) = request.current_book_title {
            club.set_current_book(if title.is_empty() { None } else { Some(title) });
            changed = true;
        }

        if changed {
            self.ctx.club_repo().update(&club).await?;
            info!(club_id = %club_id, "Club updated");
        }

        Ok(ClubResponse::from(club))
    }

    /// Join a club
    ///
    /// Private clubs require a live invite code; public clubs ignore one.
    #[instrument(skip(self, request))]
    pub async fn join_club(
        &self,
        club_id: Uuid,
        user_id: Uuid,
        request: JoinClubRequest,
    ) -> ServiceResult<ClubJoinResponse> {
        let club = self
            .ctx
            .club_repo()
            .find_by_id(club_id)
            .await?
            .ok_or(DomainError::ClubNotFound(club_id))?;

        // Early duplicate check; the unique constraint in the join below is
        // the backstop for races
        if self
            .ctx
            .club_member_repo()
            .is_member(club_id, user_id)
            .await?
        {
            return Err(DomainError::AlreadyMember.into());
        }

        let mut redeemed_code = None;
        if club.is_private {
            let code = request.invite_code.as_deref().ok_or(DomainError::PrivateClub)?;
            let invite = self
                .ctx
                .invite_repo()
                .find_by_code(code)
                .await?
                .ok_or_else(|| DomainError::InviteNotFound(code.to_string()))?;

            if invite.club_id != club_id {
                return Err(ServiceError::validation(
                    "Invite code belongs to a different club",
                ));
            }
            if invite.is_expired() {
                return Err(DomainError::InviteExpired.into());
            }
            if invite.is_exhausted() {
                return Err(DomainError::InviteExhausted.into());
            }

            redeemed_code = Some(code.to_string());
        }

        let profile = self
            .ctx
            .profile_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Profile", user_id.to_string()))?;

        let member = ClubMember::new(club_id, user_id);
        let current_member_count = self.ctx.club_member_repo().join(&member).await?;

        // The membership is the source of truth; a failed redemption bump is
        // only logged
        if let Some(code) = redeemed_code {
            if let Err(e) = self.ctx.invite_repo().increment_uses(&code).await {
                warn!(club_id = %club_id, code = %code, error = %e, "Failed to record invite redemption");
            }
        }

        info!(
            club_id = %club_id,
            user_id = %user_id,
            current_member_count,
            "User joined club"
        );

        Ok(ClubJoinResponse {
            member: MemberResponse::from((member, profile)),
            current_member_count,
        })
    }

    /// Leave a club, or kick a member as its creator
    ///
    /// The creator can never leave; the club would be orphaned.
    #[instrument(skip(self))]
    pub async fn leave_club(
        &self,
        club_id: Uuid,
        target_id: Uuid,
        actor_id: Uuid,
    ) -> ServiceResult<ClubLeaveResponse> {
        let club = self
            .ctx
            .club_repo()
            .find_by_id(club_id)
            .await?
            .ok_or(DomainError::ClubNotFound(club_id))?;

        if actor_id != target_id && !club.is_creator(actor_id) {
            return Err(DomainError::NotCreator.into());
        }
        if club.is_creator(target_id) {
            return Err(DomainError::CreatorCannotLeave.into());
        }

        let current_member_count = self
            .ctx
            .club_member_repo()
            .leave(club_id, target_id)
            .await?;

        info!(
            club_id = %club_id,
            user_id = %target_id,
            current_member_count,
            "User left club"
        );

        Ok(ClubLeaveResponse {
            club_id,
            current_member_count,
        })
    }

    /// List club members, ascending by join time
    #[instrument(skip(self))]
    pub async fn list_members(&self, club_id: Uuid) -> ServiceResult<Vec<MemberResponse>> {
        // 404 for an absent club, never an empty list
        let _club = self
            .ctx
            .club_repo()
            .find_by_id(club_id)
            .await?
            .ok_or(DomainError::ClubNotFound(club_id))?;

        let members = self.ctx.club_member_repo().find_by_club(club_id).await?;

        Ok(members.into_iter().map(MemberResponse::from).collect())
    }

    /// Issue an invite code (creator only)
    #[instrument(skip(self, request))]
    pub async fn create_invite(
        &self,
        club_id: Uuid,
        user_id: Uuid,
        request: CreateInviteRequest,
    ) -> ServiceResult<InviteResponse> {
        let club = self
            .ctx
            .club_repo()
            .find_by_id(club_id)
            .await?
            .ok_or(DomainError::ClubNotFound(club_id))?;

        if !club.is_creator(user_id) {
            return Err(DomainError::NotCreator.into());
        }

        let inviter = self
            .ctx
            .profile_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Profile", user_id.to_string()))?;

        let mut invite = ClubInvite::new(generate_invite_code(), club_id, user_id);
        if let Some(max_uses) = request.max_uses {
            invite = invite.with_max_uses(max_uses);
        }
        if let Some(hours) = request.expires_in_hours {
            invite = invite.with_expiry_hours(hours);
        }

        self.ctx.invite_repo().create(&invite).await?;

        info!(club_id = %club_id, code = %invite.code, "Invite created");

        Ok(InviteResponse::from(InviteWithInviter { invite, inviter }))
    }

    /// List a club's invites (creator only)
    #[instrument(skip(self))]
    pub async fn list_invites(
        &self,
        club_id: Uuid,
        user_id: Uuid,
    ) -> ServiceResult<Vec<InviteResponse>> {
        let club = self
            .ctx
            .club_repo()
            .find_by_id(club_id)
            .await?
            .ok_or(DomainError::ClubNotFound(club_id))?;

        if !club.is_creator(user_id) {
            return Err(DomainError::NotCreator.into());
        }

        // Invite creation is creator-only, so the creator is the inviter on
        // every row
        let inviter = self
            .ctx
            .profile_repo()
            .find_by_id(club.creator_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Profile", club.creator_id.to_string()))?;

        let invites = self.ctx.invite_repo().find_by_club(club_id).await?;

        Ok(invites
            .into_iter()
            .map(|invite| {
                InviteResponse::from(InviteWithInviter {
                    invite,
                    inviter: inviter.clone(),
                })
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    // Covered end to end in tests/integration
}
