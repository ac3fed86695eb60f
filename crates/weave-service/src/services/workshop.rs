//! Workshop service
//!
//! Workshop lifecycle plus the join/leave handler. Membership mutations and
//! the participant counter move in one repository transaction, so the
//! returned counts are never stale.

use tracing::{info, instrument};
use uuid::Uuid;
use weave_core::entities::{GroupStatus, Workshop, WorkshopMember};
use weave_core::DomainError;

use crate::dto::{
    CreateWorkshopRequest, MemberResponse, UpdateWorkshopRequest, WorkshopDetailResponse,
    WorkshopJoinResponse, WorkshopLeaveResponse, WorkshopResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Maximum page size for workshop listings
const MAX_LIST_LIMIT: i64 = 100;

/// Workshop service
pub struct WorkshopService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> WorkshopService<'a> {
    /// Create a new WorkshopService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a workshop; the creator becomes the first member
    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn create_workshop(
        &self,
        creator_id: Uuid,
        request: CreateWorkshopRequest,
    ) -> ServiceResult<WorkshopResponse> {
        let workshop_id = self.ctx.generate_id();

        let mut workshop = Workshop::new(workshop_id, request.title, creator_id);
        workshop.description = request.description.filter(|d| !d.is_empty());
        workshop.genre = request.genre.filter(|g| !g.is_empty());
        if let Some(max_participants) = request.max_participants {
            workshop.max_participants = max_participants;
        }

        // Workshop row and creator membership land in one transaction
        self.ctx.workshop_repo().create_with_creator(&workshop).await?;

        info!(workshop_id = %workshop_id, creator_id = %creator_id, "Workshop created");

        Ok(WorkshopResponse::from(workshop))
    }

    /// Get a workshop with its creator's profile
    #[instrument(skip(self))]
    pub async fn get_workshop(&self, workshop_id: Uuid) -> ServiceResult<WorkshopDetailResponse> {
        let workshop = self
            .ctx
            .workshop_repo()
            .find_by_id(workshop_id)
            .await?
            .ok_or(DomainError::WorkshopNotFound(workshop_id))?;

        let creator = self
            .ctx
            .profile_repo()
            .find_by_id(workshop.creator_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Profile", workshop.creator_id.to_string()))?;

        Ok(WorkshopDetailResponse::from((workshop, creator)))
    }

    /// List workshops, newest first
    #[instrument(skip(self))]
    pub async fn list_workshops(
        &self,
        limit: i64,
        offset: i64,
    ) -> ServiceResult<Vec<WorkshopResponse>> {
        let workshops = self
            .ctx
            .workshop_repo()
            .list(limit.clamp(1, MAX_LIST_LIMIT), offset.max(0))
            .await?;

        Ok(workshops.into_iter().map(WorkshopResponse::from).collect())
    }

    /// Update a workshop's description or status (creator only)
    #[instrument(skip(self, request))]
    pub async fn update_workshop(
        &self,
        workshop_id: Uuid,
        actor_id: Uuid,
        request: UpdateWorkshopRequest,
    ) -> ServiceResult<WorkshopResponse> {
        let mut workshop = self
            .ctx
            .workshop_repo()
            .find_by_id(workshop_id)
            .await?
            .ok_or(DomainError::WorkshopNotFound(workshop_id))?;

        if !workshop.is_creator(actor_id) {
            return Err(DomainError::NotCreator.into());
        }

        let mut changed = false;

        if let Some(description) = request.description {
            workshop.set_description(if description.is_empty() {
                None
            } else {
                Some(description)
            });
            changed = true;
        }

        if let Some(status) = request.status {
            let status = match status.as_str() {
                "recruiting" => GroupStatus::Recruiting,
                "active" => GroupStatus::Active,
                "closed" => GroupStatus::Closed,
                _ => {
                    return Err(ServiceError::validation(
                        "Status must be recruiting, active, or closed",
                    ))
                }
            };
            workshop.set_status(status);
            changed = true;
        }

        if changed {
            self.ctx.workshop_repo().update(&workshop).await?;
            info!(workshop_id = %workshop_id, "Workshop updated");
        }

        Ok(WorkshopResponse::from(workshop))
    }

    /// Join a workshop
    ///
    /// Duplicate joins fail with `Conflict`; the membership uniqueness
    /// constraint backstops concurrent attempts.
    #[instrument(skip(self))]
    pub async fn join_workshop(
        &self,
        workshop_id: Uuid,
        user_id: Uuid,
    ) -> ServiceResult<WorkshopJoinResponse> {
        let workshop = self
            .ctx
            .workshop_repo()
            .find_by_id(workshop_id)
            .await?
            .ok_or(DomainError::WorkshopNotFound(workshop_id))?;

        if workshop.is_closed() {
            return Err(ServiceError::conflict("Workshop is closed"));
        }

        if self
            .ctx
            .workshop_member_repo()
            .is_member(workshop_id, user_id)
            .await?
        {
            return Err(DomainError::AlreadyMember.into());
        }

        let profile = self
            .ctx
            .profile_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Profile", user_id.to_string()))?;

        let member = WorkshopMember::new(workshop_id, user_id);
        let current_participants = self.ctx.workshop_member_repo().join(&member).await?;

        info!(
            workshop_id = %workshop_id,
            user_id = %user_id,
            current_participants,
            "Joined workshop"
        );

        Ok(WorkshopJoinResponse {
            member: MemberResponse::from((member, profile)),
            current_participants,
        })
    }

    /// Leave a workshop, or remove a member as the creator
    ///
    /// The creator cannot leave their own workshop.
    #[instrument(skip(self))]
    pub async fn leave_workshop(
        &self,
        workshop_id: Uuid,
        target_id: Uuid,
        actor_id: Uuid,
    ) -> ServiceResult<WorkshopLeaveResponse> {
        let workshop = self
            .ctx
            .workshop_repo()
            .find_by_id(workshop_id)
            .await?
            .ok_or(DomainError::WorkshopNotFound(workshop_id))?;

        if actor_id != target_id && !workshop.is_creator(actor_id) {
            return Err(DomainError::NotCreator.into());
        }

        if workshop.is_creator(target_id) {
            return Err(DomainError::CreatorCannotLeave.into());
        }

        let current_participants = self
            .ctx
            .workshop_member_repo()
            .leave(workshop_id, target_id)
            .await?;

        info!(
            workshop_id = %workshop_id,
            user_id = %target_id,
            current_participants,
            "Left workshop"
        );

        Ok(WorkshopLeaveResponse {
            workshop_id,
            current_participants,
        })
    }

    /// List workshop members with their profiles, ascending by join time
    #[instrument(skip(self))]
    pub async fn list_members(&self, workshop_id: Uuid) -> ServiceResult<Vec<MemberResponse>> {
        // 404 for an absent workshop, never an empty list
        let _workshop = self
            .ctx
            .workshop_repo()
            .find_by_id(workshop_id)
            .await?
            .ok_or(DomainError::WorkshopNotFound(workshop_id))?;

        let members = self
            .ctx
            .workshop_member_repo()
            .find_by_workshop(workshop_id)
            .await?;

        Ok(members.into_iter().map(MemberResponse::from).collect())
    }
}

#[cfg(test)]
mod tests {
    // Covered end to end in tests/integration
}
