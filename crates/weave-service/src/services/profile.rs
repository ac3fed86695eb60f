//! Profile service
//!
//! Read and update operations for writer profiles.

use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{
    CurrentProfileResponse, ProfileWithStats, ProfileWithStatsResponse, UpdateProfileRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Profile service
pub struct ProfileService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProfileService<'a> {
    /// Create a new ProfileService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get the caller's own profile
    #[instrument(skip(self))]
    pub async fn get_current_profile(&self, user_id: Uuid) -> ServiceResult<CurrentProfileResponse> {
        let profile = self
            .ctx
            .profile_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Profile", user_id.to_string()))?;

        Ok(CurrentProfileResponse::from(profile))
    }

    /// Get a public profile with its contribution counters
    #[instrument(skip(self))]
    pub async fn get_profile(&self, user_id: Uuid) -> ServiceResult<ProfileWithStatsResponse> {
        let profile = self
            .ctx
            .profile_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Profile", user_id.to_string()))?;

        let workshops_created = self.ctx.workshop_repo().count_by_creator(user_id).await?;
        let clubs_created = self.ctx.club_repo().count_by_creator(user_id).await?;
        let threads_started = self.ctx.thread_repo().count_by_author(user_id).await?;

        Ok(ProfileWithStatsResponse::from(ProfileWithStats {
            profile,
            workshops_created,
            clubs_created,
            threads_started,
        }))
    }

    /// Update the caller's profile
    ///
    /// Empty strings clear the corresponding optional field.
    #[instrument(skip(self, request))]
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        request: UpdateProfileRequest,
    ) -> ServiceResult<CurrentProfileResponse> {
        let mut profile = self
            .ctx
            .profile_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Profile", user_id.to_string()))?;

        let mut changed = false;

        if let Some(display_name) = request.display_name {
            profile.set_display_name(if display_name.is_empty() {
                None
            } else {
                Some(display_name)
            });
            changed = true;
        }

        if let Some(avatar_url) = request.avatar_url {
            profile.set_avatar_url(if avatar_url.is_empty() {
                None
            } else {
                Some(avatar_url)
            });
            changed = true;
        }

        if let Some(bio) = request.bio {
            profile.set_bio(if bio.is_empty() { None } else { Some(bio) });
            changed = true;
        }

        if changed {
            self.ctx.profile_repo().update(&profile).await?;
            info!(user_id = %user_id, "Profile updated");
        }

        Ok(CurrentProfileResponse::from(profile))
    }
}

#[cfg(test)]
mod tests {
    // Covered end to end in tests/integration
}
