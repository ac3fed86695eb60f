//! Authentication service
//!
//! Handles registration, login, token refresh, and logout. Refresh tokens
//! are anchored to a session row: every sign-in opens a session, refresh
//! rotates it, logout deletes it. Access tokens stay stateless.

use tracing::{info, instrument, warn};
use uuid::Uuid;
use weave_common::auth::{hash_password, validate_password_strength, verify_password};
use weave_common::AppError;
use weave_core::entities::{Profile, Session};
use weave_core::DomainError;

use crate::dto::{
    AuthResponse, CurrentProfileResponse, LoginRequest, RefreshTokenRequest, RegisterRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new writer profile
    #[instrument(skip(self, request), fields(username = %request.username, email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        // Validate password strength before proceeding
        validate_password_strength(&request.password).map_err(ServiceError::from)?;

        if self
            .ctx
            .profile_repo()
            .username_exists(&request.username)
            .await?
        {
            return Err(DomainError::UsernameTaken.into());
        }

        if self.ctx.profile_repo().email_exists(&request.email).await? {
            return Err(DomainError::EmailAlreadyExists.into());
        }

        // Hash password
        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        let user_id = self.ctx.generate_id();
        let profile = Profile::new(user_id, request.username, request.email);

        self.ctx
            .profile_repo()
            .create(&profile, &password_hash)
            .await?;

        info!(user_id = %user_id, "Profile registered");

        self.open_session(&profile).await
    }

    /// Login with email and password
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let profile = self
            .ctx
            .profile_repo()
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                warn!(email = %request.email, "Login failed: profile not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .profile_repo()
            .get_password_hash(profile.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %profile.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = %profile.id, "Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        info!(user_id = %profile.id, "Logged in");

        self.open_session(&profile).await
    }

    /// Rotate the session named by a refresh token and issue a new token pair
    #[instrument(skip(self, request))]
    pub async fn refresh_tokens(&self, request: RefreshTokenRequest) -> ServiceResult<AuthResponse> {
        let claims = self
            .ctx
            .jwt_service()
            .validate_refresh_token(&request.refresh_token)
            .map_err(ServiceError::from)?;

        let session_id = claims.session_id().map_err(ServiceError::from)?;
        let user_id = claims.user_id().map_err(ServiceError::from)?;

        // The session row must still be live; a logged-out token is dead even
        // if its signature validates
        let session = self
            .ctx
            .session_repo()
            .find_by_id(session_id)
            .await?
            .ok_or(ServiceError::App(AppError::InvalidToken))?;

        if session.user_id != user_id {
            warn!(user_id = %user_id, session_id = %session_id, "Refresh rejected: session owner mismatch");
            return Err(ServiceError::App(AppError::InvalidToken));
        }

        if session.is_expired() {
            self.ctx.session_repo().delete(session.id).await?;
            return Err(ServiceError::App(AppError::TokenExpired));
        }

        let profile = self
            .ctx
            .profile_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Profile", user_id.to_string()))?;

        // Rotate: the old session dies with the old refresh token
        self.ctx.session_repo().delete(session.id).await?;

        info!(user_id = %user_id, "Tokens refreshed");

        self.open_session(&profile).await
    }

    /// Logout by deleting a session
    ///
    /// With a refresh token in the request the named session is closed;
    /// otherwise the session carried by the caller's access token is.
    #[instrument(skip(self, refresh_token))]
    pub async fn logout(
        &self,
        user_id: Uuid,
        session_id: Uuid,
        refresh_token: Option<String>,
    ) -> ServiceResult<()> {
        let target = match refresh_token {
            Some(token) => {
                let claims = self
                    .ctx
                    .jwt_service()
                    .validate_refresh_token(&token)
                    .map_err(ServiceError::from)?;

                let token_user = claims.user_id().map_err(ServiceError::from)?;
                if token_user != user_id {
                    warn!(user_id = %user_id, "Logout rejected: token belongs to another user");
                    return Err(ServiceError::App(AppError::InvalidToken));
                }

                claims.session_id().map_err(ServiceError::from)?
            }
            None => session_id,
        };

        // Idempotent: deleting an already-closed session is not an error
        self.ctx.session_repo().delete(target).await?;

        info!(user_id = %user_id, "Logged out");
        Ok(())
    }

    /// Open a session and issue a token pair bound to it
    async fn open_session(&self, profile: &Profile) -> ServiceResult<AuthResponse> {
        let session = Session::new(
            self.ctx.generate_id(),
            profile.id,
            self.ctx.jwt_service().refresh_token_expiry(),
        );
        self.ctx.session_repo().create(&session).await?;

        let token_pair = self
            .ctx
            .jwt_service()
            .generate_token_pair(profile.id, session.id)
            .map_err(ServiceError::from)?;

        Ok(AuthResponse::new(
            token_pair.access_token,
            token_pair.refresh_token,
            token_pair.expires_in,
            CurrentProfileResponse::from(profile),
        ))
    }
}
