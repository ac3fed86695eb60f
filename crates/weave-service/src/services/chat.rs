//! Chat service
//!
//! The workshop chat relay. Membership is a trust boundary: listing and
//! sending both re-check it against the membership rows on every call,
//! never inferring it from the session.

use tracing::{info, instrument, warn};
use uuid::Uuid;
use weave_core::entities::{ChatMessage, MAX_MESSAGE_LEN};
use weave_core::DomainError;

use crate::dto::{MessageResponse, SendMessageRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Default and maximum number of messages returned per listing
const MESSAGE_WINDOW: i64 = 100;

/// Chat service
pub struct ChatService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ChatService<'a> {
    /// Create a new ChatService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List a workshop's recent messages, oldest first
    ///
    /// Non-members get `Forbidden`, never an empty list.
    #[instrument(skip(self))]
    pub async fn list_messages(
        &self,
        workshop_id: Uuid,
        user_id: Uuid,
        limit: Option<i64>,
    ) -> ServiceResult<Vec<MessageResponse>> {
        self.require_member(workshop_id, user_id).await?;

        let limit = limit.unwrap_or(MESSAGE_WINDOW).clamp(1, MESSAGE_WINDOW);
        let messages = self
            .ctx
            .message_repo()
            .find_by_workshop(workshop_id, limit)
            .await?;

        Ok(messages.into_iter().map(MessageResponse::from).collect())
    }

    /// Send a chat message
    ///
    /// The body is trimmed before validation; whitespace-only input is
    /// rejected without touching the database.
    #[instrument(skip(self, request))]
    pub async fn send_message(
        &self,
        workshop_id: Uuid,
        user_id: Uuid,
        request: SendMessageRequest,
    ) -> ServiceResult<MessageResponse> {
        self.require_member(workshop_id, user_id).await?;

        let content = request.message.trim();
        if content.is_empty() {
            return Err(DomainError::EmptyMessage.into());
        }
        if content.chars().count() > MAX_MESSAGE_LEN {
            return Err(DomainError::ContentTooLong {
                max: MAX_MESSAGE_LEN,
            }
            .into());
        }

        let sender = self
            .ctx
            .profile_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Profile", user_id.to_string()))?;

        let message = ChatMessage::new(
            self.ctx.generate_id(),
            workshop_id,
            user_id,
            content.to_string(),
        );
        self.ctx.message_repo().create(&message).await?;

        info!(workshop_id = %workshop_id, message_id = %message.id, "Message sent");

        // Best-effort activity bump; its failure must not fail the send
        if let Err(e) = self.ctx.workshop_repo().touch_activity(workshop_id).await {
            warn!(workshop_id = %workshop_id, error = %e, "Failed to bump workshop activity");
        }

        Ok(MessageResponse::from((message, sender)))
    }

    /// Delete a message (moderation)
    ///
    /// Allowed for the message sender or the workshop creator.
    #[instrument(skip(self))]
    pub async fn delete_message(
        &self,
        workshop_id: Uuid,
        message_id: Uuid,
        user_id: Uuid,
    ) -> ServiceResult<()> {
        let workshop = self
            .ctx
            .workshop_repo()
            .find_by_id(workshop_id)
            .await?
            .ok_or(DomainError::WorkshopNotFound(workshop_id))?;

        let message = self
            .ctx
            .message_repo()
            .find_by_id(message_id)
            .await?
            .ok_or(DomainError::MessageNotFound(message_id))?;

        // A message id from another workshop's log reads as absent
        if message.workshop_id != workshop_id {
            return Err(DomainError::MessageNotFound(message_id).into());
        }

        if !message.is_sender(user_id) && !workshop.is_creator(user_id) {
            return Err(ServiceError::forbidden(
                "Only the sender or the workshop creator can delete a message",
            ));
        }

        self.ctx.message_repo().delete(message_id).await?;

        info!(workshop_id = %workshop_id, message_id = %message_id, "Message deleted");

        Ok(())
    }

    /// Membership gate shared by every chat operation
    ///
    /// An absent workshop reads as `NotFound` before membership is checked,
    /// so callers can tell a missing workshop from a denied one.
    async fn require_member(&self, workshop_id: Uuid, user_id: Uuid) -> ServiceResult<()> {
        if self
            .ctx
            .workshop_repo()
            .find_by_id(workshop_id)
            .await?
            .is_none()
        {
            return Err(DomainError::WorkshopNotFound(workshop_id).into());
        }

        if !self
            .ctx
            .workshop_member_repo()
            .is_member(workshop_id, user_id)
            .await?
        {
            return Err(DomainError::NotMember.into());
        }

        Ok(())
    }
}
