//! Discussion thread service
//!
//! Threads carry a denormalized `reply_count` and `last_activity_at`;
//! both move with the reply row inside the repository transaction.

use chrono::Utc;
use tracing::{info, instrument};
use uuid::Uuid;
use weave_core::entities::{DiscussionThread, ThreadReply};
use weave_core::DomainError;

use crate::dto::{
    CreateReplyRequest, CreateThreadRequest, ReplyResponse, ThreadResponse, UpdateReplyRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Maximum number of threads returned per listing page
const MAX_LIST_LIMIT: i64 = 100;

/// Discussion thread service
pub struct ThreadService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ThreadService<'a> {
    /// Create a new ThreadService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Start a discussion thread
    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn create_thread(
        &self,
        author_id: Uuid,
        request: CreateThreadRequest,
    ) -> ServiceResult<ThreadResponse> {
        let author = self
            .ctx
            .profile_repo()
            .find_by_id(author_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Profile", author_id.to_string()))?;

        let mut thread = DiscussionThread::new(
            self.ctx.generate_id(),
            request.title,
            request.content,
            author_id,
        );
        thread.category = request.category.filter(|c| !c.is_empty());

        self.ctx.thread_repo().create(&thread).await?;

        info!(thread_id = %thread.id, "Thread created");

        Ok(ThreadResponse::from((thread, author)))
    }

    /// Fetch a single thread
    #[instrument(skip(self))]
    pub async fn get_thread(&self, thread_id: Uuid) -> ServiceResult<ThreadResponse> {
        let thread = self
            .ctx
            .thread_repo()
            .find_by_id(thread_id)
            .await?
            .ok_or(DomainError::ThreadNotFound(thread_id))?;

        let author = self
            .ctx
            .profile_repo()
            .find_by_id(thread.author_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Profile", thread.author_id.to_string()))?;

        Ok(ThreadResponse::from((thread, author)))
    }

    /// List threads, most recent activity first
    #[instrument(skip(self))]
    pub async fn list_threads(
        &self,
        limit: i64,
        offset: i64,
    ) -> ServiceResult<Vec<ThreadResponse>> {
        let threads = self
            .ctx
            .thread_repo()
            .list(limit.clamp(1, MAX_LIST_LIMIT), offset.max(0))
            .await?;

        Ok(threads.into_iter().map(ThreadResponse::from).collect())
    }

    /// Lock or unlock a thread for new replies (author only)
    #[instrument(skip(self))]
    pub async fn lock_thread(
        &self,
        thread_id: Uuid,
        user_id: Uuid,
        locked: bool,
    ) -> ServiceResult<ThreadResponse> {
        let mut thread = self
            .ctx
            .thread_repo()
            .find_by_id(thread_id)
            .await?
            .ok_or(DomainError::ThreadNotFound(thread_id))?;

        if !thread.is_author(user_id) {
            return Err(DomainError::NotAuthor.into());
        }

        self.ctx.thread_repo().set_locked(thread_id, locked).await?;
        thread.is_locked = locked;

        info!(thread_id = %thread_id, locked, "Thread lock changed");

        let author = self
            .ctx
            .profile_repo()
            .find_by_id(thread.author_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Profile", thread.author_id.to_string()))?;

        Ok(ThreadResponse::from((thread, author)))
    }

    /// Reply to a thread
    ///
    /// The reply row, the thread's reply_count, and its last_activity_at
    /// move in one transaction inside the repository.
    #[instrument(skip(self, request))]
    pub async fn create_reply(
        &self,
        thread_id: Uuid,
        author_id: Uuid,
        request: CreateReplyRequest,
    ) -> ServiceResult<ReplyResponse> {
        let thread = self
            .ctx
            .thread_repo()
            .find_by_id(thread_id)
            .await?
            .ok_or(DomainError::ThreadNotFound(thread_id))?;

        if thread.is_locked {
            return Err(DomainError::ThreadLocked.into());
        }

        // A parent must be a reply of this same thread
        if let Some(parent_id) = request.parent_reply_id {
            let parent = self
                .ctx
                .reply_repo()
                .find_by_id(parent_id)
                .await?
                .ok_or(DomainError::InvalidParentReply)?;
            if parent.thread_id != thread_id {
                return Err(DomainError::InvalidParentReply.into());
            }
        }

        let author = self
            .ctx
            .profile_repo()
            .find_by_id(author_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Profile", author_id.to_string()))?;

        let reply = match request.parent_reply_id {
            Some(parent_id) => ThreadReply::new_nested(
                self.ctx.generate_id(),
                thread_id,
                author_id,
                request.content,
                parent_id,
            ),
            None => ThreadReply::new(
                self.ctx.generate_id(),
                thread_id,
                author_id,
                request.content,
            ),
        };

        self.ctx.reply_repo().create(&reply).await?;

        info!(thread_id = %thread_id, reply_id = %reply.id, "Reply posted");

        Ok(ReplyResponse::from((reply, author)))
    }

    /// List a thread's replies, oldest first
    #[instrument(skip(self))]
    pub async fn list_replies(&self, thread_id: Uuid) -> ServiceResult<Vec<ReplyResponse>> {
        // 404 for an absent thread, never an empty list
        let _thread = self
            .ctx
            .thread_repo()
            .find_by_id(thread_id)
            .await?
            .ok_or(DomainError::ThreadNotFound(thread_id))?;

        let replies = self.ctx.reply_repo().find_by_thread(thread_id).await?;

        Ok(replies.into_iter().map(ReplyResponse::from).collect())
    }

    /// Edit a reply (author only, within the edit window)
    #[instrument(skip(self, request))]
    pub async fn update_reply(
        &self,
        reply_id: Uuid,
        user_id: Uuid,
        request: UpdateReplyRequest,
    ) -> ServiceResult<ReplyResponse> {
        let mut reply = self
            .ctx
            .reply_repo()
            .find_by_id(reply_id)
            .await?
            .ok_or(DomainError::ReplyNotFound(reply_id))?;

        if !reply.is_author(user_id) {
            return Err(DomainError::NotAuthor.into());
        }
        if !reply.editable_at(Utc::now()) {
            return Err(DomainError::EditWindowClosed.into());
        }

        reply.edit(request.content);
        self.ctx.reply_repo().update(&reply).await?;

        info!(reply_id = %reply_id, "Reply edited");

        let author = self
            .ctx
            .profile_repo()
            .find_by_id(reply.author_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Profile", reply.author_id.to_string()))?;

        Ok(ReplyResponse::from((reply, author)))
    }

    /// Delete a reply (reply author or thread author)
    #[instrument(skip(self))]
    pub async fn delete_reply(&self, reply_id: Uuid, user_id: Uuid) -> ServiceResult<()> {
        let reply = self
            .ctx
            .reply_repo()
            .find_by_id(reply_id)
            .await?
            .ok_or(DomainError::ReplyNotFound(reply_id))?;

        let thread = self
            .ctx
            .thread_repo()
            .find_by_id(reply.thread_id)
            .await?
            .ok_or(DomainError::ThreadNotFound(reply.thread_id))?;

        if !reply.is_author(user_id) && !thread.is_author(user_id) {
            return Err(DomainError::NotAuthor.into());
        }

        self.ctx.reply_repo().delete(reply_id).await?;

        info!(reply_id = %reply_id, thread_id = %reply.thread_id, "Reply deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    // Covered end to end in tests/integration
}
