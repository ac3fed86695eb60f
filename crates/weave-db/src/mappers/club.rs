//! BookClub entity <-> model mapper

use weave_core::{BookClub, GroupStatus};

use crate::models::ClubModel;

/// Convert ClubModel to BookClub entity
impl From<ClubModel> for BookClub {
    fn from(model: ClubModel) -> Self {
        BookClub {
            id: model.id,
            name: model.name,
            description: model.description,
            creator_id: model.creator_id,
            current_book_title: model.current_book_title,
            is_private: model.is_private,
            max_members: model.max_members,
            current_member_count: model.current_member_count,
            status: GroupStatus::parse(&model.status),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
