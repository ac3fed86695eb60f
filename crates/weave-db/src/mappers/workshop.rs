//! Workshop entity <-> model mapper

use weave_core::{GroupStatus, Workshop};

use crate::models::WorkshopModel;

/// Convert WorkshopModel to Workshop entity
impl From<WorkshopModel> for Workshop {
    fn from(model: WorkshopModel) -> Self {
        Workshop {
            id: model.id,
            title: model.title,
            description: model.description,
            genre: model.genre,
            creator_id: model.creator_id,
            max_participants: model.max_participants,
            current_participants: model.current_participants,
            status: GroupStatus::parse(&model.status),
            last_activity_at: model.last_activity_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
