pub trait HasCreatedAtColumn: sea_orm::EntityTrait {
    fn created_at_column() -> Self::Column;
}

/// Entities that can be looked up by a free-text name.
pub trait HasNameColumn: sea_orm::EntityTrait {
    /// Display name, used for ordering.
    fn name_column() -> Self::Column;
    /// The name folded with [`fold_name`](super::base::fold_name), used for matching.
    fn name_key_column() -> Self::Column;
}

pub trait HasIdActiveModel {
    fn set_id(&mut self, id: uuid::Uuid);
}

pub trait TimestampedActiveModel {
    fn set_created_at(&mut self, ts: sea_orm::entity::prelude::DateTimeWithTimeZone);
    fn set_updated_at(&mut self, ts: sea_orm::entity::prelude::DateTimeWithTimeZone);
}
