use listing_entity_derive::listing_entity;
use sea_orm::entity::prelude::*;

/// One booking of an artist at a venue. Deleting either side removes it.
#[listing_entity]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "shows")]
pub struct Model {
    #[sea_orm(indexed)]
    pub artist_id: Uuid,
    #[sea_orm(indexed)]
    pub venue_id: Uuid,
    #[sea_orm(indexed)]
    pub start_time: DateTimeUtc,
    #[sea_orm(belongs_to, from = "artist_id", to = "id", on_delete = "Cascade")]
    pub artist: HasOne<super::artist::Entity>,
    #[sea_orm(belongs_to, from = "venue_id", to = "id", on_delete = "Cascade")]
    pub venue: HasOne<super::venue::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
