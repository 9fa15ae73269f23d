use listing_entity_derive::listing_entity;
use sea_orm::entity::prelude::*;

use super::Genres;

#[listing_entity(searchable = "name")]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "venues")]
pub struct Model {
    pub name: String,
    /// `name` folded for search; written alongside it.
    #[sea_orm(indexed)]
    pub name_key: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub genres: Genres,
    #[sea_orm(default_value = false)]
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    #[sea_orm(has_many)]
    pub shows: HasMany<super::show::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
