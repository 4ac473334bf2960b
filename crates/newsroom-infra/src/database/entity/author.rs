//! Author entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "authors")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub affiliation: String,
    pub tagline: String,
    pub twitter: String,
    pub columnist: bool,
    #[sea_orm(column_type = "Text")]
    pub biography: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::post_author::Entity")]
    PostAuthor,
}

impl Related<super::post_author::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PostAuthor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Author.
impl From<Model> for newsroom_core::domain::Author {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            affiliation: model.affiliation,
            tagline: model.tagline,
            twitter: model.twitter,
            columnist: model.columnist,
            biography: model.biography,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

/// Conversion from Domain Author to SeaORM ActiveModel.
impl From<newsroom_core::domain::Author> for ActiveModel {
    fn from(author: newsroom_core::domain::Author) -> Self {
        Self {
            id: Set(author.id),
            name: Set(author.name),
            affiliation: Set(author.affiliation),
            tagline: Set(author.tagline),
            twitter: Set(author.twitter),
            columnist: Set(author.columnist),
            biography: Set(author.biography),
            created_at: Set(author.created_at.into()),
            updated_at: Set(author.updated_at.into()),
        }
    }
}
