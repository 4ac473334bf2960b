//! Image metadata entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "images")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub caption: String,
    pub location: String,
    pub credit: String,
    pub date: Date,
    pub photographer_id: Option<Uuid>,
    pub original_file_name: String,
    pub original_content_type: String,
    pub original_file_size: Option<i64>,
    pub original_updated_at: Option<DateTimeWithTimeZone>,
    pub published_url: String,
    pub thumbnail_url: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::author::Entity",
        from = "Column::PhotographerId",
        to = "super::author::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Photographer,
}

impl Related<super::author::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Photographer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Image.
impl From<Model> for newsroom_core::domain::Image {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            caption: model.caption,
            location: model.location,
            credit: model.credit,
            date: model.date,
            photographer_id: model.photographer_id,
            original_file_name: model.original_file_name,
            original_content_type: model.original_content_type,
            original_file_size: model.original_file_size,
            original_updated_at: model.original_updated_at.map(|at| at.into()),
            published_url: model.published_url,
            thumbnail_url: model.thumbnail_url,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

/// Conversion from Domain Image to SeaORM ActiveModel.
impl From<newsroom_core::domain::Image> for ActiveModel {
    fn from(image: newsroom_core::domain::Image) -> Self {
        Self {
            id: Set(image.id),
            caption: Set(image.caption),
            location: Set(image.location),
            credit: Set(image.credit),
            date: Set(image.date),
            photographer_id: Set(image.photographer_id),
            original_file_name: Set(image.original_file_name),
            original_content_type: Set(image.original_content_type),
            original_file_size: Set(image.original_file_size),
            original_updated_at: Set(image.original_updated_at.map(|at| at.into())),
            published_url: Set(image.published_url),
            thumbnail_url: Set(image.thumbnail_url),
            created_at: Set(image.created_at.into()),
            updated_at: Set(image.updated_at.into()),
        }
    }
}
