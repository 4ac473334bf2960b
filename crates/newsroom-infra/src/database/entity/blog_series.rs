//! Blog series entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blog_series")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub blog: String,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain BlogSeries.
impl From<Model> for newsroom_core::domain::BlogSeries {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            blog: model.blog,
            name: model.name,
            description: model.description,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

/// Conversion from Domain BlogSeries to SeaORM ActiveModel.
impl From<newsroom_core::domain::BlogSeries> for ActiveModel {
    fn from(series: newsroom_core::domain::BlogSeries) -> Self {
        Self {
            id: Set(series.id),
            blog: Set(series.blog),
            name: Set(series.name),
            description: Set(series.description),
            created_at: Set(series.created_at.into()),
            updated_at: Set(series.updated_at.into()),
        }
    }
}
