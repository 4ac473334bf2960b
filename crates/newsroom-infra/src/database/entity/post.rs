//! Post entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use newsroom_core::content::SectionPath;
use newsroom_core::domain::Post;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub subtitle: String,
    #[sea_orm(column_type = "Text")]
    pub teaser: String,
    #[sea_orm(column_type = "Text")]
    pub body: String,
    /// Section path in its textual form, `News/University`.
    pub section: String,
    pub published_at: Option<DateTimeWithTimeZone>,
    pub embed_code: String,
    pub image_id: Option<Uuid>,
    #[sea_orm(unique)]
    pub slug: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::image::Entity",
        from = "Column::ImageId",
        to = "super::image::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Image,
    #[sea_orm(has_many = "super::post_author::Entity")]
    PostAuthor,
}

impl Related<super::image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Image.def()
    }
}

impl Related<super::post_author::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PostAuthor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Rebuild the domain post. Author ids live in `post_authors`.
    pub fn into_post(self, author_ids: Vec<Uuid>) -> Post {
        let mut post = Post::new(self.title, self.body, author_ids);
        post.id = self.id;
        post.subtitle = self.subtitle;
        post.teaser = self.teaser;
        post.section = SectionPath::parse(&self.section);
        post.published_at = self.published_at.map(|at| at.into());
        post.embed_code = self.embed_code;
        post.image_id = self.image_id;
        post.restore_slug(self.slug);
        post.created_at = self.created_at.into();
        post.updated_at = self.updated_at.into();
        post
    }
}

/// Conversion from Domain Post to SeaORM ActiveModel.
impl From<&Post> for ActiveModel {
    fn from(post: &Post) -> Self {
        Self {
            id: Set(post.id),
            title: Set(post.title.clone()),
            subtitle: Set(post.subtitle.clone()),
            teaser: Set(post.teaser.clone()),
            body: Set(post.body.clone()),
            section: Set(post.section.to_string()),
            published_at: Set(post.published_at.map(|at| at.into())),
            embed_code: Set(post.embed_code.clone()),
            image_id: Set(post.image_id),
            slug: Set(post.slug().map(str::to_string)),
            created_at: Set(post.created_at.into()),
            updated_at: Set(post.updated_at.into()),
        }
    }
}
