use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::is_blank;
use crate::config::ContentConfig;
use crate::content::embed::{self, EmbedUrlError};
use crate::content::media::{self, MediaTag};
use crate::content::section::SectionPath;
use crate::content::slug::{self, SlugConfig};
use crate::content::visibility::Visibility;
use crate::error::ValidationErrors;
use crate::ports::{EmbeddedMediaResolver, ResolverError};

/// Post entity - an article in the newsroom.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub subtitle: String,
    pub teaser: String,
    /// Raw markup, may contain `{{Image:<id>}}` style tags.
    pub body: String,
    pub section: SectionPath,
    /// `None` is a draft.
    pub published_at: Option<DateTime<Utc>>,
    /// Provider video id; empty means no embed.
    pub embed_code: String,
    pub author_ids: Vec<Uuid>,
    pub image_id: Option<Uuid>,
    slug: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new, unpublished post.
    pub fn new(title: String, body: String, author_ids: Vec<Uuid>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            subtitle: String::new(),
            teaser: String::new(),
            body,
            section: SectionPath::default(),
            published_at: None,
            embed_code: String::new(),
            author_ids,
            image_id: None,
            slug: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the post belongs in public listings at `now`.
    pub fn is_published(&self, now: DateTime<Utc>) -> bool {
        Visibility::at(now).includes(self)
    }

    /// The body with embedded-media tags removed.
    pub fn body_text(&self) -> String {
        media::strip_tags(&self.body)
    }

    /// Tags referenced by the body, for preloading the assets a renderer needs.
    pub fn media_tags(&self) -> Vec<MediaTag> {
        media::parse_tags(&self.body)
    }

    /// Render the body through `resolver`. Resolver output and failures are
    /// returned as they are.
    pub fn render_body(&self, resolver: &dyn EmbeddedMediaResolver) -> Result<String, ResolverError> {
        resolver.render(&self.body)
    }

    pub fn embed_url(&self) -> Option<String> {
        embed::watch_url(&self.embed_code)
    }

    /// Store the video id found in `url`. A blank `url` removes the embed.
    pub fn set_embed_url(&mut self, url: &str) -> Result<(), EmbedUrlError> {
        if is_blank(url) {
            self.embed_code.clear();
        } else {
            self.embed_code = embed::parse_embed_code(url)?;
        }
        Ok(())
    }

    /// The friendly id `title` would get under this post's publication date.
    /// Drafts have no date and therefore no friendly id.
    pub fn normalize_friendly_id(&self, title: &str, config: &SlugConfig) -> Option<String> {
        self.published_at
            .map(|at| slug::normalize(title, at.date_naive(), config))
    }

    pub fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }

    /// Public path of the post, `/YYYY/MM/DD/<slug>`.
    pub fn permalink(&self) -> Option<String> {
        self.slug.as_ref().map(|slug| format!("/{}", slug))
    }

    /// Assign the slug once the post has a publication date.
    ///
    /// An assigned slug is kept across title and date edits; returns whether a
    /// new slug was assigned.
    pub fn ensure_slug(&mut self, config: &SlugConfig) -> bool {
        if self.slug.is_some() {
            return false;
        }
        self.slug = self.normalize_friendly_id(&self.title, config);
        self.slug.is_some()
    }

    /// Re-derive the slug from the current title and date.
    pub fn regenerate_slug(&mut self, config: &SlugConfig) -> Option<&str> {
        self.slug = self.normalize_friendly_id(&self.title, config);
        self.slug()
    }

    /// Put back a slug read from storage.
    pub fn restore_slug(&mut self, slug: Option<String>) {
        self.slug = slug;
    }

    pub fn validate(&self, config: &ContentConfig) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if is_blank(&self.title) {
            errors.add("title", "can't be blank");
        }
        if is_blank(&self.body) {
            errors.add("body", "can't be blank");
        }
        if self.author_ids.is_empty() {
            errors.add("authors", "can't be blank");
        }
        if self.teaser.chars().count() > config.teaser_max_chars {
            errors.add(
                "teaser",
                format!(
                    "is too long (maximum is {} characters)",
                    config.teaser_max_chars
                ),
            );
        }
        if is_multi_paragraph(&self.teaser) {
            errors.add("teaser", "must be a single paragraph");
        }
        self.section.validate("section", &mut errors);

        errors.into_result()
    }
}

fn is_multi_paragraph(text: &str) -> bool {
    text.trim()
        .replace("\r\n", "\n")
        .contains("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeDelta, TimeZone};

    enum FakeResolver {
        Renders(&'static str),
        MissingImage(&'static str),
    }

    impl EmbeddedMediaResolver for FakeResolver {
        fn render(&self, _body: &str) -> Result<String, ResolverError> {
            match self {
                Self::Renders(output) => Ok(output.to_string()),
                Self::MissingImage(id) => Err(ResolverError::MissingAsset {
                    kind: "Image".to_string(),
                    id: id.to_string(),
                }),
            }
        }
    }

    fn article() -> Post {
        let mut post = Post::new(
            "Oak arrives just in time".to_string(),
            "**Pikachu** wrecks everyone. The End.".to_string(),
            vec![Uuid::new_v4(), Uuid::new_v4()],
        );
        post.subtitle = "Oak arrives just in time".to_string();
        post.teaser = "Ash becomes new Pokemon Champion.".to_string();
        post.section = SectionPath::parse("/news/university");
        post
    }

    fn sentences(count: usize) -> String {
        vec!["Pikachu refuses to enter the pokeball once again today."; count].join(" ")
    }

    #[test]
    fn test_valid_article() {
        assert!(article().validate(&ContentConfig::default()).is_ok());
    }

    #[test]
    fn test_requires_title_body_and_authors() {
        let mut post = article();
        post.title = "  ".to_string();
        post.body = String::new();
        post.author_ids.clear();

        let errors = post.validate(&ContentConfig::default()).unwrap_err();

        assert!(errors.contains("title"));
        assert!(errors.contains("body"));
        assert!(errors.contains("authors"));
    }

    #[test]
    fn test_allows_short_teaser() {
        let mut post = article();
        post.teaser = sentences(3);
        assert!(post.validate(&ContentConfig::default()).is_ok());
    }

    #[test]
    fn test_rejects_long_teaser() {
        let mut post = article();
        post.teaser = sentences(10);
        let errors = post.validate(&ContentConfig::default()).unwrap_err();
        assert!(errors.contains("teaser"));
    }

    #[test]
    fn test_rejects_teaser_with_paragraph_break() {
        let mut post = article();
        post.teaser = "First.\r\n\r\nSecond.".to_string();
        let errors = post.validate(&ContentConfig::default()).unwrap_err();
        assert_eq!(errors.messages("teaser"), ["must be a single paragraph"]);
    }

    #[test]
    fn test_teaser_limit_is_configurable() {
        let mut post = article();
        post.teaser = sentences(10);
        let config = ContentConfig {
            teaser_max_chars: 2_000,
            ..ContentConfig::default()
        };
        assert!(post.validate(&config).is_ok());
    }

    #[test]
    fn test_published_follows_publication_time() {
        let now = Utc::now();
        let mut post = article();

        post.published_at = None;
        assert!(!post.is_published(now));

        post.published_at = Some(now - TimeDelta::days(1));
        assert!(post.is_published(now));

        post.published_at = Some(now + TimeDelta::days(1));
        assert!(!post.is_published(now));
    }

    #[test]
    fn test_body_text_strips_embedded_tags() {
        let mut post = article();
        post.body = "<p>{{Image:5}}This paragraph has an embedded image.</p>".to_string();
        assert_eq!(post.body_text(), "<p>This paragraph has an embedded image.</p>");
    }

    #[test]
    fn test_render_body_returns_resolver_output() {
        let post = article();
        let resolver = FakeResolver::Renders("Pikachu won't enter his Pokeball.");
        assert_eq!(
            post.render_body(&resolver).unwrap(),
            "Pikachu won't enter his Pokeball."
        );
    }

    #[test]
    fn test_render_body_propagates_resolver_failure() {
        let post = article();
        let resolver = FakeResolver::MissingImage("5");
        assert!(matches!(
            post.render_body(&resolver),
            Err(ResolverError::MissingAsset { .. })
        ));
    }

    #[test]
    fn test_embed_url_is_none_without_code() {
        let mut post = article();
        post.embed_code = String::new();
        assert_eq!(post.embed_url(), None);
    }

    #[test]
    fn test_embed_url_from_code() {
        let mut post = article();
        post.embed_code = "JuYeHPFR3f0".to_string();
        assert_eq!(
            post.embed_url().as_deref(),
            Some("//www.youtube.com/watch?v=JuYeHPFR3f0")
        );
    }

    #[test]
    fn test_set_embed_url_parses_code() {
        let mut post = article();
        post.set_embed_url("http://www.youtube.com/watch?v=JuYeHPFR3f0")
            .unwrap();
        assert_eq!(post.embed_code, "JuYeHPFR3f0");
        assert_eq!(
            post.embed_url().as_deref(),
            Some("//www.youtube.com/watch?v=JuYeHPFR3f0")
        );

        post.set_embed_url("").unwrap();
        assert_eq!(post.embed_url(), None);
    }

    #[test]
    fn test_set_embed_url_rejects_unknown_provider_and_keeps_code() {
        let mut post = article();
        post.embed_code = "JuYeHPFR3f0".to_string();
        assert!(post.set_embed_url("https://vimeo.com/1").is_err());
        assert_eq!(post.embed_code, "JuYeHPFR3f0");
    }

    #[test]
    fn test_friendly_id_uses_publication_date() {
        let mut post = article();
        post.published_at = Some(
            NaiveDate::from_ymd_opt(1999, 11, 10)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
                .and_utc(),
        );

        let slug = post
            .normalize_friendly_id("Ash defeats Gary in Indigo Plateau", &SlugConfig::default())
            .unwrap();

        assert_eq!(slug, "1999/11/10/ash-defeats-gary-indigo-plateau");
    }

    #[test]
    fn test_drafts_get_no_slug() {
        let mut post = article();
        assert!(!post.ensure_slug(&SlugConfig::default()));
        assert_eq!(post.slug(), None);
        assert_eq!(post.permalink(), None);
    }

    #[test]
    fn test_slug_is_stable_across_title_edits() {
        let mut post = article();
        post.published_at = Some(Utc.with_ymd_and_hms(2013, 2, 4, 12, 0, 0).unwrap());
        assert!(post.ensure_slug(&SlugConfig::default()));
        assert_eq!(post.slug(), Some("2013/02/04/oak-arrives-just-time"));

        post.title = "Oak arrives late".to_string();
        assert!(!post.ensure_slug(&SlugConfig::default()));
        assert_eq!(post.permalink().as_deref(), Some("/2013/02/04/oak-arrives-just-time"));

        assert_eq!(
            post.regenerate_slug(&SlugConfig::default()),
            Some("2013/02/04/oak-arrives-late")
        );
    }

    #[test]
    fn test_slug_keeps_original_date_after_rescheduling() {
        let mut post = article();
        post.published_at = Some(Utc.with_ymd_and_hms(2013, 2, 4, 12, 0, 0).unwrap());
        post.ensure_slug(&SlugConfig::default());

        post.published_at = Some(Utc.with_ymd_and_hms(2013, 3, 9, 8, 0, 0).unwrap());
        assert!(!post.ensure_slug(&SlugConfig::default()));
        assert_eq!(post.slug(), Some("2013/02/04/oak-arrives-just-time"));

        assert_eq!(
            post.regenerate_slug(&SlugConfig::default()),
            Some("2013/03/09/oak-arrives-just-time")
        );
    }
}
