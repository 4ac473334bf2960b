//! Embedded-media tags in post bodies (`{{Image:5}}`).

use std::fmt;
use std::ops::Range;
use std::sync::LazyLock;

use regex::{Captures, Regex};

static MEDIA_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([A-Za-z][A-Za-z0-9_]*)\s*:\s*([^{}\s]+)\s*\}\}")
        .expect("media tag pattern is valid")
});

/// What an embedded tag points at.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Image,
    Video,
    /// Any other tag name; kept so callers can report it.
    Other(String),
}

impl MediaKind {
    fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "image" => Self::Image,
            "video" => Self::Video,
            _ => Self::Other(name.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Image => "Image",
            Self::Video => "Video",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One parsed `{{Kind:id}}` occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaTag {
    pub kind: MediaKind,
    pub id: String,
    /// Byte range of the whole tag in the body it was parsed from.
    pub span: Range<usize>,
}

impl MediaTag {
    fn from_captures(caps: &Captures<'_>) -> Self {
        // Groups 0-2 always participate in a match of MEDIA_TAG.
        let whole = caps.get(0).map(|m| m.range()).unwrap_or_default();
        let name = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
        let id = caps.get(2).map(|m| m.as_str()).unwrap_or_default();
        Self {
            kind: MediaKind::from_name(name),
            id: id.to_string(),
            span: whole,
        }
    }
}

/// All tags in `body`, in order of appearance.
pub fn parse_tags(body: &str) -> Vec<MediaTag> {
    MEDIA_TAG
        .captures_iter(body)
        .map(|caps| MediaTag::from_captures(&caps))
        .collect()
}

/// `body` with every tag removed and nothing else touched.
pub fn strip_tags(body: &str) -> String {
    MEDIA_TAG.replace_all(body, "").into_owned()
}

/// Replace every tag with the output of `render`, stopping at the first error.
pub fn replace_tags<F, E>(body: &str, mut render: F) -> Result<String, E>
where
    F: FnMut(&MediaTag) -> Result<String, E>,
{
    let mut out = String::with_capacity(body.len());
    let mut last = 0;
    for tag in parse_tags(body) {
        out.push_str(&body[last..tag.span.start]);
        out.push_str(&render(&tag)?);
        last = tag.span.end;
    }
    out.push_str(&body[last..]);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_embedded_tags() {
        let body = "<p>{{Image:5}}This paragraph has an embedded image.</p>";
        assert_eq!(
            strip_tags(body),
            "<p>This paragraph has an embedded image.</p>"
        );
    }

    #[test]
    fn test_strips_every_kind_of_tag() {
        let body = "Before {{Video:JuYeHPFR3f0}}middle{{Gallery:12}} after";
        assert_eq!(strip_tags(body), "Before middle after");
    }

    #[test]
    fn test_leaves_text_without_tags_alone() {
        let body = "<p>{not a tag} and {{also not}}</p>";
        assert_eq!(strip_tags(body), body);
    }

    #[test]
    fn test_parses_kind_and_id() {
        let tags = parse_tags("{{Image:5}} text {{ video : abc_123 }} {{Poll:7}}");

        assert_eq!(tags.len(), 3);
        assert_eq!(tags[0].kind, MediaKind::Image);
        assert_eq!(tags[0].id, "5");
        assert_eq!(tags[0].span, 0..11);
        assert_eq!(tags[1].kind, MediaKind::Video);
        assert_eq!(tags[1].id, "abc_123");
        assert_eq!(tags[2].kind, MediaKind::Other("Poll".to_string()));
    }

    #[test]
    fn test_replace_tags_keeps_surrounding_text() {
        let rendered: Result<String, ()> =
            replace_tags("<p>{{Image:5}}Caption</p>", |tag| Ok(format!("[{}]", tag.id)));
        assert_eq!(rendered.unwrap(), "<p>[5]Caption</p>");
    }

    #[test]
    fn test_replace_tags_stops_on_error() {
        let rendered = replace_tags("{{Image:1}}{{Image:2}}", |tag| {
            if tag.id == "2" { Err(tag.id.clone()) } else { Ok(String::new()) }
        });
        assert_eq!(rendered, Err("2".to_string()));
    }
}
