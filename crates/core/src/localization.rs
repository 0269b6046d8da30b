//! Per-field language fallback for localized content rows.
//!
//! Every localizable column `f` has nullable override columns `f_ar`,
//! `f_fr` and `f_es`. English is the base language and is always populated.
//! [`localize`] picks, field by field, the override for the requested
//! language when it is a non-blank string and the base value otherwise, so a
//! row may come back with an Arabic title and an English body.

use serde::Serialize;
use serde_json::{Map, Value};

/// Languages the public site is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    En,
    Ar,
    Fr,
    Es,
}

impl Language {
    pub const ALL: [Language; 4] = [Language::En, Language::Ar, Language::Fr, Language::Es];

    /// Parse a language tag leniently.
    ///
    /// Accepts bare codes in any case and region-qualified tags
    /// (`"ar-SA"`, `"fr_CA"`). Anything unrecognised, including an absent
    /// tag, resolves to the base language.
    pub fn from_tag(tag: Option<&str>) -> Self {
        let Some(tag) = tag else {
            return Language::En;
        };
        let primary = tag
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or("")
            .to_ascii_lowercase();
        match primary.as_str() {
            "ar" => Language::Ar,
            "fr" => Language::Fr,
            "es" => Language::Es,
            _ => Language::En,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
            Language::Fr => "fr",
            Language::Es => "es",
        }
    }

    /// Column suffix for override fields; `None` for the base language.
    pub fn column_suffix(self) -> Option<&'static str> {
        match self {
            Language::En => None,
            other => Some(other.code()),
        }
    }

    /// URL path prefix used by the public site (`""` for English).
    pub fn path_prefix(self) -> &'static str {
        match self {
            Language::En => "",
            Language::Ar => "/ar",
            Language::Fr => "/fr",
            Language::Es => "/es",
        }
    }
}

/// A persisted row with localizable base fields.
///
/// Implementors list the base column names; the override columns are
/// derived by appending `_{code}`.
pub trait Localized: Serialize {
    const LOCALIZED_FIELDS: &'static [&'static str];

    /// Serialize the row and apply [`localize_object`] with this type's
    /// field list.
    fn localized(&self, lang: Language) -> Result<Value, serde_json::Error> {
        localize(self, Self::LOCALIZED_FIELDS, lang)
    }
}

/// Serialize `row` to a JSON object and apply language fallback to `fields`.
///
/// Non-object serializations are returned unchanged.
pub fn localize<T: Serialize + ?Sized>(
    row: &T,
    fields: &[&str],
    lang: Language,
) -> Result<Value, serde_json::Error> {
    match serde_json::to_value(row)? {
        Value::Object(map) => Ok(Value::Object(localize_object(&map, fields, lang))),
        other => Ok(other),
    }
}

/// Return a shallow copy of `row` where every field in `fields` is replaced
/// by its `{field}_{lang}` override when that override is a non-blank
/// string.
pub fn localize_object(
    row: &Map<String, Value>,
    fields: &[&str],
    lang: Language,
) -> Map<String, Value> {
    let mut out = row.clone();
    let Some(suffix) = lang.column_suffix() else {
        return out;
    };

    for field in fields {
        let key = format!("{field}_{suffix}");
        if let Some(Value::String(text)) = row.get(&key) {
            if !text.trim().is_empty() {
                out.insert((*field).to_string(), Value::String(text.clone()));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row() -> Map<String, Value> {
        json!({
            "id": 7,
            "title": "Hello",
            "title_ar": "مرحبا",
            "title_fr": null,
            "title_es": "",
            "content": "Body",
            "content_ar": null,
            "content_fr": "Corps",
            "content_es": "   ",
        })
        .as_object()
        .cloned()
        .unwrap()
    }

    const FIELDS: &[&str] = &["title", "content"];

    #[test]
    fn parses_tags_leniently() {
        assert_eq!(Language::from_tag(Some("ar")), Language::Ar);
        assert_eq!(Language::from_tag(Some("AR")), Language::Ar);
        assert_eq!(Language::from_tag(Some("ar-SA")), Language::Ar);
        assert_eq!(Language::from_tag(Some("fr_CA")), Language::Fr);
        assert_eq!(Language::from_tag(Some(" es ")), Language::Es);
    }

    #[test]
    fn unknown_and_missing_tags_fall_back_to_base() {
        assert_eq!(Language::from_tag(None), Language::En);
        assert_eq!(Language::from_tag(Some("")), Language::En);
        assert_eq!(Language::from_tag(Some("de")), Language::En);
        assert_eq!(Language::from_tag(Some("english")), Language::En);
    }

    #[test]
    fn base_language_is_an_unmodified_copy() {
        let out = localize_object(&row(), FIELDS, Language::En);
        assert_eq!(out, row());
    }

    #[test]
    fn fields_fall_back_independently() {
        let out = localize_object(&row(), FIELDS, Language::Ar);
        assert_eq!(out["title"], "مرحبا");
        assert_eq!(out["content"], "Body");

        let out = localize_object(&row(), FIELDS, Language::Fr);
        assert_eq!(out["title"], "Hello");
        assert_eq!(out["content"], "Corps");
    }

    #[test]
    fn blank_overrides_fall_back() {
        let out = localize_object(&row(), FIELDS, Language::Es);
        assert_eq!(out["title"], "Hello");
        assert_eq!(out["content"], "Body");
    }

    #[test]
    fn fields_not_listed_are_untouched() {
        let out = localize_object(&row(), &["content"], Language::Ar);
        assert_eq!(out["title"], "Hello");
    }

    #[test]
    fn fallback_holds_for_every_language() {
        let base_only = json!({ "title": "Base", "title_ar": null, "title_fr": null, "title_es": null });
        let map = base_only.as_object().unwrap();
        for lang in Language::ALL {
            assert_eq!(localize_object(map, &["title"], lang)["title"], "Base");
        }
    }

    #[derive(Serialize)]
    struct Card {
        description: String,
        description_ar: Option<String>,
        description_fr: Option<String>,
        description_es: Option<String>,
    }

    impl Localized for Card {
        const LOCALIZED_FIELDS: &'static [&'static str] = &["description"];
    }

    #[test]
    fn trait_uses_field_list() {
        let card = Card {
            description: "Fast".into(),
            description_ar: None,
            description_fr: Some("Rapide".into()),
            description_es: None,
        };
        assert_eq!(card.localized(Language::Fr).unwrap()["description"], "Rapide");
        assert_eq!(card.localized(Language::Ar).unwrap()["description"], "Fast");
    }
}
