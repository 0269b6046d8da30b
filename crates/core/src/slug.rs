//! URL slug generation and validation for blog posts.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

/// Maximum slug length in characters.
pub const MAX_SLUG_LEN: usize = 120;

static NON_SLUG_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("static regex is valid"));

static VALID_SLUG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("static regex is valid"));

/// Turn a title into a lowercase, hyphen-separated slug.
///
/// Non-ASCII-alphanumeric runs collapse into a single hyphen. Returns an
/// empty string if nothing usable remains (e.g. a purely Arabic title);
/// callers then fall back to [`fallback_slug`].
pub fn slugify(title: &str) -> String {
    let lower = title.to_lowercase();
    let slug = NON_SLUG_CHARS.replace_all(&lower, "-");
    let slug = slug.trim_matches('-');
    truncate_on_boundary(slug, MAX_SLUG_LEN)
}

/// Slug used when the title yields nothing: `post-{unix_seconds}`.
pub fn fallback_slug(now: chrono::DateTime<chrono::Utc>) -> String {
    format!("post-{}", now.timestamp())
}

/// Validate an explicitly supplied slug.
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    if slug.len() > MAX_SLUG_LEN {
        return Err(CoreError::Validation(format!(
            "slug must be at most {MAX_SLUG_LEN} characters"
        )));
    }
    if !VALID_SLUG.is_match(slug) {
        return Err(CoreError::Validation(
            "slug may only contain lowercase letters, digits and single hyphens".into(),
        ));
    }
    Ok(())
}

fn truncate_on_boundary(slug: &str, max: usize) -> String {
    if slug.len() <= max {
        return slug.to_string();
    }
    // Slug is pure ASCII at this point, so byte slicing is safe.
    slug[..max].trim_end_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn basic_title() {
        assert_eq!(slugify("Hello World"), "hello-world");
    }

    #[test]
    fn punctuation_collapses() {
        assert_eq!(slugify("  Rust, Axum & SQLx: a guide!  "), "rust-axum-sqlx-a-guide");
    }

    #[test]
    fn non_latin_title_yields_empty() {
        assert_eq!(slugify("مرحبا بالعالم"), "");
    }

    #[test]
    fn long_titles_are_truncated_without_trailing_hyphen() {
        let title = "word ".repeat(60);
        let slug = slugify(&title);
        assert!(slug.len() <= MAX_SLUG_LEN);
        assert!(!slug.ends_with('-'));
    }

    #[test]
    fn slugified_output_validates() {
        assert!(validate_slug(&slugify("Release notes 2.0")).is_ok());
    }

    #[test]
    fn rejects_bad_slugs() {
        assert_matches!(validate_slug("Has Caps"), Err(CoreError::Validation(_)));
        assert_matches!(validate_slug("double--hyphen"), Err(CoreError::Validation(_)));
        assert_matches!(validate_slug("-leading"), Err(CoreError::Validation(_)));
        assert_matches!(validate_slug(""), Err(CoreError::Validation(_)));
    }

    #[test]
    fn fallback_uses_timestamp() {
        let now = chrono::DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        assert_eq!(fallback_slug(now), "post-1700000000");
    }
}
