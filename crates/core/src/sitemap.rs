//! XML sitemap rendering.
//!
//! The sitemap lists every static page once per language plus one entry per
//! published blog post (also per language).

use chrono::NaiveDate;

use crate::localization::Language;

/// Static public routes of the marketing site.
pub const STATIC_ROUTES: &[StaticRoute] = &[
    StaticRoute { path: "/", change_freq: "weekly", priority: "1.0" },
    StaticRoute { path: "/about", change_freq: "monthly", priority: "0.8" },
    StaticRoute { path: "/integrations", change_freq: "weekly", priority: "0.8" },
    StaticRoute { path: "/testimonials", change_freq: "monthly", priority: "0.6" },
    StaticRoute { path: "/videos", change_freq: "monthly", priority: "0.6" },
    StaticRoute { path: "/blog", change_freq: "daily", priority: "0.9" },
    StaticRoute { path: "/contact", change_freq: "yearly", priority: "0.5" },
];

#[derive(Debug, Clone, Copy)]
pub struct StaticRoute {
    pub path: &'static str,
    pub change_freq: &'static str,
    pub priority: &'static str,
}

/// One `<url>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapEntry {
    pub loc: String,
    pub last_modified: Option<NaiveDate>,
    pub change_freq: &'static str,
    pub priority: &'static str,
}

/// A published blog post as seen by the sitemap.
#[derive(Debug, Clone)]
pub struct PostLink {
    pub slug: String,
    pub last_modified: NaiveDate,
}

/// Build all sitemap entries for `site_url` (no trailing slash required).
pub fn build_entries(site_url: &str, routes: &[StaticRoute], posts: &[PostLink]) -> Vec<SitemapEntry> {
    let base = site_url.trim_end_matches('/');
    let mut entries = Vec::with_capacity((routes.len() + posts.len()) * Language::ALL.len());

    for lang in Language::ALL {
        let prefix = lang.path_prefix();
        for route in routes {
            let path = match (prefix, route.path) {
                ("", p) => p.to_string(),
                (pre, "/") => pre.to_string(),
                (pre, p) => format!("{pre}{p}"),
            };
            entries.push(SitemapEntry {
                loc: format!("{base}{path}"),
                last_modified: None,
                change_freq: route.change_freq,
                priority: route.priority,
            });
        }
        for post in posts {
            entries.push(SitemapEntry {
                loc: format!("{base}{prefix}/blog/{}", post.slug),
                last_modified: Some(post.last_modified),
                change_freq: "monthly",
                priority: "0.7",
            });
        }
    }
    entries
}

/// Render entries as a sitemaps.org `urlset` document.
pub fn render(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for entry in entries {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&entry.loc)));
        if let Some(date) = entry.last_modified {
            xml.push_str(&format!("    <lastmod>{}</lastmod>\n", date.format("%Y-%m-%d")));
        }
        xml.push_str(&format!("    <changefreq>{}</changefreq>\n", entry.change_freq));
        xml.push_str(&format!("    <priority>{}</priority>\n", entry.priority));
        xml.push_str("  </url>\n");
    }
    xml.push_str("</urlset>\n");
    xml
}

/// Escape the five XML special characters.
pub fn escape_xml(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}
