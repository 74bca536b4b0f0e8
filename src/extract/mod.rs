use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde_json::Value;

use crate::models::{LinkTags, MetaTags, MetadataRecord, OpenGraphTags, TwitterTags};

/// Open Graph properties collected from `<meta property="og:...">` tags.
pub const OPEN_GRAPH_PROPERTIES: [&str; 6] = [
    "og:title",
    "og:description",
    "og:image",
    "og:url",
    "og:type",
    "og:site_name",
];

/// Twitter Card properties collected from `<meta name="twitter:...">` tags.
pub const TWITTER_PROPERTIES: [&str; 6] = [
    "twitter:card",
    "twitter:site",
    "twitter:creator",
    "twitter:title",
    "twitter:description",
    "twitter:image",
];

/// Generic meta names collected from `<meta name="...">` tags.
pub const META_NAMES: [&str; 5] = ["description", "keywords", "author", "viewport", "robots"];

// ── Patterns ───────────────────────────────────────────────────────────────

/// Build the pattern matching a `<meta>` element whose `name` or `property`
/// attribute equals `name`, capturing its `content` value. Both attribute
/// orders are accepted; whichever alternative matched, the value lands in
/// capture group 1 or 2. Attribute scanning stays inside one tag on one line
/// (`[^>\r\n]`); the value itself may contain `>` but stops at the first
/// quote of either kind, as raw markup scanning always has here.
fn meta_content_pattern(name: &str) -> Regex {
    Regex::new(&format!(
        r#"(?i)<meta[^>\r\n]*?(?:name|property)=["']{name}["'][^>\r\n]*?content=["'](.*?)["']|<meta[^>\r\n]*?content=["'](.*?)["'][^>\r\n]*?(?:name|property)=["']{name}["']"#
    ))
    .expect("meta content pattern")
}

/// Same two-order shape for `<link rel="..." href="...">` elements.
fn link_href_pattern(rel: &str) -> Regex {
    Regex::new(&format!(
        r#"(?i)<link[^>\r\n]*?rel=["']{rel}["'][^>\r\n]*?href=["'](.*?)["']|<link[^>\r\n]*?href=["'](.*?)["'][^>\r\n]*?rel=["']{rel}["']"#
    ))
    .expect("link href pattern")
}

/// One compiled pattern per named property across all three tag families.
static META_CONTENT_PATTERNS: Lazy<HashMap<&'static str, Regex>> = Lazy::new(|| {
    OPEN_GRAPH_PROPERTIES
        .iter()
        .chain(TWITTER_PROPERTIES.iter())
        .chain(META_NAMES.iter())
        .map(|name| (*name, meta_content_pattern(name)))
        .collect()
});

static TITLE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<title>(.*?)</title>").expect("title pattern"));

static CANONICAL_PATTERN: Lazy<Regex> = Lazy::new(|| link_href_pattern("canonical"));
static ICON_PATTERN: Lazy<Regex> = Lazy::new(|| link_href_pattern("icon"));
static ALTERNATE_PATTERN: Lazy<Regex> = Lazy::new(|| link_href_pattern("alternate"));

/// ld+json blocks are matched exactly as emitted by the common generators:
/// lowercase, double-quoted type attribute, no other attributes. The inner
/// text may span lines.
static LD_JSON_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)<script type="application/ld\+json">(.*?)</script>"#)
        .expect("ld+json pattern")
});

// ── Scanning passes ────────────────────────────────────────────────────────

/// The attribute-order alternation puts the value in group 1 or group 2;
/// exactly one of them participates in any match.
fn captured_value(caps: &Captures<'_>) -> String {
    caps.get(1)
        .or_else(|| caps.get(2))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// All `content` values for one named property, in document order. Matched
/// empty values are kept as empty strings; zero matches is an empty vec.
fn meta_contents(html: &str, name: &str) -> Vec<String> {
    META_CONTENT_PATTERNS
        .get(name)
        .map(|re| re.captures_iter(html).map(|c| captured_value(&c)).collect())
        .unwrap_or_default()
}

/// First `href` for the given precompiled link pattern. Single-valued link
/// relations coerce an empty match to `None`, never an empty string.
fn first_link_href(pattern: &Regex, html: &str) -> Option<String> {
    pattern
        .captures(html)
        .map(|c| captured_value(&c))
        .filter(|href| !href.is_empty())
}

/// Every `href` for the given precompiled link pattern, in document order.
fn all_link_hrefs(pattern: &Regex, html: &str) -> Vec<String> {
    pattern
        .captures_iter(html)
        .map(|c| captured_value(&c))
        .collect()
}

/// First `<title>` text, `None` when the document has none (or an empty one).
fn document_title(html: &str) -> Option<String> {
    TITLE_PATTERN
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .filter(|title| !title.is_empty())
}

/// Parse every ld+json block, silently skipping blocks that are not valid
/// JSON. Values that parse to non-objects are kept as-is.
fn schema_org_values(html: &str) -> Vec<Value> {
    LD_JSON_PATTERN
        .captures_iter(html)
        .filter_map(|c| c.get(1))
        .filter_map(|m| serde_json::from_str(m.as_str()).ok())
        .collect()
}

/// Run every extraction pass over the raw document text and assemble the
/// record. Purely syntactic: no HTML parse, no entity decoding, no trimming.
pub fn scan_document(url: &str, html: &str) -> MetadataRecord {
    MetadataRecord {
        url: url.to_string(),
        title: document_title(html),
        open_graph: OpenGraphTags {
            title: meta_contents(html, "og:title"),
            description: meta_contents(html, "og:description"),
            image: meta_contents(html, "og:image"),
            url: meta_contents(html, "og:url"),
            r#type: meta_contents(html, "og:type"),
            site_name: meta_contents(html, "og:site_name"),
        },
        twitter: TwitterTags {
            card: meta_contents(html, "twitter:card"),
            site: meta_contents(html, "twitter:site"),
            creator: meta_contents(html, "twitter:creator"),
            title: meta_contents(html, "twitter:title"),
            description: meta_contents(html, "twitter:description"),
            image: meta_contents(html, "twitter:image"),
        },
        meta: MetaTags {
            description: meta_contents(html, "description"),
            keywords: meta_contents(html, "keywords"),
            author: meta_contents(html, "author"),
            viewport: meta_contents(html, "viewport"),
            robots: meta_contents(html, "robots"),
        },
        links: LinkTags {
            canonical: first_link_href(&CANONICAL_PATTERN, html),
            icon: first_link_href(&ICON_PATTERN, html),
            alternate: all_link_hrefs(&ALTERNATE_PATTERN, html),
        },
        schema_org: schema_org_values(html),
    }
}

// ── Unit tests ─────────────────────────────────────────────────────────────
