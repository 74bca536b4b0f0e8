use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body for `POST /parse-metadata`.
///
/// `url` is optional at the type level so a missing field reaches the
/// handler's own validation (and its "URL is required" message) instead of
/// being rejected during deserialization.
#[derive(Debug, Deserialize)]
pub struct ParseMetadataRequest {
    #[serde(default)]
    pub url: Option<String>,
}

/// Everything discoverable about one fetched document.
///
/// Multi-valued families are always present (empty when nothing matched);
/// `title` is `null` when the document has no usable `<title>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataRecord {
    pub url: String,
    pub title: Option<String>,
    pub open_graph: OpenGraphTags,
    pub twitter: TwitterTags,
    pub meta: MetaTags,
    pub links: LinkTags,
    pub schema_org: Vec<Value>,
}

/// Open Graph `<meta property="og:...">` values, document order preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraphTags {
    pub title: Vec<String>,
    pub description: Vec<String>,
    pub image: Vec<String>,
    pub url: Vec<String>,
    pub r#type: Vec<String>,
    pub site_name: Vec<String>,
}

/// Twitter Card `<meta name="twitter:...">` values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwitterTags {
    pub card: Vec<String>,
    pub site: Vec<String>,
    pub creator: Vec<String>,
    pub title: Vec<String>,
    pub description: Vec<String>,
    pub image: Vec<String>,
}

/// Generic `<meta name="...">` values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaTags {
    pub description: Vec<String>,
    pub keywords: Vec<String>,
    pub author: Vec<String>,
    pub viewport: Vec<String>,
    pub robots: Vec<String>,
}

/// Link relations. `canonical` and `icon` keep only the first match;
/// `alternate` keeps every match in document order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkTags {
    pub canonical: Option<String>,
    pub icon: Option<String>,
    pub alternate: Vec<String>,
}
