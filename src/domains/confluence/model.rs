//! Wire models for the subset of the Confluence REST API the tools read.
//!
//! Every field is optional and every struct defaults, so a response with
//! missing (or `null`) fields always deserializes. Projections decide the
//! fallback value for each path.

use serde::Deserialize;

/// A paginated list response (`/content`, `/content/search`, `/space`).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PagedResponse<T> {
    pub results: Option<Vec<T>>,
    pub size: Option<u64>,
}

impl<T> Default for PagedResponse<T> {
    fn default() -> Self {
        Self {
            results: None,
            size: None,
        }
    }
}

impl<T> PagedResponse<T> {
    /// The returned items, empty when the upstream omitted them.
    pub fn into_results(self) -> Vec<T> {
        self.results.unwrap_or_default()
    }

    /// Number of items in this page, zero when absent.
    pub fn total(&self) -> u64 {
        self.size.unwrap_or(0)
    }
}

/// A content item (page, blog post, attachment, ...).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Content {
    pub id: Option<String>,
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub content_type: Option<String>,
    pub space: Option<SpaceRef>,
    pub body: Option<Body>,
    pub version: Option<Version>,
    pub excerpt: Option<String>,
    #[serde(rename = "_links")]
    pub links: Option<Links>,
}

impl Content {
    pub fn space_name(&self) -> Option<&str> {
        self.space.as_ref()?.name.as_deref()
    }

    pub fn storage_value(&self) -> Option<&str> {
        self.body.as_ref()?.storage.as_ref()?.value.as_deref()
    }

    pub fn last_modified(&self) -> Option<&str> {
        self.version.as_ref()?.when.as_deref()
    }

    pub fn version_number(&self) -> Option<u64> {
        self.version.as_ref()?.number
    }

    pub fn webui(&self) -> Option<&str> {
        self.links.as_ref()?.webui.as_deref()
    }
}

/// The `space` expansion of a content item.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SpaceRef {
    pub key: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Body {
    pub storage: Option<BodyValue>,
    pub view: Option<BodyValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BodyValue {
    pub value: Option<String>,
    pub representation: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Version {
    pub when: Option<String>,
    pub number: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Links {
    pub webui: Option<String>,
}

/// A space as returned by `/space?expand=description`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Space {
    pub key: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub space_type: Option<String>,
    pub description: Option<SpaceDescription>,
    #[serde(rename = "_links")]
    pub links: Option<Links>,
}

impl Space {
    pub fn plain_description(&self) -> Option<&str> {
        self.description.as_ref()?.plain.as_ref()?.value.as_deref()
    }

    pub fn webui(&self) -> Option<&str> {
        self.links.as_ref()?.webui.as_deref()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SpaceDescription {
    pub plain: Option<BodyValue>,
}
