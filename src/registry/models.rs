//! Tag-listing wire format and the flattened tag model

use crate::error::{RegistryError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// One page of `GET /v2/repositories/{repo}/tags`
#[derive(Debug, Deserialize)]
pub struct TagPage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub next: String,
    pub results: Vec<TagResult>,
}

#[derive(Debug, Deserialize)]
pub struct TagResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub last_updated: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<PlatformImage>,
}

/// A platform-specific image behind a tag. An empty digest marks a
/// placeholder with no concrete image.
#[derive(Debug, Deserialize)]
pub struct PlatformImage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub digest: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub os: String,
    #[serde(
        rename = "Architecture",
        alias = "architecture",
        default,
        deserialize_with = "null_as_default"
    )]
    pub architecture: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A tag resolved to one concrete platform image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageTag {
    pub tag: String,
    pub digest: String,
    pub timestamp: DateTime<Utc>,
    pub os: String,
    pub architecture: String,
}

impl TagPage {
    pub fn parse(body: &str) -> Result<Self> {
        serde_json::from_str(body).map_err(|_| RegistryError::MalformedResponse {
            context: "image tags".to_string(),
            body: body.to_string(),
        })
    }

    /// Append this page's tags to `out` in delivery order.
    ///
    /// Results without images are skipped, as are images without a digest.
    /// Nothing is appended if any timestamp fails to parse.
    pub fn flatten_into(self, out: &mut Vec<ImageTag>) -> Result<()> {
        let mut page_tags = Vec::new();

        for result in self.results {
            if result.images.is_empty() {
                continue;
            }

            let timestamp = parse_timestamp(&result.name, &result.last_updated)?;

            for image in result.images {
                if image.digest.is_empty() {
                    continue;
                }

                page_tags.push(ImageTag {
                    tag: result.name.clone(),
                    digest: image.digest,
                    timestamp,
                    os: image.os,
                    architecture: image.architecture,
                });
            }
        }

        out.append(&mut page_tags);
        Ok(())
    }
}

fn parse_timestamp(tag: &str, value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| RegistryError::MalformedTimestamp {
            tag: tag.to_string(),
            value: value.to_string(),
            reason: e.to_string(),
        })
}
