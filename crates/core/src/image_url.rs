//! Image URLs

use serde::{Deserialize, Serialize};

use crate::error::{HazardError, Result};

/// File extensions accepted for image URLs
pub const VALID_EXTENSIONS: [&str; 4] = [".jpg", ".png", ".tif", ".gif"];

/// URL of an image file. Only the file extension is checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ImageUrl(String);

impl ImageUrl {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url = url.into();
        if Self::is_valid_url(&url) {
            Ok(Self(url))
        } else {
            Err(HazardError::invalid_value(format!(
                "The url {} is not a valid URL",
                url
            )))
        }
    }

    // TODO: validate scheme and host once callers stop passing bare file paths
    pub fn is_valid_url(url: &str) -> bool {
        VALID_EXTENSIONS.contains(&extension(url))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Extension of the last `/`-separated component, including the dot.
///
/// Leading dots of the component do not start an extension, so `".tif"` and
/// `"dir/.tif"` have none.
fn extension(url: &str) -> &str {
    let name = url.rsplit('/').next().unwrap_or(url);
    let stem_start = name.len() - name.trim_start_matches('.').len();
    match name[stem_start..].rfind('.') {
        Some(dot) => &name[stem_start + dot..],
        None => "",
    }
}

impl std::fmt::Display for ImageUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ImageUrl {
    type Error = HazardError;

    fn try_from(url: String) -> Result<Self> {
        Self::new(url)
    }
}

impl From<ImageUrl> for String {
    fn from(url: ImageUrl) -> String {
        url.0
    }
}
