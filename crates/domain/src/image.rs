use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::DomainError;

const GALLERY_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "webp", "gif"];

/// Which source folder a gallery image was discovered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageCategory {
    Desktop,
    Mobile,
}

impl ImageCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Mobile => "mobile",
        }
    }

    pub fn default_folder(self) -> &'static str {
        match self {
            Self::Desktop => "desktop-background",
            Self::Mobile => "mobile-background",
        }
    }
}

impl Display for ImageCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageCategory {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "desktop" => Ok(Self::Desktop),
            "mobile" => Ok(Self::Mobile),
            other => Err(DomainError::UnknownCategory(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub src: String,
    pub category: ImageCategory,
}

impl GalleryImage {
    /// Last path segment of `src`.
    pub fn file_name(&self) -> &str {
        self.src.rsplit('/').next().unwrap_or(&self.src)
    }
}

/// The merged, category-tagged image sequence for one page render.
///
/// Desktop entries always come before mobile entries; each sub-list keeps the
/// order the lister returned it in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gallery {
    images: Vec<GalleryImage>,
}

impl Gallery {
    pub fn from_categories(desktop: Vec<String>, mobile: Vec<String>) -> Self {
        let images = tag(desktop, ImageCategory::Desktop)
            .chain(tag(mobile, ImageCategory::Mobile))
            .collect();
        Self { images }
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GalleryImage> {
        self.images.iter()
    }

    pub fn count(&self, category: ImageCategory) -> usize {
        self.images
            .iter()
            .filter(|image| image.category == category)
            .count()
    }

    /// Keeps only the entries of one category, preserving order.
    pub fn only(self, category: ImageCategory) -> Self {
        Self {
            images: self
                .images
                .into_iter()
                .filter(|image| image.category == category)
                .collect(),
        }
    }

    pub fn as_slice(&self) -> &[GalleryImage] {
        &self.images
    }
}

impl<'a> IntoIterator for &'a Gallery {
    type Item = &'a GalleryImage;
    type IntoIter = std::slice::Iter<'a, GalleryImage>;

    fn into_iter(self) -> Self::IntoIter {
        self.images.iter()
    }
}

fn tag(paths: Vec<String>, category: ImageCategory) -> impl Iterator<Item = GalleryImage> {
    paths
        .into_iter()
        .map(move |src| GalleryImage { src, category })
}

/// Whether a file name carries one of the recognized image extensions.
///
/// Matching is case-insensitive and only looks at the text after the last dot,
/// so a bare `.jpg` counts while `jpg` does not.
pub fn is_gallery_image(file_name: &str) -> bool {
    let Some((_, ext)) = file_name.rsplit_once('.') else {
        return false;
    };
    GALLERY_EXTENSIONS
        .iter()
        .any(|known| ext.eq_ignore_ascii_case(known))
}

pub fn public_path(folder: &str, file_name: &str) -> String {
    format!("/{folder}/{file_name}")
}
