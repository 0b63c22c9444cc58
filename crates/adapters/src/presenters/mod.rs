use askama::Template;
use wedding_gallery_application::ApplicationError;
use wedding_gallery_domain::{Gallery, GalleryImage, UploadQr};

/// Inputs for one render of the gallery page.
#[derive(Debug, Clone, Copy)]
pub struct GalleryPage<'a> {
    pub gallery: &'a Gallery,
    pub upload: Option<&'a UploadQr>,
    pub hashtags: &'a [String],
    pub desktop_folder: &'a str,
    pub mobile_folder: &'a str,
}

#[derive(Template)]
#[template(path = "gallery.html")]
struct GalleryTemplate<'a> {
    tiles: Vec<ImageTile<'a>>,
    upload: Option<&'a UploadQr>,
    hashtags: &'a [String],
    desktop_folder: &'a str,
    mobile_folder: &'a str,
}

struct ImageTile<'a> {
    src: &'a str,
    alt: String,
    category: &'static str,
}

impl<'a> From<&'a GalleryImage> for ImageTile<'a> {
    fn from(image: &'a GalleryImage) -> Self {
        Self {
            src: &image.src,
            alt: alt_text(image.file_name()),
            category: image.category.as_str(),
        }
    }
}

pub fn render_gallery_page(page: &GalleryPage<'_>) -> Result<String, ApplicationError> {
    GalleryTemplate {
        tiles: page.gallery.iter().map(ImageTile::from).collect(),
        upload: page.upload,
        hashtags: page.hashtags,
        desktop_folder: page.desktop_folder,
        mobile_folder: page.mobile_folder,
    }
    .render()
    .map_err(|error| ApplicationError::Render(error.to_string()))
}

pub fn present_gallery_row(image: &GalleryImage) -> String {
    format!("{}\t{}", image.category, image.src)
}

pub fn present_gallery_json(gallery: &Gallery) -> Result<String, ApplicationError> {
    serde_json::to_string_pretty(gallery)
        .map_err(|error| ApplicationError::Render(error.to_string()))
}

fn alt_text(file_name: &str) -> String {
    let stem = file_name
        .rsplit_once('.')
        .map(|(stem, _)| stem)
        .unwrap_or(file_name);
    let words = stem.replace(['-', '_'], " ");
    let words = words.trim();
    if words.is_empty() {
        "Gallery photo".to_string()
    } else {
        format!("Gallery photo: {words}")
    }
}
