mod error;
mod image;
mod share;

pub use error::DomainError;
pub use image::{is_gallery_image, public_path, Gallery, GalleryImage, ImageCategory};
pub use share::{UploadQr, UploadShare, DEFAULT_UPLOAD_INSTRUCTIONS};
