pub mod fs;
pub mod presenters;
pub mod qr;

pub use fs::WalkdirGalleryLister;
pub use presenters::{present_gallery_json, present_gallery_row, render_gallery_page, GalleryPage};
pub use qr::QrCodeCrateRenderer;
