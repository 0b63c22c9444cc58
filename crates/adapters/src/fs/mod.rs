mod lister;

pub use lister::WalkdirGalleryLister;
