mod error;
mod ports;
mod service;
mod use_cases;

pub use error::ApplicationError;
pub use ports::{GalleryLister, QrCodeRenderer};
pub use service::ApplicationService;
pub use use_cases::{AssembleGalleryCommand, UploadQrCommand};
