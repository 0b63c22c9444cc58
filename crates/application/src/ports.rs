use crate::ApplicationError;

/// Lists the gallery images of one folder under the public assets root.
///
/// Implementations never fail: a folder that cannot be read yields an empty
/// list. Returned paths are public (`/<folder>/<file>`) and already sorted.
pub trait GalleryLister: Send + Sync {
    fn list_images(&self, folder: &str) -> Vec<String>;
}

pub trait QrCodeRenderer: Send + Sync {
    fn render_svg(&self, data: &str) -> Result<String, ApplicationError>;

    fn render_png(&self, data: &str) -> Result<Vec<u8>, ApplicationError>;
}
