use wedding_gallery_domain::{ImageCategory, UploadShare};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembleGalleryCommand {
    pub desktop_folder: String,
    pub mobile_folder: String,
}

impl Default for AssembleGalleryCommand {
    fn default() -> Self {
        Self {
            desktop_folder: ImageCategory::Desktop.default_folder().to_string(),
            mobile_folder: ImageCategory::Mobile.default_folder().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UploadQrCommand {
    pub share: UploadShare,
}
