pub const DEFAULT_UPLOAD_INSTRUCTIONS: &str = "Scan the QR code below, create a folder with your name, and upload your photos/videos from our special day!";

/// Where guests upload their own photos.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadShare {
    pub drive_url: Option<String>,
    pub instructions: Option<String>,
}

impl UploadShare {
    /// The configured folder URL, or `None` when the widget should not render.
    pub fn link(&self) -> Option<&str> {
        self.drive_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    pub fn instructions(&self) -> &str {
        self.instructions
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .unwrap_or(DEFAULT_UPLOAD_INSTRUCTIONS)
    }
}

/// Everything the upload section needs to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadQr {
    pub url: String,
    pub instructions: String,
    pub svg: String,
}
