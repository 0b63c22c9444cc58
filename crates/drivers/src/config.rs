use std::path::Path;

use serde::Deserialize;
use wedding_gallery_application::{ApplicationError, AssembleGalleryCommand, UploadQrCommand};
use wedding_gallery_domain::{ImageCategory, UploadShare};

const ENV_PUBLIC_ROOT: &str = "WEDDING_GALLERY_PUBLIC_ROOT";
const ENV_BIND: &str = "WEDDING_GALLERY_BIND";
const ENV_DRIVE_URL: &str = "WEDDING_GALLERY_DRIVE_URL";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub public_root: String,
    pub bind_address: String,
    pub desktop_folder: String,
    pub mobile_folder: String,
    pub hashtags: Vec<String>,
    pub snap_share: SnapShareConfig,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct SnapShareConfig {
    pub drive_url: Option<String>,
    pub instructions: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            public_root: "public".to_string(),
            bind_address: "127.0.0.1:3000".to_string(),
            desktop_folder: ImageCategory::Desktop.default_folder().to_string(),
            mobile_folder: ImageCategory::Mobile.default_folder().to_string(),
            hashtags: vec!["#TheBigBANGWedding".to_string()],
            snap_share: SnapShareConfig::default(),
        }
    }
}

impl AppConfig {
    /// Defaults, then the optional TOML file, then environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut config = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path).map_err(|error| {
                    ApplicationError::Config(format!("cannot read {}: {error}", path.display()))
                })?;
                Self::from_toml_str(&raw)?
            }
            None => Self::default(),
        };
        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ApplicationError> {
        toml::from_str(raw).map_err(|error| ApplicationError::Config(error.to_string()))
    }

    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(root) = lookup(ENV_PUBLIC_ROOT) {
            self.public_root = root;
        }
        if let Some(bind) = lookup(ENV_BIND) {
            self.bind_address = bind;
        }
        if let Some(url) = lookup(ENV_DRIVE_URL) {
            self.snap_share.drive_url = Some(url);
        }
    }

    pub fn assemble_command(&self) -> AssembleGalleryCommand {
        AssembleGalleryCommand {
            desktop_folder: self.desktop_folder.clone(),
            mobile_folder: self.mobile_folder.clone(),
        }
    }

    pub fn upload_command(&self) -> UploadQrCommand {
        UploadQrCommand {
            share: UploadShare {
                drive_url: self.snap_share.drive_url.clone(),
                instructions: self.snap_share.instructions.clone(),
            },
        }
    }
}
