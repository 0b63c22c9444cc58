use std::sync::Arc;

use tokio::task::JoinHandle;
use wedding_gallery_domain::{Gallery, UploadQr};

use crate::{
    ApplicationError, AssembleGalleryCommand, GalleryLister, QrCodeRenderer, UploadQrCommand,
};

pub struct ApplicationService {
    lister: Arc<dyn GalleryLister>,
    qr: Box<dyn QrCodeRenderer>,
}

impl ApplicationService {
    pub fn new(lister: Arc<dyn GalleryLister>, qr: Box<dyn QrCodeRenderer>) -> Self {
        Self { lister, qr }
    }

    /// Lists both category folders concurrently and merges them, desktop first.
    ///
    /// Nothing is cached; every call reads the folders again.
    pub async fn assemble_gallery(
        &self,
        command: AssembleGalleryCommand,
    ) -> Result<Gallery, ApplicationError> {
        let desktop = self.spawn_listing(command.desktop_folder);
        let mobile = self.spawn_listing(command.mobile_folder);
        let (desktop, mobile) = tokio::join!(desktop, mobile);

        let desktop = desktop.map_err(|error| ApplicationError::Task(error.to_string()))?;
        let mobile = mobile.map_err(|error| ApplicationError::Task(error.to_string()))?;
        log::debug!(
            "assembled gallery: desktop={}, mobile={}",
            desktop.len(),
            mobile.len()
        );

        Ok(Gallery::from_categories(desktop, mobile))
    }

    pub fn upload_qr(&self, command: UploadQrCommand) -> Result<Option<UploadQr>, ApplicationError> {
        let Some(url) = command.share.link() else {
            return Ok(None);
        };
        let svg = self.qr.render_svg(url)?;
        Ok(Some(UploadQr {
            url: url.to_string(),
            instructions: command.share.instructions().to_string(),
            svg,
        }))
    }

    pub fn upload_qr_png(
        &self,
        command: UploadQrCommand,
    ) -> Result<Option<Vec<u8>>, ApplicationError> {
        command
            .share
            .link()
            .map(|url| self.qr.render_png(url))
            .transpose()
    }

    fn spawn_listing(&self, folder: String) -> JoinHandle<Vec<String>> {
        let lister = Arc::clone(&self.lister);
        tokio::task::spawn_blocking(move || lister.list_images(&folder))
    }
}
