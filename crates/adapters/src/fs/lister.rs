use std::path::{Path, PathBuf};

use walkdir::WalkDir;
use wedding_gallery_application::GalleryLister;
use wedding_gallery_domain::{is_gallery_image, public_path};

/// Lists gallery folders that live directly under the public assets root.
#[derive(Debug, Clone)]
pub struct WalkdirGalleryLister {
    public_root: PathBuf,
}

impl WalkdirGalleryLister {
    pub fn new(public_root: impl Into<PathBuf>) -> Self {
        Self {
            public_root: public_root.into(),
        }
    }
}

impl GalleryLister for WalkdirGalleryLister {
    fn list_images(&self, folder: &str) -> Vec<String> {
        let dir = self.public_root.join(folder);
        match read_gallery_folder(&dir, folder) {
            Ok(paths) => paths,
            Err(error) => {
                log::debug!("gallery folder {} unavailable: {error}", dir.display());
                Vec::new()
            }
        }
    }
}

// Any error aborts the whole listing; callers never see a partial folder.
fn read_gallery_folder(dir: &Path, folder: &str) -> Result<Vec<String>, walkdir::Error> {
    let mut paths = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(file_name) = entry.file_name().to_str() else {
            continue;
        };
        if !is_gallery_image(file_name) {
            continue;
        }
        paths.push(public_path(folder, file_name));
    }

    paths.sort();
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"not really an image").expect("write file");
    }

    #[test]
    fn filters_and_sorts_folder_entries() {
        let root = TempDir::new().expect("tempdir");
        let folder = root.path().join("folder");
        fs::create_dir(&folder).expect("mkdir");
        for name in ["b.png", "a.jpg", "c.txt", "B.JPG"] {
            touch(&folder, name);
        }

        let lister = WalkdirGalleryLister::new(root.path());

        assert_eq!(
            lister.list_images("folder"),
            vec!["/folder/B.JPG", "/folder/a.jpg", "/folder/b.png"]
        );
    }

    #[test]
    fn missing_folder_lists_nothing() {
        let root = TempDir::new().expect("tempdir");
        let lister = WalkdirGalleryLister::new(root.path());

        assert!(lister.list_images("desktop-background").is_empty());
    }

    #[test]
    fn missing_public_root_lists_nothing() {
        let root = TempDir::new().expect("tempdir");
        let lister = WalkdirGalleryLister::new(root.path().join("no-such-root"));

        assert!(lister.list_images("mobile-background").is_empty());
    }

    #[test]
    fn subdirectories_are_not_images() {
        let root = TempDir::new().expect("tempdir");
        let folder = root.path().join("folder");
        fs::create_dir_all(folder.join("thumbnails")).expect("mkdir");
        fs::create_dir_all(folder.join("album.jpg")).expect("mkdir");

        let lister = WalkdirGalleryLister::new(root.path());

        assert!(lister.list_images("folder").is_empty());
    }

    #[test]
    fn nested_files_are_not_listed() {
        let root = TempDir::new().expect("tempdir");
        let nested = root.path().join("folder").join("thumbnails");
        fs::create_dir_all(&nested).expect("mkdir");
        touch(&nested, "small.jpg");
        touch(&root.path().join("folder"), "large.jpg");

        let lister = WalkdirGalleryLister::new(root.path());

        assert_eq!(lister.list_images("folder"), vec!["/folder/large.jpg"]);
    }

    #[test]
    fn extension_boundaries() {
        let root = TempDir::new().expect("tempdir");
        let folder = root.path().join("folder");
        fs::create_dir(&folder).expect("mkdir");
        touch(&folder, "photo.JPEG");
        touch(&folder, "photo.bmp");

        let lister = WalkdirGalleryLister::new(root.path());

        assert_eq!(lister.list_images("folder"), vec!["/folder/photo.JPEG"]);
    }

    #[test]
    fn repeated_listing_is_stable() {
        let root = TempDir::new().expect("tempdir");
        let folder = root.path().join("folder");
        fs::create_dir(&folder).expect("mkdir");
        for name in ["3.webp", "1.gif", "2.jpeg"] {
            touch(&folder, name);
        }

        let lister = WalkdirGalleryLister::new(root.path());
        let first = lister.list_images("folder");
        let second = lister.list_images("folder");

        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn new_files_show_up_on_the_next_call() {
        let root = TempDir::new().expect("tempdir");
        let folder = root.path().join("folder");
        fs::create_dir(&folder).expect("mkdir");
        let lister = WalkdirGalleryLister::new(root.path());
        assert!(lister.list_images("folder").is_empty());

        touch(&folder, "late-arrival.png");

        assert_eq!(
            lister.list_images("folder"),
            vec!["/folder/late-arrival.png"]
        );
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_are_not_regular_files() {
        let root = TempDir::new().expect("tempdir");
        let folder = root.path().join("folder");
        fs::create_dir(&folder).expect("mkdir");
        touch(&folder, "real.jpg");
        std::os::unix::fs::symlink(folder.join("real.jpg"), folder.join("link.jpg"))
            .expect("symlink");

        let lister = WalkdirGalleryLister::new(root.path());

        assert_eq!(lister.list_images("folder"), vec!["/folder/real.jpg"]);
    }
}
