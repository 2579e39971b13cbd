use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use tracing::debug;

lazy_static! {
    ///
    /// Places a Kobo e-reader is mounted when plugged in:
    /// "/Volumes" on macOS, "/media" or the udisks "/run/media/<user>" on linux
    ///
    pub static ref DEFAULT_MOUNT_POINTS: Vec<PathBuf> = {
        let mut paths = vec![
            PathBuf::from("/Volumes/KOBOeReader"),
            PathBuf::from("/media/KOBOeReader"),
        ];
        if let Ok(user) = std::env::var("USER") {
            paths.push(PathBuf::from(format!("/run/media/{user}/KOBOeReader")));
        }
        paths
    };
}

///
/// Location of the database, relative to the device root
///
pub fn database_path(device_root: &Path) -> PathBuf {
    device_root.join(".kobo").join("KoboReader.sqlite")
}

///
/// Gets the first of `mount_points` that exists
///
pub fn find_device(mount_points: &[PathBuf]) -> Option<PathBuf> {
    mount_points.iter().find(|path| path.exists()).cloned()
}

///
/// Gets the database of the connected device, if a device is mounted and has one
///
pub fn find_database(mount_points: &[PathBuf]) -> Option<PathBuf> {
    let device = find_device(mount_points)?;
    let db_path = database_path(&device);
    debug!(device = %device.display(), "found kobo device");
    db_path.exists().then_some(db_path)
}
