// SPDX-License-Identifier: GPL-3.0-only

//! Image file scanner backend
//!
//! Decodes QR codes from a still image using rqrr. The image stands in for the
//! camera: being able to read it is the "camera permission", and in follow mode
//! the file is re-read until a code shows up or the user hits Ctrl-C.

use super::{BarcodeFormat, PermissionStatus, ScanOptions, ScanResult, ScannerBackend};
use crate::constants::DEFAULT_MAX_SCAN_DIMENSION;
use crate::errors::{BackendError, BackendResult};
use image::imageops::FilterType;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, trace, warn};

/// Scanner reading frames from an image file
pub struct ImageScanner {
    source: PathBuf,
    /// Maximum dimension for processing (frames are downscaled to this)
    max_dimension: u32,
    /// Re-poll interval; `None` decodes once
    follow: Option<Duration>,
    /// Opened by `open_app_settings`
    settings_dir: Option<PathBuf>,
}

impl ImageScanner {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            max_dimension: DEFAULT_MAX_SCAN_DIMENSION,
            follow: None,
            settings_dir: None,
        }
    }

    pub fn with_max_dimension(mut self, max_dimension: u32) -> Self {
        self.max_dimension = max_dimension.max(1);
        self
    }

    /// Keep re-reading the source every `interval` until a code decodes
    pub fn following(mut self, interval: Duration) -> Self {
        self.follow = Some(interval);
        self
    }

    pub fn with_settings_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.settings_dir = Some(dir.into());
        self
    }

    /// Decode the source once on a blocking worker
    async fn decode_once(&self) -> BackendResult<Option<String>> {
        let path = self.source.clone();
        let max_dimension = self.max_dimension;

        tokio::task::spawn_blocking(move || decode_file(&path, max_dimension))
            .await
            .map_err(|e| BackendError::Scanner(format!("decode task failed: {}", e)))?
    }

    async fn scan_until_found(&self, interval: Duration) -> BackendResult<ScanResult> {
        loop {
            match self.decode_once().await {
                Ok(Some(content)) => return Ok(ScanResult::decoded(content)),
                Ok(None) => trace!("No QR code yet"),
                // The file may be mid-write; try again on the next tick
                Err(e) => debug!(error = %e, "Source not decodable yet"),
            }
            tokio::time::sleep(interval).await;
        }
    }
}

impl ScannerBackend for ImageScanner {
    async fn check_permission(&self, force: bool) -> BackendResult<PermissionStatus> {
        let status = probe_access(&self.source).await;
        debug!(source = %self.source.display(), force, ?status, "Checked source access");
        Ok(status)
    }

    async fn start_scan(&self, options: &ScanOptions) -> BackendResult<ScanResult> {
        if !options.targets(BarcodeFormat::QrCode) {
            return Err(BackendError::Unsupported("barcode formats other than QR"));
        }

        info!(source = %self.source.display(), follow = self.follow.is_some(), "Scanning image");

        let scan = async {
            match self.follow {
                Some(interval) => self.scan_until_found(interval).await,
                None => Ok(self
                    .decode_once()
                    .await?
                    .map(ScanResult::decoded)
                    .unwrap_or_else(ScanResult::cancelled)),
            }
        };

        tokio::select! {
            result = scan => result,
            _ = tokio::signal::ctrl_c() => {
                info!("Scan cancelled by user");
                Ok(ScanResult::cancelled())
            }
        }
    }

    async fn toggle_torch(&self) -> BackendResult<()> {
        Err(BackendError::Unsupported("torch"))
    }

    async fn open_app_settings(&self) -> BackendResult<()> {
        let Some(dir) = &self.settings_dir else {
            return Err(BackendError::Unsupported("app settings"));
        };

        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| BackendError::Scanner(format!("{}: {}", dir.display(), e)))?;
        open::that_detached(dir)
            .map_err(|e| BackendError::Scanner(format!("{}: {}", dir.display(), e)))?;
        info!(dir = %dir.display(), "Opened app settings");
        Ok(())
    }
}

/// Map access to the image source onto a permission status
async fn probe_access(path: &Path) -> PermissionStatus {
    match tokio::fs::metadata(path).await {
        Ok(meta) if !meta.is_file() => PermissionStatus::Restricted,
        Ok(_) => match tokio::fs::File::open(path).await {
            Ok(_) => PermissionStatus::Granted,
            Err(e) if e.kind() == ErrorKind::PermissionDenied => PermissionStatus::Denied,
            Err(e) => {
                warn!(error = %e, "Could not open scan source");
                PermissionStatus::Unknown
            }
        },
        Err(e) if e.kind() == ErrorKind::PermissionDenied => PermissionStatus::Denied,
        Err(_) => PermissionStatus::Unknown,
    }
}

/// Synchronous decode (runs in blocking task)
///
/// Returns the first grid that decodes, or `None` when the image holds no readable code.
fn decode_file(path: &Path, max_dimension: u32) -> BackendResult<Option<String>> {
    let start = std::time::Instant::now();

    let image = image::open(path)
        .map_err(|e| BackendError::Scanner(format!("{}: {}", path.display(), e)))?;

    let image = if image.width() > max_dimension || image.height() > max_dimension {
        image.resize(max_dimension, max_dimension, FilterType::Triangle)
    } else {
        image
    };
    let luma = image.to_luma8();

    let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
        luma.width() as usize,
        luma.height() as usize,
        |x, y| luma.get_pixel(x as u32, y as u32).0[0],
    );
    let grids = prepared.detect_grids();

    trace!(
        width = luma.width(),
        height = luma.height(),
        grids = grids.len(),
        elapsed_ms = start.elapsed().as_millis(),
        "QR detection complete"
    );

    for grid in grids {
        match grid.decode() {
            Ok((_meta, content)) => {
                debug!(content = %content, "Decoded QR code");
                return Ok(Some(content));
            }
            Err(e) => debug!(error = ?e, "Failed to decode QR grid"),
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    fn blank_png(dir: &Path, width: u32, height: u32) -> PathBuf {
        let path = dir.join("blank.png");
        GrayImage::from_pixel(width, height, Luma([255]))
            .save(&path)
            .unwrap();
        path
    }

    #[tokio::test]
    async fn test_readable_file_is_granted() {
        let dir = tempfile::tempdir().unwrap();
        let scanner = ImageScanner::new(blank_png(dir.path(), 8, 8));
        assert_eq!(
            scanner.check_permission(true).await,
            Ok(PermissionStatus::Granted)
        );
    }

    #[tokio::test]
    async fn test_missing_file_is_unknown() {
        let dir = tempfile::tempdir().unwrap();
        let scanner = ImageScanner::new(dir.path().join("nope.png"));
        assert_eq!(
            scanner.check_permission(false).await,
            Ok(PermissionStatus::Unknown)
        );
    }

    #[tokio::test]
    async fn test_directory_is_restricted() {
        let dir = tempfile::tempdir().unwrap();
        let scanner = ImageScanner::new(dir.path());
        assert_eq!(
            scanner.check_permission(true).await,
            Ok(PermissionStatus::Restricted)
        );
    }

    #[test]
    fn test_blank_image_has_no_code() {
        let dir = tempfile::tempdir().unwrap();
        let path = blank_png(dir.path(), 64, 64);
        assert_eq!(decode_file(&path, 32), Ok(None));
    }

    #[test]
    fn test_undecodable_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.png");
        std::fs::write(&path, b"not an image").unwrap();
        assert!(matches!(
            decode_file(&path, 640),
            Err(BackendError::Scanner(_))
        ));
    }

    #[tokio::test]
    async fn test_single_shot_without_code_is_cancelled() {
        let dir = tempfile::tempdir().unwrap();
        let scanner = ImageScanner::new(blank_png(dir.path(), 16, 16));
        let result = scanner.start_scan(&ScanOptions::qr_only()).await;
        assert_eq!(result, Ok(ScanResult::cancelled()));
    }

    #[tokio::test]
    async fn test_non_qr_scan_is_unsupported() {
        let dir = tempfile::tempdir().unwrap();
        let scanner = ImageScanner::new(blank_png(dir.path(), 16, 16));
        let options = ScanOptions {
            targeted_formats: Vec::new(),
        };
        assert!(matches!(
            scanner.start_scan(&options).await,
            Err(BackendError::Unsupported(_))
        ));
    }

    #[tokio::test]
    async fn test_no_torch() {
        let scanner = ImageScanner::new("frame.png");
        assert_eq!(
            scanner.toggle_torch().await,
            Err(BackendError::Unsupported("torch"))
        );
    }
}
