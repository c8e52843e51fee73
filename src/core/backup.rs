//! Workbook backup: a timestamped copy taken before every rewrite.
//! Backups are never overwritten, never pruned and never read back.

use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the workbook into the backup directory. Returns the path of
    /// the backup actually written.
    pub fn backup(src: &Path, backup_dir: &Path, compress: bool) -> AppResult<PathBuf> {
        if !src.exists() {
            return Err(AppError::Backup(format!(
                "source not found: {}",
                src.display()
            )));
        }

        fs::create_dir_all(backup_dir).map_err(|e| AppError::Backup(e.to_string()))?;

        let stem = src
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("work_log");
        let stamp = Local::now().format("%Y%m%d%H%M%S");
        let dest = unique_dest(backup_dir, &format!("{stem}_backup_{stamp}"));

        fs::copy(src, &dest).map_err(|e| AppError::Backup(e.to_string()))?;
        success(format!("Backup created: {}", dest.display()));

        if compress {
            let zipped = compress_backup(&dest)?;
            fs::remove_file(&dest).map_err(|e| AppError::Backup(e.to_string()))?;
            return Ok(zipped);
        }

        Ok(dest)
    }
}

/// Bump a numeric suffix until the destination name is free.
fn unique_dest(dir: &Path, base: &str) -> PathBuf {
    let mut dest = dir.join(format!("{base}.xlsx"));
    let mut n = 1;
    while dest.exists() {
        dest = dir.join(format!("{base}-{n}.xlsx"));
        n += 1;
    }
    dest
}

/// Compress a backup using .zip
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut f = fs::File::open(path)?;
    zip.start_file(path.file_name().unwrap().to_string_lossy(), options)
        .map_err(std::io::Error::other)?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    success(format!("Compressed: {}", zip_path.display()));

    Ok(zip_path)
}
