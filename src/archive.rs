//! ZIP入出力
//!
//! - 入力: アップロードされたZIPを作業フォルダに展開
//! - 出力: `matched/` フォルダをZIPにまとめる

use crate::error::{CvifyError, Result};
use std::fs::{self, File};
use std::io;
use std::path::{Component, Path};
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

pub fn is_zip_path(path: &Path) -> bool {
    path.extension()
        .map(|e| e.to_string_lossy().eq_ignore_ascii_case("zip"))
        .unwrap_or(false)
}

/// ZIPを展開し、展開したファイル数を返す
///
/// 展開先の外を指すエントリ（`../` や絶対パス）はエラーにする。
pub fn unpack_zip(zip_path: &Path, dest: &Path) -> Result<usize> {
    if !zip_path.is_file() {
        return Err(CvifyError::FileNotFound(zip_path.display().to_string()));
    }

    let mut archive = ZipArchive::new(File::open(zip_path)?)?;
    fs::create_dir_all(dest)?;

    let mut count = 0;
    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        let relative = entry
            .enclosed_name()
            .map(|p| p.to_path_buf())
            .ok_or_else(|| CvifyError::Archive(format!("不正なパス: {}", entry.name())))?;
        let target = dest.join(&relative);

        if entry.is_dir() {
            fs::create_dir_all(&target)?;
            continue;
        }

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut out = File::create(&target)?;
        io::copy(&mut entry, &mut out)?;
        count += 1;
    }

    log::debug!("{}: {} ファイルを展開", zip_path.display(), count);
    Ok(count)
}

/// フォルダの中身（サブフォルダ含む）をZIPにまとめ、格納したファイル数を返す
pub fn pack_directory(dir: &Path, zip_path: &Path) -> Result<usize> {
    if !dir.is_dir() {
        return Err(CvifyError::FolderNotFound(dir.display().to_string()));
    }
    if zip_path.starts_with(dir) {
        return Err(CvifyError::Archive(format!(
            "出力先が対象フォルダの中にあります: {}",
            zip_path.display()
        )));
    }

    let mut zip = ZipWriter::new(File::create(zip_path)?);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut count = 0;
    for entry in WalkDir::new(dir).min_depth(1).sort_by_file_name() {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(dir)
            .map_err(|e| CvifyError::Archive(e.to_string()))?;
        let name = zip_entry_name(relative);

        if entry.file_type().is_dir() {
            zip.add_directory(name, options)?;
        } else if entry.file_type().is_file() {
            zip.start_file(name, options)?;
            io::copy(&mut File::open(entry.path())?, &mut zip)?;
            count += 1;
        }
    }

    zip.finish()?;
    log::debug!("{}: {} ファイルを格納", zip_path.display(), count);
    Ok(count)
}

/// ZIP内のパスは常に `/` 区切り
fn zip_entry_name(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().to_string()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
