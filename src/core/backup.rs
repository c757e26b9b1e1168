use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store::audit;
use crate::ui::messages::{success, warning};
use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the visit log to `dest_file`, optionally compressing the copy
    /// into a `.zip` or `.tar.gz` archive. The backup only reads the log;
    /// it never touches session state.
    pub fn backup(cfg: &Config, dest_file: &str, compress: bool, tarball: bool) -> AppResult<()> {
        let src = Path::new(&cfg.visit_log);
        let dest = Path::new(dest_file);

        if !src.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Visit log not found: {}", src.display()),
            )
            .into());
        }

        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        if dest.exists() && !confirm_overwrite(dest)? {
            warning("Backup cancelled by user.");
            return Ok(());
        }

        fs::copy(src, dest)?;
        success(format!("Backup created: {}", dest.display()));

        let final_path = if compress || tarball {
            let compressed = if tarball {
                compress_tar_gz(dest)?
            } else {
                compress_zip(dest)?
            };

            if compressed != dest.to_path_buf() {
                if let Err(e) = fs::remove_file(dest) {
                    warning(format!("Failed to remove uncompressed backup: {e}"));
                } else {
                    println!("🗑️ Removed uncompressed backup: {}", dest.display());
                }
            }

            compressed
        } else {
            dest.to_path_buf()
        };

        let audit_path = audit::audit_file_for(&cfg.visit_log);
        if let Err(e) = audit::write(
            &audit_path,
            "backup",
            &final_path.to_string_lossy(),
            if compress || tarball {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        ) {
            warning(format!("Failed to write operation log: {e}"));
        }

        Ok(())
    }
}

fn confirm_overwrite(dest: &Path) -> AppResult<bool> {
    use std::io::{Write, stdin, stdout};

    warning(format!(
        "The file '{}' already exists. Overwrite? [y/N]:",
        dest.display()
    ));

    let mut answer = String::new();
    print!("> ");
    stdout().flush().ok();
    stdin().read_line(&mut answer)?;

    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

/// Compress a backup copy into `<dest>.zip`.
fn compress_zip(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| AppError::Other(format!("invalid backup path: {}", path.display())))?;

    let mut f = fs::File::open(path)?;
    zip.start_file(name, options).map_err(std::io::Error::other)?;
    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    println!("📦 Compressed: {}", zip_path.display());

    Ok(zip_path)
}

/// Compress a backup copy into `<dest>.tar.gz`.
fn compress_tar_gz(path: &Path) -> AppResult<PathBuf> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| AppError::Other(format!("invalid backup path: {}", path.display())))?;

    let tar_gz_path = path.with_extension("tar.gz");
    let file = fs::File::create(&tar_gz_path)?;
    let encoder = GzEncoder::new(file, Compression::default());
    let mut builder = tar::Builder::new(encoder);

    builder.append_path_with_name(path, &name)?;
    builder.into_inner()?.finish()?;

    println!("📦 Compressed: {}", tar_gz_path.display());

    Ok(tar_gz_path)
}
