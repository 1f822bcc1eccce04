//! Attachment resolution and materialization.
//!
//! Messages reference uploads by id; the binaries live in the export's
//! shared `__uploads/` tree. The resolver maps each reference to an on-disk
//! source, materializes it next to the rendered transcript (physical copy by
//! default, symlink as an opt-in for large media sets), and marks missing
//! targets so the renderer can emit a placeholder instead of failing.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::models::Turn;
use crate::error::Result;
use crate::export::UPLOADS_DIR;
use crate::message::FileRef;

/// How resolved attachments are materialized into the output tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttachmentMode {
    /// Physical copy. Portable default.
    #[default]
    Copy,
    /// Symbolic link to the original. Falls back to copy on platforms
    /// without symlink support.
    Symlink,
}

impl std::fmt::Display for AttachmentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttachmentMode::Copy => write!(f, "copy"),
            AttachmentMode::Symlink => write!(f, "symlink"),
        }
    }
}

/// How a single reference ended up rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Target was missing; the renderer emits a placeholder.
    #[default]
    Omitted,
    /// Materialized as a physical copy.
    Copy,
    /// Materialized as a symbolic link.
    Symlink,
}

/// A message's file reference joined with its resolution outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct AttachmentRef {
    /// The original reference from the message record.
    pub file: FileRef,
    /// Materialized path under the output tree, `None` when missing.
    pub resolved: Option<PathBuf>,
    /// Resolution outcome.
    pub mode: RenderMode,
}

impl AttachmentRef {
    /// Wraps a raw file reference prior to resolution.
    pub fn unresolved(file: &FileRef) -> Self {
        Self {
            file: file.clone(),
            resolved: None,
            mode: RenderMode::Omitted,
        }
    }

    /// Original filename.
    pub fn name(&self) -> &str {
        &self.file.name
    }

    /// Path relative to the rendered output, used in transcript links.
    pub fn rel_path(&self) -> String {
        self.file.rel_path()
    }

    /// Returns `true` when the upload target was not found.
    pub fn is_missing(&self) -> bool {
        self.resolved.is_none()
    }

    /// Returns `true` for archive files.
    pub fn is_archive(&self) -> bool {
        self.file.is_archive()
    }
}

/// Summary of one resolution pass.
#[derive(Debug, Default)]
pub struct AttachmentReport {
    /// Number of references materialized into the output tree.
    pub resolved: usize,
    /// Relative paths of references whose upload target was missing.
    pub missing: Vec<String>,
    /// Set when symlink mode had to fall back to copying.
    pub symlink_fallback: bool,
}

/// Resolves and materializes every attachment reference in `turns`.
///
/// Present uploads are placed under `<out_dir>/__uploads/<id>/<name>` and
/// the reference is updated in place; absent ones are left unresolved and
/// recorded in the report. A target already materialized by an earlier
/// reference is reused.
///
/// # Errors
///
/// Only I/O failures while writing the output tree are errors; a missing
/// source never is.
pub fn resolve_attachments(
    turns: &mut [Turn],
    uploads_dir: &Path,
    out_dir: &Path,
    mode: AttachmentMode,
) -> Result<AttachmentReport> {
    let mut report = AttachmentReport::default();

    for attachment in turns.iter_mut().flat_map(|t| t.attachments.iter_mut()) {
        let src = uploads_dir
            .join(&attachment.file.id)
            .join(&attachment.file.name);
        if !src.is_file() {
            report.missing.push(attachment.rel_path());
            continue;
        }

        let dest = out_dir
            .join(UPLOADS_DIR)
            .join(&attachment.file.id)
            .join(&attachment.file.name);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        let rendered = if dest.exists() {
            // Same file referenced twice; the first pass already wrote it.
            match mode {
                AttachmentMode::Copy => RenderMode::Copy,
                AttachmentMode::Symlink => RenderMode::Symlink,
            }
        } else {
            materialize(&src, &dest, mode, &mut report.symlink_fallback)?
        };

        attachment.resolved = Some(dest);
        attachment.mode = rendered;
        report.resolved += 1;
    }

    Ok(report)
}

fn materialize(
    src: &Path,
    dest: &Path,
    mode: AttachmentMode,
    fallback: &mut bool,
) -> Result<RenderMode> {
    match mode {
        AttachmentMode::Copy => {
            fs::copy(src, dest)?;
            Ok(RenderMode::Copy)
        }
        AttachmentMode::Symlink => match symlink_file(src, dest) {
            Ok(()) => Ok(RenderMode::Symlink),
            Err(_) => {
                *fallback = true;
                fs::copy(src, dest)?;
                Ok(RenderMode::Copy)
            }
        },
    }
}

#[cfg(unix)]
fn symlink_file(src: &Path, dest: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(fs::canonicalize(src)?, dest)
}

#[cfg(not(unix))]
fn symlink_file(_src: &Path, _dest: &Path) -> io::Result<()> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "symbolic links not supported on this platform",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn turn_with(file: FileRef) -> Turn {
        let mut turn = Turn::new("Alice", "2024-01-15", "see attached");
        turn.attachments.push(AttachmentRef::unresolved(&file));
        turn
    }

    fn make_upload(uploads: &Path, id: &str, name: &str, content: &str) {
        let dir = uploads.join(id);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_copy_resolves_and_materializes() {
        let root = TempDir::new().unwrap();
        let uploads = root.path().join("__uploads");
        let out = root.path().join("out");
        fs::create_dir_all(&out).unwrap();
        make_upload(&uploads, "F1", "img.png", "pixels");

        let mut turns = vec![turn_with(FileRef::new("F1", "img.png"))];
        let report =
            resolve_attachments(&mut turns, &uploads, &out, AttachmentMode::Copy).unwrap();

        assert_eq!(report.resolved, 1);
        assert!(report.missing.is_empty());

        let a = &turns[0].attachments[0];
        assert_eq!(a.mode, RenderMode::Copy);
        let dest = a.resolved.as_ref().unwrap();
        assert_eq!(fs::read_to_string(dest).unwrap(), "pixels");
        assert!(dest.ends_with("__uploads/F1/img.png"));
    }

    #[test]
    fn test_missing_target_is_reported_not_fatal() {
        let root = TempDir::new().unwrap();
        let uploads = root.path().join("__uploads");
        let out = root.path().join("out");
        fs::create_dir_all(&out).unwrap();

        let mut turns = vec![turn_with(FileRef::new("img123", "chart.png"))];
        let report =
            resolve_attachments(&mut turns, &uploads, &out, AttachmentMode::Copy).unwrap();

        assert_eq!(report.resolved, 0);
        assert_eq!(report.missing, vec!["__uploads/img123/chart.png"]);
        assert!(turns[0].attachments[0].is_missing());
        assert_eq!(turns[0].attachments[0].mode, RenderMode::Omitted);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_points_at_original() {
        let root = TempDir::new().unwrap();
        let uploads = root.path().join("__uploads");
        let out = root.path().join("out");
        fs::create_dir_all(&out).unwrap();
        make_upload(&uploads, "F2", "big.mov", "frames");

        let mut turns = vec![turn_with(FileRef::new("F2", "big.mov"))];
        let report =
            resolve_attachments(&mut turns, &uploads, &out, AttachmentMode::Symlink).unwrap();

        assert!(!report.symlink_fallback);
        let dest = turns[0].attachments[0].resolved.clone().unwrap();
        assert!(dest.symlink_metadata().unwrap().file_type().is_symlink());
        assert_eq!(fs::read_to_string(&dest).unwrap(), "frames");
        assert_eq!(turns[0].attachments[0].mode, RenderMode::Symlink);
    }

    #[test]
    fn test_duplicate_reference_reuses_materialized_file() {
        let root = TempDir::new().unwrap();
        let uploads = root.path().join("__uploads");
        let out = root.path().join("out");
        fs::create_dir_all(&out).unwrap();
        make_upload(&uploads, "F1", "img.png", "pixels");

        let file = FileRef::new("F1", "img.png");
        let mut turns = vec![turn_with(file.clone()), turn_with(file)];
        let report =
            resolve_attachments(&mut turns, &uploads, &out, AttachmentMode::Copy).unwrap();

        assert_eq!(report.resolved, 2);
        assert!(!turns[1].attachments[0].is_missing());
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(AttachmentMode::Copy.to_string(), "copy");
        assert_eq!(AttachmentMode::Symlink.to_string(), "symlink");
    }
}
