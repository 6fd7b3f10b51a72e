//! Asset processing with side effects (minification, gzip, deletion).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::asset::{AssetKind, compress, is_gzipped, minify};
use crate::{debug, log};

/// Outcome counters for one pipeline run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    /// Files gzipped successfully (`.gz` sibling written).
    pub compressed: usize,
    /// Subset of `compressed` that went through a minification pass.
    pub minified: usize,
    /// Files skipped because they already carry the `.gz` extension.
    pub skipped_gzip: usize,
    /// Files that failed at the read or compress-write stage.
    pub failed: usize,
    /// Originals removed in the deletion pass.
    pub deleted: usize,
}

/// Run the asset pipeline over `root`.
///
/// Every regular file below `root` (except files already ending in `.gz`)
/// is minified when its kind supports it, gzipped at maximum compression
/// and written back as a `<path>.gz` sibling. Originals are removed in a
/// second pass once the walk has finished, so the tree is never mutated
/// while it is being enumerated.
///
/// A missing root directory is a no-op, not an error: the build tool may
/// invoke this step for projects that ship no web assets at all.
pub fn run(root: &Path) -> Result<RunStats> {
    let mut stats = RunStats::default();

    if !root.is_dir() {
        log!("assets"; "'{}' does not exist, skipping", root.display());
        return Ok(stats);
    }

    log!("assets"; "processing web assets in '{}'", root.display());

    // A path enters this list only after its .gz sibling is on disk.
    let mut pending_deletion = Vec::new();
    walk(root, root, &mut pending_deletion, &mut stats);

    delete_originals(&pending_deletion, root, &mut stats);

    log!(
        "assets";
        "done: {} compressed ({} minified), {} already gzipped, {} failed, {} originals deleted",
        stats.compressed, stats.minified, stats.skipped_gzip, stats.failed, stats.deleted
    );

    Ok(stats)
}

/// Remove queued originals, one attempt per path.
///
/// A failed deletion is logged and never stops the remaining ones.
fn delete_originals(paths: &[PathBuf], root: &Path, stats: &mut RunStats) {
    for path in paths {
        match fs::remove_file(path) {
            Ok(()) => {
                stats.deleted += 1;
                debug!("clean"; "deleted original {}", relative(path, root));
            }
            Err(e) => {
                log!("error"; "failed to delete '{}': {}", relative(path, root), e);
            }
        }
    }
}

/// Recursively process every regular file below `dir`.
fn walk(dir: &Path, root: &Path, pending_deletion: &mut Vec<PathBuf>, stats: &mut RunStats) {
    let Ok(entries) = fs::read_dir(dir) else {
        log!("error"; "failed to enumerate '{}'", dir.display());
        return;
    };

    for entry in entries {
        let Ok(entry) = entry else {
            log!("error"; "failed to enumerate an entry in '{}'", dir.display());
            continue;
        };
        let path = entry.path();
        let file_type = match entry.file_type() {
            Ok(ft) => ft,
            Err(e) => {
                log!("error"; "failed to stat '{}': {}", relative(&path, root), e);
                continue;
            }
        };
        // file_type() does not follow symlinks, so a symlinked directory
        // never recurses: a link cycle would otherwise walk forever.
        if file_type.is_dir() {
            walk(&path, root, pending_deletion, stats);
        } else if file_type.is_file() || path.is_file() {
            process_file(&path, root, pending_deletion, stats);
        } else {
            debug!("assets"; "skipping non-regular file {}", relative(&path, root));
        }
    }
}

/// Process one file: minify when recognized, gzip, queue the original.
///
/// Every failure is confined to this file; the walk continues regardless.
fn process_file(
    path: &Path,
    root: &Path,
    pending_deletion: &mut Vec<PathBuf>,
    stats: &mut RunStats,
) {
    if is_gzipped(path) {
        debug!("assets"; "skipping already gzipped {}", relative(path, root));
        stats.skipped_gzip += 1;
        return;
    }

    debug!("assets"; "processing {}", relative(path, root));

    let raw = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            log!("error"; "failed to read '{}': {}", relative(path, root), e);
            stats.failed += 1;
            return;
        }
    };

    let kind = AssetKind::from_path(path);
    let (content, minified) = if kind.is_minifiable() {
        match minify::minify(kind, &raw) {
            Ok(reduced) => (reduced, true),
            Err(e) => {
                // Best effort: fall back to compressing the raw bytes.
                log!("warn"; "minify failed for '{}': {}", relative(path, root), e);
                (raw, false)
            }
        }
    } else {
        (raw, false)
    };

    let gz_path = gz_sibling(path);
    if let Err(e) = write_gzipped(&gz_path, &content) {
        log!("error"; "failed to gzip '{}': {}", relative(path, root), e);
        stats.failed += 1;
        return;
    }

    pending_deletion.push(path.to_path_buf());
    stats.compressed += 1;
    if minified {
        stats.minified += 1;
        log!("gzip"; "{} (minified)", relative(&gz_path, root));
    } else {
        log!("gzip"; "{}", relative(&gz_path, root));
    }
}

fn write_gzipped(gz_path: &Path, content: &[u8]) -> io::Result<()> {
    let compressed = compress::gzip_bytes(content)?;
    fs::write(gz_path, compressed)
}

/// `<path>.gz` sibling for an original file.
fn gz_sibling(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".gz");
    PathBuf::from(name)
}

/// Path relative to the processed root, for log output.
fn relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}
