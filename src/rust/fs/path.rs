//! Pure string helpers over `/`-separated paths. Nothing here touches the disk.

const SEPARATOR: char = '/';

/// Returns the text after the last `.` of `path`.
///
/// A path without any `.` is returned unchanged, e.g. `extension("Makefile") == "Makefile"`.
pub fn extension(path: &str) -> &str {
    path.rsplit('.').next().unwrap_or(path)
}

/// Returns the final `/` segment of `path` (the file name).
pub fn last_segment(path: &str) -> &str {
    path.rsplit(SEPARATOR).next().unwrap_or(path)
}

/// Returns the directory leading up to a file, e.g. `"src/app/render.js" -> "src/app"`.
///
/// A single-segment path has no parent and yields the empty string.
pub fn directory_path(path: &str) -> String {
    match path.rfind(SEPARATOR) {
        Some(index) => path[..index].to_string(),
        None => String::new(),
    }
}

/// Drops `depth` leading segments from `path`, stopping before the file name.
///
/// Used to compute a file's location relative to a scan root so the tree can be
/// mirrored under another directory.
pub fn lower_path(path: &str, depth: usize) -> String {
    let segments: Vec<&str> = path.split(SEPARATOR).collect();
    let skip = depth.min(segments.len() - 1);
    segments[skip..].join("/")
}

/// Whether `extension(path)` equals `ext`.
pub fn has_extension(path: &str, ext: &str) -> bool {
    extension(path) == ext
}

/// Joins a directory and an entry name. An empty directory means the current one.
pub fn join(dir: &str, name: &str) -> String {
    if dir.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", dir, name)
    }
}

#[cfg(test)]
#[path = "test_path.rs"]
mod tests;
