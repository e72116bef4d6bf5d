//! Path manipulation utilities for files-provider

/// Lexically normalize a path string.
///
/// Backslashes are converted to `/`, redundant separators and `.` segments
/// are collapsed, and `..` segments are resolved against preceding segments.
/// For relative paths, leading `..` segments that cannot be resolved are
/// kept; for absolute paths they are dropped at the root.
///
/// The normalization is purely textual: no filesystem access, no symlink
/// resolution. A relative path that collapses to nothing becomes `.`.
pub fn normalize_path(path: &str) -> String {
    if path.is_empty() {
        return String::new();
    }

    let unified = path.replace('\\', "/");
    let absolute = unified.starts_with('/');

    let mut segments: Vec<&str> = Vec::new();
    for segment in unified.split('/') {
        match segment {
            "" | "." => continue,
            ".." => match segments.last() {
                Some(prev) if *prev != ".." => {
                    segments.pop();
                }
                _ => {
                    // Cannot climb above an absolute root
                    if !absolute {
                        segments.push("..");
                    }
                }
            },
            other => segments.push(other),
        }
    }

    let joined = segments.join("/");
    if absolute {
        format!("/{}", joined)
    } else if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}
