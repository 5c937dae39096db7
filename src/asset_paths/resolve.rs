use std::io;
use std::path::{Component, Path, PathBuf};

/// Resolve an image reference against the directory it is relative to.
///
/// Absolute references replace the base entirely. The result is normalised lexically and is
/// never checked against the filesystem, so symlinks are not followed.
pub fn resolve_reference(base_dir: &Path, reference: &str) -> PathBuf {
    normalize_lexically(&base_dir.join(reference))
}

/// Absolute, normalised directory containing `document`.
pub fn document_base_dir(document: &Path) -> io::Result<PathBuf> {
    let absolute = normalize_lexically(&std::path::absolute(document)?);
    Ok(match absolute.parent() {
        Some(parent) => parent.to_path_buf(),
        None => absolute,
    })
}

/// Collapse `.` and `..` segments without touching the disk.
///
/// A `..` directly below the root is dropped; on a relative path with nothing left to pop it
/// is kept.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}
