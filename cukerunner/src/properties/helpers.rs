//! Shared filesystem helpers for properties loading.

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8::Dir};

/// Return the parent directory of `path`, falling back to `"."` when the path
/// has no parent or the parent is empty.
fn parent_or_dot(path: &Utf8Path) -> &Utf8Path {
    path.parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."))
}

fn split_path(path: &Utf8Path) -> std::io::Result<(Dir, &str)> {
    let file_name = path
        .file_name()
        .ok_or_else(|| std::io::Error::other("cannot determine file name for properties path"))?;
    let dir = Dir::open_ambient_dir(parent_or_dot(path), ambient_authority())?;
    Ok((dir, file_name))
}

/// Whether `path` names a regular file, checked through a `cap-std` handle
/// on its parent directory.
pub(super) fn is_file(path: &Utf8Path) -> bool {
    split_path(path)
        .and_then(|(dir, file_name)| dir.metadata(file_name))
        .is_ok_and(|meta| meta.is_file())
}

/// Read `path` through a `cap-std` handle on its parent directory.
///
/// Valid UTF-8 is taken as is; anything else is decoded as ISO-8859-1, one
/// character per byte.
///
/// # Errors
///
/// Returns an [`std::io::Error`] if the file name cannot be determined, the
/// parent directory cannot be opened, or the file cannot be read.
pub(super) fn read_text(path: &Utf8Path) -> std::io::Result<String> {
    let (dir, file_name) = split_path(path)?;
    let bytes = dir.read(file_name)?;
    Ok(decode(bytes))
}

fn decode(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes)
        .unwrap_or_else(|err| err.into_bytes().into_iter().map(char::from).collect())
}
