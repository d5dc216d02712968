//! Capability-based file helpers over UTF-8 paths.
//!
//! Every helper resolves its path against an ambient directory anchor and
//! then works through a `cap-std` [`Dir`](fs_utf8::Dir) handle. The anchor
//! is the filesystem root for absolute paths and the current directory
//! (plus any leading `..` hops) for relative ones.
#![forbid(unsafe_code)]

use std::io;

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};

/// Open an existing file for reading.
///
/// # Errors
/// Propagates the I/O error when the file cannot be opened.
pub fn open_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Create or truncate a file for writing, creating missing parent
/// directories first.
///
/// # Errors
/// Propagates the I/O error when a directory or the file cannot be created.
pub fn create_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    ensure_parent_dir(path)?;
    let (dir, name) = parent_and_name(path)?;
    dir.create(name)
}

/// Create every missing directory above `path`.
///
/// # Errors
/// Propagates the I/O error when a directory cannot be created.
pub fn ensure_parent_dir(path: &Utf8Path) -> io::Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    let (anchor, relative) = anchor_and_relative(parent)?;
    if relative.as_str().is_empty() {
        return Ok(());
    }
    anchor.create_dir_all(&relative)
}

/// Whether an existing `path` is a regular file rather than a directory or
/// other entry.
///
/// # Errors
/// Returns an [`io::ErrorKind::NotFound`] error when the path or its parent
/// is missing, and propagates any other I/O error.
pub fn is_regular_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = parent_and_name(path)?;
    dir.metadata(name).map(|metadata| metadata.is_file())
}

/// Open the directory holding `path` and return it with the file name.
fn parent_and_name(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other(format!("{path} does not name a file")))?
        .to_owned();
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, name))
}

/// Open the anchor directory of `path` and return it with the remainder.
fn anchor_and_relative(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, Utf8PathBuf)> {
    let (anchor, relative) = split_anchor(path);
    let dir = fs_utf8::Dir::open_ambient_dir(&anchor, ambient_authority())?;
    Ok((dir, relative))
}

/// Split `path` into an anchor and the remainder below it.
///
/// Leading prefix, root, `.` and `..` components form the anchor; an empty
/// anchor becomes `.`.
fn split_anchor(path: &Utf8Path) -> (Utf8PathBuf, Utf8PathBuf) {
    let mut anchor = Utf8PathBuf::new();
    let mut relative = Utf8PathBuf::new();
    for component in path.components() {
        let leading = relative.as_str().is_empty();
        match component {
            Utf8Component::Normal(_) => relative.push(component),
            _ if leading => anchor.push(component),
            _ => relative.push(component),
        }
    }
    if anchor.as_str().is_empty() {
        anchor.push(".");
    }
    (anchor, relative)
}
