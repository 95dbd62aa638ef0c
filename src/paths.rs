//! Resolution of user supplied path arguments.

use std::io;
use std::path::{Component, Path, PathBuf};

use log::debug;

use crate::ConvertError;

/// Lexically normalise `path`: drop `.` components and let `..` consume the
/// preceding normal component. `..` never climbs above the root.
pub fn clean(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

/// Turn one argument into an absolute, cleaned path.
pub fn resolve(arg: &Path) -> Result<PathBuf, ConvertError> {
    if arg.as_os_str().is_empty() {
        return Err(ConvertError::Resolve {
            path: arg.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "empty path"),
        });
    }
    let absolute = std::path::absolute(arg).map_err(|source| ConvertError::Resolve {
        path: arg.to_path_buf(),
        source,
    })?;
    Ok(clean(&absolute))
}

/// Resolve every argument. Failures are returned alongside the successes so
/// the caller can report them and carry on with the rest.
pub fn resolve_all<I, P>(args: I) -> (Vec<PathBuf>, Vec<ConvertError>)
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut paths = Vec::new();
    let mut errors = Vec::new();
    for arg in args {
        match resolve(arg.as_ref()) {
            Ok(path) => {
                debug!("resolved {} -> {}", arg.as_ref().display(), path.display());
                paths.push(path);
            }
            Err(e) => errors.push(e),
        }
    }
    (paths, errors)
}
