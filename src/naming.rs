//! Output path rules.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::Mode;

/// Extension of DVPL containers.
pub const DVPL_EXTENSION: &str = "dvpl";
/// Suffix used when a decompressed file has no `.dvpl` extension to strip.
pub const NODVPL_SUFFIX: &str = ".nodvpl";
/// Textures are already optimally encoded and stored uncompressed by default.
pub const TEXTURE_SUFFIX: &str = ".tex";

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension() == Some(OsStr::new(ext))
}

fn append_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}

/// Derive where the converted form of `input` is written.
///
/// Compression appends `.dvpl`. Decompression strips a trailing `.dvpl`, or
/// appends `.nodvpl` when there is none so the input is never overwritten.
pub fn output_path(input: &Path, mode: Mode) -> PathBuf {
    match mode {
        Mode::Compress => append_suffix(input, ".dvpl"),
        Mode::Decompress if has_extension(input, DVPL_EXTENSION) => input.with_extension(""),
        Mode::Decompress => append_suffix(input, NODVPL_SUFFIX),
    }
}

/// Whether `input` should be LZ4 compressed when packed.
///
/// Any path ending in `.tex` counts as a texture, including a file named
/// just `.tex`.
pub fn allow_compression(input: &Path, force: bool) -> bool {
    let is_texture = input
        .as_os_str()
        .as_encoded_bytes()
        .ends_with(TEXTURE_SUFFIX.as_bytes());
    force || !is_texture
}
