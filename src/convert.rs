//! Directory walk and per-file conversion.
//!
//! [`Converter::convert_paths`] visits each path in order. Directories are
//! either skipped (recursion off) or expanded in place, depth first. Every
//! other path is read, run through the codec, and written next to the input.
//!
//! Accounting per path:
//! - stat or listing failure: `total` and `failed`
//! - directory skipped because recursion is off: `failed` only
//! - file: `total`, then exactly one of `completed` or `failed`
//!
//! Failing to delete an original is a warning and touches no counter.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::naming::{allow_compression, output_path};
use crate::reporter::Reporter;
use crate::{Codec, ConversionOptions, ConvertError, Mode, RunStats};

/// Drives a single run over a set of paths.
pub struct Converter<'a, C: Codec, R: Reporter> {
    codec: C,
    options: &'a ConversionOptions,
    reporter: &'a mut R,
}

impl<'a, C: Codec, R: Reporter> Converter<'a, C, R> {
    pub fn new(codec: C, options: &'a ConversionOptions, reporter: &'a mut R) -> Self {
        Self {
            codec,
            options,
            reporter,
        }
    }

    /// Convert every path and return the final counters.
    pub fn run(&mut self, paths: &[PathBuf]) -> RunStats {
        info!(
            "starting {:?} run over {} path(s), recursive={}",
            self.options.mode,
            paths.len(),
            self.options.recursive
        );
        let mut stats = RunStats::new();
        self.convert_paths(paths, &mut stats);
        info!(
            "run finished: total={} completed={} failed={}",
            stats.total, stats.completed, stats.failed
        );
        stats
    }

    /// Process `paths` in order, descending into directories before moving
    /// on to the next sibling.
    pub fn convert_paths(&mut self, paths: &[PathBuf], stats: &mut RunStats) {
        for path in paths {
            let metadata = match fs::metadata(path) {
                Ok(m) => m,
                Err(source) => {
                    stats.tick_total();
                    self.fail(stats, ConvertError::Stat { path: path.clone(), source });
                    continue;
                }
            };

            if !metadata.is_dir() {
                self.convert_file(path, stats);
                continue;
            }

            if !self.options.recursive {
                stats.tick_skipped_dir();
                self.reporter.warning(&format!(
                    "Ignoring {} since it's a directory and recursion is disabled.",
                    path.display()
                ));
                continue;
            }

            match list_dir(path) {
                Ok(children) => {
                    debug!("descending into {} ({} entries)", path.display(), children.len());
                    self.convert_paths(&children, stats);
                }
                Err(source) => {
                    stats.tick_total();
                    self.fail(stats, ConvertError::ListDir { path: path.clone(), source });
                }
            }
        }
    }

    fn convert_file(&mut self, path: &Path, stats: &mut RunStats) {
        stats.tick_total();
        match self.transform(path) {
            Ok(written) => {
                stats.tick_completed();
                self.reporter.success(&format!(
                    "Converted {} -> {}",
                    path.display(),
                    written.display()
                ));
                if self.options.delete_original {
                    self.remove_original(path);
                }
            }
            Err(e) => self.fail(stats, e),
        }
    }

    /// Read, convert and write one file. Returns the output path.
    fn transform(&self, path: &Path) -> Result<PathBuf, ConvertError> {
        let data = fs::read(path).map_err(|source| ConvertError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let converted = match self.options.mode {
            Mode::Decompress => self.codec.decompress(&data),
            Mode::Compress => {
                let allow = allow_compression(path, self.options.force);
                debug!("compressing {} (allow_compression={allow})", path.display());
                self.codec.compress(&data, allow)
            }
        }
        .map_err(|source| ConvertError::Codec {
            path: path.to_path_buf(),
            source,
        })?;

        let out = output_path(path, self.options.mode);
        fs::write(&out, &converted).map_err(|source| ConvertError::Write {
            path: out.clone(),
            source,
        })?;
        debug!(
            "wrote {} bytes to {} (input {} bytes)",
            converted.len(),
            out.display(),
            data.len()
        );
        Ok(out)
    }

    fn remove_original(&mut self, path: &Path) {
        if let Err(source) = fs::remove_file(path) {
            let err = ConvertError::Remove {
                path: path.to_path_buf(),
                source,
            };
            self.reporter.warning(&format!(
                "Deletion was requested but the original could not be removed. {err}"
            ));
        }
    }

    fn fail(&mut self, stats: &mut RunStats, err: ConvertError) {
        stats.tick_failed();
        self.reporter.error(&err.to_string());
    }
}

/// Child paths of `dir` in the order the filesystem yields them.
fn list_dir(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    fs::read_dir(dir)?
        .map(|entry| entry.map(|e| dir.join(e.file_name())))
        .collect()
}
