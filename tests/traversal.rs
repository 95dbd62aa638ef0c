use std::cell::Cell;
use std::fs;
use std::path::{Path, PathBuf};

use dvpl_convert::{
    Codec, ConversionOptions, Converter, DvplError, Mode, Reporter, RunStats, Severity,
};

#[derive(Default)]
struct Collect {
    events: Vec<(Severity, String)>,
}

impl Reporter for Collect {
    fn report(&mut self, severity: Severity, message: &str) {
        self.events.push((severity, message.to_string()));
    }

    fn summary(&mut self, _stats: &RunStats) {}
}

impl Collect {
    fn of(&self, severity: Severity) -> Vec<&str> {
        self.events
            .iter()
            .filter(|(s, _)| *s == severity)
            .map(|(_, m)| m.as_str())
            .collect()
    }
}

/// Codec that fails every call and counts how often it was asked.
#[derive(Default)]
struct Broken {
    calls: Cell<usize>,
}

impl Codec for Broken {
    fn compress(&self, _data: &[u8], _allow: bool) -> Result<Vec<u8>, DvplError> {
        self.calls.set(self.calls.get() + 1);
        Err(DvplError::Lz4("refused".into()))
    }

    fn decompress(&self, _data: &[u8]) -> Result<Vec<u8>, DvplError> {
        self.calls.set(self.calls.get() + 1);
        Err(DvplError::BadMagic)
    }
}

/// Identity codec.
struct Passthrough;

impl Codec for Passthrough {
    fn compress(&self, data: &[u8], _allow: bool) -> Result<Vec<u8>, DvplError> {
        Ok(data.to_vec())
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>, DvplError> {
        Ok(data.to_vec())
    }
}

fn opts(mode: Mode, recursive: bool) -> ConversionOptions {
    let mut o = ConversionOptions::new(mode);
    o.recursive = recursive;
    o
}

fn tree(root: &Path) {
    fs::create_dir_all(root.join("sub")).unwrap();
    fs::write(root.join("a.txt"), b"a").unwrap();
    fs::write(root.join("sub").join("b.txt"), b"b").unwrap();
}

#[test]
fn codec_error_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let blob = dir.path().join("blob");
    fs::write(&blob, b"raw").unwrap();

    let codec = Broken::default();
    let mut reporter = Collect::default();
    let options = opts(Mode::Decompress, false);
    let stats = Converter::new(&codec, &options, &mut reporter).run(&[blob]);

    assert_eq!((stats.total, stats.completed, stats.failed), (1, 0, 1));
    assert_eq!(codec.calls.get(), 1);
    assert!(!dir.path().join("blob.nodvpl").exists());
    let errors = reporter.of(Severity::Error);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("missing DVPL marker"));
}

#[test]
fn skipped_directory_is_not_attempted() {
    let dir = tempfile::tempdir().unwrap();
    tree(dir.path());

    let codec = Broken::default();
    let mut reporter = Collect::default();
    let options = opts(Mode::Compress, false);
    let stats = Converter::new(&codec, &options, &mut reporter).run(&[dir.path().to_path_buf()]);

    assert_eq!((stats.total, stats.completed, stats.failed), (0, 0, 1));
    assert_eq!(stats.skipped_dirs, 1);
    assert!(stats.is_balanced());
    assert_eq!(codec.calls.get(), 0);
    assert_eq!(reporter.of(Severity::Warning).len(), 1);
}

#[test]
fn recursion_visits_nested_files() {
    let dir = tempfile::tempdir().unwrap();
    tree(dir.path());

    let mut reporter = Collect::default();
    let options = opts(Mode::Compress, true);
    let stats =
        Converter::new(Passthrough, &options, &mut reporter).run(&[dir.path().to_path_buf()]);

    assert_eq!((stats.total, stats.completed, stats.failed), (2, 2, 0));
    assert!(stats.is_balanced());
    assert!(dir.path().join("a.txt.dvpl").exists());
    assert!(dir.path().join("sub/b.txt.dvpl").exists());
}

#[test]
fn subdirectory_is_finished_before_next_sibling() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first");
    let nested = first.join("nested");
    fs::create_dir_all(&nested).unwrap();
    for name in ["x", "y", "z"] {
        fs::write(nested.join(name), name).unwrap();
    }
    let last = dir.path().join("last.bin");
    fs::write(&last, b"last").unwrap();

    let mut reporter = Collect::default();
    let options = opts(Mode::Compress, true);
    let paths: Vec<PathBuf> = vec![first, last];
    let stats = Converter::new(Passthrough, &options, &mut reporter).run(&paths);
    assert_eq!(stats.completed, 4);

    let done = reporter.of(Severity::Success);
    assert_eq!(done.len(), 4);
    assert!(done[..3].iter().all(|m| m.contains("nested")));
    assert!(done[3].contains("last.bin"));
}

#[test]
fn mixed_failures_stay_balanced() {
    let dir = tempfile::tempdir().unwrap();
    tree(&dir.path().join("tree"));
    fs::write(dir.path().join("good.dvpl"), b"data").unwrap();

    let mut reporter = Collect::default();
    let options = opts(Mode::Decompress, false);
    let paths = vec![
        dir.path().join("good.dvpl"),
        dir.path().join("tree"),
        dir.path().join("gone"),
    ];
    let stats = Converter::new(Passthrough, &options, &mut reporter).run(&paths);

    assert_eq!(stats.total, 2);
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.failed, 2);
    assert!(stats.is_balanced());
    assert_eq!(fs::read(dir.path().join("good")).unwrap(), b"data");
}
