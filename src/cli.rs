use std::ffi::OsString;

use clap::{ArgAction, Parser};
use log::LevelFilter;

use crate::io_utils::CliError;
use crate::{
    paths, ConfigError, ConsoleReporter, ConversionOptions, Converter, DvplCodec, Mode,
    OutputStyle, Reporter, RunStats,
};

/// Convert files to and from the DVPL container format.
///
/// Each converted file is written next to its input: compression appends
/// `.dvpl`, decompression strips it (or appends `.nodvpl` when absent).
#[derive(Parser, Debug)]
#[command(name = "dvpl-convert", version)]
pub struct Args {
    /// Compress every file into a .dvpl container
    #[arg(short = 'c', long)]
    pub compress: bool,

    /// Decompress every .dvpl container
    #[arg(short = 'd', long)]
    pub decompress: bool,

    /// Descend into directories instead of skipping them
    #[arg(short = 'r', long)]
    pub recursive: bool,

    /// Compress .tex files too instead of storing them uncompressed
    #[arg(short = 'f', long)]
    pub force: bool,

    /// Delete each original after its converted file was written
    #[arg(short = 'n', long = "delete-original")]
    pub delete_original: bool,

    /// Plain output without colors
    #[arg(short = 'p', long)]
    pub plain: bool,

    /// Print the final summary as JSON
    #[arg(long)]
    pub json: bool,

    /// More diagnostic logging (repeat for more detail)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Files or directories to convert
    #[arg(value_name = "PATH")]
    pub paths: Vec<OsString>,
}

impl Args {
    /// Validate the mode switches and collect the run options.
    pub fn options(&self) -> Result<ConversionOptions, ConfigError> {
        let mode = Mode::from_flags(self.compress, self.decompress)?;
        Ok(ConversionOptions {
            mode,
            recursive: self.recursive,
            force: self.force,
            delete_original: self.delete_original,
        })
    }

    pub fn style(&self) -> OutputStyle {
        if self.plain {
            OutputStyle::Plain
        } else {
            OutputStyle::Colored
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Run a whole conversion with the DVPL codec, reporting to `reporter`.
///
/// Fatal configuration problems are returned before any path is touched.
/// Individual path failures only show up in the returned counters.
pub fn run<R: Reporter>(args: &Args, reporter: &mut R) -> Result<RunStats, CliError> {
    let options = args.options()?;

    let (resolved, errors) = paths::resolve_all(&args.paths);
    for err in &errors {
        reporter.error(&format!("{err}. Skipping."));
    }
    if resolved.is_empty() {
        return Err(ConfigError::NoPaths.into());
    }

    let stats = Converter::new(DvplCodec, &options, reporter).run(&resolved);
    reporter.summary(&stats);
    Ok(stats)
}

/// Reporter for the process's standard streams as configured by `args`.
pub fn stdio_reporter(args: &Args) -> ConsoleReporter<std::io::Stdout, std::io::Stderr> {
    ConsoleReporter::stdio(args.style()).with_json_summary(args.json)
}
