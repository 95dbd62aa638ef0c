//! Batch conversion of files to and from the DVPL container format.
//!
//! Paths given on the command line are resolved with [`paths`], walked by
//! [`Converter`], and every regular file is passed through a [`Codec`]. The
//! result is written beside the input under a name chosen by [`naming`].
//! Progress goes to a [`Reporter`] and the run ends with a [`RunStats`]
//! summary.

pub mod cli;
pub mod codec;
pub mod config;
pub mod convert;
pub mod error;
pub mod footer;
pub mod io_utils;
pub mod naming;
pub mod paths;
pub mod reporter;
pub mod stats;

pub use codec::{Codec, DvplCodec};
pub use config::{ConversionOptions, Mode};
pub use convert::Converter;
pub use error::{ConfigError, ConvertError, DvplError};
pub use footer::{CompressionKind, DvplFooter, FOOTER_SIZE};
pub use naming::{allow_compression, output_path};
pub use reporter::{ConsoleReporter, OutputStyle, Reporter, Severity};
pub use stats::RunStats;
