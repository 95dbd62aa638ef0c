use crate::ConfigError;

/// Direction of the conversion applied to every file in a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Compress,
    Decompress,
}

impl Mode {
    /// Pick the mode from the two CLI switches.
    ///
    /// Exactly one must be set. Passing both is rejected rather than letting
    /// one silently win.
    pub fn from_flags(compress: bool, decompress: bool) -> Result<Self, ConfigError> {
        match (compress, decompress) {
            (true, false) => Ok(Mode::Compress),
            (false, true) => Ok(Mode::Decompress),
            (true, true) => Err(ConfigError::ConflictingModes),
            (false, false) => Err(ConfigError::NoMode),
        }
    }
}

/// Runtime options shared by every file in a run.
#[derive(Debug, Clone)]
pub struct ConversionOptions {
    pub mode: Mode,
    /// Descend into directories instead of skipping them.
    pub recursive: bool,
    /// Compress texture files even though they are normally stored as-is.
    pub force: bool,
    /// Remove each input after its output was written.
    pub delete_original: bool,
}

impl ConversionOptions {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            recursive: false,
            force: false,
            delete_original: false,
        }
    }
}
