use crate::DvplError;

/// Size of the trailing DVPL footer in bytes.
pub const FOOTER_SIZE: usize = 20;
/// Marker closing every DVPL file.
pub const DVPL_MAGIC: [u8; 4] = *b"DVPL";

/// How the payload in front of the footer is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionKind {
    Stored,
    Lz4,
    Lz4Hc,
}

impl CompressionKind {
    pub fn code(self) -> u32 {
        match self {
            CompressionKind::Stored => 0,
            CompressionKind::Lz4 => 1,
            CompressionKind::Lz4Hc => 2,
        }
    }

    pub fn from_code(code: u32) -> Result<Self, DvplError> {
        match code {
            0 => Ok(CompressionKind::Stored),
            1 => Ok(CompressionKind::Lz4),
            2 => Ok(CompressionKind::Lz4Hc),
            other => Err(DvplError::UnknownKind(other)),
        }
    }
}

/// Representation of the 20-byte DVPL footer.
///
/// All fields are little endian:
/// - bytes 0..4   : size of the original data
/// - bytes 4..8   : size of the payload preceding the footer
/// - bytes 8..12  : CRC32 of the payload
/// - bytes 12..16 : compression kind
/// - bytes 16..20 : `DVPL`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DvplFooter {
    pub original_size: u32,
    pub compressed_size: u32,
    pub crc32: u32,
    pub kind: CompressionKind,
}

impl DvplFooter {
    /// Build the footer describing `payload`, which decodes to `original_len` bytes.
    pub fn for_payload(
        payload: &[u8],
        original_len: usize,
        kind: CompressionKind,
    ) -> Result<Self, DvplError> {
        let original_size =
            u32::try_from(original_len).map_err(|_| DvplError::TooLarge(original_len))?;
        let compressed_size =
            u32::try_from(payload.len()).map_err(|_| DvplError::TooLarge(payload.len()))?;
        Ok(Self {
            original_size,
            compressed_size,
            crc32: crc32fast::hash(payload),
            kind,
        })
    }

    pub fn encode(&self) -> [u8; FOOTER_SIZE] {
        let mut out = [0u8; FOOTER_SIZE];
        out[0..4].copy_from_slice(&self.original_size.to_le_bytes());
        out[4..8].copy_from_slice(&self.compressed_size.to_le_bytes());
        out[8..12].copy_from_slice(&self.crc32.to_le_bytes());
        out[12..16].copy_from_slice(&self.kind.code().to_le_bytes());
        out[16..20].copy_from_slice(&DVPL_MAGIC);
        out
    }

    /// Split `data` into its payload and decoded footer.
    ///
    /// Only the framing is checked here; the checksum and kind-specific rules
    /// are left to [`DvplFooter::verify`].
    pub fn split(data: &[u8]) -> Result<(&[u8], Self), DvplError> {
        if data.len() < FOOTER_SIZE {
            return Err(DvplError::TooShort(data.len()));
        }
        let (payload, raw) = data.split_at(data.len() - FOOTER_SIZE);
        if raw[16..20] != DVPL_MAGIC {
            return Err(DvplError::BadMagic);
        }
        let field = |i: usize| u32::from_le_bytes([raw[i], raw[i + 1], raw[i + 2], raw[i + 3]]);
        let compressed_size = field(4);
        if compressed_size as usize != payload.len() {
            return Err(DvplError::PayloadSizeMismatch {
                declared: compressed_size,
                actual: payload.len(),
            });
        }
        let footer = Self {
            original_size: field(0),
            compressed_size,
            crc32: field(8),
            kind: CompressionKind::from_code(field(12))?,
        };
        Ok((payload, footer))
    }

    /// Check the payload against the checksum and the size rules of its kind.
    pub fn verify(&self, payload: &[u8]) -> Result<(), DvplError> {
        let actual = crc32fast::hash(payload);
        if actual != self.crc32 {
            return Err(DvplError::CrcMismatch {
                expected: self.crc32,
                actual,
            });
        }
        if self.kind == CompressionKind::Stored && self.original_size != self.compressed_size {
            return Err(DvplError::StoredSizeMismatch {
                stored: self.compressed_size,
                original: self.original_size,
            });
        }
        Ok(())
    }
}
