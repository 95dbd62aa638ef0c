//! Byte transforms applied to each file's contents.
//!
//! The traversal only sees the [`Codec`] trait. [`DvplCodec`] is the real
//! container implementation used by the binary; tests plug in their own.

use log::trace;

use crate::footer::{CompressionKind, DvplFooter, FOOTER_SIZE};
use crate::DvplError;

/// Stateless compress/decompress pair.
///
/// Implementations must round trip: for any `data` and any `allow`,
/// `decompress(&compress(data, allow)?)? == data`.
pub trait Codec {
    /// Wrap `data`. When `allow_compression` is false the payload must be
    /// stored as-is.
    fn compress(&self, data: &[u8], allow_compression: bool) -> Result<Vec<u8>, DvplError>;

    /// Unwrap data produced by [`Codec::compress`].
    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>, DvplError>;
}

impl<C: Codec + ?Sized> Codec for &C {
    fn compress(&self, data: &[u8], allow_compression: bool) -> Result<Vec<u8>, DvplError> {
        (**self).compress(data, allow_compression)
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>, DvplError> {
        (**self).decompress(data)
    }
}

/// DVPL container: payload followed by a 20-byte footer, LZ4 block compressed
/// when that actually saves space.
#[derive(Debug, Clone, Copy, Default)]
pub struct DvplCodec;

impl Codec for DvplCodec {
    fn compress(&self, data: &[u8], allow_compression: bool) -> Result<Vec<u8>, DvplError> {
        let packed = if allow_compression && !data.is_empty() {
            let block = lz4_flex::block::compress(data);
            (block.len() < data.len()).then_some(block)
        } else {
            None
        };
        let (payload, kind) = match &packed {
            Some(block) => (block.as_slice(), CompressionKind::Lz4Hc),
            None => (data, CompressionKind::Stored),
        };
        let footer = DvplFooter::for_payload(payload, data.len(), kind)?;
        trace!(
            "dvpl compress: {} -> {} bytes ({:?})",
            data.len(),
            payload.len(),
            kind
        );

        let mut out = Vec::with_capacity(payload.len() + FOOTER_SIZE);
        out.extend_from_slice(payload);
        out.extend_from_slice(&footer.encode());
        Ok(out)
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>, DvplError> {
        let (payload, footer) = DvplFooter::split(data)?;
        footer.verify(payload)?;
        trace!(
            "dvpl decompress: {} -> {} bytes ({:?})",
            payload.len(),
            footer.original_size,
            footer.kind
        );
        match footer.kind {
            CompressionKind::Stored => Ok(payload.to_vec()),
            CompressionKind::Lz4 | CompressionKind::Lz4Hc => {
                let expected = footer.original_size as usize;
                let out = lz4_flex::block::decompress(payload, expected)
                    .map_err(|e| DvplError::Lz4(e.to_string()))?;
                if out.len() != expected {
                    return Err(DvplError::Lz4(format!(
                        "expected {expected} bytes, got {}",
                        out.len()
                    )));
                }
                Ok(out)
            }
        }
    }
}
