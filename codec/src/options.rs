//! Codec options.

use wordstream::SWAP_ON_READ;

/// Options controlling how a city file is encoded.
///
/// The default reproduces the legacy writer exactly: sections are dumped in
/// host order without swapping, and the three funding fields are reset to
/// 100% on every save. A file written this way does not reload to the same
/// values; use [`CodecOptions::symmetric`] when it must.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecOptions {
    /// Byte-swap every word on write, mirroring the swap applied on read.
    pub swap_on_write: bool,

    /// Store 100% in the police, fire and road funding fields regardless of
    /// the header's values.
    pub force_full_funding: bool,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self::reference()
    }
}

impl CodecOptions {
    /// Options matching the legacy writer.
    #[must_use]
    pub const fn reference() -> Self {
        Self {
            swap_on_write: false,
            force_full_funding: true,
        }
    }

    /// Options whose output reloads to the same sections it was written
    /// from.
    #[must_use]
    pub const fn symmetric() -> Self {
        Self {
            swap_on_write: SWAP_ON_READ,
            force_full_funding: true,
        }
    }

    /// Keeps the header's funding fractions instead of resetting them.
    #[must_use]
    pub const fn with_funding_preserved(mut self) -> Self {
        self.force_full_funding = false;
        self
    }
}
