//! Byte-order normalization for 16-bit and 32-bit words.

/// Byte order of a multi-byte value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endian {
    /// Most significant byte first.
    Big,
    /// Least significant byte first.
    Little,
}

impl Endian {
    /// Returns the byte order of the machine the code was compiled for.
    #[must_use]
    pub const fn native() -> Self {
        if cfg!(target_endian = "big") {
            Self::Big
        } else {
            Self::Little
        }
    }
}

/// Byte order of every 16-bit element stored in a city file.
pub const DISK_ORDER: Endian = Endian::Big;

/// Host byte order the in-memory buffers are laid out for.
///
/// Raw bytes are always assembled into words in this order, whatever the
/// target actually is, so decoding never depends on the build machine.
pub const ASSUMED_HOST_ORDER: Endian = Endian::Little;

/// Whether words assembled in [`ASSUMED_HOST_ORDER`] must be byte-swapped
/// to recover the values stored on disk.
pub const SWAP_ON_READ: bool = needs_swap(DISK_ORDER, ASSUMED_HOST_ORDER);

/// Returns `true` if data stored in `stored` order must be swapped to be
/// read in `host` order.
#[must_use]
pub const fn needs_swap(stored: Endian, host: Endian) -> bool {
    !matches!(
        (stored, host),
        (Endian::Big, Endian::Big) | (Endian::Little, Endian::Little)
    )
}

/// A 16-bit element that can be moved through the word stream.
pub trait Word: Copy + Default {
    /// Reinterprets raw bits as this word type.
    fn from_bits(bits: u16) -> Self;
    /// Returns the raw bits of this word.
    fn to_bits(self) -> u16;
}

impl Word for u16 {
    fn from_bits(bits: u16) -> Self {
        bits
    }

    fn to_bits(self) -> u16 {
        self
    }
}

impl Word for i16 {
    #[allow(clippy::cast_possible_wrap)]
    fn from_bits(bits: u16) -> Self {
        bits as Self
    }

    #[allow(clippy::cast_sign_loss)]
    fn to_bits(self) -> u16 {
        self as u16
    }
}

/// Exchanges the two bytes of every word in `buf`.
pub fn swap_shorts<W: Word>(buf: &mut [W]) {
    for word in buf {
        *word = W::from_bits(word.to_bits().swap_bytes());
    }
}

/// Exchanges the upper and lower 16-bit halves of `value`.
#[must_use]
pub const fn half_swap_long(value: i32) -> i32 {
    value.rotate_left(16)
}

/// Exchanges the upper and lower 16-bit halves of every value in `buf`.
pub fn half_swap_longs(buf: &mut [i32]) {
    for value in buf {
        *value = half_swap_long(*value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disk_and_host_orders_differ() {
        assert_eq!(DISK_ORDER, Endian::Big);
        assert_eq!(ASSUMED_HOST_ORDER, Endian::Little);
        assert!(SWAP_ON_READ);
    }

    #[test]
    fn needs_swap_matrix() {
        assert!(!needs_swap(Endian::Big, Endian::Big));
        assert!(!needs_swap(Endian::Little, Endian::Little));
        assert!(needs_swap(Endian::Big, Endian::Little));
        assert!(needs_swap(Endian::Little, Endian::Big));
    }

    #[test]
    fn native_matches_target() {
        let expected = if 1u16.to_ne_bytes()[0] == 1 {
            Endian::Little
        } else {
            Endian::Big
        };
        assert_eq!(Endian::native(), expected);
    }

    #[test]
    fn swap_shorts_unsigned() {
        let mut buf = [0x1234u16, 0xFF00, 0x0001];
        swap_shorts(&mut buf);
        assert_eq!(buf, [0x3412, 0x00FF, 0x0100]);
    }

    #[test]
    fn swap_shorts_signed() {
        let mut buf = [-1i16, 0x0080, 0x0100];
        swap_shorts(&mut buf);
        // 0x0080 becomes 0x8000, which is i16::MIN
        assert_eq!(buf, [-1, i16::MIN, 1]);
    }

    #[test]
    fn swap_shorts_empty() {
        let mut buf: [u16; 0] = [];
        swap_shorts(&mut buf);
        assert!(buf.is_empty());
    }

    #[test]
    fn half_swap_long_values() {
        assert_eq!(half_swap_long(0x0001_0000), 0x0000_0001);
        assert_eq!(half_swap_long(0x1234_5678), 0x5678_1234);
        assert_eq!(half_swap_long(-1), -1);
        // Low half with the sign bit set moves into the high half.
        assert_eq!(half_swap_long(0x0000_8000), i32::MIN);
    }

    #[test]
    fn half_swap_longs_in_place() {
        let mut buf = [0x0001_0002, 0x7FFF_0000];
        half_swap_longs(&mut buf);
        assert_eq!(buf, [0x0002_0001, 0x0000_7FFF]);
    }

    #[test]
    fn swap_twice_restores() {
        let original = [0xBEEFu16, 0xCAFE, 0x0000, 0xFFFF];
        let mut buf = original;
        swap_shorts(&mut buf);
        swap_shorts(&mut buf);
        assert_eq!(buf, original);

        let original = [i32::MIN, 0, 1, 0x0BAD_F00D];
        let mut longs = original;
        half_swap_longs(&mut longs);
        half_swap_longs(&mut longs);
        assert_eq!(longs, original);
    }
}
