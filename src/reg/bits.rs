use core::{
    fmt::Debug,
    ops::{BitAnd, BitOr, BitXor, Not, Shl, Shr, Sub},
};

/// Raw integer of a register value.
pub trait Bits
where
    Self: Sized
        + Debug
        + Copy
        + Eq
        + Not<Output = Self>
        + Sub<Output = Self>
        + BitOr<Output = Self>
        + BitXor<Output = Self>
        + BitAnd<Output = Self>
        + Shl<usize, Output = Self>
        + Shr<usize, Output = Self>,
{
    /// Width of the type in bits.
    const WIDTH: usize;

    /// All bits cleared.
    const ZERO: Self;

    /// Only the least significant bit set.
    const ONE: Self;

    /// All bits set.
    const MAX: Self;

    /// Converts from `u32`, discarding the bits that don't fit.
    fn from_u32(bits: u32) -> Self;

    /// Converts into `u32`.
    fn into_u32(self) -> u32;

    /// Returns a mask of `width` least significant bits.
    #[inline]
    fn mask(width: usize) -> Self {
        if width >= Self::WIDTH { Self::MAX } else { (Self::ONE << width) - Self::ONE }
    }
}

macro_rules! bits {
    ($type:ty) => {
        impl Bits for $type {
            const WIDTH: usize = <$type>::BITS as usize;
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const MAX: Self = <$type>::MAX;

            #[allow(clippy::cast_possible_truncation)]
            #[inline]
            fn from_u32(bits: u32) -> Self {
                bits as $type
            }

            #[inline]
            fn into_u32(self) -> u32 {
                u32::from(self)
            }
        }
    };
}

bits!(u8);
bits!(u16);
bits!(u32);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks() {
        assert_eq!(u8::mask(0), 0);
        assert_eq!(u8::mask(3), 0b111);
        assert_eq!(u16::mask(16), 0xFFFF);
        assert_eq!(u32::mask(31), 0x7FFF_FFFF);
        assert_eq!(u32::mask(32), 0xFFFF_FFFF);
    }

    #[test]
    fn conversions() {
        assert_eq!(u8::from_u32(0x1234), 0x34);
        assert_eq!(u16::from_u32(0xDEAD_BEEF), 0xBEEF);
        assert_eq!(0xA5_u8.into_u32(), 0xA5);
    }
}
