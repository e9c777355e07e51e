use super::Bits;

/// Copy of a register value.
///
/// Offsets and widths are in bits. Every method panics in debug builds if the
/// addressed bits lie outside the raw integer.
pub trait RegVal
where
    Self: Sized + Copy,
{
    /// Raw integer type.
    type Bits: Bits;

    /// Creates a new value from the raw integer.
    fn from_bits(bits: Self::Bits) -> Self;

    /// Returns the raw integer.
    fn bits(&self) -> Self::Bits;

    /// Returns a mutable reference to the raw integer.
    fn bits_mut(&mut self) -> &mut Self::Bits;

    /// Reads the state of the bit at `offset`.
    #[inline]
    fn read_bit(&self, offset: usize) -> bool {
        self.bits() & (Self::Bits::ONE << offset) != Self::Bits::ZERO
    }

    /// Sets the bit at `offset`.
    #[inline]
    fn set_bit(&mut self, offset: usize) {
        *self.bits_mut() = self.bits() | (Self::Bits::ONE << offset);
    }

    /// Clears the bit at `offset`.
    #[inline]
    fn clear_bit(&mut self, offset: usize) {
        *self.bits_mut() = self.bits() & !(Self::Bits::ONE << offset);
    }

    /// Toggles the bit at `offset`.
    #[inline]
    fn toggle_bit(&mut self, offset: usize) {
        *self.bits_mut() = self.bits() ^ (Self::Bits::ONE << offset);
    }

    /// Reads `width` bits at `offset`.
    #[inline]
    fn read_bits(&self, offset: usize, width: usize) -> Self::Bits {
        (self.bits() >> offset) & Self::Bits::mask(width)
    }

    /// Writes `width` bits at `offset`.
    ///
    /// Bits of `bits` above `width` are discarded. Bits of the value outside
    /// the range are left untouched.
    #[inline]
    fn write_bits(&mut self, offset: usize, width: usize, bits: Self::Bits) {
        let mask = Self::Bits::mask(width);
        *self.bits_mut() = (self.bits() & !(mask << offset)) | ((bits & mask) << offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy)]
    struct Val(u32);

    impl RegVal for Val {
        type Bits = u32;

        fn from_bits(bits: u32) -> Self {
            Self(bits)
        }

        fn bits(&self) -> u32 {
            self.0
        }

        fn bits_mut(&mut self) -> &mut u32 {
            &mut self.0
        }
    }

    #[test]
    fn single_bits() {
        let mut val = Val::from_bits(0);
        val.set_bit(0);
        val.set_bit(31);
        assert_eq!(val.bits(), 0x8000_0001);
        assert!(val.read_bit(31));
        assert!(!val.read_bit(30));
        val.toggle_bit(31);
        val.toggle_bit(4);
        assert_eq!(val.bits(), 0x0000_0011);
        val.clear_bit(0);
        assert_eq!(val.bits(), 0x0000_0010);
    }

    #[test]
    fn write_then_read() {
        let mut val = Val::from_bits(0xFFFF_FFFF);
        val.write_bits(12, 3, 5);
        assert_eq!(val.read_bits(12, 3), 5);
        assert_eq!(val.bits(), 0xFFFF_DFFF);
    }

    #[test]
    fn truncates_oversized_values() {
        let mut val = Val::from_bits(0);
        val.write_bits(4, 2, 0b1111);
        assert_eq!(val.bits(), 0b11_0000);
        assert_eq!(val.read_bits(4, 2), 0b11);
    }

    #[test]
    fn full_width() {
        let mut val = Val::from_bits(0x1234_5678);
        assert_eq!(val.read_bits(0, 32), 0x1234_5678);
        val.write_bits(0, 32, 0xCAFE_BABE);
        assert_eq!(val.bits(), 0xCAFE_BABE);
    }

    #[test]
    fn top_bits() {
        let mut val = Val::from_bits(0x0FFF_FFFF);
        val.write_bits(28, 4, 0xA);
        assert_eq!(val.bits(), 0xAFFF_FFFF);
        assert_eq!(val.read_bits(28, 4), 0xA);
    }
}
