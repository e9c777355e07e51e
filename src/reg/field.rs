use super::{mmio, Bits, Reg, RegVal};
use crate::token::Token;

/// Value type of the register owning the field `F`.
pub type FieldVal<F> = <<F as RegField>::Reg as Reg>::Val;

/// Raw integer of the register owning the field `F`.
pub type FieldBits<F> = <FieldVal<F> as RegVal>::Bits;

/// Bit field token.
pub trait RegField: Token {
    /// Owning register.
    type Reg: Reg;

    /// Offset of the field in bits.
    const OFFSET: usize;

    /// Width of the field in bits.
    const WIDTH: usize;

    /// Returns the reset value of the owning register.
    #[inline]
    fn reset_val(&self) -> FieldVal<Self> {
        <FieldVal<Self> as RegVal>::from_bits(<Self::Reg as Reg>::RESET)
    }
}

/// Single-bit field.
pub trait RegFieldBit: RegField {}

/// Multiple-bit field.
pub trait RegFieldBits: RegField {}

/// Field of a readable register that can be read.
pub trait RRRegField: RegField {
    /// Loads the value of the owning register.
    #[inline]
    fn load_val(&self) -> FieldVal<Self> {
        <FieldVal<Self> as RegVal>::from_bits(unsafe { mmio::load(<Self::Reg as Reg>::ADDRESS) })
    }
}

/// Field of a writable register that can be written.
pub trait WWRegField: RegField {
    /// Stores `val` to the owning register.
    #[inline]
    fn store_val(&self, val: FieldVal<Self>) {
        unsafe { mmio::store(<Self::Reg as Reg>::ADDRESS, RegVal::bits(&val)) };
    }
}

/// Field of a read-only register, or a read-only field of a read-write
/// register.
pub trait RoRRegField: RRRegField {}

/// Field of a write-only register, or a write-only field of a read-write
/// register.
pub trait WoWRegField: WWRegField {}

/// Single-bit field that can be read.
pub trait RRRegFieldBit: RegFieldBit + RRRegField {
    /// Reads the state of the bit from `val`.
    #[inline]
    fn read(&self, val: &FieldVal<Self>) -> bool {
        RegVal::read_bit(val, Self::OFFSET)
    }

    /// Loads the owning register and reads the state of the bit.
    #[inline]
    fn read_bit(&self) -> bool {
        self.read(&self.load_val())
    }
}

/// Single-bit field that can be written.
pub trait WWRegFieldBit: RegFieldBit + WWRegField {
    /// Sets the bit in `val`.
    #[inline]
    fn set(&self, val: &mut FieldVal<Self>) {
        RegVal::set_bit(val, Self::OFFSET);
    }

    /// Clears the bit in `val`.
    #[inline]
    fn clear(&self, val: &mut FieldVal<Self>) {
        RegVal::clear_bit(val, Self::OFFSET);
    }

    /// Toggles the bit in `val`.
    #[inline]
    fn toggle(&self, val: &mut FieldVal<Self>) {
        RegVal::toggle_bit(val, Self::OFFSET);
    }
}

/// Single-bit field of a read-write register.
pub trait RwRwRegFieldBit: RRRegFieldBit + WWRegFieldBit {
    /// Sets the bit with a read-modify-write cycle over the owning register.
    #[inline]
    fn set_bit(&self) {
        let mut val = self.load_val();
        self.set(&mut val);
        self.store_val(val);
    }

    /// Clears the bit with a read-modify-write cycle over the owning register.
    #[inline]
    fn clear_bit(&self) {
        let mut val = self.load_val();
        self.clear(&mut val);
        self.store_val(val);
    }

    /// Toggles the bit with a read-modify-write cycle over the owning
    /// register.
    #[inline]
    fn toggle_bit(&self) {
        let mut val = self.load_val();
        self.toggle(&mut val);
        self.store_val(val);
    }
}

/// Single-bit write-only field.
pub trait WoWoRegFieldBit: WWRegFieldBit + WoWRegField {
    /// Stores the reset value of the owning register with the bit set.
    #[inline]
    fn store_bit(&self) {
        let mut val = self.reset_val();
        self.set(&mut val);
        self.store_val(val);
    }
}

/// Multiple-bit field that can be read.
pub trait RRRegFieldBits: RegFieldBits + RRRegField {
    /// Reads the bits from `val`.
    #[inline]
    fn read(&self, val: &FieldVal<Self>) -> FieldBits<Self> {
        RegVal::read_bits(val, Self::OFFSET, Self::WIDTH)
    }

    /// Loads the owning register and reads the bits.
    #[inline]
    fn read_bits(&self) -> FieldBits<Self> {
        self.read(&self.load_val())
    }
}

/// Multiple-bit field that can be written.
pub trait WWRegFieldBits: RegFieldBits + WWRegField {
    /// Writes `bits` to `val`, discarding the bits above the field width.
    #[inline]
    fn write(&self, val: &mut FieldVal<Self>, bits: FieldBits<Self>) {
        RegVal::write_bits(val, Self::OFFSET, Self::WIDTH, bits);
    }

    /// Returns the largest value the field can hold.
    #[inline]
    fn max_bits(&self) -> FieldBits<Self> {
        <FieldBits<Self> as Bits>::mask(Self::WIDTH)
    }
}

/// Multiple-bit field of a read-write register.
pub trait RwRwRegFieldBits: RRRegFieldBits + WWRegFieldBits {
    /// Writes `bits` with a read-modify-write cycle over the owning register,
    /// discarding the bits above the field width.
    #[inline]
    fn write_bits(&self, bits: FieldBits<Self>) {
        let mut val = self.load_val();
        self.write(&mut val, bits);
        self.store_val(val);
    }
}

/// Multiple-bit write-only field.
pub trait WoWoRegFieldBits: WWRegFieldBits + WoWRegField {
    /// Stores the reset value of the owning register with the field replaced
    /// by `bits`, discarding the bits above the field width.
    #[inline]
    fn store_bits(&self, bits: FieldBits<Self>) {
        let mut val = self.reset_val();
        self.write(&mut val, bits);
        self.store_val(val);
    }
}

impl<T: RegFieldBit + RRRegField> RRRegFieldBit for T {}
impl<T: RegFieldBit + WWRegField> WWRegFieldBit for T {}
impl<T: RRRegFieldBit + WWRegFieldBit> RwRwRegFieldBit for T {}
impl<T: WWRegFieldBit + WoWRegField> WoWoRegFieldBit for T {}
impl<T: RegFieldBits + RRRegField> RRRegFieldBits for T {}
impl<T: RegFieldBits + WWRegField> WWRegFieldBits for T {}
impl<T: RRRegFieldBits + WWRegFieldBits> RwRwRegFieldBits for T {}
impl<T: WWRegFieldBits + WoWRegField> WoWoRegFieldBits for T {}
