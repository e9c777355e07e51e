use super::{mmio, RegVal};
use crate::token::Token;

/// Raw integer of the register `R`.
pub type RegBits<R> = <<R as Reg>::Val as RegVal>::Bits;

/// Memory-mapped register token.
pub trait Reg: Token {
    /// Value type of the register.
    type Val: RegVal;

    /// Absolute memory address of the register.
    const ADDRESS: usize;

    /// Reset value of the register.
    const RESET: <Self::Val as RegVal>::Bits;

    /// Returns the reset value of the register.
    #[inline]
    fn reset_val(&self) -> Self::Val {
        Self::Val::from_bits(Self::RESET)
    }
}

/// Register that can be loaded.
pub trait RReg: Reg {
    /// Loads the value from the register memory.
    #[inline]
    fn load(&self) -> Self::Val {
        Self::Val::from_bits(self.load_bits())
    }

    /// Loads the raw integer from the register memory.
    #[inline]
    fn load_bits(&self) -> RegBits<Self> {
        unsafe { mmio::load(Self::ADDRESS) }
    }

    /// Returns a raw pointer to the register memory.
    #[inline]
    fn as_ptr(&self) -> *const RegBits<Self> {
        Self::ADDRESS as *const RegBits<Self>
    }
}

/// Register that can be stored.
pub trait WReg: Reg {
    /// Passes the reset value to the closure `f`, then stores the result to
    /// the register memory.
    #[inline]
    fn store<F>(&self, f: F)
    where
        F: FnOnce(&mut Self::Val) -> &mut Self::Val,
    {
        let mut val = self.reset_val();
        f(&mut val);
        self.store_val(val);
    }

    /// Stores `val` to the register memory.
    #[inline]
    fn store_val(&self, val: Self::Val) {
        self.store_bits(RegVal::bits(&val));
    }

    /// Stores the raw integer `bits` to the register memory.
    #[inline]
    fn store_bits(&self, bits: RegBits<Self>) {
        unsafe { mmio::store(Self::ADDRESS, bits) };
    }

    /// Returns a mutable raw pointer to the register memory.
    #[inline]
    fn as_mut_ptr(&self) -> *mut RegBits<Self> {
        Self::ADDRESS as *mut RegBits<Self>
    }
}

/// Register that can only be loaded.
pub trait RoReg: RReg {}

/// Register that can only be stored.
pub trait WoReg: WReg {}

/// Register that can be both loaded and stored.
pub trait RwReg: RReg + WReg {
    /// Loads the value from the register memory, passes it to the closure
    /// `f`, then stores the result back.
    ///
    /// The cycle is not atomic. If the register is shared with an interrupt
    /// handler, the caller must prevent the handler from running in between.
    #[inline]
    fn modify<F>(&self, f: F)
    where
        F: FnOnce(&mut Self::Val) -> &mut Self::Val,
    {
        let mut val = self.load();
        f(&mut val);
        self.store_val(val);
    }
}

impl<R: RReg + WReg> RwReg for R {}
