//! Memory-mapped registers.
//!
//! A register is a zero-sized [token](crate::token) of a type implementing
//! [`Reg`]. It knows its absolute address, raw width, and reset value. Access
//! rights are expressed with marker traits:
//!
//! * [`RReg`] - the register can be loaded;
//! * [`WReg`] - the register can be stored;
//! * [`RoReg`] - the register can only be loaded;
//! * [`WoReg`] - the register can only be stored.
//!
//! Registers which are both readable and writable get [`RwReg::modify`] for
//! read-modify-write cycles.
//!
//! Bit fields are zero-sized tokens as well, implementing [`RegField`] and
//! marked with [`RRRegField`], [`WWRegField`], [`RoRRegField`], or
//! [`WoWRegField`]. Field values passed to setters are truncated to the field
//! width, and bits outside the field are never changed.
//!
//! ```no_run
//! use drone_stm32l4x6_map::{reg::prelude::*, token::Token};
//!
//! drone_stm32l4x6_map::reg! {
//!     /// ADC control register.
//!     pub mod ADC CR;
//!     0x5004_0008 0x20 0x2000_0000 RReg WReg;
//!     /// ADC enable control.
//!     ADEN { 0 1 RRRegField WWRegField }
//!     /// Deep-power-down enable.
//!     DEEPPWD { 29 1 RRRegField WWRegField }
//! }
//!
//! fn main() {
//!     let cr = unsafe { adc_cr::Reg::take() };
//!     cr.store(|r| r.clear_deeppwd());
//!     cr.aden.set_bit();
//!     assert_eq!(cr.load_bits(), 0x0000_0001);
//!     assert!(cr.load().aden());
//! }
//! ```

pub mod mmio;
pub mod prelude;

mod bits;
mod field;
mod info;
#[allow(clippy::module_inception)]
mod reg;
mod val;

pub use self::{bits::Bits, field::*, info::*, reg::*, val::RegVal};

mod compile_tests {
    //! ```compile_fail
    //! use drone_stm32l4x6_map::{reg::prelude::*, token::Token};
    //! drone_stm32l4x6_map::reg! {
    //!     pub mod TST RO_REG;
    //!     0xDEAD_BEEC 0x20 0 RReg RoReg;
    //!     TST_BIT { 0 1 RRRegField RoRRegField }
    //! }
    //! fn main() {
    //!     let reg = unsafe { tst_ro_reg::Reg::take() };
    //!     reg.store_bits(1);
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! use drone_stm32l4x6_map::{reg::prelude::*, token::Token};
    //! drone_stm32l4x6_map::reg! {
    //!     pub mod TST WO_REG;
    //!     0xDEAD_BEEC 0x20 0 WReg WoReg;
    //!     TST_BIT { 0 1 WWRegField WoWRegField }
    //! }
    //! fn main() {
    //!     let reg = unsafe { tst_wo_reg::Reg::take() };
    //!     reg.load();
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! use drone_stm32l4x6_map::{reg::prelude::*, token::Token};
    //! drone_stm32l4x6_map::reg! {
    //!     pub mod TST RO_REG;
    //!     0xDEAD_BEEC 0x20 0 RReg RoReg;
    //!     TST_BIT { 0 1 RRRegField RoRRegField }
    //! }
    //! fn main() {
    //!     let reg = unsafe { tst_ro_reg::Reg::take() };
    //!     reg.tst_bit.set_bit();
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! use drone_stm32l4x6_map::reg::prelude::*;
    //! drone_stm32l4x6_map::reg! {
    //!     pub mod TST RW_REG;
    //!     0xDEAD_BEEC 0x20 0 RReg WReg;
    //!     TST_BIT { 0 1 RRRegField WWRegField }
    //! }
    //! fn assert_clone<T: Clone>() {}
    //! fn main() {
    //!     assert_clone::<tst_rw_reg::Reg>();
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! use drone_stm32l4x6_map::reg::prelude::*;
    //! drone_stm32l4x6_map::reg! {
    //!     pub mod TST RW_REG;
    //!     0xDEAD_BEEC 0x20 0 RReg WReg;
    //!     TST_BIT { 0 1 RRRegField WWRegField }
    //! }
    //! fn assert_copy<T: Copy>() {}
    //! fn main() {
    //!     assert_copy::<tst_rw_reg::TstBit>();
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! drone_stm32l4x6_map::reg! {
    //!     pub mod TST WIDE_REG;
    //!     0xDEAD_BEEC 0x40 0 RReg WReg;
    //! }
    //! fn main() {}
    //! ```
    //!
    //! ```compile_fail
    //! drone_stm32l4x6_map::reg! {
    //!     pub mod TST RO_REG;
    //!     0xDEAD_BEEC 0x20 0 RReg RoReg;
    //!     TST_BIT { 0 1 RRRegField WWRegField }
    //! }
    //! fn main() {}
    //! ```
    //!
    //! ```
    //! use drone_stm32l4x6_map::reg::prelude::*;
    //! drone_stm32l4x6_map::reg! {
    //!     pub mod TST RW_REG;
    //!     0xDEAD_BEEC 0x20 0 RReg WReg;
    //!     TST_BIT { 0 1 RRRegField WWRegField }
    //! }
    //! fn assert_rw_reg<T: RwReg>() {}
    //! fn main() {
    //!     assert_rw_reg::<tst_rw_reg::Reg>();
    //! }
    //! ```
}
