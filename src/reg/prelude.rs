//! The register prelude.
//!
//! ```
//! use drone_stm32l4x6_map::reg::prelude::*;
//! ```

#[doc(no_inline)]
pub use super::{
    RReg, RRRegField, RRRegFieldBit, RRRegFieldBits, Reg, RegField, RegFieldBit, RegFieldBits,
    RegVal, RoRRegField, RoReg, RwReg, RwRwRegFieldBit, RwRwRegFieldBits, WReg, WWRegField,
    WWRegFieldBit, WWRegFieldBits, WoReg, WoWRegField, WoWoRegFieldBit, WoWoRegFieldBits,
};
