//! Peripheral layouts.
//!
//! A peripheral layout is a struct of register tokens generic over the base
//! address of the peripheral instance. Layouts are declared with the
//! [`periph!`](crate::periph!) macro, which also declares the instances as
//! `pub const NAME: usize` base addresses together with type aliases of the
//! layout:
//!
//! ```
//! use drone_stm32l4x6_map::{
//!     map::usart::{self, Usart2},
//!     periph::Periph,
//!     reg::prelude::*,
//! };
//!
//! assert_eq!(<Usart2 as Periph>::BASE_ADDRESS, 0x4000_4400);
//! assert_eq!(<usart::brr::Reg<{ usart::USART2 }> as Reg>::ADDRESS, 0x4000_440C);
//! assert_eq!(<Usart2 as Periph>::INFO.name, "USART");
//! ```

use crate::{
    reg::{LayoutError, RegInfo},
    token::Token,
};

/// Peripheral instance token.
pub trait Periph: Token {
    /// Base address of the instance.
    const BASE_ADDRESS: usize;

    /// Layout of the peripheral.
    const INFO: PeriphInfo;
}

/// Layout of a peripheral.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PeriphInfo {
    /// Name of the layout.
    pub name: &'static str,
    /// Registers in declaration order.
    pub regs: &'static [RegInfo],
}

impl PeriphInfo {
    /// Returns the register named `name`.
    pub fn reg(&self, name: &str) -> Option<&'static RegInfo> {
        self.regs.iter().find(|reg| reg.name == name)
    }

    /// Returns the number of bytes spanned by the registers, counted from the
    /// base address.
    pub fn span(&self) -> usize {
        self.regs.iter().map(|reg| reg.offset + reg.bytes()).max().unwrap_or(0)
    }

    /// Checks every register, that no two registers share bytes, and that
    /// alternate views match the registers they alias.
    pub fn validate(&self) -> Result<(), LayoutError> {
        for (i, reg) in self.regs.iter().enumerate() {
            reg.validate()?;
            if let Some(alias) = reg.alias {
                let matches = self
                    .reg(alias)
                    .map_or(false, |target| {
                        target.alias.is_none()
                            && target.offset == reg.offset
                            && target.size == reg.size
                    });
                if !matches {
                    return Err(LayoutError::AliasMismatch { periph: self.name, reg: reg.name, alias });
                }
                continue;
            }
            let overlap = self.regs[..i].iter().filter(|other| other.alias.is_none()).find(|other| {
                reg.offset < other.offset + other.bytes() && other.offset < reg.offset + reg.bytes()
            });
            if let Some(other) = overlap {
                return Err(LayoutError::RegOverlap {
                    periph: self.name,
                    reg: reg.name,
                    other: other.name,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reg::FieldInfo;

    const FIELDS: &[FieldInfo] = &[FieldInfo { name: "CEN", offset: 0, width: 1 }];

    const fn reg(name: &'static str, alias: Option<&'static str>, offset: usize, size: u8) -> RegInfo {
        RegInfo { name, alias, offset, size, reset: 0, fields: FIELDS }
    }

    #[test]
    fn valid_layout() {
        const REGS: &[RegInfo] = &[
            reg("CR1", None, 0x00, 32),
            reg("CCMR1_Output", None, 0x18, 32),
            reg("CCMR1_Input", Some("CCMR1_Output"), 0x18, 32),
            reg("LOW", None, 0x1C, 8),
            reg("HIGH", None, 0x1D, 8),
        ];
        let info = PeriphInfo { name: "TIM", regs: REGS };
        assert_eq!(info.validate(), Ok(()));
        assert_eq!(info.span(), 0x1E);
        assert_eq!(info.reg("LOW").map(|reg| reg.offset), Some(0x1C));
    }

    #[test]
    fn overlapping_registers() {
        const REGS: &[RegInfo] = &[reg("CR1", None, 0x00, 32), reg("CR2", None, 0x02, 16)];
        let info = PeriphInfo { name: "TIM", regs: REGS };
        assert_eq!(
            info.validate(),
            Err(LayoutError::RegOverlap { periph: "TIM", reg: "CR2", other: "CR1" })
        );
    }

    #[test]
    fn misplaced_alias() {
        const REGS: &[RegInfo] = &[
            reg("CCMR1_Output", None, 0x18, 32),
            reg("CCMR1_Input", Some("CCMR1_Output"), 0x1C, 32),
        ];
        let info = PeriphInfo { name: "TIM", regs: REGS };
        assert_eq!(
            info.validate(),
            Err(LayoutError::AliasMismatch {
                periph: "TIM",
                reg: "CCMR1_Input",
                alias: "CCMR1_Output",
            })
        );
    }
}
