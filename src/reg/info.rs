use core::fmt;

/// Layout of a bit field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldInfo {
    /// Vendor name of the field.
    pub name: &'static str,
    /// Offset of the field in bits.
    pub offset: u8,
    /// Width of the field in bits.
    pub width: u8,
}

/// Layout of a register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegInfo {
    /// Vendor name of the register.
    pub name: &'static str,
    /// Name of the register this one is an alternate view of.
    pub alias: Option<&'static str>,
    /// Offset from the peripheral base address, or the absolute address for
    /// registers outside of a peripheral layout.
    pub offset: usize,
    /// Width of the register in bits.
    pub size: u8,
    /// Reset value of the register, as declared for most instances.
    pub reset: u32,
    /// Bit fields of the register.
    pub fields: &'static [FieldInfo],
}

/// Inconsistency found in layout metadata.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// A field extends beyond the register width.
    FieldOutOfRange {
        /// Register name.
        reg: &'static str,
        /// Field name.
        field: &'static str,
    },
    /// Two fields of one register share bits.
    FieldOverlap {
        /// Register name.
        reg: &'static str,
        /// First field name.
        field: &'static str,
        /// Second field name.
        other: &'static str,
    },
    /// Two registers of one peripheral share bytes.
    RegOverlap {
        /// Peripheral name.
        periph: &'static str,
        /// First register name.
        reg: &'static str,
        /// Second register name.
        other: &'static str,
    },
    /// An alternate view doesn't match the register it aliases.
    AliasMismatch {
        /// Peripheral name.
        periph: &'static str,
        /// Alternate view name.
        reg: &'static str,
        /// Aliased register name.
        alias: &'static str,
    },
}

impl FieldInfo {
    /// Returns the mask of the field within a 32-bit register value.
    ///
    /// Bits past bit 31 are dropped, so a field lying entirely above the
    /// register yields an empty mask.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn mask(&self) -> u32 {
        let ones = match 1_u64.checked_shl(self.width as u32) {
            Some(bit) => bit - 1,
            None => u64::MAX,
        };
        let mask = match ones.checked_shl(self.offset as u32) {
            Some(mask) => mask,
            None => 0,
        };
        (mask & 0xFFFF_FFFF) as u32
    }
}

impl RegInfo {
    /// Returns the field named `name`.
    pub fn field(&self, name: &str) -> Option<&'static FieldInfo> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Returns the number of bytes the register occupies.
    pub const fn bytes(&self) -> usize {
        self.size as usize / 8
    }

    /// Checks that every field fits the register width and that no two
    /// fields share bits.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let mut taken = 0_u64;
        for field in self.fields {
            if u16::from(field.offset) + u16::from(field.width) > u16::from(self.size) {
                return Err(LayoutError::FieldOutOfRange { reg: self.name, field: field.name });
            }
            let mask = u64::from(field.mask());
            if taken & mask != 0 {
                let other = self
                    .fields
                    .iter()
                    .find(|other| u64::from(other.mask()) & mask != 0)
                    .map_or("", |other| other.name);
                return Err(LayoutError::FieldOverlap { reg: self.name, field: field.name, other });
            }
            taken |= mask;
        }
        Ok(())
    }
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldOutOfRange { reg, field } => {
                write!(f, "field {reg}.{field} exceeds the register width")
            }
            Self::FieldOverlap { reg, field, other } => {
                write!(f, "field {reg}.{field} overlaps {reg}.{other}")
            }
            Self::RegOverlap { periph, reg, other } => {
                write!(f, "register {periph}.{reg} overlaps {periph}.{other}")
            }
            Self::AliasMismatch { periph, reg, alias } => {
                write!(f, "register {periph}.{reg} doesn't match the layout of {periph}.{alias}")
            }
        }
    }
}

#[cfg(any(test, feature = "host"))]
impl std::error::Error for LayoutError {}

#[cfg(test)]
mod tests {
    use super::*;

    const MODE0: FieldInfo = FieldInfo { name: "MODE0", offset: 0, width: 2 };
    const MODE1: FieldInfo = FieldInfo { name: "MODE1", offset: 2, width: 2 };

    fn reg(fields: &'static [FieldInfo]) -> RegInfo {
        RegInfo { name: "MODER", alias: None, offset: 0, size: 32, reset: 0, fields }
    }

    #[test]
    fn masks() {
        assert_eq!(MODE1.mask(), 0b1100);
        assert_eq!(FieldInfo { name: "DR", offset: 0, width: 32 }.mask(), 0xFFFF_FFFF);
        assert_eq!(FieldInfo { name: "B31", offset: 31, width: 1 }.mask(), 0x8000_0000);
    }

    #[test]
    fn oversized_fields() {
        assert_eq!(FieldInfo { name: "W64", offset: 0, width: 64 }.mask(), 0xFFFF_FFFF);
        assert_eq!(FieldInfo { name: "W255", offset: 4, width: 255 }.mask(), 0xFFFF_FFF0);
        assert_eq!(FieldInfo { name: "FAR", offset: 200, width: 8 }.mask(), 0);
        let wide = RegInfo { size: 255, ..reg(&[]) };
        const HUGE: FieldInfo = FieldInfo { name: "HUGE", offset: 0, width: 100 };
        assert!(RegInfo { fields: &[HUGE, MODE0], ..wide }.validate().is_err());
    }

    #[test]
    fn valid_register() {
        assert_eq!(reg(&[MODE0, MODE1]).validate(), Ok(()));
        assert_eq!(reg(&[MODE0, MODE1]).field("MODE1"), Some(&MODE1));
    }

    #[test]
    fn overlapping_fields() {
        const WIDE: FieldInfo = FieldInfo { name: "WIDE", offset: 1, width: 2 };
        assert_eq!(
            reg(&[MODE0, WIDE]).validate(),
            Err(LayoutError::FieldOverlap { reg: "MODER", field: "WIDE", other: "MODE0" })
        );
    }

    #[test]
    fn field_out_of_range() {
        const HIGH: FieldInfo = FieldInfo { name: "HIGH", offset: 30, width: 4 };
        let err = reg(&[HIGH]).validate().unwrap_err();
        assert_eq!(err, LayoutError::FieldOutOfRange { reg: "MODER", field: "HIGH" });
        assert_eq!(err.to_string(), "field MODER.HIGH exceeds the register width");
    }
}
