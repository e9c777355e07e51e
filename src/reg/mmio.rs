//! Volatile access to the register memory.
//!
//! On the target every access is a single `read_volatile` / `write_volatile`
//! of the register width. Under the `host` feature accesses go to a simulated
//! memory instead, see [`host`].

use super::Bits;

/// Loads a raw integer from `address`.
///
/// # Safety
///
/// `address` must be a valid and properly aligned register address.
#[inline]
pub unsafe fn load<T: Bits>(address: usize) -> T {
    #[cfg(any(test, feature = "host"))]
    return host::peek(address);
    #[cfg(not(any(test, feature = "host")))]
    return unsafe { core::ptr::read_volatile(address as *const T) };
}

/// Stores the raw integer `bits` to `address`.
///
/// # Safety
///
/// `address` must be a valid and properly aligned register address.
#[inline]
pub unsafe fn store<T: Bits>(address: usize, bits: T) {
    #[cfg(any(test, feature = "host"))]
    host::poke(address, bits);
    #[cfg(not(any(test, feature = "host")))]
    unsafe { core::ptr::write_volatile(address as *mut T, bits) };
}

/// Simulated register memory.
///
/// The memory is byte-addressed, little-endian, and zero-initialized. Each
/// thread owns a separate copy, so tests running in parallel don't interfere.
#[cfg(any(test, feature = "host"))]
pub mod host {
    use super::Bits;
    use std::{cell::RefCell, collections::BTreeMap};

    thread_local! {
        static MEMORY: RefCell<BTreeMap<usize, u8>> = RefCell::new(BTreeMap::new());
    }

    /// Reads a raw integer at `address` from the simulated memory.
    pub fn peek<T: Bits>(address: usize) -> T {
        MEMORY.with(|memory| {
            let memory = memory.borrow();
            let bits = (0..T::WIDTH / 8).fold(0_u32, |bits, i| {
                let byte = memory.get(&(address + i)).copied().unwrap_or(0);
                bits | u32::from(byte) << (i * 8)
            });
            T::from_u32(bits)
        })
    }

    /// Writes the raw integer `bits` at `address` to the simulated memory.
    #[allow(clippy::cast_possible_truncation)]
    pub fn poke<T: Bits>(address: usize, bits: T) {
        let bits = bits.into_u32();
        MEMORY.with(|memory| {
            let mut memory = memory.borrow_mut();
            for i in 0..T::WIDTH / 8 {
                memory.insert(address + i, (bits >> (i * 8)) as u8);
            }
        });
    }

    /// Clears the simulated memory of the current thread.
    pub fn wipe() {
        MEMORY.with(|memory| memory.borrow_mut().clear());
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn little_endian() {
            wipe();
            poke::<u32>(0x100, 0x1122_3344);
            assert_eq!(peek::<u8>(0x100), 0x44);
            assert_eq!(peek::<u16>(0x102), 0x1122);
            poke::<u8>(0x101, 0xFF);
            assert_eq!(peek::<u32>(0x100), 0x1122_FF44);
        }

        #[test]
        fn zero_initialized() {
            wipe();
            assert_eq!(peek::<u32>(0x4800_0000), 0);
            poke::<u16>(0x4800_0000, 0xABCD);
            wipe();
            assert_eq!(peek::<u16>(0x4800_0000), 0);
        }
    }
}
