use super::PORTS_COUNT;
use crate::{
    map::core::{itm_stim0, itm_tcr, itm_ter},
    reg::{mmio, RegVal},
};
use core::{fmt, fmt::Write};

/// Logger port handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Port(u8);

impl Port {
    /// Creates a new port handle.
    ///
    /// # Panics
    ///
    /// If `port` is more than or equal to [`PORTS_COUNT`].
    #[inline]
    pub fn new(port: u8) -> Self {
        assert!(port < PORTS_COUNT);
        Self(port)
    }

    /// Returns the port number.
    #[inline]
    pub fn number(self) -> u8 {
        self.0
    }

    /// Returns `true` if the ITM is enabled and the debug probe is listening
    /// to the port.
    #[inline]
    pub fn is_enabled(self) -> bool {
        #[cfg(any(test, feature = "host"))]
        return false;
        let Self(port) = self;
        let tcr = itm_tcr::Val::from_bits(unsafe { mmio::load(itm_tcr::ADDRESS) });
        let ter = itm_ter::Val::from_bits(unsafe { mmio::load(itm_ter::ADDRESS) });
        tcr.itmena() && ter.read_bit(usize::from(port))
    }

    /// Writes a sequence of bytes to the port.
    ///
    /// Each byte is written after the stimulus port reports that its FIFO
    /// has room.
    #[inline]
    pub fn write_bytes(self, bytes: &[u8]) -> Self {
        #[cfg(any(test, feature = "host"))]
        return self;
        for &byte in bytes {
            self.write_u8(byte);
        }
        self
    }

    fn write_u8(self, byte: u8) {
        let address = self.stim_address();
        while !itm_stim0::Val::from_bits(unsafe { mmio::load(address) }).fifoready() {}
        unsafe { mmio::store(address, byte) };
    }

    fn stim_address(self) -> usize {
        itm_stim0::ADDRESS + usize::from(self.0) * 4
    }
}

impl Write for Port {
    #[inline]
    fn write_str(&mut self, string: &str) -> fmt::Result {
        self.write_bytes(string.as_bytes());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stimulus_addresses() {
        assert_eq!(Port::new(0).stim_address(), 0xE000_0000);
        assert_eq!(Port::new(1).stim_address(), 0xE000_0004);
        assert_eq!(Port::new(31).stim_address(), 0xE000_007C);
    }

    #[test]
    #[should_panic]
    fn port_out_of_range() {
        Port::new(PORTS_COUNT);
    }

    #[test]
    fn disabled_without_probe() {
        mmio::host::wipe();
        assert!(!Port::new(0).is_enabled());
    }
}
