//! Debug-probe logging over the Instrumentation Trace Macrocell.
//!
//! The ITM provides 32 stimulus ports. A debug probe enables the ports it
//! listens to; writes to disabled ports, or writes made while no probe is
//! attached, are skipped. Under the `host` feature every port is disabled.
//!
//! ```no_run
//! use drone_stm32l4x6_map::{eprintln, log, log::Port, println};
//!
//! println!("hello there!");
//! eprintln!("{} errors", 0);
//! if Port::new(11).is_enabled() {
//!     log::write_str(11, "raw port output\n");
//! }
//! ```

#![cfg_attr(any(test, feature = "host"), allow(unreachable_code, unused_variables))]

mod macros;
mod port;

pub use self::port::Port;

use core::{fmt, fmt::Write};

/// Number of ITM stimulus ports.
pub const PORTS_COUNT: u8 = 32;

/// Port number of the standard output stream.
pub const STDOUT_PORT: u8 = 0;

/// Port number of the standard error stream.
pub const STDERR_PORT: u8 = 1;

/// Returns port for standard output.
#[inline]
pub fn stdout() -> Port {
    Port::new(STDOUT_PORT)
}

/// Returns port for standard error.
#[inline]
pub fn stderr() -> Port {
    Port::new(STDERR_PORT)
}

/// Writes `string` to the log port number `port`.
///
/// The presence of the debug probe is not checked, so it is recommended to use
/// this function together with [`Port::is_enabled`].
#[inline(never)]
pub fn write_str(port: u8, string: &str) {
    Port::new(port).write_str(string).unwrap_or(());
}

/// Writes `args` to the log port number `port`.
///
/// The presence of the debug probe is not checked, so it is recommended to use
/// this function together with [`Port::is_enabled`].
#[inline(never)]
pub fn write_fmt(port: u8, args: fmt::Arguments<'_>) {
    Port::new(port).write_fmt(args).unwrap_or(());
}

#[cfg(test)]
mod tests {
    #[test]
    fn macros_in_expression_position() {
        for code in 0..4 {
            match code {
                0 => crate::println!(),
                1 => crate::println!("line {}", code),
                2 => crate::eprintln!("error"),
                _ => crate::eprint!("code {}", code),
            }
        }
        assert!(!super::stdout().is_enabled());
        assert!(!super::stderr().is_enabled());
    }
}
