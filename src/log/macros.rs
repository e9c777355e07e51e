/// Prints to the ITM stimulus port #0, if a debug probe listens to it.
///
/// Equivalent to the [`println!`] macro except that a newline is not printed
/// at the end of the message.
///
/// ```no_run
/// use drone_stm32l4x6_map::print;
///
/// print!("on ");
/// print!("the same line\n");
/// ```
#[macro_export]
macro_rules! print {
    ($str:expr) => {
        if $crate::log::stdout().is_enabled() {
            $crate::log::write_str($crate::log::STDOUT_PORT, $str);
        }
    };
    ($($arg:tt)*) => {
        if $crate::log::stdout().is_enabled() {
            $crate::log::write_fmt($crate::log::STDOUT_PORT, format_args!($($arg)*));
        }
    };
}

/// Prints to the ITM stimulus port #0, with a newline, if a debug probe
/// listens to it.
///
/// ```no_run
/// use drone_stm32l4x6_map::println;
///
/// println!();
/// println!("format {} arguments", "some");
/// ```
#[macro_export]
macro_rules! println {
    () => {
        $crate::print!("\n")
    };
    ($fmt:expr) => {
        $crate::print!(concat!($fmt, "\n"))
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::print!(concat!($fmt, "\n"), $($arg)*)
    };
}

/// Prints to the ITM stimulus port #1, if a debug probe listens to it.
///
/// Use it for error and progress messages, and [`print!`] for the primary
/// output.
///
/// ```no_run
/// use drone_stm32l4x6_map::eprint;
///
/// eprint!("Error: Could not complete task");
/// ```
#[macro_export]
macro_rules! eprint {
    ($str:expr) => {
        if $crate::log::stderr().is_enabled() {
            $crate::log::write_str($crate::log::STDERR_PORT, $str);
        }
    };
    ($($arg:tt)*) => {
        if $crate::log::stderr().is_enabled() {
            $crate::log::write_fmt($crate::log::STDERR_PORT, format_args!($($arg)*));
        }
    };
}

/// Prints to the ITM stimulus port #1, with a newline, if a debug probe
/// listens to it.
///
/// ```no_run
/// use drone_stm32l4x6_map::eprintln;
///
/// eprintln!("unhandled interrupt {}", 5);
/// ```
#[macro_export]
macro_rules! eprintln {
    () => {
        $crate::eprint!("\n")
    };
    ($fmt:expr) => {
        $crate::eprint!(concat!($fmt, "\n"))
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::eprint!(concat!($fmt, "\n"), $($arg)*)
    };
}
