//! Memory-mapped register map for the STM32L4x6 microcontroller family
//! (STM32L476, STM32L486, STM32L496, STM32L4A6).
//!
//! Every on-chip peripheral is described by a layout generic over its base
//! address, and every peripheral instance is a type alias of that layout at
//! the vendor's fixed physical address:
//!
//! ```
//! use drone_stm32l4x6_map::{map::gpio, reg::prelude::*};
//!
//! assert_eq!(gpio::GPIOA, 0x4800_0000);
//! assert_eq!(<gpio::moder::Reg<{ gpio::GPIOB }> as Reg>::ADDRESS, 0x4800_0400);
//! assert_eq!(<gpio::odr::Reg<{ gpio::GPIOC }> as Reg>::ADDRESS, 0x4800_0814);
//! ```
//!
//! Registers and bit fields are zero-sized [tokens](token). Loading and
//! storing them performs a single volatile access of the register width:
//!
//! ```no_run
//! use drone_stm32l4x6_map::{map::rcc::Rcc, reg::prelude::*, token::Token};
//!
//! let rcc = unsafe { Rcc::take() };
//! rcc.ahb2enr.gpioaen.set_bit();
//! rcc.ahb2enr.modify(|r| r.set_gpioben().set_gpiocen());
//! ```
//!
//! # Chip variants
//!
//! The variant is selected with one of the `stm32l476` (default),
//! `stm32l486`, `stm32l496`, `stm32l4a6` features. Peripheral instances and
//! interrupt lines which are absent from the selected variant are compiled
//! out.
//!
//! # Host builds
//!
//! With the `host` feature the crate is built with `std`, and register
//! accesses are routed to a simulated memory (see [`reg::mmio::host`]).

#![deny(elided_lifetimes_in_paths)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::doc_markdown,
    clippy::unreadable_literal
)]
#![cfg_attr(not(any(test, feature = "host")), no_std)]

pub mod log;
pub mod map;
pub mod periph;
pub mod reg;
pub mod token;
pub mod vtable;

#[doc(hidden)]
pub use drone_stm32l4x6_map_macros::{
    periph as __periph, reg as __reg, vtable as __vtable,
};

/// Declares a memory-mapped register at an absolute address.
///
/// ```
/// use drone_stm32l4x6_map::reg::prelude::*;
///
/// drone_stm32l4x6_map::reg! {
///     /// SysTick control and status register.
///     pub mod STK CTRL; // register block and name
///
///     0xE000_E010 // memory address
///     0x20 // bit size
///     0x0000_0000 // reset value
///     RReg WReg; // list of marker traits for the register
///
///     /// Counter enable.
///     ENABLE { // field name
///         0 // offset
///         1 // width
///         RRRegField WWRegField // list of marker traits for the field
///     }
/// }
///
/// fn main() {
///     assert_eq!(stk_ctrl::ADDRESS, 0xE000_E010);
///     assert_eq!(<stk_ctrl::Reg as Reg>::RESET, 0);
///     assert_eq!(stk_ctrl::INFO.fields[0].name, "ENABLE");
/// }
/// ```
///
/// A register must be 8, 16, or 32 bits wide, and its fields must fit the
/// register without overlapping each other:
///
/// ```compile_fail
/// drone_stm32l4x6_map::reg! {
///     pub mod STK CTRL;
///     0xE000_E010 0x20 0 RReg WReg;
///     ENABLE { 0 2 RRRegField WWRegField }
///     TICKINT { 1 1 RRRegField WWRegField }
/// }
/// ```
#[macro_export]
macro_rules! reg {
    ($($tt:tt)*) => {
        $crate::__reg! { $crate; $($tt)* }
    };
}

/// Declares a peripheral layout, its instances, and its registers.
///
/// ```
/// use drone_stm32l4x6_map::{periph::Periph, reg::prelude::*};
///
/// drone_stm32l4x6_map::periph! {
///     /// Basic timer.
///     pub struct TimPeriph;
///
///     /// First instance.
///     TIM6 0x4000_1000;
///     /// Second instance.
///     TIM7 0x4000_1400;
///
///     /// Control register 1.
///     CR1 {
///         0x00 0x20 0x0000_0000 RReg WReg;
///         /// Counter enable.
///         CEN { 0 1 RRRegField WWRegField }
///     }
///     /// Counter.
///     CNT {
///         0x24 0x20 0x0000_0000 RReg WReg;
///         CNT { 0 16 RRRegField WWRegField }
///     }
/// }
///
/// fn main() {
///     assert_eq!(<cnt::Reg<{ TIM7 }> as Reg>::ADDRESS, 0x4000_1424);
///     assert_eq!(<Tim6 as Periph>::BASE_ADDRESS, TIM6);
///     assert_eq!(INFO.regs.len(), 2);
/// }
/// ```
///
/// Register offsets must be unique, unless a register is declared as an
/// alternate view of another one:
///
/// ```compile_fail
/// drone_stm32l4x6_map::periph! {
///     pub struct TimPeriph;
///     TIM6 0x4000_1000;
///     CR1 { 0x00 0x20 0 RReg WReg; }
///     CR2 { 0x00 0x20 0 RReg WReg; }
/// }
/// ```
#[macro_export]
macro_rules! periph {
    ($($tt:tt)*) => {
        $crate::__periph! { $crate; $($tt)* }
    };
}

/// Declares an interrupt vector table.
///
/// ```
/// use drone_stm32l4x6_map::vtable::{default_handler, Handler};
///
/// drone_stm32l4x6_map::vtable! {
///     /// Interrupt vector table.
///     pub struct Vtable;
///     /// Interrupt lines.
///     pub enum Irq;
///     default => default_handler;
///
///     /// Window watchdog.
///     0: WWDG;
///     /// PVD through EXTI line.
///     1: PVD;
/// }
///
/// unsafe extern "C" fn pvd() {}
///
/// fn main() {
///     let vtable = Vtable { pvd, ..Vtable::new() };
///     assert_eq!(IRQ_COUNT, 2);
///     assert_eq!(Irq::Pvd.number(), 1);
///     assert_eq!(vtable.handler(Irq::Pvd) as usize, pvd as Handler as usize);
/// }
/// ```
#[macro_export]
macro_rules! vtable {
    ($($tt:tt)*) => {
        $crate::__vtable! { $crate; $($tt)* }
    };
}
