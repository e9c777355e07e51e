//! The [`Token`] trait and its common patterns.
//!
//! A token is a zero-sized handle standing for exclusive ownership of a
//! piece of hardware. Every register, bit field, and peripheral instance of
//! the map is a token. Moving a token moves the right to touch its hardware,
//! and the type system forbids duplicating it. Uniqueness itself is kept by
//! two `unsafe` contracts:
//!
//! 1. An implementer of [`Token`] promises that the type is zero-sized, is
//! not [`Clone`], and is only constructed by [`Token::take`].
//!
//! 2. A caller of [`Token::take`] promises that no other instance of the type
//! exists at the same time.
//!
//! Tokens nest, so `take` is normally called once, on an index type at the
//! start of the program, and its fields are handed out to the code that
//! drives each peripheral:
//!
//! ```
//! use core::mem::size_of_val;
//! use drone_stm32l4x6_map::{
//!     map::{gpio, rcc},
//!     token::Token,
//!     unsafe_simple_tokens,
//! };
//!
//! unsafe_simple_tokens! {
//!     /// Tokens used by the blinker.
//!     pub struct Blinker {
//!         /// Reset and clock control.
//!         rcc: rcc::Rcc,
//!         /// LED port.
//!         gpiob: gpio::Gpiob,
//!     }
//! }
//!
//! fn main() {
//!     // The only place the tokens are created.
//!     let blinker = unsafe { Blinker::take() };
//!     assert_eq!(size_of_val(&blinker), 0);
//!     assert_eq!(size_of_val(&blinker.gpiob.odr.od5), 0);
//!     trunk(blinker);
//! }
//!
//! fn trunk(blinker: Blinker) {
//!     let Blinker { rcc, gpiob } = blinker;
//!     drop((rcc.ahb2enr.gpioben, gpiob.moder.mode5));
//! }
//! ```
//!
//! The whole map is indexed by [`crate::map::Regs`].

/// A zero-sized handle with at most one live instance.
///
/// # Safety
///
/// The implementing type must be zero-sized, must not implement [`Clone`],
/// and must not be constructed anywhere except [`Token::take`].
pub unsafe trait Token: Sized + Send + 'static {
    /// Creates the token instance. Compiles to nothing.
    ///
    /// # Safety
    ///
    /// No other instance of the type may exist while the returned one is
    /// alive.
    unsafe fn take() -> Self;
}

/// Declares an index struct whose fields are tokens, and implements
/// [`Token`] for it by taking each field.
///
/// Fields may carry a `#[cfg]` attribute, so an index can follow the chip
/// variant features.
///
/// # Safety
///
/// The field tokens must not be taken anywhere else.
#[macro_export]
macro_rules! unsafe_simple_tokens {
    (
        $(#[$attr:meta])*
        $vis:vis struct $ident:ident {
            $(
                $(#[doc = $doc:expr])*
                $(#[cfg($cfg:meta)])?
                $field:ident: $ty:ty,
            )*
        }
    ) => {
        $(#[$attr])*
        $vis struct $ident {
            $(
                $(#[doc = $doc])*
                $(#[cfg($cfg)])?
                pub $field: $ty,
            )*
        }

        unsafe impl $crate::token::Token for $ident {
            #[inline]
            unsafe fn take() -> Self {
                Self {
                    $(
                        $(#[cfg($cfg)])?
                        $field: unsafe { <$ty as $crate::token::Token>::take() },
                    )*
                }
            }
        }
    };
}

mod compile_tests {
    //! ```compile_fail
    //! use drone_stm32l4x6_map::{map::gpio, token::Token};
    //! fn main() {
    //!     let gpioa = unsafe { gpio::Gpioa::take() };
    //!     let copy = gpioa.clone();
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! use drone_stm32l4x6_map::map::gpio;
    //! fn main() {
    //!     let mode0 = gpio::moder::Mode0::<{ gpio::GPIOA }>(());
    //! }
    //! ```
}
