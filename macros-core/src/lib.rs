//! Helpers shared by `drone-stm32l4x6-map` procedural macros.
//!
//! See `drone-stm32l4x6-map` documentation for details.

#![deny(bare_trait_objects)]
#![deny(elided_lifetimes_in_paths)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod macros;
mod unkeywordize;

pub use self::unkeywordize::{new_ident, unkeywordize};

use syn::{parse::ParseStream, LitInt, Result};

/// Parses an integer literal and returns its value together with the
/// literal itself.
pub fn parse_int<T>(input: ParseStream<'_>) -> Result<(T, LitInt)>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let lit = input.parse::<LitInt>()?;
    Ok((lit.base10_parse()?, lit))
}
