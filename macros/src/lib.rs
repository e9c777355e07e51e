//! Procedural macros for drone-stm32l4x6-map.
//!
//! The macros are not meant to be used directly. Use the `macro_rules!`
//! wrappers re-exported by `drone-stm32l4x6-map`, which pass the path to the
//! crate as the first item of the input.

#![deny(elided_lifetimes_in_paths)]
#![warn(clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::too_many_lines
)]

extern crate proc_macro;

mod krate;
mod periph;
mod reg;
mod vtable;

use proc_macro::TokenStream;

#[proc_macro]
pub fn reg(input: TokenStream) -> TokenStream {
    reg::proc_macro(input)
}

#[proc_macro]
pub fn periph(input: TokenStream) -> TokenStream {
    periph::proc_macro(input)
}

#[proc_macro]
pub fn vtable(input: TokenStream) -> TokenStream {
    vtable::proc_macro(input)
}
