use crate::{krate::Krate, reg::Errors};
use drone_stm32l4x6_map_macros_core::{compile_error, new_ident, parse_ident, parse_int};
use inflector::Inflector;
use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{
    parse::{Parse, ParseStream, Result},
    parse_macro_input, Attribute, ExprPath, Ident, LitInt, Token, Visibility,
};

struct Input {
    krate: Krate,
    vtable: Item,
    irq: Item,
    default: ExprPath,
    lines: Vec<Line>,
}

struct Item {
    attrs: Vec<Attribute>,
    vis: Visibility,
    ident: Ident,
}

struct Line {
    attrs: Vec<Attribute>,
    number: (u16, LitInt),
    ident: Ident,
}

impl Parse for Input {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        let krate = input.parse()?;
        let vtable = Item::parse(input, |input| input.parse::<Token![struct]>().map(drop))?;
        let irq = Item::parse(input, |input| input.parse::<Token![enum]>().map(drop))?;
        parse_ident!(input, "default");
        input.parse::<Token![=>]>()?;
        let default = input.parse()?;
        input.parse::<Token![;]>()?;
        let mut lines = Vec::new();
        while !input.is_empty() {
            let attrs = input.call(Attribute::parse_outer)?;
            let number = parse_int(input)?;
            input.parse::<Token![:]>()?;
            let ident = input.parse()?;
            input.parse::<Token![;]>()?;
            lines.push(Line { attrs, number, ident });
        }
        Ok(Self { krate, vtable, irq, default, lines })
    }
}

impl Item {
    fn parse(
        input: ParseStream<'_>,
        keyword: impl FnOnce(ParseStream<'_>) -> Result<()>,
    ) -> Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let vis = input.parse()?;
        keyword(input)?;
        let ident = input.parse()?;
        input.parse::<Token![;]>()?;
        Ok(Self { attrs, vis, ident })
    }
}

impl Line {
    fn is_conditional(&self) -> bool {
        self.attrs.iter().any(|attr| attr.path.is_ident("cfg"))
    }

    fn cfgs(&self) -> impl Iterator<Item = &Attribute> {
        self.attrs.iter().filter(|attr| !attr.path.is_ident("doc"))
    }
}

impl Input {
    fn validate(&self) -> Result<()> {
        let mut errors = Errors::default();
        let mut conditional = false;
        for (i, line) in self.lines.iter().enumerate() {
            if usize::from(line.number.0) != i {
                errors.push(&line.number.1, format!("expected interrupt line number {i}"));
            }
            if self.lines[..i].iter().any(|other| other.ident == line.ident) {
                errors.push(&line.ident, format!("duplicate interrupt line `{}`", line.ident));
            }
            if line.is_conditional() {
                conditional = true;
            } else if conditional {
                errors.push(&line.ident, "unconditional lines must precede conditional lines");
            }
        }
        errors.finish()
    }
}

pub fn proc_macro(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as Input);
    if input.lines.is_empty() {
        compile_error!(
            at input.vtable.ident.span(),
            "vector table `{}` declares no interrupt lines",
            input.vtable.ident
        );
    }
    if let Err(err) = input.validate() {
        return err.to_compile_error().into();
    }
    let Input { krate, vtable, irq, default, lines } = &input;
    let Item { attrs: vtable_attrs, vis: vtable_vis, ident: vtable_ident } = vtable;
    let Item { attrs: irq_attrs, vis: irq_vis, ident: irq_ident } = irq;

    let mut variants = Vec::new();
    let mut slots = Vec::new();
    let mut defaults = Vec::new();
    let mut names = Vec::new();
    let mut from_numbers = Vec::new();
    let mut getters = Vec::new();
    let mut setters = Vec::new();
    for line in lines {
        let Line { attrs, number: (_, number), ident } = line;
        let cfgs = line.cfgs().collect::<Vec<_>>();
        let name = ident.to_string();
        let variant = format_ident!("{}", name.to_pascal_case());
        let slot = new_ident(&name.to_snake_case());
        variants.push(quote! {
            #(#attrs)*
            #variant = #number,
        });
        slots.push(quote! {
            #(#attrs)*
            pub #slot: #krate::vtable::Handler,
        });
        defaults.push(quote!(#(#cfgs)* #slot: #default,));
        names.push(quote!(#(#cfgs)* Self::#variant => #name,));
        from_numbers.push(quote!(#(#cfgs)* #number => ::core::option::Option::Some(Self::#variant),));
        getters.push(quote!(#(#cfgs)* #irq_ident::#variant => self.#slot,));
        setters.push(quote!(#(#cfgs)* #irq_ident::#variant => self.#slot = handler,));
    }

    let expanded = quote! {
        #(#irq_attrs)*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(u16)]
        #irq_vis enum #irq_ident {
            #(#variants)*
        }

        impl #irq_ident {
            /// Returns the interrupt line number.
            #[inline]
            #[must_use]
            pub const fn number(self) -> u16 {
                self as u16
            }

            /// Returns the exception number of the interrupt line, which is
            /// the line number plus 16.
            #[inline]
            #[must_use]
            pub const fn vector(self) -> u16 {
                self as u16 + 16
            }

            /// Returns the vendor name of the interrupt line.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    #(#names)*
                }
            }

            /// Returns the interrupt line with the given number, if it exists
            /// on the selected device.
            #[must_use]
            pub const fn from_number(number: u16) -> ::core::option::Option<Self> {
                match number {
                    #(#from_numbers)*
                    _ => ::core::option::Option::None,
                }
            }

            /// Returns the interrupt line for the given exception number.
            /// Exception numbers below 16 belong to the core and yield `None`.
            #[must_use]
            pub const fn from_vector(vector: u16) -> ::core::option::Option<Self> {
                if vector < 16 {
                    ::core::option::Option::None
                } else {
                    Self::from_number(vector - 16)
                }
            }

            /// Returns an iterator over all interrupt lines in vector order.
            #[allow(clippy::cast_possible_truncation)]
            pub fn iter() -> impl ::core::iter::Iterator<Item = Self> {
                (0..IRQ_COUNT as u16).filter_map(Self::from_number)
            }
        }

        /// Number of device interrupt lines.
        pub const IRQ_COUNT: usize =
            ::core::mem::size_of::<#vtable_ident>() / ::core::mem::size_of::<#krate::vtable::Handler>();

        #(#vtable_attrs)*
        #[repr(C)]
        #vtable_vis struct #vtable_ident {
            #(#slots)*
        }

        impl #vtable_ident {
            /// Creates a table with every slot set to the default handler.
            #[must_use]
            pub const fn new() -> Self {
                Self {
                    #(#defaults)*
                }
            }

            /// Returns the handler in the slot of `irq`.
            #[must_use]
            pub fn handler(&self, irq: #irq_ident) -> #krate::vtable::Handler {
                match irq {
                    #(#getters)*
                }
            }

            /// Replaces the handler in the slot of `irq`.
            pub fn set(&mut self, irq: #irq_ident, handler: #krate::vtable::Handler) {
                match irq {
                    #(#setters)*
                }
            }
        }

        impl ::core::default::Default for #vtable_ident {
            fn default() -> Self {
                Self::new()
            }
        }
    };
    expanded.into()
}
