use crate::krate::Krate;
use drone_stm32l4x6_map_macros_core::{new_ident, parse_int};
use inflector::Inflector;
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{
    braced,
    parse::{Parse, ParseStream, Result},
    parse_macro_input, Attribute, Error, Ident, LitInt, Token, Visibility,
};

const REG_TRAITS: &[&str] = &["RReg", "WReg", "RoReg", "WoReg"];
const FIELD_TRAITS: &[&str] = &["RRRegField", "WWRegField", "RoRRegField", "WoWRegField"];

struct Input {
    krate: Krate,
    attrs: Vec<Attribute>,
    vis: Visibility,
    block: Ident,
    reg: Reg,
}

pub struct Reg {
    pub attrs: Vec<Attribute>,
    pub ident: Ident,
    pub alias: Option<Ident>,
    pub address: (usize, LitInt),
    pub size: (u8, LitInt),
    pub reset: (u64, LitInt),
    pub resets: Vec<(Ident, (u64, LitInt))>,
    pub traits: Vec<Ident>,
    pub fields: Vec<Field>,
}

pub struct Field {
    pub attrs: Vec<Attribute>,
    pub ident: Ident,
    pub offset: (u8, LitInt),
    pub width: (u8, LitInt),
    pub traits: Vec<Ident>,
}

/// How generated register code reaches its address.
pub enum Addressing<'a> {
    /// `ADDRESS` is absolute.
    Absolute,
    /// `OFFSET` is relative to the `BASE` const parameter of the layout.
    Relative {
        /// Known instances of the layout as `(name, base address)`.
        instances: &'a [(Ident, LitInt)],
    },
}

impl Parse for Input {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        let krate = input.parse()?;
        let attrs = input.call(Attribute::parse_outer)?;
        let vis = input.parse()?;
        input.parse::<Token![mod]>()?;
        let block = input.parse()?;
        let ident = input.parse()?;
        input.parse::<Token![;]>()?;
        let reg = Reg::parse_body(input, Vec::new(), ident, None, false)?;
        Ok(Self { krate, attrs, vis, block, reg })
    }
}

impl Parse for Field {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let ident = input.parse()?;
        let content;
        braced!(content in input);
        let offset = parse_int(&content)?;
        let width = parse_int(&content)?;
        let mut traits = Vec::new();
        while !content.is_empty() {
            traits.push(content.parse()?);
        }
        Ok(Self { attrs, ident, offset, width, traits })
    }
}

impl Reg {
    /// Parses `ADDRESS SIZE RESET TRAITS; [INSTANCE RESET;]* FIELD { .. }*`
    /// until the end of `input`.
    pub fn parse_body(
        input: ParseStream<'_>,
        attrs: Vec<Attribute>,
        ident: Ident,
        alias: Option<Ident>,
        overrides: bool,
    ) -> Result<Self> {
        let address = parse_int(input)?;
        let size = parse_int(input)?;
        let reset = parse_int(input)?;
        let mut traits = Vec::new();
        while !input.peek(Token![;]) {
            traits.push(input.parse()?);
        }
        input.parse::<Token![;]>()?;
        let mut resets = Vec::new();
        let mut fields = Vec::new();
        while !input.is_empty() {
            if overrides && input.peek(Ident) && input.peek2(LitInt) {
                let instance = input.parse()?;
                let value = parse_int(input)?;
                input.parse::<Token![;]>()?;
                resets.push((instance, value));
            } else {
                fields.push(input.parse()?);
            }
        }
        Ok(Self { attrs, ident, alias, address, size, reset, resets, traits, fields })
    }

    pub fn has_trait(&self, name: &str) -> bool {
        self.traits.iter().any(|ident| ident == name)
    }

    /// Register width in bytes.
    pub fn bytes(&self) -> usize {
        usize::from(self.size.0 / 8)
    }

    /// Checks the declaration for inconsistencies, collecting every error.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Errors::default();
        let size = self.size.0;
        if !matches!(size, 8 | 16 | 32) {
            errors.push(&self.size.1, "register size must be 0x08, 0x10, or 0x20");
            return errors.finish();
        }
        if self.reset.0 >> size != 0 {
            errors.push(&self.reset.1, format!("reset value doesn't fit in {size} bits"));
        }
        for (_, (value, lit)) in &self.resets {
            if value >> size != 0 {
                errors.push(lit, format!("reset value doesn't fit in {size} bits"));
            }
        }
        for ident in &self.traits {
            if !REG_TRAITS.iter().any(|name| ident == name) {
                errors.push(ident, format!("unknown register trait `{ident}`"));
            }
        }
        if self.has_trait("RoReg") && (!self.has_trait("RReg") || self.has_trait("WReg")) {
            errors.push(&self.ident, "`RoReg` register must be `RReg` and not `WReg`");
        }
        if self.has_trait("WoReg") && (!self.has_trait("WReg") || self.has_trait("RReg")) {
            errors.push(&self.ident, "`WoReg` register must be `WReg` and not `RReg`");
        }
        let mut taken = 0_u64;
        for (i, field) in self.fields.iter().enumerate() {
            let (offset, width) = (field.offset.0, field.width.0);
            if width == 0 {
                errors.push(&field.width.1, "field width must be at least 1");
                continue;
            }
            if u16::from(offset) + u16::from(width) > u16::from(size) {
                errors.push(
                    &field.ident,
                    format!("field `{}` exceeds the {size}-bit register", field.ident),
                );
                continue;
            }
            if self.fields[..i].iter().any(|other| other.ident == field.ident) {
                errors.push(&field.ident, format!("duplicate field `{}`", field.ident));
            }
            let mask = ((1_u64 << width) - 1) << offset;
            if taken & mask != 0 {
                errors.push(&field.ident, format!("field `{}` overlaps another field", field.ident));
            }
            taken |= mask;
            field.validate(self, &mut errors);
        }
        errors.finish()
    }

    /// Generates the register module, named `module`.
    pub fn generate(
        &self,
        krate: &Krate,
        vis: &Visibility,
        module: &Ident,
        addressing: &Addressing<'_>,
    ) -> TokenStream2 {
        let Self { attrs, ident, fields, .. } = self;
        let raw = format_ident!("u{}", self.size.0);
        let size = &self.size.1;
        let reset = &self.reset.1;
        let address = &self.address.1;
        let name = ident.to_string();
        let alias = match &self.alias {
            Some(alias) => {
                let alias = alias.to_string();
                quote!(::core::option::Option::Some(#alias))
            }
            None => quote!(::core::option::Option::None),
        };
        let (impl_generics, ty_generics, address_def, address_expr, reset_def, reset_expr) =
            match addressing {
                Addressing::Absolute => (
                    quote!(),
                    quote!(),
                    quote! {
                        /// Absolute address of the register.
                        pub const ADDRESS: usize = #address;
                    },
                    quote!(self::ADDRESS),
                    quote! {
                        /// Reset value of the register.
                        pub const RESET: #raw = #reset;
                    },
                    quote!(self::RESET),
                ),
                Addressing::Relative { instances } => {
                    let reset_def = if self.resets.is_empty() {
                        quote! {
                            /// Reset value of the register.
                            pub const RESET: #raw = #reset;
                        }
                    } else {
                        let arms = self.resets.iter().filter_map(|(instance, (_, value))| {
                            instances.iter().find(|(name, _)| name == instance).map(
                                |(_, base)| quote!(#base => #value,),
                            )
                        });
                        quote! {
                            /// Default reset value of the register.
                            pub const RESET: #raw = #reset;

                            /// Returns the reset value of the register for the
                            /// instance at `base`.
                            pub const fn reset(base: usize) -> #raw {
                                match base {
                                    #(#arms)*
                                    _ => RESET,
                                }
                            }
                        }
                    };
                    let reset_expr = if self.resets.is_empty() {
                        quote!(self::RESET)
                    } else {
                        quote!(self::reset(BASE))
                    };
                    (
                        quote!(<const BASE: usize>),
                        quote!(<BASE>),
                        quote! {
                            /// Offset of the register from the peripheral base address.
                            pub const OFFSET: usize = #address;
                        },
                        quote!(BASE + self::OFFSET),
                        reset_def,
                        reset_expr,
                    )
                }
            };

        let mut reg_fields = Vec::new();
        let mut reg_take = Vec::new();
        let mut field_tokens = Vec::new();
        let mut val_methods = Vec::new();
        let mut field_infos = Vec::new();
        for field in fields {
            let Field { attrs: field_attrs, ident: field_ident, .. } = field;
            let field_name = field_ident.to_string();
            let field_snake = field_name.to_snake_case();
            let field_var = new_ident(&field_snake);
            let mut field_pascal = field_name.to_pascal_case();
            if field_pascal == "Reg" || field_pascal == "Val" {
                field_pascal.push_str("Field");
            }
            let field_struct = format_ident!("{}", field_pascal);
            let offset = &field.offset.1;
            let width = &field.width.1;
            let readable = field.has_trait("RRRegField");
            let writable = field.has_trait("WWRegField");
            let kind = if field.width.0 == 1 {
                quote!(#krate::reg::RegFieldBit)
            } else {
                quote!(#krate::reg::RegFieldBits)
            };
            let markers = field.traits.iter().map(|marker| quote!(#krate::reg::#marker));
            reg_fields.push(quote! {
                #(#field_attrs)*
                pub #field_var: #field_struct #ty_generics,
            });
            reg_take.push(quote!(#field_var: #field_struct(()),));
            field_tokens.push(quote! {
                #(#field_attrs)*
                pub struct #field_struct #impl_generics(());

                unsafe impl #impl_generics #krate::token::Token for #field_struct #ty_generics {
                    #[inline]
                    unsafe fn take() -> Self {
                        Self(())
                    }
                }

                impl #impl_generics #krate::reg::RegField for #field_struct #ty_generics {
                    type Reg = Reg #ty_generics;

                    const OFFSET: usize = #offset;
                    const WIDTH: usize = #width;
                }

                impl #impl_generics #kind for #field_struct #ty_generics {}

                #(impl #impl_generics #markers for #field_struct #ty_generics {})*
            });
            if field.width.0 == 1 {
                if readable {
                    val_methods.push(quote! {
                        #(#field_attrs)*
                        #[inline]
                        #[must_use]
                        pub fn #field_var(&self) -> bool {
                            #krate::reg::RegVal::read_bit(self, #offset)
                        }
                    });
                }
                if writable {
                    let set = format_ident!("set_{}", field_snake);
                    let clear = format_ident!("clear_{}", field_snake);
                    let toggle = format_ident!("toggle_{}", field_snake);
                    val_methods.push(quote! {
                        #(#field_attrs)*
                        #[inline]
                        pub fn #set(&mut self) -> &mut Self {
                            #krate::reg::RegVal::set_bit(self, #offset);
                            self
                        }

                        #(#field_attrs)*
                        #[inline]
                        pub fn #clear(&mut self) -> &mut Self {
                            #krate::reg::RegVal::clear_bit(self, #offset);
                            self
                        }

                        #(#field_attrs)*
                        #[inline]
                        pub fn #toggle(&mut self) -> &mut Self {
                            #krate::reg::RegVal::toggle_bit(self, #offset);
                            self
                        }
                    });
                }
            } else {
                if readable {
                    val_methods.push(quote! {
                        #(#field_attrs)*
                        #[inline]
                        #[must_use]
                        pub fn #field_var(&self) -> #raw {
                            #krate::reg::RegVal::read_bits(self, #offset, #width)
                        }
                    });
                }
                if writable {
                    let write = format_ident!("write_{}", field_snake);
                    val_methods.push(quote! {
                        #(#field_attrs)*
                        ///
                        /// Bits of `bits` above the field width are discarded.
                        #[inline]
                        pub fn #write(&mut self, bits: #raw) -> &mut Self {
                            #krate::reg::RegVal::write_bits(self, #offset, #width, bits);
                            self
                        }
                    });
                }
            }
            field_infos.push(quote! {
                #krate::reg::FieldInfo { name: #field_name, offset: #offset, width: #width },
            });
        }
        if reg_fields.is_empty() {
            reg_fields.push(quote!(_priv: (),));
            reg_take.push(quote!(_priv: (),));
        }
        let markers = self.traits.iter().map(|marker| quote!(#krate::reg::#marker));

        quote! {
            #(#attrs)*
            #vis mod #module {
                #address_def

                #reset_def

                /// Layout of the register.
                pub const INFO: #krate::reg::RegInfo = #krate::reg::RegInfo {
                    name: #name,
                    alias: #alias,
                    offset: #address,
                    size: #size,
                    reset: #reset,
                    fields: &[#(#field_infos)*],
                };

                #(#attrs)*
                pub struct Reg #impl_generics {
                    #(#reg_fields)*
                }

                unsafe impl #impl_generics #krate::token::Token for Reg #ty_generics {
                    #[inline]
                    unsafe fn take() -> Self {
                        Self {
                            #(#reg_take)*
                        }
                    }
                }

                impl #impl_generics #krate::reg::Reg for Reg #ty_generics {
                    type Val = Val;

                    const ADDRESS: usize = #address_expr;
                    const RESET: #raw = #reset_expr;
                }

                #(impl #impl_generics #markers for Reg #ty_generics {})*

                /// Copy of the register value.
                #[derive(Clone, Copy, PartialEq, Eq, Hash)]
                #[repr(transparent)]
                pub struct Val(#raw);

                impl #krate::reg::RegVal for Val {
                    type Bits = #raw;

                    #[inline]
                    fn from_bits(bits: #raw) -> Self {
                        Self(bits)
                    }

                    #[inline]
                    fn bits(&self) -> #raw {
                        self.0
                    }

                    #[inline]
                    fn bits_mut(&mut self) -> &mut #raw {
                        &mut self.0
                    }
                }

                impl ::core::fmt::Debug for Val {
                    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                        f.debug_tuple("Val").field(&::core::format_args!("{:#x}", self.0)).finish()
                    }
                }

                impl Val {
                    #(#val_methods)*
                }

                #(#field_tokens)*
            }
        }
    }
}

impl Field {
    fn has_trait(&self, name: &str) -> bool {
        self.traits.iter().any(|ident| ident == name)
    }

    fn validate(&self, reg: &Reg, errors: &mut Errors) {
        for ident in &self.traits {
            if !FIELD_TRAITS.iter().any(|name| ident == name) {
                errors.push(ident, format!("unknown field trait `{ident}`"));
            }
        }
        if self.has_trait("RRRegField") && !reg.has_trait("RReg") {
            errors.push(&self.ident, "`RRRegField` field requires an `RReg` register");
        }
        if self.has_trait("WWRegField") && !reg.has_trait("WReg") {
            errors.push(&self.ident, "`WWRegField` field requires a `WReg` register");
        }
        if self.has_trait("RoRRegField")
            && (!self.has_trait("RRRegField") || self.has_trait("WWRegField"))
        {
            errors.push(&self.ident, "`RoRRegField` field must be `RRRegField` and not `WWRegField`");
        }
        if self.has_trait("WoWRegField")
            && (!self.has_trait("WWRegField") || self.has_trait("RRRegField"))
        {
            errors.push(&self.ident, "`WoWRegField` field must be `WWRegField` and not `RRRegField`");
        }
    }
}

/// Accumulator of spanned errors.
#[derive(Default)]
pub struct Errors(Option<Error>);

impl Errors {
    pub fn push<T: quote::ToTokens, U: std::fmt::Display>(&mut self, tokens: T, message: U) {
        let error = Error::new_spanned(tokens, message);
        match &mut self.0 {
            Some(errors) => errors.combine(error),
            None => self.0 = Some(error),
        }
    }

    pub fn push_error(&mut self, error: Error) {
        match &mut self.0 {
            Some(errors) => errors.combine(error),
            None => self.0 = Some(error),
        }
    }

    pub fn finish(self) -> Result<()> {
        self.0.map_or(Ok(()), Err)
    }
}

pub fn proc_macro(input: TokenStream) -> TokenStream {
    let Input { krate, attrs, vis, block, mut reg } = parse_macro_input!(input);
    if let Err(err) = reg.validate() {
        return err.to_compile_error().into();
    }
    reg.attrs = attrs;
    let module = new_ident(&format!("{}_{}", block, reg.ident).to_snake_case());
    reg.generate(&krate, &vis, &module, &Addressing::Absolute).into()
}
