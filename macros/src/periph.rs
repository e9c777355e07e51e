use crate::{
    krate::Krate,
    reg::{Addressing, Errors, Reg},
};
use drone_stm32l4x6_map_macros_core::new_ident;
use inflector::Inflector;
use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{
    braced,
    parse::{Parse, ParseStream, Result},
    parse_macro_input, Attribute, Ident, LitInt, Token, Visibility,
};

struct Input {
    krate: Krate,
    attrs: Vec<Attribute>,
    vis: Visibility,
    ident: Ident,
    instances: Vec<Instance>,
    regs: Vec<Reg>,
}

struct Instance {
    attrs: Vec<Attribute>,
    ident: Ident,
    base: LitInt,
}

impl Parse for Input {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        let krate = input.parse()?;
        let attrs = input.call(Attribute::parse_outer)?;
        let vis = input.parse()?;
        input.parse::<Token![struct]>()?;
        let ident = input.parse()?;
        input.parse::<Token![;]>()?;
        let mut instances = Vec::new();
        let mut regs = Vec::new();
        while !input.is_empty() {
            let attrs = input.call(Attribute::parse_outer)?;
            let ident = input.parse::<Ident>()?;
            if input.peek(LitInt) {
                if !regs.is_empty() {
                    return Err(input.error("instances must precede registers"));
                }
                let base = input.parse()?;
                input.parse::<Token![;]>()?;
                instances.push(Instance { attrs, ident, base });
            } else {
                let alias = if input.peek(Token![@]) {
                    input.parse::<Token![@]>()?;
                    Some(input.parse()?)
                } else {
                    None
                };
                let content;
                braced!(content in input);
                regs.push(Reg::parse_body(&content, attrs, ident, alias, true)?);
            }
        }
        Ok(Self { krate, attrs, vis, ident, instances, regs })
    }
}

impl Input {
    fn validate(&self) -> Result<()> {
        let mut errors = Errors::default();
        if !self.ident.to_string().ends_with("Periph") {
            errors.push(&self.ident, "peripheral layout name must end with `Periph`");
        }
        for (i, instance) in self.instances.iter().enumerate() {
            if self.instances[..i].iter().any(|other| other.ident == instance.ident) {
                errors.push(&instance.ident, format!("duplicate instance `{}`", instance.ident));
            }
        }
        for (i, reg) in self.regs.iter().enumerate() {
            if let Err(err) = reg.validate() {
                errors.push_error(err);
            }
            if self.regs[..i].iter().any(|other| other.ident == reg.ident) {
                errors.push(&reg.ident, format!("duplicate register `{}`", reg.ident));
            }
            for (instance, _) in &reg.resets {
                if !self.instances.iter().any(|other| other.ident == *instance) {
                    errors.push(instance, format!("unknown instance `{instance}`"));
                }
            }
            if let Some(alias) = &reg.alias {
                match self.regs.iter().find(|other| other.ident == *alias) {
                    Some(target) if target.alias.is_some() => {
                        errors.push(alias, format!("`{alias}` is itself an alias view"));
                    }
                    Some(target)
                        if target.address.0 != reg.address.0 || target.size.0 != reg.size.0 =>
                    {
                        errors.push(
                            &reg.address.1,
                            format!("alias view must share the offset and size of `{alias}`"),
                        );
                    }
                    Some(_) => {}
                    None => errors.push(alias, format!("unknown register `{alias}`")),
                }
                continue;
            }
            let (start, end) = (reg.address.0, reg.address.0 + reg.bytes());
            let overlap = self.regs[..i].iter().filter(|other| other.alias.is_none()).find(|other| {
                let other_end = other.address.0 + other.bytes();
                start < other_end && other.address.0 < end
            });
            if let Some(other) = overlap {
                errors.push(
                    &reg.address.1,
                    format!("register `{}` overlaps `{}`", reg.ident, other.ident),
                );
            }
        }
        errors.finish()
    }
}

pub fn proc_macro(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as Input);
    if let Err(err) = input.validate() {
        return err.to_compile_error().into();
    }
    let Input { krate, attrs, vis, ident, instances, regs } = &input;
    let name = ident.to_string().trim_end_matches("Periph").to_screaming_snake_case();
    let instance_pairs = instances
        .iter()
        .map(|instance| (instance.ident.clone(), instance.base.clone()))
        .collect::<Vec<_>>();
    let addressing = Addressing::Relative { instances: &instance_pairs };

    let mut instance_tokens = Vec::new();
    for Instance { attrs: instance_attrs, ident: instance_ident, base } in instances {
        let alias = format_ident!("{}", instance_ident.to_string().to_pascal_case());
        instance_tokens.push(quote! {
            #(#instance_attrs)*
            #vis const #instance_ident: usize = #base;

            #(#instance_attrs)*
            #vis type #alias = #ident<{ #instance_ident }>;
        });
    }

    let mut reg_fields = Vec::new();
    let mut reg_takes = Vec::new();
    let mut reg_infos = Vec::new();
    let mut reg_mods = Vec::new();
    let mut reg_uses = Vec::new();
    for reg in regs {
        let reg_attrs = &reg.attrs;
        let cfgs = reg_attrs.iter().filter(|attr| attr.path.is_ident("cfg")).collect::<Vec<_>>();
        let snake = reg.ident.to_string().to_snake_case();
        let module = new_ident(&snake);
        let pascal = format_ident!("{}", reg.ident.to_string().to_pascal_case());
        reg_fields.push(quote! {
            #(#reg_attrs)*
            pub #module: #module::Reg<BASE>,
        });
        reg_takes.push(quote! {
            #(#cfgs)*
            #module: <#module::Reg<BASE> as #krate::token::Token>::take(),
        });
        reg_infos.push(quote!(#(#cfgs)* #module::INFO,));
        reg_mods.push(reg.generate(krate, vis, &module, &addressing));
        reg_uses.push(quote!(#(#cfgs)* #vis use #module::Reg as #pascal;));
    }

    let expanded = quote! {
        #(#instance_tokens)*

        #(#attrs)*
        #vis struct #ident<const BASE: usize> {
            #(#reg_fields)*
        }

        unsafe impl<const BASE: usize> #krate::token::Token for #ident<BASE> {
            #[inline]
            unsafe fn take() -> Self {
                Self {
                    #(#reg_takes)*
                }
            }
        }

        impl<const BASE: usize> #krate::periph::Periph for #ident<BASE> {
            const BASE_ADDRESS: usize = BASE;
            const INFO: #krate::periph::PeriphInfo = INFO;
        }

        /// Layout of the peripheral.
        #vis const INFO: #krate::periph::PeriphInfo = #krate::periph::PeriphInfo {
            name: #name,
            regs: &[#(#reg_infos)*],
        };

        #(#reg_uses)*

        #(#reg_mods)*
    };
    expanded.into()
}
