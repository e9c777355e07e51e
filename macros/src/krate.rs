use proc_macro2::{TokenStream, TokenTree};
use quote::ToTokens;
use syn::{
    parse::{Parse, ParseStream, Result},
    Token,
};

/// Path to the `drone-stm32l4x6-map` crate, passed by the `macro_rules!`
/// wrapper as `$crate;`.
pub struct Krate(TokenStream);

impl Parse for Krate {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        let mut path = TokenStream::new();
        while !input.peek(Token![;]) {
            path.extend(Some(input.parse::<TokenTree>()?));
        }
        input.parse::<Token![;]>()?;
        if path.is_empty() {
            return Err(input.error("expected a crate path"));
        }
        Ok(Self(path))
    }
}

impl ToTokens for Krate {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        self.0.to_tokens(tokens);
    }
}
