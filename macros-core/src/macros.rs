/// Returns a compile error from a proc-macro entry point.
///
/// The error points at the macro call site, or at the span given after `at`.
#[macro_export]
macro_rules! compile_error {
    (at $span:expr, $($fmt:tt)*) => {
        return ::syn::Error::new($span, format!($($fmt)*)).to_compile_error().into()
    };
    ($($fmt:tt)*) => {
        $crate::compile_error!(at ::proc_macro2::Span::call_site(), $($fmt)*)
    };
}

/// Consumes a contextual keyword, such as `default` in `default => handler;`.
#[macro_export]
macro_rules! parse_ident {
    ($input:ident, $keyword:literal) => {{
        let ident = $input.parse::<::syn::Ident>()?;
        if ident != $keyword {
            return Err(::syn::Error::new(ident.span(), concat!("expected `", $keyword, "`")));
        }
    }};
}
