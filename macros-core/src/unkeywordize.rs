use proc_macro2::Span;
use std::borrow::Cow;
use syn::Ident;

const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "Self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "union", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Inserts an underscore at the beginning of the string if the string is a
/// reserved keyword.
pub fn unkeywordize(mut ident: Cow<'_, str>) -> Cow<'_, str> {
    if KEYWORDS.contains(&ident.as_ref()) {
        ident.to_mut().insert(0, '_');
    }
    ident
}

/// Creates a new call-site identifier from `name`, escaping keywords.
pub fn new_ident(name: &str) -> Ident {
    Ident::new(&unkeywordize(Cow::Borrowed(name)), Span::call_site())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_keywords() {
        assert_eq!(unkeywordize("type".into()), "_type");
        assert_eq!(unkeywordize("ref".into()), "_ref");
        assert_eq!(unkeywordize("Self".into()), "_Self");
    }

    #[test]
    fn keeps_plain_idents() {
        assert_eq!(unkeywordize("moder".into()), "moder");
        assert_eq!(unkeywordize("types".into()), "types");
        assert_eq!(new_ident("mod").to_string(), "_mod");
    }
}
