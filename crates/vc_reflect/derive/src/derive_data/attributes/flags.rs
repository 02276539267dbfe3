use proc_macro2::Span;

/// Records which standard traits the user declared as implemented.
///
/// The macro can not see trait impls, so `#[reflect(clone, hash, ..)]`
/// is the only source of this information.
#[derive(Default, Debug)]
pub(crate) struct TraitAvailableFlags {
    pub clone: Option<Span>,
    pub debug: Option<Span>,
    pub hash: Option<Span>,
    pub partial_eq: Option<Span>,
    pub partial_cmp: Option<Span>,
}

impl TraitAvailableFlags {
    /// Parse a single flag, return `false` if `ident` is not a flag.
    pub fn parse_flag(&mut self, ident: &syn::Ident) -> bool {
        let span = Some(ident.span());
        match ident.to_string().as_str() {
            "clone" => self.clone = span,
            "debug" => self.debug = span,
            "hash" => self.hash = span,
            "partial_eq" => self.partial_eq = span,
            "partial_cmp" => self.partial_cmp = span,
            "full" => {
                self.clone = span;
                self.debug = span;
                self.hash = span;
                self.partial_eq = span;
                self.partial_cmp = span;
            }
            _ => return false,
        }
        true
    }

    /// The `ValueTraits` constants matching the declared flags.
    pub fn value_trait_names(&self) -> impl Iterator<Item = &'static str> {
        [
            (self.clone, "CLONE"),
            (self.partial_eq, "PARTIAL_EQ"),
            (self.partial_cmp, "PARTIAL_CMP"),
            (self.hash, "HASH"),
            (self.debug, "DEBUG"),
        ]
        .into_iter()
        .filter_map(|(flag, name)| flag.map(|_| name))
    }
}
