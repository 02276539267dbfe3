use syn::{Generics, Ident, Path, PathSegment, Token, parenthesized, parse::ParseStream, token::Paren};

/// Parse an optional `(in module_path)` or `(in module_path as Alias)` prefix.
fn parse_custom_path(input: ParseStream) -> syn::Result<(Option<Path>, Option<Ident>)> {
    if !input.peek(Paren) {
        return Ok((None, None));
    }

    let inner;
    parenthesized!(inner in input);
    inner.parse::<Token![in]>()?;
    if inner.peek(Token![::]) {
        return Err(inner.error("did not expect a leading double colon (`::`)"));
    }
    let path = Path::parse_mod_style(&inner)?;

    let alias = if inner.peek(Token![as]) {
        inner.parse::<Token![as]>()?;
        Some(inner.parse::<Ident>()?)
    } else {
        None
    };

    Ok((Some(path), alias))
}

/// Input of [`impl_type_path`](crate::impl_type_path).
pub(crate) struct ReflectTypePathParser {
    pub custom_path: Option<Path>,
    pub type_ident: Ident,
    pub type_path: Path,
    pub generics: Generics,
}

impl ReflectTypePathParser {
    /// Format: `(in module_path as Alias) ::full::Path<T> where ..`, or a primitive ident.
    pub fn parse(input: ParseStream) -> syn::Result<Self> {
        let (custom_module, alias) = parse_custom_path(input)?;

        let type_path = Path::parse_mod_style(input)?;
        let Some(last) = type_path.segments.last() else {
            return Err(input.error("expected a type path"));
        };
        let type_ident = last.ident.clone();

        let custom_path = custom_module.map(|mut path| {
            let ident = alias.unwrap_or_else(|| type_ident.clone());
            path.segments.push(PathSegment::from(ident));
            path
        });

        let mut generics = input.parse::<Generics>()?;
        generics.where_clause = input.parse()?;

        Ok(Self {
            custom_path,
            type_ident,
            type_path,
            generics,
        })
    }
}
