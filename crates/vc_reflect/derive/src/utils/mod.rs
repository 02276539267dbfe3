mod string_expr;

pub(crate) use string_expr::StringExpr;

/// An empty token stream.
#[inline(always)]
pub(crate) fn empty() -> proc_macro2::TokenStream {
    proc_macro2::TokenStream::new()
}
