use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{LitStr, spanned::Spanned};

/// A string valued expression in generated code.
///
/// `TypePath` strings are either known at compile time (`concat!` of
/// literals and `module_path!()`) or built at runtime from the paths of
/// generic parameters. Keeping the distinction lets non generic types
/// return a `&'static str` without any allocation.
#[derive(Clone)]
pub(crate) enum StringExpr {
    /// A compile time string: a literal, or a macro expanding to one.
    Const(TokenStream),
    /// An expression of type `&'static str`.
    Borrowed(TokenStream),
    /// An expression of type `String`.
    Owned(TokenStream),
}

impl<T: ToString + Spanned> From<T> for StringExpr {
    fn from(value: T) -> Self {
        Self::Const(LitStr::new(&value.to_string(), value.span()).to_token_stream())
    }
}

impl StringExpr {
    /// A constant expression for the literal `string`.
    pub fn from_str(string: &str) -> Self {
        Self::Const(string.to_token_stream())
    }

    /// Tokens evaluating to a `&str`.
    pub fn into_borrowed(self) -> TokenStream {
        match self {
            Self::Const(tokens) | Self::Borrowed(tokens) => tokens,
            Self::Owned(owned) => quote! {
                &#owned as &str
            },
        }
    }

    /// Tokens evaluating to a `String`.
    pub fn into_owned(self, vc_reflect_path: &syn::Path) -> TokenStream {
        match self {
            Self::Const(tokens) | Self::Borrowed(tokens) => {
                let macro_utils_ = crate::path::macro_utils_(vc_reflect_path);
                quote! {
                    #macro_utils_::ToOwned::to_owned(#tokens)
                }
            }
            Self::Owned(owned) => owned,
        }
    }

    /// Concatenates the expressions in order.
    ///
    /// Constant parts only are merged with `concat!`, anything else goes
    /// through `impls::concat` at runtime.
    pub fn concat<T: IntoIterator<Item = StringExpr>>(iter: T, vc_reflect_path: &syn::Path) -> Self {
        let exprs: Vec<StringExpr> = iter.into_iter().collect();

        let consts = exprs
            .iter()
            .map(|expr| match expr {
                Self::Const(tokens) => Some(tokens),
                _ => None,
            })
            .collect::<Option<Vec<&TokenStream>>>();

        if let Some(consts) = consts {
            return Self::Const(quote! {
                ::core::concat!( #(#consts),* )
            });
        }

        let macro_utils_ = crate::path::macro_utils_(vc_reflect_path);
        let inner = exprs.into_iter().map(StringExpr::into_borrowed);

        Self::Owned(quote! {
            #macro_utils_::__concat(&[ #(#inner),* ])
        })
    }
}
