//! Fully qualified paths of standard items.
//!
//! Generated code must not depend on what the user has imported,
//! so `Option` is written as `::core::option::Option` and so on.

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

macro_rules! fully_qualified {
    ($($name:ident = [$($path:tt)+];)*) => {$(
        pub(crate) struct $name;

        impl ToTokens for $name {
            #[inline]
            fn to_tokens(&self, tokens: &mut TokenStream) {
                tokens.extend(quote!($($path)+));
            }
        }
    )*};
}

fully_qualified! {
    AnyFP = [::core::any::Any];
    SendFP = [::core::marker::Send];
    SyncFP = [::core::marker::Sync];
    OptionFP = [::core::option::Option];
    ResultFP = [::core::result::Result];
    CloneFP = [::core::clone::Clone];
    PartialEqFP = [::core::cmp::PartialEq];
    PartialOrdFP = [::core::cmp::PartialOrd];
    HashFP = [::core::hash::Hash];
    HasherFP = [::core::hash::Hasher];
    DebugFP = [::core::fmt::Debug];
}
