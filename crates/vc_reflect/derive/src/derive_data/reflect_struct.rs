use proc_macro2::TokenStream;
use quote::quote;
use syn::{Field, Member};

use super::{FieldAttributes, ReflectMeta};

/// A field of a reflected struct.
pub(crate) struct StructField<'a> {
    pub data: &'a Field,
    pub attrs: FieldAttributes,
    /// Position in the source declaration.
    pub declaration_index: usize,
    /// Position among reflected fields, `None` if ignored.
    pub reflection_index: Option<usize>,
}

impl<'a> StructField<'a> {
    /// Parses the attributes of named fields.
    pub fn collect(fields: impl Iterator<Item = &'a Field>) -> syn::Result<Vec<Self>> {
        let mut reflection_index = 0;
        fields
            .enumerate()
            .map(|(declaration_index, data)| {
                let attrs = FieldAttributes::parse_attrs(&data.attrs)?;
                let index = if attrs.ignore.is_some() {
                    None
                } else {
                    reflection_index += 1;
                    Some(reflection_index - 1)
                };
                Ok(Self {
                    data,
                    attrs,
                    declaration_index,
                    reflection_index: index,
                })
            })
            .collect()
    }

    /// `self.#member`.
    pub fn member(&self) -> Member {
        match &self.data.ident {
            Some(ident) => Member::Named(ident.clone()),
            None => Member::Unnamed(self.declaration_index.into()),
        }
    }

    /// The field name as a string.
    pub fn name(&self) -> String {
        match &self.data.ident {
            Some(ident) => ident.to_string(),
            None => self.declaration_index.to_string(),
        }
    }

    /// `NamedField::new::<Ty>("name").with_docs(..)`
    fn to_info_tokens(&self, vc_reflect_path: &syn::Path) -> TokenStream {
        let named_field_ = crate::path::named_field_(vc_reflect_path);
        let ty = &self.data.ty;
        let name = self.name();
        let with_docs = self.attrs.docs.get_expression_with();

        quote! {
            #named_field_::new::<#ty>(#name) #with_docs
        }
    }
}

/// A struct with named fields (or none).
pub(crate) struct ReflectStruct<'a> {
    meta: ReflectMeta<'a>,
    fields: Vec<StructField<'a>>,
}

impl<'a> ReflectStruct<'a> {
    pub fn new(mut meta: ReflectMeta<'a>, fields: Vec<StructField<'a>>) -> syn::Result<Self> {
        let mut bases = fields.iter().filter_map(|field| field.attrs.base);
        if let (Some(_), Some(second)) = (bases.next(), bases.next()) {
            return Err(syn::Error::new(second, "a struct can have at most one base field"));
        }

        meta.set_active_types(
            fields
                .iter()
                .filter(|field| field.reflection_index.is_some())
                .map(|field| &field.data.ty),
        );

        Ok(Self { meta, fields })
    }

    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    pub fn active_fields(&self) -> impl Iterator<Item = &StructField<'a>> {
        self.fields
            .iter()
            .filter(|field| field.reflection_index.is_some())
    }

    pub fn has_ignored_field(&self) -> bool {
        self.fields
            .iter()
            .any(|field| field.reflection_index.is_none())
    }

    /// Reflection index of the base field.
    fn base_index(&self) -> Option<usize> {
        self.active_fields()
            .find(|field| field.attrs.base.is_some())
            .and_then(|field| field.reflection_index)
    }

    /// `TypeInfo::Struct(StructInfo::new::<Self>(&[..]).with_traits(..).with_base(i).with_docs(..))`
    pub fn to_info_tokens(&self) -> TokenStream {
        let vc_reflect_path = self.meta.vc_reflect_path();
        let type_info_ = crate::path::type_info_(vc_reflect_path);
        let struct_info_ = crate::path::struct_info_(vc_reflect_path);

        let fields = self
            .active_fields()
            .map(|field| field.to_info_tokens(vc_reflect_path));
        let with_base = self.base_index().map(|index| quote!(.with_base(#index)));
        let traits = self.meta.value_traits_tokens();
        let with_docs = self.meta.with_docs_expression();

        quote! {
            #type_info_::Struct(
                #struct_info_::new::<Self>(&[ #(#fields),* ])
                    .with_traits(#traits)
                    #with_base
                    #with_docs
            )
        }
    }

    /// Accessors of the active fields, in reflection order.
    pub fn accessors(&self) -> FieldAccessors {
        let reflect_ = crate::path::reflect_(self.meta.vc_reflect_path());

        let mut res = FieldAccessors::default();
        for field in self.active_fields() {
            let member = field.member();
            res.fields_ref
                .push(quote!(#reflect_::as_reflect(&self.#member)));
            res.field_names.push(field.name());
            res.field_indices.push(field.reflection_index.unwrap_or_default());
            res.field_count += 1;
        }
        res
    }
}

/// Tokens to reach each reflected field of `self`.
#[derive(Default)]
pub(crate) struct FieldAccessors {
    /// `Reflect::as_reflect(&self.field)`
    pub fields_ref: Vec<TokenStream>,
    pub field_names: Vec<String>,
    pub field_indices: Vec<usize>,
    pub field_count: usize,
}

impl core::fmt::Debug for FieldAccessors {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FieldAccessors")
            .field("field_names", &self.field_names)
            .field("field_count", &self.field_count)
            .finish()
    }
}
