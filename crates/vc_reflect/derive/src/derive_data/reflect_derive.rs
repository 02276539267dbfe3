use syn::{Data, DeriveInput, Fields, spanned::Spanned};

use super::{ReflectMeta, ReflectStruct, StructField, TypeAttributes, TypeParser};

/// The parsed input of `#[derive(Reflect)]`.
pub(crate) enum ReflectDerive<'a> {
    /// `struct A { .. }` and `struct A;`.
    Struct(ReflectStruct<'a>),
    /// Anything marked `#[reflect(opaque)]`.
    Opaque(ReflectMeta<'a>),
}

impl<'a> ReflectDerive<'a> {
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        let type_attributes = TypeAttributes::parse_attrs(&input.attrs)?;
        let is_opaque = type_attributes.is_opaque.is_some();

        let type_parser = TypeParser::new_local(
            &input.ident,
            type_attributes.type_path.clone(),
            &input.generics,
        );
        let meta = ReflectMeta::new(type_attributes, type_parser);

        if is_opaque {
            return Ok(Self::Opaque(meta));
        }

        match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(fields) => {
                    let fields = StructField::collect(fields.named.iter())?;
                    Ok(Self::Struct(ReflectStruct::new(meta, fields)?))
                }
                Fields::Unit => Ok(Self::Struct(ReflectStruct::new(meta, Vec::new())?)),
                Fields::Unnamed(fields) => Err(syn::Error::new(
                    fields.span(),
                    "tuple structs are not reflected, use named fields or `#[reflect(opaque)]`",
                )),
            },
            Data::Enum(data) => Err(syn::Error::new(
                data.enum_token.span(),
                "enums are not reflected, mark it `#[reflect(opaque)]`",
            )),
            Data::Union(data) => Err(syn::Error::new(
                data.union_token.span(),
                "unions are not reflected, mark it `#[reflect(opaque)]`",
            )),
        }
    }
}
