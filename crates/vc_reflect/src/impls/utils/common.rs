use core::fmt;
use core::hash::{Hash, Hasher};

use crate::Reflect;
use crate::ops::{Array, List, Map, Optional, ReflectRef, Set, Struct};

// Non Inline: only be compiled once -> reduce compilation times

// -----------------------------------------------------------------------------
// Array

/// Element-wise equality for [`Array`], used to impl [`Reflect::reflect_partial_eq`].
#[inline(never)]
pub fn array_partial_eq(x: &dyn Array, y: &dyn Reflect) -> Option<bool> {
    let ReflectRef::Array(y) = y.reflect_ref() else {
        return Some(false);
    };

    if x.len() != y.len() {
        return Some(false);
    }

    for (item, y_item) in x.iter().zip(y.iter()) {
        let result = item.reflect_partial_eq(y_item);
        if result != Some(true) {
            return result;
        }
    }

    Some(true)
}

/// Ordered hash for [`Array`], used to impl [`Reflect::reflect_hash`].
#[inline(never)]
pub fn array_hash(x: &dyn Array) -> Option<u64> {
    let mut hasher = crate::reflect_hasher();

    for value in x.iter() {
        hasher.write_u64(value.reflect_hash()?);
    }

    x.ty_id().hash(&mut hasher);
    x.len().hash(&mut hasher);

    Some(hasher.finish())
}

/// Debug output for [`Array`], used to impl [`Reflect::reflect_debug`].
#[inline(never)]
pub fn array_debug(dyn_array: &dyn Array, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_list();
    for item in dyn_array.iter() {
        debug.entry(&item as &dyn fmt::Debug);
    }
    debug.finish()
}

// -----------------------------------------------------------------------------
// List

/// Element-wise equality for [`List`], used to impl [`Reflect::reflect_partial_eq`].
#[inline(never)]
pub fn list_partial_eq(x: &dyn List, y: &dyn Reflect) -> Option<bool> {
    let ReflectRef::List(y) = y.reflect_ref() else {
        return Some(false);
    };

    if x.len() != y.len() {
        return Some(false);
    }

    for (item, y_item) in x.iter().zip(y.iter()) {
        let result = item.reflect_partial_eq(y_item);
        if result != Some(true) {
            return result;
        }
    }

    Some(true)
}

/// Ordered hash for [`List`], used to impl [`Reflect::reflect_hash`].
#[inline(never)]
pub fn list_hash(x: &dyn List) -> Option<u64> {
    let mut hasher = crate::reflect_hasher();

    for value in x.iter() {
        hasher.write_u64(value.reflect_hash()?);
    }

    x.ty_id().hash(&mut hasher);
    x.len().hash(&mut hasher);

    Some(hasher.finish())
}

/// Debug output for [`List`], used to impl [`Reflect::reflect_debug`].
#[inline(never)]
pub fn list_debug(dyn_list: &dyn List, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_list();
    for item in dyn_list.iter() {
        debug.entry(&item as &dyn fmt::Debug);
    }
    debug.finish()
}

// -----------------------------------------------------------------------------
// Struct

/// Field-wise equality for [`Struct`], used to impl [`Reflect::reflect_partial_eq`].
///
/// Structs of different types are never equal.
#[inline(never)]
pub fn struct_partial_eq(x: &dyn Struct, y: &dyn Reflect) -> Option<bool> {
    let ReflectRef::Struct(y) = y.reflect_ref() else {
        return Some(false);
    };

    if x.ty_id() != y.ty_id() || x.field_len() != y.field_len() {
        return Some(false);
    }

    for (name, y_field) in y.iter_fields() {
        let Some(x_field) = x.field(name) else {
            return Some(false);
        };
        let result = x_field.reflect_partial_eq(y_field);
        if result != Some(true) {
            return result;
        }
    }
    Some(true)
}

/// Field-wise hash for [`Struct`], used to impl [`Reflect::reflect_hash`].
#[inline(never)]
pub fn struct_hash(x: &dyn Struct) -> Option<u64> {
    let mut hasher = crate::reflect_hasher();

    for (_, field) in x.iter_fields() {
        hasher.write_u64(field.reflect_hash()?);
    }

    x.ty_id().hash(&mut hasher);
    x.field_len().hash(&mut hasher);

    Some(hasher.finish())
}

/// Debug output for [`Struct`], used to impl [`Reflect::reflect_debug`].
#[inline(never)]
pub fn struct_debug(dyn_struct: &dyn Struct, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_struct(dyn_struct.reflect_type_name());
    for (name, field) in dyn_struct.iter_fields() {
        debug.field(name, &field as &dyn fmt::Debug);
    }
    debug.finish()
}

// -----------------------------------------------------------------------------
// Set

/// Membership equality for [`Set`], used to impl [`Reflect::reflect_partial_eq`].
#[inline(never)]
pub fn set_partial_eq(x: &dyn Set, y: &dyn Reflect) -> Option<bool> {
    let ReflectRef::Set(y) = y.reflect_ref() else {
        return Some(false);
    };

    if x.len() != y.len() {
        return Some(false);
    }

    for val in x.iter() {
        let Some(y_val) = y.get(val) else {
            return Some(false);
        };
        let result = val.reflect_partial_eq(y_val);
        if result != Some(true) {
            return result;
        }
    }
    Some(true)
}

/// Order independent hash for [`Set`], used to impl [`Reflect::reflect_hash`].
#[inline(never)]
pub fn set_hash(x: &dyn Set) -> Option<u64> {
    let mut sum = 0_u64;
    for item in x.iter() {
        sum = sum.wrapping_add(item.reflect_hash()?);
    }

    let mut hasher = crate::reflect_hasher();
    hasher.write_u64(sum);
    x.ty_id().hash(&mut hasher);
    x.len().hash(&mut hasher);

    Some(hasher.finish())
}

/// Debug output for [`Set`], used to impl [`Reflect::reflect_debug`].
#[inline(never)]
pub fn set_debug(dyn_set: &dyn Set, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_set();
    for value in dyn_set.iter() {
        debug.entry(&value as &dyn fmt::Debug);
    }
    debug.finish()
}

// -----------------------------------------------------------------------------
// Map

/// Entry-wise equality for [`Map`], used to impl [`Reflect::reflect_partial_eq`].
#[inline(never)]
pub fn map_partial_eq(x: &dyn Map, y: &dyn Reflect) -> Option<bool> {
    let ReflectRef::Map(y) = y.reflect_ref() else {
        return Some(false);
    };

    if x.len() != y.len() {
        return Some(false);
    }

    for (key, val) in x.iter() {
        let Some(y_val) = y.get(key) else {
            return Some(false);
        };
        let result = val.reflect_partial_eq(y_val);
        if result != Some(true) {
            return result;
        }
    }

    Some(true)
}

/// Order independent hash for [`Map`], used to impl [`Reflect::reflect_hash`].
#[inline(never)]
pub fn map_hash(x: &dyn Map) -> Option<u64> {
    let mut sum = 0_u64;
    for (key, val) in x.iter() {
        let mut entry = crate::reflect_hasher();
        entry.write_u64(key.reflect_hash()?);
        entry.write_u64(val.reflect_hash()?);
        sum = sum.wrapping_add(entry.finish());
    }

    let mut hasher = crate::reflect_hasher();
    hasher.write_u64(sum);
    x.ty_id().hash(&mut hasher);
    x.len().hash(&mut hasher);

    Some(hasher.finish())
}

/// Debug output for [`Map`], used to impl [`Reflect::reflect_debug`].
#[inline(never)]
pub fn map_debug(dyn_map: &dyn Map, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_map();
    for (key, value) in dyn_map.iter() {
        debug.entry(&key as &dyn fmt::Debug, &value as &dyn fmt::Debug);
    }
    debug.finish()
}

// -----------------------------------------------------------------------------
// Optional

/// Equality for [`Optional`], used to impl [`Reflect::reflect_partial_eq`].
#[inline(never)]
pub fn optional_partial_eq(x: &dyn Optional, y: &dyn Reflect) -> Option<bool> {
    let ReflectRef::Optional(y) = y.reflect_ref() else {
        return Some(false);
    };

    match (x.value(), y.value()) {
        (Some(x), Some(y)) => x.reflect_partial_eq(y),
        (None, None) => Some(x.ty_id() == y.ty_id()),
        _ => Some(false),
    }
}

/// Hash for [`Optional`], used to impl [`Reflect::reflect_hash`].
#[inline(never)]
pub fn optional_hash(x: &dyn Optional) -> Option<u64> {
    let mut hasher = crate::reflect_hasher();

    x.ty_id().hash(&mut hasher);
    match x.value() {
        Some(value) => {
            hasher.write_u8(1);
            hasher.write_u64(value.reflect_hash()?);
        }
        None => hasher.write_u8(0),
    }

    Some(hasher.finish())
}

/// Debug output for [`Optional`], used to impl [`Reflect::reflect_debug`].
#[inline(never)]
pub fn optional_debug(dyn_optional: &dyn Optional, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match dyn_optional.value() {
        Some(value) => f.debug_tuple("Some").field(&value as &dyn fmt::Debug).finish(),
        None => f.write_str("None"),
    }
}
