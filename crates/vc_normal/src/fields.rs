use alloc::boxed::Box;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use std::sync::{PoisonError, RwLock};

use vc_reflect::Reflect;
use vc_reflect::info::TypeInfo;
use vc_utils::TypeIdMap;

// -----------------------------------------------------------------------------
// Member

/// A readable member of a struct, possibly declared by a base.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Member {
    name: String,
    path: Box<[usize]>,
}

impl Member {
    /// The exposed name, prefixed with one `.` per base level when it is
    /// shadowed by a member of a more derived level.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Field indices leading from the subject to the member.
    #[inline]
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// Number of base levels between the subject and the declaring type.
    #[inline]
    pub fn depth(&self) -> usize {
        self.path.len() - 1
    }

    /// Reads the member from `subject`.
    ///
    /// Returns `None` if the subject does not have the expected shape.
    pub fn read<'a>(&self, subject: &'a dyn Reflect) -> Option<&'a dyn Reflect> {
        let mut current = subject;
        for &index in self.path.iter() {
            current = current.reflect_ref().as_struct().ok()?.field_at(index)?;
        }
        Some(current)
    }
}

// -----------------------------------------------------------------------------
// FieldMapper

static MEMBERS: RwLock<TypeIdMap<Arc<[Member]>>> = RwLock::new(TypeIdMap::new());

/// Lists the readable members of struct types.
///
/// The members of a type are its own reflected fields followed by those
/// of its base chain. The base field itself is not a member unless its
/// type is not a struct. A name declared at base depth `d` that is also
/// declared closer to the subject is exposed as `"."` repeated `d` times
/// followed by the name.
///
/// Results are computed once per type and shared process wide.
///
/// # Examples
///
/// ```
/// use vc_normal::FieldMapper;
/// use vc_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct Named { id: u32, name: String }
///
/// #[derive(Reflect)]
/// struct Item {
///     #[reflect(base)]
///     named: Named,
///     name: String,
/// }
///
/// let names: Vec<_> = FieldMapper::fields_of(Item::type_info())
///     .iter()
///     .map(|m| m.name().to_owned())
///     .collect();
/// assert_eq!(names, [".name", "id", "name"]);
/// ```
pub struct FieldMapper;

impl FieldMapper {
    /// Members of `info`, sorted by name. Empty for non-struct types.
    pub fn fields_of(info: &'static TypeInfo) -> Arc<[Member]> {
        let type_id = info.ty_id();

        if let Some(members) = MEMBERS
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
        {
            return members.clone();
        }

        let members: Arc<[Member]> = collect_members(info).into();
        log::trace!("mapped {} members of `{}`", members.len(), info.type_path());

        MEMBERS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .get_or_insert(type_id, || members)
            .clone()
    }
}

fn collect_members(info: &'static TypeInfo) -> Vec<Member> {
    // (depth, declared name, path)
    let mut declared: Vec<(usize, &'static str, Vec<usize>)> = Vec::new();

    let mut current = info;
    let mut prefix: Vec<usize> = Vec::new();
    let mut depth = 0;

    while let Ok(struct_info) = current.as_struct() {
        let base = struct_info.base_index();
        let mut next = None;

        for (index, field) in struct_info.iter().enumerate() {
            let mut path = prefix.clone();
            path.push(index);

            let field_info = field.type_info();
            if base == Some(index) && field_info.is_struct() {
                next = Some((field_info, path));
            } else {
                declared.push((depth, field.name(), path));
            }
        }

        let Some((base_info, base_path)) = next else {
            break;
        };
        current = base_info;
        prefix = base_path;
        depth += 1;
    }

    let mut members: Vec<Member> = declared
        .iter()
        .map(|(depth, name, path)| {
            let shadowed = declared.iter().any(|(d, n, _)| d < depth && n == name);
            let mut exposed = String::new();
            if shadowed {
                exposed.extend(core::iter::repeat_n('.', *depth));
            }
            exposed.push_str(name);

            Member {
                name: exposed,
                path: path.as_slice().into(),
            }
        })
        .collect();

    members.sort_by(|a, b| a.name.cmp(&b.name));
    members
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use vc_reflect::derive::Reflect;
    use vc_reflect::info::Typed;

    use super::FieldMapper;

    #[derive(Reflect)]
    struct Origin {
        x: u8,
        y: u8,
    }

    #[derive(Reflect)]
    struct Middle {
        #[reflect(base)]
        origin: Origin,
        x: u8,
    }

    #[derive(Reflect)]
    struct Leaf {
        #[reflect(base)]
        middle: Middle,
        x: u8,
        z: u8,
    }

    #[derive(Reflect)]
    struct Wrapped {
        #[reflect(base)]
        inner: u32,
        #[reflect(ignore)]
        _cache: u32,
    }

    fn names<T: Typed>() -> Vec<String> {
        FieldMapper::fields_of(T::type_info())
            .iter()
            .map(|m| String::from(m.name()))
            .collect()
    }

    #[test]
    fn shadowed_names_get_one_dot_per_level() {
        assert_eq!(names::<Leaf>(), ["..x", ".x", "x", "y", "z"]);
        assert_eq!(names::<Middle>(), [".x", "x", "y"]);
        assert_eq!(names::<Origin>(), ["x", "y"]);
    }

    #[test]
    fn members_read_through_the_base_chain() {
        let leaf = Leaf {
            middle: Middle {
                origin: Origin { x: 1, y: 2 },
                x: 3,
            },
            x: 4,
            z: 5,
        };

        let members = FieldMapper::fields_of(Leaf::type_info());
        let read: Vec<(usize, u8)> = members
            .iter()
            .map(|m| (m.depth(), *m.read(&leaf).unwrap().downcast_ref::<u8>().unwrap()))
            .collect();
        assert_eq!(read, [(2, 1), (1, 3), (0, 4), (2, 2), (0, 5)]);
    }

    #[test]
    fn non_struct_base_is_a_member() {
        assert_eq!(names::<Wrapped>(), ["inner"]);
        assert!(names::<u32>().is_empty());
    }

    #[test]
    fn read_fails_on_other_shapes() {
        let members = FieldMapper::fields_of(Origin::type_info());
        assert!(members[0].read(&7_u8).is_none());
    }

    #[test]
    fn members_are_shared() {
        let a = FieldMapper::fields_of(Leaf::type_info());
        let b = FieldMapper::fields_of(Leaf::type_info());
        assert!(alloc::sync::Arc::ptr_eq(&a, &b));
    }
}
