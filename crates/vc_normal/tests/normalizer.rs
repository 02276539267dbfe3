use std::collections::{BTreeMap, HashMap, HashSet};

use vc_normal::{Normal, NormalError, NormalKind, Normalizer, NormalizerBuilder, Rule, Void};
use vc_reflect::Reflect;
use vc_reflect::derive::Reflect;
use vc_reflect::info::{TypePath, Typed};

#[derive(Reflect)]
struct Order {
    count: u32,
    label: String,
    tags: HashSet<String>,
}

#[derive(Reflect)]
struct Owned {
    count: u32,
    owner: Option<String>,
}

#[derive(Reflect)]
struct Entity {
    id: u64,
    name: String,
}

#[derive(Reflect)]
struct Named {
    #[reflect(base)]
    entity: Entity,
    name: String,
}

#[derive(Reflect)]
struct Tagged {
    #[reflect(base)]
    named: Named,
    name: String,
    id: u64,
}

#[derive(Reflect)]
struct Scratch {
    value: u8,
    #[reflect(ignore)]
    _buffer: Vec<u8>,
}

/// Not self-describing: no declared equality, hash or debug.
#[derive(Reflect, Clone)]
#[reflect(opaque, clone, type_path = "tests::Handle")]
struct Handle(u32);

#[derive(Reflect, Clone, PartialEq, Hash, Debug)]
#[reflect(opaque, clone, partial_eq, hash, debug, type_path = "tests::Color")]
struct Color(u8, u8, u8);

/// A struct that opts into value semantics.
#[derive(Reflect, Clone, PartialEq, Hash, Debug)]
#[reflect(clone, partial_eq, hash, debug)]
struct Money {
    cents: i64,
    currency: String,
}

#[derive(Reflect)]
struct Invoice {
    total: Money,
    paid: bool,
}

fn order() -> Order {
    Order {
        count: 3,
        label: "abc".into(),
        tags: ["a".into(), "b".into()].into(),
    }
}

#[test]
fn order_normalizes_to_fields() {
    let normal = Normalizer::new().normal(&order()).unwrap();

    let expected = Normal::fields([
        ("count", Normal::value(3_u32)),
        ("label", Normal::value(String::from("abc"))),
        (
            "tags",
            Normal::set([
                Normal::value(String::from("a")),
                Normal::value(String::from("b")),
            ]),
        ),
    ]);
    assert_eq!(normal, expected);
}

#[test]
fn equal_values_have_equal_normals() {
    let normalizer = Normalizer::new();
    let mut other = order();
    other.tags = ["b".into(), "a".into(), "a".into()].into();

    assert_eq!(normalizer.normal(&order()), normalizer.normal(&other));

    other.count = 4;
    assert_ne!(normalizer.normal(&order()), normalizer.normal(&other));
}

#[test]
fn none_is_absent_whatever_the_static_type() {
    let normalizer = Normalizer::new();
    let normal = normalizer
        .normal(&Owned {
            count: 1,
            owner: None,
        })
        .unwrap();
    assert_eq!(normal.get("owner"), Some(&Normal::Absent));

    let normal = normalizer
        .normal(&Owned {
            count: 1,
            owner: Some("me".into()),
        })
        .unwrap();
    assert_eq!(normal.get("owner"), Some(&Normal::value(String::from("me"))));

    assert_eq!(normalizer.normal(&None::<Order>), Ok(Normal::Absent));
    assert_eq!(normalizer.normal(&None::<Vec<u8>>), Ok(Normal::Absent));
    assert_eq!(normalizer.normal(&Void), Ok(Normal::Absent));
}

#[test]
fn base_members_are_flattened_and_shadowed() {
    let tagged = Tagged {
        named: Named {
            entity: Entity {
                id: 1,
                name: "entity".into(),
            },
            name: "named".into(),
        },
        name: "tagged".into(),
        id: 2,
    };

    let normal = Normalizer::new().normal(&tagged).unwrap();
    let fields = normal.as_fields().unwrap();

    let names: Vec<&str> = fields.keys().map(String::as_str).collect();
    assert_eq!(names, ["..id", "..name", ".name", "id", "name"]);
    assert_eq!(fields["..id"], Normal::value(1_u64));
    assert_eq!(fields["..name"], Normal::value(String::from("entity")));
    assert_eq!(fields[".name"], Normal::value(String::from("named")));
    assert_eq!(fields["name"], Normal::value(String::from("tagged")));
    assert_eq!(fields["id"], Normal::value(2_u64));
}

#[test]
fn unshadowed_base_members_keep_their_names() {
    let named = Named {
        entity: Entity {
            id: 7,
            name: "entity".into(),
        },
        name: "named".into(),
    };

    let normal = Normalizer::new().normal(&named).unwrap();
    assert_eq!(normal.get("id"), Some(&Normal::value(7_u64)));
    assert_eq!(normal.get(".name"), Some(&Normal::value(String::from("entity"))));
    assert_eq!(normal.get("name"), Some(&Normal::value(String::from("named"))));
    assert!(normal.get("entity").is_none());
}

#[test]
fn arrays_keep_order() {
    let normalizer = Normalizer::new();
    let normal = normalizer.normal(&[3_u8, 1, 3]).unwrap();
    assert_eq!(
        normal,
        Normal::sequence([Normal::value(3_u8), Normal::value(1_u8), Normal::value(3_u8)])
    );
    assert_ne!(normal, normalizer.normal(&[1_u8, 3, 3]).unwrap());
    assert_eq!(normalizer.normal(&[0_u8; 0]), Ok(Normal::sequence([])));
}

#[test]
fn lists_of_options_keep_absent_items() {
    let normal = Normalizer::new().normal(&vec![Some(1_i32), None]).unwrap();
    assert_eq!(normal, Normal::sequence([Normal::value(1_i32), Normal::Absent]));
}

#[test]
fn sets_collapse_equal_normals() {
    let normalizer = Normalizer::new();
    let tags: HashSet<Option<u8>> = [Some(1), None, Some(2)].into();
    let normal = normalizer.normal(&tags).unwrap();
    assert_eq!(normal.kind(), NormalKind::Set);
    assert_eq!(normal.as_set().unwrap().len(), 3);

    // Both entities decompose to the same fields.
    let entities: Vec<Entity> = vec![
        Entity {
            id: 1,
            name: "a".into(),
        },
        Entity {
            id: 1,
            name: "a".into(),
        },
    ];
    let sequence = normalizer.normal(&entities).unwrap();
    let items = sequence.as_sequence().unwrap();
    assert_eq!(items[0], items[1]);
}

#[test]
fn maps_collapse_equal_keys() {
    let normalizer = Normalizer::new();

    let mut map: HashMap<Option<u8>, String> = HashMap::new();
    map.insert(Some(1), "a".into());
    map.insert(None, "b".into());
    let normal = normalizer.normal(&map).unwrap();
    assert_eq!(
        normal,
        Normal::mapping([
            (Normal::Absent, Normal::value(String::from("b"))),
            (Normal::value(1_u8), Normal::value(String::from("a"))),
        ])
    );

    let ordered: BTreeMap<u8, Option<u8>> = [(2, None), (1, Some(9))].into();
    assert_eq!(normalizer.normal(&ordered).unwrap().to_string(), "{1: 9, 2: absent}");
}

#[test]
fn normalization_is_deterministic() {
    let first = Normalizer::new().normal(&order()).unwrap();
    let normalizer = Normalizer::new();
    for _ in 0..4 {
        assert_eq!(normalizer.normal(&order()).unwrap(), first);
    }
    assert_eq!(first.to_string(), r#"{count: 3, label: "abc", tags: {"a", "b"}}"#);
}

#[test]
fn concurrent_normalization() {
    let normalizer = Normalizer::new();
    let expected = Normalizer::new().normal(&order()).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| normalizer.normal(&order())))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().as_ref(), Ok(&expected));
        }
    });

    // Order, u32, String and HashSet<String>.
    assert_eq!(normalizer.cached_len(), 4);
}

#[test]
fn empty_builder_resolves_nothing() {
    let normalizer = NormalizerBuilder::empty().build();
    let err = normalizer.normal(&order()).unwrap_err();
    assert_eq!(
        err,
        NormalError::UnresolvableType {
            type_path: Order::type_path(),
        }
    );
    assert!(err.to_string().contains("no normal rule"));
}

#[test]
fn closed_builder_fails_on_structs_only() {
    let normalizer = Normalizer::builder().with_collections().without_fallback().build();
    assert!(normalizer.normal(&vec![1_u8]).is_ok());
    assert!(matches!(
        normalizer.normal(&Entity {
            id: 0,
            name: String::new(),
        }),
        Err(NormalError::UnresolvableType { .. })
    ));
}

#[test]
fn explicit_rules_win() {
    let normalizer = Normalizer::builder()
        .with_collections()
        .add_rule::<String, _>(|_, s| Ok(Normal::value(s.len())))
        .add_rule::<Entity, _>(|normalizer, e| normalizer.normal(&e.id))
        .build();

    let entity = Entity {
        id: 5,
        name: "five".into(),
    };
    assert_eq!(normalizer.normal(&entity), Ok(Normal::value(5_u64)));
    assert_eq!(
        normalizer.normal(&vec![String::from("ab")]),
        Ok(Normal::sequence([Normal::value(2_usize)]))
    );
}

#[test]
fn producers_first_override_builtins() {
    let normalizer = Normalizer::builder()
        .with_collections()
        .add_producer_first(
            |info| info.is_list(),
            |_| Rule::new(|normalizer, subject| {
                let list = subject.reflect_ref().as_list().map_err(|_| NormalError::MismatchedSubject {
                    expected: "list",
                    found: "other",
                })?;
                normalizer.normal_unique(list.iter())
            }),
        )
        .build();

    let normal = normalizer.normal(&vec![2_u8, 1, 2]).unwrap();
    assert_eq!(normal, Normal::set([Normal::value(1_u8), Normal::value(2_u8)]));
}

#[test]
fn producers_appended_after_builtins() {
    let normalizer = Normalizer::builder()
        .add_producer(
            |info| info.type_is::<Handle>(),
            |_| Rule::typed::<Handle, _>(|_, handle| Ok(Normal::value(handle.0))),
        )
        .build();

    assert_eq!(normalizer.normal(&Handle(4)), Ok(Normal::value(4_u32)));
}

#[test]
fn opaque_types() {
    let normalizer = Normalizer::new();
    assert_eq!(normalizer.normal(&Color(1, 2, 3)), Ok(Normal::value(Color(1, 2, 3))));
    assert_ne!(normalizer.normal(&Color(1, 2, 3)), normalizer.normal(&Color(3, 2, 1)));

    // Without a rule an opaque type has no members.
    assert_eq!(normalizer.normal(&Handle(4)), Ok(Normal::fields::<String>([])));

    let normalizer = Normalizer::builder().add_opaque::<Handle>().build();
    let normal = normalizer.normal(&Handle(4)).unwrap();
    assert_eq!(normal.downcast_ref::<Handle>().map(|h| h.0), Some(4));
}

#[test]
fn self_describing_structs_are_values() {
    let normalizer = Normalizer::new();
    let money = Money {
        cents: 1250,
        currency: "EUR".into(),
    };

    let normal = normalizer.normal(&money).unwrap();
    assert_eq!(normal.kind(), NormalKind::Value);
    assert_eq!(normal, Normal::value(money.clone()));
    assert_eq!(normal.downcast_ref::<Money>(), Some(&money));

    let invoice = Invoice {
        total: money,
        paid: false,
    };
    let normal = normalizer.normal(&invoice).unwrap();
    assert_eq!(normal.get("total").map(Normal::kind), Some(NormalKind::Value));
    assert_eq!(normal.get("paid"), Some(&Normal::value(false)));
}

#[test]
fn rules_reject_other_subjects() {
    let rule = Rule::typed::<Entity, _>(|_, e| Ok(Normal::value(e.id)));
    let err = rule.apply(&Normalizer::new(), &1_u8).unwrap_err();
    assert_eq!(
        err,
        NormalError::MismatchedSubject {
            expected: Entity::type_path(),
            found: "u8",
        }
    );
}

#[test]
fn inaccessible_member() {
    let normalizer = Normalizer::new();
    let rule = normalizer.rule_for(Entity::type_info()).unwrap();

    let err = rule.apply(&normalizer, &String::from("not an entity")).unwrap_err();
    assert!(matches!(err, NormalError::InaccessibleMember { ref member, .. } if member == "id"));
}

#[test]
fn uncloneable_values_fail() {
    let normalizer = Normalizer::builder().add_opaque::<Scratch>().build();
    let scratch = Scratch {
        value: 1,
        _buffer: Vec::new(),
    };
    assert!(matches!(
        normalizer.normal(&scratch),
        Err(NormalError::NotCloneable(_))
    ));
}

#[test]
fn reflected_values_are_dispatched_on_their_runtime_type() {
    let boxed: Box<dyn Reflect> = Box::new(order());
    let normalizer = Normalizer::new();
    assert_eq!(normalizer.normal(&*boxed), normalizer.normal_of(&order()));
}
