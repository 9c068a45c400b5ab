use cinnabar_models::catalog::{
    self, CODE_SYSTEM_CONCEPT, CONTRACT_TERM, IMPLEMENTATION_GUIDE_PAGE, PARAMETERS_PARAMETER,
    PLAN_DEFINITION_ACTION, QUESTIONNAIRE_ITEM, REQUEST_GROUP_ACTION, STRUCTURE_MAP_GROUP_RULE,
    VALUE_SET_EXPANSION_CONTAINS,
};
use cinnabar_models::{r4, FieldKind, PrimitiveType, ShapeKind, StructureShape};
use std::collections::HashSet;

/// Every shape reachable from the registry, each visited once.
fn reachable_shapes() -> Vec<&'static StructureShape> {
    let registry = r4();
    let mut stack: Vec<&'static StructureShape> = registry
        .resource_types()
        .into_iter()
        .filter_map(|name| registry.resource(name))
        .chain(
            registry
                .datatype_names()
                .into_iter()
                .filter_map(|name| registry.datatype(name)),
        )
        .collect();
    let mut seen = HashSet::new();
    let mut shapes = Vec::new();
    while let Some(shape) = stack.pop() {
        if !seen.insert(shape as *const StructureShape) {
            continue;
        }
        shapes.push(shape);
        for field in shape.all_fields() {
            if let FieldKind::Backbone(child) = field.kind {
                stack.push(child);
            }
        }
    }
    shapes
}

fn resolves(type_code: &str) -> bool {
    PrimitiveType::from_code(type_code).is_some() || r4().datatype(type_code).is_some()
}

#[test]
fn every_type_reference_resolves() {
    for shape in reachable_shapes() {
        for field in shape.all_fields() {
            match field.kind {
                FieldKind::Complex(name) => assert!(
                    resolves(name),
                    "{}.{} refers to unknown type {name}",
                    shape.name,
                    field.name
                ),
                FieldKind::Choice(types) => {
                    assert!(!types.is_empty(), "{}.{}[x] has no variants", shape.name, field.name);
                    for ty in types {
                        assert!(
                            resolves(ty),
                            "{}.{}[x] allows unknown type {ty}",
                            shape.name,
                            field.name
                        );
                    }
                }
                _ => {}
            }
        }
    }
}

#[test]
fn field_names_are_unique_per_shape() {
    for shape in reachable_shapes() {
        let mut names = HashSet::new();
        for field in shape.all_fields() {
            assert!(
                names.insert(field.name),
                "{} declares {} twice",
                shape.name,
                field.name
            );
        }
    }
}

#[test]
fn choice_keys_do_not_collide_with_fields() {
    for shape in reachable_shapes() {
        for field in shape.all_fields() {
            let FieldKind::Choice(types) = field.kind else {
                continue;
            };
            for ty in types {
                let key = field.choice_key(ty);
                let resolved = shape.resolve_key(&key).unwrap();
                assert_eq!(resolved.def.name, field.name, "{}.{key}", shape.name);
                assert_eq!(resolved.choice, Some(*ty));
            }
        }
    }
}

#[test]
fn bindings_are_on_code_fields() {
    for shape in reachable_shapes() {
        for field in shape.all_fields() {
            if let Some(codes) = field.binding {
                assert!(!codes.is_empty(), "{}.{}", shape.name, field.name);
                assert!(
                    matches!(field.kind, FieldKind::Primitive(PrimitiveType::Code)),
                    "{}.{} is bound but not a code",
                    shape.name,
                    field.name
                );
            }
        }
    }
}

#[test]
fn recursive_backbones_point_at_themselves() {
    let cases: [(&StructureShape, &str); 9] = [
        (&CODE_SYSTEM_CONCEPT, "concept"),
        (&VALUE_SET_EXPANSION_CONTAINS, "contains"),
        (&QUESTIONNAIRE_ITEM, "item"),
        (&PARAMETERS_PARAMETER, "part"),
        (&PLAN_DEFINITION_ACTION, "action"),
        (&REQUEST_GROUP_ACTION, "action"),
        (&STRUCTURE_MAP_GROUP_RULE, "rule"),
        (&IMPLEMENTATION_GUIDE_PAGE, "page"),
        (&CONTRACT_TERM, "group"),
    ];
    for (shape, field) in cases {
        let def = shape.field(field).unwrap();
        match def.kind {
            FieldKind::Backbone(child) => assert!(std::ptr::eq(child, shape), "{}", shape.name),
            other => panic!("{}.{field} is {other:?}", shape.name),
        }
        assert!(def.cardinality.is_list());
    }
}

#[test]
fn shape_kinds_match_registry_tables() {
    for name in r4().resource_types() {
        let shape = r4().resource(name).unwrap();
        assert_eq!(shape.kind, ShapeKind::Resource, "{name}");
        assert_eq!(shape.name, name);
    }
    for name in r4().datatype_names() {
        assert_eq!(r4().datatype(name).unwrap().kind, ShapeKind::ComplexType, "{name}");
    }
    assert!(r4().datatype("Extension").is_some());
    assert_eq!(catalog::RESOURCES.len(), r4().resource_types().len());
}

#[test]
fn contract_valued_item_lives_under_term_asset() {
    assert!(catalog::CONTRACT.field("valuedItem").is_none());
    let def = catalog::CONTRACT_TERM_ASSET.field("valuedItem").unwrap();
    assert!(def.cardinality.is_list());
    let FieldKind::Backbone(shape) = def.kind else {
        panic!("valuedItem is {:?}", def.kind);
    };
    assert_eq!(shape.name, "Contract.term.asset.valuedItem");
    assert!(!std::ptr::eq(shape, &catalog::CONTRACT_TERM_OFFER));
    assert!(!std::ptr::eq(shape, &catalog::CONTRACT_TERM_ACTION));
    assert!(shape.field("entity").unwrap().is_choice());
    assert!(shape.field("unitPrice").is_some());
}
