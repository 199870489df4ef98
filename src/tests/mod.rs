use proptest::prelude::*;

use crate::types::{
    field_type::{FieldType, PrimitiveType},
    references::ClassRef,
    signatures::GenericType,
};

pub(crate) fn arb_class_name() -> impl Strategy<Value = String> {
    let arb_ident = prop::string::string_regex(r"[a-zA-Z][\w\$_]*").expect("The regex is invalid");
    prop::collection::vec(arb_ident, 1..10).prop_map(|v| v.join("/"))
}

pub(crate) fn arb_type_variable_name() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[A-Z][A-Za-z0-9_]{0,5}").expect("The regex is invalid")
}

pub(crate) fn arb_non_array_field_type() -> impl Strategy<Value = FieldType> {
    prop_oneof![
        any::<PrimitiveType>().prop_map(FieldType::Base),
        arb_class_name()
            .prop_map(ClassRef::new)
            .prop_map(FieldType::Object),
    ]
}

prop_compose! {
    fn arb_array_field_type()(
        t in arb_non_array_field_type(),
        dim in 1..=u8::MAX
    ) -> FieldType {
        FieldType::array_of(t, dim)
    }
}

pub(crate) fn arb_field_type() -> impl Strategy<Value = FieldType> {
    prop_oneof![arb_non_array_field_type(), arb_array_field_type()]
}

/// Generic types in the shape produced by the parser.
/// Non-generic leaves are never arrays, since the parser reads every array as [`GenericType::ArrayOf`].
pub(crate) fn arb_generic_type() -> impl Strategy<Value = GenericType> {
    let leaf = prop_oneof![
        arb_non_array_field_type().prop_map(GenericType::from),
        arb_type_variable_name()
            .prop_map(|name| GenericType::type_variable(name).expect("The name is invalid")),
        Just(GenericType::Wildcard),
    ];
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            (arb_class_name(), prop::collection::vec(inner.clone(), 1..4)).prop_map(
                |(name, arguments)| {
                    GenericType::parameterized(name, arguments).expect("The type is invalid")
                }
            ),
            inner.clone().prop_map(GenericType::wildcard_extends),
            inner.clone().prop_map(GenericType::wildcard_super),
            (inner, 1..=3u8).prop_map(|(element, dimensions)| {
                GenericType::array_of(element, dimensions).expect("The array is invalid")
            }),
        ]
    })
}
