use fhub_domain::{Module, ModuleId, ModuleOverrides};
use fhub_registry::query::{is_module_enabled, normalize_module_overrides};
use proptest::prelude::*;
use serde_json::{Map, Value};
use strum::IntoEnumIterator;

fn module_id() -> impl Strategy<Value = ModuleId> {
    proptest::sample::select(ModuleId::iter().collect::<Vec<_>>())
}

fn overrides() -> impl Strategy<Value = ModuleOverrides> {
    proptest::collection::btree_map(module_id(), any::<bool>(), 0..8)
}

fn loose_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "[a-z]{0,6}".prop_map(Value::String),
        Just(Value::String("true".into())),
        Just(Value::Null),
    ]
}

proptest! {
    #[test]
    fn override_or_default(
        id in module_id(),
        enabled_by_default in any::<bool>(),
        overrides in proptest::option::of(overrides()),
    ) {
        let module = Module::builder().id(id).enabled_by_default(enabled_by_default).build();

        let expected = overrides
            .as_ref()
            .and_then(|o| o.get(&id).copied())
            .unwrap_or(enabled_by_default);

        prop_assert_eq!(is_module_enabled(&module, overrides.as_ref()), expected);
    }

    #[test]
    fn normalization_keeps_exactly_the_boolean_entries(
        entries in proptest::collection::btree_map(
            prop_oneof![module_id().prop_map(|id| id.to_string()), "[a-z]{1,8}"],
            loose_value(),
            0..12,
        ),
    ) {
        let raw: Map<String, Value> = entries.clone().into_iter().collect();
        let normalized = normalize_module_overrides(Some(&raw)).unwrap_or_default();

        for (key, value) in &entries {
            let id = key.parse::<ModuleId>().ok();
            match (id, value) {
                (Some(id), Value::Bool(b)) => prop_assert_eq!(normalized.get(&id), Some(b)),
                (Some(id), _) => prop_assert!(!normalized.contains_key(&id)),
                (None, _) => {}
            }
        }
        prop_assert!(normalized.len() <= entries.len());
    }
}
