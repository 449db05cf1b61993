use fhub_domain::{ModuleId, ModuleSet};

#[test]
fn set_collects_ids() {
    let set: ModuleSet = [ModuleId::Finance, ModuleId::Settings].into_iter().collect();

    assert!(set.contains_id(ModuleId::Finance));
    assert!(set.contains_id(ModuleId::Settings));
    assert!(!set.contains_id(ModuleId::Dashboard));
    assert_eq!(set.ids().collect::<Vec<_>>(), vec![ModuleId::Finance, ModuleId::Settings]);
}

#[test]
fn set_parses_names() {
    assert_eq!(ModuleSet::from("timesheet"), ModuleSet::TIMESHEET);
    assert_eq!(ModuleSet::from("*"), ModuleSet::ALL);
    assert_eq!(ModuleSet::from("payroll"), ModuleSet::empty());
}

#[test]
fn set_serializes_as_bits() {
    let set = ModuleSet::DASHBOARD | ModuleSet::CLIENTS;
    let encoded = serde_json::to_string(&set).expect("serialize");
    assert_eq!(encoded, "3");

    let decoded: ModuleSet = serde_json::from_str("4095").expect("deserialize");
    assert_eq!(decoded, ModuleSet::ALL);
}

#[test]
fn every_id_has_its_own_bit() {
    use strum::IntoEnumIterator;

    let all: ModuleSet = ModuleId::iter().collect();
    assert_eq!(all, ModuleSet::ALL);
    assert_eq!(all.bits().count_ones() as usize, ModuleId::iter().count());
}
