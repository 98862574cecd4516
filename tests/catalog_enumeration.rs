use spawndeck::catalog::build_entries;
use spawndeck::{Notifications, ProjectileAttributes, ProjectileId, StaticRegistry};
use std::collections::HashSet;

fn registry_with(names: &[&str]) -> StaticRegistry {
    let mut registry = StaticRegistry::new();
    for name in names {
        registry.push(*name, ProjectileAttributes::default());
    }
    registry
}

#[test]
fn sentinel_zero_is_never_enumerated() {
    let registry = registry_with(&["Wooden Arrow", "Fireball", "Shuriken"]);
    let mut notifications = Notifications::new();
    let entries = build_entries(&registry, &mut notifications);
    assert_eq!(entries.len(), 3);
    assert!(entries.iter().all(|entry| entry.id != ProjectileId::NONE));
}

#[test]
fn ids_are_unique_and_ascending() {
    let registry = registry_with(&["A", "B", "C", "D"]);
    let mut notifications = Notifications::new();
    let entries = build_entries(&registry, &mut notifications);
    let ids: Vec<u32> = entries.iter().map(|entry| entry.id.index()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
    let unique: HashSet<u32> = ids.iter().copied().collect();
    assert_eq!(unique.len(), ids.len());
}

#[test]
fn faulty_entry_is_isolated_not_fatal() {
    let mut registry = StaticRegistry::new();
    registry.push("Wooden Arrow", ProjectileAttributes::default());
    registry.push("Fireball", ProjectileAttributes::default());
    let faulty = registry.push_faulty("ExampleMod");
    registry.push("Shuriken", ProjectileAttributes::default());
    registry.push("Harpoon", ProjectileAttributes::default());

    let mut notifications = Notifications::new();
    let entries = build_entries(&registry, &mut notifications);

    assert_eq!(entries.len(), 5, "one bad entry must not abort the catalog build");
    let placeholder = entries.iter().find(|entry| entry.id == faulty).expect("faulty id enumerated");
    assert!(placeholder.name.contains("ExampleMod"), "placeholder names the provider");
    assert_eq!(notifications.len(), 1, "exactly one notification per failed entry");
    assert!(notifications.latest().is_some_and(|message| message.contains("ExampleMod")));

    let intact: Vec<&str> = entries
        .iter()
        .filter(|entry| entry.id != faulty)
        .map(|entry| entry.name.as_str())
        .collect();
    assert_eq!(intact, vec!["Wooden Arrow", "Fireball", "Shuriken", "Harpoon"]);
}

#[test]
fn clean_enumeration_emits_no_notifications() {
    let registry = registry_with(&["A", "B"]);
    let mut notifications = Notifications::new();
    let entries = build_entries(&registry, &mut notifications);
    assert_eq!(entries.len(), 2);
    assert!(notifications.is_empty());
}
