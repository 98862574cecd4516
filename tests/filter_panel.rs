use spawndeck::filters::{install_standard_filters, Filter, FilterPanel};
use spawndeck::{CatalogEntry, ProjectileAttributes, ProjectileId};

fn entry(id: u32, name: &str, friendly: bool, hostile: bool, source_mod: Option<&str>) -> CatalogEntry {
    CatalogEntry {
        id: ProjectileId(id),
        name: name.to_string(),
        attributes: ProjectileAttributes {
            friendly,
            hostile,
            damage: 0,
            knockback: 0.0,
            source_mod: source_mod.map(|s| s.to_string()),
        },
    }
}

fn sample_entries() -> Vec<CatalogEntry> {
    vec![
        entry(1, "Wooden Arrow", true, false, None),
        entry(2, "Demon Scythe", false, true, None),
        entry(3, "Laser Bolt", true, false, Some("TechMod")),
        entry(4, "Void Spike", false, true, Some("TechMod")),
        entry(5, "Petal Storm", true, true, Some("FloraMod")),
    ]
}

fn ids(panel: &FilterPanel, entries: &[CatalogEntry]) -> Vec<u32> {
    panel.visible_ids(entries).iter().map(|id| id.index()).collect()
}

#[test]
fn everything_visible_with_no_active_filter() {
    let entries = sample_entries();
    let mut panel = FilterPanel::new();
    install_standard_filters(&mut panel, &entries);
    assert_eq!(panel.active_count(), 0);
    assert_eq!(ids(&panel, &entries), vec![1, 2, 3, 4, 5]);
}

#[test]
fn single_active_filter_keeps_only_matches() {
    let entries = sample_entries();
    let mut panel = FilterPanel::new();
    install_standard_filters(&mut panel, &entries);
    assert!(panel.toggle("friendly"));
    assert_eq!(ids(&panel, &entries), vec![1, 3, 5]);
}

#[test]
fn two_active_filters_intersect() {
    let entries = sample_entries();
    let mut panel = FilterPanel::new();
    install_standard_filters(&mut panel, &entries);
    panel.toggle("friendly");
    panel.toggle("vanilla");
    // friendly ∩ vanilla
    assert_eq!(ids(&panel, &entries), vec![1]);

    panel.toggle("vanilla");
    panel.toggle("hostile");
    // friendly ∩ hostile
    assert_eq!(ids(&panel, &entries), vec![5]);
}

#[test]
fn toggling_back_restores_the_full_set() {
    let entries = sample_entries();
    let mut panel = FilterPanel::new();
    install_standard_filters(&mut panel, &entries);
    panel.toggle("hostile");
    panel.toggle("mod:TechMod");
    assert_eq!(ids(&panel, &entries), vec![4]);
    panel.toggle("hostile");
    panel.toggle("mod:TechMod");
    assert_eq!(ids(&panel, &entries), vec![1, 2, 3, 4, 5]);
}

#[test]
fn visible_set_is_always_a_subset() {
    let entries = sample_entries();
    let mut panel = FilterPanel::new();
    install_standard_filters(&mut panel, &entries);
    let all: Vec<u32> = entries.iter().map(|e| e.id.index()).collect();
    for key in ["vanilla", "friendly", "hostile", "mod:TechMod", "mod:FloraMod", "friendly"] {
        panel.toggle(key);
        for id in ids(&panel, &entries) {
            assert!(all.contains(&id));
        }
    }
}

#[test]
fn per_mod_filters_are_installed_from_the_catalog() {
    let entries = sample_entries();
    let mut panel = FilterPanel::new();
    install_standard_filters(&mut panel, &entries);
    assert!(panel.toggle("mod:TechMod"));
    assert_eq!(ids(&panel, &entries), vec![3, 4]);
    assert!(!panel.toggle("mod:NoSuchMod"));
}

#[test]
fn separators_do_not_affect_evaluation() {
    let entries = sample_entries();
    let mut panel = FilterPanel::new();
    panel.add_separator("Group A");
    panel.add_separator("Group B");
    assert_eq!(ids(&panel, &entries), vec![1, 2, 3, 4, 5]);

    panel.add_filter(Filter::new("vanilla", "Vanilla", "Base game only", |e| {
        e.attributes.source_mod.is_none()
    }));
    panel.set_active("vanilla", true);
    assert_eq!(ids(&panel, &entries), vec![1, 2]);
}

#[test]
fn unknown_keys_are_rejected() {
    let mut panel = FilterPanel::new();
    assert!(!panel.toggle("missing"));
    assert!(!panel.set_active("missing", true));
    assert!(!panel.is_active("missing"));
}
