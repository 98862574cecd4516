use crate::catalog::CatalogEntry;
use crate::registry::ProjectileId;
use std::collections::BTreeSet;

/// A named boolean test over a catalog entry. `test` returning false excludes
/// the entry while the filter is active; an inactive filter contributes no
/// constraint. Predicates operate on the data model only, never on rendered
/// controls.
pub struct Filter {
    key: String,
    label: String,
    description: String,
    test: Box<dyn Fn(&CatalogEntry) -> bool>,
}

impl Filter {
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
        test: impl Fn(&CatalogEntry) -> bool + 'static,
    ) -> Self {
        Self { key: key.into(), label: label.into(), description: description.into(), test: Box::new(test) }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn test(&self, entry: &CatalogEntry) -> bool {
        (self.test)(entry)
    }
}

/// A filter plus its enabled flag. The flag lives here, not in the filter, so
/// predicates stay stateless.
pub struct FilterSlot {
    pub filter: Filter,
    pub active: bool,
}

/// Panel rows in registration order. Separators group filters visually and
/// have no effect on evaluation.
pub enum PanelItem {
    Separator(String),
    Filter(FilterSlot),
}

/// Ordered set of toggleable filters. Visibility of an entry is the AND of
/// all active filters' tests; with nothing active everything is visible.
/// Composition is a plain intersection, not a priority system.
#[derive(Default)]
pub struct FilterPanel {
    items: Vec<PanelItem>,
}

impl FilterPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_separator(&mut self, label: impl Into<String>) {
        self.items.push(PanelItem::Separator(label.into()));
    }

    pub fn add_filter(&mut self, filter: Filter) {
        self.items.push(PanelItem::Filter(FilterSlot { filter, active: false }));
    }

    pub fn items(&self) -> &[PanelItem] {
        &self.items
    }

    fn slot_mut(&mut self, key: &str) -> Option<&mut FilterSlot> {
        self.items.iter_mut().find_map(|item| match item {
            PanelItem::Filter(slot) if slot.filter.key() == key => Some(slot),
            _ => None,
        })
    }

    /// Flips a filter's active flag. Returns false when no filter has that key.
    pub fn toggle(&mut self, key: &str) -> bool {
        match self.slot_mut(key) {
            Some(slot) => {
                slot.active = !slot.active;
                true
            }
            None => false,
        }
    }

    pub fn set_active(&mut self, key: &str, active: bool) -> bool {
        match self.slot_mut(key) {
            Some(slot) => {
                slot.active = active;
                true
            }
            None => false,
        }
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.items.iter().any(|item| match item {
            PanelItem::Filter(slot) => slot.filter.key() == key && slot.active,
            _ => false,
        })
    }

    pub fn active_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| matches!(item, PanelItem::Filter(slot) if slot.active))
            .count()
    }

    /// AND over all active filters. Total and synchronous; catalogs are
    /// bounded by the host registry, so there is no incremental path.
    pub fn is_visible(&self, entry: &CatalogEntry) -> bool {
        self.items.iter().all(|item| match item {
            PanelItem::Filter(slot) if slot.active => slot.filter.test(entry),
            _ => true,
        })
    }

    pub fn visible_ids(&self, entries: &[CatalogEntry]) -> Vec<ProjectileId> {
        entries.iter().filter(|entry| self.is_visible(entry)).map(|entry| entry.id).collect()
    }
}

/// Installs the stock filter set: a vanilla filter plus one filter per content
/// provider present in the catalog, then the friendly/hostile pair.
pub fn install_standard_filters(panel: &mut FilterPanel, entries: &[CatalogEntry]) {
    panel.add_separator("Mod filters");
    panel.add_filter(Filter::new(
        "vanilla",
        "Vanilla",
        "Projectiles from the base game",
        |entry| entry.attributes.source_mod.is_none(),
    ));

    let mods: BTreeSet<String> =
        entries.iter().filter_map(|entry| entry.attributes.source_mod.clone()).collect();
    for mod_name in mods {
        let key = format!("mod:{mod_name}");
        let description = format!("Projectiles added by {mod_name}");
        let wanted = mod_name.clone();
        panel.add_filter(Filter::new(key, mod_name, description, move |entry| {
            entry.attributes.source_mod.as_deref() == Some(wanted.as_str())
        }));
    }

    panel.add_separator("Friendly/Hostile filters");
    panel.add_filter(Filter::new(
        "friendly",
        "Friendly",
        "Projectiles which by default belong to a player",
        |entry| entry.attributes.friendly,
    ));
    panel.add_filter(Filter::new(
        "hostile",
        "Hostile",
        "Projectiles which by default belong to an enemy",
        |entry| entry.attributes.hostile,
    ));
}
