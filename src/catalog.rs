use crate::notify::Notifications;
use crate::registry::{ProjectileAttributes, ProjectileId, ProjectileRegistry};

/// Immutable browser-side snapshot of one template, built once per
/// enumeration pass and shared read-only from then on.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub id: ProjectileId,
    pub name: String,
    pub attributes: ProjectileAttributes,
}

/// Enumerates the registry into catalog entries, ascending by id. Id 0 is the
/// "none" sentinel and is skipped.
///
/// A snapshot that fails to resolve never aborts the pass: the entry is kept
/// with a diagnostic placeholder name, a notification names the responsible
/// content provider, and enumeration continues with the next id.
pub fn build_entries(
    registry: &dyn ProjectileRegistry,
    notifications: &mut Notifications,
) -> Vec<CatalogEntry> {
    let mut entries = Vec::new();
    for raw in 1..registry.count() {
        let id = ProjectileId(raw);
        match registry.default_projectile(id) {
            Ok(def) => entries.push(CatalogEntry { id, name: def.name, attributes: def.attributes }),
            Err(err) => {
                let provider =
                    registry.provider(id).unwrap_or_else(|| "an unknown provider".to_string());
                eprintln!("[spawndeck] projectile {id} failed to resolve: {err}");
                notifications.push(format!(
                    "A projectile's name threw an error while getting it! Report to {provider} developers!"
                ));
                entries.push(CatalogEntry {
                    id,
                    name: format!(
                        "This projectile's name threw an error while getting it! Report to {provider} developers!"
                    ),
                    attributes: ProjectileAttributes::default(),
                });
            }
        }
    }
    entries
}
