use crate::browser::Browser;
use crate::notify::Notifications;
use crate::registry::ProjectileRegistry;

/// A toolbar-invocable tool exposed to the host's tool layer.
pub trait Tool {
    fn icon_key(&self) -> &'static str;
    fn display_name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn activate(
        &mut self,
        browser: &mut Browser,
        registry: &dyn ProjectileRegistry,
        notifications: &mut Notifications,
    );
}

/// Toggles the projectile browser. The browser itself handles the one-time
/// refresh on first open.
#[derive(Default)]
pub struct ProjectileSpawnerTool;

impl Tool for ProjectileSpawnerTool {
    fn icon_key(&self) -> &'static str {
        "projectile_spawner"
    }

    fn display_name(&self) -> &'static str {
        "Projectile spawner"
    }

    fn description(&self) -> &'static str {
        "Spawn projectiles, with options for setting velocity and other parameters"
    }

    fn activate(
        &mut self,
        browser: &mut Browser,
        registry: &dyn ProjectileRegistry,
        notifications: &mut Notifications,
    ) {
        browser.toggle_visible(registry, notifications);
    }
}
