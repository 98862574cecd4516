pub mod browser;
pub mod catalog;
pub mod config;
pub mod editors;
pub mod filters;
pub mod grid;
pub mod icons;
pub mod notify;
pub mod registry;
pub mod spawn;
pub mod tool;
#[cfg(feature = "editor")]
pub mod ui;

pub use browser::{Browser, PlacementPreview, Selection, SpawnParams};
pub use catalog::CatalogEntry;
pub use config::BrowserConfig;
pub use filters::{Filter, FilterPanel};
pub use notify::Notifications;
pub use registry::{ProjectileAttributes, ProjectileId, ProjectileRegistry, StaticRegistry};
pub use spawn::{EcsWorld, SpawnBridge, SpawnRequest};
