use crate::registry::ProjectileId;
use std::collections::HashMap;

/// Drawable icon for one template. Dimensions are always present; the texture
/// itself only exists when the egui layer is compiled in.
#[derive(Debug, Clone, Copy)]
pub struct IconHandle {
    pub width: u32,
    pub height: u32,
    #[cfg(feature = "editor")]
    pub texture: Option<egui::TextureId>,
}

impl IconHandle {
    pub fn sized(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            #[cfg(feature = "editor")]
            texture: None,
        }
    }

    #[cfg(feature = "editor")]
    pub fn with_texture(mut self, texture: egui::TextureId) -> Self {
        self.texture = Some(texture);
        self
    }
}

/// Resolves a template id to a drawable icon. Queried every draw, so
/// implementations are expected to cache; returning `None` while an icon is
/// still loading is fine and the caller draws a placeholder.
pub trait IconSource {
    fn icon(&mut self, id: ProjectileId) -> Option<IconHandle>;
}

/// In-memory icon table for demos and tests.
#[derive(Default)]
pub struct MemoryIconSource {
    icons: HashMap<ProjectileId, IconHandle>,
}

impl MemoryIconSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: ProjectileId, icon: IconHandle) {
        self.icons.insert(id, icon);
    }
}

impl IconSource for MemoryIconSource {
    fn icon(&mut self, id: ProjectileId) -> Option<IconHandle> {
        self.icons.get(&id).copied()
    }
}

/// Uniform scale that fits an icon into a square bounding box without ever
/// upscaling: `min(1, max_size / max(width, height))`. Shared by the grid
/// buttons and the world-space placement preview so both render identically.
pub fn icon_scale(width: u32, height: u32, max_size: f32) -> f32 {
    let largest = width.max(height).max(1) as f32;
    if largest <= max_size {
        1.0
    } else {
        max_size / largest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_icons_shrink_to_fit() {
        assert_eq!(icon_scale(64, 32, 32.0), 0.5);
    }

    #[test]
    fn small_icons_never_upscale() {
        assert_eq!(icon_scale(20, 20, 32.0), 1.0);
    }

    #[test]
    fn square_oversize_icons_scale_by_edge() {
        assert_eq!(icon_scale(128, 128, 32.0), 0.25);
    }

    #[test]
    fn degenerate_dimensions_are_clamped() {
        assert_eq!(icon_scale(0, 0, 32.0), 1.0);
    }
}
