use crate::catalog::CatalogEntry;
use crate::filters::FilterPanel;
use crate::registry::ProjectileId;
use glam::Vec2;

/// One grid control per catalog entry. Buttons are created once at populate
/// time and only hidden or shown afterwards, so hover and position state
/// survive filter changes.
pub struct BrowserButton {
    pub entry: CatalogEntry,
    pub hovered: bool,
    /// Passes the active filter set.
    pub visible: bool,
    /// Inside the viewport after clipping. Only meaningful while `visible`.
    pub on_screen: bool,
    pub position: Vec2,
}

impl BrowserButton {
    fn new(entry: CatalogEntry) -> Self {
        Self { entry, hovered: false, visible: true, on_screen: false, position: Vec2::ZERO }
    }
}

/// Cell sizing for the packed grid.
#[derive(Debug, Clone, Copy)]
pub struct GridLayout {
    pub button_size: f32,
    pub padding: f32,
}

impl GridLayout {
    pub fn cell(&self) -> f32 {
        self.button_size + self.padding
    }
}

/// Where the grid is drawn: origin and extent in screen space plus the
/// current scroll offset in rows worth of pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridViewport {
    pub origin: Vec2,
    pub width: f32,
    pub height: f32,
    pub scroll: f32,
}

impl Default for GridViewport {
    fn default() -> Self {
        Self { origin: Vec2::ZERO, width: 400.0, height: 300.0, scroll: 0.0 }
    }
}

/// Owns the buttons and their packed layout. Population happens once per
/// refresh; repacking is a pure function of (viewport, filter state) and runs
/// whenever either changes.
pub struct ButtonGrid {
    buttons: Vec<BrowserButton>,
    layout: GridLayout,
}

impl ButtonGrid {
    pub fn new(layout: GridLayout) -> Self {
        Self { buttons: Vec::new(), layout }
    }

    pub fn layout(&self) -> GridLayout {
        self.layout
    }

    /// Builds one button per entry, sorted ascending by id. Replaces any
    /// previous population wholesale.
    pub fn populate(&mut self, mut entries: Vec<CatalogEntry>) {
        entries.sort_by_key(|entry| entry.id);
        self.buttons = entries.into_iter().map(BrowserButton::new).collect();
    }

    /// Recomputes visibility from the panel and packs visible buttons into
    /// rows anchored at the viewport origin. Buttons scrolled past the
    /// viewport are clipped, not destroyed. Idempotent for identical inputs.
    pub fn repack(&mut self, viewport: GridViewport, panel: &FilterPanel) {
        let cell = self.layout.cell();
        let columns = ((viewport.width / cell).floor() as usize).max(1);
        let mut slot = 0usize;
        for button in &mut self.buttons {
            button.visible = panel.is_visible(&button.entry);
            if !button.visible {
                button.on_screen = false;
                continue;
            }
            let row = slot / columns;
            let col = slot % columns;
            let local_y = row as f32 * cell - viewport.scroll;
            button.position = viewport.origin + Vec2::new(col as f32 * cell, local_y);
            button.on_screen =
                local_y + self.layout.button_size >= 0.0 && local_y <= viewport.height;
            slot += 1;
        }
    }

    pub fn buttons(&self) -> &[BrowserButton] {
        &self.buttons
    }

    pub fn visible_buttons(&self) -> impl Iterator<Item = &BrowserButton> {
        self.buttons.iter().filter(|button| button.visible)
    }

    pub fn visible_count(&self) -> usize {
        self.visible_buttons().count()
    }

    /// Total packed height of the visible set, for scroll clamping.
    pub fn content_height(&self, viewport: GridViewport) -> f32 {
        let cell = self.layout.cell();
        let columns = ((viewport.width / cell).floor() as usize).max(1);
        let rows = self.visible_count().div_ceil(columns);
        rows as f32 * cell
    }

    pub fn button(&self, id: ProjectileId) -> Option<&BrowserButton> {
        self.buttons.iter().find(|button| button.entry.id == id)
    }

    pub fn set_hovered(&mut self, id: ProjectileId, hovered: bool) {
        if let Some(button) = self.buttons.iter_mut().find(|button| button.entry.id == id) {
            button.hovered = hovered;
        }
    }
}
