use crate::catalog::{build_entries, CatalogEntry};
use crate::config::BrowserConfig;
use crate::editors::{FloatEditor, Vec2Editor};
use crate::filters::{install_standard_filters, FilterPanel};
use crate::grid::{ButtonGrid, GridLayout, GridViewport};
use crate::icons::{icon_scale, IconHandle};
use crate::notify::Notifications;
use crate::registry::{ProjectileId, ProjectileRegistry};
use crate::spawn::{SpawnBridge, SpawnRequest};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;

/// Spawn-time parameters captured by the value editors. Shared with the
/// editor callbacks, which write into it synchronously on every edit.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpawnParams {
    pub velocity: Vec2,
    pub ai0: f32,
    pub ai1: f32,
}

/// Two-phase selection protocol: `Idle` until a grid button is clicked, then
/// `Armed` with that entry until a right click clears it. Only one entry can
/// be armed at a time, and a spawn is structurally impossible while idle.
#[derive(Debug, Clone, Default)]
pub enum Selection {
    #[default]
    Idle,
    Armed(CatalogEntry),
}

impl Selection {
    pub fn is_idle(&self) -> bool {
        matches!(self, Selection::Idle)
    }

    pub fn is_armed(&self) -> bool {
        matches!(self, Selection::Armed(_))
    }

    pub fn armed(&self) -> Option<&CatalogEntry> {
        match self {
            Selection::Armed(entry) => Some(entry),
            Selection::Idle => None,
        }
    }
}

/// World-space placement ghost drawn near the cursor while armed. Sized with
/// the same scaling rule as the grid icons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementPreview {
    pub center: Vec2,
    pub size: Vec2,
    pub alpha: f32,
}

/// Orchestrates the filter panel, the button grid, the parameter editors and
/// the selection protocol for one open browser instance. All state lives here
/// for the browser's lifetime; nothing is process-global.
pub struct Browser {
    config: BrowserConfig,
    visible: bool,
    initialized: bool,
    /// Frames left during which clicks are swallowed after the window opens,
    /// so the click that opened the tool cannot also select an entry.
    click_guard: u8,
    filters: FilterPanel,
    grid: ButtonGrid,
    viewport: GridViewport,
    selection: Selection,
    params: Rc<RefCell<SpawnParams>>,
    velocity_editor: Vec2Editor,
    ai0_editor: FloatEditor,
    ai1_editor: FloatEditor,
    owner: u32,
}

impl Browser {
    pub fn new(config: BrowserConfig) -> Self {
        let params = Rc::new(RefCell::new(SpawnParams::default()));
        let velocity_sink = Rc::clone(&params);
        let velocity_editor =
            Vec2Editor::new("Velocity", move |v| velocity_sink.borrow_mut().velocity = v, Vec2::ZERO);
        let ai0_sink = Rc::clone(&params);
        let ai0_editor = FloatEditor::new("ai 0", move |v| ai0_sink.borrow_mut().ai0 = v, 0.0);
        let ai1_sink = Rc::clone(&params);
        let ai1_editor = FloatEditor::new("ai 1", move |v| ai1_sink.borrow_mut().ai1 = v, 0.0);

        let layout = GridLayout { button_size: config.button_size, padding: config.button_padding };
        Self {
            config,
            visible: false,
            initialized: false,
            click_guard: 0,
            filters: FilterPanel::new(),
            grid: ButtonGrid::new(layout),
            viewport: GridViewport::default(),
            selection: Selection::Idle,
            params,
            velocity_editor,
            ai0_editor,
            ai1_editor,
            owner: 0,
        }
    }

    pub fn config(&self) -> &BrowserConfig {
        &self.config
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn set_owner(&mut self, owner: u32) {
        self.owner = owner;
    }

    /// UI activation entry point. The first time the browser becomes visible
    /// it runs a one-time refresh against the registry.
    pub fn toggle_visible(
        &mut self,
        registry: &dyn ProjectileRegistry,
        notifications: &mut Notifications,
    ) {
        self.visible = !self.visible;
        if self.visible {
            self.click_guard = 2;
            if !self.initialized {
                self.refresh(registry, notifications);
                self.initialized = true;
            }
        }
    }

    /// Re-enumerates the registry, rebuilds the stock filter set and repacks
    /// the grid. Previous selection survives only as far as it still names a
    /// populated entry; filters reset to all-inactive.
    pub fn refresh(&mut self, registry: &dyn ProjectileRegistry, notifications: &mut Notifications) {
        let entries = build_entries(registry, notifications);
        let mut filters = FilterPanel::new();
        install_standard_filters(&mut filters, &entries);
        self.filters = filters;
        self.grid.populate(entries);
        self.grid.repack(self.viewport, &self.filters);
    }

    pub fn filters(&self) -> &FilterPanel {
        &self.filters
    }

    pub fn grid(&self) -> &ButtonGrid {
        &self.grid
    }

    pub fn viewport(&self) -> GridViewport {
        self.viewport
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn params(&self) -> SpawnParams {
        *self.params.borrow()
    }

    pub fn velocity_editor_mut(&mut self) -> &mut Vec2Editor {
        &mut self.velocity_editor
    }

    pub fn ai0_editor_mut(&mut self) -> &mut FloatEditor {
        &mut self.ai0_editor
    }

    pub fn ai1_editor_mut(&mut self) -> &mut FloatEditor {
        &mut self.ai1_editor
    }

    /// Toggling a filter re-evaluates and repacks immediately; there is no
    /// deferred or partial update.
    pub fn toggle_filter(&mut self, key: &str) -> bool {
        if self.filters.toggle(key) {
            self.grid.repack(self.viewport, &self.filters);
            true
        } else {
            false
        }
    }

    pub fn set_viewport(&mut self, viewport: GridViewport) {
        if self.viewport != viewport {
            self.viewport = viewport;
            self.grid.repack(self.viewport, &self.filters);
        }
    }

    pub fn scroll_by(&mut self, delta: f32) {
        let max_scroll = (self.grid.content_height(self.viewport) - self.viewport.height).max(0.0);
        let scroll = (self.viewport.scroll + delta).clamp(0.0, max_scroll);
        if scroll != self.viewport.scroll {
            self.viewport.scroll = scroll;
            self.grid.repack(self.viewport, &self.filters);
        }
    }

    pub fn set_hovered(&mut self, id: ProjectileId, hovered: bool) {
        self.grid.set_hovered(id, hovered);
    }

    /// Per-frame bookkeeping. Input for a frame is handled before the frame's
    /// draw, so a click that changes the selection shows up in that frame's
    /// preview.
    pub fn update(&mut self) {
        if self.click_guard > 0 {
            self.click_guard -= 1;
        }
    }

    /// While armed the host should treat the pointer as captured so world
    /// clicks do not fall through to gameplay.
    pub fn wants_pointer(&self) -> bool {
        self.visible && self.selection.is_armed()
    }

    /// Grid button click: arms the selection with that button's entry and
    /// confirms via the notification channel. Ignored for filtered-out
    /// buttons and while the open-click guard is running.
    pub fn handle_button_click(&mut self, id: ProjectileId, notifications: &mut Notifications) -> bool {
        if self.click_guard > 0 {
            return false;
        }
        let Some(button) = self.grid.button(id) else {
            return false;
        };
        if !button.visible {
            return false;
        }
        let entry = button.entry.clone();
        notifications.push(format!(
            "{} selected, click anywhere in the world to spawn. Right click to deselect.",
            entry.name
        ));
        self.selection = Selection::Armed(entry);
        true
    }

    /// World-space click while armed: fires the spawn bridge with the armed
    /// template and the current parameter values, and stays armed so the same
    /// template can be spawned repeatedly. A no-op while idle.
    pub fn handle_world_click(&mut self, world_pos: Vec2, bridge: &mut dyn SpawnBridge) -> bool {
        let Selection::Armed(entry) = &self.selection else {
            return false;
        };
        let params = *self.params.borrow();
        let request = SpawnRequest {
            template: entry.id,
            position: world_pos,
            velocity: params.velocity,
            ai0: params.ai0,
            ai1: params.ai1,
            damage: entry.attributes.damage,
            knockback: entry.attributes.knockback,
            owner: self.owner,
        };
        bridge.spawn_projectile(&request);
        true
    }

    /// Right click anywhere on the browser surface: back to idle, no spawn.
    pub fn handle_right_click(&mut self) -> bool {
        if self.selection.is_armed() {
            self.selection = Selection::Idle;
            true
        } else {
            false
        }
    }

    pub fn deselect(&mut self) {
        self.selection = Selection::Idle;
    }

    /// Placement ghost for the current frame, or `None` while idle. Uses the
    /// same fit-to-box scaling as the grid icons.
    pub fn preview(&self, icon: IconHandle, cursor: Vec2) -> Option<PlacementPreview> {
        if !self.selection.is_armed() {
            return None;
        }
        let scale = icon_scale(icon.width, icon.height, self.config.max_icon_size);
        let size = Vec2::new(icon.width as f32, icon.height as f32) * scale;
        Some(PlacementPreview { center: cursor + Vec2::splat(8.0) + size * 0.5, size, alpha: 0.5 })
    }
}
