use crate::browser::Browser;
use crate::filters::PanelItem;
use crate::grid::GridViewport;
use crate::icons::{icon_scale, IconSource};
use crate::notify::Notifications;
use crate::registry::ProjectileId;
use crate::spawn::SpawnBridge;
use glam::Vec2;

const GRID_AREA_HEIGHT: f32 = 320.0;
const ICON_UV: egui::Rect =
    egui::Rect { min: egui::pos2(0.0, 0.0), max: egui::pos2(1.0, 1.0) };

/// egui rendering for one browser instance. Interactions map directly onto
/// the browser's click/right-click/toggle operations, and click handling for
/// a frame happens before that frame's placement preview is drawn.
///
/// The host is expected to call `Browser::update` once per frame before
/// showing the window.
pub struct BrowserWindow;

impl BrowserWindow {
    pub fn show(
        ctx: &egui::Context,
        browser: &mut Browser,
        icons: &mut dyn IconSource,
        bridge: &mut dyn SpawnBridge,
        notifications: &mut Notifications,
    ) {
        if !browser.is_visible() {
            return;
        }

        let screen = ctx.screen_rect();
        let anchor = browser.config().default_position;
        let default_pos = egui::pos2(screen.width() * anchor[0], screen.height() * anchor[1]);
        let default_width = browser.config().panel_width + 360.0;

        let mut open = true;
        egui::Window::new("Projectile spawner")
            .open(&mut open)
            .default_pos(default_pos)
            .default_width(default_width)
            .show(ctx, |ui| {
                Self::contents(ui, browser, icons, notifications);
            });
        if !open {
            browser.set_visible(false);
        }

        Self::handle_world_input(ctx, browser, bridge);
        Self::draw_preview(ctx, browser, icons);
    }

    fn contents(
        ui: &mut egui::Ui,
        browser: &mut Browser,
        icons: &mut dyn IconSource,
        notifications: &mut Notifications,
    ) {
        if let Some(message) = notifications.latest() {
            ui.small(message.to_string());
        }
        ui.horizontal_top(|ui| {
            ui.vertical(|ui| {
                ui.set_width(browser.config().panel_width);
                Self::filter_column(ui, browser);
            });
            ui.separator();
            ui.vertical(|ui| {
                Self::grid_area(ui, browser, icons, notifications);
            });
        });
        ui.separator();
        browser.velocity_editor_mut().ui(ui);
        browser.ai0_editor_mut().ui(ui);
        browser.ai1_editor_mut().ui(ui);
    }

    fn filter_column(ui: &mut egui::Ui, browser: &mut Browser) {
        let mut pending: Vec<String> = Vec::new();
        for item in browser.filters().items() {
            match item {
                PanelItem::Separator(label) => {
                    ui.add_space(4.0);
                    ui.strong(label);
                }
                PanelItem::Filter(slot) => {
                    let response = ui
                        .selectable_label(slot.active, slot.filter.label())
                        .on_hover_text(slot.filter.description());
                    if response.clicked() {
                        pending.push(slot.filter.key().to_string());
                    }
                }
            }
        }
        for key in pending {
            browser.toggle_filter(&key);
        }
    }

    fn grid_area(
        ui: &mut egui::Ui,
        browser: &mut Browser,
        icons: &mut dyn IconSource,
        notifications: &mut Notifications,
    ) {
        let desired = egui::vec2(ui.available_width().max(120.0), GRID_AREA_HEIGHT);
        let (rect, area_response) = ui.allocate_exact_size(desired, egui::Sense::hover());
        let scroll = ui.input(|input| input.raw_scroll_delta.y);
        if area_response.hovered() && scroll != 0.0 {
            browser.scroll_by(-scroll);
        }
        browser.set_viewport(GridViewport {
            origin: Vec2::new(rect.min.x, rect.min.y),
            width: rect.width(),
            height: rect.height(),
            scroll: browser.viewport().scroll,
        });

        let button_size = browser.config().button_size;
        let max_icon = browser.config().max_icon_size;
        let painter = ui.painter_at(rect);
        let mut clicked: Option<ProjectileId> = None;
        let mut hover_changes: Vec<(ProjectileId, bool)> = Vec::new();
        for button in browser.grid().visible_buttons() {
            if !button.on_screen {
                continue;
            }
            let button_rect = egui::Rect::from_min_size(
                egui::pos2(button.position.x, button.position.y),
                egui::vec2(button_size, button_size),
            );
            let response = ui.interact(
                button_rect,
                ui.id().with(button.entry.id.index()),
                egui::Sense::click(),
            );
            let fill = if response.hovered() {
                ui.visuals().widgets.hovered.bg_fill
            } else {
                ui.visuals().extreme_bg_color
            };
            painter.rect_filled(button_rect, 4.0, fill);
            if let Some(icon) = icons.icon(button.entry.id) {
                if let Some(texture) = icon.texture {
                    let scale = icon_scale(icon.width, icon.height, max_icon);
                    let size = egui::vec2(icon.width as f32 * scale, icon.height as f32 * scale);
                    let icon_rect = egui::Rect::from_center_size(button_rect.center(), size);
                    painter.image(texture, icon_rect, ICON_UV, egui::Color32::WHITE);
                }
            }
            if response.hovered() != button.hovered {
                hover_changes.push((button.entry.id, response.hovered()));
            }
            let response = response
                .on_hover_text(format!("{}\nType: {}", button.entry.name, button.entry.id));
            if response.clicked() {
                clicked = Some(button.entry.id);
            }
        }
        for (id, hovered) in hover_changes {
            browser.set_hovered(id, hovered);
        }
        if let Some(id) = clicked {
            browser.handle_button_click(id, notifications);
        }
    }

    fn handle_world_input(ctx: &egui::Context, browser: &mut Browser, bridge: &mut dyn SpawnBridge) {
        let (pointer, primary, secondary) = ctx.input(|input| {
            (
                input.pointer.interact_pos(),
                input.pointer.primary_clicked(),
                input.pointer.secondary_clicked(),
            )
        });
        if secondary {
            browser.handle_right_click();
            return;
        }
        if primary && !ctx.is_pointer_over_area() {
            if let Some(pos) = pointer {
                browser.handle_world_click(Vec2::new(pos.x, pos.y), bridge);
            }
        }
    }

    fn draw_preview(ctx: &egui::Context, browser: &Browser, icons: &mut dyn IconSource) {
        let Some(entry) = browser.selection().armed() else {
            return;
        };
        let Some(pointer) = ctx.input(|input| input.pointer.latest_pos()) else {
            return;
        };
        let Some(icon) = icons.icon(entry.id) else {
            return;
        };
        let Some(preview) = browser.preview(icon, Vec2::new(pointer.x, pointer.y)) else {
            return;
        };
        let rect = egui::Rect::from_center_size(
            egui::pos2(preview.center.x, preview.center.y),
            egui::vec2(preview.size.x, preview.size.y),
        );
        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Foreground,
            egui::Id::new("spawndeck_preview"),
        ));
        let tint = egui::Color32::from_white_alpha((preview.alpha * 255.0) as u8);
        match icon.texture {
            Some(texture) => {
                painter.image(texture, rect, ICON_UV, tint);
            }
            None => {
                painter.rect_stroke(rect, 2.0, egui::Stroke::new(1.0, tint), egui::StrokeKind::Outside);
            }
        }
    }
}
