use glam::Vec2;

/// Scalar value editor. Publishes every confirmed edit through the registered
/// callback, synchronously and without buffering.
pub struct FloatEditor {
    label: String,
    value: f32,
    on_change: Box<dyn FnMut(f32)>,
}

impl FloatEditor {
    pub fn new(label: impl Into<String>, on_change: impl FnMut(f32) + 'static, initial: f32) -> Self {
        Self { label: label.into(), value: initial, on_change: Box::new(on_change) }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn set_value(&mut self, value: f32) {
        if value != self.value {
            self.value = value;
            (self.on_change)(value);
        }
    }

    #[cfg(feature = "editor")]
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        let mut value = self.value;
        let changed = ui
            .horizontal(|ui| {
                ui.label(self.label.as_str());
                ui.add(egui::DragValue::new(&mut value).speed(0.1)).changed()
            })
            .inner;
        if changed {
            self.set_value(value);
        }
    }
}

/// Two-component vector editor with the same publish contract as
/// `FloatEditor`.
pub struct Vec2Editor {
    label: String,
    value: Vec2,
    on_change: Box<dyn FnMut(Vec2)>,
}

impl Vec2Editor {
    pub fn new(label: impl Into<String>, on_change: impl FnMut(Vec2) + 'static, initial: Vec2) -> Self {
        Self { label: label.into(), value: initial, on_change: Box::new(on_change) }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> Vec2 {
        self.value
    }

    pub fn set_value(&mut self, value: Vec2) {
        if value != self.value {
            self.value = value;
            (self.on_change)(value);
        }
    }

    #[cfg(feature = "editor")]
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        let mut value = self.value;
        let changed = ui
            .horizontal(|ui| {
                ui.label(self.label.as_str());
                let x = ui.add(egui::DragValue::new(&mut value.x).speed(0.1).prefix("x ")).changed();
                let y = ui.add(egui::DragValue::new(&mut value.y).speed(0.1).prefix("y ")).changed();
                x || y
            })
            .inner;
        if changed {
            self.set_value(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn float_editor_publishes_on_change() {
        let seen = Rc::new(Cell::new(0.0f32));
        let sink = Rc::clone(&seen);
        let mut editor = FloatEditor::new("ai 0", move |v| sink.set(v), 0.0);
        editor.set_value(2.5);
        assert_eq!(seen.get(), 2.5);
        assert_eq!(editor.value(), 2.5);
    }

    #[test]
    fn unchanged_values_do_not_republish() {
        let count = Rc::new(Cell::new(0u32));
        let sink = Rc::clone(&count);
        let mut editor = FloatEditor::new("ai 1", move |_| sink.set(sink.get() + 1), 1.0);
        editor.set_value(1.0);
        assert_eq!(count.get(), 0);
        editor.set_value(3.0);
        editor.set_value(3.0);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn vec2_editor_publishes_on_change() {
        let seen = Rc::new(Cell::new(Vec2::ZERO));
        let sink = Rc::clone(&seen);
        let mut editor = Vec2Editor::new("Velocity", move |v| sink.set(v), Vec2::ZERO);
        editor.set_value(Vec2::new(3.0, -1.0));
        assert_eq!(seen.get(), Vec2::new(3.0, -1.0));
    }
}
