//! Declarative Form Fields
//!
//! A field is described by a `FieldDescriptor` whose `FieldKind` variant
//! carries only what that control needs (a mask only on text, options
//! only on selects, ...). One `render_field` function dispatches on the
//! variant and propagates edits back through the owning `FormModel`.

pub mod mask;
pub mod validate;

use std::collections::{BTreeMap, BTreeSet};

use eframe::egui;

use crate::app::theme::colors;
use self::mask::apply_mask;

/// Option entry for select fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub disabled: bool,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }
}

/// Control variant; each carries only the fields it needs
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Text { mask: Option<&'static str> },
    Password { show_toggle: bool },
    Textarea { rows: usize },
    Select { options: Vec<SelectOption> },
    Checkbox,
    Switch,
    Date,
}

/// Declarative description of one form field
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    pub id: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: FieldKind,
}

impl FieldDescriptor {
    pub fn new(id: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            id,
            label,
            placeholder: "",
            kind,
        }
    }

    pub fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }
}

/// A field's current value
#[derive(Debug, Clone, PartialEq)]
enum FieldValue {
    Text(String),
    Flag(bool),
}

/// Validated form state: values plus per-field errors. The controlling
/// screen reads values out after validation passes.
#[derive(Debug, Clone, Default)]
pub struct FormModel {
    values: BTreeMap<&'static str, FieldValue>,
    errors: BTreeMap<&'static str, String>,
    revealed: BTreeSet<&'static str>,
}

impl FormModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self, id: &str) -> &str {
        match self.values.get(id) {
            Some(FieldValue::Text(value)) => value,
            _ => "",
        }
    }

    pub fn set_text(&mut self, id: &'static str, value: impl Into<String>) {
        self.values.insert(id, FieldValue::Text(value.into()));
    }

    pub fn flag(&self, id: &str) -> bool {
        matches!(self.values.get(id), Some(FieldValue::Flag(true)))
    }

    pub fn set_flag(&mut self, id: &'static str, value: bool) {
        self.values.insert(id, FieldValue::Flag(value));
    }

    /// Date fields hold a dd/mm/yyyy string; this normalizes it to ISO
    pub fn iso_date(&self, id: &str) -> Option<String> {
        validate::to_iso_date(self.text(id))
    }

    pub fn error(&self, id: &str) -> Option<&str> {
        self.errors.get(id).map(String::as_str)
    }

    pub fn set_error(&mut self, id: &'static str, message: impl Into<String>) {
        self.errors.insert(id, message.into());
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }

    fn toggle_revealed(&mut self, id: &'static str) {
        if !self.revealed.remove(id) {
            self.revealed.insert(id);
        }
    }
}

/// Small toggle switch in the style of a mobile setting
pub fn toggle_ui(ui: &mut egui::Ui, on: &mut bool) -> egui::Response {
    let desired_size = ui.spacing().interact_size.y * egui::vec2(2.0, 1.0);
    let (rect, mut response) = ui.allocate_exact_size(desired_size, egui::Sense::click());
    if response.clicked() {
        *on = !*on;
        response.mark_changed();
    }
    if ui.is_rect_visible(rect) {
        let how_on = ui.ctx().animate_bool(response.id, *on);
        let radius = 0.5 * rect.height();
        let bg = if *on { colors::ACCENT } else { colors::INPUT_BORDER };
        ui.painter()
            .rect_filled(rect, egui::CornerRadius::same(radius as u8), bg);
        let circle_x = egui::lerp((rect.left() + radius)..=(rect.right() - radius), how_on);
        let center = egui::pos2(circle_x, rect.center().y);
        ui.painter()
            .circle_filled(center, 0.75 * radius, colors::TEXT_LIGHT);
    }
    response
}

/// Render a single field and write edits back into the model
pub fn render_field(ui: &mut egui::Ui, descriptor: &FieldDescriptor, model: &mut FormModel) {
    let show_label = !descriptor.label.is_empty()
        && !matches!(descriptor.kind, FieldKind::Checkbox | FieldKind::Switch);
    if show_label {
        ui.label(
            egui::RichText::new(descriptor.label)
                .color(colors::TEXT_SECONDARY)
                .size(13.0),
        );
        ui.add_space(2.0);
    }

    match descriptor.kind {
        FieldKind::Text { mask } => {
            let mut value = model.text(descriptor.id).to_string();
            let response = ui.add(
                egui::TextEdit::singleline(&mut value)
                    .hint_text(descriptor.placeholder)
                    .desired_width(f32::INFINITY),
            );
            if response.changed() {
                if let Some(mask) = mask {
                    value = apply_mask(&value, mask);
                }
                model.set_text(descriptor.id, value);
            }
        }
        FieldKind::Password { show_toggle } => {
            let mut value = model.text(descriptor.id).to_string();
            let revealed = model.is_revealed(descriptor.id);
            let mut toggle_clicked = false;
            ui.horizontal(|ui| {
                let width = ui.available_width() - if show_toggle { 36.0 } else { 0.0 };
                let response = ui.add(
                    egui::TextEdit::singleline(&mut value)
                        .hint_text(descriptor.placeholder)
                        .password(!revealed)
                        .desired_width(width),
                );
                if response.changed() {
                    model.set_text(descriptor.id, value.clone());
                }
                if show_toggle {
                    let icon = if revealed { "🙈" } else { "👁" };
                    toggle_clicked = ui.button(icon).clicked();
                }
            });
            if toggle_clicked {
                model.toggle_revealed(descriptor.id);
            }
        }
        FieldKind::Textarea { rows } => {
            let mut value = model.text(descriptor.id).to_string();
            let response = ui.add(
                egui::TextEdit::multiline(&mut value)
                    .hint_text(descriptor.placeholder)
                    .desired_rows(rows)
                    .desired_width(f32::INFINITY),
            );
            if response.changed() {
                model.set_text(descriptor.id, value);
            }
        }
        FieldKind::Select { ref options } => {
            let current = model.text(descriptor.id).to_string();
            let selected_label = options
                .iter()
                .find(|o| o.value == current)
                .map(|o| o.label.clone())
                .unwrap_or_else(|| {
                    if descriptor.placeholder.is_empty() {
                        "Selecione...".to_string()
                    } else {
                        descriptor.placeholder.to_string()
                    }
                });
            let mut selection = current.clone();
            egui::ComboBox::from_id_salt(descriptor.id)
                .selected_text(selected_label)
                .width(ui.available_width().min(260.0))
                .show_ui(ui, |ui| {
                    for option in options {
                        ui.add_enabled_ui(!option.disabled, |ui| {
                            ui.selectable_value(
                                &mut selection,
                                option.value.clone(),
                                &option.label,
                            );
                        });
                    }
                });
            if selection != current {
                model.set_text(descriptor.id, selection);
            }
        }
        FieldKind::Checkbox => {
            let mut value = model.flag(descriptor.id);
            let text = if descriptor.placeholder.is_empty() {
                descriptor.label
            } else {
                descriptor.placeholder
            };
            if ui.checkbox(&mut value, text).changed() {
                model.set_flag(descriptor.id, value);
            }
        }
        FieldKind::Switch => {
            let mut value = model.flag(descriptor.id);
            let mut changed = false;
            ui.horizontal(|ui| {
                changed = toggle_ui(ui, &mut value).changed();
                let text = if descriptor.placeholder.is_empty() {
                    descriptor.label
                } else {
                    descriptor.placeholder
                };
                ui.label(text);
            });
            if changed {
                model.set_flag(descriptor.id, value);
            }
        }
        FieldKind::Date => {
            let mut value = model.text(descriptor.id).to_string();
            let hint = if descriptor.placeholder.is_empty() {
                "dd/mm/aaaa"
            } else {
                descriptor.placeholder
            };
            let response = ui.add(
                egui::TextEdit::singleline(&mut value)
                    .hint_text(hint)
                    .desired_width(f32::INFINITY),
            );
            if response.changed() {
                value = apply_mask(&value, mask::masks::DATE);
                model.set_text(descriptor.id, value);
            }
        }
    }

    if let Some(error) = model.error(descriptor.id) {
        ui.label(
            egui::RichText::new(error)
                .color(colors::ERROR)
                .size(12.0),
        );
    }
    ui.add_space(8.0);
}
