//! Add/Edit Client Modal
//!
//! The declarative form-field descriptors for a client record, rendered
//! inside a centered window. Validation happens in
//! `AppState::submit_client_form`; per-field errors land back in the
//! form model.

use eframe::egui;

use crate::app::forms::{self, mask::masks, FieldDescriptor, FieldKind};
use crate::app::state::AppState;
use crate::app::theme::colors;

fn descriptors() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::new("name", "Nome *", FieldKind::Text { mask: None })
            .placeholder("Nome completo"),
        FieldDescriptor::new("email", "Email", FieldKind::Text { mask: None })
            .placeholder("email@exemplo.com"),
        FieldDescriptor::new(
            "phoneNumber",
            "Telefone *",
            FieldKind::Text {
                mask: Some(masks::PHONE),
            },
        )
        .placeholder("(11) 99999-9999"),
        FieldDescriptor::new("product", "Produto", FieldKind::Text { mask: None })
            .placeholder("Produto/serviço adquirido"),
        FieldDescriptor::new("amount", "Valor *", FieldKind::Text { mask: None })
            .placeholder("0,00"),
        FieldDescriptor::new("lastPurchase", "Data da Última Compra", FieldKind::Date),
        FieldDescriptor::new("active", "Cliente ativo", FieldKind::Switch),
    ]
}

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    if !state.client_modal.open {
        return;
    }

    let title = if state.client_modal.editing.is_some() {
        "Editar Cliente"
    } else {
        "Adicionar Novo Cliente"
    };

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ui.ctx(), |ui| {
            ui.set_min_width(380.0);
            ui.label(
                egui::RichText::new("Campos com * são obrigatórios.")
                    .color(colors::TEXT_SECONDARY)
                    .size(12.0),
            );
            ui.add_space(10.0);

            let saving = state.client_modal.saving;
            ui.add_enabled_ui(!saving, |ui| {
                for descriptor in descriptors() {
                    forms::render_field(ui, &descriptor, &mut state.client_modal.form);
                }
            });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(!saving, egui::Button::new("Cancelar"))
                    .clicked()
                {
                    state.client_modal = Default::default();
                }

                let submit_label = if state.client_modal.editing.is_some() {
                    "Salvar"
                } else {
                    "Criar Cliente"
                };
                let submit = egui::Button::new(
                    egui::RichText::new(submit_label).color(colors::TEXT_LIGHT),
                )
                .fill(colors::ACCENT);
                if ui.add_enabled(!saving, submit).clicked() {
                    state.submit_client_form();
                }

                if saving {
                    ui.spinner();
                }
            });
        });
}
