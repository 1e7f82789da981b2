use eframe::egui;

use crate::app::forms::mask::{apply_mask, masks};
use crate::app::forms::validate;
use crate::app::state::AppState;
use crate::app::theme::{colors, styles};
use crate::shared::model::AudienceFilter;

const PRODUCT_TYPES: [(&str, &str); 5] = [
    ("roupas", "Roupas"),
    ("eletronicos", "Eletrônicos"),
    ("casa", "Casa e Decoração"),
    ("beleza", "Beleza e Cuidados"),
    ("esportes", "Esportes"),
];

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.label(
        egui::RichText::new("Campanhas Promocionais")
            .size(24.0)
            .strong()
            .color(colors::TEXT_LIGHT),
    );
    ui.label(
        egui::RichText::new("Crie e envie campanhas inteligentes com IA")
            .color(colors::TEXT_SECONDARY),
    );
    ui.add_space(12.0);

    egui::ScrollArea::vertical().show(ui, |ui| {
        render_composer_card(ui, state);
        ui.add_space(12.0);
        if !state.campaign.message.is_empty() {
            render_review_card(ui, state);
            ui.add_space(12.0);
        }
        render_audience_card(ui, state);
        ui.add_space(12.0);
        render_send_card(ui, state);
    });
}

fn render_composer_card(ui: &mut egui::Ui, state: &mut AppState) {
    styles::card_frame().show(ui, |ui| {
        ui.label(
            egui::RichText::new("🪄 Criar Mensagem Promocional")
                .strong()
                .color(colors::TEXT_LIGHT),
        );
        ui.add_space(8.0);
        ui.label(
            egui::RichText::new("Descreva sua promoção")
                .color(colors::TEXT_SECONDARY)
                .size(13.0),
        );
        ui.add_enabled(
            !state.is_generating,
            egui::TextEdit::multiline(&mut state.campaign.prompt)
                .hint_text("Ex: Desconto de 30% em todos os produtos da loja hoje das 9h às 18h")
                .desired_rows(3)
                .desired_width(f32::INFINITY),
        );
        ui.add_space(8.0);

        let label = if state.is_generating {
            "Gerando..."
        } else {
            "🪄 Gerar Mensagem com IA"
        };
        let button = egui::Button::new(egui::RichText::new(label).color(colors::TEXT_LIGHT))
            .fill(colors::ACCENT)
            .min_size(egui::vec2(ui.available_width(), 32.0));
        if ui.add_enabled(!state.is_generating, button).clicked() {
            state.generate_message();
        }
        if state.is_generating {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(egui::RichText::new("Consultando a IA...").color(colors::TEXT_SECONDARY));
            });
        }
    });
}

fn render_review_card(ui: &mut egui::Ui, state: &mut AppState) {
    styles::card_frame().show(ui, |ui| {
        ui.label(
            egui::RichText::new("✔ Revisar Mensagem Gerada")
                .strong()
                .color(colors::TEXT_LIGHT),
        );
        ui.add_space(8.0);

        egui::Frame::new()
            .fill(colors::INPUT_BG)
            .corner_radius(egui::CornerRadius::same(6))
            .inner_margin(egui::Margin::same(10))
            .show(ui, |ui| {
                ui.label(
                    egui::RichText::new(&state.campaign.message).color(colors::TEXT_PRIMARY),
                );
            });
        ui.add_space(8.0);

        let mut approved = state.campaign.approved();
        if ui
            .checkbox(&mut approved, "Aprovar esta mensagem para envio")
            .changed()
        {
            state.campaign.set_approved(approved);
        }
    });
}

fn render_audience_card(ui: &mut egui::Ui, state: &mut AppState) {
    styles::card_frame().show(ui, |ui| {
        ui.label(
            egui::RichText::new("📋 Seleção de Público")
                .strong()
                .color(colors::TEXT_LIGHT),
        );
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Filtro de Clientes:").color(colors::TEXT_SECONDARY));
            egui::ComboBox::from_id_salt("audience_filter")
                .selected_text(state.campaign.filter.label())
                .show_ui(ui, |ui| {
                    for option in AudienceFilter::ALL_OPTIONS {
                        ui.selectable_value(&mut state.campaign.filter, option, option.label());
                    }
                });
        });
        ui.add_space(8.0);

        match state.campaign.filter {
            AudienceFilter::Recent => {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new("Última compra após:").color(colors::TEXT_SECONDARY),
                    );
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut state.campaign_date_input)
                            .hint_text("dd/mm/aaaa")
                            .desired_width(110.0),
                    );
                    if response.changed() {
                        state.campaign_date_input =
                            apply_mask(&state.campaign_date_input, masks::DATE);
                        // Normalized to ISO; incomplete input leaves it unset
                        state.campaign.last_purchase_date =
                            validate::to_iso_date(&state.campaign_date_input).unwrap_or_default();
                    }
                    if !state.campaign.last_purchase_date.is_empty() {
                        ui.label(
                            egui::RichText::new(&state.campaign.last_purchase_date)
                                .size(12.0)
                                .color(colors::TEXT_SECONDARY),
                        );
                    }
                });
            }
            AudienceFilter::Product => {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new("Tipo de Produto:").color(colors::TEXT_SECONDARY),
                    );
                    let selected_label = PRODUCT_TYPES
                        .iter()
                        .find(|(value, _)| *value == state.campaign.product_type)
                        .map(|(_, label)| *label)
                        .unwrap_or("Selecione o tipo");
                    egui::ComboBox::from_id_salt("product_type")
                        .selected_text(selected_label)
                        .show_ui(ui, |ui| {
                            for (value, label) in PRODUCT_TYPES {
                                ui.selectable_value(
                                    &mut state.campaign.product_type,
                                    value.to_string(),
                                    label,
                                );
                            }
                        });
                });
            }
            AudienceFilter::All => {}
        }
    });
}

fn render_send_card(ui: &mut egui::Ui, state: &mut AppState) {
    styles::card_frame().show(ui, |ui| {
        let label = if state.is_sending {
            "Enviando Campanha..."
        } else {
            "📤 Enviar Campanha"
        };
        let enabled = state.campaign.approved() && !state.is_sending;
        let button = egui::Button::new(egui::RichText::new(label).color(colors::TEXT_LIGHT))
            .fill(colors::SUCCESS)
            .min_size(egui::vec2(ui.available_width(), 40.0));
        if ui.add_enabled(enabled, button).clicked() {
            state.send_campaign();
        }
    });
}
