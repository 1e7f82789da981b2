use eframe::egui;

use crate::app::forms::{self, FieldDescriptor, FieldKind};
use crate::app::state::AppState;
use crate::app::theme::{colors, styles};

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.label(
        egui::RichText::new("Configurações")
            .size(24.0)
            .strong()
            .color(colors::TEXT_LIGHT),
    );
    ui.label(
        egui::RichText::new("Configure suas integrações e preferências do sistema")
            .color(colors::TEXT_SECONDARY),
    );
    ui.add_space(12.0);

    egui::ScrollArea::vertical().show(ui, |ui| {
        styles::card_frame().show(ui, |ui| {
            ui.label(
                egui::RichText::new("🔑 Configuração da API OpenAI")
                    .strong()
                    .color(colors::TEXT_LIGHT),
            );
            ui.add_space(8.0);
            let key_field = FieldDescriptor::new(
                "openaiKey",
                "Chave da API OpenAI",
                FieldKind::Password { show_toggle: true },
            )
            .placeholder("sk-...");
            forms::render_field(ui, &key_field, &mut state.settings_form);
            ui.label(
                egui::RichText::new(
                    "Necessária para gerar mensagens promocionais com IA. Obtenha a sua em \
                     platform.openai.com.",
                )
                .size(12.0)
                .color(colors::TEXT_SECONDARY),
            );
        });
        ui.add_space(12.0);

        styles::card_frame().show(ui, |ui| {
            ui.label(
                egui::RichText::new("🔗 Configuração do Webhook")
                    .strong()
                    .color(colors::TEXT_LIGHT),
            );
            ui.add_space(8.0);
            let webhook_field = FieldDescriptor::new(
                "webhookUrl",
                "URL do Webhook (n8n ou outros)",
                FieldKind::Text { mask: None },
            )
            .placeholder("https://seu-webhook.n8n.cloud/webhook/...");
            forms::render_field(ui, &webhook_field, &mut state.settings_form);
            ui.label(
                egui::RichText::new(
                    "URL para onde as campanhas serão enviadas. Configure seu fluxo no n8n ou \
                     outro serviço de automação.",
                )
                .size(12.0)
                .color(colors::TEXT_SECONDARY),
            );
        });
        ui.add_space(12.0);

        styles::card_frame().show(ui, |ui| {
            let label = if state.is_saving_settings {
                "Salvando..."
            } else {
                "💾 Salvar Configurações"
            };
            let button = egui::Button::new(egui::RichText::new(label).color(colors::TEXT_LIGHT))
                .fill(colors::ACCENT)
                .min_size(egui::vec2(ui.available_width(), 36.0));
            if ui.add_enabled(!state.is_saving_settings, button).clicked() {
                state.save_settings();
            }
        });
    });
}
