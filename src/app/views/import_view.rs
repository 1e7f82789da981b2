use eframe::egui;

use crate::app::state::{AppState, ImportMethod};
use crate::app::theme::{colors, styles};

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.label(
        egui::RichText::new("Importar Clientes")
            .size(24.0)
            .strong()
            .color(colors::TEXT_LIGHT),
    );
    ui.label(
        egui::RichText::new("Importe clientes em massa usando arquivo CSV ou texto")
            .color(colors::TEXT_SECONDARY),
    );
    ui.add_space(12.0);

    egui::ScrollArea::vertical().show(ui, |ui| {
        render_template_card(ui, state);
        ui.add_space(12.0);
        render_source_card(ui, state);
        ui.add_space(12.0);
        render_guidelines_card(ui);
        ui.add_space(12.0);
        render_submit_card(ui, state);
    });
}

fn render_template_card(ui: &mut egui::Ui, state: &mut AppState) {
    styles::card_frame().show(ui, |ui| {
        ui.label(
            egui::RichText::new("⬇ Template CSV")
                .strong()
                .color(colors::TEXT_LIGHT),
        );
        ui.label(
            egui::RichText::new("Baixe o template para ver o formato correto dos dados")
                .size(12.0)
                .color(colors::TEXT_SECONDARY),
        );
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new("Colunas: name, email, phoneNumber, product, amount, lastPurchase")
                    .size(12.0)
                    .color(colors::TEXT_SECONDARY),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Baixar Template").clicked() {
                    state.save_template();
                }
            });
        });
    });
}

fn render_source_card(ui: &mut egui::Ui, state: &mut AppState) {
    styles::card_frame().show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.radio_value(
                &mut state.import_method,
                ImportMethod::File,
                "📄 Arquivo CSV",
            );
            ui.add_space(16.0);
            ui.radio_value(
                &mut state.import_method,
                ImportMethod::Text,
                "📋 Colar Dados CSV",
            );
        });
        ui.add_space(10.0);

        match state.import_method {
            ImportMethod::File => {
                ui.label(
                    egui::RichText::new("Caminho do arquivo CSV")
                        .size(13.0)
                        .color(colors::TEXT_SECONDARY),
                );
                ui.add_enabled(
                    !state.is_importing,
                    egui::TextEdit::singleline(&mut state.import_file_path)
                        .hint_text("/caminho/para/clientes.csv")
                        .desired_width(f32::INFINITY),
                );
                let path = std::path::Path::new(state.import_file_path.trim());
                if !state.import_file_path.trim().is_empty() {
                    if let Ok(metadata) = std::fs::metadata(path) {
                        ui.label(
                            egui::RichText::new(format!(
                                "📄 {} ({:.1} KB)",
                                path.file_name()
                                    .map(|n| n.to_string_lossy().into_owned())
                                    .unwrap_or_default(),
                                metadata.len() as f64 / 1024.0
                            ))
                            .size(12.0)
                            .color(colors::TEXT_SECONDARY),
                        );
                    }
                }
                ui.label(
                    egui::RichText::new("Apenas arquivos .csv são aceitos • Máximo 10 MB")
                        .size(12.0)
                        .color(colors::TEXT_SECONDARY),
                );
            }
            ImportMethod::Text => {
                ui.label(
                    egui::RichText::new("Dados CSV")
                        .size(13.0)
                        .color(colors::TEXT_SECONDARY),
                );
                ui.add_enabled(
                    !state.is_importing,
                    egui::TextEdit::multiline(&mut state.import_csv_text)
                        .hint_text(
                            "name,email,phoneNumber,product,amount,lastPurchase\n\
                             João Silva,joao@email.com,11999991234,Eletrônicos,1245.00,15/01/2024",
                        )
                        .desired_rows(8)
                        .code_editor()
                        .desired_width(f32::INFINITY),
                );
            }
        }
    });
}

fn render_guidelines_card(ui: &mut egui::Ui) {
    styles::card_frame().show(ui, |ui| {
        ui.label(
            egui::RichText::new("⚠ Diretrizes de Importação")
                .strong()
                .color(colors::WARNING),
        );
        ui.add_space(6.0);
        for guideline in [
            "O arquivo deve estar no formato CSV com separador vírgula (,)",
            "A primeira linha deve conter os nomes das colunas (cabeçalho)",
            "Emails devem ser únicos - clientes duplicados serão ignorados",
            "Datas devem estar no formato dd/MM/yyyy (ex: 15/01/2024)",
        ] {
            ui.label(
                egui::RichText::new(format!("• {}", guideline))
                    .size(12.0)
                    .color(colors::TEXT_SECONDARY),
            );
        }
    });
}

fn render_submit_card(ui: &mut egui::Ui, state: &mut AppState) {
    styles::card_frame().show(ui, |ui| {
        let has_input = match state.import_method {
            ImportMethod::File => !state.import_file_path.trim().is_empty(),
            ImportMethod::Text => !state.import_csv_text.trim().is_empty(),
        };
        let label = if state.is_importing {
            "Importando..."
        } else {
            "⬆ Importar Clientes"
        };
        let button = egui::Button::new(egui::RichText::new(label).color(colors::TEXT_LIGHT))
            .fill(colors::ACCENT)
            .min_size(egui::vec2(ui.available_width(), 36.0));
        if ui
            .add_enabled(has_input && !state.is_importing, button)
            .clicked()
        {
            state.handle_import();
        }
        if state.is_importing {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(
                    egui::RichText::new("Importando clientes...").color(colors::TEXT_SECONDARY),
                );
            });
        }
    });
}
