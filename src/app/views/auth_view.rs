use eframe::egui;

use crate::app::state::AppState;
use crate::app::theme::colors;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let available_rect = ui.available_rect_before_wrap();
    ui.painter().rect_filled(available_rect, 0.0, colors::BG_DARK);

    ui.scope_builder(egui::UiBuilder::new().max_rect(available_rect), |ui| {
        ui.vertical_centered(|ui| {
            let total_height = if state.is_register_mode { 390.0 } else { 300.0 };
            let top_space = (available_rect.height() - total_height).max(0.0) / 2.0;
            ui.add_space(top_space);

            ui.label(
                egui::RichText::new("✨ CampanhasPro")
                    .size(32.0)
                    .strong()
                    .color(colors::TEXT_LIGHT),
            );
            ui.label(
                egui::RichText::new("Crie campanhas promocionais inteligentes")
                    .color(colors::TEXT_SECONDARY),
            );
            ui.add_space(20.0);

            ui.label(
                egui::RichText::new(if state.is_register_mode {
                    "Criar Conta"
                } else {
                    "Entrar"
                })
                .size(24.0)
                .color(colors::TEXT_LIGHT),
            );
            ui.add_space(16.0);

            if let Some(ref error) = state.auth_state.error {
                ui.label(egui::RichText::new(error).color(colors::ERROR));
                ui.add_space(10.0);
            }

            let input_width = 280.0;
            let label_width = 80.0;

            if state.is_register_mode {
                ui.horizontal(|ui| {
                    ui.add_space((available_rect.width() - input_width - label_width - 20.0) / 2.0);
                    ui.add_sized(
                        [label_width, 24.0],
                        egui::Label::new(
                            egui::RichText::new("Nome:").color(colors::TEXT_SECONDARY),
                        ),
                    );
                    ui.add_sized(
                        [input_width, 28.0],
                        egui::TextEdit::singleline(&mut state.name_input)
                            .text_color(colors::TEXT_LIGHT),
                    );
                });
                ui.add_space(8.0);
            }

            ui.horizontal(|ui| {
                ui.add_space((available_rect.width() - input_width - label_width - 20.0) / 2.0);
                ui.add_sized(
                    [label_width, 24.0],
                    egui::Label::new(egui::RichText::new("E-mail:").color(colors::TEXT_SECONDARY)),
                );
                ui.add_sized(
                    [input_width, 28.0],
                    egui::TextEdit::singleline(&mut state.email_input)
                        .hint_text("seu@email.com")
                        .text_color(colors::TEXT_LIGHT),
                );
            });
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.add_space((available_rect.width() - input_width - label_width - 20.0) / 2.0);
                ui.add_sized(
                    [label_width, 24.0],
                    egui::Label::new(egui::RichText::new("Senha:").color(colors::TEXT_SECONDARY)),
                );
                ui.add_sized(
                    [input_width, 28.0],
                    egui::TextEdit::singleline(&mut state.password_input)
                        .password(true)
                        .text_color(colors::TEXT_LIGHT),
                );
            });
            ui.add_space(8.0);

            if state.is_register_mode {
                ui.horizontal(|ui| {
                    ui.add_space((available_rect.width() - input_width - label_width - 20.0) / 2.0);
                    ui.add_sized(
                        [label_width, 24.0],
                        egui::Label::new(
                            egui::RichText::new("Confirmar:").color(colors::TEXT_SECONDARY),
                        ),
                    );
                    ui.add_sized(
                        [input_width, 28.0],
                        egui::TextEdit::singleline(&mut state.confirm_password_input)
                            .password(true)
                            .text_color(colors::TEXT_LIGHT),
                    );
                });
                ui.add_space(8.0);
            }

            ui.add_space(20.0);

            ui.horizontal(|ui| {
                let button_width = 130.0;
                let total_buttons_width = button_width * 2.0 + 10.0;
                ui.add_space((available_rect.width() - total_buttons_width) / 2.0);

                let submit_label = if state.is_register_mode {
                    "Cadastrar"
                } else {
                    "Entrar"
                };
                let submit = egui::Button::new(
                    egui::RichText::new(submit_label).color(colors::TEXT_LIGHT),
                )
                .fill(colors::ACCENT);
                let enabled = !state.auth_state.loading;
                if ui.add_enabled(enabled, submit.min_size(egui::vec2(button_width, 32.0))).clicked()
                {
                    state.auth_state.clear_error();
                    if state.is_register_mode {
                        state.handle_register();
                    } else {
                        state.handle_login();
                    }
                }

                ui.add_space(10.0);

                let toggle_label = if state.is_register_mode {
                    "Voltar ao login"
                } else {
                    "Criar conta"
                };
                if ui
                    .add_sized(
                        [button_width, 32.0],
                        egui::Button::new(
                            egui::RichText::new(toggle_label).color(colors::TEXT_SECONDARY),
                        ),
                    )
                    .clicked()
                {
                    state.toggle_auth_mode();
                }
            });

            if state.auth_state.loading {
                ui.add_space(15.0);
                ui.horizontal(|ui| {
                    ui.add_space((available_rect.width() - 100.0) / 2.0);
                    ui.label(egui::RichText::new("Carregando...").color(colors::TEXT_LIGHT));
                    ui.spinner();
                });
            }
        });
    });
}
