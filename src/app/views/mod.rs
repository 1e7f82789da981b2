use eframe::egui;

use crate::app::notify::NoticeKind;
use crate::app::state::AppState;
use crate::app::theme::{colors, styles};
use crate::app::types::AppView;

pub mod auth_view;
pub mod campaign_view;
pub mod client_modal;
pub mod clients_view;
pub mod import_view;
pub mod settings_view;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::top("top_panel")
        .frame(styles::top_bar_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(
                    colors::TEXT_LIGHT,
                    egui::RichText::new("✨ CampanhasPro").size(18.0).strong(),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(16.0);
                    if state.auth_state.is_authenticated() {
                        if ui.button("Sair").clicked() {
                            state.logout();
                        }
                        if let Some(ref session) = state.auth_state.session {
                            ui.colored_label(colors::TEXT_SECONDARY, &session.user.email);
                        }
                    }
                });
            });
        });
}

pub fn render_sidebar(ctx: &egui::Context, state: &mut AppState) {
    if !state.auth_state.is_authenticated() {
        return;
    }

    egui::SidePanel::left("sidebar")
        .frame(styles::sidebar_frame())
        .resizable(false)
        .exact_width(190.0)
        .show(ctx, |ui| {
            ui.add_space(12.0);
            for view in AppView::NAVIGATION {
                let selected = state.current_view == view;
                let text = if selected {
                    egui::RichText::new(view.label())
                        .color(colors::TEXT_LIGHT)
                        .strong()
                } else {
                    egui::RichText::new(view.label()).color(colors::TEXT_SECONDARY)
                };
                let button = egui::Button::new(text)
                    .fill(if selected {
                        colors::SELECTED_ITEM
                    } else {
                        colors::SIDEBAR_BG
                    })
                    .min_size(egui::vec2(ui.available_width(), 32.0));
                if ui.add(button).clicked() {
                    state.navigate(view);
                }
                ui.add_space(4.0);
            }
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    egui::CentralPanel::default()
        .frame(styles::content_frame())
        .show(ctx, |ui| {
            // Any protected view falls back to the auth screen
            if state.current_view.requires_auth() && !state.auth_state.is_authenticated() {
                state.current_view = AppView::Auth;
            }
            match state.current_view {
                AppView::Auth => auth_view::render(ui, state),
                AppView::Campaign => campaign_view::render(ui, state),
                AppView::Clients => clients_view::render(ui, state),
                AppView::Import => import_view::render(ui, state),
                AppView::Settings => settings_view::render(ui, state),
            }
        });
}

/// Toast overlay in the top-right corner
pub fn render_notices(ctx: &egui::Context, state: &mut AppState) {
    if state.notices.is_empty() {
        return;
    }

    let mut dismiss = None;
    egui::Area::new(egui::Id::new("notices"))
        .anchor(egui::Align2::RIGHT_TOP, [-16.0, 48.0])
        .show(ctx, |ui| {
            ui.set_max_width(320.0);
            for (index, notice) in state.notices.iter().enumerate() {
                let border = match notice.kind {
                    NoticeKind::Success => colors::SUCCESS,
                    NoticeKind::Error => colors::ERROR,
                    NoticeKind::Info => colors::ACCENT,
                };
                styles::notice_frame(border).show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.label(
                                egui::RichText::new(&notice.title)
                                    .strong()
                                    .color(colors::TEXT_LIGHT),
                            );
                            ui.label(
                                egui::RichText::new(&notice.message)
                                    .size(12.0)
                                    .color(colors::TEXT_SECONDARY),
                            );
                        });
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::TOP),
                            |ui| {
                                if ui.button("✕").clicked() {
                                    dismiss = Some(index);
                                }
                            },
                        );
                    });
                });
                ui.add_space(6.0);
            }
        });
    if let Some(index) = dismiss {
        state.notices.dismiss(index);
    }
}
