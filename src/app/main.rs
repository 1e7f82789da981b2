//! CampanhasPro - Main Entry Point
//!
//! Native desktop client for the promotional-campaign workflow: auth,
//! client registry, CSV import, AI-assisted composer and settings.

use eframe::egui;
use tracing_subscriber::EnvFilter;

use campanhaspro::app::theme::styles;
use campanhaspro::app::{views, AppState};

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "CampanhasPro",
        options,
        Box::new(|cc| {
            styles::apply_global_theme(&cc.egui_ctx);
            Ok(Box::new(CampanhasApp::default()))
        }),
    )
}

/// Main application state
struct CampanhasApp {
    state: AppState,
}

impl Default for CampanhasApp {
    fn default() -> Self {
        Self {
            state: AppState::new(),
        }
    }
}

impl eframe::App for CampanhasApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.check_pending_results();

        views::render_top_bar(ctx, &mut self.state);
        views::render_sidebar(ctx, &mut self.state);
        views::render_main_panel(ctx, &mut self.state);
        views::render_notices(ctx, &mut self.state);

        ctx.request_repaint();
    }
}
