use chrono::NaiveDate;
use eframe::egui;

use crate::app::state::{AppState, StatusFilter};
use crate::app::table::{self, CellValue, ColumnAlign, TableAction, TableColumn, TableOptions};
use crate::app::theme::{colors, styles};
use crate::app::views::client_modal;
use crate::shared::model::Client;

const ACTION_EDIT: usize = 0;
const ACTION_DELETE: usize = 1;

fn columns() -> Vec<TableColumn<Client>> {
    vec![
        TableColumn::new("Cliente", |c: &Client| CellValue::Text(c.name.clone())),
        TableColumn::new("Email", |c: &Client| match c.email {
            Some(ref email) => CellValue::Text(email.clone()),
            None => CellValue::Empty,
        }),
        TableColumn::new("Telefone", |c: &Client| {
            CellValue::Text(c.phone_number.clone())
        })
        .not_sortable(),
        TableColumn::new("Última Compra", |c: &Client| {
            c.last_purchase
                .as_deref()
                .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
                .map(CellValue::Date)
                .unwrap_or(CellValue::Empty)
        }),
        TableColumn::new("Produto", |c: &Client| match c.product {
            Some(ref product) => CellValue::Text(product.clone()),
            None => CellValue::Empty,
        }),
        TableColumn::new("Valor", |c: &Client| CellValue::Money(c.amount))
            .align(ColumnAlign::Right),
        TableColumn::new("Status", |c: &Client| CellValue::Flag(c.active)),
    ]
}

fn actions() -> Vec<TableAction<Client>> {
    vec![
        TableAction::new("Editar"),
        TableAction::new("Excluir").destructive(),
    ]
}

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(
                egui::RichText::new("Clientes Cadastrados")
                    .size(24.0)
                    .strong()
                    .color(colors::TEXT_LIGHT),
            );
            ui.label(
                egui::RichText::new("Gerencie e visualize todos os seus clientes")
                    .color(colors::TEXT_SECONDARY),
            );
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let button = egui::Button::new(
                egui::RichText::new("+ Novo Cliente").color(colors::TEXT_LIGHT),
            )
            .fill(colors::ACCENT);
            if ui.add(button).clicked() {
                state.open_add_client();
            }
            if ui.button("Atualizar").clicked() {
                state.load_clients();
            }
        });
    });
    ui.add_space(12.0);

    styles::card_frame().show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Status:").color(colors::TEXT_SECONDARY));
            egui::ComboBox::from_id_salt("status_filter")
                .selected_text(state.status_filter.label())
                .show_ui(ui, |ui| {
                    for option in StatusFilter::ALL_OPTIONS {
                        ui.selectable_value(&mut state.status_filter, option, option.label());
                    }
                });
        });
        ui.add_space(8.0);

        // Status filter narrows the data before search and sort apply
        let rows: Vec<Client> = state
            .clients
            .iter()
            .filter(|c| state.status_filter.matches(c))
            .cloned()
            .collect();

        let options = TableOptions {
            loading: state.is_loading_clients,
            search_placeholder: "Nome ou email do cliente...",
            empty_message: "Nenhum cliente encontrado",
            ..Default::default()
        };

        let event = table::render(
            ui,
            &mut state.clients_table,
            &rows,
            &columns(),
            &actions(),
            &options,
        );

        if let Some(event) = event {
            let client = rows[event.row].clone();
            match event.action {
                ACTION_EDIT => state.open_edit_client(&client),
                ACTION_DELETE => state.request_delete_client(client.id),
                _ => {}
            }
        }
    });

    client_modal::render(ui, state);
    render_delete_confirmation(ui, state);
}

fn render_delete_confirmation(ui: &mut egui::Ui, state: &mut AppState) {
    if state.confirm_delete.is_none() && !state.is_deleting {
        return;
    }

    egui::Window::new("Excluir Cliente")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ui.ctx(), |ui| {
            ui.set_min_width(300.0);
            if state.is_deleting {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Excluindo...");
                });
                return;
            }
            ui.label("Tem certeza? Esta ação não pode ser desfeita.");
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui.button("Cancelar").clicked() {
                    state.confirm_delete = None;
                }
                let delete = egui::Button::new(
                    egui::RichText::new("Excluir").color(colors::TEXT_LIGHT),
                )
                .fill(colors::ERROR);
                if ui.add(delete).clicked() {
                    state.confirm_delete_client();
                }
            });
        });
}
