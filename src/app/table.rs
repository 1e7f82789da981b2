//! Generic Data Table
//!
//! Renders an arbitrary record list with client-side substring search,
//! single-column sort and a per-row action menu. Filtering and sorting
//! are pure functions of `(data, search, sort)`: the input collection is
//! never mutated and the visible order is recomputed from the original
//! order every frame, so toggling a sort direction is a stable reversal.

use std::cmp::Ordering;

use chrono::NaiveDate;
use eframe::egui;

use crate::app::theme::colors;

/// A cell's typed value; carries both the default rendering and the
/// native ordering used by the sorter.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Money(f64),
    Date(NaiveDate),
    Flag(bool),
}

impl CellValue {
    /// Default rendering rules: flags as Ativo/Inativo, dates as
    /// dd/mm/yyyy, money as R$ with Brazilian separators.
    pub fn display(&self) -> String {
        match self {
            Self::Empty => "-".to_string(),
            Self::Text(text) => text.clone(),
            Self::Money(amount) => format_brl(*amount),
            Self::Date(date) => date.format("%d/%m/%Y").to_string(),
            Self::Flag(active) => if *active { "Ativo" } else { "Inativo" }.to_string(),
        }
    }

    /// Stringified value used by the search filter
    pub fn search_text(&self) -> String {
        match self {
            Self::Empty => String::new(),
            _ => self.display(),
        }
    }

    /// Native ordering within a variant; mixed variants fall back to the
    /// rendered text so the sort stays total.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Money(a), Self::Money(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (Self::Date(a), Self::Date(b)) => a.cmp(b),
            (Self::Flag(a), Self::Flag(b)) => a.cmp(b),
            (Self::Text(a), Self::Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
            (Self::Empty, Self::Empty) => Ordering::Equal,
            (Self::Empty, _) => Ordering::Less,
            (_, Self::Empty) => Ordering::Greater,
            (a, b) => a.display().cmp(&b.display()),
        }
    }
}

/// Format an amount as Brazilian currency, e.g. `R$ 1.245,50`
pub fn format_brl(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let integer = cents / 100;
    let fraction = cents % 100;

    let digits = integer.to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{}R$ {},{:02}", sign, grouped, fraction)
}

/// Horizontal alignment of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Column descriptor: label plus a value extractor
pub struct TableColumn<T> {
    pub label: &'static str,
    pub sortable: bool,
    pub align: ColumnAlign,
    pub value: fn(&T) -> CellValue,
}

impl<T> TableColumn<T> {
    pub fn new(label: &'static str, value: fn(&T) -> CellValue) -> Self {
        Self {
            label,
            sortable: true,
            align: ColumnAlign::Left,
            value,
        }
    }

    pub fn not_sortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    pub fn align(mut self, align: ColumnAlign) -> Self {
        self.align = align;
        self
    }
}

/// Row action descriptor; each action can hide or disable itself based
/// on row content.
pub struct TableAction<T> {
    pub label: &'static str,
    pub destructive: bool,
    pub enabled: fn(&T) -> bool,
    pub hidden: fn(&T) -> bool,
}

impl<T> TableAction<T> {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            destructive: false,
            enabled: |_| true,
            hidden: |_| false,
        }
    }

    pub fn destructive(mut self) -> Self {
        self.destructive = true;
        self
    }

    pub fn enabled_when(mut self, predicate: fn(&T) -> bool) -> Self {
        self.enabled = predicate;
        self
    }

    pub fn hidden_when(mut self, predicate: fn(&T) -> bool) -> Self {
        self.hidden = predicate;
        self
    }
}

/// Active sort: column index plus direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortConfig {
    pub column: usize,
    pub ascending: bool,
}

/// Search and sort state owned by the hosting screen
#[derive(Debug, Clone, Default)]
pub struct TableState {
    pub search: String,
    pub sort: Option<SortConfig>,
}

impl TableState {
    /// Repeated clicks on the same column toggle the direction; a new
    /// column starts ascending.
    pub fn toggle_sort(&mut self, column: usize) {
        self.sort = Some(match self.sort {
            Some(current) if current.column == column => SortConfig {
                column,
                ascending: !current.ascending,
            },
            _ => SortConfig {
                column,
                ascending: true,
            },
        });
    }
}

/// Indices of rows whose stringified cells contain the term
/// (case-insensitive) in at least one column. Empty term keeps all.
pub fn filter_rows<T>(data: &[T], columns: &[TableColumn<T>], search: &str) -> Vec<usize> {
    let term = search.trim().to_lowercase();
    if term.is_empty() {
        return (0..data.len()).collect();
    }
    (0..data.len())
        .filter(|&i| {
            columns.iter().any(|column| {
                (column.value)(&data[i])
                    .search_text()
                    .to_lowercase()
                    .contains(&term)
            })
        })
        .collect()
}

/// Stable sort of the filtered indices by the configured column's native
/// ordering. Equal-valued rows keep their original relative order in
/// both directions.
pub fn sort_rows<T>(
    data: &[T],
    columns: &[TableColumn<T>],
    mut rows: Vec<usize>,
    sort: Option<SortConfig>,
) -> Vec<usize> {
    let Some(sort) = sort else {
        return rows;
    };
    let Some(column) = columns.get(sort.column) else {
        return rows;
    };
    rows.sort_by(|&a, &b| {
        let ordering = (column.value)(&data[a]).compare(&(column.value)(&data[b]));
        if sort.ascending {
            ordering
        } else {
            ordering.reverse()
        }
    });
    rows
}

/// Row/action pair reported back to the hosting screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableEvent {
    /// Index into the original data slice
    pub row: usize,
    /// Index into the action slice
    pub action: usize,
}

/// Presentation options
pub struct TableOptions {
    pub loading: bool,
    pub searchable: bool,
    pub search_placeholder: &'static str,
    pub empty_message: &'static str,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            loading: false,
            searchable: true,
            search_placeholder: "Buscar...",
            empty_message: "Nenhum resultado encontrado",
        }
    }
}

fn skeleton_cell(ui: &mut egui::Ui, width: f32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, 12.0), egui::Sense::hover());
    ui.painter()
        .rect_filled(rect, egui::CornerRadius::same(4), colors::SKELETON);
}

fn render_cell(ui: &mut egui::Ui, value: &CellValue, align: ColumnAlign) {
    let text = value.display();
    let widget: egui::Label = match value {
        CellValue::Flag(active) => {
            let (badge, color) = if *active {
                ("Ativo", colors::SUCCESS)
            } else {
                ("Inativo", colors::TEXT_SECONDARY)
            };
            egui::Label::new(egui::RichText::new(badge).color(color).strong())
        }
        CellValue::Text(t) if t.contains('@') => {
            egui::Label::new(egui::RichText::new(text).color(colors::LINK))
        }
        _ => egui::Label::new(egui::RichText::new(text).color(colors::TEXT_PRIMARY)),
    };
    match align {
        ColumnAlign::Left => {
            ui.add(widget);
        }
        ColumnAlign::Center => {
            ui.vertical_centered(|ui| ui.add(widget));
        }
        ColumnAlign::Right => {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.add(widget);
            });
        }
    }
}

/// Render the table. Returns the clicked row action, if any.
pub fn render<T>(
    ui: &mut egui::Ui,
    state: &mut TableState,
    data: &[T],
    columns: &[TableColumn<T>],
    actions: &[TableAction<T>],
    options: &TableOptions,
) -> Option<TableEvent> {
    let mut event = None;

    if options.searchable {
        ui.horizontal(|ui| {
            ui.label("🔍");
            ui.add_enabled(
                !options.loading,
                egui::TextEdit::singleline(&mut state.search)
                    .hint_text(options.search_placeholder)
                    .desired_width(280.0),
            );
            if !state.search.is_empty() && ui.button("✕").clicked() {
                state.search.clear();
            }
        });
        ui.add_space(8.0);
    }

    let grid_columns = columns.len() + usize::from(!actions.is_empty());

    if options.loading {
        egui::Grid::new("data_table_skeleton")
            .num_columns(grid_columns)
            .spacing([16.0, 10.0])
            .show(ui, |ui| {
                for _ in 0..5 {
                    for _ in 0..grid_columns {
                        skeleton_cell(ui, 90.0);
                    }
                    ui.end_row();
                }
            });
        return None;
    }

    let visible = sort_rows(
        data,
        columns,
        filter_rows(data, columns, &state.search),
        state.sort,
    );

    egui::Grid::new("data_table")
        .num_columns(grid_columns)
        .striped(true)
        .spacing([16.0, 8.0])
        .show(ui, |ui| {
            // Header row
            for (index, column) in columns.iter().enumerate() {
                if column.sortable {
                    let arrow = match state.sort {
                        Some(sort) if sort.column == index => {
                            if sort.ascending {
                                " ⬆"
                            } else {
                                " ⬇"
                            }
                        }
                        _ => "",
                    };
                    let header = egui::Button::new(
                        egui::RichText::new(format!("{}{}", column.label, arrow))
                            .strong()
                            .color(colors::TEXT_PRIMARY),
                    )
                    .frame(false);
                    if ui.add(header).clicked() {
                        state.toggle_sort(index);
                    }
                } else {
                    ui.label(
                        egui::RichText::new(column.label)
                            .strong()
                            .color(colors::TEXT_PRIMARY),
                    );
                }
            }
            if !actions.is_empty() {
                ui.label(
                    egui::RichText::new("Ações")
                        .strong()
                        .color(colors::TEXT_PRIMARY),
                );
            }
            ui.end_row();

            if visible.is_empty() {
                ui.label(
                    egui::RichText::new(options.empty_message).color(colors::TEXT_SECONDARY),
                );
                ui.end_row();
            }

            for &row_index in &visible {
                let row = &data[row_index];
                for column in columns {
                    render_cell(ui, &(column.value)(row), column.align);
                }
                if !actions.is_empty() {
                    ui.menu_button("⋯", |ui| {
                        for (action_index, action) in actions.iter().enumerate() {
                            if (action.hidden)(row) {
                                continue;
                            }
                            let text = if action.destructive {
                                egui::RichText::new(action.label).color(colors::ERROR)
                            } else {
                                egui::RichText::new(action.label)
                            };
                            let clicked = ui
                                .add_enabled((action.enabled)(row), egui::Button::new(text))
                                .clicked();
                            if clicked {
                                event = Some(TableEvent {
                                    row: row_index,
                                    action: action_index,
                                });
                                ui.close();
                            }
                        }
                    });
                }
                ui.end_row();
            }
        });

    if !visible.is_empty() {
        ui.add_space(8.0);
        let mut footer = format!("Mostrando {} de {} resultado(s)", visible.len(), data.len());
        if !state.search.trim().is_empty() {
            footer.push_str(&format!(" para \"{}\"", state.search.trim()));
        }
        ui.label(egui::RichText::new(footer).color(colors::TEXT_SECONDARY));
    }

    event
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        name: &'static str,
        amount: f64,
        active: bool,
    }

    fn columns() -> Vec<TableColumn<Row>> {
        vec![
            TableColumn::new("Nome", |r: &Row| CellValue::Text(r.name.to_string())),
            TableColumn::new("Valor", |r: &Row| CellValue::Money(r.amount))
                .align(ColumnAlign::Right),
            TableColumn::new("Status", |r: &Row| CellValue::Flag(r.active)),
        ]
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "João Silva", amount: 1245.0, active: true },
            Row { name: "Maria Santos", amount: 589.0, active: true },
            Row { name: "Pedro Costa", amount: 2150.0, active: false },
            Row { name: "Ana Oliveira", amount: 589.0, active: true },
        ]
    }

    #[test]
    fn test_filter_matches_any_column_case_insensitive() {
        let data = rows();
        let cols = columns();
        assert_eq!(filter_rows(&data, &cols, "maria"), vec![1]);
        assert_eq!(filter_rows(&data, &cols, "MARIA"), vec![1]);
        // "Inativo" only renders for Pedro
        assert_eq!(filter_rows(&data, &cols, "inativo"), vec![2]);
    }

    #[test]
    fn test_empty_search_keeps_everything_in_order() {
        let data = rows();
        let cols = columns();
        assert_eq!(filter_rows(&data, &cols, ""), vec![0, 1, 2, 3]);
        assert_eq!(filter_rows(&data, &cols, "   "), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_filter_result_is_subset() {
        let data = rows();
        let cols = columns();
        let kept = filter_rows(&data, &cols, "an");
        assert!(kept.iter().all(|&i| i < data.len()));
        for &i in &kept {
            let any_match = cols
                .iter()
                .any(|c| (c.value)(&data[i]).search_text().to_lowercase().contains("an"));
            assert!(any_match);
        }
    }

    #[test]
    fn test_sort_by_amount_ascending_then_descending() {
        let data = rows();
        let cols = columns();
        let all: Vec<usize> = (0..data.len()).collect();

        let asc = sort_rows(&data, &cols, all.clone(), Some(SortConfig { column: 1, ascending: true }));
        assert_eq!(asc, vec![1, 3, 0, 2]);

        let desc = sort_rows(&data, &cols, all, Some(SortConfig { column: 1, ascending: false }));
        assert_eq!(desc, vec![2, 0, 1, 3]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_values() {
        let data = rows();
        let cols = columns();
        let all: Vec<usize> = (0..data.len()).collect();
        // Maria (1) and Ana (3) share the amount; both directions keep 1 before 3
        let asc = sort_rows(&data, &cols, all.clone(), Some(SortConfig { column: 1, ascending: true }));
        let desc = sort_rows(&data, &cols, all, Some(SortConfig { column: 1, ascending: false }));
        let pos = |v: &[usize], x: usize| v.iter().position(|&i| i == x).unwrap();
        assert!(pos(&asc, 1) < pos(&asc, 3));
        assert!(pos(&desc, 1) < pos(&desc, 3));
    }

    #[test]
    fn test_sort_does_not_mutate_input() {
        let data = rows();
        let cols = columns();
        let _ = sort_rows(&data, &cols, vec![0, 1, 2, 3], Some(SortConfig { column: 0, ascending: true }));
        assert_eq!(data[0].name, "João Silva");
    }

    #[test]
    fn test_toggle_sort_cycles_direction() {
        let mut state = TableState::default();
        state.toggle_sort(2);
        assert_eq!(state.sort, Some(SortConfig { column: 2, ascending: true }));
        state.toggle_sort(2);
        assert_eq!(state.sort, Some(SortConfig { column: 2, ascending: false }));
        state.toggle_sort(0);
        assert_eq!(state.sort, Some(SortConfig { column: 0, ascending: true }));
    }

    #[test]
    fn test_action_predicates_see_row_content() {
        let action = TableAction::new("Editar")
            .hidden_when(|r: &Row| !r.active)
            .enabled_when(|r: &Row| r.amount > 100.0);
        let cheap_active = Row { name: "x", amount: 50.0, active: true };
        let rich_inactive = Row { name: "y", amount: 500.0, active: false };

        assert!(!(action.hidden)(&cheap_active));
        assert!((action.hidden)(&rich_inactive));
        assert!(!(action.enabled)(&cheap_active));
        assert!((action.enabled)(&rich_inactive));
    }

    #[test]
    fn test_format_brl() {
        assert_eq!(format_brl(1245.0), "R$ 1.245,00");
        assert_eq!(format_brl(589.5), "R$ 589,50");
        assert_eq!(format_brl(150.5), "R$ 150,50");
        assert_eq!(format_brl(1234567.89), "R$ 1.234.567,89");
        assert_eq!(format_brl(0.0), "R$ 0,00");
        assert_eq!(format_brl(-12.3), "-R$ 12,30");
    }

    #[test]
    fn test_cell_display_rules() {
        assert_eq!(CellValue::Empty.display(), "-");
        assert_eq!(CellValue::Flag(true).display(), "Ativo");
        assert_eq!(CellValue::Flag(false).display(), "Inativo");
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(CellValue::Date(date).display(), "15/01/2024");
    }

    #[test]
    fn test_cell_compare_dates() {
        let early = CellValue::Date(NaiveDate::from_ymd_opt(2023, 12, 10).unwrap());
        let late = CellValue::Date(NaiveDate::from_ymd_opt(2024, 1, 22).unwrap());
        assert_eq!(early.compare(&late), Ordering::Less);
        assert_eq!(CellValue::Empty.compare(&late), Ordering::Less);
    }
}
