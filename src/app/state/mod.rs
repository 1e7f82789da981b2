//! Central Application State
//!
//! One struct owns every input buffer, busy flag and pending operation.
//! HTTP work runs on short-lived worker threads; each spawn stores an
//! `mpsc::Receiver` here and `check_pending_results` drains them once
//! per frame. Busy flags disable duplicate submission but impose no
//! other mutual exclusion.

use std::sync::mpsc::{channel, Receiver};

use crate::app::ai::OpenAiClient;
use crate::app::api::ApiClient;
use crate::app::auth::{self, AuthState};
use crate::app::clients_api::{self, ClientApi};
use crate::app::config::Config;
use crate::app::forms::{validate, FormModel};
use crate::app::notify::Notices;
use crate::app::session::Session;
use crate::app::storage::{LocalStore, Settings};
use crate::app::table::TableState;
use crate::app::types::AppView;
use crate::app::webhook;
use crate::shared::error::AppError;
use crate::shared::model::{
    AuthResponse, CampaignDraft, Client, CreateClientRequest, UpdateClientRequest,
};

/// Pending operation result types
pub type AuthResult = Result<AuthResponse, AppError>;
pub type LoadClientsResult = Result<Vec<Client>, AppError>;
pub type SaveClientResult = Result<Client, AppError>;
pub type DeleteClientResult = Result<(), AppError>;
pub type ImportResult = Result<String, AppError>;
pub type GenerateResult = Result<String, AppError>;
pub type DispatchResult = Result<(), AppError>;

/// Status filter applied on top of the table search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    pub const ALL_OPTIONS: [StatusFilter; 3] = [Self::All, Self::Active, Self::Inactive];

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "Todos",
            Self::Active => "Ativos",
            Self::Inactive => "Inativos",
        }
    }

    pub fn matches(&self, client: &Client) -> bool {
        match self {
            Self::All => true,
            Self::Active => client.active,
            Self::Inactive => !client.active,
        }
    }
}

/// How the import screen receives CSV data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImportMethod {
    #[default]
    File,
    Text,
}

/// Add/edit client modal state
#[derive(Debug, Default)]
pub struct ClientModal {
    pub open: bool,
    /// `Some(id)` while editing an existing client
    pub editing: Option<i64>,
    pub form: FormModel,
    pub saving: bool,
}

impl ClientModal {
    fn open_for_create(&mut self) {
        *self = Self::default();
        self.open = true;
        self.form.set_flag("active", true);
    }

    fn open_for_edit(&mut self, client: &Client) {
        *self = Self::default();
        self.open = true;
        self.editing = Some(client.id);
        self.form.set_text("name", client.name.clone());
        self.form
            .set_text("email", client.email.clone().unwrap_or_default());
        self.form.set_text("phoneNumber", client.phone_number.clone());
        self.form
            .set_text("product", client.product.clone().unwrap_or_default());
        self.form
            .set_text("amount", format!("{:.2}", client.amount).replace('.', ","));
        self.form.set_flag("active", client.active);
        if let Some(ref iso) = client.last_purchase {
            // Stored ISO, edited as dd/mm/yyyy
            if let Ok(date) = chrono::NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
                self.form
                    .set_text("lastPurchase", date.format("%d/%m/%Y").to_string());
            }
        }
    }
}

/// Central application state shared across egui views.
pub struct AppState {
    pub config: Config,
    pub store: LocalStore,
    pub auth_state: AuthState,
    pub current_view: AppView,
    pub notices: Notices,

    // Auth screen inputs
    pub name_input: String,
    pub email_input: String,
    pub password_input: String,
    pub confirm_password_input: String,
    pub is_register_mode: bool,
    pub auth_result: Option<Receiver<AuthResult>>,

    // Client registry
    pub clients: Vec<Client>,
    pub clients_loaded: bool,
    pub is_loading_clients: bool,
    pub clients_table: TableState,
    pub status_filter: StatusFilter,
    pub client_modal: ClientModal,
    /// Client id awaiting delete confirmation
    pub confirm_delete: Option<i64>,
    pub is_deleting: bool,
    pub pending_load_clients: Option<Receiver<LoadClientsResult>>,
    pub pending_save_client: Option<Receiver<SaveClientResult>>,
    pub pending_delete_client: Option<Receiver<DeleteClientResult>>,

    // CSV import
    pub import_method: ImportMethod,
    pub import_file_path: String,
    pub import_csv_text: String,
    pub is_importing: bool,
    pub pending_import: Option<Receiver<ImportResult>>,

    // Campaign composer
    pub campaign: CampaignDraft,
    /// Masked dd/mm/yyyy buffer behind `campaign.last_purchase_date`
    pub campaign_date_input: String,
    pub is_generating: bool,
    pub is_sending: bool,
    pub pending_generate: Option<Receiver<GenerateResult>>,
    pub pending_dispatch: Option<Receiver<DispatchResult>>,

    // Settings
    pub settings: Settings,
    pub settings_form: FormModel,
    pub is_saving_settings: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_store(Config::new(), LocalStore::new())
    }

    /// Construct against an explicit store (tests)
    pub fn with_store(config: Config, store: LocalStore) -> Self {
        let session = store.load_session();
        let settings = store.load_settings();
        let mut settings_form = FormModel::new();
        settings_form.set_text("openaiKey", settings.openai_key.clone());
        settings_form.set_text("webhookUrl", settings.webhook_url.clone());

        let current_view = if session.is_some() {
            AppView::Campaign
        } else {
            AppView::Auth
        };
        if let Some(ref session) = session {
            tracing::info!("session restored for {}", session.user.email);
        }

        Self {
            config,
            store,
            auth_state: AuthState {
                session,
                error: None,
                loading: false,
            },
            current_view,
            notices: Notices::new(),
            name_input: String::new(),
            email_input: String::new(),
            password_input: String::new(),
            confirm_password_input: String::new(),
            is_register_mode: false,
            auth_result: None,
            clients: Vec::new(),
            clients_loaded: false,
            is_loading_clients: false,
            clients_table: TableState::default(),
            status_filter: StatusFilter::default(),
            client_modal: ClientModal::default(),
            confirm_delete: None,
            is_deleting: false,
            pending_load_clients: None,
            pending_save_client: None,
            pending_delete_client: None,
            import_method: ImportMethod::default(),
            import_file_path: String::new(),
            import_csv_text: String::new(),
            is_importing: false,
            pending_import: None,
            campaign: CampaignDraft::new(),
            campaign_date_input: String::new(),
            is_generating: false,
            is_sending: false,
            pending_generate: None,
            pending_dispatch: None,
            settings,
            settings_form,
            is_saving_settings: false,
        }
    }

    fn session(&self) -> Option<&Session> {
        self.auth_state.session.as_ref()
    }

    /// Navigate, falling back to the auth view when unauthenticated
    pub fn navigate(&mut self, view: AppView) {
        if view.requires_auth() && !self.auth_state.is_authenticated() {
            self.current_view = AppView::Auth;
            return;
        }
        self.current_view = view;
        if view == AppView::Clients && !self.clients_loaded {
            self.load_clients();
        }
    }

    fn client_api(&self) -> Option<(ClientApi, i64)> {
        let session = self.session()?;
        let api = ApiClient::with_token(self.config.clone(), session.token.clone());
        Some((ClientApi::new(api), session.user.id))
    }

    // ----- auth -----

    pub fn toggle_auth_mode(&mut self) {
        self.is_register_mode = !self.is_register_mode;
        self.auth_state.clear_error();
        self.password_input.clear();
        self.confirm_password_input.clear();
    }

    pub fn handle_login(&mut self) {
        if self.email_input.trim().is_empty() || self.password_input.is_empty() {
            self.auth_state
                .set_error("Preencha e-mail e senha.".to_string());
            return;
        }

        self.auth_state.loading = true;
        self.auth_state.error = None;

        let email = self.email_input.trim().to_string();
        let password = self.password_input.clone();
        let config = self.config.clone();

        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = auth::login(&config, email, password);
            let _ = tx.send(result);
        });
        self.auth_result = Some(rx);
    }

    pub fn handle_register(&mut self) {
        let name = self.name_input.trim().to_string();
        if name.chars().count() < 2 {
            self.auth_state
                .set_error("Nome deve ter pelo menos 2 caracteres.".to_string());
            return;
        }
        if !validate::is_valid_email(&self.email_input) {
            self.auth_state
                .set_error("Digite um e-mail válido.".to_string());
            return;
        }
        if self.password_input.chars().count() < 8 {
            self.auth_state
                .set_error("Senha deve ter pelo menos 8 caracteres.".to_string());
            return;
        }
        if self.password_input != self.confirm_password_input {
            self.auth_state
                .set_error("Senhas não coincidem.".to_string());
            return;
        }

        self.auth_state.loading = true;
        self.auth_state.error = None;

        let email = self.email_input.trim().to_string();
        let password = self.password_input.clone();
        let config = self.config.clone();

        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = auth::register(&config, name, email, password);
            let _ = tx.send(result);
        });
        self.auth_result = Some(rx);
    }

    pub fn logout(&mut self) {
        if let Err(e) = self.store.clear_session() {
            tracing::warn!("failed to clear persisted session: {}", e);
        }
        self.auth_state = AuthState::new();
        self.current_view = AppView::Auth;
        self.name_input.clear();
        self.email_input.clear();
        self.password_input.clear();
        self.confirm_password_input.clear();
        self.clients.clear();
        self.clients_loaded = false;
        self.clients_table = TableState::default();
        self.campaign.reset();
        self.campaign_date_input.clear();
        tracing::info!("logged out");
    }

    // ----- client registry -----

    pub fn load_clients(&mut self) {
        let Some((api, user_id)) = self.client_api() else {
            return;
        };
        self.is_loading_clients = true;
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let _ = tx.send(api.list(user_id));
        });
        self.pending_load_clients = Some(rx);
    }

    pub fn open_add_client(&mut self) {
        self.client_modal.open_for_create();
    }

    pub fn open_edit_client(&mut self, client: &Client) {
        self.client_modal.open_for_edit(client);
    }

    /// Validate the modal form; on success fire the create/update call
    pub fn submit_client_form(&mut self) {
        let form = &mut self.client_modal.form;
        form.clear_errors();

        if form.text("name").trim().is_empty() {
            form.set_error("name", "Nome é obrigatório");
        }
        if !validate::is_valid_phone(form.text("phoneNumber")) {
            form.set_error("phoneNumber", "Telefone inválido");
        }
        let amount = validate::parse_amount(form.text("amount"));
        if amount.is_none() {
            form.set_error("amount", "Valor inválido");
        }
        let email = form.text("email").trim().to_string();
        if !email.is_empty() && !validate::is_valid_email(&email) {
            form.set_error("email", "Email inválido");
        }
        let last_purchase_text = form.text("lastPurchase").trim().to_string();
        let last_purchase = form.iso_date("lastPurchase");
        if !last_purchase_text.is_empty() && last_purchase.is_none() {
            form.set_error("lastPurchase", "Data inválida (dd/mm/aaaa)");
        }
        if form.has_errors() {
            return;
        }

        let Some((api, user_id)) = self.client_api() else {
            return;
        };
        let form = &self.client_modal.form;
        let name = form.text("name").trim().to_string();
        let phone_number = form.text("phoneNumber").trim().to_string();
        let product = form.text("product").trim().to_string();
        let email = (!email.is_empty()).then_some(email);
        let product = (!product.is_empty()).then_some(product);
        let active = form.flag("active");
        let amount = amount.unwrap_or_default();

        self.client_modal.saving = true;
        let editing = self.client_modal.editing;
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = match editing {
                Some(client_id) => {
                    let request = UpdateClientRequest {
                        name: Some(name),
                        email,
                        phone_number: Some(phone_number),
                        product,
                        amount: Some(amount),
                        active: Some(active),
                        last_purchase,
                    };
                    api.update(client_id, &request)
                }
                None => {
                    let request = CreateClientRequest {
                        name,
                        email,
                        phone_number,
                        product,
                        amount,
                        active,
                        last_purchase,
                        user_id,
                    };
                    api.create(&request)
                }
            };
            let _ = tx.send(result);
        });
        self.pending_save_client = Some(rx);
    }

    pub fn request_delete_client(&mut self, client_id: i64) {
        self.confirm_delete = Some(client_id);
    }

    pub fn confirm_delete_client(&mut self) {
        let Some(client_id) = self.confirm_delete.take() else {
            return;
        };
        let Some((api, _)) = self.client_api() else {
            return;
        };
        self.is_deleting = true;
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let _ = tx.send(api.delete(client_id));
        });
        self.pending_delete_client = Some(rx);
    }

    // ----- CSV import -----

    pub fn handle_import(&mut self) {
        let payload = match self.import_method {
            ImportMethod::File => {
                let path = std::path::PathBuf::from(self.import_file_path.trim());
                if self.import_file_path.trim().is_empty() {
                    self.notices
                        .error("Dados necessários", "Selecione um arquivo CSV.");
                    return;
                }
                match clients_api::validate_csv_file(&path) {
                    Ok(()) => match std::fs::read(&path) {
                        Ok(bytes) => {
                            let file_name = path
                                .file_name()
                                .map(|n| n.to_string_lossy().into_owned())
                                .unwrap_or_else(|| "clientes.csv".to_string());
                            (file_name, bytes)
                        }
                        Err(e) => {
                            self.notices
                                .error("Arquivo inválido", format!("Não foi possível ler: {}", e));
                            return;
                        }
                    },
                    Err(e) => {
                        self.notices.error("Arquivo inválido", e.notification_text());
                        return;
                    }
                }
            }
            ImportMethod::Text => {
                if self.import_csv_text.trim().is_empty() {
                    self.notices
                        .error("Dados necessários", "Cole os dados CSV.");
                    return;
                }
                (
                    "clientes.csv".to_string(),
                    self.import_csv_text.clone().into_bytes(),
                )
            }
        };

        let Some((api, user_id)) = self.client_api() else {
            return;
        };
        self.is_importing = true;
        let (file_name, bytes) = payload;
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let _ = tx.send(api.import(&file_name, bytes, user_id));
        });
        self.pending_import = Some(rx);
    }

    /// Write the example CSV to the user's download directory
    pub fn save_template(&mut self) {
        let dir = dirs::download_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(std::env::temp_dir);
        let path = dir.join("template_clientes.csv");
        match std::fs::write(&path, clients_api::template_csv()) {
            Ok(()) => self.notices.success(
                "Template salvo",
                format!("Arquivo gravado em {}", path.display()),
            ),
            Err(e) => self
                .notices
                .error("Erro ao salvar template", e.to_string()),
        }
    }

    // ----- campaign composer -----

    pub fn generate_message(&mut self) {
        if self.campaign.prompt.trim().is_empty() {
            self.notices.error(
                "Campo vazio",
                "Digite uma descrição da promoção primeiro.",
            );
            return;
        }
        let api_key = self.settings.openai_key.trim().to_string();
        if api_key.is_empty() {
            self.notices.error(
                "Chave da API necessária",
                "Configure sua chave da OpenAI nas configurações.",
            );
            return;
        }

        self.is_generating = true;
        let description = self.campaign.prompt.trim().to_string();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let client = OpenAiClient::new(api_key);
            let _ = tx.send(client.generate_campaign_message(&description));
        });
        self.pending_generate = Some(rx);
    }

    pub fn send_campaign(&mut self) {
        let user_email = self
            .session()
            .map(|s| s.user.email.clone())
            .unwrap_or_default();
        let webhook_url = self.settings.webhook_url.trim().to_string();

        let payload = match self.campaign.build_payload(&user_email, &webhook_url) {
            Ok(payload) => payload,
            Err(e) => {
                self.notices
                    .error("Não foi possível enviar", e.notification_text());
                return;
            }
        };

        self.is_sending = true;
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let _ = tx.send(webhook::dispatch_campaign(&webhook_url, &payload));
        });
        self.pending_dispatch = Some(rx);
    }

    // ----- settings -----

    pub fn save_settings(&mut self) {
        self.is_saving_settings = true;
        let settings = Settings {
            openai_key: self.settings_form.text("openaiKey").trim().to_string(),
            webhook_url: self.settings_form.text("webhookUrl").trim().to_string(),
        };
        match self.store.save_settings(&settings) {
            Ok(()) => {
                self.settings = settings;
                self.notices.success(
                    "Configurações salvas!",
                    "Suas configurações foram salvas com sucesso.",
                );
            }
            Err(e) => {
                self.notices
                    .error("Erro ao salvar", e.notification_text());
            }
        }
        self.is_saving_settings = false;
    }

    // ----- per-frame polling -----

    /// Drain every pending receiver; called once per frame
    pub fn check_pending_results(&mut self) {
        self.notices.prune();
        self.check_auth_result();
        self.check_load_clients();
        self.check_save_client();
        self.check_delete_client();
        self.check_import();
        self.check_generate();
        self.check_dispatch();
    }

    fn check_auth_result(&mut self) {
        if let Some(ref rx) = self.auth_result {
            if let Ok(result) = rx.try_recv() {
                self.auth_result = None;
                self.auth_state.loading = false;

                match result {
                    Ok(response) => {
                        let session = Session::from_auth(&response);
                        tracing::info!("authenticated as {}", session.user.email);
                        if let Err(e) = self.store.save_session(&session) {
                            tracing::warn!("failed to persist session: {}", e);
                        }
                        self.auth_state.session = Some(session);
                        self.auth_state.error = None;
                        self.current_view = AppView::Campaign;
                        self.password_input.clear();
                        self.confirm_password_input.clear();
                        self.is_register_mode = false;
                    }
                    Err(e) => {
                        tracing::error!("authentication failed: {}", e);
                        self.auth_state.set_error(e.notification_text());
                    }
                }
            }
        }
    }

    fn check_load_clients(&mut self) {
        if let Some(ref rx) = self.pending_load_clients {
            if let Ok(result) = rx.try_recv() {
                self.pending_load_clients = None;
                self.is_loading_clients = false;
                match result {
                    Ok(clients) => {
                        tracing::info!("loaded {} clients", clients.len());
                        self.clients = clients;
                        self.clients_loaded = true;
                    }
                    Err(e) => {
                        tracing::error!("failed to load clients: {}", e);
                        self.notices
                            .error("Erro ao carregar clientes", e.notification_text());
                    }
                }
            }
        }
    }

    fn check_save_client(&mut self) {
        if let Some(ref rx) = self.pending_save_client {
            if let Ok(result) = rx.try_recv() {
                self.pending_save_client = None;
                self.client_modal.saving = false;
                match result {
                    Ok(client) => {
                        let title = if self.client_modal.editing.is_some() {
                            "Cliente atualizado"
                        } else {
                            "Cliente criado"
                        };
                        self.notices
                            .success(title, format!("Cliente {} salvo com sucesso.", client.name));
                        self.client_modal = ClientModal::default();
                        self.load_clients();
                    }
                    Err(e) => {
                        self.notices
                            .error("Erro ao salvar cliente", e.notification_text());
                    }
                }
            }
        }
    }

    fn check_delete_client(&mut self) {
        if let Some(ref rx) = self.pending_delete_client {
            if let Ok(result) = rx.try_recv() {
                self.pending_delete_client = None;
                self.is_deleting = false;
                match result {
                    Ok(()) => {
                        self.notices
                            .success("Cliente excluído", "O cliente foi removido.");
                        self.load_clients();
                    }
                    Err(e) => {
                        self.notices
                            .error("Erro ao excluir cliente", e.notification_text());
                    }
                }
            }
        }
    }

    fn check_import(&mut self) {
        if let Some(ref rx) = self.pending_import {
            if let Ok(result) = rx.try_recv() {
                self.pending_import = None;
                self.is_importing = false;
                match result {
                    Ok(message) => {
                        let detail = if message.trim().is_empty() {
                            "Clientes importados com sucesso.".to_string()
                        } else {
                            message
                        };
                        self.notices.success("Importação realizada", detail);
                        self.import_file_path.clear();
                        self.import_csv_text.clear();
                        self.load_clients();
                    }
                    Err(e) => {
                        self.notices
                            .error("Erro na importação", e.notification_text());
                    }
                }
            }
        }
    }

    fn check_generate(&mut self) {
        if let Some(ref rx) = self.pending_generate {
            if let Ok(result) = rx.try_recv() {
                self.pending_generate = None;
                self.is_generating = false;
                match result {
                    Ok(message) => {
                        self.campaign.set_generated(message);
                        self.notices.success(
                            "Mensagem gerada!",
                            "Sua mensagem promocional foi criada com IA.",
                        );
                    }
                    Err(e) => {
                        self.notices
                            .error("Erro ao gerar mensagem", e.notification_text());
                    }
                }
            }
        }
    }

    fn check_dispatch(&mut self) {
        if let Some(ref rx) = self.pending_dispatch {
            if let Ok(result) = rx.try_recv() {
                self.pending_dispatch = None;
                self.is_sending = false;
                match result {
                    Ok(()) => {
                        self.campaign.mark_sent();
                        self.notices.success(
                            "Campanha enviada!",
                            "Sua campanha promocional foi disparada com sucesso.",
                        );
                        self.campaign.reset();
                        self.campaign_date_input.clear();
                    }
                    Err(e) => {
                        // The draft stays approved so the user may retry
                        self.notices.error(
                            "Erro no envio",
                            "Não foi possível enviar a campanha. Verifique o webhook.",
                        );
                        tracing::error!("webhook dispatch failed: {}", e);
                    }
                }
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::AppConfig;
    use crate::shared::model::{ClientOwner, User};

    fn test_state() -> (tempfile::TempDir, AppState) {
        let dir = tempfile::tempdir().unwrap();
        let config =
            Config::with_builder(AppConfig::builder().server_url("http://127.0.0.1:1".into()))
                .unwrap();
        let store = LocalStore::with_root(dir.path());
        let state = AppState::with_store(config, store);
        (dir, state)
    }

    fn authenticated_state() -> (tempfile::TempDir, AppState) {
        let (dir, mut state) = test_state();
        state.auth_state.session = Some(Session {
            token: "t".to_string(),
            user: User {
                id: 1,
                name: "Ana".to_string(),
                email: "ana@email.com".to_string(),
            },
        });
        (dir, state)
    }

    fn sample_client() -> Client {
        Client {
            id: 10,
            name: "João Silva".to_string(),
            email: Some("joao@email.com".to_string()),
            phone_number: "(11) 99999-1234".to_string(),
            product: Some("Eletrônicos".to_string()),
            amount: 1245.0,
            active: true,
            last_purchase: Some("2024-01-15".to_string()),
            created_at: "2024-01-16T10:00:00Z".to_string(),
            user: ClientOwner {
                id: 1,
                name: "Ana".to_string(),
                email: "ana@email.com".to_string(),
            },
        }
    }

    #[test]
    fn test_starts_at_auth_view_without_session() {
        let (_dir, state) = test_state();
        assert_eq!(state.current_view, AppView::Auth);
        assert!(!state.auth_state.is_authenticated());
    }

    #[test]
    fn test_restores_persisted_session() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::with_root(dir.path());
        store
            .save_session(&Session {
                token: "tok".to_string(),
                user: User {
                    id: 2,
                    name: "Carlos".to_string(),
                    email: "carlos@email.com".to_string(),
                },
            })
            .unwrap();
        let config =
            Config::with_builder(AppConfig::builder().server_url("http://127.0.0.1:1".into()))
                .unwrap();
        let state = AppState::with_store(config, store);
        assert!(state.auth_state.is_authenticated());
        assert_eq!(state.current_view, AppView::Campaign);
    }

    #[test]
    fn test_protected_navigation_redirects_to_auth() {
        let (_dir, mut state) = test_state();
        state.navigate(AppView::Clients);
        assert_eq!(state.current_view, AppView::Auth);
        state.navigate(AppView::Settings);
        assert_eq!(state.current_view, AppView::Auth);
    }

    #[test]
    fn test_login_requires_credentials() {
        let (_dir, mut state) = test_state();
        state.handle_login();
        assert!(state.auth_state.error.is_some());
        assert!(state.auth_result.is_none());
    }

    #[test]
    fn test_register_validation_chain() {
        let (_dir, mut state) = test_state();

        state.name_input = "A".to_string();
        state.handle_register();
        assert!(state.auth_state.error.as_deref().unwrap().contains("Nome"));

        state.name_input = "Ana Lima".to_string();
        state.email_input = "not-an-email".to_string();
        state.handle_register();
        assert!(state.auth_state.error.as_deref().unwrap().contains("e-mail"));

        state.email_input = "ana@email.com".to_string();
        state.password_input = "short".to_string();
        state.handle_register();
        assert!(state.auth_state.error.as_deref().unwrap().contains("Senha"));

        state.password_input = "longenough".to_string();
        state.confirm_password_input = "different".to_string();
        state.handle_register();
        assert!(state
            .auth_state
            .error
            .as_deref()
            .unwrap()
            .contains("coincidem"));
        assert!(state.auth_result.is_none());
    }

    #[test]
    fn test_logout_clears_session_and_redirects() {
        let (_dir, mut state) = authenticated_state();
        state.store.save_session(state.session().unwrap()).unwrap();
        state.current_view = AppView::Clients;

        state.logout();
        assert!(!state.auth_state.is_authenticated());
        assert_eq!(state.current_view, AppView::Auth);
        assert!(state.store.load_session().is_none());

        // Visiting a protected view afterwards redirects back
        state.navigate(AppView::Campaign);
        assert_eq!(state.current_view, AppView::Auth);
    }

    #[test]
    fn test_client_form_validation_blocks_submit() {
        let (_dir, mut state) = authenticated_state();
        state.open_add_client();
        state.submit_client_form();
        assert!(state.client_modal.form.has_errors());
        assert!(state.pending_save_client.is_none());
        assert!(state.client_modal.form.error("name").is_some());
        assert!(state.client_modal.form.error("amount").is_some());
    }

    #[test]
    fn test_client_form_rejects_zero_amount_and_bad_email() {
        let (_dir, mut state) = authenticated_state();
        state.open_add_client();
        let form = &mut state.client_modal.form;
        form.set_text("name", "João");
        form.set_text("phoneNumber", "(11) 99999-1234");
        form.set_text("amount", "0");
        form.set_text("email", "joao@");
        state.submit_client_form();
        assert!(state.client_modal.form.error("amount").is_some());
        assert!(state.client_modal.form.error("email").is_some());
        assert!(state.pending_save_client.is_none());
    }

    #[test]
    fn test_edit_modal_prefills_from_client() {
        let (_dir, mut state) = authenticated_state();
        let client = sample_client();
        state.open_edit_client(&client);
        let form = &state.client_modal.form;
        assert_eq!(state.client_modal.editing, Some(10));
        assert_eq!(form.text("name"), "João Silva");
        assert_eq!(form.text("amount"), "1245,00");
        assert_eq!(form.text("lastPurchase"), "15/01/2024");
        assert!(form.flag("active"));
    }

    #[test]
    fn test_import_requires_data() {
        let (_dir, mut state) = authenticated_state();
        state.import_method = ImportMethod::Text;
        state.handle_import();
        assert!(state.pending_import.is_none());
        assert!(!state.notices.is_empty());
    }

    #[test]
    fn test_import_rejects_non_csv_path() {
        let (dir, mut state) = authenticated_state();
        let path = dir.path().join("dados.txt");
        std::fs::write(&path, "name\n").unwrap();
        state.import_method = ImportMethod::File;
        state.import_file_path = path.to_string_lossy().into_owned();
        state.handle_import();
        assert!(state.pending_import.is_none());
        assert!(!state.notices.is_empty());
    }

    #[test]
    fn test_generate_requires_prompt_and_key() {
        let (_dir, mut state) = authenticated_state();
        state.generate_message();
        assert!(state.pending_generate.is_none());

        state.campaign.prompt = "Desconto de 30% hoje".to_string();
        state.generate_message();
        // No API key configured yet
        assert!(state.pending_generate.is_none());
    }

    #[test]
    fn test_send_campaign_blocked_without_approval_or_webhook() {
        let (_dir, mut state) = authenticated_state();
        state.campaign.set_generated("Mensagem".to_string());
        state.send_campaign();
        assert!(state.pending_dispatch.is_none());

        state.campaign.set_approved(true);
        // Still no webhook URL configured
        state.send_campaign();
        assert!(state.pending_dispatch.is_none());
    }

    #[test]
    fn test_save_settings_persists() {
        let (_dir, mut state) = authenticated_state();
        state.settings_form.set_text("openaiKey", "sk-test");
        state
            .settings_form
            .set_text("webhookUrl", "https://hooks.example/abc");
        state.save_settings();
        assert_eq!(state.settings.openai_key, "sk-test");
        let reloaded = state.store.load_settings();
        assert_eq!(reloaded.webhook_url, "https://hooks.example/abc");
    }

    #[test]
    fn test_status_filter() {
        let mut inactive = sample_client();
        inactive.active = false;
        assert!(StatusFilter::All.matches(&inactive));
        assert!(!StatusFilter::Active.matches(&inactive));
        assert!(StatusFilter::Inactive.matches(&inactive));
    }
}
