//! Client Registry API
//!
//! Async functions for the client CRUD and bulk-import endpoints,
//! wrapped for worker-thread use.

use crate::app::api::ApiClient;
use crate::shared::error::AppError;
use crate::shared::model::{Client, CreateClientRequest, UpdateClientRequest};

/// Largest accepted CSV upload, checked client-side before the request
pub const MAX_IMPORT_BYTES: u64 = 10 * 1024 * 1024;

/// Fixed header row of the import template
pub const TEMPLATE_HEADER: &str = "name,email,phoneNumber,product,amount,lastPurchase";

/// Two-row example CSV offered for download on the import screen
pub fn template_csv() -> String {
    format!(
        "{}\n{}\n{}\n",
        TEMPLATE_HEADER,
        "João Silva,joao@email.com,11999991234,Eletrônicos,1245.00,15/01/2024",
        "Maria Santos,maria@email.com,5511888885678,Roupas,589.00,20/01/2024",
    )
}

/// Client registry API
pub struct ClientApi {
    api: ApiClient,
}

impl ClientApi {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// List every client owned by a user
    pub fn list(&self, user_id: i64) -> Result<Vec<Client>, AppError> {
        self.api.get(&format!("/api/client/user/{}", user_id))
    }

    pub fn create(&self, request: &CreateClientRequest) -> Result<Client, AppError> {
        self.api.post("/api/client/create", request)
    }

    pub fn update(&self, client_id: i64, request: &UpdateClientRequest) -> Result<Client, AppError> {
        self.api.put(&format!("/api/client/{}", client_id), request)
    }

    pub fn delete(&self, client_id: i64) -> Result<(), AppError> {
        self.api.delete(&format!("/api/client/{}", client_id))
    }

    /// Upload raw CSV bytes plus the owning user id. Parsing,
    /// deduplication and row validation are the backend's job; the
    /// returned string is its verbatim status message.
    pub fn import(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        user_id: i64,
    ) -> Result<String, AppError> {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str("text/csv")
            .map_err(|e| AppError::network(format!("Failed to build upload: {}", e)))?;
        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("userId", user_id.to_string());
        self.api.post_multipart("/api/client/import-clients", form)
    }
}

/// Validate a CSV path client-side: `.csv` extension and size ≤ 10 MB.
/// Everything about the content is left to the backend.
pub fn validate_csv_file(path: &std::path::Path) -> Result<(), AppError> {
    let is_csv = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);
    if !is_csv {
        return Err(AppError::validation(
            "file",
            "Selecione um arquivo CSV válido.",
        ));
    }
    let metadata = std::fs::metadata(path)
        .map_err(|_| AppError::validation("file", "Arquivo não encontrado."))?;
    if metadata.len() > MAX_IMPORT_BYTES {
        return Err(AppError::validation("file", "Arquivo muito grande. Máximo 10 MB."));
    }
    Ok(())
}
