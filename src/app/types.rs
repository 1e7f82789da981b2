//! Shared app-level types

/// Current app view/mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    /// Login/register screen
    Auth,
    /// Campaign composer (the post-login landing screen)
    Campaign,
    /// Client registry table
    Clients,
    /// CSV bulk import
    Import,
    /// OpenAI key and webhook URL settings
    Settings,
}

impl AppView {
    /// Views reachable from the sidebar, in display order
    pub const NAVIGATION: [AppView; 4] = [
        Self::Campaign,
        Self::Clients,
        Self::Import,
        Self::Settings,
    ];

    /// Sidebar label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Auth => "Entrar",
            Self::Campaign => "Campanhas",
            Self::Clients => "Clientes",
            Self::Import => "Importar Clientes",
            Self::Settings => "Configurações",
        }
    }

    /// Every view except the auth screen requires a session
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Self::Auth)
    }
}
