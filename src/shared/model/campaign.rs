//! Campaign draft state machine and webhook payload
//!
//! A campaign draft is transient page state: it is never persisted and
//! only leaves the app as a webhook payload once approved.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Audience filter for a campaign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudienceFilter {
    /// Every registered client
    All,
    /// Clients whose last purchase is after a given date
    Recent,
    /// Clients whose last purchase matches a product type
    Product,
}

impl AudienceFilter {
    pub const ALL_OPTIONS: [AudienceFilter; 3] = [Self::All, Self::Recent, Self::Product];

    /// Human-readable label for the filter select
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "Todos os clientes",
            Self::Recent => "Por data da última compra",
            Self::Product => "Por tipo de produto",
        }
    }
}

/// Lifecycle of a campaign draft
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CampaignPhase {
    /// Describing the promotion; nothing generated yet
    Drafting,
    /// An AI-generated message exists and awaits review
    Generated,
    /// The user explicitly approved the generated message
    Approved,
    /// The webhook call completed without a network error
    Sent,
}

/// JSON body posted to the configured webhook
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignPayload {
    pub message: String,
    pub filter: AudienceFilter,
    pub last_purchase_date: String,
    pub product_type: String,
    pub timestamp: String,
    pub user_email: String,
}

/// Transient campaign state owned by the composer screen
#[derive(Debug, Clone)]
pub struct CampaignDraft {
    /// The user's plain-language promotion description
    pub prompt: String,
    /// AI-generated message, empty while drafting
    pub message: String,
    pub filter: AudienceFilter,
    /// ISO date used when `filter` is `Recent`
    pub last_purchase_date: String,
    /// Product label used when `filter` is `Product`
    pub product_type: String,
    approved: bool,
    phase: CampaignPhase,
}

impl Default for CampaignDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl CampaignDraft {
    pub fn new() -> Self {
        Self {
            prompt: String::new(),
            message: String::new(),
            filter: AudienceFilter::All,
            last_purchase_date: String::new(),
            product_type: String::new(),
            approved: false,
            phase: CampaignPhase::Drafting,
        }
    }

    pub fn phase(&self) -> CampaignPhase {
        self.phase
    }

    pub fn approved(&self) -> bool {
        self.approved
    }

    /// Record a freshly generated message. Always lands in `Generated`
    /// and drops any previous approval.
    pub fn set_generated(&mut self, message: String) {
        self.message = message;
        self.approved = false;
        self.phase = CampaignPhase::Generated;
    }

    /// User toggles the approval checkbox. Only meaningful once a
    /// message was generated; unchecking reverts to `Generated`.
    pub fn set_approved(&mut self, approved: bool) {
        if self.message.is_empty() {
            return;
        }
        self.approved = approved;
        self.phase = if approved {
            CampaignPhase::Approved
        } else {
            CampaignPhase::Generated
        };
    }

    /// Whether dispatch is currently allowed
    pub fn can_send(&self, webhook_url: &str) -> bool {
        self.approved && self.phase == CampaignPhase::Approved && !webhook_url.trim().is_empty()
    }

    /// Build the webhook payload, enforcing the dispatch invariants
    pub fn build_payload(
        &self,
        user_email: &str,
        webhook_url: &str,
    ) -> Result<CampaignPayload, AppError> {
        if !self.approved || self.phase != CampaignPhase::Approved {
            return Err(AppError::validation(
                "approved",
                "Aprove a mensagem antes de enviar a campanha.",
            ));
        }
        if webhook_url.trim().is_empty() {
            return Err(AppError::validation(
                "webhookUrl",
                "Configure a URL do webhook nas configurações.",
            ));
        }
        Ok(CampaignPayload {
            message: self.message.clone(),
            filter: self.filter,
            last_purchase_date: self.last_purchase_date.clone(),
            product_type: self.product_type.clone(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            user_email: user_email.to_string(),
        })
    }

    /// The webhook call completed; the draft is spent
    pub fn mark_sent(&mut self) {
        self.phase = CampaignPhase::Sent;
    }

    /// Clear everything back to a fresh draft
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_draft_is_drafting() {
        let draft = CampaignDraft::new();
        assert_eq!(draft.phase(), CampaignPhase::Drafting);
        assert!(!draft.approved());
    }

    #[test]
    fn test_generation_resets_approval() {
        let mut draft = CampaignDraft::new();
        draft.set_generated("Promoção imperdível!".to_string());
        draft.set_approved(true);
        assert_eq!(draft.phase(), CampaignPhase::Approved);

        draft.set_generated("Outra mensagem".to_string());
        assert_eq!(draft.phase(), CampaignPhase::Generated);
        assert!(!draft.approved());
    }

    #[test]
    fn test_approval_requires_generated_message() {
        let mut draft = CampaignDraft::new();
        draft.set_approved(true);
        assert_eq!(draft.phase(), CampaignPhase::Drafting);
        assert!(!draft.approved());
    }

    #[test]
    fn test_cannot_send_without_approval() {
        let mut draft = CampaignDraft::new();
        draft.set_generated("msg".to_string());
        assert!(!draft.can_send("https://hooks.example/abc"));
        assert!(draft
            .build_payload("ana@email.com", "https://hooks.example/abc")
            .is_err());
    }

    #[test]
    fn test_cannot_send_without_webhook_url() {
        let mut draft = CampaignDraft::new();
        draft.set_generated("msg".to_string());
        draft.set_approved(true);
        assert!(!draft.can_send(""));
        assert!(!draft.can_send("   "));
        assert!(draft.build_payload("ana@email.com", "").is_err());
    }

    #[test]
    fn test_approved_draft_builds_payload() {
        let mut draft = CampaignDraft::new();
        draft.set_generated("Desconto de 30% hoje!".to_string());
        draft.set_approved(true);
        draft.filter = AudienceFilter::Product;
        draft.product_type = "eletronicos".to_string();

        let payload = draft
            .build_payload("ana@email.com", "https://hooks.example/abc")
            .unwrap();
        assert_eq!(payload.message, "Desconto de 30% hoje!");
        assert_eq!(payload.user_email, "ana@email.com");
        assert_eq!(payload.product_type, "eletronicos");
        assert!(!payload.timestamp.is_empty());
    }

    #[test]
    fn test_unapprove_reverts_to_generated() {
        let mut draft = CampaignDraft::new();
        draft.set_generated("msg".to_string());
        draft.set_approved(true);
        draft.set_approved(false);
        assert_eq!(draft.phase(), CampaignPhase::Generated);
    }

    #[test]
    fn test_payload_wire_format() {
        let payload = CampaignPayload {
            message: "m".to_string(),
            filter: AudienceFilter::Recent,
            last_purchase_date: "2024-01-15".to_string(),
            product_type: String::new(),
            timestamp: "2024-02-01T12:00:00.000Z".to_string(),
            user_email: "ana@email.com".to_string(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["filter"], "recent");
        assert_eq!(json["lastPurchaseDate"], "2024-01-15");
        assert_eq!(json["userEmail"], "ana@email.com");
    }
}
