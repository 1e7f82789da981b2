//! Campaign Webhook Dispatch
//!
//! Fire-and-forget POST of the campaign payload to the user-configured
//! webhook URL. The response body is not read meaningfully; success is
//! assumed once the network call does not fail.

use reqwest::Client;
use tokio::runtime::Runtime;

use crate::shared::error::AppError;
use crate::shared::model::CampaignPayload;

/// POST the payload to the webhook. Only a network-layer failure counts
/// as an error; whatever the receiving automation answers is ignored.
pub fn dispatch_campaign(webhook_url: &str, payload: &CampaignPayload) -> Result<(), AppError> {
    if webhook_url.trim().is_empty() {
        return Err(AppError::validation(
            "webhookUrl",
            "Configure a URL do webhook nas configurações.",
        ));
    }

    let rt = Runtime::new()
        .map_err(|e| AppError::network(format!("Failed to create runtime: {}", e)))?;

    rt.block_on(async {
        let response = Client::new()
            .post(webhook_url)
            .header("Content-Type", "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|e| AppError::network(e.to_string()))?;

        tracing::info!(
            "campaign dispatched to webhook, status {} (ignored)",
            response.status()
        );
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::model::AudienceFilter;

    fn sample_payload() -> CampaignPayload {
        CampaignPayload {
            message: "Promoção!".to_string(),
            filter: AudienceFilter::All,
            last_purchase_date: String::new(),
            product_type: String::new(),
            timestamp: "2024-02-01T12:00:00.000Z".to_string(),
            user_email: "ana@email.com".to_string(),
        }
    }

    #[test]
    fn test_empty_url_is_rejected_before_any_network_call() {
        let result = dispatch_campaign("", &sample_payload());
        assert!(matches!(result, Err(AppError::Validation { .. })));
        let result = dispatch_campaign("   ", &sample_payload());
        assert!(matches!(result, Err(AppError::Validation { .. })));
    }
}
