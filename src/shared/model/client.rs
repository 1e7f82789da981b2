//! Client (customer record) wire types
//!
//! A client always belongs to exactly one user; the backend enforces the
//! foreign key, the app only carries the owning user along.

use serde::{Deserialize, Serialize};

/// Owner summary embedded in a client record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientOwner {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// A customer record as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub phone_number: String,
    #[serde(default)]
    pub product: Option<String>,
    pub amount: f64,
    pub active: bool,
    /// ISO calendar date (YYYY-MM-DD) of the last purchase
    #[serde(default)]
    pub last_purchase: Option<String>,
    pub created_at: String,
    pub user: ClientOwner,
}

/// Request body for `POST /api/client/create`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClientRequest {
    pub name: String,
    pub email: Option<String>,
    pub phone_number: String,
    pub product: Option<String>,
    pub amount: f64,
    pub active: bool,
    pub last_purchase: Option<String>,
    /// Owning user (snake_case on the wire, unlike the other fields)
    #[serde(rename = "user_id")]
    pub user_id: i64,
}

/// Request body for `PUT /api/client/{id}`; absent fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClientRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_purchase: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_client_json() -> &'static str {
        r#"{
            "id": 1,
            "name": "João Silva",
            "email": "joao@email.com",
            "phoneNumber": "(11) 99999-1234",
            "product": "Eletrônicos",
            "amount": 1245.0,
            "active": true,
            "lastPurchase": "2024-01-15",
            "createdAt": "2024-01-16T10:00:00Z",
            "user": {"id": 1, "name": "Ana", "email": "ana@email.com"}
        }"#
    }

    #[test]
    fn test_client_deserializes_camel_case() {
        let client: Client = serde_json::from_str(sample_client_json()).unwrap();
        assert_eq!(client.phone_number, "(11) 99999-1234");
        assert_eq!(client.last_purchase.as_deref(), Some("2024-01-15"));
        assert_eq!(client.user.id, 1);
    }

    #[test]
    fn test_client_optional_fields_default() {
        let json = r#"{
            "id": 2,
            "name": "Maria",
            "phoneNumber": "11888885678",
            "amount": 589.0,
            "active": false,
            "createdAt": "2024-01-20T10:00:00Z",
            "user": {"id": 1, "name": "Ana", "email": "ana@email.com"}
        }"#;
        let client: Client = serde_json::from_str(json).unwrap();
        assert!(client.email.is_none());
        assert!(client.product.is_none());
        assert!(client.last_purchase.is_none());
    }

    #[test]
    fn test_create_request_user_id_stays_snake_case() {
        let request = CreateClientRequest {
            name: "João".to_string(),
            email: None,
            phone_number: "11999991234".to_string(),
            product: None,
            amount: 150.5,
            active: true,
            last_purchase: None,
            user_id: 42,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["user_id"], 42);
        assert_eq!(json["phoneNumber"], "11999991234");
        assert!(json.get("userId").is_none());
    }

    #[test]
    fn test_update_request_skips_absent_fields() {
        let request = UpdateClientRequest {
            active: Some(false),
            ..Default::default()
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"active":false}"#);
    }
}
