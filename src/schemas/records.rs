//! Backend record schemas
//!
//! Only the fields the tracking view reads are modelled. Unknown fields are
//! ignored so that backend additions do not break deserialization.

use serde::{Deserialize, Serialize};

use super::event::{deserialize_epoch_seconds, StatusEvent};

/// A buy-on-my-behalf request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingRequest {
    pub id: String,

    /// Customer-facing code used in URLs
    #[serde(default)]
    pub request_code: Option<String>,

    /// Current raw status (e.g. "INVOICED")
    pub status: String,

    /// Products the customer asked for, priced once quoted
    #[serde(default, rename = "shopping_request_products")]
    pub products: Vec<QuotationItem>,

    #[serde(default)]
    pub tracking_requests: Vec<StatusEvent>,

    #[serde(default, deserialize_with = "deserialize_epoch_seconds")]
    pub created_at: i64,
}

/// One product line of a shopping request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuotationItem {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub quantity: u32,

    /// Unset until the request is quoted
    #[serde(default)]
    pub unit_price: Option<f64>,
}

impl QuotationItem {
    /// Quantity times unit price; an unpriced item counts as zero
    pub fn line_total(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price.unwrap_or(0.0)
    }
}

/// A request to collect a package from the customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickupRequest {
    pub id: String,

    pub status: String,

    /// Quoted price, present once the request is quoted
    #[serde(default)]
    pub price: Option<f64>,

    #[serde(default)]
    pub tracking_requests: Vec<StatusEvent>,

    #[serde(default, deserialize_with = "deserialize_epoch_seconds")]
    pub created_at: i64,
}

/// Label/value pair the backend uses for shipment status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentStatus {
    #[serde(default)]
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Charge {
    pub amount: f64,
}

/// A shipment, as returned by the packages-by-shipment endpoint.
///
/// Shipments carry no status history, only the current status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    pub id: String,

    #[serde(default)]
    pub shipment_id: Option<String>,

    #[serde(default)]
    pub country: Option<Country>,

    #[serde(default)]
    pub charges: Vec<Charge>,

    pub status: ShipmentStatus,

    #[serde(default, deserialize_with = "deserialize_epoch_seconds")]
    pub created_at: i64,
}

impl Shipment {
    /// Sum of all charges on the shipment
    pub fn total_charges(&self) -> f64 {
        self.charges.iter().map(|c| c.amount).sum()
    }
}

/// A record of any tracked domain
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TrackedRecord {
    Shopping(ShoppingRequest),
    Pickup(PickupRequest),
    Shipment(Shipment),
}

impl TrackedRecord {
    pub fn id(&self) -> &str {
        match self {
            TrackedRecord::Shopping(r) => &r.id,
            TrackedRecord::Pickup(r) => &r.id,
            TrackedRecord::Shipment(r) => &r.id,
        }
    }

    /// Current raw status of the record
    pub fn status(&self) -> &str {
        match self {
            TrackedRecord::Shopping(r) => &r.status,
            TrackedRecord::Pickup(r) => &r.status,
            TrackedRecord::Shipment(r) => &r.status.value,
        }
    }

    pub fn created_at(&self) -> i64 {
        match self {
            TrackedRecord::Shopping(r) => r.created_at,
            TrackedRecord::Pickup(r) => r.created_at,
            TrackedRecord::Shipment(r) => r.created_at,
        }
    }

    /// Status history in backend order.
    ///
    /// Returns `None` for shipments, which only carry a current status.
    pub fn history(&self) -> Option<&[StatusEvent]> {
        match self {
            TrackedRecord::Shopping(r) => Some(&r.tracking_requests),
            TrackedRecord::Pickup(r) => Some(&r.tracking_requests),
            TrackedRecord::Shipment(_) => None,
        }
    }

    /// Mutable history, for sources that append status updates
    pub(crate) fn history_mut(&mut self) -> Option<&mut Vec<StatusEvent>> {
        match self {
            TrackedRecord::Shopping(r) => Some(&mut r.tracking_requests),
            TrackedRecord::Pickup(r) => Some(&mut r.tracking_requests),
            TrackedRecord::Shipment(_) => None,
        }
    }

    /// Overwrite the current raw status
    pub(crate) fn set_status(&mut self, status: &str) {
        match self {
            TrackedRecord::Shopping(r) => r.status = status.to_string(),
            TrackedRecord::Pickup(r) => r.status = status.to_string(),
            TrackedRecord::Shipment(r) => {
                r.status.label = status.to_string();
                r.status.value = status.to_string();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shopping_request_from_backend_json() {
        let json = r#"{
            "id": "sr-1",
            "request_code": "SR-0001",
            "status": "INVOICED",
            "created_at": "1700000000",
            "shopping_request_products": [
                {"id": "p-1", "name": "Kettle", "url": "https://example.com/k", "quantity": 2, "unit_price": 15.5},
                {"id": "p-2", "name": "Mug", "quantity": 1, "unit_price": null}
            ],
            "tracking_requests": [
                {"status": "REQUESTED", "created_at": "1700000000"},
                {"status": "INVOICED", "created_at": 1700086400}
            ]
        }"#;
        let request: ShoppingRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.request_code.as_deref(), Some("SR-0001"));
        assert_eq!(request.tracking_requests.len(), 2);
        assert_eq!(request.tracking_requests[1].created_at, 1700086400);
        assert_eq!(request.products.len(), 2);
        assert_eq!(request.products[0].line_total(), 31.0);
        assert_eq!(request.products[1].line_total(), 0.0);
    }

    #[test]
    fn test_pickup_request_without_history() {
        let json = r#"{"id": "pr-1", "status": "REQUESTED"}"#;
        let request: PickupRequest = serde_json::from_str(json).unwrap();
        assert!(request.tracking_requests.is_empty());
        assert!(request.price.is_none());
        assert_eq!(request.created_at, 0);
    }

    #[test]
    fn test_shipment_status_and_charges() {
        let json = r#"{
            "id": "pkg-1",
            "shipment_id": "SH-9",
            "country": {"id": "lk", "name": "Sri Lanka"},
            "charges": [{"amount": 12.5}, {"amount": 7.5}],
            "status": {"label": "Departed", "value": "Departed"},
            "created_at": "1700000000"
        }"#;
        let shipment: Shipment = serde_json::from_str(json).unwrap();
        assert_eq!(shipment.status.value, "Departed");
        assert_eq!(shipment.total_charges(), 20.0);

        let record = TrackedRecord::Shipment(shipment);
        assert_eq!(record.status(), "Departed");
        assert!(record.history().is_none());
    }

    #[test]
    fn test_record_missing_status_rejected() {
        let result = serde_json::from_str::<ShoppingRequest>(r#"{"id": "sr-1"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_set_status_updates_current_status() {
        let mut record = TrackedRecord::Pickup(PickupRequest {
            id: "pr-1".to_string(),
            status: "QUOTED".to_string(),
            price: Some(10.0),
            tracking_requests: vec![],
            created_at: 0,
        });
        record.set_status("CONFIRMED");
        assert_eq!(record.status(), "CONFIRMED");
    }

    #[test]
    fn test_set_status_rewrites_shipment_label_and_value() {
        let mut record = TrackedRecord::Shipment(Shipment {
            id: "pkg-1".to_string(),
            shipment_id: None,
            country: None,
            charges: vec![],
            status: ShipmentStatus {
                label: "Ship Request".to_string(),
                value: "Ship Request".to_string(),
            },
            created_at: 1700000000,
        });
        record.set_status("Departed");

        let TrackedRecord::Shipment(shipment) = &record else {
            panic!("expected a shipment");
        };
        assert_eq!(shipment.status.label, "Departed");
        assert_eq!(shipment.status.value, "Departed");
    }
}
