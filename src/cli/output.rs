//! Rendering resolved pipelines for the terminal

use serde::Serialize;

use crate::domain::{
    is_cancelled, is_deletable, status_message_or_default, DomainKind, PipelineDefinition,
    PipelineProgress, QuotationSummary,
};
use crate::errors::{Result, TracklineError};
use crate::schemas::{ResolvedStep, TrackedRecord};

/// Everything the tracking panel shows for one record
#[derive(Debug, Clone, Serialize)]
pub struct TrackingView {
    pub pipeline: String,
    pub id: String,
    pub status: String,
    /// Customer-facing code: request code or shipment id
    pub reference: Option<String>,
    /// Destination country of a shipment
    pub destination: Option<String>,
    /// Quoted pickup price, or the sum of a shipment's charges
    pub price: Option<f64>,
    /// Totals of a quoted shopping request
    pub quotation: Option<QuotationSummary>,
    pub message: String,
    pub cancelled: bool,
    pub deletable: bool,
    pub progress: PipelineProgress,
    pub steps: Vec<ResolvedStep>,
}

impl TrackingView {
    pub fn new(
        kind: DomainKind,
        pipeline: &PipelineDefinition,
        record: &TrackedRecord,
        steps: Vec<ResolvedStep>,
    ) -> Self {
        let status = record.status();
        let (reference, destination, price, quotation) = match record {
            TrackedRecord::Shopping(r) => {
                let quotation =
                    (!r.products.is_empty()).then(|| QuotationSummary::from_items(&r.products));
                (r.request_code.clone(), None, None, quotation)
            }
            TrackedRecord::Pickup(r) => (None, None, r.price, None),
            TrackedRecord::Shipment(r) => {
                let price = (!r.charges.is_empty()).then(|| r.total_charges());
                let destination = r.country.as_ref().map(|c| c.name.clone());
                (r.shipment_id.clone(), destination, price, None)
            }
        };
        TrackingView {
            pipeline: pipeline.name().to_string(),
            id: record.id().to_string(),
            status: status.to_string(),
            reference,
            destination,
            price,
            quotation,
            message: status_message_or_default(kind, status).to_string(),
            cancelled: is_cancelled(status),
            deletable: is_deletable(kind, status),
            progress: PipelineProgress::from_steps(&steps),
            steps,
        }
    }

    /// Plain-text timeline
    pub fn render_text(&self) -> String {
        let mut out = match &self.reference {
            Some(reference) => format!(
                "{} {} [{}] ({})\n",
                self.pipeline, self.id, reference, self.status
            ),
            None => format!("{} {} ({})\n", self.pipeline, self.id, self.status),
        };
        if let Some(destination) = &self.destination {
            out.push_str(&format!("  Destination: {}\n", destination));
        }
        if self.cancelled {
            out.push_str("  CANCELLED\n");
        }

        let width = self.steps.iter().map(|s| s.label.len()).max().unwrap_or(0);
        for step in &self.steps {
            let marker = match (step.is_current, step.is_completed) {
                (true, _) => "[>]",
                (false, true) => "[x]",
                (false, false) => "[ ]",
            };
            out.push_str(&format!(
                "  {} {:<width$}  {}\n",
                marker,
                step.label,
                step.description,
                width = width
            ));
        }

        if let Some(price) = self.price {
            out.push_str(&format!("  Price: {:.2}\n", price));
        }
        if let Some(quotation) = &self.quotation {
            out.push_str(&quotation.render_text());
        }

        out.push_str(&format!(
            "{}/{} steps completed\n",
            self.progress.completed, self.progress.total
        ));
        out.push_str(&self.message);
        out.push('\n');
        out
    }
}

/// Serialize a value as pretty JSON for stdout
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| TracklineError::wrap(e, "serializing output"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{resolve_pipeline, shopping_request_pipeline, ResolveOptions};
    use crate::domain::{pickup_request_pipeline, resolve_current_status, shipment_pipeline};
    use crate::schemas::{
        Charge, Country, PickupRequest, QuotationItem, Shipment, ShipmentStatus, ShoppingRequest,
        StatusEvent,
    };

    fn view(status: &str, events: Vec<StatusEvent>) -> TrackingView {
        let pipeline = shopping_request_pipeline();
        let record = TrackedRecord::Shopping(ShoppingRequest {
            id: "sr-1".to_string(),
            request_code: None,
            status: status.to_string(),
            products: vec![],
            tracking_requests: events,
            created_at: 1700000000,
        });
        let steps = resolve_pipeline(
            &pipeline,
            record.history().unwrap_or_default(),
            &ResolveOptions::default(),
        );
        TrackingView::new(DomainKind::ShoppingRequest, &pipeline, &record, steps)
    }

    #[test]
    fn test_render_text_timeline() {
        let view = view(
            "INVOICED",
            vec![
                StatusEvent::new("REQUESTED", 1700000000),
                StatusEvent::new("INVOICED", 1700086400),
            ],
        );
        let text = view.render_text();

        assert!(text.starts_with("shopping-request sr-1 (INVOICED)\n"));
        assert!(text.contains("[x] Requested "));
        assert!(text.contains("[x] Quotation Confirmed"));
        assert!(text.contains("[>] Invoiced "));
        assert!(text.contains("[ ] Order Placed "));
        assert!(text.contains("Nov 15, 2023, 10:13:20 PM"));
        assert!(text.contains("3/7 steps completed"));
        assert!(text.ends_with("Invoice is ready. Please make the payment and upload payment slip.\n"));
    }

    #[test]
    fn test_cancelled_view() {
        let view = view("CANCELLED", vec![StatusEvent::new("REQUESTED", 1700000000)]);
        assert!(view.cancelled);
        assert!(view.render_text().contains("  CANCELLED\n"));
        assert_eq!(view.message, "This request has been cancelled.");
    }

    #[test]
    fn test_json_output_shape() {
        let view = view("REQUESTED", vec![StatusEvent::new("REQUESTED", 1700000000)]);
        let json = to_json(&view).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["pipeline"], "shopping-request");
        assert_eq!(value["progress"]["completed"], 1);
        assert_eq!(value["progress"]["current"], "Requested");
        assert_eq!(value["steps"][0]["is_current"], true);
        assert_eq!(value["steps"].as_array().unwrap().len(), 7);
    }

    #[test]
    fn test_quoted_shopping_request_shows_totals() {
        let pipeline = shopping_request_pipeline();
        let record = TrackedRecord::Shopping(ShoppingRequest {
            id: "sr-1".to_string(),
            request_code: Some("SR-0001".to_string()),
            status: "QUOTATION_READY".to_string(),
            products: vec![
                QuotationItem {
                    id: "p-1".to_string(),
                    name: "Kettle".to_string(),
                    quantity: 2,
                    unit_price: Some(15.5),
                },
                QuotationItem {
                    id: "p-2".to_string(),
                    name: "Mug".to_string(),
                    quantity: 1,
                    unit_price: Some(9.0),
                },
            ],
            tracking_requests: vec![StatusEvent::new("QUOTATION_READY", 1700000000)],
            created_at: 1700000000,
        });
        let steps = resolve_pipeline(
            &pipeline,
            record.history().unwrap_or_default(),
            &ResolveOptions::default(),
        );
        let view = TrackingView::new(DomainKind::ShoppingRequest, &pipeline, &record, steps);

        let quotation = view.quotation.unwrap();
        assert!((quotation.total - 43.2).abs() < 1e-9);
        let text = view.render_text();
        assert!(text.starts_with("shopping-request sr-1 [SR-0001] (QUOTATION_READY)\n"));
        assert!(text.contains("  SubTotal: 40.00\n  Commission (8%): 3.20\n  Total: 43.20\n"));
    }

    #[test]
    fn test_unquoted_shopping_request_has_no_totals() {
        let view = view("REQUESTED", vec![StatusEvent::new("REQUESTED", 1700000000)]);
        assert!(view.quotation.is_none());
        assert!(!view.render_text().contains("SubTotal"));
    }

    #[test]
    fn test_pickup_view_shows_price() {
        let pipeline = pickup_request_pipeline();
        let record = TrackedRecord::Pickup(PickupRequest {
            id: "pr-1".to_string(),
            status: "QUOTED".to_string(),
            price: Some(40.0),
            tracking_requests: vec![StatusEvent::new("QUOTED", 1700000000)],
            created_at: 1700000000,
        });
        let steps = resolve_pipeline(
            &pipeline,
            record.history().unwrap_or_default(),
            &ResolveOptions::default(),
        );
        let view = TrackingView::new(DomainKind::PickupRequest, &pipeline, &record, steps);

        assert_eq!(view.price, Some(40.0));
        assert!(view.render_text().contains("  Price: 40.00\n"));
    }

    #[test]
    fn test_shipment_view_shows_charges_and_destination() {
        let pipeline = shipment_pipeline();
        let record = TrackedRecord::Shipment(Shipment {
            id: "pkg-1".to_string(),
            shipment_id: Some("SH-9".to_string()),
            country: Some(Country {
                id: "lk".to_string(),
                name: "Sri Lanka".to_string(),
            }),
            charges: vec![Charge { amount: 12.5 }, Charge { amount: 7.5 }],
            status: ShipmentStatus {
                label: "Payment Pending".to_string(),
                value: "Payment Pending".to_string(),
            },
            created_at: 1700000000,
        });
        let steps = resolve_current_status(
            &pipeline,
            record.status(),
            record.created_at(),
            &ResolveOptions::default(),
        );
        let view = TrackingView::new(DomainKind::Shipment, &pipeline, &record, steps);

        assert_eq!(view.reference.as_deref(), Some("SH-9"));
        assert_eq!(view.destination.as_deref(), Some("Sri Lanka"));
        assert_eq!(view.price, Some(20.0));
        let text = view.render_text();
        assert!(text.contains("  Destination: Sri Lanka\n"));
        assert!(text.contains("  Price: 20.00\n"));
    }
}
