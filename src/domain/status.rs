//! Per-domain status metadata: customer messages, cancellation, deletability

use super::pipelines::DomainKind;

/// Banner text shown when a status has no dedicated message
pub const NO_UPDATES_MESSAGE: &str = "No updates available.";

/// Raw status of a cancelled request, in any domain
pub const CANCELLED: &str = "CANCELLED";

/// Pickup statuses after which a request can no longer be deleted
const PICKUP_LOCKED_STATUSES: &[&str] = &["CONFIRMED", "PICKED"];

/// Customer-facing message for a shopping request status.
///
/// Only shopping requests carry status messages. The lookup is exact on the
/// uppercased status.
pub fn status_message(kind: DomainKind, status: &str) -> Option<&'static str> {
    if kind != DomainKind::ShoppingRequest {
        return None;
    }
    let message = match status.to_uppercase().as_str() {
        "REQUESTED" => "Your request has been received. We will get back to you shortly.",
        "QUOTATION_READY" => "Quotation is ready. Please review the quotation and confirm.",
        "INVOICED" => "Invoice is ready. Please make the payment and upload payment slip.",
        "PAYMENT_PENDING" => {
            "Your payment slip has been uploaded and is pending approval from our team."
        }
        "PAYMENT_APPROVED" => "Your payment has been approved. We will proceed with your order.",
        "CONFIRMED" => "Your order has been confirmed. We will proceed with the purchase.",
        "ORDER_PLACED" => {
            "Your order has been placed successfully. We will now start processing and keep you updated on the progress."
        }
        CANCELLED => "This request has been cancelled.",
        _ => return None,
    };
    Some(message)
}

/// Message for a status, falling back to [`NO_UPDATES_MESSAGE`]
pub fn status_message_or_default(kind: DomainKind, status: &str) -> &'static str {
    status_message(kind, status).unwrap_or(NO_UPDATES_MESSAGE)
}

/// Whether a raw status means the request was cancelled
pub fn is_cancelled(status: &str) -> bool {
    status.to_uppercase() == CANCELLED
}

/// Whether a request in this status may still be deleted by the customer
pub fn is_deletable(kind: DomainKind, status: &str) -> bool {
    match kind {
        DomainKind::PickupRequest => {
            let status = status.to_uppercase();
            !PICKUP_LOCKED_STATUSES.contains(&status.as_str())
        }
        DomainKind::ShoppingRequest | DomainKind::Shipment => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shopping_messages() {
        assert_eq!(
            status_message(DomainKind::ShoppingRequest, "INVOICED"),
            Some("Invoice is ready. Please make the payment and upload payment slip.")
        );
        assert_eq!(
            status_message(DomainKind::ShoppingRequest, "cancelled"),
            Some("This request has been cancelled.")
        );
        assert_eq!(status_message(DomainKind::ShoppingRequest, "QUOTED"), None);
    }

    #[test]
    fn test_other_domains_have_no_messages() {
        assert_eq!(status_message(DomainKind::PickupRequest, "REQUESTED"), None);
        assert_eq!(
            status_message_or_default(DomainKind::Shipment, "Departed"),
            NO_UPDATES_MESSAGE
        );
    }

    #[test]
    fn test_is_cancelled() {
        assert!(is_cancelled("CANCELLED"));
        assert!(is_cancelled("Cancelled"));
        assert!(!is_cancelled("CANCELLED_BY_ADMIN"));
    }

    #[test]
    fn test_pickup_deletability() {
        assert!(is_deletable(DomainKind::PickupRequest, "REQUESTED"));
        assert!(is_deletable(DomainKind::PickupRequest, "quoted"));
        assert!(!is_deletable(DomainKind::PickupRequest, "confirmed"));
        assert!(!is_deletable(DomainKind::PickupRequest, "PICKED"));
    }

    #[test]
    fn test_other_domains_always_deletable() {
        assert!(is_deletable(DomainKind::ShoppingRequest, "ORDER_PLACED"));
        assert!(is_deletable(DomainKind::Shipment, "Departed"));
    }
}
