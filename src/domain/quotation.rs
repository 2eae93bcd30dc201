//! Quotation totals for shopping requests

use serde::Serialize;

use crate::schemas::QuotationItem;

/// Service commission charged on top of the quoted items
pub const COMMISSION_RATE: f64 = 0.08;

/// Subtotal, commission and total of a quotation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuotationSummary {
    pub sub_total: f64,
    pub commission: f64,
    pub total: f64,
}

impl QuotationSummary {
    /// Sum the quoted items. Unpriced items contribute nothing.
    pub fn from_items(items: &[QuotationItem]) -> Self {
        let sub_total: f64 = items.iter().map(QuotationItem::line_total).sum();
        let commission = sub_total * COMMISSION_RATE;
        QuotationSummary {
            sub_total,
            commission,
            total: sub_total + commission,
        }
    }

    /// Two-decimal lines for the terminal
    pub fn render_text(&self) -> String {
        format!(
            "  SubTotal: {:.2}\n  Commission ({}%): {:.2}\n  Total: {:.2}\n",
            self.sub_total,
            COMMISSION_RATE * 100.0,
            self.commission,
            self.total
        )
    }
}
