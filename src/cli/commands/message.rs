//! Message command - Show the customer message for a status

use crate::domain::{status_message_or_default, DomainKind};
use crate::errors::Result;

/// Print the banner message for a status
pub fn run(domain: &str, status: &str) -> Result<()> {
    let kind: DomainKind = domain.parse()?;
    println!("{}", status_message_or_default(kind, status));
    Ok(())
}
