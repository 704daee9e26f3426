//! Text and file names used when an item is shared or exported

use crate::core::item::PaymentItem;

/// Closing line of every share message
pub const SCAN_INSTRUCTION: &str = "Scan QR code or use UPI ID to pay instantly.";

/// Plain-text message describing how to pay for `item`
pub fn share_text(item: &PaymentItem) -> String {
    let amount = item
        .price_display()
        .unwrap_or_else(|| "any amount".to_string());

    let mut lines = vec![
        format!("{} - Pay {}", item.name(), amount),
        format!("UPI ID: {}", item.upi_id()),
    ];
    if !item.description().is_empty() {
        lines.push(format!("Description: {}", item.description()));
    }
    lines.push(format!("Note: {}", item.payment_note()));
    lines.push(String::new());
    lines.push(SCAN_INSTRUCTION.to_string());

    lines.join("\n")
}

/// File name for an exported QR image, e.g. `acme_traders_qr_code.png`
pub fn export_file_name(name: &str) -> String {
    let slug: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("{slug}_qr_code.png")
}
