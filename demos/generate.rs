//! Example: validate a form, store the item, edit it and print its payload
//!
//! Run with `RUST_LOG=debug cargo run --example generate` to see store logs.

use anyhow::Result;
use ezqr::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    println!("EZ QR example\n");

    let config = UpiConfig::default();
    let store = InMemoryItemStore::new(config.clone());

    // An incomplete form: nothing is stored, every problem is reported
    let draft = ItemForm::new("", "acme").with_price("0.5");
    println!("Live preview: {}", preview(&draft, &config));
    for (field, message) in validate_all(&draft, &config).messages(&config) {
        println!("  {field}: {message}");
    }

    // The corrected form goes through
    let form = ItemForm::new("Acme Traders", "acme@upi")
        .with_price("250")
        .with_description("Wholesale rice");
    let item = store.create(form).await?;
    println!("\nCreated {}:\n  {}", item.id(), item.qr_code_data());

    // Any edit regenerates the payload
    let item = store
        .update(&item.id(), ItemUpdate::default().price(None))
        .await?;
    println!("Open amount:\n  {}", item.qr_code_data());

    println!("\n{}", share_text(&item));
    println!("\nExport as {}", export_file_name(item.name()));

    Ok(())
}
