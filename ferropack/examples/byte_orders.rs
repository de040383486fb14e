//! Example comparing the wire image of one record under every byte order.
//!
//! Run with: `cargo run --example byte_orders`

use ferropack::prelude::*;

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let quote = LayoutBuilder::new()
        .field("flags", FieldSpec::uint8())
        .field("price", FieldSpec::uint32())
        .field("symbol", FieldSpec::bytes(4)?)
        .compile();

    let record = Record::with_values(
        &quote,
        [
            ("flags", Value::from(0x01u8)),
            ("price", Value::from(0x0012_D687u32)),
            ("symbol", Value::from(b"FEPK")),
        ],
    )?;

    println!("{:<16} {:>5}  wire image", "byte order", "size");
    for order in [
        ByteOrder::NativeAligned,
        ByteOrder::Native,
        ByteOrder::LittleEndian,
        ByteOrder::BigEndian,
        ByteOrder::Network,
    ] {
        let bytes = record.pack_with_order(order)?;
        println!(
            "{:<16} {:>5}  {}",
            order.to_string(),
            bytes.len(),
            hex(&bytes)
        );
    }

    Ok(())
}
