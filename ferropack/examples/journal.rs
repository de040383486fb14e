//! Example journal: fixed-size telemetry records in a file.
//!
//! Writes a handful of records to a journal file, reopens it, and
//! reads them back until the stream runs out.
//!
//! Run with: `cargo run --example journal [byte-order]`

use std::fs::File;

use ferropack::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let order = std::env::args()
        .nth(1)
        .map(|s| ByteOrder::parse(&s).ok_or_else(|| format!("unknown byte order '{s}'")))
        .transpose()?
        .unwrap_or_default();

    let telemetry = LayoutBuilder::new()
        .field("sequence", FieldSpec::uint64())
        .field("station", FieldSpec::bytes(8)?.with_default(b"STN-0000"))
        .field("temperature", FieldSpec::float32())
        .field("healthy", FieldSpec::uint8().with_default(1u8))
        .byte_order(order)
        .compile();

    let path = std::env::temp_dir().join("ferropack-journal.bin");
    println!(
        "Writing {} byte records to {}",
        telemetry.packed_size(),
        path.display()
    );

    let mut journal = RecordStream::new(File::create(&path)?);
    let mut record = Record::new(&telemetry);
    for sequence in 0..5u64 {
        record.set("sequence", sequence)?;
        record.set("temperature", 20.0f32 + sequence as f32 * 0.5)?;
        let written = journal.write(&record)?;
        println!("  wrote record #{sequence} ({written} bytes)");
    }
    journal.flush()?;
    drop(journal);

    let mut journal = RecordStream::new(File::open(&path)?);
    let mut record = Record::new(&telemetry);
    let mut count = 0usize;
    while journal.read_into(&mut record)? {
        let sequence = record.get("sequence")?.and_then(Value::as_uint).unwrap_or(0);
        let temperature = record
            .get("temperature")?
            .and_then(Value::as_float)
            .unwrap_or(0.0);
        println!("  read  record #{sequence}: temperature={temperature:.1}");
        count += 1;
    }
    println!("Read {count} records back under {order} order");

    std::fs::remove_file(&path)?;
    Ok(())
}
