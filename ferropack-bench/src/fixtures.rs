//! Shared layouts and records for the benchmarks.

use ferropack_record::Record;
use ferropack_schema::{FieldSpec, Layout, LayoutBuilder};

/// A quote-shaped layout: one byte run and five numeric fields,
/// 33 bytes packed.
#[must_use]
pub fn quote_layout() -> Layout {
    LayoutBuilder::new()
        .field("symbol", FieldSpec::bytes(8).expect("positive length"))
        .field("bid", FieldSpec::int64())
        .field("ask", FieldSpec::int64())
        .field("bid_size", FieldSpec::uint32())
        .field("ask_size", FieldSpec::uint32())
        .field("flags", FieldSpec::uint8().with_default(0u8))
        .compile()
}

/// A quote record with every field assigned.
#[must_use]
pub fn sample_quote(layout: &Layout) -> Record {
    let mut record = Record::new(layout);
    record.set("symbol", b"ACME-US ").expect("known field");
    record.set("bid", 1_000_000i64).expect("known field");
    record.set("ask", 1_000_050i64).expect("known field");
    record.set("bid_size", 400u32).expect("known field");
    record.set("ask_size", 250u32).expect("known field");
    record
}
