use bit_data::{BitDataError, BitRead, BitReader, BitWriter, StickyReader};

fn main() {
    println!("=== Bit Data Examples ===\n");

    // Example 1: Packing a message header
    if let Err(err) = example_header() {
        println!("  header example failed: {err}");
    }

    // Example 2: Decoding without per-call checks
    example_sticky();

    // Example 3: Size comparison
    example_size();
}

fn example_header() -> Result<(), BitDataError> {
    println!("Example 1: A 3-field header in 2 bytes");

    let mut writer = BitWriter::new();
    writer.write_u8(5, 3); // version
    writer.write_bool(true); // compressed
    writer.write_u16(1000, 12); // payload length

    let data = writer.into_inner();
    println!("  Encoded: {:02X?}", data);

    let mut reader = BitReader::new(&data);
    println!("  Version:    {}", reader.read_u8(3)?);
    println!("  Compressed: {}", reader.read_bool()?);
    println!("  Length:     {}", reader.read_u16(12)?);
    println!();

    Ok(())
}

fn example_sticky() {
    println!("Example 2: Sticky reader over truncated data");

    let data = [0b1101_0101];
    let mut reader = StickyReader::new(&data);

    let a = reader.read_u8(4);
    let b = reader.read_u16(12); // not enough data
    let c = reader.read_u8(4); // suppressed

    println!("  Values: {a}, {b}, {c}");
    match reader.finish() {
        Ok(()) => println!("  Decoded cleanly"),
        Err(err) => println!("  Error: {err}"),
    }
    println!();
}

fn example_size() {
    println!("Example 3: Storing 10,000 7-bit counters");

    let count = 10_000;
    let mut writer = BitWriter::with_capacity(count * 7 / 8 + 1);
    for i in 0..count {
        writer.write_u8((i % 128) as u8, 7);
    }

    let savings = 100.0 * (1.0 - writer.len() as f64 / count as f64);

    println!("  Vec<u8>: {} bytes", count);
    println!("  Packed:  {} bytes", writer.len());
    println!("  Savings: {:.1}%", savings);
}
