//! Example: Using linetalk as a library
//!
//! Run with: cargo run --example library_usage

use linetalk::prelude::*;

const EXPORT: &str = "\u{feff}[LINE] Aliceとのトーク履歴
保存日時：2024/01/16 10:00

2024/01/15(月)
09:00\tAlice\tおはよう！
09:00\tAlice\t今日ひま？
09:05\tBob\tひまだよ
何する？
09:06\tAlice\t[スタンプ]
2024/01/16(火)
20:00\tBob\tまたね
";

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("=== linetalk Library Usage Examples ===\n");

    // Example 1: Parse an export held in memory
    println!("1. Parsing an export:");
    let talk = parse(EXPORT);
    println!("   Partner: {}", talk.partner);
    for (index, msg) in talk.messages.iter().enumerate() {
        if talk.starts_new_day(index) {
            println!("   --- {} ---", msg.formatted_date());
        }
        let side = if talk.is_mine(msg) { "me" } else { "them" };
        println!(
            "   [{side:>4}] {} {}: {}",
            msg.time,
            msg.sender,
            msg.content.replace('\n', " | ")
        );
    }

    // Example 2: Diagnostics
    println!("\n2. Diagnostics:");
    let report = parse_with_diagnostics(EXPORT);
    if report.is_clean() {
        println!("   No problems found");
    }
    for diagnostic in &report.diagnostics {
        println!("   {diagnostic}");
    }

    // Example 3: Strict parsing with a size limit
    println!("\n3. Strict parser:");
    let parser = TalkParser::with_config(ParserConfig::strict().with_max_input_size(1024));
    match parser.parse_str("no header here\n09:00\tAlice\tHi") {
        Ok(talk) => println!("   Parsed {} messages", talk.len()),
        Err(e) => println!("   Rejected: {e}"),
    }

    // Example 4: Filter by sender, then merge
    println!("\n4. Alice only, merged:");
    let filtered = apply_filters(talk.messages.clone(), &FilterConfig::new().with_sender("Alice"));
    let merged = merge_consecutive(filtered.clone());
    for msg in &merged {
        println!("   {}: {}", msg.sender, msg.content.replace('\n', " | "));
    }
    let stats = ProcessingStats::new(filtered.len(), merged.len());
    println!("   Compression: {:.1}%", stats.compression_ratio());

    // Example 5: Grouping by day
    println!("\n5. Days:");
    for (date, messages) in talk.days() {
        println!("   {date}: {} messages", messages.len());
    }

    // Example 6: Serialization
    println!("\n6. JSON Lines:");
    let jsonl = to_jsonl(&talk, &OutputConfig::minimal())?;
    print!("{jsonl}");

    println!("\n=== Examples complete! ===");
    Ok(())
}
