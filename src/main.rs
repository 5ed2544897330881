//! # linetalk CLI
//!
//! Command-line interface for the linetalk library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use linetalk::TalkError;
use linetalk::cli::Args;
use linetalk::core::{
    FilterConfig, OutputConfig, ProcessingStats, apply_filters, merge_consecutive,
};
use linetalk::format::{OutputFormat, write_to_format};
use linetalk::parser::TalkParser;

fn main() {
    let args = <Args as ClapParser>::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {e}");
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(args: &Args) -> Result<(), TalkError> {
    let total_start = Instant::now();

    let format: OutputFormat = args.resolved_format().into();
    let output_path = args.resolved_output();

    println!("📦 linetalk v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input);
    println!("💾 Output:  {output_path}");
    println!("📄 Format:  {format}");
    if args.strict {
        println!("🔒 Mode:    Strict");
    }

    let mut filter_config = FilterConfig::new();

    if let Some(ref after) = args.after {
        filter_config = filter_config.with_date_from(after)?;
        println!("📅 After:   {after}");
    }

    if let Some(ref before) = args.before {
        filter_config = filter_config.with_date_to(before)?;
        println!("📅 Before:  {before}");
    }

    if let Some(ref from) = args.from {
        filter_config = filter_config.with_sender(from.clone());
        println!("👤 From:    {from}");
    }

    println!();

    println!("⏳ Parsing talk history...");
    let parse_start = Instant::now();
    let mut talk = TalkParser::with_config(args.parser_config()).parse_file(&args.input)?;
    let original_count = talk.len();
    println!(
        "   Found {} messages with {} ({:.2}s)",
        original_count,
        if talk.has_partner() { talk.partner.as_str() } else { "unknown partner" },
        parse_start.elapsed().as_secs_f64()
    );

    if filter_config.is_active() {
        println!("🔍 Filtering messages...");
        talk.messages = apply_filters(std::mem::take(&mut talk.messages), &filter_config);
        println!("   {} messages after filtering", talk.len());
    }
    let filtered_count = talk.len();

    if args.merge {
        println!("🔀 Merging consecutive messages...");
        talk.messages = merge_consecutive(std::mem::take(&mut talk.messages));
        let stats = ProcessingStats::new(filtered_count, talk.len());
        println!(
            "   Compressed to {} entries ({:.1}% reduction)",
            talk.len(),
            stats.compression_ratio()
        );
    }

    println!("💾 Writing {format}...");
    let write_start = Instant::now();
    write_to_format(&talk, &output_path, format, &OutputConfig::new())?;
    println!("   Written in {:.2}s", write_start.elapsed().as_secs_f64());

    println!();
    println!("✅ Done! Output saved to {output_path}");

    println!();
    println!("📊 Summary:");
    println!("   Original:  {original_count} messages");
    if filter_config.is_active() {
        println!("   Filtered:  {filtered_count} messages");
    }
    println!("   Final:     {} entries", talk.len());
    println!("   Days:      {}", talk.days().len());
    println!("   Senders:   {}", talk.senders().join(", "));

    println!();
    println!("⚡ Total time: {:.2}s", total_start.elapsed().as_secs_f64());

    Ok(())
}
