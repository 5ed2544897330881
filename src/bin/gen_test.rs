//! Synthetic LINE talk export generator for stress testing linetalk.
//!
//! Usage: cargo run --features gen-test --bin gen_test -- [messages] [output]
//! Example: cargo run --features gen-test --bin gen_test -- 100000 heavy_talk.txt

use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::time::Instant;

use chrono::{Datelike, NaiveDate};
use rand::Rng;
use rand::seq::SliceRandom;

const PARTNER: &str = "田中";
const SELF_NAME: &str = "Bob";

const EMOJIS: &[&str] = &["😀", "😂", "🥰", "🤔", "😱", "🔥", "👍", "❤️", "👨‍👩‍👧‍👦", "🏳️‍🌈"];

const PLACEHOLDERS: &[&str] = &["[スタンプ]", "[写真]", "[動画]", "[ファイル]", "☎ 通話時間 3:15"];

const WEEKDAYS: &[&str] = &["月", "火", "水", "木", "金", "土", "日"];

fn main() {
    let args: Vec<String> = env::args().collect();

    let count: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(100_000);
    let output = args.get(2).map_or("heavy_talk.txt", String::as_str);

    println!("🧪 LINE Talk Generator");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   Messages: {count}");
    println!("   Output:   {output}");
    println!();

    if let Err(e) = generate(count, output) {
        eprintln!("❌ Error: {e}");
        std::process::exit(1);
    }
}

fn generate(count: usize, output: &str) -> io::Result<()> {
    let file = File::create(output)?;
    let mut writer = BufWriter::with_capacity(1024 * 1024, file);

    let mut rng = rand::thread_rng();
    let start = Instant::now();
    let mut bytes_written: usize = 0;

    let header = format!("[LINE] {PARTNER}とのトーク履歴\n保存日時：2024/12/31 23:59\n\n");
    writer.write_all(header.as_bytes())?;
    bytes_written += header.len();

    let mut day = NaiveDate::from_ymd_opt(2024, 1, 1)
        .ok_or_else(|| io::Error::other("invalid start date"))?;

    for i in 0..count {
        if i % 50 == 0 {
            if i > 0 {
                day = day.succ_opt().unwrap_or(day);
                writer.write_all(b"\n")?;
                bytes_written += 1;
            }
            let separator = date_separator(day);
            writer.write_all(separator.as_bytes())?;
            bytes_written += separator.len();
        }

        let line = message_line(&mut rng, i);
        writer.write_all(line.as_bytes())?;
        bytes_written += line.len();

        if (i + 1) % 10000 == 0 {
            let elapsed = start.elapsed().as_secs_f64();
            let mps = (i + 1) as f64 / elapsed;
            let mb = bytes_written as f64 / 1_000_000.0;
            eprint!("\r   Generated {}/{} ({:.1} MB, {:.0} msg/s)", i + 1, count, mb, mps);
        }
    }

    writer.flush()?;

    let elapsed = start.elapsed();
    println!("\n\n✅ Done!");
    println!("   Size: {:.2} MB", bytes_written as f64 / 1_000_000.0);
    println!("   Time: {:.2}s", elapsed.as_secs_f64());
    Ok(())
}

fn date_separator(day: NaiveDate) -> String {
    let weekday = WEEKDAYS[day.weekday().num_days_from_monday() as usize];
    format!("{}({weekday})\n", day.format("%Y/%m/%d"))
}

fn message_line(rng: &mut impl Rng, index: usize) -> String {
    let sender = if rng.gen_bool(0.5) { PARTNER } else { SELF_NAME };
    let time = format!("{:02}:{:02}", (index / 60) % 24, index % 60);

    match index % 10 {
        // Sticker or call: 2-field line
        0 => format!("{time}\t{sender}\n"),
        1 => {
            let placeholder = PLACEHOLDERS.choose(rng).copied().unwrap_or("[スタンプ]");
            format!("{time}\t{sender}\t{placeholder}\n")
        }
        // Multi-line body
        2 | 3 => {
            let lines = rng.gen_range(2..=5);
            let body: Vec<String> = (0..lines)
                .map(|n| format!("{n}行目のテキスト #{index}"))
                .collect();
            format!("{time}\t{sender}\t{}\n", body.join("\n"))
        }
        4 => {
            let emojis: String = (0..20)
                .filter_map(|_| EMOJIS.choose(rng).copied())
                .collect();
            format!("{time}\t{sender}\t{emojis}\n")
        }
        5 => format!("{time}\t{sender}\tsemicolons; and \"quotes\" #{index}\n"),
        _ => format!("{time}\t{sender}\tメッセージ #{index} です\n"),
    }
}
