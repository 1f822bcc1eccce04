//! Toxic test data generator for stress testing slackprep.
//!
//! Usage: cargo run --bin gen_export --features gen-test -- [messages] [output_dir]
//! Example: cargo run --bin gen_export --features gen-test -- 100000 heavy_export

use rand::Rng;
use rand::seq::SliceRandom;
use std::env;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

const ZALGO_CHARS: &[char] = &[
    '\u{0300}', '\u{0301}', '\u{0302}', '\u{0303}', '\u{0304}', '\u{0305}', '\u{0306}', '\u{0307}',
    '\u{0308}', '\u{0309}', '\u{030A}', '\u{030B}', '\u{030C}', '\u{030D}', '\u{030E}', '\u{030F}',
    '\u{0310}', '\u{0311}', '\u{0312}', '\u{0313}', '\u{0314}', '\u{0315}', '\u{0316}', '\u{0317}',
    '\u{0318}', '\u{0319}', '\u{031A}', '\u{031B}', '\u{031C}', '\u{031D}', '\u{031E}', '\u{031F}',
];

const USERS: &[(&str, &str)] = &[
    ("U000001", "Alice"),
    ("U000002", "Bob"),
    ("U000003", "Иван"),
    ("U000004", "村上"),
    ("U000005", "User\"With\"Quotes"),
    ("U000006", "🔥FireUser🔥"),
    ("UNMAPPED", ""), // stays unresolved on purpose
];

const SHORTCODES: &[&str] = &[
    "smile", "tada", "fire", "eyes", "thumbsup", "blorp", "this_is_not_real", "wave", "clap",
];

fn main() {
    let args: Vec<String> = env::args().collect();

    let count: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(100_000);
    let output = args.get(2).map(|s| s.as_str()).unwrap_or("heavy_export");

    println!("🧪 Toxic Export Generator");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   Messages: {}", count);
    println!("   Output:   {}/", output);
    println!();

    generate_export(count, Path::new(output));
}

fn generate_export(count: usize, root: &Path) {
    fs::create_dir_all(root).expect("Failed to create export root");
    write_users(root);

    let convo = root.join("mpdm-alice--bob--stress-1");
    fs::create_dir_all(&convo).expect("Failed to create conversation dir");

    let file = File::create(convo.join("2024-01-15.json")).expect("Failed to create message file");
    let mut writer = BufWriter::with_capacity(1024 * 1024, file); // 1MB buffer

    let mut rng = rand::thread_rng();

    writeln!(writer, "[").unwrap();

    let start = std::time::Instant::now();
    let mut bytes_written: usize = 0;

    for i in 0..count {
        let msg = generate_toxic_message(&mut rng, i);
        let (user, _) = USERS.choose(&mut rng).unwrap();
        let ts = format!("{}.{:06}", 1_705_314_600 + (i as i64 / 10), i % 1_000_000);

        let comma = if i < count - 1 { "," } else { "" };

        let line = format!(
            r#"  {{"user": "{}", "ts": "{}", "text": "{}"}}{}"#,
            user,
            ts,
            escape_json(&msg),
            comma
        );

        bytes_written += line.len();
        writeln!(writer, "{}", line).unwrap();

        if (i + 1) % 10000 == 0 {
            let elapsed = start.elapsed().as_secs_f64();
            let mps = (i + 1) as f64 / elapsed;
            let mb = bytes_written as f64 / 1_000_000.0;
            eprint!(
                "\r   Generated {}/{} ({:.1} MB, {:.0} msg/s)",
                i + 1,
                count,
                mb,
                mps
            );
        }
    }

    writeln!(writer, "]").unwrap();
    writer.flush().unwrap();

    let elapsed = start.elapsed();
    let mb = bytes_written as f64 / 1_000_000.0;

    println!("\n\n✅ Done!");
    println!("   Size: {:.2} MB", mb);
    println!("   Time: {:.2}s", elapsed.as_secs_f64());
    println!(
        "   Speed: {:.0} msg/s",
        count as f64 / elapsed.as_secs_f64()
    );
}

fn write_users(root: &Path) {
    let mut records = Vec::new();
    for (id, name) in USERS {
        if name.is_empty() {
            continue;
        }
        records.push(format!(
            r#"  {{"id": "{}", "name": "{}", "real_name": "{}"}}"#,
            id,
            escape_json(name),
            escape_json(name)
        ));
    }
    let body = format!("[\n{}\n]", records.join(",\n"));
    fs::write(root.join("users.json"), body).expect("Failed to write users.json");
}

fn generate_toxic_message(rng: &mut impl Rng, index: usize) -> String {
    match index % 16 {
        // Normal messages
        0..=4 => format!("Normal message #{} with some text", index),

        // Slack inline syntax
        5 => format!("ping <@U000002> about item #{}", index),
        6 => format!("docs at <https://example.com/{}|the docs>", index),
        7 => format!("raw link <https://example.com/raw/{}>", index),
        8 => {
            let code = SHORTCODES.choose(rng).unwrap();
            format!("reaction :{}: #{}", code, index)
        }

        // Fences, including inlined mid-sentence
        9 => format!("inline ```let x = {};``` fence", index),
        10 => format!("```\nmultiline block #{}\nwith <@U000001> inside\n```", index),

        // Unicode edge cases
        11 => format!("Кириллица: Привет мир! #{}", index),
        12 => format!("Mixed: Hello Привет 你好 🌍 #{}", index),

        // Zalgo text
        13 => generate_zalgo("zalgo text", rng),

        // Empty-ish
        14 => String::new(),

        // Control characters
        15 => format!("Control chars: \x01\x02 #{}", index),

        _ => format!("Fallback message #{}", index),
    }
}

fn generate_zalgo(text: &str, rng: &mut impl Rng) -> String {
    let mut result = String::new();
    for c in text.chars() {
        result.push(c);
        // Add 1-10 random combining characters
        let zalgo_count = rng.gen_range(1..=10);
        for _ in 0..zalgo_count {
            let zalgo = ZALGO_CHARS[rng.gen_range(0..ZALGO_CHARS.len())];
            result.push(zalgo);
        }
    }
    result
}

fn escape_json(s: &str) -> String {
    let mut result = String::with_capacity(s.len() * 2);
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c if c.is_control() => {
                result.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => result.push(c),
        }
    }
    result
}
