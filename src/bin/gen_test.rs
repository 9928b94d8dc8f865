//! Messenger archive generator for stress testing chatstats.
//!
//! Writes `<output>/inbox/<chat>/message_N.json` batch files with the same
//! Latin-1 mis-encoding real exports have, shuffled timestamps, system
//! notices and media-only messages.
//!
//! Usage: cargo run --features gen-test --bin gen_test -- [messages] [output] [batches]
//! Example: cargo run --features gen-test --bin gen_test -- 100000 heavy_archive 5

use rand::Rng;
use rand::seq::SliceRandom;
use serde_json::{Value, json};
use std::env;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

const TITLE: &str = "Café Crew 🎉";

const SENDERS: &[&str] = &[
    "Alice",
    "Bob",
    "Zoë Quinn",
    "José Álvarez",
    "Иван",
    "村上 春樹",
    "🔥FireUser🔥",
];

const WORDS: &[&str] = &[
    "pizza", "tonight", "café", "meeting", "don’t", "weekend", "naïve", "movie", "the", "and",
    "you", "is", "what's", "Привет", "🍕", "hiking", "crème", "brûlée", "soon", "lol",
];

const SYSTEM_NOTICES: &[&str] = &[
    "Alice set the nickname for Bob to Bobby.",
    "Bob created a poll: Where should we eat?",
    "Alice changed the group photo.",
    "Alice joined the video chat.",
    "The video chat ended.",
    "Bob started a video chat.",
];

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    let count: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(100_000);
    let output = args.get(2).map(|s| s.as_str()).unwrap_or("heavy_archive");
    let batches: usize = args
        .get(3)
        .and_then(|s| s.parse().ok())
        .unwrap_or(4)
        .max(1);

    println!("🧪 Archive Generator");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   Messages: {}", count);
    println!("   Output:   {}", output);
    println!("   Batches:  {}", batches);
    println!();

    let chat_dir = Path::new(output).join("inbox").join("cafecrew_gen");
    fs::create_dir_all(chat_dir.join("photos"))?;

    let mut rng = rand::thread_rng();
    let start = std::time::Instant::now();
    let per_batch = count.div_ceil(batches);

    for batch in 0..batches {
        let from = batch * per_batch;
        let to = (from + per_batch).min(count);
        let messages: Vec<Value> = (from..to).map(|i| generate_message(&mut rng, i)).collect();

        let record = json!({
            "participants": SENDERS.iter().map(|s| json!({"name": mis_encode(s)})).collect::<Vec<_>>(),
            "title": mis_encode(TITLE),
            "thread_type": "RegularGroup",
            "messages": messages,
        });

        let path = chat_dir.join(format!("message_{}.json", batch + 1));
        let mut writer = BufWriter::with_capacity(1024 * 1024, File::create(&path)?);
        serde_json::to_writer_pretty(&mut writer, &record)?;
        writer.flush()?;

        eprint!("\r   Wrote batch {}/{} ({} messages)", batch + 1, batches, to - from);
    }

    let elapsed = start.elapsed();
    println!("\n\n✅ Done!");
    println!("   Path: {}", chat_dir.display());
    println!("   Time: {:.2}s", elapsed.as_secs_f64());
    Ok(())
}

fn generate_message(rng: &mut impl Rng, index: usize) -> Value {
    let sender = *SENDERS.choose(rng).unwrap_or(&"Alice");
    // Jittered: file order and time order disagree.
    let timestamp_ms = 1_700_000_000_000_i64 + (index as i64) * 60_000 + rng.gen_range(-90_000..90_000);

    match index % 20 {
        0 => json!({
            "sender_name": mis_encode(sender),
            "timestamp_ms": timestamp_ms,
            "photos": [{"uri": "photos/1.jpg"}],
            "type": "Generic",
        }),
        1 => json!({
            "sender_name": mis_encode(sender),
            "timestamp_ms": timestamp_ms,
            "content": mis_encode(SYSTEM_NOTICES.choose(rng).unwrap_or(&SYSTEM_NOTICES[0])),
            "type": "Generic",
        }),
        2 => json!({
            "sender_name": mis_encode(sender),
            "timestamp_ms": timestamp_ms,
            "content": "https://example.com/shared",
            "type": "Share",
        }),
        3 => json!({
            "sender_name": mis_encode(sender),
            "timestamp_ms": timestamp_ms,
            "content": "",
            "type": "Generic",
        }),
        _ => {
            let len = rng.gen_range(1..=15);
            let text = (0..len)
                .map(|_| *WORDS.choose(rng).unwrap_or(&"lol"))
                .collect::<Vec<_>>()
                .join(" ");
            json!({
                "sender_name": mis_encode(sender),
                "timestamp_ms": timestamp_ms,
                "content": mis_encode(&text),
                "type": "Generic",
            })
        }
    }
}

/// Writes each UTF-8 byte as the Latin-1 character with the same value.
fn mis_encode(s: &str) -> String {
    s.bytes().map(char::from).collect()
}
