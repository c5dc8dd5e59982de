//! Script Mapping Benchmark Tool
//!
//! Measures the throughput of the dialogue mapping pipeline on a real
//! script file (one `"character: dialogue"` line per record).
//!
//! ## Modes
//!
//! 1. **normalize**: dialogue normalization alone
//! 2. **tokenize**: word splitting alone (input is normalized first, once)
//! 3. **map**: the full per-line pipeline (split + normalize + tokenize)
//!
//! ## Usage
//!
//! ```bash
//! ./target/release/script_bench /path/to/script.txt map
//! ./target/release/script_bench /path/to/script.txt all
//! ```
//!
//! ## Output
//!
//! Per mode: elapsed time, GiB/s over the input bytes, pairs (or words)
//! produced, and pairs per second. Run in release mode on a large input
//! (tens of MB+) for stable numbers.

use std::env;
use std::fs;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use scriptline_core::analyzer::{DialogueNormalizer, Tokenizer};
use scriptline_core::sink::FnSink;
use scriptline_core::DialogueMapper;

const WARMUP_RUNS: usize = 1;
const MEASURE_RUNS: usize = 5;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    let Some(path) = args.get(1) else {
        eprintln!("Usage: script_bench <path> [normalize|tokenize|map|all]");
        return ExitCode::FAILURE;
    };
    let mode = args.get(2).map(String::as_str).unwrap_or("all");

    println!("Loading file...");
    let input = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("script_bench: {path}: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("File size: {}\n", fmt_bytes(input.len() as u64));

    match mode {
        "normalize" => bench_normalize(&input),
        "tokenize" => bench_tokenize(&input),
        "map" => bench_map(&input),
        "all" => {
            bench_normalize(&input);
            bench_tokenize(&input);
            bench_map(&input);
        }
        other => {
            eprintln!("script_bench: unknown mode '{other}'");
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}

fn bench_normalize(input: &str) {
    let normalizer = DialogueNormalizer::new();
    let mut out = String::with_capacity(input.len());

    println!("=== Normalize ===");

    warmup(|| {
        normalizer.normalize_into(input, &mut out);
    });

    let elapsed = measure(|| {
        normalizer.normalize_into(input, &mut out);
    });

    print_perf("Normalize", input.len(), elapsed, 0);
}

fn bench_tokenize(input: &str) {
    let tokenizer = Tokenizer::new();
    let normalized = DialogueNormalizer::new().normalize(input);

    println!("=== Tokenize ===");

    warmup(|| {
        let mut sink = 0u64;
        tokenizer.tokenize(&normalized, |_w, _p| sink += 1);
        std::hint::black_box(sink);
    });

    let mut words = 0u64;
    let elapsed = measure(|| {
        let mut local = 0u64;
        tokenizer.tokenize(&normalized, |_w, _p| local += 1);
        words = local;
        std::hint::black_box(words);
    });

    print_perf("Tokenize", normalized.len(), elapsed, words);
}

fn bench_map(input: &str) {
    let mut mapper = DialogueMapper::new();

    println!("=== Map (full pipeline) ===");

    warmup(|| {
        let mut sink = 0u64;
        mapper.process_script(input, &mut FnSink(|_: &str, _: &str| sink += 1));
        std::hint::black_box(sink);
    });

    let mut pairs = 0u64;
    let elapsed = measure(|| {
        let mut local = 0u64;
        mapper.process_script(input, &mut FnSink(|_: &str, _: &str| local += 1));
        pairs = local;
        std::hint::black_box(pairs);
    });

    print_perf("Map", input.len(), elapsed, pairs);
    println!("Run metrics : {}\n", mapper.metrics());
}

fn warmup<F: FnMut()>(mut f: F) {
    for _ in 0..WARMUP_RUNS {
        f();
    }
}

fn measure<F: FnMut()>(mut f: F) -> Duration {
    let mut total = Duration::ZERO;

    for _ in 0..MEASURE_RUNS {
        let start = Instant::now();
        f();
        total += start.elapsed();
    }

    total / MEASURE_RUNS as u32
}

fn print_perf(label: &str, input_bytes: usize, elapsed: Duration, pairs: u64) {
    let secs = elapsed.as_secs_f64();
    let gib = input_bytes as f64 / (1024.0 * 1024.0 * 1024.0);

    println!("--------------------------------");
    println!("Mode        : {}", label);
    println!("Elapsed     : {:.3} s", secs);
    println!("Throughput  : {:.3} GiB/s", gib / secs);

    if pairs > 0 {
        println!("Pairs       : {}", fmt_count(pairs));
        println!("Pairs/sec   : {}", fmt_count((pairs as f64 / secs) as u64));
    }

    println!("--------------------------------\n");
}

fn fmt_bytes(b: u64) -> String {
    if b >= 1024 * 1024 * 1024 {
        format!("{:.2} GiB", b as f64 / (1024.0 * 1024.0 * 1024.0))
    } else if b >= 1024 * 1024 {
        format!("{:.2} MiB", b as f64 / (1024.0 * 1024.0))
    } else if b >= 1024 {
        format!("{:.2} KiB", b as f64 / 1024.0)
    } else {
        format!("{} B", b)
    }
}

fn fmt_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let lead = digits.len() % 3;

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - lead) % 3 == 0 {
            out.push('_');
        }
        out.push(ch);
    }

    out
}
