//! Lexer benchmarks.
//!
//! Run with: `cargo bench --package icfg-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use icfg_lex::{Lexer, LexerConfig};

fn lexer_token_count(source: &str) -> usize {
    Lexer::new("bench", source).count()
}

/// A switch-style dump with `interfaces` interface blocks.
fn interface_dump(interfaces: usize) -> String {
    let mut dump = String::from("! generated\nhostname bench\n!\n");
    for i in 0..interfaces {
        dump.push_str(&format!(
            "interface Ethernet{i}\n   description port {i}\n   switchport access vlan {}\n   no shutdown\n!\n",
            i % 4094 + 1
        ));
    }
    dump.push_str("end\n");
    dump
}

fn bench_lexer_flat(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_flat");

    let source = "hostname r1\nip routing\nservice password-encryption\n".repeat(100);
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("single_statement", |b| {
        b.iter(|| lexer_token_count(black_box("service unsupported-transceiver")))
    });

    group.bench_function("flat_statements", |b| {
        b.iter(|| lexer_token_count(black_box(&source)))
    });

    group.finish();
}

fn bench_lexer_blocks(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_blocks");

    for interfaces in [10, 1000] {
        let source = interface_dump(interfaces);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_function(format!("interfaces_{interfaces}"), |b| {
            b.iter(|| lexer_token_count(black_box(&source)))
        });
    }

    group.finish();
}

fn bench_lexer_deep_nesting(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_nesting");

    let source: String = (0..64)
        .map(|depth| format!("{}level {}\n", "\t".repeat(depth), depth))
        .collect();
    let config = LexerConfig::new().with_tab_width(4).unwrap_or_default();

    group.bench_function("tabs_64_levels", |b| {
        b.iter(|| Lexer::with_config("bench", black_box(&source), config).count())
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_flat,
    bench_lexer_blocks,
    bench_lexer_deep_nesting
);
criterion_main!(benches);
