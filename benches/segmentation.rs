//! Benchmarks for the three splitting modes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use folio::{
    find_boundaries, normalize, CharCounter, ChapterSplitter, HybridSplitter, Splitter,
    TokenBudget, TokenBudgetSplitter,
};

fn sample_prose(chars: usize) -> String {
    // Mixed CJK/Latin prose with realistic sentence structure
    let sentences = [
        "这是一个关于远方的故事。",
        "The quick brown fox jumps over the lazy dog. ",
        "他沉默了很久，终于开口！",
        "Pack my box with five dozen liquor jugs. ",
        "夜色渐深，灯火一盏盏熄灭。",
    ];
    let mut text = String::new();
    let mut i = 0;
    while text.chars().count() < chars {
        text.push_str(sentences[i % sentences.len()]);
        if i % 12 == 11 {
            text.push_str("\n\n");
        }
        i += 1;
    }
    text
}

fn sample_novel(chapters: usize, chars_per_chapter: usize) -> String {
    let mut text = String::new();
    for n in 1..=chapters {
        text.push_str(&format!("第{n}章 故事\n\n"));
        text.push_str(&sample_prose(chars_per_chapter));
        text.push('\n');
    }
    text
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    for size in [1_000, 10_000, 100_000] {
        let text = sample_prose(size);

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("normalize", size), &text, |b, text| {
            b.iter(|| normalize(black_box(text)))
        });
    }

    group.finish();
}

fn bench_boundaries(c: &mut Criterion) {
    let mut group = c.benchmark_group("boundaries");

    for size in [1_000, 10_000, 100_000] {
        let text = sample_prose(size);

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("find", size), &text, |b, text| {
            b.iter(|| find_boundaries(black_box(text)))
        });
    }

    group.finish();
}

fn bench_token_mode(c: &mut Criterion) {
    let mut group = c.benchmark_group("token_mode");

    let budget = TokenBudget::new(2500).unwrap();
    let splitter = TokenBudgetSplitter::new(budget, CharCounter);

    for size in [10_000, 100_000, 600_000] {
        let text = sample_prose(size);

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("split", size), &text, |b, text| {
            b.iter(|| splitter.split(black_box(text)))
        });
    }

    group.finish();
}

fn bench_chapter_mode(c: &mut Criterion) {
    let mut group = c.benchmark_group("chapter_mode");

    let splitter = ChapterSplitter::new(2500, CharCounter).unwrap();

    for chapters in [10, 50, 200] {
        let text = sample_novel(chapters, 2_000);

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("split", chapters), &text, |b, text| {
            b.iter(|| splitter.split(black_box(text)))
        });
    }

    group.finish();
}

fn bench_hybrid_mode(c: &mut Criterion) {
    let mut group = c.benchmark_group("hybrid_mode");

    let splitter = HybridSplitter::new(2500, 0.05, 0.2, CharCounter).unwrap();

    // Half the chapters fit whole, half need subdividing
    for chapters in [10, 50] {
        let mut text = String::new();
        for n in 1..=chapters {
            let body = if n % 2 == 0 { 6_000 } else { 1_500 };
            text.push_str(&format!("第{n}章 故事\n\n"));
            text.push_str(&sample_prose(body));
            text.push('\n');
        }

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("split", chapters), &text, |b, text| {
            b.iter(|| splitter.split(black_box(text)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_normalize,
    bench_boundaries,
    bench_token_mode,
    bench_chapter_mode,
    bench_hybrid_mode
);
criterion_main!(benches);
