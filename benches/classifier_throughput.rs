//! Classifier throughput benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tw_core::filter::{
    ClassificationResult, FilenameTarget, FilterSettings, LinkTarget, MediaType,
    SpoilerClassifier, TextTarget,
};

fn classifier() -> SpoilerClassifier {
    let words: Vec<String> = (0..50).map(|i| format!("word{}", i)).collect();
    let substrings: Vec<String> = (0..200).map(|i| format!("pattern{}", i)).collect();
    SpoilerClassifier::from_settings(&FilterSettings {
        spoiler_words: words.join(","),
        spoiler_filenames: substrings.join(","),
        spoiler_links: substrings.join(","),
        gif_spoilers_only: false,
        ..Default::default()
    })
}

fn bench_filenames(c: &mut Criterion) {
    let classifier = classifier();
    let hit = FilenameTarget::new("holiday_pattern199_final.png");
    let miss = FilenameTarget::new("holiday_photo_final.png");

    c.bench_function("classify_filename_hit", |b| {
        b.iter(|| classifier.classify_filename(black_box(&hit)))
    });
    c.bench_function("classify_filename_miss", |b| {
        b.iter(|| classifier.classify_filename(black_box(&miss)))
    });
}

fn bench_links(c: &mut Criterion) {
    let classifier = classifier();
    let link = LinkTarget::new("https://media.example.com/pattern42/view.gif", MediaType::Gifv);
    let upstream = ClassificationResult::pass();

    c.bench_function("classify_link", |b| {
        b.iter(|| classifier.classify_link(black_box(&link), &upstream))
    });
}

fn bench_rewrite(c: &mut Criterion) {
    let classifier = classifier();
    let body = "the quick word7 fox jumps over the lazy word42 dog ".repeat(20);
    let target = TextTarget::new(body);

    c.bench_function("rewrite_words_1kb", |b| {
        b.iter(|| classifier.rewrite_words(black_box(&target)))
    });
}

criterion_group!(benches, bench_filenames, bench_links, bench_rewrite);
criterion_main!(benches);
