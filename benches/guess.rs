use criterion::{black_box, criterion_group, criterion_main, Criterion};
use typotattler::checker::dictionary::WordSet;
use typotattler::checker::tokenizer::tokenize;
use typotattler::Checker;

const TEXT: &str = "Teh quick brown fox jumsp over the lazy dgo, and it wasn't evn tired.";

fn bench_guess(c: &mut Criterion) {
    let mut words = WordSet::from_reader(typotattler::checker::EMBEDDED_WORDS.as_bytes())
        .expect("embedded word list");

    c.bench_function("guess_short_token", |b| {
        b.iter(|| words.guess(black_box("teh")))
    });

    c.bench_function("guess_long_token", |b| {
        b.iter(|| words.guess(black_box("becuase")))
    });
}

fn bench_check_line(c: &mut Criterion) {
    let checker = Checker::embedded();

    c.bench_function("tokenize_and_check", |b| {
        b.iter(|| {
            tokenize(black_box(TEXT))
                .into_iter()
                .filter(|token| checker.is_mistake(token))
                .count()
        })
    });
}

criterion_group!(benches, bench_guess, bench_check_line);
criterion_main!(benches);
