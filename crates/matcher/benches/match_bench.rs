use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lexicon::{Candidate, CandidateSet, Label};
use matcher::{MatchConfig, Matcher, Schema};

fn name(positions: usize, seed: usize) -> Vec<CandidateSet> {
    (0..positions)
        .map(|p| {
            vec![
                Candidate::new("t", Label::Firstname, format!("F{seed}-{p}")),
                Candidate::new("t", Label::Patronymic, format!("P{seed}-{p}")),
                Candidate::new("t", Label::Lastname, format!("L{seed}-{p}")),
            ]
        })
        .collect()
}

fn bench_generate(c: &mut Criterion) {
    let config = MatchConfig::default().with_schema(Schema::new([
        Label::Firstname,
        Label::Patronymic,
        Label::Lastname,
    ]));
    let matcher = Matcher::new(config).expect("bench config");
    let mut group = c.benchmark_group("generate");

    for positions in [2, 3, 8] {
        let candidates = name(positions, 0);
        group.bench_function(format!("{positions}_tokens"), |b| {
            b.iter(|| matcher.generate(black_box(&candidates)).count())
        });
    }

    group.finish();
}

fn bench_match(c: &mut Criterion) {
    let mut matcher = Matcher::default();
    matcher.seed_all((0..2_000u64).map(|id| (id, name(3, id as usize))));

    let hit = name(3, 1_000);
    let miss = name(3, 9_999);

    c.bench_function("match_identity_hit", |b| {
        b.iter(|| matcher.match_identity(black_box(&hit)))
    });
    c.bench_function("match_identity_miss", |b| {
        b.iter(|| matcher.match_identity(black_box(&miss)))
    });
}

criterion_group!(benches, bench_generate, bench_match);
criterion_main!(benches);
