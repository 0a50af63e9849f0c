use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, criterion_group, criterion_main};
use namefp::{DictionaryBuilder, MatchConfig, NamePipeline, NormalizeConfig};

const FIXTURE: &str = r#"{"term":"Іван","lemma":"Іван","lemma_labels":["lemma","lemma-firstname"]}
{"term":"Івана","lemma":"Іван","lemma_labels":["lemma","lemma-firstname"]}
{"term":"Олег","lemma":"Олег","lemma_labels":["lemma","lemma-firstname"]}
{"term":"Oleg","lemma":"Олег","lemma_labels":["lemma","lemma-firstname-typo"]}
{"term":"Петрович","lemma":"Петрович","lemma_labels":["lemma","lemma-patronymic"]}
{"term":"Петрович","lemma":"Петрович","lemma_labels":["lemma","lemma-lastname"]}
{"term":"Шевченко","lemma":"Шевченко","lemma_labels":["lemma","lemma-lastname"]}
{"term":"Шевченка","lemma":"Шевченко","lemma_labels":["lemma","lemma-lastname"]}
"#;

const NAMES: &[&str] = &[
    "Іван Петрович Шевченко",
    "0leg Шевченка",
    "Xyzzy Plugh",
    "іванна орестівна климпуш-цинцадзе",
];

fn pipeline() -> NamePipeline {
    let mut builder = DictionaryBuilder::new();
    builder
        .read_jsonl(FIXTURE.as_bytes())
        .expect("bench fixture is valid");
    NamePipeline::new(
        Arc::new(builder.build().expect("bench dictionary")),
        NormalizeConfig::default(),
        MatchConfig::default(),
    )
    .expect("bench pipeline")
}

fn resolve_bench(c: &mut Criterion) {
    let pipeline = pipeline();
    c.bench_function("resolve_names", |b| {
        b.iter(|| black_box(pipeline.resolve_names(black_box(NAMES))));
    });
}

fn match_bench(c: &mut Criterion) {
    let pipeline = pipeline();
    let seeds: Vec<(u64, String)> = (0..1_000u64)
        .map(|id| (id, format!("Іван Family{id}")))
        .collect();
    pipeline.seed_names(&seeds);

    c.bench_function("match_name_hit", |b| {
        b.iter(|| black_box(pipeline.match_name(black_box("Івана Family500"))));
    });
    c.bench_function("match_name_miss", |b| {
        b.iter(|| black_box(pipeline.match_name(black_box("Xyzzy Plugh"))));
    });
}

criterion_group!(benches, resolve_bench, match_bench);
criterion_main!(benches);
