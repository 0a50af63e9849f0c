#![allow(dead_code)]

use std::sync::Arc;

use namefp::{
    DictionaryBuilder, LemmaDictionary, MatchConfig, NamePipeline, NamefpConfig, NormalizeConfig,
};
use tempfile::TempDir;

/// Small Ukrainian name dictionary with inflected forms and typo rows.
pub const FIXTURE_JSONL: &str = r#"{"term":"Іван","lemma":"Іван","lemma_labels":["lemma","lemma-firstname"],"labels":["uk"]}
{"term":"Івана","lemma":"Іван","lemma_labels":["lemma","lemma-firstname"],"labels":["uk"]}
{"term":"Іванна","lemma":"Іванна","lemma_labels":["lemma","lemma-firstname"],"labels":["uk"]}
{"term":"Олег","lemma":"Олег","lemma_labels":["lemma","lemma-firstname"],"labels":["uk","ru"]}
{"term":"Oleg","lemma":"Олег","lemma_labels":["lemma","lemma-firstname-typo"],"labels":["en"]}
{"term":"Роман","lemma":"Роман","lemma_labels":["lemma","lemma-firstname"],"labels":["uk"]}
{"term":"Зоя","lemma":"Зоя","lemma_labels":["lemma","lemma-firstname"],"labels":["uk"]}
{"term":"Орестівна","lemma":"Орестівна","lemma_labels":["lemma","lemma-patronymic"],"labels":["uk"]}
{"term":"Петрович","lemma":"Петрович","lemma_labels":["lemma","lemma-patronymic"],"labels":["uk"]}
{"term":"Петрович","lemma":"Петрович","lemma_labels":["lemma","lemma-lastname"],"labels":["uk"]}
{"term":"Климпуш","lemma":"Климпуш","lemma_labels":["lemma","lemma-lastname"],"labels":["uk"]}
{"term":"Цинцадзе","lemma":"Цинцадзе","lemma_labels":["lemma","lemma-lastname"],"labels":["ka"]}
{"term":"Шевченко","lemma":"Шевченко","lemma_labels":["lemma","lemma-lastname"],"labels":["uk"]}
{"term":"Шевченка","lemma":"Шевченко","lemma_labels":["lemma","lemma-lastname"],"labels":["uk"]}
{"term":"Шевченко","lemma":"Шевченко","lemma_labels":["lemma","lemma-lastname-typo"],"labels":["uk"]}
"#;

pub fn fixture_dictionary() -> LemmaDictionary {
    let mut builder = DictionaryBuilder::new();
    builder
        .read_jsonl(FIXTURE_JSONL.as_bytes())
        .expect("fixture input is valid");
    builder.build().expect("fixture dictionary builds")
}

pub fn fixture_pipeline() -> NamePipeline {
    fixture_pipeline_with(MatchConfig::default())
}

pub fn fixture_pipeline_with(match_cfg: MatchConfig) -> NamePipeline {
    NamePipeline::new(
        Arc::new(fixture_dictionary()),
        NormalizeConfig::default(),
        match_cfg,
    )
    .expect("fixture pipeline")
}

/// Saved fixture dictionary plus a config pointing at it.
pub fn fixture_on_disk() -> (TempDir, NamefpConfig) {
    let dir = TempDir::new().expect("tempdir");
    let dict_dir = dir.path().join("names.dict");
    fixture_dictionary().save(&dict_dir).expect("save fixture");

    let mut config = NamefpConfig::default();
    config.dictionary.path = Some(dict_dir);
    (dir, config)
}
