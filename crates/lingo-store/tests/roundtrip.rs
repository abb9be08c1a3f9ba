use lingo_config::store::StoreConfig;
use lingo_types::{DictionaryData, JargonTerm, Meaning};

fn sample_document() -> DictionaryData {
    DictionaryData {
        terms: vec![JargonTerm {
            id: "a1b2c3".to_string(),
            term: "yak shaving".to_string(),
            pronunciation: Some("/jæk ˈʃeɪvɪŋ/".to_string()),
            meanings: vec![Meaning {
                part_of_speech: "noun".to_string(),
                definition: "A chain of nested prerequisite tasks.".to_string(),
                example: Some("I spent the morning yak shaving.".to_string()),
            }],
            category: "Engineering".to_string(),
            tags: vec!["process".to_string()],
            created_at: 1_754_000_000_000,
            is_ai_generated: true,
        }],
        categories: vec!["General".to_string(), "Engineering".to_string()],
    }
}

#[tokio::test]
async fn export_then_import_yields_an_equal_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("words.json");
    let document = sample_document();

    lingo_store::export(&path, &document).await.unwrap();
    let restored = lingo_store::import(&path).await.unwrap();

    assert_eq!(restored, document);
}

#[tokio::test]
async fn import_rejects_a_file_missing_required_fields() {
    let dir = tempfile::tempdir().unwrap();

    let no_categories = dir.path().join("no_categories.json");
    tokio::fs::write(&no_categories, r#"{"terms": []}"#).await.unwrap();
    assert!(lingo_store::import(&no_categories).await.is_err());

    let no_terms = dir.path().join("no_terms.json");
    tokio::fs::write(&no_terms, r#"{"categories": ["General"]}"#).await.unwrap();
    assert!(lingo_store::import(&no_terms).await.is_err());

    let not_json = dir.path().join("garbage.json");
    tokio::fs::write(&not_json, "certainly not json").await.unwrap();
    assert!(lingo_store::import(&not_json).await.is_err());
}

#[tokio::test]
async fn load_prefers_the_cache_over_the_bundled_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig {
        data_path: dir.path().join("words.json").display().to_string(),
        cache_path: dir.path().join("cache.json").display().to_string(),
        ..StoreConfig::default()
    };

    let bundled = DictionaryData {
        terms: vec![],
        categories: vec!["General".to_string()],
    };
    lingo_store::export(&config.data_path, &bundled).await.unwrap();

    let cached = sample_document();
    lingo_store::save_cache(&config, &cached).await.unwrap();

    assert_eq!(lingo_store::load(&config).await, cached);
}

#[tokio::test]
async fn load_falls_back_to_the_bundled_file_when_the_cache_is_broken() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig {
        data_path: dir.path().join("words.json").display().to_string(),
        cache_path: dir.path().join("cache.json").display().to_string(),
        ..StoreConfig::default()
    };

    let bundled = sample_document();
    lingo_store::export(&config.data_path, &bundled).await.unwrap();
    tokio::fs::write(&config.cache_path, "{ truncated").await.unwrap();

    assert_eq!(lingo_store::load(&config).await, bundled);
}

#[tokio::test]
async fn load_degrades_to_the_empty_default_when_nothing_exists() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig {
        data_path: dir.path().join("missing.json").display().to_string(),
        cache_path: dir.path().join("missing-cache.json").display().to_string(),
        ..StoreConfig::default()
    };

    let loaded = lingo_store::load(&config).await;
    assert_eq!(loaded, DictionaryData::default());
    assert_eq!(loaded.categories, vec!["General".to_string()]);
}

#[tokio::test]
async fn save_cache_creates_the_parent_directory() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig {
        data_path: dir.path().join("words.json").display().to_string(),
        cache_path: dir
            .path()
            .join(".lingo")
            .join("cache.json")
            .display()
            .to_string(),
        ..StoreConfig::default()
    };

    lingo_store::save_cache(&config, &sample_document()).await.unwrap();
    assert_eq!(lingo_store::load(&config).await, sample_document());
}
