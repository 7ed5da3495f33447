mod common;

use serde_json::json;

use common::StubService;
use shipi18n_client::{LocaleFileRequest, LocaleFileTranslator};

fn request(targets: &[&str]) -> LocaleFileRequest {
    LocaleFileRequest {
        target_languages: targets.iter().map(|t| t.to_string()).collect(),
        source_language: None,
        preserve_placeholders: true,
    }
}

#[tokio::test]
async fn test_translate_file_writes_one_file_per_language() {
    let stub = StubService::ok(json!({
        "es": "{\"common\":{\"greeting\":\"Hola\",\"items\":\"{{count}} artículos\"}}",
        "fr": {"common": {"greeting": "Bonjour", "items": "{{count}} articles"}},
        "warnings": [{"message": "Some keys were skipped"}]
    }))
    .await;
    let translator = LocaleFileTranslator::new(stub.client(Some("sk_test_123")));

    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("en.json");
    std::fs::write(
        &input,
        r#"{"common": {"greeting": "Hello", "items": "{{count}} items"}}"#,
    )
    .unwrap();
    let output = dir.path().join("out");

    let report = translator
        .translate_file(&input, &output, request(&["es", "fr"]))
        .await
        .unwrap();

    let languages: Vec<_> = report.written.iter().map(|(lang, _)| lang.as_str()).collect();
    assert_eq!(languages, vec!["es", "fr"]);
    assert_eq!(report.warnings, vec!["Some keys were skipped".to_string()]);
    assert!(report.skipped.is_empty());

    let es: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(output.join("es.json")).unwrap()).unwrap();
    assert_eq!(es["common"]["items"], "{{count}} artículos");

    let fr = std::fs::read_to_string(output.join("fr.json")).unwrap();
    assert!(fr.starts_with("{\n  \"common\": {"));

    let body = stub.last_request().json();
    assert_eq!(body["preservePlaceholders"], "true");
    assert_eq!(body["text"], "{\"common\":{\"greeting\":\"Hello\",\"items\":\"{{count}} items\"}}");
}

#[tokio::test]
async fn test_translate_file_keeps_raw_entries_verbatim() {
    let stub = StubService::ok(json!({"es": "not valid json"})).await;
    let translator = LocaleFileTranslator::new(stub.client(Some("sk_test_123")));

    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("en.json");
    std::fs::write(&input, r#"{"greeting": "Hello"}"#).unwrap();

    translator
        .translate_file(&input, dir.path(), request(&["es"]))
        .await
        .unwrap();

    assert_eq!(
        std::fs::read_to_string(dir.path().join("es.json")).unwrap(),
        "not valid json"
    );
}

#[tokio::test]
async fn test_translate_file_ignores_unrequested_and_hostile_keys() {
    let stub = StubService::ok(json!({
        "../escaped": "{\"a\":\"b\"}",
        "de": "{\"a\":\"c\"}",
        "es": "{\"a\":\"Hola\"}",
        "warnings": "partial failure"
    }))
    .await;
    let translator = LocaleFileTranslator::new(stub.client(Some("sk_test_123")));

    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("en.json");
    std::fs::write(&input, r#"{"a": "Hello"}"#).unwrap();
    let output = dir.path().join("out");

    let report = translator
        .translate_file(&input, &output, request(&["es", "../escaped"]))
        .await
        .unwrap();

    let languages: Vec<_> = report.written.iter().map(|(lang, _)| lang.as_str()).collect();
    assert_eq!(languages, vec!["es"]);
    assert_eq!(report.skipped, vec!["../escaped", "de"]);
    assert_eq!(report.warnings, vec!["partial failure".to_string()]);

    assert!(!dir.path().join("escaped.json").exists());
    assert!(!output.join("de.json").exists());
    let entries: Vec<_> = std::fs::read_dir(&output)
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec!["es.json"]);
}

#[tokio::test]
async fn test_translate_file_rejects_before_request() {
    let stub = StubService::ok(json!({})).await;
    let translator = LocaleFileTranslator::new(stub.client(Some("sk_test_123")));

    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("en.txt");
    std::fs::write(&input, "{}").unwrap();

    let err = translator
        .translate_file(&input, dir.path(), request(&["es"]))
        .await
        .unwrap_err();

    assert!(err.is_validation());
    assert!(stub.requests().is_empty());
}
