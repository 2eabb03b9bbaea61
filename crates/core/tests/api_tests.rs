//! Library API integration tests
use lede_core::*;

fn get_fixture_path(name: &str) -> String {
    format!("../../tests/fixtures/{}", name)
}

fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(get_fixture_path(name)).unwrap()
}

#[test]
fn test_extract_html_api() {
    let article = extract_html(&read_fixture("article.html")).expect("should extract");

    assert_eq!(article.title.as_deref(), Some("Coastal Towns Brace for Spring Storm"));
    assert_eq!(article.date.as_deref(), Some("1 марта 2024 г."));

    let content = article.content.unwrap();
    assert_eq!(content.split("\n\n").count(), 3);
    assert!(content.starts_with("Residents along the northern coast"));
    assert!(content.ends_with("until Saturday morning."));
}

#[test]
fn test_noise_stays_out_of_content() {
    let content = extract_html(&read_fixture("article.html")).unwrap().content.unwrap();

    assert!(!content.contains("Subscribe today"));
    assert!(!content.contains("Share this story"));
    assert!(!content.contains("lighthouses"));
    assert!(!content.contains("Great reporting"));
    assert!(!content.contains("All rights reserved"));
    assert!(!content.contains("Short caption"));
}

#[test]
fn test_free_text_date_is_returned_as_written() {
    let article = extract_html(&read_fixture("dated_text.html")).expect("should extract");

    assert_eq!(article.title.as_deref(), Some("Мост на набережной откроют после ремонта"));
    assert_eq!(article.date.as_deref(), Some("12 апреля 2024"));
    assert!(article.content.unwrap().contains("приёмки работ"));
}

#[test]
fn test_empty_content_fixture() {
    let html = read_fixture("empty_content.html");

    let err = extract_html(&html).unwrap_err();
    assert!(matches!(err, LedeError::EmptyContent { length: 0, .. }));
    assert_eq!(err.code(), ErrorCode::ArticleEmptyContent);
    assert!(!err.is_retryable());

    let article = parse_article(&html).unwrap();
    assert_eq!(article.title.as_deref(), Some("Empty Page"));
    assert!(article.content.is_none());
}

#[test]
fn test_extractor_builder() {
    let config = ExtractConfig::builder()
        .min_content_chars(1000)
        .date_locale(DateLocale::En)
        .build();
    let extractor = Extractor::with_config(config);

    let html = read_fixture("article.html");
    assert!(matches!(extractor.extract_html(&html), Err(LedeError::EmptyContent { minimum: 1000, .. })));
    assert_eq!(extractor.parse_article(&html).unwrap().date.as_deref(), Some("1 March 2024"));
}

#[test]
fn test_settings_drive_extraction() {
    let settings = Settings::from_toml(
        r#"
        [extract]
        container_paragraph_chars = 5
        min_content_chars = 10
        "#,
    )
    .unwrap();

    let article = Extractor::with_config(settings.extract)
        .extract_html(&read_fixture("article.html"))
        .unwrap();
    assert!(article.content.unwrap().ends_with("Short caption."));
}

#[test]
fn test_article_output_formats() {
    let article = extract_html(&read_fixture("article.html")).unwrap();

    let json: serde_json::Value = serde_json::from_str(&article.to_json(false).unwrap()).unwrap();
    assert_eq!(json.as_object().unwrap().len(), 3);
    assert_eq!(json["title"], "Coastal Towns Brace for Spring Storm");

    let text = article.to_text();
    assert!(text.starts_with("Coastal Towns Brace for Spring Storm\n\n1 марта 2024 г.\n\n"));
}

#[test]
fn test_resolvers_are_independent() {
    let doc = Document::parse(&read_fixture("article.html")).unwrap();

    assert_eq!(resolve_title(&doc), resolve_title(&doc));
    assert_eq!(resolve_date(&doc), Some("1 марта 2024 г.".to_string()));

    let clean = doc.without_noise(&default_noise());
    assert!(resolve_content(&clean).is_some());
    assert_eq!(resolve_title(&doc).as_deref(), Some("Coastal Towns Brace for Spring Storm"));
}
