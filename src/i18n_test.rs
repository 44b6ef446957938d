use super::*;

#[test]
fn parse_known_codes() {
    assert_eq!(Language::parse("en"), Language::En);
    assert_eq!(Language::parse("hi"), Language::Hi);
    assert_eq!(Language::parse(" HI "), Language::Hi);
    assert_eq!(Language::parse("Hindi"), Language::Hi);
}

#[test]
fn parse_unknown_falls_back_to_english() {
    assert_eq!(Language::parse(""), Language::En);
    assert_eq!(Language::parse("fr"), Language::En);
}

#[test]
fn lang_query_defaults_to_english_when_missing() {
    let query: LangQuery = serde_json::from_str("{}").unwrap();
    assert_eq!(query.lang, Language::En);
}

#[test]
fn lang_query_accepts_unknown_code() {
    let query: LangQuery = serde_json::from_str(r#"{"lang":"xx"}"#).unwrap();
    assert_eq!(query.lang, Language::En);
    let query: LangQuery = serde_json::from_str(r#"{"lang":"hi"}"#).unwrap();
    assert_eq!(query.lang, Language::Hi);
}

#[test]
fn pick_selects_side() {
    let text = Text::new("Water", "पानी");
    assert_eq!(text.get(Language::En), "Water");
    assert_eq!(text.get(Language::Hi), "पानी");
}

#[test]
fn lines_get_copies_all_lines() {
    const EN: &[&str] = &["a", "b"];
    const HI: &[&str] = &["क", "ख"];
    let lines = Lines::new(EN, HI);
    assert_eq!(lines.get(Language::Hi), vec!["क".to_owned(), "ख".to_owned()]);
}

#[test]
fn language_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Language::Hi).unwrap(), r#""hi""#);
    assert_eq!(Language::En.as_str(), "en");
}
