use super::*;

#[test]
fn table_url_with_and_without_query() {
    assert_eq!(
        table_url("https://abc.supabase.co", "herbs", ""),
        "https://abc.supabase.co/rest/v1/herbs"
    );
    assert_eq!(
        table_url("https://abc.supabase.co", "diseases", "select=id&order=position.asc"),
        "https://abc.supabase.co/rest/v1/diseases?select=id&order=position.asc"
    );
}

#[test]
fn new_trims_trailing_slash() {
    let store = RestStore::new("https://abc.supabase.co/", "key".into(), 5).unwrap();
    assert_eq!(store.base_url, "https://abc.supabase.co");
    assert_eq!(store.backend(), "rest");
}

#[test]
fn first_row_takes_inserted_record() {
    let text = r#"[{
        "id": "0b8f5a3e-6a4e-4f8e-9d8e-1c2d3e4f5a6b",
        "full_name": "Meena",
        "age": 55,
        "gender": "Female",
        "height": 150.0,
        "weight": 70.0,
        "contact_number": "9000000000",
        "email": "meena@example.com",
        "existing_disease": "bp",
        "symptoms": "headache",
        "lifestyle": "Active",
        "suggestions": {"bmi": 31.1},
        "created_at": "2024-01-02T03:04:05.123456+00:00"
    }]"#;
    let row = first_row(text).unwrap();
    assert_eq!(row.full_name, "Meena");
    assert_eq!(row.existing_disease.as_deref(), Some("bp"));
}

#[test]
fn first_row_rejects_empty_array() {
    let err = first_row("[]").unwrap_err();
    assert!(matches!(err, StoreError::Decode(_)));
}

#[test]
fn decode_disease_options() {
    let text = r#"[{"id":"diabetes","name_en":"Diabetes","name_hi":"मधुमेह"}]"#;
    let options: Vec<DiseaseOption> = decode(text).unwrap();
    assert_eq!(options.len(), 1);
    assert_eq!(options[0].id, "diabetes");
}

#[test]
fn decode_reports_malformed_body() {
    let err = decode::<Vec<DiseaseOption>>("{not json").unwrap_err();
    assert!(err.to_string().starts_with("decode failed:"));
}
