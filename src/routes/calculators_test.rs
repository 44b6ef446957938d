use super::*;

fn query(height: Option<&str>, weight: Option<&str>) -> BodyQuery {
    BodyQuery { height_cm: height.map(Into::into), weight_kg: weight.map(Into::into), ..BodyQuery::default() }
}

#[tokio::test]
async fn bmi_rounds_and_classifies() {
    let Json(res) = bmi(Query(query(Some("170"), Some("70")))).await.unwrap();
    assert!((res.bmi - 24.2).abs() < f64::EPSILON);
    assert_eq!(res.category, BmiCategory::Healthy);
}

#[tokio::test]
async fn bmi_missing_height_is_bad_request() {
    let err = bmi(Query(query(None, Some("70")))).await.unwrap_err();
    assert_eq!(err.0, "height is required");
    assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn bmi_rejects_non_numeric_and_non_positive() {
    let err = bmi(Query(query(Some("tall"), Some("70")))).await.unwrap_err();
    assert_eq!(err.0, "height must be a number");

    let err = bmi(Query(query(Some("170"), Some("0")))).await.unwrap_err();
    assert_eq!(err.0, "weight must be a positive number");
}

#[tokio::test]
async fn bmr_male_reference_value() {
    let q = BodyQuery { age: Some("30".into()), sex: Some("Male".into()), ..query(Some("170"), Some("70")) };
    let Json(res) = bmr(Query(q)).await.unwrap();
    assert_eq!(res.bmr_kcal, 1618);
}

#[tokio::test]
async fn bmr_female_offset() {
    let q = BodyQuery { age: Some("30".into()), sex: Some("female".into()), ..query(Some("170"), Some("70")) };
    let Json(res) = bmr(Query(q)).await.unwrap();
    // 700 + 1062.5 - 150 - 161
    assert_eq!(res.bmr_kcal, 1452);
}

#[tokio::test]
async fn bmr_requires_known_sex() {
    let q = BodyQuery { age: Some("30".into()), sex: Some("x".into()), ..query(Some("170"), Some("70")) };
    assert_eq!(bmr(Query(q)).await.unwrap_err().0, "sex must be male or female");

    let q = BodyQuery { age: Some("30".into()), ..query(Some("170"), Some("70")) };
    assert_eq!(bmr(Query(q)).await.unwrap_err().0, "sex is required");
}

#[tokio::test]
async fn water_for_seventy_kg() {
    let Json(res) = water(Query(query(None, Some("70")))).await.unwrap();
    assert!((res.litres - 2.5).abs() < f64::EPSILON);
    assert_eq!(res.millilitres, 2450);
}

#[tokio::test]
async fn water_requires_weight() {
    let err = water(Query(query(None, Some("  ")))).await.unwrap_err();
    assert_eq!(err.0, "weight is required");
}
