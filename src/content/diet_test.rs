use super::*;
use crate::content::diseases::is_known_disease;

#[test]
fn daily_meals_cover_four_slots_in_order() {
    let meals = daily_meals(DietPreference::Veg, Language::En);
    let times = meals.iter().map(|m| m.time).collect::<Vec<_>>();
    assert_eq!(times, vec![MealTime::Morning, MealTime::Afternoon, MealTime::Evening, MealTime::Night]);
}

#[test]
fn preference_switches_meal_text() {
    let veg = daily_meals(DietPreference::Veg, Language::En);
    let non_veg = daily_meals(DietPreference::NonVeg, Language::En);
    assert!(veg[0].meal.starts_with("Oatmeal"));
    assert!(non_veg[0].meal.starts_with("Boiled egg"));
}

#[test]
fn meals_in_hindi() {
    let meals = daily_meals(DietPreference::Veg, Language::Hi);
    assert!(meals[2].meal.contains("मखाना"));
}

#[test]
fn from_non_veg_flag() {
    assert_eq!(DietPreference::from_non_veg(true), DietPreference::NonVeg);
    assert_eq!(DietPreference::from_non_veg(false), DietPreference::Veg);
}

#[test]
fn disease_diet_lookup() {
    let entry = diet_for_disease("bp").expect("bp diet");
    assert!(entry.recommendation.en.starts_with("DASH"));
    assert!(diet_for_disease("none").is_none());
    assert!(diet_for_disease("asthma").is_none());
}

#[test]
fn disease_diet_ids_exist_in_catalog() {
    for entry in diet_plan().disease_diet {
        assert!(is_known_disease(entry.disease_id), "{}", entry.disease_id);
    }
}

#[test]
fn food_lists_are_parallel() {
    let plan = diet_plan();
    assert_eq!(plan.healthy_foods.en.len(), plan.healthy_foods.hi.len());
    assert_eq!(plan.avoid_foods.en.len(), plan.avoid_foods.hi.len());
}

#[test]
fn meal_time_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&MealTime::Afternoon).unwrap(), r#""afternoon""#);
}
