use crate::domain::model::FeedingUnit;
use crate::domain::services::parse::parse_leading_number;
use crate::domain::services::units::convert_amount;

/// Share of body weight fed per day.
pub const DAILY_RATIO: f64 = 0.03;
/// Daily amount used when the weight cannot be parsed.
pub const FALLBACK_DAILY_AMOUNT_KG: f64 = 1.0;
pub const DEFAULT_BREED_MULTIPLIER: f64 = 1.0;

const BREED_MULTIPLIERS: &[(&str, f64)] = &[
    ("labrador", 1.1),
    ("chihuahua", 0.9),
    ("persa", 1.0),
    ("siamés", 1.0),
];

pub fn breed_multiplier(breed: &str) -> f64 {
    let key = breed.to_lowercase();
    BREED_MULTIPLIERS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, multiplier)| *multiplier)
        .unwrap_or(DEFAULT_BREED_MULTIPLIER)
}

/// 每日建議份量 (公斤)
pub fn daily_amount_kg(breed: &str, weight: &str) -> f64 {
    let base = match parse_leading_number(weight) {
        Some(weight_kg) => weight_kg * DAILY_RATIO,
        None => {
            tracing::debug!("Unparsable weight {:?}, using fallback amount", weight);
            FALLBACK_DAILY_AMOUNT_KG
        }
    };
    base * breed_multiplier(breed)
}

/// Formatted recommended daily food amount for a pet.
pub fn food_recommendation(breed: &str, weight: &str, unit: FeedingUnit) -> String {
    convert_amount(daily_amount_kg(breed, weight), unit)
}
