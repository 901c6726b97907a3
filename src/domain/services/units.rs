use crate::domain::model::FeedingUnit;

pub const POUNDS_PER_KILOGRAM: f64 = 2.20462;
/// Rough volume equivalent, independent of food density.
pub const CUPS_PER_KILOGRAM: f64 = 4.0;

/// 將公斤數量轉為顯示字串
pub fn convert_amount(amount_kg: f64, unit: FeedingUnit) -> String {
    match unit {
        FeedingUnit::Kilograms => format!("{} kg", to_fixed(amount_kg, 2)),
        FeedingUnit::Pounds => format!("{} lbs", to_fixed(amount_kg * POUNDS_PER_KILOGRAM, 2)),
        FeedingUnit::Cups => format!("{} tazas", to_fixed(amount_kg * CUPS_PER_KILOGRAM, 1)),
    }
}

/// Fixed-point rendering with ties rounded away from zero and no `-0`.
fn to_fixed(value: f64, decimals: i32) -> String {
    let factor = 10f64.powi(decimals);
    // 加 0.0 讓 -0.0 變成 0.0
    let rounded = (value * factor).round() / factor + 0.0;
    format!("{:.*}", decimals as usize, rounded)
}

/// Same as [`convert_amount`] for a free-text unit label; unknown labels render in kilograms.
pub fn convert_amount_for_label(amount_kg: f64, unit_label: &str) -> String {
    convert_amount(amount_kg, FeedingUnit::from_label(unit_label))
}
