use crate::domain::services::parse::parse_leading_number;

pub const PUPPY_SCHEDULE: &[&str] = &["08:00", "12:00", "16:00", "20:00"];
pub const DEFAULT_SCHEDULE: &[&str] = &["08:00", "13:00", "19:00"];
/// Pets younger than this (in years) get the puppy schedule.
pub const PUPPY_AGE_LIMIT_YEARS: f64 = 1.0;

const BREED_SCHEDULES: &[(&str, &[&str])] = &[
    ("labrador", &["07:00", "12:00", "18:00"]),
    ("chihuahua", &["08:30", "13:30", "19:30"]),
];

pub fn is_puppy(age: &str) -> bool {
    parse_leading_number(age).is_some_and(|years| years < PUPPY_AGE_LIMIT_YEARS)
}

/// 依年齡與品種產生餵食時間 (HH:MM, 24 小時制)
pub fn feeding_schedule(breed: &str, age: &str) -> &'static [&'static str] {
    if is_puppy(age) {
        return PUPPY_SCHEDULE;
    }

    let key = breed.to_lowercase();
    BREED_SCHEDULES
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, times)| *times)
        .unwrap_or(DEFAULT_SCHEDULE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_puppy_schedule_ignores_breed() {
        assert_eq!(feeding_schedule("Chihuahua", "0.5"), ["08:00", "12:00", "16:00", "20:00"]);
        assert_eq!(feeding_schedule("anything", "0"), PUPPY_SCHEDULE);
    }

    #[test]
    fn test_breed_schedules() {
        assert_eq!(feeding_schedule("Chihuahua", "3"), ["08:30", "13:30", "19:30"]);
        assert_eq!(feeding_schedule("LABRADOR", "5"), ["07:00", "12:00", "18:00"]);
    }

    #[test]
    fn test_unknown_breed_gets_default() {
        assert_eq!(feeding_schedule("Beagle", "3"), ["08:00", "13:00", "19:00"]);
        assert_eq!(feeding_schedule("", "1"), DEFAULT_SCHEDULE);
    }

    #[test]
    fn test_unparsable_age_is_not_a_puppy() {
        assert_eq!(feeding_schedule("chihuahua", "abc"), ["08:30", "13:30", "19:30"]);
        assert_eq!(feeding_schedule("Beagle", ""), DEFAULT_SCHEDULE);
        assert!(!is_puppy("desconocida"));
    }
}
