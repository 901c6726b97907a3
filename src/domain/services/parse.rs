use regex::Regex;
use std::sync::LazyLock;

static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?").expect("leading number pattern is valid")
});

/// Reads the numeric prefix of free-text input such as `"10"`, `" 4.5kg"` or `"2 años"`.
///
/// Returns `None` when the input does not start with a number or the value is not finite.
pub fn parse_leading_number(input: &str) -> Option<f64> {
    let trimmed = input.trim_start();
    let matched = LEADING_NUMBER.find(trimmed)?;
    matched
        .as_str()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
