use crate::domain::services::parse::parse_leading_number;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

pub const DEFAULT_PET_NAME: &str = "Mascota";
pub const DEFAULT_BREED: &str = "Sin raza";
pub const DEFAULT_AGE: &str = "Edad no registrada";
pub const DEFAULT_WEIGHT: &str = "0";
pub const PLACEHOLDER_IMAGE_URL: &str = "https://placehold.co/200x200?text=Pawmi";

/// 單一寵物資料，來自遠端清單
///
/// Accepts both the backend shape (snake_case, nullable fields, numeric `weight_kg`)
/// and the camelCase all-strings shape; missing or null fields get display defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawPetRecord")]
pub struct PetRecord {
    pub id: String,
    pub name: String,
    pub breed: String,
    pub image_url: String,
    pub age: String,
    pub weight: String,
    pub traits: Vec<String>,
}

#[derive(Deserialize)]
struct RawPetRecord {
    #[serde(default, deserialize_with = "string_or_number")]
    id: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    breed: Option<String>,
    #[serde(default, alias = "imageUrl")]
    image_url: Option<String>,
    #[serde(default)]
    age: Option<Scalar>,
    #[serde(default)]
    weight: Option<Scalar>,
    #[serde(default)]
    weight_kg: Option<Scalar>,
    #[serde(default)]
    traits: Option<Vec<String>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(serde_json::Number),
}

impl Scalar {
    fn into_text(self) -> String {
        match self {
            Self::Text(s) => s,
            Self::Number(n) => n.to_string(),
        }
    }
}

impl From<RawPetRecord> for PetRecord {
    fn from(raw: RawPetRecord) -> Self {
        let weight = normalize_weight(raw.weight_kg, raw.weight);
        Self {
            id: raw.id,
            name: raw.name.unwrap_or_else(|| DEFAULT_PET_NAME.to_string()),
            breed: raw.breed.unwrap_or_else(|| DEFAULT_BREED.to_string()),
            image_url: raw
                .image_url
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.to_string()),
            age: raw
                .age
                .map(Scalar::into_text)
                .unwrap_or_else(|| DEFAULT_AGE.to_string()),
            weight,
            traits: raw.traits.unwrap_or_default(),
        }
    }
}

/// `weight_kg` wins when it holds a number (the backend may send decimals as strings).
/// Otherwise the free-text weight is stripped to digits and separators, with `,` read
/// as the decimal point. Anything unreadable becomes `"0"`.
fn normalize_weight(weight_kg: Option<Scalar>, weight: Option<Scalar>) -> String {
    let from_kg = weight_kg.and_then(|kg| match kg {
        Scalar::Number(n) => n.as_f64(),
        Scalar::Text(s) => parse_leading_number(&s),
    });

    let from_text = || {
        weight.and_then(|w| {
            let text = w.into_text();
            let cleaned: String = text
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
                .collect();
            parse_leading_number(&cleaned.replacen(',', ".", 1))
        })
    };

    from_kg
        .or_else(from_text)
        .map(|kg| kg.to_string())
        .unwrap_or_else(|| DEFAULT_WEIGHT.to_string())
}

/// The endpoint sends ids as strings, but some mocks send raw numbers.
fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?
        .map(Scalar::into_text)
        .unwrap_or_default())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum FeedingUnit {
    #[default]
    #[serde(rename = "kg", alias = "kilograms")]
    #[cfg_attr(feature = "cli", value(name = "kg", alias = "kilograms"))]
    Kilograms,
    #[serde(rename = "lbs", alias = "pounds")]
    #[cfg_attr(feature = "cli", value(name = "lbs", alias = "pounds"))]
    Pounds,
    #[serde(rename = "cups", alias = "tazas")]
    #[cfg_attr(feature = "cli", value(name = "cups", alias = "tazas"))]
    Cups,
}

impl FeedingUnit {
    pub const ALL: [FeedingUnit; 3] = [Self::Kilograms, Self::Pounds, Self::Cups];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Kilograms => "kg",
            Self::Pounds => "lbs",
            Self::Cups => "cups",
        }
    }

    /// 未知的標籤一律視為公斤
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "lbs" | "pounds" => Self::Pounds,
            "cups" | "tazas" => Self::Cups,
            _ => Self::Kilograms,
        }
    }
}

impl fmt::Display for FeedingUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Feeding guidance computed for one pet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetGuidance {
    pub id: String,
    pub name: String,
    pub breed: String,
    pub age: String,
    pub weight: String,
    pub unit: FeedingUnit,
    pub daily_amount: String,
    pub schedule: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct GuidanceReport {
    pub guidance: Vec<PetGuidance>,
    pub csv_output: String,
    pub json_output: String,
    pub text_output: String,
}
