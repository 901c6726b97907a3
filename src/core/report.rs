use crate::domain::model::{FeedingUnit, GuidanceReport, PetGuidance, PetRecord};
use crate::domain::services::parse::parse_leading_number;
use crate::domain::services::{feeding_schedule, food_recommendation};
use crate::utils::error::{PawmiError, Result};
use std::fmt::Write;

pub const CSV_HEADER: [&str; 7] = [
    "id",
    "name",
    "breed",
    "age",
    "weight",
    "daily_amount",
    "schedule",
];

pub fn guidance_for(pet: &PetRecord, unit: FeedingUnit) -> PetGuidance {
    let schedule = feeding_schedule(&pet.breed, &pet.age);
    PetGuidance {
        id: pet.id.clone(),
        name: pet.name.clone(),
        breed: pet.breed.clone(),
        age: pet.age.clone(),
        weight: pet.weight.clone(),
        unit,
        daily_amount: food_recommendation(&pet.breed, &pet.weight, unit),
        schedule: schedule.iter().map(|t| t.to_string()).collect(),
    }
}

pub fn render_csv(guidance: &[PetGuidance]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;

    for pet in guidance {
        let schedule = pet.schedule.join(" ");
        writer.write_record([
            pet.id.as_str(),
            pet.name.as_str(),
            pet.breed.as_str(),
            pet.age.as_str(),
            pet.weight.as_str(),
            pet.daily_amount.as_str(),
            schedule.as_str(),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| PawmiError::ProcessingError {
        message: format!("Failed to flush CSV output: {}", e),
    })?;
    String::from_utf8(bytes).map_err(|e| PawmiError::ProcessingError {
        message: format!("CSV output is not valid UTF-8: {}", e),
    })
}

/// 以卡片形式呈現，每隻寵物一段
pub fn render_text(guidance: &[PetGuidance]) -> Result<String> {
    let mut out = String::from("Recomendaciones de comida\n");

    for pet in guidance {
        write_card(&mut out, pet).map_err(|e| PawmiError::ProcessingError {
            message: format!("Failed to render guidance card for {}: {}", pet.id, e),
        })?;
    }

    Ok(out)
}

fn write_card(out: &mut String, pet: &PetGuidance) -> std::fmt::Result {
    writeln!(out)?;
    writeln!(out, "{}", pet.name)?;
    writeln!(out, "Raza: {}", pet.breed)?;
    writeln!(out, "Edad: {}", pet.age)?;
    match parse_leading_number(&pet.weight) {
        Some(kg) => writeln!(out, "Peso: {} kg", kg)?,
        None => writeln!(out, "Peso: {}", pet.weight)?,
    }
    writeln!(out, "🍽 {} al día", pet.daily_amount)?;
    writeln!(out, "🕒 Horarios recomendados:")?;
    for time in &pet.schedule {
        writeln!(out, "• {}", time)?;
    }
    Ok(())
}

pub fn build_report(pets: &[PetRecord], unit: FeedingUnit) -> Result<GuidanceReport> {
    let guidance: Vec<PetGuidance> = pets.iter().map(|pet| guidance_for(pet, unit)).collect();

    Ok(GuidanceReport {
        csv_output: render_csv(&guidance)?,
        json_output: serde_json::to_string_pretty(&guidance)?,
        text_output: render_text(&guidance)?,
        guidance,
    })
}
