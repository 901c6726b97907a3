use crate::utils::error::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum AppointmentKind {
    Vacuna,
    Consulta,
    Cirugia,
    Revision,
    Emergencia,
    Recordatorio,
}

impl AppointmentKind {
    /// 未知類型視為一般諮詢
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "vacuna" => Self::Vacuna,
            "cirugia" => Self::Cirugia,
            "revision" => Self::Revision,
            "emergencia" => Self::Emergencia,
            "recordatorio" => Self::Recordatorio,
            _ => Self::Consulta,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Vacuna => "vacuna",
            Self::Consulta => "consulta",
            Self::Cirugia => "cirugia",
            Self::Revision => "revision",
            Self::Emergencia => "emergencia",
            Self::Recordatorio => "recordatorio",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Vacuna => "#4CAF50",
            Self::Consulta => "#2196F3",
            Self::Cirugia => "#F44336",
            Self::Revision => "#FF9800",
            Self::Emergencia => "#E91E63",
            Self::Recordatorio => "#9C27B0",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Vacuna => "💉",
            Self::Consulta => "🩺",
            Self::Cirugia => "⚕️",
            Self::Revision => "🔍",
            Self::Emergencia => "🚨",
            Self::Recordatorio => "⏰",
        }
    }
}

impl From<String> for AppointmentKind {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl fmt::Display for AppointmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A vet appointment or a plain reminder; reminders usually carry no time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: AppointmentKind,
    pub pet_name: String,
    #[serde(default)]
    pub description: String,
}

pub fn load_appointments<P: AsRef<Path>>(path: P) -> Result<Vec<Appointment>> {
    let content = std::fs::read_to_string(path)?;
    let appointments = serde_json::from_str(&content)?;
    Ok(appointments)
}

pub fn appointments_for_date(appointments: &[Appointment], date: NaiveDate) -> Vec<&Appointment> {
    appointments.iter().filter(|a| a.date == date).collect()
}

/// 依日期排序 (同日保持原順序)
pub fn sorted_by_date(appointments: &[Appointment]) -> Vec<&Appointment> {
    let mut sorted: Vec<&Appointment> = appointments.iter().collect();
    sorted.sort_by_key(|a| a.date);
    sorted
}
