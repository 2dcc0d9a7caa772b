use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Academic record attached to student accounts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StudentProfile {
    /// CEFR level label (A1..C2) or the free-form level registered by staff.
    #[serde(rename = "nivel_estudio")]
    pub study_level: String,
    #[serde(rename = "fecha_nacimiento")]
    pub birth_date: NaiveDate,
    #[serde(rename = "genero")]
    pub gender: String,
    #[serde(rename = "estado_civil")]
    pub marital_status: String,
    #[serde(rename = "parroquia", default)]
    pub parish: String,
    #[serde(rename = "origen_ingresos", default)]
    pub income_source: String,
}

/// Employment record attached to teacher accounts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeacherProfile {
    // The API spells this field "especialization".
    #[serde(rename = "especialization")]
    pub specialization: String,
    pub hire_date: NaiveDate,
}

/// Role-dependent profile returned next to the account (`perfil`).
///
/// Administrative accounts carry no profile, so this is always wrapped in an
/// `Option` by its holders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum UserProfile {
    Student(StudentProfile),
    Teacher(TeacherProfile),
}
