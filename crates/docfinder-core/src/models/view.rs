use std::fmt::{Display, Formatter};

use serde::Serialize;

use super::doctor::DoctorRecord;

const SPECIALITY_ID_PREFIX: &str = "filter-specialty-";

/// Display projection of a record, one line per visible field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DoctorCard {
    pub name: String,
    pub speciality: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heads: Option<String>,
    pub experience: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clinic: Option<String>,
}

impl From<&DoctorRecord> for DoctorCard {
    fn from(doctor: &DoctorRecord) -> Self {
        Self {
            name: doctor.name.clone(),
            speciality: doctor.display_speciality().to_string(),
            heads: doctor
                .heads
                .as_deref()
                .filter(|heads| !heads.is_empty())
                .map(|heads| format!("Heads: {heads}")),
            experience: format!("{} yrs exp.", doctor.display_experience()),
            clinic: doctor
                .clinic
                .as_deref()
                .filter(|clinic| !clinic.is_empty())
                .map(|clinic| format!("\u{a9} {clinic}")),
        }
    }
}

impl Display for DoctorCard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "  {}", self.speciality)?;
        if let Some(heads) = &self.heads {
            writeln!(f, "  {heads}")?;
        }
        write!(f, "  {}", self.experience)?;
        if let Some(clinic) = &self.clinic {
            write!(f, "\n  {clinic}")?;
        }
        Ok(())
    }
}

/// A selectable specialty with an identifier stable across reloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecialityOption {
    pub id: String,
    pub label: String,
}

impl SpecialityOption {
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        Self {
            id: format!("{SPECIALITY_ID_PREFIX}{}", sanitize_label(label)),
            label: label.to_string(),
        }
    }
}

/// Replaces each whitespace run and each `/` with a single `-`.
#[must_use]
pub fn sanitize_label(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut in_whitespace = false;
    for ch in label.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                out.push('-');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;
        out.push(if ch == '/' { '-' } else { ch });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_collapses_whitespace_runs_and_replaces_slashes() {
        assert_eq!(sanitize_label("General Physician"), "General-Physician");
        assert_eq!(sanitize_label("Ear  Nose\tThroat"), "Ear-Nose-Throat");
        assert_eq!(sanitize_label("Gynaecologist/Obstetrician"), "Gynaecologist-Obstetrician");
        assert_eq!(sanitize_label("ENT / Surgeon"), "ENT---Surgeon");
    }

    #[test]
    fn option_id_is_prefixed_and_deterministic() {
        let first = SpecialityOption::from_label("Diabetologist / Endocrinologist");
        let second = SpecialityOption::from_label("Diabetologist / Endocrinologist");
        assert_eq!(first, second);
        assert_eq!(first.id, "filter-specialty-Diabetologist---Endocrinologist");
    }

    #[test]
    fn card_projects_optional_display_lines() {
        let mut doctor = DoctorRecord::named("Dr. A");
        doctor.experience = Some(12.0);
        doctor.heads = Some("Cardiology".to_string());
        doctor.clinic = Some("City Care".to_string());
        let card = DoctorCard::from(&doctor);
        assert_eq!(card.speciality, "General Physician");
        assert_eq!(card.heads.as_deref(), Some("Heads: Cardiology"));
        assert_eq!(card.experience, "12 yrs exp.");
        assert_eq!(card.clinic.as_deref(), Some("\u{a9} City Care"));
        assert_eq!(
            card.to_string(),
            "Dr. A\n  General Physician\n  Heads: Cardiology\n  12 yrs exp.\n  \u{a9} City Care"
        );
    }

    #[test]
    fn card_without_experience_shows_not_available() {
        let card = DoctorCard::from(&DoctorRecord::named("Dr. B"));
        assert_eq!(card.experience, "N/A yrs exp.");
        assert_eq!(card.heads, None);
        assert_eq!(card.to_string(), "Dr. B\n  General Physician\n  N/A yrs exp.");
    }
}
