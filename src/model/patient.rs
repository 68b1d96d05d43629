use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::form::FormError;

/// Blood group as stored by the clinic API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BloodType {
    #[serde(rename = "A+")]
    APositive,
    #[serde(rename = "A-")]
    ANegative,
    #[serde(rename = "B+")]
    BPositive,
    #[serde(rename = "B-")]
    BNegative,
    #[serde(rename = "AB+")]
    AbPositive,
    #[serde(rename = "AB-")]
    AbNegative,
    #[serde(rename = "0+")]
    ZeroPositive,
    #[serde(rename = "0-")]
    ZeroNegative,
    #[default]
    #[serde(rename = "unknown", other)]
    Unknown,
}

impl BloodType {
    pub const ALL: [BloodType; 9] = [
        BloodType::APositive,
        BloodType::ANegative,
        BloodType::BPositive,
        BloodType::BNegative,
        BloodType::AbPositive,
        BloodType::AbNegative,
        BloodType::ZeroPositive,
        BloodType::ZeroNegative,
        BloodType::Unknown,
    ];

    /// Wire value
    pub fn code(&self) -> &'static str {
        match self {
            BloodType::APositive => "A+",
            BloodType::ANegative => "A-",
            BloodType::BPositive => "B+",
            BloodType::BNegative => "B-",
            BloodType::AbPositive => "AB+",
            BloodType::AbNegative => "AB-",
            BloodType::ZeroPositive => "0+",
            BloodType::ZeroNegative => "0-",
            BloodType::Unknown => "unknown",
        }
    }

    /// Turkish display label
    pub fn label(&self) -> &'static str {
        match self {
            BloodType::APositive => "A Rh+",
            BloodType::ANegative => "A Rh-",
            BloodType::BPositive => "B Rh+",
            BloodType::BNegative => "B Rh-",
            BloodType::AbPositive => "AB Rh+",
            BloodType::AbNegative => "AB Rh-",
            BloodType::ZeroPositive => "0 Rh+",
            BloodType::ZeroNegative => "0 Rh-",
            BloodType::Unknown => "Bilinmiyor",
        }
    }

    /// Parse a wire value; anything unrecognized is `Unknown`
    pub fn from_code(code: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|bt| bt.code().eq_ignore_ascii_case(code.trim()))
            .unwrap_or(BloodType::Unknown)
    }
}

/// Strict parse for typed input: empty or `unknown` is `Unknown`, any
/// other unrecognized code is an error
impl FromStr for BloodType {
    type Err = FormError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        let code = code.trim();
        if code.is_empty() {
            return Ok(BloodType::Unknown);
        }
        Self::ALL
            .into_iter()
            .find(|bt| bt.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| FormError::InvalidBloodType(code.to_string()))
    }
}

/// Patient record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub blood_type: BloodType,
    #[serde(default)]
    pub allergies: String,
    #[serde(default)]
    pub chronic_diseases: String,
    #[serde(default)]
    pub current_medications: String,
    #[serde(default)]
    pub emergency_contact_name: String,
    #[serde(default)]
    pub emergency_contact_phone: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub sms_consent: bool,
    #[serde(default)]
    pub clinic: Option<u64>,
}

/// Body of `POST /patients/`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewPatient {
    pub name: String,
    pub phone: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    pub blood_type: BloodType,
    pub allergies: String,
    pub chronic_diseases: String,
    pub current_medications: String,
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,
    pub notes: String,
    pub sms_consent: bool,
    pub clinic: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blood_type_wire_values() {
        assert_eq!(serde_json::to_string(&BloodType::ZeroNegative).unwrap(), r#""0-""#);
        assert_eq!(serde_json::to_string(&BloodType::Unknown).unwrap(), r#""unknown""#);

        let parsed: BloodType = serde_json::from_str(r#""AB+""#).unwrap();
        assert_eq!(parsed, BloodType::AbPositive);

        let odd: BloodType = serde_json::from_str(r#""O+""#).unwrap();
        assert_eq!(odd, BloodType::Unknown);
    }

    #[test]
    fn test_blood_type_from_code() {
        assert_eq!(BloodType::from_code("ab-"), BloodType::AbNegative);
        assert_eq!(BloodType::from_code(""), BloodType::Unknown);
        assert_eq!(BloodType::from_code("A+").label(), "A Rh+");
    }

    #[test]
    fn test_blood_type_strict_parse() {
        assert_eq!("0+".parse::<BloodType>(), Ok(BloodType::ZeroPositive));
        assert_eq!("unknown".parse::<BloodType>(), Ok(BloodType::Unknown));
        assert_eq!("".parse::<BloodType>(), Ok(BloodType::Unknown));

        let err = "O+".parse::<BloodType>().unwrap_err();
        assert_eq!(err, FormError::InvalidBloodType("O+".to_string()));
        assert_eq!(BloodType::from_code("O+"), BloodType::Unknown);
    }

    #[test]
    fn test_patient_decodes_sparse_payload() {
        let patient: Patient = serde_json::from_str(
            r#"{"id": 9, "name": "Ahmet Yılmaz", "phone": "0532 123 4567", "date_of_birth": null}"#,
        )
        .unwrap();
        assert_eq!(patient.blood_type, BloodType::Unknown);
        assert!(patient.date_of_birth.is_none());
        assert!(patient.email.is_empty());
    }
}
