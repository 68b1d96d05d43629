//! Patient Intake
//!
//! Two-step registration wizard. Step state lives only in memory; the
//! patient is created in a single call once both steps are filled in.

use chrono::NaiveDate;

use crate::client::{ApiClient, Transport};
use crate::form::{FormError, SubmitError};
use crate::model::{BloodType, NewPatient, Patient, DEFAULT_CLINIC_ID};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntakeStep {
    #[default]
    Personal,
    Health,
}

impl IntakeStep {
    pub fn number(&self) -> u8 {
        match self {
            IntakeStep::Personal => 1,
            IntakeStep::Health => 2,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            IntakeStep::Personal => "Kişisel Bilgiler",
            IntakeStep::Health => "Sağlık Bilgileri",
        }
    }
}

/// Raw form values, as typed
#[derive(Debug, Clone, PartialEq)]
pub struct PatientDraft {
    pub name: String,
    pub phone: String,
    pub email: String,
    /// `<input type="date">` value, empty when not given
    pub date_of_birth: String,
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

impl Default for PatientDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            phone: String::new(),
            email: String::new(),
            date_of_birth: String::new(),
            blood_type: BloodType::Unknown,
            allergies: String::new(),
            chronic_diseases: String::new(),
            current_medications: String::new(),
            emergency_contact_name: String::new(),
            emergency_contact_phone: String::new(),
            notes: String::new(),
            sms_consent: true,
            clinic: DEFAULT_CLINIC_ID,
        }
    }
}

impl PatientDraft {
    fn check_personal(&self) -> Result<(), FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::Required("Ad Soyad"));
        }
        if self.phone.trim().is_empty() {
            return Err(FormError::Required("Telefon"));
        }
        Ok(())
    }

    /// Request body for `POST /patients/`
    pub fn to_request(&self) -> Result<NewPatient, FormError> {
        self.check_personal()?;

        let dob = self.date_of_birth.trim();
        let date_of_birth = if dob.is_empty() {
            None
        } else {
            Some(NaiveDate::parse_from_str(dob, "%Y-%m-%d").map_err(|_| FormError::InvalidDate(dob.to_string()))?)
        };

        Ok(NewPatient {
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
            date_of_birth,
            blood_type: self.blood_type,
            allergies: self.allergies.clone(),
            chronic_diseases: self.chronic_diseases.clone(),
            current_medications: self.current_medications.clone(),
            emergency_contact_name: self.emergency_contact_name.clone(),
            emergency_contact_phone: self.emergency_contact_phone.clone(),
            notes: self.notes.clone(),
            sms_consent: self.sms_consent,
            clinic: self.clinic,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntakeWizard {
    pub step: IntakeStep,
    pub draft: PatientDraft,
}

impl IntakeWizard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move to the health step once the personal fields are valid
    pub fn advance(&mut self) -> Result<(), FormError> {
        if self.step == IntakeStep::Personal {
            self.draft.check_personal()?;
            self.step = IntakeStep::Health;
        }
        Ok(())
    }

    pub fn back(&mut self) {
        self.step = IntakeStep::Personal;
    }

    pub fn is_last_step(&self) -> bool {
        self.step == IntakeStep::Health
    }

    /// Request for the union of both steps; only valid on the last step
    pub fn to_request(&self) -> Result<NewPatient, FormError> {
        if !self.is_last_step() {
            return Err(FormError::IncompleteSteps);
        }
        self.draft.to_request()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

pub async fn submit_patient<T: Transport>(client: &ApiClient<T>, wizard: &IntakeWizard) -> Result<Patient, SubmitError> {
    let request = wizard.to_request()?;
    Ok(client.create_patient(&request).await?)
}
