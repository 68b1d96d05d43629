//! Report downloads
//!
//! Document generation is not wired to a server endpoint yet; both report
//! actions produce a notice describing what the document will contain.

use crate::model::Dentist;

/// Notice for the per-dentist PDF report
pub fn dentist_pdf_notice(dentist: &Dentist) -> String {
    format!(
        "PDF raporu: Dr. {}\n\n- Aylık hasta grafiği\n- Hastadan elde edilen kazanç\n- Randevu yoğunluğu\n- Toplam sayı dökümü\n\n(Backend entegrasyonu gerekli)",
        dentist.name
    )
}

/// Notice for the patient list spreadsheet
pub const PATIENTS_EXCEL_NOTICE: &str = "Hasta listesi Excel dosyası indirilecek.\n\n(Backend entegrasyonu gerekli)";

/// `1. Dr. Mehmet Öz` rows of the dentist report list
pub fn roster_rows(dentists: &[Dentist]) -> Vec<String> {
    dentists
        .iter()
        .enumerate()
        .map(|(index, dentist)| format!("{}. Dr. {}", index + 1, dentist.name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dentist(name: &str) -> Dentist {
        Dentist {
            id: 1,
            name: name.to_string(),
            specialty: String::new(),
            phone: String::new(),
            email: String::new(),
            is_active: true,
            clinic: None,
        }
    }

    #[test]
    fn test_pdf_notice_names_dentist() {
        let notice = dentist_pdf_notice(&dentist("Mehmet Öz"));
        assert!(notice.starts_with("PDF raporu: Dr. Mehmet Öz"));
        assert!(notice.contains("Backend entegrasyonu gerekli"));
    }

    #[test]
    fn test_roster_rows_are_numbered() {
        let rows = roster_rows(&[dentist("A"), dentist("B")]);
        assert_eq!(rows, vec!["1. Dr. A", "2. Dr. B"]);
    }
}
