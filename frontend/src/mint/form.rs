//! Prescription form state.
//!
//! Seven text fields plus an optional attached document. Only the text fields
//! are serialized into the transaction; the document never leaves the browser.

use serde::Serialize;

use crate::types::AppResult;

/// Text inputs of the prescription form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    PatientAddress,
    MedicationName,
    Dosage,
    DosageUnit,
    NumPills,
    DateFilled,
    ExpirationTime,
}

impl FormField {
    /// All text fields, in display order.
    pub const ALL: [FormField; 7] = [
        FormField::PatientAddress,
        FormField::MedicationName,
        FormField::Dosage,
        FormField::DosageUnit,
        FormField::NumPills,
        FormField::DateFilled,
        FormField::ExpirationTime,
    ];

    /// HTML `name` attribute, also the JSON key in the serialized form.
    pub fn name(&self) -> &'static str {
        match self {
            FormField::PatientAddress => "patientAddress",
            FormField::MedicationName => "medicationName",
            FormField::Dosage => "dosage",
            FormField::DosageUnit => "dosageUnit",
            FormField::NumPills => "num_pills",
            FormField::DateFilled => "date_filled",
            FormField::ExpirationTime => "expiration_time",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::PatientAddress => "Patient Address",
            FormField::MedicationName => "Medication Name",
            FormField::Dosage => "Dosage",
            FormField::DosageUnit => "Dosage Unit",
            FormField::NumPills => "Qty Dispensed",
            FormField::DateFilled => "From",
            FormField::ExpirationTime => "To",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::NumPills => "Amount of Pills",
            FormField::DateFilled => "Date",
            FormField::ExpirationTime => "Expiration Time",
            other => other.label(),
        }
    }

    /// HTML input type.
    pub fn input_type(&self) -> &'static str {
        match self {
            FormField::Dosage | FormField::NumPills => "number",
            FormField::DateFilled | FormField::ExpirationTime => "date",
            _ => "text",
        }
    }
}

/// Metadata of the file picked in the document input.
#[derive(Clone, Debug, PartialEq)]
pub struct AttachedDocument {
    pub name: String,
    pub size: u64,
    pub mime_type: String,
}

/// Current values of the prescription form.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PrescriptionForm {
    #[serde(rename = "patientAddress")]
    pub patient_address: String,
    #[serde(rename = "medicationName")]
    pub medication_name: String,
    pub dosage: String,
    #[serde(rename = "dosageUnit")]
    pub dosage_unit: String,
    pub num_pills: String,
    pub date_filled: String,
    pub expiration_time: String,
    #[serde(skip)]
    pub prescription_file: Option<AttachedDocument>,
}

impl PrescriptionForm {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::PatientAddress => &self.patient_address,
            FormField::MedicationName => &self.medication_name,
            FormField::Dosage => &self.dosage,
            FormField::DosageUnit => &self.dosage_unit,
            FormField::NumPills => &self.num_pills,
            FormField::DateFilled => &self.date_filled,
            FormField::ExpirationTime => &self.expiration_time,
        }
    }

    /// Store `value` unmodified.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::PatientAddress => &mut self.patient_address,
            FormField::MedicationName => &mut self.medication_name,
            FormField::Dosage => &mut self.dosage,
            FormField::DosageUnit => &mut self.dosage_unit,
            FormField::NumPills => &mut self.num_pills,
            FormField::DateFilled => &mut self.date_filled,
            FormField::ExpirationTime => &mut self.expiration_time,
        };
        *slot = value.into();
    }

    /// Replace the attached document. `None` keeps the current one, like a
    /// cancelled file dialog.
    pub fn attach(&mut self, document: Option<AttachedDocument>) {
        if document.is_some() {
            self.prescription_file = document;
        }
    }

    /// Clear every field and drop the document.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Fields still left empty. The document counts as a field.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing: Vec<&'static str> = FormField::ALL
            .iter()
            .filter(|f| self.get(**f).trim().is_empty())
            .map(|f| f.name())
            .collect();
        if self.prescription_file.is_none() {
            missing.push("prescription_file");
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// JSON string embedded as the `prescriptionData` argument.
    pub fn to_prescription_data(&self) -> AppResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> PrescriptionForm {
        let mut form = PrescriptionForm::default();
        for (field, value) in FormField::ALL.iter().zip([
            "0x1f",
            "Amoxicillin",
            "500",
            "mg",
            "21",
            "2024-01-01",
            "2024-01-08",
        ]) {
            form.set(*field, value);
        }
        form.attach(Some(AttachedDocument {
            name: "rx.pdf".into(),
            size: 2048,
            mime_type: "application/pdf".into(),
        }));
        form
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut form = filled();
        assert!(form.is_complete());

        form.reset();

        for field in FormField::ALL {
            assert_eq!(form.get(field), "");
        }
        assert!(form.prescription_file.is_none());
    }

    #[test]
    fn test_values_are_stored_unmodified() {
        let mut form = PrescriptionForm::default();
        form.set(FormField::Dosage, "  0.25 ");
        assert_eq!(form.get(FormField::Dosage), "  0.25 ");
    }

    #[test]
    fn test_cancelled_file_dialog_keeps_document() {
        let mut form = filled();
        form.attach(None);
        assert_eq!(form.prescription_file.as_ref().map(|d| d.size), Some(2048));
    }

    #[test]
    fn test_missing_fields() {
        let mut form = PrescriptionForm::default();
        form.set(FormField::MedicationName, "Ibuprofen");
        let missing = form.missing_fields();
        assert_eq!(missing.len(), 7);
        assert!(!missing.contains(&"medicationName"));
        assert!(missing.contains(&"prescription_file"));
    }

    #[test]
    fn test_prescription_data_keys() {
        let json = filled().to_prescription_data().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let object = value.as_object().unwrap();

        let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        let mut expected: Vec<_> = FormField::ALL.iter().map(|f| f.name()).collect();
        expected.sort_unstable();

        assert_eq!(keys, expected);
        assert_eq!(object["num_pills"], "21");
        assert!(!json.contains("rx.pdf"));
    }
}
