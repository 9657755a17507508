use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MedicationName {
    Perampanel,
    Levetiracetam,
    Temozolomide,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DosageUnit {
    #[serde(rename = "mg")]
    Mg,
    #[serde(rename = "g")]
    G,
    #[serde(rename = "mL")]
    Ml,
    #[serde(rename = "tablet")]
    Tablet,
    #[serde(rename = "capsule")]
    Capsule,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MedicationTiming {
    BeforeBreakfast,
    AfterBreakfast,
    BeforeLunch,
    AfterLunch,
    BeforeDinner,
    AfterDinner,
    Bedtime,
    BetweenMeals,
}

/// One medication the user is (or was) taking. Independent of the daily log;
/// keyed by id only.
///
/// `start_at` / `end_at` are kept as the caller-supplied ISO strings (date or
/// full datetime), `end_at = None` meaning "still taking it".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationRecord {
    pub id: i64,
    pub medication_name: MedicationName,

    pub dosage_value: f64,
    pub dosage_unit: DosageUnit,

    pub timing: MedicationTiming,

    pub start_at: String,
    pub end_at: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for [`MedicationStore::add`]: everything but the system fields.
///
/// [`MedicationStore::add`]: crate::store::MedicationStore::add
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMedication {
    pub medication_name: MedicationName,
    pub dosage_value: f64,
    pub dosage_unit: DosageUnit,
    pub timing: MedicationTiming,
    pub start_at: String,
    pub end_at: Option<String>,
}

/// Partial fields for [`MedicationStore::update`]. Absent fields keep their
/// prior values.
///
/// [`MedicationStore::update`]: crate::store::MedicationStore::update
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMedicationRequest {
    pub medication_name: Option<MedicationName>,
    pub dosage_value: Option<f64>,
    pub dosage_unit: Option<DosageUnit>,
    pub timing: Option<MedicationTiming>,
    pub start_at: Option<String>,
    pub end_at: Option<String>,
}

impl UpdateMedicationRequest {
    pub(crate) fn merge_into(self, current: &mut MedicationRecord, now: DateTime<Utc>) {
        if let Some(v) = self.medication_name {
            current.medication_name = v;
        }
        if let Some(v) = self.dosage_value {
            current.dosage_value = v;
        }
        if let Some(v) = self.dosage_unit {
            current.dosage_unit = v;
        }
        if let Some(v) = self.timing {
            current.timing = v;
        }
        if let Some(v) = self.start_at {
            current.start_at = v;
        }
        if let Some(v) = self.end_at {
            current.end_at = Some(v);
        }

        current.updated_at = now;
    }
}
