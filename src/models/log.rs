use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Default for the six 1-5 severity levels ("no symptom" end of the scale).
pub const DEFAULT_SEVERITY_LEVEL: i32 = 5;
/// Default for the 0-200 condition scores (neutral midpoint).
pub const DEFAULT_CONDITION_SCORE: i32 = 100;

pub const SEVERITY_RANGE: std::ops::RangeInclusive<i32> = 1..=5;
pub const CONDITION_RANGE: std::ops::RangeInclusive<i32> = 0..=200;

/// One day's symptom log. At most one record exists per `recorded_date`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogRecord {
    pub id: i64,
    pub recorded_date: NaiveDate,
    pub memo: Option<String>,

    pub headache_level: i32,
    pub seizure_level: i32,
    pub right_side_level: i32,
    pub left_side_level: i32,
    pub speech_impairment_level: i32,
    pub memory_impairment_level: i32,

    pub physical_condition: i32,
    pub mental_condition: i32,

    pub blood_pressure_systolic: Option<i32>,
    pub blood_pressure_diastolic: Option<i32>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial log fields for [`LogStore::upsert_by_date`]. `None` means "not
/// provided": on update the prior value is kept, on create the documented
/// default is used.
///
/// [`LogStore::upsert_by_date`]: crate::store::LogStore::upsert_by_date
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertLogRequest {
    pub memo: Option<String>,

    pub headache_level: Option<i32>,
    pub seizure_level: Option<i32>,
    pub right_side_level: Option<i32>,
    pub left_side_level: Option<i32>,
    pub speech_impairment_level: Option<i32>,
    pub memory_impairment_level: Option<i32>,

    pub physical_condition: Option<i32>,
    pub mental_condition: Option<i32>,

    pub blood_pressure_systolic: Option<i32>,
    pub blood_pressure_diastolic: Option<i32>,
}

impl UpsertLogRequest {
    /// Range checks for the bounded fields. Blood pressure is deliberately
    /// unchecked (nullable, no documented range).
    pub(crate) fn validate(&self) -> Result<(), String> {
        let levels = [
            ("headacheLevel", self.headache_level),
            ("seizureLevel", self.seizure_level),
            ("rightSideLevel", self.right_side_level),
            ("leftSideLevel", self.left_side_level),
            ("speechImpairmentLevel", self.speech_impairment_level),
            ("memoryImpairmentLevel", self.memory_impairment_level),
        ];
        for (name, value) in levels {
            if let Some(v) = value {
                if !SEVERITY_RANGE.contains(&v) {
                    return Err(format!(
                        "{name} must be between {} and {}",
                        SEVERITY_RANGE.start(),
                        SEVERITY_RANGE.end()
                    ));
                }
            }
        }

        let conditions = [
            ("physicalCondition", self.physical_condition),
            ("mentalCondition", self.mental_condition),
        ];
        for (name, value) in conditions {
            if let Some(v) = value {
                if !CONDITION_RANGE.contains(&v) {
                    return Err(format!(
                        "{name} must be between {} and {}",
                        CONDITION_RANGE.start(),
                        CONDITION_RANGE.end()
                    ));
                }
            }
        }

        Ok(())
    }

    /// Build a full record from this request, backfilling every omitted field
    /// with its default.
    pub(crate) fn into_record(self, id: i64, recorded_date: NaiveDate, now: DateTime<Utc>) -> LogRecord {
        LogRecord {
            id,
            recorded_date,
            memo: self.memo,

            headache_level: self.headache_level.unwrap_or(DEFAULT_SEVERITY_LEVEL),
            seizure_level: self.seizure_level.unwrap_or(DEFAULT_SEVERITY_LEVEL),
            right_side_level: self.right_side_level.unwrap_or(DEFAULT_SEVERITY_LEVEL),
            left_side_level: self.left_side_level.unwrap_or(DEFAULT_SEVERITY_LEVEL),
            speech_impairment_level: self
                .speech_impairment_level
                .unwrap_or(DEFAULT_SEVERITY_LEVEL),
            memory_impairment_level: self
                .memory_impairment_level
                .unwrap_or(DEFAULT_SEVERITY_LEVEL),

            physical_condition: self.physical_condition.unwrap_or(DEFAULT_CONDITION_SCORE),
            mental_condition: self.mental_condition.unwrap_or(DEFAULT_CONDITION_SCORE),

            blood_pressure_systolic: self.blood_pressure_systolic,
            blood_pressure_diastolic: self.blood_pressure_diastolic,

            created_at: now,
            updated_at: now,
        }
    }

    /// Shallow-merge into an existing record: provided fields overwrite,
    /// absent fields keep their prior values. `id`, `recorded_date` and
    /// `created_at` are never touched.
    pub(crate) fn merge_into(self, current: &mut LogRecord, now: DateTime<Utc>) {
        if let Some(memo) = self.memo {
            current.memo = Some(memo);
        }

        if let Some(v) = self.headache_level {
            current.headache_level = v;
        }
        if let Some(v) = self.seizure_level {
            current.seizure_level = v;
        }
        if let Some(v) = self.right_side_level {
            current.right_side_level = v;
        }
        if let Some(v) = self.left_side_level {
            current.left_side_level = v;
        }
        if let Some(v) = self.speech_impairment_level {
            current.speech_impairment_level = v;
        }
        if let Some(v) = self.memory_impairment_level {
            current.memory_impairment_level = v;
        }

        if let Some(v) = self.physical_condition {
            current.physical_condition = v;
        }
        if let Some(v) = self.mental_condition {
            current.mental_condition = v;
        }

        if let Some(v) = self.blood_pressure_systolic {
            current.blood_pressure_systolic = Some(v);
        }
        if let Some(v) = self.blood_pressure_diastolic {
            current.blood_pressure_diastolic = Some(v);
        }

        current.updated_at = now;
    }
}

/// Input for [`LogStore::append`], the id-keyed variant that allows several
/// entries on the same date.
///
/// [`LogStore::append`]: crate::store::LogStore::append
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLogRecord {
    pub recorded_date: NaiveDate,
    #[serde(flatten)]
    pub fields: UpsertLogRequest,
}
