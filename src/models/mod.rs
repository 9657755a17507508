pub mod log;
pub mod medication;

pub use log::{LogRecord, NewLogRecord, UpsertLogRequest};
pub use medication::{
    DosageUnit, MedicationName, MedicationRecord, MedicationTiming, NewMedication,
    UpdateMedicationRequest,
};
