use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use strum::{Display, EnumString};

/// The fixed set of cancer categories a patient record may carry.
///
/// Stored as text; the serde and string forms are identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum CancerType {
    Breast,
    Lung,
    Colon,
    Prostate,
    Skin,
}

/// A hospital row plus its derived patient count.
///
/// `current_patients` is never stored: every read resolves it through a
/// joined `COUNT` over the patients table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hospital {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub capacity: i64,
    pub current_patients: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HospitalCreate {
    pub name: String,
    #[serde(default)]
    pub address: String,
    pub capacity: i64,
}

/// Partial update of a hospital: an omitted field retains the stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HospitalPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub capacity: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub birth_date: NaiveDate,
    pub oncological: bool,
    pub cancer_type: Option<CancerType>,
    pub hospital_id: Option<i64>,
}

/// Patients are always created unassigned; a hospital reference is only ever
/// set through the assignment operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientCreate {
    pub name: String,
    pub age: i64,
    pub birth_date: NaiveDate,
    pub oncological: bool,
    #[serde(default)]
    pub cancer_type: Option<CancerType>,
}

/// Partial update of a patient.
///
/// `cancer_type` distinguishes "absent from the payload" (retain the stored
/// value) from an explicit `null` (clear it) so that the oncology invariant
/// can be checked on the merged record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatientPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<i64>,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub oncological: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_explicit")]
    pub cancer_type: Option<Option<CancerType>>,
}

/// Deserialize a field that was present in the payload, keeping an explicit
/// `null` distinct from the field being absent.
fn deserialize_explicit<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}
