//! The oncology consistency rule: `oncological == true` if and only if
//! `cancer_type` is set.
//!
//! Partial updates are resolved here before the rule runs, so that flipping
//! one side of the invariant without the other can never slip through a
//! field-by-field validation.

use medbase_server_database::{CancerType, Patient, PatientPatch};

use crate::{error::MedbaseError, result::MResult};

/// Validate a fully resolved oncology pair.
pub(crate) fn check_consistency(
    oncological: bool,
    cancer_type: Option<CancerType>,
) -> MResult<()> {
    if oncological && cancer_type.is_none() {
        return Err(MedbaseError::InconsistentOncologyData(
            "cancer_type must be set when oncological is true.".to_owned(),
        ));
    }
    if !oncological && cancer_type.is_some() {
        return Err(MedbaseError::InconsistentOncologyData(
            "cancer_type must be null when oncological is false.".to_owned(),
        ));
    }
    Ok(())
}

/// Resolve a partial update against the stored record: explicit values
/// override, omitted fields retain the stored value. This is the single
/// point where the oncology invariant is checked for updates.
pub(crate) fn merge_patient(stored: Patient, patch: PatientPatch) -> MResult<Patient> {
    let merged = Patient {
        id: stored.id,
        name: patch.name.unwrap_or(stored.name),
        age: patch.age.unwrap_or(stored.age),
        birth_date: patch.birth_date.unwrap_or(stored.birth_date),
        oncological: patch.oncological.unwrap_or(stored.oncological),
        cancer_type: patch.cancer_type.unwrap_or(stored.cancer_type),
        // a partial update can never move a patient between hospitals
        hospital_id: stored.hospital_id,
    };
    check_consistency(merged.oncological, merged.cancer_type)?;
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use medbase_server_database::{CancerType, Patient, PatientPatch};

    use super::{check_consistency, merge_patient};
    use crate::error::MedbaseError;

    fn stored(oncological: bool, cancer_type: Option<CancerType>) -> Patient {
        Patient {
            id: 1,
            name: "John Doe".to_owned(),
            age: 30,
            birth_date: NaiveDate::from_ymd_opt(1993, 5, 20).unwrap(),
            oncological,
            cancer_type,
            hospital_id: None,
        }
    }

    #[test]
    fn test_consistent_pairs_pass() {
        check_consistency(false, None).unwrap();
        check_consistency(true, Some(CancerType::Lung)).unwrap();
    }

    #[test]
    fn test_inconsistent_pairs_fail_each_side() {
        let err = check_consistency(true, None).unwrap_err();
        assert!(matches!(err, MedbaseError::InconsistentOncologyData(_)));
        assert!(err.to_string().contains("must be set"));

        let err = check_consistency(false, Some(CancerType::Breast)).unwrap_err();
        assert!(matches!(err, MedbaseError::InconsistentOncologyData(_)));
        assert!(err.to_string().contains("must be null"));
    }

    #[test]
    fn test_merge_retains_omitted_fields() {
        let merged = merge_patient(
            stored(true, Some(CancerType::Skin)),
            PatientPatch {
                age: Some(31),
                ..PatientPatch::default()
            },
        )
        .unwrap();
        assert_eq!(merged.age, 31);
        assert_eq!(merged.name, "John Doe");
        assert_eq!(merged.cancer_type, Some(CancerType::Skin));
        assert!(merged.oncological);
    }

    #[test]
    fn test_merge_rejects_one_sided_oncological_flip() {
        // flipping the flag while the stored record still has a cancer type
        let err = merge_patient(
            stored(true, Some(CancerType::Colon)),
            PatientPatch {
                oncological: Some(false),
                ..PatientPatch::default()
            },
        )
        .unwrap_err();
        assert!(matches!(err, MedbaseError::InconsistentOncologyData(_)));
    }

    #[test]
    fn test_merge_rejects_one_sided_cancer_type_clear() {
        // clearing the cancer type while the stored record stays oncological
        let err = merge_patient(
            stored(true, Some(CancerType::Colon)),
            PatientPatch {
                cancer_type: Some(None),
                ..PatientPatch::default()
            },
        )
        .unwrap_err();
        assert!(matches!(err, MedbaseError::InconsistentOncologyData(_)));
    }

    #[test]
    fn test_merge_accepts_a_consistent_transition() {
        let merged = merge_patient(
            stored(false, None),
            PatientPatch {
                oncological: Some(true),
                cancer_type: Some(Some(CancerType::Prostate)),
                ..PatientPatch::default()
            },
        )
        .unwrap();
        assert!(merged.oncological);
        assert_eq!(merged.cancer_type, Some(CancerType::Prostate));
    }
}
