mod patient_tests;
pub(crate) mod test_utils;
