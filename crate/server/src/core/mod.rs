pub(crate) mod hospitals;
pub(crate) mod oncology;
pub(crate) mod patients;

mod medbase;
pub use medbase::Medbase;
