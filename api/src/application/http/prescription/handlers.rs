pub mod clear_prescription;
pub mod get_prescription;
pub mod scan_prescription;
