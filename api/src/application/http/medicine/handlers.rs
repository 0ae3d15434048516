pub mod verify_medicine;
pub mod verify_medicine_by_name;
