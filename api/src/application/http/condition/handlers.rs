pub mod get_condition;
pub mod list_conditions;
pub mod set_condition;
