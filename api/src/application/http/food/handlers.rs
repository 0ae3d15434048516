pub mod assess_food;
pub mod get_food;
pub mod list_foods;
pub mod scan_food;
