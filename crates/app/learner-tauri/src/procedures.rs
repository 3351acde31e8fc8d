pub mod capture_procedures;
pub mod hint_procedures;
pub mod window_procedures;
