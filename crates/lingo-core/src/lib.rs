pub mod language;
pub mod state;
pub mod types;
