pub mod alert;
pub mod appointment;
pub mod assessment;
pub mod conversation;
pub mod health;
pub mod note;
pub mod risk;
pub mod sample;
pub mod signal;
pub mod snapshot;
pub mod treatment;
