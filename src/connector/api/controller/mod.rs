pub mod consult_controller;
pub mod status_controller;

pub use consult_controller::ConsultController;
pub use status_controller::StatusController;
