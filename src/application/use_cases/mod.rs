mod generate_response;
mod submit_consultation;

pub use generate_response::*;
pub use submit_consultation::*;
