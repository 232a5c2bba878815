//! Pure domain services.

mod prompt_selector;

pub use prompt_selector::*;
