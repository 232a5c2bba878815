mod chat_client;
mod secret_store;

pub use chat_client::*;
pub use secret_store::*;
