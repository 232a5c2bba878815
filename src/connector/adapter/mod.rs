mod mock_chat_client;
mod openai_client;
mod toml_secret_store;

pub use mock_chat_client::*;
pub use openai_client::*;
pub use toml_secret_store::*;
