mod conversation;
mod credential;
mod expert_category;
mod submission;
mod view_state;

pub use conversation::*;
pub use credential::*;
pub use expert_category::*;
pub use submission::*;
pub use view_state::*;
