use anyhow::{bail, Result};

use crate::connector::web::view::ANSWER_HEADING;
use crate::domain::{ExpertCategory, Submission, ViewState};

use super::super::Container;

pub struct ConsultController<'a> {
    container: &'a Container,
}

impl<'a> ConsultController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn ask(&self, expert: ExpertCategory, text: String) -> Result<String> {
        let submission = Submission::new(expert, text);
        let state = self.container.submit(&submission).await;
        self.format_state(state)
    }

    fn format_state(&self, state: ViewState) -> Result<String> {
        match state {
            ViewState::Answer { text } => Ok(format!("### {ANSWER_HEADING}\n\n{text}")),
            ViewState::ValidationWarning { message }
            | ViewState::ConfigurationError { message }
            | ViewState::Error { message } => bail!(message),
            ViewState::Idle => Ok(String::new()),
        }
    }
}
