use anyhow::{bail, Result};

use crate::Commands;

use super::container::Container;
use super::controller::{ConsultController, StatusController};

pub struct Router<'a> {
    consult_controller: ConsultController<'a>,
    status_controller: StatusController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            consult_controller: ConsultController::new(container),
            status_controller: StatusController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Ask { text, expert } => self.consult_controller.ask(expert.into(), text).await,
            Commands::Status => self.status_controller.status().await,
            Commands::Serve { .. } => bail!("the serve command is handled by the web server"),
        }
    }
}
