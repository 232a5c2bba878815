use anyhow::Result;

use super::super::Container;

pub struct StatusController<'a> {
    container: &'a Container,
}

impl<'a> StatusController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn status(&self) -> Result<String> {
        Ok(self.format_status())
    }

    fn format_status(&self) -> String {
        let credential = self.container.credential();

        format!(
            "{}\n\nAPI Key:      {}\nModel:        {}\nBase URL:     {}\nSecrets File: {}",
            self.container.banner().message(),
            credential.source(),
            self.container.model_name(),
            self.container.base_url(),
            self.container.secrets_file().display()
        )
    }
}
