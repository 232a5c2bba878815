use clap::{Subcommand, ValueEnum};

use crate::domain::ExpertCategory;

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the consultation form over HTTP
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:8501")]
        bind: String,
    },

    /// Ask a single question from the terminal
    Ask {
        text: String,

        #[arg(short, long, value_enum, default_value_t = ExpertArg::Career)]
        expert: ExpertArg,
    },

    /// Show whether the API key is configured
    Status,
}

/// Command-line spelling of the two offered experts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExpertArg {
    Career,
    WorkLifeBalance,
}

impl From<ExpertArg> for ExpertCategory {
    fn from(arg: ExpertArg) -> Self {
        match arg {
            ExpertArg::Career => ExpertCategory::Career,
            ExpertArg::WorkLifeBalance => ExpertCategory::WorkLifeBalance,
        }
    }
}
