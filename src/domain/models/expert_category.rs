use serde::{Deserialize, Serialize};

pub const CAREER_LABEL: &str = "キャリアの専門家";
pub const WORK_LIFE_BALANCE_LABEL: &str = "ワークライフバランスの専門家";

/// The consultation domain chosen by the user.
///
/// Only [`ExpertCategory::Career`] and [`ExpertCategory::WorkLifeBalance`] are
/// offered by the form. Any other submitted value is kept as
/// [`ExpertCategory::Other`] so instruction selection stays total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExpertCategory {
    #[default]
    Career,
    WorkLifeBalance,
    Other(String),
}

impl ExpertCategory {
    /// The categories offered by the form, in display order.
    pub const OPTIONS: [ExpertCategory; 2] =
        [ExpertCategory::Career, ExpertCategory::WorkLifeBalance];

    pub fn from_label(label: &str) -> Self {
        match label {
            CAREER_LABEL => ExpertCategory::Career,
            WORK_LIFE_BALANCE_LABEL => ExpertCategory::WorkLifeBalance,
            other => ExpertCategory::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ExpertCategory::Career => CAREER_LABEL,
            ExpertCategory::WorkLifeBalance => WORK_LIFE_BALANCE_LABEL,
            ExpertCategory::Other(label) => label,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, ExpertCategory::Other(_))
    }
}

impl From<String> for ExpertCategory {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<ExpertCategory> for String {
    fn from(category: ExpertCategory) -> Self {
        category.label().to_string()
    }
}

impl std::fmt::Display for ExpertCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
