use crate::domain::ExpertCategory;

pub const CAREER_INSTRUCTION: &str =
    "あなたはキャリア相談の専門家です。優しく、わかりやすく助言してください。";

pub const WORK_LIFE_BALANCE_INSTRUCTION: &str =
    "あなたはワークライフバランスの専門家です。生活リズムや働き方の観点でアドバイスしてください。";

/// Used for any category the form does not offer.
pub const FALLBACK_INSTRUCTION: &str = "あなたは丁寧に回答するアシスタントです。";

/// Maps an [`ExpertCategory`] to the fixed system instruction for that persona.
///
/// Pure and total: every category, including unrecognized labels, yields a
/// non-empty instruction.
pub fn select_instruction(category: &ExpertCategory) -> &'static str {
    match category {
        ExpertCategory::Career => CAREER_INSTRUCTION,
        ExpertCategory::WorkLifeBalance => WORK_LIFE_BALANCE_INSTRUCTION,
        ExpertCategory::Other(_) => FALLBACK_INSTRUCTION,
    }
}

/// Same as [`select_instruction`] for a raw form label.
pub fn select_instruction_for_label(label: &str) -> &'static str {
    select_instruction(&ExpertCategory::from_label(label))
}
