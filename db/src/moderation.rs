//! Content moderation categories.
//!
//! Nothing in the bootstrap flow reads these; they classify flagged posts and
//! comments for the moderation screens.

use sea_orm::Iterable;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Why a piece of content was flagged.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Display, EnumString, Deserialize, Serialize,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "moderation_type")]
#[strum(ascii_case_insensitive)]
pub enum ModerationType {
    #[sea_orm(string_value = "political")]
    Political,

    #[sea_orm(string_value = "language")]
    Language,

    #[sea_orm(string_value = "drugs")]
    Drugs,

    #[sea_orm(string_value = "threatening")]
    Threatening,

    #[sea_orm(string_value = "sexual")]
    Sexual,

    #[sea_orm(string_value = "hate_speech")]
    HateSpeech,

    #[sea_orm(string_value = "shaming")]
    Shaming,
}

impl ModerationType {
    /// Human-readable label for moderation screens.
    pub fn label(&self) -> &'static str {
        match self {
            // Corrected from the misspelled "Politcal propaganda".
            ModerationType::Political => "Political propaganda",
            ModerationType::Language => "Offensive language",
            ModerationType::Drugs => "Drug references",
            ModerationType::Threatening => "Threatening speech",
            ModerationType::Sexual => "Sexual speech",
            ModerationType::HateSpeech => "Hate speech",
            ModerationType::Shaming => "Targeted shaming",
        }
    }

    /// Every category paired with its label, in declaration order.
    pub fn options() -> Vec<(ModerationType, &'static str)> {
        Self::iter().map(|t| (t, t.label())).collect()
    }
}
