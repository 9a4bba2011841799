use shared::domain::AmphibianRecord;

/// What the presentation layer renders. Exactly one variant is active.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UiState {
    #[default]
    Loading,
    Success(Vec<AmphibianRecord>),
    Error,
}

impl UiState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn amphibians(&self) -> Option<&[AmphibianRecord]> {
        match self {
            Self::Success(amphibians) => Some(amphibians),
            Self::Loading | Self::Error => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Success(_) => "success",
            Self::Error => "error",
        }
    }
}
