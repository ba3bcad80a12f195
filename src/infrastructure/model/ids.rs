//! Supported model identifiers and the fallback chain

/// One of the supported Gemini models
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelId {
    Gemini25Flash,
    Gemini3FlashPreview,
    Gemini3ProPreview,
}

/// Every supported model, for validation and listings
pub const SUPPORTED_MODELS: &[ModelId] = &[
    ModelId::Gemini25Flash,
    ModelId::Gemini3FlashPreview,
    ModelId::Gemini3ProPreview,
];

/// Model used when no valid preference is persisted
pub const DEFAULT_MODEL: ModelId = ModelId::Gemini25Flash;

/// Default preference chain, tried in order after the user's preferred model.
/// Must cover the supported set; `ids` tests keep the two in sync.
pub const FALLBACK_ORDER: &[ModelId] = &[
    ModelId::Gemini3FlashPreview,
    ModelId::Gemini3ProPreview,
    ModelId::Gemini25Flash,
];

impl ModelId {
    pub fn as_str(self) -> &'static str {
        match self {
            ModelId::Gemini25Flash => "gemini-2.5-flash",
            ModelId::Gemini3FlashPreview => "gemini-3-flash-preview",
            ModelId::Gemini3ProPreview => "gemini-3-pro-preview",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "gemini-2.5-flash" => Some(ModelId::Gemini25Flash),
            "gemini-3-flash-preview" => Some(ModelId::Gemini3FlashPreview),
            "gemini-3-pro-preview" => Some(ModelId::Gemini3ProPreview),
            _ => None,
        }
    }
}

/// Models to try for one logical operation: the preferred model first, then
/// the fallback order, keeping the first occurrence of each identifier.
pub fn candidate_chain(preferred: ModelId) -> Vec<ModelId> {
    let mut chain = Vec::with_capacity(FALLBACK_ORDER.len() + 1);
    chain.push(preferred);
    for &model in FALLBACK_ORDER {
        if !chain.contains(&model) {
            chain.push(model);
        }
    }
    chain
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_supported_set() {
        for &model in SUPPORTED_MODELS {
            assert_eq!(ModelId::parse(model.as_str()), Some(model));
        }
        assert_eq!(ModelId::parse("gpt-4"), None);
    }

    #[test]
    fn fallback_order_covers_supported_set() {
        assert_eq!(FALLBACK_ORDER.len(), SUPPORTED_MODELS.len());
        for &model in SUPPORTED_MODELS {
            assert!(FALLBACK_ORDER.contains(&model));
        }
    }

    #[test]
    fn chain_starts_with_preference_and_has_no_duplicates() {
        for &preferred in SUPPORTED_MODELS {
            let chain = candidate_chain(preferred);
            assert_eq!(chain[0], preferred);
            assert_eq!(chain.len(), SUPPORTED_MODELS.len());
            for (i, a) in chain.iter().enumerate() {
                assert!(!chain[i + 1..].contains(a));
            }
        }
    }

    #[test]
    fn chain_dedupes_preferred_out_of_fallback_order() {
        let chain = candidate_chain(ModelId::Gemini25Flash);
        assert_eq!(
            chain,
            vec![
                ModelId::Gemini25Flash,
                ModelId::Gemini3FlashPreview,
                ModelId::Gemini3ProPreview,
            ]
        );
    }
}
