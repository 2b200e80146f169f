use serde::{Deserialize, Serialize};

/// Body of `POST /api/closer`.
///
/// Every field is optional on the wire so a missing `input` surfaces as our own
/// bad-request reply instead of an extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct CompletionRequest {
    pub input: Option<String>,
    pub tone: Option<String>,
    pub goal: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CompletionResponse {
    pub output: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    #[default]
    Friendly,
    Urgent,
    Luxury,
    Casual,
}

impl Tone {
    pub fn from_selector(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "friendly" => Some(Tone::Friendly),
            "urgent" => Some(Tone::Urgent),
            "luxury" => Some(Tone::Luxury),
            "casual" => Some(Tone::Casual),
            _ => None,
        }
    }

    /// How the tone is phrased inside the prompt.
    pub fn describe(&self) -> &'static str {
        match self {
            Tone::Friendly => "friendly and warm",
            Tone::Urgent => "urgent and direct",
            Tone::Luxury => "premium and exclusive, like a luxury brand",
            Tone::Casual => "casual and relaxed, like texting a friend",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    #[default]
    BookCall,
    CloseSale,
    HandleObjection,
}

impl Goal {
    pub fn from_selector(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "book_call" => Some(Goal::BookCall),
            "close_sale" => Some(Goal::CloseSale),
            "handle_objection" => Some(Goal::HandleObjection),
            _ => None,
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Goal::BookCall => "get the prospect to book a call",
            Goal::CloseSale => "close the sale in this reply",
            Goal::HandleObjection => "handle the prospect's objection and move them toward buying",
        }
    }
}

/// Resolves an optional selector, falling back to the default for absent or
/// unrecognised values.
pub fn resolve_selector<T: Default>(raw: Option<&str>, parse: fn(&str) -> Option<T>, field: &str) -> T {
    match raw {
        None => T::default(),
        Some(value) if value.trim().is_empty() => T::default(),
        Some(value) => parse(value).unwrap_or_else(|| {
            tracing::warn!("Unknown {} selector {:?}, using default", field, value);
            T::default()
        }),
    }
}
