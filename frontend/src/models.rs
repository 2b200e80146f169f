use serde::{Deserialize, Serialize};

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
    pub const ALL: [Tone; 4] = [Tone::Friendly, Tone::Urgent, Tone::Luxury, Tone::Casual];

    pub fn value(&self) -> &'static str {
        match self {
            Tone::Friendly => "friendly",
            Tone::Urgent => "urgent",
            Tone::Luxury => "luxury",
            Tone::Casual => "casual",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tone::Friendly => "Friendly",
            Tone::Urgent => "Urgent",
            Tone::Luxury => "Luxury",
            Tone::Casual => "Casual",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tone| tone.value() == value)
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
    pub const ALL: [Goal; 3] = [Goal::BookCall, Goal::CloseSale, Goal::HandleObjection];

    pub fn value(&self) -> &'static str {
        match self {
            Goal::BookCall => "book_call",
            Goal::CloseSale => "close_sale",
            Goal::HandleObjection => "handle_objection",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Goal::BookCall => "Book a Call",
            Goal::CloseSale => "Close Sale",
            Goal::HandleObjection => "Handle Objection",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|goal| goal.value() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub input: String,
    pub tone: Tone,
    pub goal: Goal,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CompletionResponse {
    pub output: String,
}
