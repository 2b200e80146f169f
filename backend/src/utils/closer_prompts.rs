use crate::models::closer_models::{Goal, Tone};

/// System message sent with every completion request.
pub const CLOSER_SYSTEM_PROMPT: &str = "You are a world-class DM sales closer for high-ticket digital products and services. \
You write short, human replies that turn conversations into booked calls and paid customers.";

/// Builds the user message for the closer model.
///
/// The conversation is embedded verbatim; only the selectors are rephrased.
pub fn build_closer_prompt(conversation: &str, tone: Tone, goal: Goal) -> String {
    format!(
        "Here is the DM conversation so far:\n\
         \"\"\"\n{}\n\"\"\"\n\n\
         Write the next message I should send to close the deal.\n\
         Tone: {}.\n\
         Goal: {}.\n\n\
         Make it persuasive, concise and psychologically sharp. Use urgency, social proof and one clear call to action. \
         It must sound natural and human, tailored to the conversation, and stay under 120 words. \
         Reply with the message only, no preamble.",
        conversation,
        tone.describe(),
        goal.describe(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_conversation_verbatim() {
        let convo = "Them: sounds cool but $500 is steep\n  Me: totally get it";
        let prompt = build_closer_prompt(convo, Tone::default(), Goal::default());
        assert!(prompt.contains(convo));
    }

    #[test]
    fn mentions_selected_tone_and_goal() {
        let prompt = build_closer_prompt("hi", Tone::Luxury, Goal::HandleObjection);
        assert!(prompt.contains(Tone::Luxury.describe()));
        assert!(prompt.contains(Goal::HandleObjection.describe()));
        assert!(!prompt.contains(Tone::Friendly.describe()));
    }
}
