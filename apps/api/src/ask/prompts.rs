// Relay prompt templates.

use crate::llm_client::{CompletionRequest, PromptMessage, MODEL, TEMPERATURE};

pub const ASK_SYSTEM: &str = "You answer questions only based on the given CV knowledge.";

/// Builds the fixed three-message prompt: system instruction, the knowledge
/// blob, then the visitor's question.
pub fn build_ask_messages(knowledge: &str, question: &str) -> Vec<PromptMessage> {
    vec![
        PromptMessage::system(ASK_SYSTEM),
        PromptMessage::user(format!("CV Knowledge:\n{knowledge}")),
        PromptMessage::user(format!("Question: {question}")),
    ]
}

pub fn build_ask_request(knowledge: &str, question: &str) -> CompletionRequest {
    CompletionRequest {
        model: MODEL.to_string(),
        messages: build_ask_messages(knowledge, question),
        temperature: TEMPERATURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::Role;

    #[test]
    fn test_three_messages_in_order() {
        let messages = build_ask_messages("Name: Panos", "Where does he work?");
        let roles: Vec<Role> = messages.iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::System, Role::User, Role::User]);
        assert_eq!(messages[0].content, ASK_SYSTEM);
        assert_eq!(messages[1].content, "CV Knowledge:\nName: Panos");
        assert_eq!(messages[2].content, "Question: Where does he work?");
    }

    #[test]
    fn test_empty_inputs_still_produce_full_prompt() {
        let messages = build_ask_messages("", "");
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].content, "CV Knowledge:\n");
        assert_eq!(messages[2].content, "Question: ");
    }

    #[test]
    fn test_request_uses_fixed_model_and_low_temperature() {
        let request = build_ask_request("k", "q");
        assert_eq!(request.model, MODEL);
        assert!(request.temperature <= 0.2);
    }
}
