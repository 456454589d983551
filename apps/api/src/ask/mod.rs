// Question-answering relay: POST /api/ask.
// Forwards {question, knowledge} to the completion service and relays the text back.
// Stateless; every call goes through llm_client::CompletionService.

pub mod handlers;
pub mod prompts;
