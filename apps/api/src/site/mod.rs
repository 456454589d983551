// Presentation surface: static CV content, accordion state, page
// rendering and the chat widget model.

pub mod chat;
pub mod content;
pub mod handlers;
pub mod render;
pub mod sections;
