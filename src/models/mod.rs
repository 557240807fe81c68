pub mod chat;

pub use chat::{
    ChatMessage,
    ChatRequest,
    ChatResponse,
    CreateConversationRequest,
    CreateConversationResponse,
    GenerateRequest,
    GenerateResponse,
};
