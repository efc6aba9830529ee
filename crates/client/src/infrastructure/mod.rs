pub mod message_translator;
pub mod messaging;
pub mod platform;
pub mod websocket;
