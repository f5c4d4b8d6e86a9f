pub mod intents;
pub mod types;

pub use intents::Intent;
pub use types::{
    Attachment, Contact, Conversation, FileContent, IncomingFile, MediaKind, Message, Screen,
};
