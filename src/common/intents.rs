use uuid::Uuid;

use crate::common::types::{IncomingFile, Screen};

/// Command the UI layer sends to the session state holder.
///
/// Render functions return intents instead of mutating state themselves;
/// the app loop applies them in order.
#[derive(Debug, Clone)]
pub enum Intent {
    OpenScreen(Screen),
    /// Select a conversation and show the chat screen.
    OpenConversation(Uuid),
    /// Send the current draft as a text message.
    SendDraft,
    AttachFile(IncomingFile),
    /// Start (or resume) a chat with an address-book entry.
    StartChat(Uuid),
    /// Append an emoji glyph to the draft.
    InsertEmoji(&'static str),
    ToggleEmojiPicker,
    SetVideoCall(bool),
}
