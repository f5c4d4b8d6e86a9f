use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Local};
use uuid::Uuid;

/// Top-level view currently presented. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    Chats,
    Chat,
    Contacts,
    Favorites,
    Profile,
    Settings,
}

/// A chat thread with a counterpart, as shown in the chat list.
#[derive(Debug, Clone)]
pub struct Conversation {
    pub id: Uuid,
    pub name: String,
    /// Denormalized preview of the newest message.
    pub last_message: String,
    /// Display label for the newest activity, e.g. "14:32" or "Yesterday".
    pub last_active: String,
    pub unread: u32,
    /// Emoji glyph standing in for a profile picture.
    pub avatar: String,
    pub online: bool,
}

/// Media classification of an attachment, by declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
    Other,
}

impl MediaKind {
    /// Classify by MIME type when one was declared, otherwise by the
    /// file-name extension.
    pub fn classify(mime: &str, file_name: &str) -> Self {
        if mime.starts_with("image/") {
            return MediaKind::Image;
        }
        if mime.starts_with("video/") {
            return MediaKind::Video;
        }
        if !mime.is_empty() {
            return MediaKind::Other;
        }
        Self::from_extension(file_name)
    }

    fn from_extension(file_name: &str) -> Self {
        let ext = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "png" | "jpg" | "jpeg" | "gif" | "webp" | "bmp" => MediaKind::Image,
            "mp4" | "mkv" | "webm" | "avi" | "mov" => MediaKind::Video,
            _ => MediaKind::Other,
        }
    }

    /// Label used in the message bubble and the chat-list preview.
    pub fn display_label(&self) -> &'static str {
        match self {
            MediaKind::Image => "📷 Photo",
            MediaKind::Video => "🎥 Video",
            MediaKind::Other => "📎 File",
        }
    }
}

/// Opaque reference to attached file content. Never parsed.
#[derive(Debug, Clone)]
pub enum FileContent {
    Bytes(Arc<[u8]>),
    Path(PathBuf),
    /// Dropped file for which the platform handed over neither bytes nor a
    /// path (possible on web targets).
    Unavailable,
}

/// Media carried by a non-text message.
#[derive(Debug, Clone)]
pub struct Attachment {
    pub kind: MediaKind,
    pub file_name: String,
    pub content: FileContent,
}

/// A file the user handed to the app, before classification.
#[derive(Debug, Clone)]
pub struct IncomingFile {
    pub name: String,
    /// Declared media type; empty when the platform did not provide one.
    pub mime: String,
    pub content: FileContent,
}

/// One item within a conversation's ordered history.
#[derive(Debug, Clone)]
pub struct Message {
    pub id: Uuid,
    pub body: String,
    pub outgoing: bool,
    pub sent_at: DateTime<Local>,
    /// `None` for plain text messages.
    pub attachment: Option<Attachment>,
}

impl Message {
    pub fn outgoing_text(body: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            body: body.into(),
            outgoing: true,
            sent_at: Local::now(),
            attachment: None,
        }
    }

    pub fn outgoing_attachment(attachment: Attachment) -> Self {
        Self {
            id: Uuid::new_v4(),
            body: attachment.kind.display_label().to_string(),
            outgoing: true,
            sent_at: Local::now(),
            attachment: Some(attachment),
        }
    }

    /// Media kind of the attachment; `None` for plain text.
    #[allow(dead_code)]
    pub fn kind(&self) -> Option<MediaKind> {
        self.attachment.as_ref().map(|attachment| attachment.kind)
    }

    /// Display timestamp, e.g. "14:32".
    pub fn time_label(&self) -> String {
        self.sent_at.format("%H:%M").to_string()
    }
}

/// An entry of the address book.
#[derive(Debug, Clone)]
pub struct Contact {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub avatar: String,
    pub online: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_by_mime_prefix() {
        assert_eq!(MediaKind::classify("image/png", "x.bin"), MediaKind::Image);
        assert_eq!(MediaKind::classify("video/mp4", "x.bin"), MediaKind::Video);
        assert_eq!(
            MediaKind::classify("application/pdf", "x.png"),
            MediaKind::Other
        );
    }

    #[test]
    fn test_classify_falls_back_to_extension() {
        assert_eq!(MediaKind::classify("", "holiday.JPG"), MediaKind::Image);
        assert_eq!(MediaKind::classify("", "clip.webm"), MediaKind::Video);
        assert_eq!(MediaKind::classify("", "notes.txt"), MediaKind::Other);
        assert_eq!(MediaKind::classify("", "no_extension"), MediaKind::Other);
    }

    #[test]
    fn test_text_message_has_no_attachment() {
        let msg = Message::outgoing_text("hello");
        assert!(msg.attachment.is_none());
        assert_eq!(msg.kind(), None);
        assert!(msg.outgoing);
    }

    #[test]
    fn test_attachment_message_body_is_media_label() {
        let msg = Message::outgoing_attachment(Attachment {
            kind: MediaKind::Image,
            file_name: "photo.png".to_string(),
            content: FileContent::Unavailable,
        });
        assert_eq!(msg.body, "📷 Photo");
        assert_eq!(msg.kind(), Some(MediaKind::Image));
    }
}
