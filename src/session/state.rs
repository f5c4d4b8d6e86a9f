use std::collections::HashMap;

use chrono::Local;
use uuid::Uuid;

use crate::common::types::{
    Attachment, Contact, Conversation, IncomingFile, MediaKind, Message, Screen,
};
use crate::common::Intent;

use super::seed;

/// Preview shown for a conversation that has no messages yet.
pub const EMPTY_CONVERSATION_PREVIEW: &str = "Start chatting";

/// The session state holder.
///
/// Owns everything the screens render: the active screen, the selected
/// conversation, the conversation summaries, one message history per
/// conversation, the address book, and the transient input state. The UI
/// never mutates any of it directly; it submits an [`Intent`] via
/// [`Session::apply`].
pub struct Session {
    pub screen: Screen,
    pub selected: Option<Uuid>,
    pub conversations: Vec<Conversation>,
    pub contacts: Vec<Contact>,
    /// Message history per conversation id, append-only.
    histories: HashMap<Uuid, Vec<Message>>,
    pub draft: String,
    pub chat_filter: String,
    pub contact_filter: String,
    pub emoji_picker_open: bool,
    pub video_call_open: bool,
}

impl Session {
    pub fn new() -> Self {
        let seed = seed::load();
        log::info!(
            "Session seeded with {} conversations and {} contacts",
            seed.conversations.len(),
            seed.contacts.len()
        );

        Self {
            screen: Screen::Welcome,
            selected: None,
            conversations: seed.conversations,
            contacts: seed.contacts,
            histories: seed.histories,
            draft: String::new(),
            chat_filter: String::new(),
            contact_filter: String::new(),
            emoji_picker_open: false,
            video_call_open: false,
        }
    }

    /// Apply one user-triggered command to the session.
    pub fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::OpenScreen(screen) => self.select_screen(screen),
            Intent::OpenConversation(id) => {
                self.select_conversation(id);
                self.select_screen(Screen::Chat);
            }
            Intent::SendDraft => {
                let draft = self.draft.clone();
                self.send_message(&draft);
            }
            Intent::AttachFile(file) => self.attach_file(file),
            Intent::StartChat(contact_id) => self.start_chat_with_contact(contact_id),
            Intent::InsertEmoji(emoji) => self.insert_emoji(emoji),
            Intent::ToggleEmojiPicker => self.emoji_picker_open = !self.emoji_picker_open,
            Intent::SetVideoCall(open) => self.video_call_open = open,
        }
    }

    pub fn select_screen(&mut self, screen: Screen) {
        self.screen = screen;
    }

    /// Select a conversation without validating that it exists; a dangling
    /// id simply renders as "no conversation selected" downstream.
    pub fn select_conversation(&mut self, id: Uuid) {
        self.selected = Some(id);
    }

    /// The conversation the chat screen is showing, if any.
    pub fn selected_conversation(&self) -> Option<&Conversation> {
        let id = self.selected?;
        self.conversations.iter().find(|conv| conv.id == id)
    }

    /// Message history of a conversation; empty for unknown ids.
    pub fn history(&self, id: Uuid) -> &[Message] {
        self.histories.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Message history of the selected conversation.
    pub fn messages(&self) -> &[Message] {
        match self.selected {
            Some(id) => self.history(id),
            None => &[],
        }
    }

    /// Send `text` as an outgoing message to the selected conversation.
    ///
    /// Blank text and the no-selection case are silently ignored. On
    /// success the draft is cleared and the conversation's preview fields
    /// are rewritten.
    pub fn send_message(&mut self, text: &str) {
        let body = text.trim();
        if body.is_empty() {
            return;
        }

        let Some(id) = self.selected_conversation().map(|conv| conv.id) else {
            log::debug!("Dropping message send: no conversation selected");
            return;
        };

        let message = Message::outgoing_text(body);
        let preview = message.body.clone();
        self.histories.entry(id).or_default().push(message);
        self.update_preview(id, preview);
        self.draft.clear();
    }

    /// Attach a user-provided file to the selected conversation as one
    /// outgoing message of the classified media kind. Always succeeds; the
    /// content is kept as an opaque reference.
    pub fn attach_file(&mut self, file: IncomingFile) {
        let Some(id) = self.selected_conversation().map(|conv| conv.id) else {
            log::debug!("Dropping attachment {}: no conversation selected", file.name);
            return;
        };

        let kind = MediaKind::classify(&file.mime, &file.name);
        let message = Message::outgoing_attachment(Attachment {
            kind,
            file_name: file.name,
            content: file.content,
        });
        let preview = message.body.clone();
        self.histories.entry(id).or_default().push(message);
        self.update_preview(id, preview);
    }

    /// Open a chat with an address-book entry.
    ///
    /// Resumes the existing conversation when one with the same display
    /// name is already in the list; otherwise a fresh conversation is
    /// prepended. An unknown contact id is ignored.
    pub fn start_chat_with_contact(&mut self, contact_id: Uuid) {
        let Some(contact) = self
            .contacts
            .iter()
            .find(|contact| contact.id == contact_id)
            .cloned()
        else {
            log::debug!("Dropping chat start: unknown contact {contact_id}");
            return;
        };

        if let Some(existing) = self
            .conversations
            .iter()
            .find(|conv| conv.name == contact.name)
        {
            let id = existing.id;
            self.select_conversation(id);
            self.select_screen(Screen::Chat);
            return;
        }

        let conversation = Conversation {
            id: Uuid::new_v4(),
            name: contact.name,
            last_message: EMPTY_CONVERSATION_PREVIEW.to_string(),
            last_active: Local::now().format("%H:%M").to_string(),
            unread: 0,
            avatar: contact.avatar,
            online: contact.online,
        };
        let id = conversation.id;
        log::info!("Starting new conversation with {}", conversation.name);

        self.conversations.insert(0, conversation);
        self.histories.insert(id, Vec::new());
        self.select_conversation(id);
        self.select_screen(Screen::Chat);
    }

    pub fn insert_emoji(&mut self, emoji: &str) {
        self.draft.push_str(emoji);
    }

    fn update_preview(&mut self, id: Uuid, preview: String) {
        if let Some(conv) = self.conversations.iter_mut().find(|conv| conv.id == id) {
            conv.last_message = preview;
            conv.last_active = Local::now().format("%H:%M").to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::types::FileContent;
    use std::collections::HashSet;

    fn session_with_first_selected() -> Session {
        let mut session = Session::new();
        let first = session.conversations[0].id;
        session.select_conversation(first);
        session.select_screen(Screen::Chat);
        session
    }

    fn file(name: &str, mime: &str) -> IncomingFile {
        IncomingFile {
            name: name.to_string(),
            mime: mime.to_string(),
            content: FileContent::Unavailable,
        }
    }

    #[test]
    fn test_send_appends_one_outgoing_message_to_active_conversation() {
        let mut session = session_with_first_selected();
        let active = session.conversations[0].id;
        let before = session.history(active).len();
        let other_lengths: Vec<usize> = session.conversations[1..]
            .iter()
            .map(|conv| session.history(conv.id).len())
            .collect();

        session.send_message("hello there");

        let history = session.history(active);
        assert_eq!(history.len(), before + 1);
        let last = history.last().unwrap();
        assert!(last.outgoing);
        assert!(last.attachment.is_none());
        assert_eq!(last.body, "hello there");

        for (conv, len) in session.conversations[1..].iter().zip(other_lengths) {
            assert_eq!(session.history(conv.id).len(), len);
        }
    }

    #[test]
    fn test_send_blank_draft_changes_nothing() {
        let mut session = session_with_first_selected();
        let active = session.conversations[0].id;
        let before = session.history(active).len();

        session.draft = "   ".to_string();
        session.apply(Intent::SendDraft);

        assert_eq!(session.history(active).len(), before);
        assert_eq!(session.draft, "   ");

        session.draft.clear();
        session.apply(Intent::SendDraft);
        assert_eq!(session.history(active).len(), before);
    }

    #[test]
    fn test_send_updates_conversation_preview() {
        let mut session = session_with_first_selected();

        session.send_message("meet at noon?");

        assert_eq!(session.conversations[0].last_message, "meet at noon?");
    }

    #[test]
    fn test_send_clears_draft() {
        let mut session = session_with_first_selected();
        session.draft = "on my way".to_string();

        session.apply(Intent::SendDraft);

        assert!(session.draft.is_empty());
        assert_eq!(session.messages().last().unwrap().body, "on my way");
    }

    #[test]
    fn test_send_without_selection_is_ignored() {
        let mut session = Session::new();
        let lengths: Vec<usize> = session
            .conversations
            .iter()
            .map(|conv| session.history(conv.id).len())
            .collect();

        session.send_message("lost message");

        for (conv, len) in session.conversations.iter().zip(lengths) {
            assert_eq!(session.history(conv.id).len(), len);
        }
    }

    #[test]
    fn test_attach_classifies_by_declared_media_type() {
        let mut session = session_with_first_selected();
        let active = session.conversations[0].id;
        let before = session.history(active).len();

        session.attach_file(file("pic.png", "image/png"));
        session.attach_file(file("clip.mp4", "video/mp4"));
        session.attach_file(file("report.pdf", "application/pdf"));

        let history = session.history(active);
        assert_eq!(history.len(), before + 3);
        let kinds: Vec<_> = history[before..].iter().map(|msg| msg.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                Some(MediaKind::Image),
                Some(MediaKind::Video),
                Some(MediaKind::Other)
            ]
        );
        assert!(history[before..].iter().all(|msg| msg.outgoing));
    }

    #[test]
    fn test_attach_updates_preview_with_media_label() {
        let mut session = session_with_first_selected();

        session.attach_file(file("pic.png", "image/png"));

        assert_eq!(session.conversations[0].last_message, "📷 Photo");
    }

    #[test]
    fn test_start_chat_with_known_counterpart_reuses_conversation() {
        let mut session = Session::new();
        let count = session.conversations.len();
        let contact = session
            .contacts
            .iter()
            .find(|contact| {
                session
                    .conversations
                    .iter()
                    .any(|conv| conv.name == contact.name)
            })
            .cloned()
            .expect("seed should contain a contact with an existing conversation");

        session.start_chat_with_contact(contact.id);

        assert_eq!(session.conversations.len(), count);
        assert_eq!(session.screen, Screen::Chat);
        assert_eq!(
            session.selected_conversation().map(|conv| conv.name.clone()),
            Some(contact.name)
        );
    }

    #[test]
    fn test_start_chat_with_new_counterpart_prepends_conversation() {
        let mut session = Session::new();
        let count = session.conversations.len();
        let contact = session
            .contacts
            .iter()
            .find(|contact| {
                !session
                    .conversations
                    .iter()
                    .any(|conv| conv.name == contact.name)
            })
            .cloned()
            .expect("seed should contain a contact without a conversation");

        session.start_chat_with_contact(contact.id);

        assert_eq!(session.conversations.len(), count + 1);
        let created = &session.conversations[0];
        assert_eq!(created.name, contact.name);
        assert_eq!(created.unread, 0);
        assert_eq!(created.last_message, EMPTY_CONVERSATION_PREVIEW);
        assert_eq!(session.selected, Some(created.id));
        assert_eq!(session.screen, Screen::Chat);
        assert!(session.messages().is_empty());
    }

    #[test]
    fn test_start_chat_with_unknown_contact_is_ignored() {
        let mut session = Session::new();
        let count = session.conversations.len();
        let screen = session.screen;

        session.start_chat_with_contact(Uuid::new_v4());

        assert_eq!(session.conversations.len(), count);
        assert_eq!(session.screen, screen);
        assert_eq!(session.selected, None);
    }

    #[test]
    fn test_insert_emoji_appends_to_draft_without_sending() {
        let mut session = session_with_first_selected();
        let active = session.conversations[0].id;
        let before = session.history(active).len();
        session.draft = "hi ".to_string();

        session.apply(Intent::InsertEmoji("😊"));

        assert_eq!(session.draft, "hi 😊");
        assert_eq!(session.history(active).len(), before);
    }

    #[test]
    fn test_message_ids_are_unique_within_a_conversation() {
        let mut session = session_with_first_selected();
        session.send_message("one");
        session.send_message("two");
        session.attach_file(file("pic.png", "image/png"));

        let ids: HashSet<Uuid> = session.messages().iter().map(|msg| msg.id).collect();
        assert_eq!(ids.len(), session.messages().len());
    }

    #[test]
    fn test_open_conversation_intent_switches_to_chat_screen() {
        let mut session = Session::new();
        let id = session.conversations[1].id;

        session.apply(Intent::OpenConversation(id));

        assert_eq!(session.selected, Some(id));
        assert_eq!(session.screen, Screen::Chat);
    }

    #[test]
    fn test_dangling_selection_renders_as_nothing_selected() {
        let mut session = Session::new();

        session.select_conversation(Uuid::new_v4());

        assert!(session.selected_conversation().is_none());
        assert!(session.messages().is_empty());

        // Sending into the dangling selection is dropped too.
        session.send_message("into the void");
        assert!(session.messages().is_empty());
    }

    #[test]
    fn test_overlay_toggles() {
        let mut session = Session::new();

        session.apply(Intent::ToggleEmojiPicker);
        assert!(session.emoji_picker_open);
        session.apply(Intent::ToggleEmojiPicker);
        assert!(!session.emoji_picker_open);

        session.apply(Intent::SetVideoCall(true));
        assert!(session.video_call_open);
        session.apply(Intent::SetVideoCall(false));
        assert!(!session.video_call_open);
    }
}
