use std::collections::HashMap;

use chrono::{Duration, Local};
use uuid::Uuid;

use crate::common::types::{Contact, Conversation, Message};

/// Static data the session starts from. Nothing here survives the process.
pub struct SeedData {
    pub conversations: Vec<Conversation>,
    pub histories: HashMap<Uuid, Vec<Message>>,
    pub contacts: Vec<Contact>,
}

pub fn load() -> SeedData {
    let mut conversations = Vec::new();
    let mut histories = HashMap::new();

    let anna = conversation("Anna Smirnova", "Let's meet tomorrow!", "14:32", 2, "👩", true);
    histories.insert(
        anna.id,
        vec![
            incoming("Hey! How are you?", 12),
            outgoing("Great! And you?", 7),
            incoming("Let's meet tomorrow!", 0),
        ],
    );
    conversations.push(anna);

    let ivan = conversation("Ivan Petrov", "Sent you the files", "12:15", 0, "👨", false);
    histories.insert(
        ivan.id,
        vec![
            outgoing("Did you finish the draft?", 140),
            incoming("Sent you the files", 137),
        ],
    );
    conversations.push(ivan);

    let maria = conversation(
        "Maria Kuznetsova",
        "😊 Thank you so much!",
        "Yesterday",
        0,
        "👩‍🦰",
        true,
    );
    histories.insert(
        maria.id,
        vec![
            incoming("Do you still have that recipe?", 1500),
            outgoing("Sure, here it is", 1495),
            incoming("😊 Thank you so much!", 1490),
        ],
    );
    conversations.push(maria);

    let team = conversation(
        "Project Team",
        "Call moved to 15:00",
        "Yesterday",
        5,
        "👥",
        false,
    );
    histories.insert(team.id, vec![incoming("Call moved to 15:00", 1450)]);
    conversations.push(team);

    SeedData {
        conversations,
        histories,
        contacts: contacts(),
    }
}

fn contacts() -> Vec<Contact> {
    vec![
        contact("Anna Smirnova", "+1 202 555-0134", "👩", true),
        contact("Ivan Petrov", "+1 202 555-0161", "👨", false),
        contact("Maria Kuznetsova", "+1 202 555-0147", "👩‍🦰", true),
        contact("Dmitry Volkov", "+1 202 555-0189", "🧑", false),
        contact("Elena Sokolova", "+1 202 555-0115", "👱‍♀️", true),
        contact("Sergey Morozov", "+1 202 555-0172", "🧔", false),
    ]
}

fn conversation(
    name: &str,
    last_message: &str,
    last_active: &str,
    unread: u32,
    avatar: &str,
    online: bool,
) -> Conversation {
    Conversation {
        id: Uuid::new_v4(),
        name: name.to_string(),
        last_message: last_message.to_string(),
        last_active: last_active.to_string(),
        unread,
        avatar: avatar.to_string(),
        online,
    }
}

fn contact(name: &str, phone: &str, avatar: &str, online: bool) -> Contact {
    Contact {
        id: Uuid::new_v4(),
        name: name.to_string(),
        phone: phone.to_string(),
        avatar: avatar.to_string(),
        online,
    }
}

fn incoming(body: &str, minutes_ago: i64) -> Message {
    Message {
        id: Uuid::new_v4(),
        body: body.to_string(),
        outgoing: false,
        sent_at: Local::now() - Duration::minutes(minutes_ago),
        attachment: None,
    }
}

fn outgoing(body: &str, minutes_ago: i64) -> Message {
    Message {
        id: Uuid::new_v4(),
        body: body.to_string(),
        outgoing: true,
        sent_at: Local::now() - Duration::minutes(minutes_ago),
        attachment: None,
    }
}
