use eframe::egui;

use crate::common::types::Screen;
use crate::common::Intent;

const ITEMS: [(Screen, &str); 5] = [
    (Screen::Chats, "💬 Chats"),
    (Screen::Contacts, "👥 Contacts"),
    (Screen::Favorites, "⭐ Favorites"),
    (Screen::Profile, "👤 Profile"),
    (Screen::Settings, "⚙ Settings"),
];

/// The bottom navigation is hidden on the welcome and chat screens.
pub fn visible(screen: Screen) -> bool {
    !matches!(screen, Screen::Welcome | Screen::Chat)
}

pub fn render(ui: &mut egui::Ui, current: Screen, intents: &mut Vec<Intent>) {
    ui.horizontal(|ui| {
        for (screen, label) in ITEMS {
            if ui.selectable_label(current == screen, label).clicked() {
                intents.push(Intent::OpenScreen(screen));
            }
        }
    });
}
