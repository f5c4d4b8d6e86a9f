use eframe::egui;

use crate::common::types::Screen;
use crate::common::Intent;

pub fn render(ui: &mut egui::Ui, intents: &mut Vec<Intent>) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.25);
        ui.label(egui::RichText::new("💬").size(64.0));
        ui.add_space(8.0);
        ui.heading("MESSENGER");
        ui.label("Chat easily. Share your mood with stickers and emoji!");
        ui.add_space(16.0);
        if ui
            .button(egui::RichText::new("  Get started  ").strong())
            .clicked()
        {
            intents.push(Intent::OpenScreen(Screen::Chats));
        }
        ui.add_space(8.0);
        ui.label(egui::RichText::new("Join millions of users").weak());
    });
}
