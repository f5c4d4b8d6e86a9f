use eframe::egui;

use crate::common::types::Conversation;
use crate::common::Intent;

pub fn render(
    ctx: &egui::Context,
    conversation: Option<&Conversation>,
    intents: &mut Vec<Intent>,
) {
    let mut open = true;
    egui::Window::new("Video call")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .open(&mut open)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                if let Some(conv) = conversation {
                    ui.label(egui::RichText::new(&conv.avatar).size(48.0));
                    ui.heading(&conv.name);
                }
                ui.label(egui::RichText::new("Calling...").weak());
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("📵 End").clicked() {
                        intents.push(Intent::SetVideoCall(false));
                    }
                    let _ = ui.button("🎤 Mute");
                    let _ = ui.button("🎥 Camera");
                });
            });
        });

    if !open {
        intents.push(Intent::SetVideoCall(false));
    }
}
