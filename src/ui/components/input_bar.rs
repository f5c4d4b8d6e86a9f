use eframe::egui;

use crate::common::Intent;

const EMOJIS: [&str; 20] = [
    "😀", "😂", "😊", "😍", "🤔", "😎", "😢", "😡", "👍", "👎", "❤️", "🔥", "🎉", "🙏", "💪",
    "👏", "🥳", "😴", "😇", "✨",
];

pub fn render(
    ui: &mut egui::Ui,
    draft: &mut String,
    emoji_picker_open: bool,
    intents: &mut Vec<Intent>,
) {
    if emoji_picker_open {
        render_emoji_picker(ui, intents);
        ui.separator();
    }

    ui.horizontal(|ui| {
        if ui.button("🙂").clicked() {
            intents.push(Intent::ToggleEmojiPicker);
        }

        let mut send = false;
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Send").clicked() {
                send = true;
            }
            let response = ui.add(
                egui::TextEdit::singleline(draft)
                    .hint_text("Type a message...")
                    .desired_width(ui.available_width()),
            );
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                send = true;
            }
        });

        if send {
            intents.push(Intent::SendDraft);
        }
    });

    ui.label(
        egui::RichText::new("Drop a file onto the window to attach it")
            .weak()
            .small(),
    );
}

fn render_emoji_picker(ui: &mut egui::Ui, intents: &mut Vec<Intent>) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Emoji").strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("✖").clicked() {
                intents.push(Intent::ToggleEmojiPicker);
            }
        });
    });
    ui.horizontal_wrapped(|ui| {
        for emoji in EMOJIS {
            if ui.button(emoji).clicked() {
                intents.push(Intent::InsertEmoji(emoji));
            }
        }
    });
}
