use eframe::egui;

use crate::common::types::{FileContent, Message, Screen};
use crate::common::Intent;
use crate::session::Session;

const OUTGOING_FILL: egui::Color32 = egui::Color32::from_rgb(47, 84, 150);

pub fn render(ui: &mut egui::Ui, session: &Session, intents: &mut Vec<Intent>) {
    let Some(conv) = session.selected_conversation() else {
        if ui.button("← Back").clicked() {
            intents.push(Intent::OpenScreen(Screen::Chats));
        }
        ui.separator();
        ui.label(egui::RichText::new("No conversation selected").weak());
        return;
    };

    ui.horizontal(|ui| {
        if ui.button("←").clicked() {
            intents.push(Intent::OpenScreen(Screen::Chats));
        }
        ui.label(egui::RichText::new(&conv.avatar).size(24.0));
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(&conv.name).strong());
            let status = if conv.online {
                "online"
            } else {
                "last seen recently"
            };
            ui.label(egui::RichText::new(status).weak());
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🎥").clicked() {
                intents.push(Intent::SetVideoCall(true));
            }
        });
    });
    ui.separator();

    egui::ScrollArea::vertical()
        .stick_to_bottom(true)
        .auto_shrink(false)
        .show(ui, |ui| {
            for message in session.messages() {
                ui.push_id(message.id, |ui| bubble(ui, message));
            }
        });
}

fn bubble(ui: &mut egui::Ui, message: &Message) {
    let align = if message.outgoing {
        egui::Align::Max
    } else {
        egui::Align::Min
    };

    ui.with_layout(egui::Layout::top_down(align), |ui| {
        let mut frame = egui::Frame::group(ui.style());
        if message.outgoing {
            frame = frame.fill(OUTGOING_FILL);
        }
        frame.show(ui, |ui| {
            ui.set_max_width(ui.available_width() * 0.75);
            match &message.attachment {
                Some(attachment) => {
                    ui.label(egui::RichText::new(attachment.kind.display_label()).strong());
                    ui.label(egui::RichText::new(&attachment.file_name).weak());
                    if let FileContent::Bytes(bytes) = &attachment.content {
                        ui.label(
                            egui::RichText::new(format!("{} bytes", bytes.len()))
                                .weak()
                                .small(),
                        );
                    }
                }
                None => {
                    ui.label(&message.body);
                }
            }
            ui.label(egui::RichText::new(message.time_label()).weak().small());
        });
    });
}
