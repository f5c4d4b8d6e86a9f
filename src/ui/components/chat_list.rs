use eframe::egui;

use crate::common::Intent;
use crate::config::AppConfig;
use crate::session::Session;

pub fn render(
    ui: &mut egui::Ui,
    session: &mut Session,
    config: &AppConfig,
    intents: &mut Vec<Intent>,
) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("👤").size(24.0));
        ui.vertical(|ui| {
            ui.heading("Chats");
            ui.label(egui::RichText::new(&config.display_name).weak());
        });
    });

    ui.add(
        egui::TextEdit::singleline(&mut session.chat_filter)
            .hint_text("Search chats...")
            .desired_width(f32::INFINITY),
    );
    ui.separator();

    let filter = session.chat_filter.to_lowercase();
    egui::ScrollArea::vertical().show(ui, |ui| {
        for conv in session
            .conversations
            .iter()
            .filter(|conv| filter.is_empty() || conv.name.to_lowercase().contains(&filter))
        {
            let response = egui::Frame::group(ui.style())
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(&conv.avatar).size(24.0));
                        ui.vertical(|ui| {
                            ui.horizontal(|ui| {
                                ui.label(egui::RichText::new(&conv.name).strong());
                                if conv.online {
                                    ui.colored_label(egui::Color32::GREEN, "●");
                                }
                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Center),
                                    |ui| {
                                        ui.label(egui::RichText::new(&conv.last_active).weak());
                                    },
                                );
                            });
                            ui.horizontal(|ui| {
                                ui.label(egui::RichText::new(&conv.last_message).weak());
                                if conv.unread > 0 {
                                    ui.with_layout(
                                        egui::Layout::right_to_left(egui::Align::Center),
                                        |ui| {
                                            ui.label(
                                                egui::RichText::new(format!(" {} ", conv.unread))
                                                    .color(egui::Color32::WHITE)
                                                    .background_color(egui::Color32::from_rgb(
                                                        59, 130, 246,
                                                    )),
                                            );
                                        },
                                    );
                                }
                            });
                        });
                    });
                })
                .response;

            if response.interact(egui::Sense::click()).clicked() {
                intents.push(Intent::OpenConversation(conv.id));
            }
        }
    });
}
