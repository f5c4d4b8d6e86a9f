use eframe::egui;

use crate::common::Intent;
use crate::session::Session;

pub fn render(ui: &mut egui::Ui, session: &mut Session, intents: &mut Vec<Intent>) {
    ui.heading("Contacts");
    ui.add(
        egui::TextEdit::singleline(&mut session.contact_filter)
            .hint_text("Search contacts...")
            .desired_width(f32::INFINITY),
    );
    ui.separator();

    let filter = session.contact_filter.to_lowercase();
    egui::ScrollArea::vertical().show(ui, |ui| {
        for contact in session
            .contacts
            .iter()
            .filter(|contact| filter.is_empty() || contact.name.to_lowercase().contains(&filter))
        {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(&contact.avatar).size(24.0));
                    ui.vertical(|ui| {
                        ui.horizontal(|ui| {
                            ui.label(egui::RichText::new(&contact.name).strong());
                            if contact.online {
                                ui.colored_label(egui::Color32::GREEN, "●");
                            }
                        });
                        ui.label(egui::RichText::new(&contact.phone).weak());
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("💬").clicked() {
                            intents.push(Intent::StartChat(contact.id));
                        }
                    });
                });
            });
        }
    });
}
