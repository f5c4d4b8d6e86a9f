use eframe::egui;

pub fn render(ui: &mut egui::Ui, glyph: &str, title: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.3);
        ui.label(egui::RichText::new(glyph).size(64.0));
        ui.heading(title);
        ui.label(
            egui::RichText::new("This section is under construction. More to come soon!").weak(),
        );
    });
}
