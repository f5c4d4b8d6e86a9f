use eframe::egui;

use crate::common::types::{FileContent, IncomingFile, Screen};
use crate::common::Intent;
use crate::config::AppConfig;
use crate::session::Session;

use super::components::{
    chat_area, chat_list, contacts, input_bar, nav_bar, placeholder, video_call, welcome,
};

pub struct MessengerApp {
    session: Session,
    config: AppConfig,
}

impl MessengerApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        Self {
            session: Session::new(),
            config,
        }
    }

    /// Files dragged onto the window become attachments while a chat is
    /// open; elsewhere they are ignored.
    fn collect_dropped_files(&self, ctx: &egui::Context, intents: &mut Vec<Intent>) {
        if self.session.screen != Screen::Chat {
            return;
        }
        for file in ctx.input(|i| i.raw.dropped_files.clone()) {
            intents.push(Intent::AttachFile(incoming_file(file)));
        }
    }
}

impl eframe::App for MessengerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut intents = Vec::new();

        self.collect_dropped_files(ctx, &mut intents);

        if nav_bar::visible(self.session.screen) {
            egui::TopBottomPanel::bottom("nav_bar").show(ctx, |ui| {
                nav_bar::render(ui, self.session.screen, &mut intents);
            });
        }

        if self.session.screen == Screen::Chat {
            egui::TopBottomPanel::bottom("chat_input").show(ctx, |ui| {
                input_bar::render(
                    ui,
                    &mut self.session.draft,
                    self.session.emoji_picker_open,
                    &mut intents,
                );
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| match self.session.screen {
            Screen::Welcome => welcome::render(ui, &mut intents),
            Screen::Chats => chat_list::render(ui, &mut self.session, &self.config, &mut intents),
            Screen::Chat => chat_area::render(ui, &self.session, &mut intents),
            Screen::Contacts => contacts::render(ui, &mut self.session, &mut intents),
            Screen::Favorites => placeholder::render(ui, "⭐", "Favorites"),
            Screen::Profile => placeholder::render(ui, "👤", "Profile"),
            Screen::Settings => placeholder::render(ui, "⚙", "Settings"),
        });

        if self.session.video_call_open {
            video_call::render(ctx, self.session.selected_conversation(), &mut intents);
        }

        for intent in intents {
            self.session.apply(intent);
        }
    }
}

fn incoming_file(file: egui::DroppedFile) -> IncomingFile {
    let name = if file.name.is_empty() {
        file.path
            .as_deref()
            .and_then(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "file".to_string())
    } else {
        file.name.clone()
    };

    let content = if let Some(bytes) = file.bytes {
        FileContent::Bytes(bytes)
    } else if let Some(path) = file.path {
        FileContent::Path(path)
    } else {
        FileContent::Unavailable
    };

    IncomingFile {
        name,
        mime: file.mime,
        content,
    }
}
