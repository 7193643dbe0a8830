// src/gui/components/search_bar.rs
use eframe::egui;

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("🔍 Company search");

    let can_generate = app.current.as_ref().is_some_and(|c| !c.is_empty());
    let mut generate = false;

    ui.horizontal(|ui| {
        ui.label("Company or leader:");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.search_text)
                .hint_text("empty → top listing")
                .desired_width(280.0),
        );
        let enter = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        let clicked = ui
            .add_enabled(can_generate, egui::Button::new("📊 Generate report"))
            .clicked();
        generate = clicked || (enter && can_generate);
    });

    if generate {
        actions::generate(app);
    }
}
