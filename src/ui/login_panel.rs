//! Login panel with local validation and serialized submission.

use eframe::egui::{self, Key, RichText, Ui};
use egui_phosphor::regular::{EYE, EYE_SLASH};

use super::app::{App, LoginState};

/// Show the login panel.
pub fn show(app: &mut App, ui: &mut Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        ui.heading(RichText::new("Sign In").size(28.0).strong());
        ui.add_space(4.0);
        ui.label(RichText::new("Welcome back!").weak());
        ui.add_space(30.0);

        let mut submit = false;

        egui::Grid::new("login_grid")
            .num_columns(2)
            .spacing([16.0, 12.0])
            .show(ui, |ui| {
                ui.label("Email:");
                let email_response = ui.add(
                    egui::TextEdit::singleline(&mut app.login_email)
                        .desired_width(240.0)
                        .hint_text("Enter your email"),
                );
                if email_response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                    submit = true;
                }
                ui.end_row();

                ui.label("Password:");
                ui.horizontal(|ui| {
                    let password_response = ui.add(
                        egui::TextEdit::singleline(&mut app.login_password)
                            .desired_width(210.0)
                            .hint_text("Enter your password")
                            .password(!app.show_password),
                    );
                    if password_response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                        submit = true;
                    }

                    let eye = if app.show_password { EYE_SLASH } else { EYE };
                    if ui.button(eye).clicked() {
                        app.show_password = !app.show_password;
                    }
                });
                ui.end_row();
            });

        ui.add_space(20.0);

        let submitting = matches!(app.login_state, LoginState::Submitting);
        let can_submit = !submitting && !app.login_email.is_empty() && !app.login_password.is_empty();

        ui.horizontal(|ui| {
            ui.add_space(ui.available_width() / 2.0 - 60.0);
            if ui
                .add_enabled(can_submit, egui::Button::new("Sign In").min_size(egui::vec2(120.0, 32.0)))
                .clicked()
            {
                submit = true;
            }

            if submitting {
                ui.spinner();
                ui.label("Signing in...");
            }
        });

        if submit {
            app.submit_login();
        }
    });
}
