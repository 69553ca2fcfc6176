//! Staff directory panel with search, CSV import/export, and CRUD.

use eframe::egui::{self, ScrollArea, Ui};
use egui_phosphor::regular::{ARROWS_CLOCKWISE, FILE_ARROW_DOWN, FILE_ARROW_UP, PLUS, TRASH};

use super::app::{App, DeleteState, StaffForm};
use crate::csv_io;
use crate::models::staff::{CreateStaff, filter_by_email};

/// Show the staff directory panel.
pub fn show(app: &mut App, ui: &mut Ui) {
    super::components::panel_header(ui, "Staff Directory");

    // Toolbar row 1: Action buttons
    ui.horizontal(|ui| {
        if ui.button(format!("{PLUS} Add new")).clicked() {
            app.staff_form = StaffForm {
                is_open: true,
                ..Default::default()
            };
        }

        ui.add_space(10.0);

        if ui.button(format!("{ARROWS_CLOCKWISE} Refresh")).clicked() {
            app.refresh_staff();
        }

        ui.add_space(10.0);

        if ui.button(format!("{FILE_ARROW_DOWN} Import")).clicked() {
            import_staff(app);
        }

        ui.add_space(10.0);

        if ui.button(format!("{FILE_ARROW_UP} Export")).clicked() {
            export_staff(app);
        }
    });

    ui.add_space(10.0);

    // Toolbar row 2: Search
    ui.horizontal(|ui| {
        ui.label("Search:");
        ui.add(
            egui::TextEdit::singleline(&mut app.staff_search)
                .desired_width(240.0)
                .hint_text("Search user by email..."),
        );

        if !app.staff_search.is_empty() {
            ui.add_space(10.0);
            if ui.button("Clear").clicked() {
                app.staff_search.clear();
            }
        }
    });

    ui.add_space(15.0);

    show_table(app, ui);

    if app.staff_form.is_open {
        show_form_dialog(app, ui.ctx());
    }
}

fn show_table(app: &mut App, ui: &mut Ui) {
    let filtered: Vec<_> = filter_by_email(&app.staffs, &app.staff_search)
        .into_iter()
        .cloned()
        .collect();

    ui.label(format!("Showing {} of {} staff", filtered.len(), app.staffs.len()));
    ui.add_space(10.0);

    ScrollArea::vertical().id_salt("staff_scroll").show(ui, |ui| {
        egui::Grid::new("staff_grid")
            .num_columns(6)
            .striped(true)
            .min_col_width(80.0)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                // Header
                ui.strong("Name");
                ui.strong("Email");
                ui.strong("Address");
                ui.strong("Phone");
                ui.strong("Role ID");
                ui.strong("Delete");
                ui.end_row();

                if filtered.is_empty() {
                    // Placeholder row instead of an empty table body
                    ui.label("No staff found");
                    ui.end_row();
                    return;
                }

                for staff in &filtered {
                    ui.label(&staff.name);
                    ui.label(&staff.email);
                    ui.label(&staff.address);
                    ui.label(&staff.phone);
                    ui.label(staff.role_id.to_string());

                    if ui.button(format!("{TRASH} Delete")).clicked() {
                        app.delete_state = DeleteState::PendingConfirmation(staff.clone());
                    }
                    ui.end_row();
                }
            });
    });
}

fn show_form_dialog(app: &mut App, ctx: &egui::Context) {
    egui::Window::new("Add Staff")
        .collapsible(false)
        .resizable(false)
        .default_width(400.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(10.0);

            egui::Grid::new("staff_form_grid")
                .num_columns(2)
                .spacing([20.0, 10.0])
                .show(ui, |ui| {
                    ui.label("Name:");
                    ui.add(egui::TextEdit::singleline(&mut app.staff_form.name).desired_width(240.0));
                    ui.end_row();

                    ui.label("Email:");
                    ui.add(egui::TextEdit::singleline(&mut app.staff_form.email).desired_width(240.0));
                    ui.end_row();

                    ui.label("Address:");
                    ui.add(egui::TextEdit::singleline(&mut app.staff_form.address).desired_width(240.0));
                    ui.end_row();

                    ui.label("Phone:");
                    ui.add(egui::TextEdit::singleline(&mut app.staff_form.phone).desired_width(160.0));
                    ui.end_row();

                    ui.label("Role ID:");
                    ui.add(egui::TextEdit::singleline(&mut app.staff_form.role_id_input).desired_width(80.0));
                    ui.end_row();
                });

            ui.add_space(15.0);
            ui.separator();
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    app.staff_form.reset();
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Save").clicked() {
                        save_staff(app);
                    }
                });
            });
        });
}

fn save_staff(app: &mut App) {
    let form = &app.staff_form;

    // Validation
    if form.name.trim().is_empty() {
        app.error_message = Some("Name is required".to_string());
        return;
    }
    if form.email.trim().is_empty() {
        app.error_message = Some("Email is required".to_string());
        return;
    }
    let role_id = match form.role_id_input.trim().parse() {
        Ok(id) => id,
        Err(_) => {
            app.error_message = Some("Invalid role ID (must be a number)".to_string());
            return;
        }
    };

    let data = CreateStaff {
        name: form.name.trim().to_string(),
        email: form.email.trim().to_string(),
        address: form.address.trim().to_string(),
        phone: form.phone.trim().to_string(),
        role_id,
    };
    app.create_staff(data);
}

/// Pick a CSV file and stage its rows as the displayed list.
///
/// Import never writes to the backend; a refresh discards staged rows.
fn import_staff(app: &mut App) {
    let Some(path) = csv_io::show_open_dialog() else {
        return;
    };

    if !csv_io::is_csv_file(&path) {
        app.error_message = Some("Only CSV files are accepted".to_string());
        return;
    }

    let file = match std::fs::File::open(&path) {
        Ok(f) => f,
        Err(e) => {
            app.error_message = Some(format!("Failed to open file: {e}"));
            return;
        }
    };

    match csv_io::parse_staff_csv(file) {
        Ok(rows) => {
            let count = rows.len();
            app.staffs = rows
                .into_iter()
                .enumerate()
                .map(|(i, row)| row.into_staff(i))
                .collect();
            app.success_message = Some("Import successful".to_string());
            app.log_success(format!("Imported {count} staged staff rows"));
        }
        Err(e) => {
            app.error_message = Some(format!("Import failed: {e}"));
            app.log_error(format!("Import failed: {e}"));
        }
    }
}

/// Export the current in-memory list, recomputed at the moment of the click.
fn export_staff(app: &mut App) {
    let Some(path) = csv_io::show_save_dialog(csv_io::EXPORT_FILENAME) else {
        return;
    };

    match csv_io::export_staff_csv(&app.staffs, &path) {
        Ok(()) => {
            let shown = path.display().to_string();
            app.success_message = Some(format!("Exported to: {shown}"));
            app.log_success(format!("Exported staff: {shown}"));
        }
        Err(e) => {
            app.error_message = Some(format!("Export failed: {e}"));
            app.log_error(format!("Export failed: {e}"));
        }
    }
}
