//! Account detail panel: profile, orders by status tab, payment history.

use chrono::Local;
use eframe::egui::{self, RichText, ScrollArea, Ui};

use super::app::{AccountMode, App};
use super::components::{colors, format_amount, panel_header};
use crate::models::order::{OrderStatus, filter_by_status};

/// Show the account panel for the current mode.
pub fn show(app: &mut App, ui: &mut Ui) {
    // Unauthenticated access short-circuits; no data is fetched.
    if !app.session.is_authenticated() {
        ui.centered_and_justified(|ui| {
            ui.label("Please sign in to view your account.");
        });
        return;
    }

    let title = match app.account_mode {
        AccountMode::Orders => "Account Details",
        AccountMode::Payments => "Payment History",
    };
    panel_header(ui, title);

    // Fail-closed: any fetch failure halts the data section.
    if let Some(error) = &app.account_error {
        ui.colored_label(colors::ERROR, error);
        return;
    }

    if app.account_loading {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label("Loading data...");
        });
        return;
    }

    match app.account_mode {
        AccountMode::Orders => {
            show_profile(app, ui);
            ui.add_space(20.0);
            show_orders(app, ui);
            ui.add_space(15.0);
            if ui.button("View payment history").clicked() {
                app.open_account(AccountMode::Payments);
            }
        }
        AccountMode::Payments => {
            show_payments(app, ui);
            ui.add_space(15.0);
            if ui.button("View account details").clicked() {
                app.open_account(AccountMode::Orders);
            }
        }
    }
}

fn show_profile(app: &mut App, ui: &mut Ui) {
    if app.profile_edit_mode {
        show_profile_form(app, ui);
        return;
    }

    egui::Frame::group(ui.style()).show(ui, |ui| {
        egui::Grid::new("profile_grid")
            .num_columns(2)
            .spacing([20.0, 8.0])
            .show(ui, |ui| {
                ui.strong("Email:");
                ui.label(&app.session.email);
                ui.end_row();

                ui.strong("Name:");
                ui.label(non_empty_or(&app.profile_draft.name, "Not provided"));
                ui.end_row();

                ui.strong("Address:");
                ui.label(non_empty_or(&app.profile_draft.address, "Not provided"));
                ui.end_row();

                ui.strong("Phone:");
                ui.label(non_empty_or(&app.profile_draft.phone, "Not provided"));
                ui.end_row();

                ui.strong("Status:");
                ui.colored_label(colors::SUCCESS, "Authenticated");
                ui.end_row();
            });

        ui.add_space(10.0);
        if ui.button("Edit profile").clicked() {
            // Entering edit mode is local only; no refetch.
            app.profile_edit_mode = true;
        }
    });
}

fn show_profile_form(app: &mut App, ui: &mut Ui) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        egui::Grid::new("profile_form_grid")
            .num_columns(2)
            .spacing([20.0, 10.0])
            .show(ui, |ui| {
                ui.label("Name:");
                ui.add(egui::TextEdit::singleline(&mut app.profile_draft.name).desired_width(240.0));
                ui.end_row();

                ui.label("Email:");
                // Immutable once set
                ui.add(
                    egui::TextEdit::singleline(&mut app.profile_draft.email)
                        .desired_width(240.0)
                        .interactive(false),
                );
                ui.end_row();

                ui.label("Password (required to update):");
                ui.add(
                    egui::TextEdit::singleline(&mut app.profile_draft.password)
                        .desired_width(240.0)
                        .password(true),
                );
                ui.end_row();

                ui.label("Address:");
                ui.add(egui::TextEdit::singleline(&mut app.profile_draft.address).desired_width(240.0));
                ui.end_row();

                ui.label("Phone:");
                ui.add(egui::TextEdit::singleline(&mut app.profile_draft.phone).desired_width(160.0));
                ui.end_row();
            });

        ui.add_space(10.0);
        ui.horizontal(|ui| {
            if ui.button("Save changes").clicked() {
                app.save_profile();
            }
            if ui.button("Cancel").clicked() {
                app.profile_edit_mode = false;
                app.profile_draft.password.clear();
            }
        });
    });
}

fn show_orders(app: &mut App, ui: &mut Ui) {
    ui.heading("Your Orders");
    ui.add_space(10.0);

    if app.orders.is_empty() {
        ui.label("You have no orders yet.");
        return;
    }

    // Tabs: pure local filter, never a refetch
    ui.horizontal(|ui| {
        for status in OrderStatus::ALL {
            if ui.selectable_label(app.order_tab == status, status.label()).clicked() {
                app.order_tab = status;
            }
        }
    });

    ui.add_space(10.0);

    let filtered: Vec<_> = filter_by_status(&app.orders, app.order_tab)
        .into_iter()
        .cloned()
        .collect();

    let mut confirm_order = None;

    ScrollArea::vertical().id_salt("orders_scroll").show(ui, |ui| {
        egui::Grid::new("orders_grid")
            .num_columns(6)
            .striped(true)
            .min_col_width(80.0)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.strong("Order ID");
                ui.strong("Total");
                ui.strong("Status");
                ui.strong("Items");
                ui.strong("Purchased");
                ui.strong("Confirmation");
                ui.end_row();

                for order in &filtered {
                    ui.label(order.order_id.to_string());
                    ui.label(format_amount(order.total));
                    ui.label(order.status.label());
                    ui.label(order.total_quantity().to_string());
                    ui.label(
                        order
                            .created_time
                            .with_timezone(&Local)
                            .format("%Y-%m-%d")
                            .to_string(),
                    );

                    match order.status {
                        OrderStatus::Pending => {
                            ui.colored_label(colors::WARNING, RichText::new("Processing").strong());
                        }
                        OrderStatus::Delivering => {
                            ui.colored_label(colors::NEUTRAL, RichText::new("Delivering").strong());
                        }
                        OrderStatus::Completed => {
                            if order.can_confirm_delivery() {
                                if ui.button("Confirm receipt").clicked() {
                                    confirm_order = Some(order.order_id);
                                }
                            } else {
                                ui.colored_label(colors::SUCCESS, RichText::new("\u{2713} Received").strong());
                            }
                        }
                    }
                    ui.end_row();
                }
            });
    });

    if let Some(order_id) = confirm_order {
        app.confirm_delivered(order_id);
    }
}

fn show_payments(app: &mut App, ui: &mut Ui) {
    if app.payments.is_empty() {
        ui.label("No payments recorded.");
        return;
    }

    ScrollArea::vertical().id_salt("payments_scroll").show(ui, |ui| {
        egui::Grid::new("payments_grid")
            .num_columns(5)
            .striped(true)
            .min_col_width(80.0)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.strong("Payment ID");
                ui.strong("Amount");
                ui.strong("Method");
                ui.strong("Date");
                ui.strong("Status");
                ui.end_row();

                for payment in &app.payments {
                    ui.label(payment.id.to_string());
                    ui.label(format_amount(payment.amount));
                    ui.label(&payment.payment_method);
                    ui.label(
                        payment
                            .payment_date
                            .with_timezone(&Local)
                            .format("%Y-%m-%d")
                            .to_string(),
                    );
                    ui.label(&payment.status);
                    ui.end_row();
                }
            });
    });
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}
