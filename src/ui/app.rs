//! Main application state and frame loop.

use std::sync::Arc;

use chrono::{DateTime, Local};
use eframe::egui::{self, Align, Layout};
use tokio::sync::mpsc;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::error::AppError;
use crate::models::order::{Order, OrderStatus, mark_delivered};
use crate::models::payment::Payment;
use crate::models::staff::{CreateStaff, Staff};
use crate::models::user::{ProfileDraft, UserProfile};
use crate::session::Session;

use super::components::colors;
use super::{account_panel, login_panel, staff_panel};

/// Current panel being displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Login,
    Staff,
    Account,
}

/// Which remote collection the account panel shows. Passed explicitly on
/// navigation; the two fetches are mutually exclusive per load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccountMode {
    #[default]
    Orders,
    Payments,
}

/// Login submission state. Submitting is re-entered only from Idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginState {
    #[default]
    Idle,
    Submitting,
}

/// Two-phase delete as a tagged state machine, so the confirmation dialog
/// can never be shown without a selected record.
#[derive(Debug, Clone, Default)]
pub enum DeleteState {
    #[default]
    Idle,
    PendingConfirmation(Staff),
    Deleting,
}

/// Form state for adding a staff member.
#[derive(Default, Clone)]
pub struct StaffForm {
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone: String,
    pub role_id_input: String,
    pub is_open: bool,
}

impl StaffForm {
    /// Reset the form to default values.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Messages from async tasks to UI.
pub enum UiMessage {
    // Authentication
    LoginSucceeded { email: String, token: String },
    LoginFailed(String),

    // Staff directory
    StaffLoaded(Vec<Staff>),
    StaffLoadFailed { message: String, malformed: bool },
    StaffCreated(Staff),
    StaffDeleted(i64),

    // Account detail
    ProfileLoaded(UserProfile),
    OrdersLoaded(Vec<Order>),
    PaymentsLoaded(Vec<Payment>),
    AccountLoadFailed(String),
    ProfileSaved(UserProfile),
    DeliveryConfirmed(i64),

    OperationFailed(String),
}

/// Log level for UI messages.
#[derive(Clone, Copy, Debug)]
pub enum LogLevel {
    Info,
    Success,
    Error,
}

/// Log entry for the status bar activity trail.
#[derive(Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub message: String,
    pub level: LogLevel,
}

/// Main application state.
pub struct App {
    // Runtime and gateway
    pub rt: tokio::runtime::Runtime,
    pub api: Arc<ApiClient>,

    // Message channel for async communication
    pub tx: mpsc::UnboundedSender<UiMessage>,
    pub rx: mpsc::UnboundedReceiver<UiMessage>,

    // Navigation and identity
    pub current_panel: Panel,
    pub session: Session,

    // Login form
    pub login_email: String,
    pub login_password: String,
    pub show_password: bool,
    pub login_state: LoginState,

    // Staff directory
    pub staffs: Vec<Staff>,
    pub staff_search: String,
    pub staff_form: StaffForm,
    pub delete_state: DeleteState,

    // Account detail
    pub account_mode: AccountMode,
    pub account_loading: bool,
    pub account_error: Option<String>,
    pub profile_draft: ProfileDraft,
    pub profile_edit_mode: bool,
    pub orders: Vec<Order>,
    pub payments: Vec<Payment>,
    pub order_tab: OrderStatus,

    // Dialogs and log
    pub error_message: Option<String>,
    pub success_message: Option<String>,
    pub log_messages: Vec<LogEntry>,

    // Configuration
    pub config: AppConfig,
}

impl App {
    pub fn new(api: ApiClient, config: AppConfig, rt: tokio::runtime::Runtime) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let login_email = if config.ui.remember_email {
            config.ui.last_email.clone()
        } else {
            String::new()
        };

        Self {
            rt,
            api: Arc::new(api),
            tx,
            rx,
            current_panel: Panel::default(),
            session: Session::new(),
            login_email,
            login_password: String::new(),
            show_password: false,
            login_state: LoginState::default(),
            staffs: Vec::new(),
            staff_search: String::new(),
            staff_form: StaffForm::default(),
            delete_state: DeleteState::default(),
            account_mode: AccountMode::default(),
            account_loading: false,
            account_error: None,
            profile_draft: ProfileDraft::default(),
            profile_edit_mode: false,
            orders: Vec::new(),
            payments: Vec::new(),
            order_tab: OrderStatus::Pending,
            error_message: None,
            success_message: None,
            log_messages: Vec::new(),
            config,
        }
    }

    /// Log a message to the activity trail.
    pub fn log(&mut self, level: LogLevel, message: impl Into<String>) {
        self.log_messages.push(LogEntry {
            timestamp: Local::now(),
            message: message.into(),
            level,
        });

        // Keep only last 100 messages
        if self.log_messages.len() > 100 {
            self.log_messages.remove(0);
        }
    }

    /// Log an info message.
    pub fn log_info(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    /// Log a success message.
    pub fn log_success(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Success, message);
    }

    /// Log an error message.
    pub fn log_error(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    /// Submit the login form. Validation failures never reach the gateway,
    /// and a submission in flight blocks re-entry.
    pub fn submit_login(&mut self) {
        if matches!(self.login_state, LoginState::Submitting) {
            return;
        }

        let email = self.login_email.trim().to_string();
        let password = self.login_password.trim().to_string();
        if email.is_empty() || password.is_empty() {
            self.error_message = Some("Email and password are required!".to_string());
            return;
        }

        self.login_state = LoginState::Submitting;
        let api = self.api.clone();
        let tx = self.tx.clone();

        self.rt.spawn(async move {
            match api.signin(&email, &password).await {
                Ok(token) => {
                    let _ = tx.send(UiMessage::LoginSucceeded { email, token });
                }
                Err(e) => {
                    // Malformed success responses are logged distinctly but
                    // reported to the user the same as any other failure.
                    tracing::warn!("signin failed: {e}");
                    let _ = tx.send(UiMessage::LoginFailed("Login failed!".to_string()));
                }
            }
        });
    }

    /// Clear the session and return to the login panel.
    pub fn logout(&mut self) {
        self.session.logout();
        self.api.clear_token();
        self.staffs.clear();
        self.orders.clear();
        self.payments.clear();
        self.profile_draft = ProfileDraft::default();
        self.profile_edit_mode = false;
        self.account_error = None;
        self.current_panel = Panel::Login;
        self.log_info("Signed out");
    }

    /// Fetch the staff directory. An explicit operation; create-success and
    /// the Refresh button both call it.
    pub fn refresh_staff(&mut self) {
        let api = self.api.clone();
        let tx = self.tx.clone();

        self.rt.spawn(async move {
            match api.fetch_all_staff().await {
                Ok(staffs) => {
                    let _ = tx.send(UiMessage::StaffLoaded(staffs));
                }
                Err(e) => {
                    let malformed = matches!(e, AppError::MalformedResponse(_));
                    let message = if malformed {
                        "Unexpected data format received".to_string()
                    } else {
                        "Failed to fetch staff members".to_string()
                    };
                    tracing::warn!("staff fetch failed: {e}");
                    let _ = tx.send(UiMessage::StaffLoadFailed { message, malformed });
                }
            }
        });
    }

    /// Create a staff member through the backend.
    pub fn create_staff(&mut self, data: CreateStaff) {
        let api = self.api.clone();
        let tx = self.tx.clone();

        self.rt.spawn(async move {
            match api.create_staff(&data).await {
                Ok(staff) => {
                    let _ = tx.send(UiMessage::StaffCreated(staff));
                }
                Err(e) => {
                    let _ = tx.send(UiMessage::OperationFailed(e.to_string()));
                }
            }
        });
    }

    /// Delete a staff member. Only reachable through the confirmation
    /// dialog.
    fn delete_staff(&mut self, id: i64) {
        let api = self.api.clone();
        let tx = self.tx.clone();

        self.rt.spawn(async move {
            match api.delete_staff(id).await {
                Ok(()) => {
                    let _ = tx.send(UiMessage::StaffDeleted(id));
                }
                Err(e) => {
                    let _ = tx.send(UiMessage::OperationFailed(e.to_string()));
                }
            }
        });
    }

    /// Navigate to the account panel in the given mode and start the
    /// combined fetch. Profile is always fetched; orders and payments are
    /// mutually exclusive per mode.
    ///
    /// A mode change always re-triggers the fetch, even with one in
    /// flight; the superseded fetch may still resolve and overwrite state.
    /// Only a same-mode re-entry is suppressed while loading.
    pub fn open_account(&mut self, mode: AccountMode) {
        self.current_panel = Panel::Account;
        let mode_changed = self.account_mode != mode;
        self.account_mode = mode;

        if !self.session.is_authenticated() || (self.account_loading && !mode_changed) {
            return;
        }

        self.account_loading = true;
        self.account_error = None;
        self.profile_edit_mode = false;

        let api = self.api.clone();
        let tx = self.tx.clone();

        self.rt.spawn(async move {
            let result = async {
                let profile = api.get_user_info().await?;
                let _ = tx.send(UiMessage::ProfileLoaded(profile));

                match mode {
                    AccountMode::Orders => {
                        let orders = api.get_order_by_user().await?;
                        let _ = tx.send(UiMessage::OrdersLoaded(orders));
                    }
                    AccountMode::Payments => {
                        let payments = api.fetch_all_payment().await?;
                        let _ = tx.send(UiMessage::PaymentsLoaded(payments));
                    }
                }
                Ok::<(), AppError>(())
            }
            .await;

            if let Err(e) = result {
                tracing::warn!("account fetch failed: {e}");
                let _ = tx.send(UiMessage::AccountLoadFailed(
                    "Unable to load data. Please try again later.".to_string(),
                ));
            }
        });
    }

    /// Save the profile draft. Fails locally without a password; the
    /// password is cleared after a successful save.
    pub fn save_profile(&mut self) {
        if !self.profile_draft.has_password() {
            self.error_message = Some("Please enter your password to update your profile.".to_string());
            return;
        }

        let draft = self.profile_draft.clone();
        let api = self.api.clone();
        let tx = self.tx.clone();

        self.rt.spawn(async move {
            match api.update_user_info(&draft).await {
                Ok(profile) => {
                    let _ = tx.send(UiMessage::ProfileSaved(profile));
                }
                Err(e) => {
                    let _ = tx.send(UiMessage::OperationFailed(e.to_string()));
                }
            }
        });
    }

    /// Confirm delivery for a completed order. On success only that order
    /// flips its flag; no refetch.
    pub fn confirm_delivered(&mut self, order_id: i64) {
        let api = self.api.clone();
        let tx = self.tx.clone();

        self.rt.spawn(async move {
            match api.update_is_delivered(order_id).await {
                Ok(()) => {
                    let _ = tx.send(UiMessage::DeliveryConfirmed(order_id));
                }
                Err(e) => {
                    let _ = tx.send(UiMessage::OperationFailed(format!("Failed to update order: {e}")));
                }
            }
        });
    }

    /// Persist UI preferences; failures are logged, never fatal.
    fn save_config(&self) {
        let path = AppConfig::default_path();
        if let Err(e) = self.config.save(&path) {
            tracing::error!("Failed to save config: {e}");
        }
    }

    /// Poll async operation results.
    fn poll_async_results(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            match msg {
                UiMessage::LoginSucceeded { email, token } => {
                    self.api.set_token(&token);
                    self.session.login(email.clone(), token);
                    self.login_state = LoginState::Idle;
                    self.login_password.clear();
                    self.success_message = Some("Login successful!".to_string());
                    self.log_success(format!("Signed in as {email}"));
                    if self.config.ui.remember_email {
                        self.config.ui.last_email = email;
                        self.save_config();
                    }
                    self.current_panel = Panel::Staff;
                    self.refresh_staff();
                }
                UiMessage::LoginFailed(message) => {
                    self.login_state = LoginState::Idle;
                    self.error_message = Some(message.clone());
                    self.log_error(message);
                }
                UiMessage::StaffLoaded(staffs) => {
                    self.staffs = staffs;
                }
                UiMessage::StaffLoadFailed { message, malformed } => {
                    // Malformed response empties the list; transport errors
                    // keep the prior state.
                    if malformed {
                        self.staffs.clear();
                    }
                    self.error_message = Some(message.clone());
                    self.log_error(message);
                }
                UiMessage::StaffCreated(staff) => {
                    self.success_message = Some(format!("Staff '{}' created", staff.name));
                    self.log_success(format!("Created staff '{}'", staff.email));
                    self.staff_form.reset();
                    // Full reload so the list reflects backend-assigned fields
                    self.refresh_staff();
                }
                UiMessage::StaffDeleted(id) => {
                    self.staffs.retain(|s| s.id != id);
                    self.delete_state = DeleteState::Idle;
                    self.success_message = Some("Staff deleted".to_string());
                    self.log_success("Staff deleted");
                }
                UiMessage::ProfileLoaded(profile) => {
                    self.profile_draft = ProfileDraft::from_profile(&profile);
                }
                UiMessage::OrdersLoaded(orders) => {
                    self.orders = orders;
                    self.account_loading = false;
                }
                UiMessage::PaymentsLoaded(payments) => {
                    self.payments = payments;
                    self.account_loading = false;
                }
                UiMessage::AccountLoadFailed(message) => {
                    self.account_loading = false;
                    self.account_error = Some(message.clone());
                    self.log_error(message);
                }
                UiMessage::ProfileSaved(profile) => {
                    self.profile_draft.merge_response(&profile);
                    self.profile_edit_mode = false;
                    self.success_message = Some("Profile updated".to_string());
                    self.log_success("Profile updated");
                }
                UiMessage::DeliveryConfirmed(order_id) => {
                    if mark_delivered(&mut self.orders, order_id) {
                        self.log_success(format!("Order {order_id} confirmed received"));
                    }
                }
                UiMessage::OperationFailed(message) => {
                    if matches!(self.delete_state, DeleteState::Deleting) {
                        self.delete_state = DeleteState::Idle;
                    }
                    self.error_message = Some(message.clone());
                    self.log_error(message);
                }
            }
        }
    }

    /// Render menu bar with navigation (authenticated sessions only).
    fn show_menu_bar(&mut self, ctx: &egui::Context) {
        if !self.session.is_authenticated() {
            return;
        }

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .selectable_label(self.current_panel == Panel::Staff, "Staff Directory")
                    .clicked()
                {
                    self.current_panel = Panel::Staff;
                    self.refresh_staff();
                }
                let on_orders = self.current_panel == Panel::Account && self.account_mode == AccountMode::Orders;
                if ui.selectable_label(on_orders, "My Account").clicked() {
                    self.open_account(AccountMode::Orders);
                }
                let on_payments = self.current_panel == Panel::Account && self.account_mode == AccountMode::Payments;
                if ui.selectable_label(on_payments, "Payments").clicked() {
                    self.open_account(AccountMode::Payments);
                }

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui.button("Sign out").clicked() {
                        self.logout();
                    }
                    ui.label(&self.session.email);
                });
            });
        });
    }

    /// Render status bar (display only, no interaction).
    fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar")
            .min_height(28.0)
            .show(ctx, |ui| {
                ui.disable();
                ui.horizontal(|ui| {
                    let (color, text) = if self.session.is_authenticated() {
                        (colors::SUCCESS, "Signed in")
                    } else {
                        (colors::NEUTRAL, "Not signed in")
                    };
                    ui.colored_label(color, text);

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if let Some(entry) = self.log_messages.last() {
                            let color = match entry.level {
                                LogLevel::Info => colors::NEUTRAL,
                                LogLevel::Success => colors::SUCCESS,
                                LogLevel::Error => colors::ERROR,
                            };
                            ui.colored_label(
                                color,
                                format!("{} {}", entry.timestamp.format("%H:%M:%S"), entry.message),
                            );
                        }
                    });
                });
            });
    }

    /// Render modal dialogs (error, success, delete confirmation).
    fn show_dialogs(&mut self, ctx: &egui::Context) {
        // Error dialog
        if let Some(ref error) = self.error_message.clone() {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.colored_label(colors::ERROR, error);
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.error_message = None;
                    }
                });
        }

        // Success dialog
        if let Some(ref msg) = self.success_message.clone() {
            egui::Window::new("Success")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.colored_label(colors::SUCCESS, msg);
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.success_message = None;
                    }
                });
        }

        // Delete confirmation dialog
        match self.delete_state.clone() {
            DeleteState::Idle => {}
            DeleteState::PendingConfirmation(staff) => {
                egui::Window::new("Delete Staff")
                    .collapsible(false)
                    .resizable(false)
                    .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                    .show(ctx, |ui| {
                        ui.label(format!("Delete staff '{}'?", staff.email));
                        ui.add_space(10.0);
                        ui.horizontal(|ui| {
                            if ui.button("Cancel").clicked() {
                                self.delete_state = DeleteState::Idle;
                            }
                            if ui.button("Delete").clicked() {
                                self.log_info(format!("Deleting staff: {}", staff.email));
                                self.delete_staff(staff.id);
                                self.delete_state = DeleteState::Deleting;
                            }
                        });
                    });
            }
            DeleteState::Deleting => {
                egui::Window::new("Delete Staff")
                    .collapsible(false)
                    .resizable(false)
                    .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                    .show(ctx, |ui| {
                        ui.horizontal(|ui| {
                            ui.spinner();
                            ui.label("Deleting...");
                        });
                    });
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Poll async results
        self.poll_async_results();

        // Request repaint during async operations
        if matches!(self.login_state, LoginState::Submitting)
            || matches!(self.delete_state, DeleteState::Deleting)
            || self.account_loading
        {
            ctx.request_repaint();
        }

        self.show_menu_bar(ctx);
        self.show_status_bar(ctx);
        self.show_dialogs(ctx);

        egui::CentralPanel::default().show(ctx, |ui| match self.current_panel {
            Panel::Login => login_panel::show(self, ui),
            Panel::Staff => staff_panel::show(self, ui),
            Panel::Account => account_panel::show(self, ui),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::order::OrderItem;
    use chrono::Utc;

    fn test_app() -> App {
        let mut config = AppConfig::default();
        config.ui.remember_email = false;
        let api = ApiClient::new("http://localhost:1", 5).unwrap();
        let rt = tokio::runtime::Runtime::new().unwrap();
        App::new(api, config, rt)
    }

    fn staff(id: i64, email: &str) -> Staff {
        Staff {
            id,
            name: String::new(),
            email: email.to_string(),
            address: String::new(),
            phone: String::new(),
            role_id: 1,
        }
    }

    #[test]
    fn test_confirmed_delete_removes_exactly_one() {
        let mut app = test_app();
        app.staffs = vec![staff(1, "a@x.test"), staff(2, "b@x.test")];
        app.delete_state = DeleteState::Deleting;

        app.tx.send(UiMessage::StaffDeleted(1)).unwrap();
        app.poll_async_results();

        assert_eq!(app.staffs.len(), 1);
        assert!(!app.staffs.iter().any(|s| s.id == 1));
        assert!(matches!(app.delete_state, DeleteState::Idle));
    }

    #[test]
    fn test_login_success_updates_session_and_navigates() {
        let mut app = test_app();
        app.login_state = LoginState::Submitting;

        app.tx
            .send(UiMessage::LoginSucceeded {
                email: "admin@shop.test".to_string(),
                token: "tok".to_string(),
            })
            .unwrap();
        app.poll_async_results();

        assert!(app.session.is_authenticated());
        assert_eq!(app.session.email, "admin@shop.test");
        assert_eq!(app.session.token, "tok");
        assert_eq!(app.current_panel, Panel::Staff);
        assert_eq!(app.login_state, LoginState::Idle);
    }

    #[test]
    fn test_login_failure_leaves_session_unauthenticated() {
        let mut app = test_app();
        app.login_state = LoginState::Submitting;

        app.tx.send(UiMessage::LoginFailed("Login failed!".to_string())).unwrap();
        app.poll_async_results();

        assert!(!app.session.is_authenticated());
        assert_eq!(app.login_state, LoginState::Idle);
        assert!(app.error_message.is_some());
    }

    #[test]
    fn test_malformed_load_empties_list_transport_keeps_it() {
        let mut app = test_app();
        app.staffs = vec![staff(1, "a@x.test")];

        app.tx
            .send(UiMessage::StaffLoadFailed {
                message: "transport".to_string(),
                malformed: false,
            })
            .unwrap();
        app.poll_async_results();
        assert_eq!(app.staffs.len(), 1);

        app.tx
            .send(UiMessage::StaffLoadFailed {
                message: "malformed".to_string(),
                malformed: true,
            })
            .unwrap();
        app.poll_async_results();
        assert!(app.staffs.is_empty());
    }

    #[test]
    fn test_submit_with_blank_password_fails_locally() {
        let mut app = test_app();
        app.login_email = "admin@shop.test".to_string();
        app.login_password = "   ".to_string();

        app.submit_login();

        // Validation failed before any gateway call was spawned
        assert_eq!(app.login_state, LoginState::Idle);
        assert!(app.error_message.is_some());
        assert!(!app.session.is_authenticated());
    }

    #[test]
    fn test_cancel_delete_leaves_list_unchanged() {
        let mut app = test_app();
        app.staffs = vec![staff(1, "a@x.test"), staff(2, "b@x.test")];
        app.delete_state = DeleteState::PendingConfirmation(app.staffs[0].clone());

        // Cancel path: back to Idle without touching the list
        app.delete_state = DeleteState::Idle;
        app.poll_async_results();

        assert_eq!(app.staffs.len(), 2);
        assert!(app.staffs.iter().any(|s| s.id == 1));
    }

    #[test]
    fn test_mode_switch_while_loading_retriggers_fetch() {
        let mut app = test_app();
        app.session.login("user@shop.test", "tok");
        app.account_mode = AccountMode::Orders;
        app.account_loading = true;
        app.profile_edit_mode = true;

        // Mode change is a dependency change: the fetch must start even
        // with one in flight.
        app.open_account(AccountMode::Payments);
        assert_eq!(app.account_mode, AccountMode::Payments);
        assert!(!app.profile_edit_mode);
        assert!(app.account_loading);

        // Same-mode re-entry while loading is suppressed.
        app.profile_edit_mode = true;
        app.open_account(AccountMode::Payments);
        assert!(app.profile_edit_mode);
    }

    #[test]
    fn test_delivery_confirmation_flips_only_target_order() {
        let mut app = test_app();
        let order = |id| Order {
            order_id: id,
            total: 10.0,
            status: OrderStatus::Completed,
            items: vec![OrderItem { quantity: 1 }],
            created_time: Utc::now(),
            is_delivered: false,
        };
        app.orders = vec![order(1), order(2)];

        app.tx.send(UiMessage::DeliveryConfirmed(2)).unwrap();
        app.poll_async_results();

        assert!(!app.orders[0].is_delivered);
        assert!(app.orders[1].is_delivered);
    }
}
