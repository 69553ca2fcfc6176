//! Data models for staff, user profiles, orders, and payments.

pub mod order;
pub mod payment;
pub mod staff;
pub mod user;

pub use order::{Order, OrderItem, OrderStatus};
pub use payment::Payment;
pub use staff::{CreateStaff, ImportedStaff, Staff};
pub use user::{ProfileDraft, UserProfile};
