//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod announcement_panel;
pub mod class_panel;
pub mod fields;
pub mod invoice_panel;
pub mod loading;
pub mod nav;
pub mod section;
pub mod stat_card;
pub mod student_panel;
pub mod tenant_panel;
pub mod toast;

pub use announcement_panel::AnnouncementPanel;
pub use class_panel::ClassPanel;
pub use invoice_panel::InvoicePanel;
pub use nav::Nav;
pub use section::Section;
pub use stat_card::StatCard;
pub use student_panel::StudentPanel;
pub use tenant_panel::TenantPanel;
pub use toast::Toast;
