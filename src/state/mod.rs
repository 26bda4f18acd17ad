//! State Management
//!
//! Global reactive application state and creation form drafts.

pub mod forms;
pub mod global;

pub use forms::{
    AnnouncementDraft, ClassDraft, Draft, InvoiceDraft, StudentDraft, TenantDraft,
};
pub use global::{provide_global_state, BackendStatus, GlobalState};
