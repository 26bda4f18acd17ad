//! Global Application State
//!
//! Reactive state management using Leptos signals. Every collection and
//! every form draft lives here; components read and write them through
//! the signal handles only.

use leptos::*;

use crate::api::{self, Collections};
use crate::state::forms::{
    AnnouncementDraft, ClassDraft, InvoiceDraft, StudentDraft, TenantDraft,
};

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Result of the backend health probe
    pub status: RwSignal<BackendStatus>,
    /// Tenant records from the API
    pub tenants: RwSignal<Vec<Tenant>>,
    /// Student records from the API
    pub students: RwSignal<Vec<Student>>,
    /// Class records from the API
    pub classes: RwSignal<Vec<Class>>,
    /// Announcement records from the API
    pub announcements: RwSignal<Vec<Announcement>>,
    /// Invoice records from the API
    pub invoices: RwSignal<Vec<Invoice>>,
    /// Tenant creation form draft
    pub tenant_form: RwSignal<TenantDraft>,
    /// Student registration form draft
    pub student_form: RwSignal<StudentDraft>,
    /// Class creation form draft
    pub class_form: RwSignal<ClassDraft>,
    /// Announcement form draft
    pub announcement_form: RwSignal<AnnouncementDraft>,
    /// Invoice creation form draft
    pub invoice_form: RwSignal<InvoiceDraft>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Timestamp of the last successful collection refresh
    pub last_refresh: RwSignal<Option<i64>>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Backend reachability as shown in the header
#[derive(Clone, Debug, PartialEq)]
pub enum BackendStatus {
    Checking,
    Connected(String),
    Unreachable,
}

impl BackendStatus {
    /// The string rendered next to "Backend:" in the header
    pub fn label(&self) -> String {
        match self {
            BackendStatus::Checking => "Checking...".to_string(),
            BackendStatus::Connected(message) => format!("✅ {}", message),
            BackendStatus::Unreachable => "❌ Backend not reachable".to_string(),
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, BackendStatus::Connected(_))
    }
}

/// Tenant record from the API
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Tenant {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub status: Option<String>,
}

impl Tenant {
    /// Display status, "active" when the backend omits it
    pub fn status_label(&self) -> &str {
        self.status
            .as_deref()
            .filter(|status| !status.is_empty())
            .unwrap_or("active")
    }
}

/// Student record from the API
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Student {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub tenant_id: String,
    pub student_number: String,
    pub first_name: String,
    pub last_name: String,
    pub grade_level: String,
}

impl Student {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Class record from the API
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Class {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub tenant_id: String,
    pub name: String,
    pub code: String,
    pub subject: String,
    pub grade_level: String,
}

/// Announcement record from the API
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Announcement {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub tenant_id: String,
    pub title: String,
    pub message: String,
}

/// Invoice record from the API
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Invoice {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub tenant_id: String,
    #[serde(default)]
    pub student_id: String,
    pub title: String,
    pub amount: f64,
    #[serde(default)]
    pub status: String,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        status: create_rw_signal(BackendStatus::Checking),
        tenants: create_rw_signal(Vec::new()),
        students: create_rw_signal(Vec::new()),
        classes: create_rw_signal(Vec::new()),
        announcements: create_rw_signal(Vec::new()),
        invoices: create_rw_signal(Vec::new()),
        tenant_form: create_rw_signal(TenantDraft::default()),
        student_form: create_rw_signal(StudentDraft::default()),
        class_form: create_rw_signal(ClassDraft::default()),
        announcement_form: create_rw_signal(AnnouncementDraft::default()),
        invoice_form: create_rw_signal(InvoiceDraft::default()),
        loading: create_rw_signal(false),
        last_refresh: create_rw_signal(None),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Probe the backend once and record the result.
    ///
    /// Failure only changes the status indicator; collections keep
    /// whatever they held.
    pub async fn probe_backend(&self) {
        match api::check_health().await {
            Ok(health) => self.status.set(BackendStatus::Connected(health.message)),
            Err(_) => self.status.set(BackendStatus::Unreachable),
        }
    }

    /// Re-fetch every collection as one unit.
    ///
    /// The five fetches run concurrently and are awaited jointly. When the
    /// batch fails nothing is applied: the UI keeps working on the lists
    /// it already had.
    pub async fn refresh_all(&self) {
        match api::fetch_all().await {
            Ok(collections) => self.apply_collections(collections),
            Err(e) => {
                web_sys::console::error_1(
                    &format!("Failed to refresh collections: {}", e).into(),
                );
            }
        }
    }

    /// Replace all five collections and stamp the refresh time
    pub fn apply_collections(&self, collections: Collections) {
        self.tenants.set(collections.tenants);
        self.students.set(collections.students);
        self.classes.set(collections.classes);
        self.announcements.set(collections.announcements);
        self.invoices.set(collections.invoices);
        self.last_refresh.set(Some(chrono::Utc::now().timestamp_millis()));
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_label_contains_backend_message() {
        let status = BackendStatus::Connected("ok".to_string());
        assert!(status.label().contains("ok"));
        assert!(status.is_connected());
    }

    #[test]
    fn test_unreachable_label_is_fixed() {
        assert_eq!(BackendStatus::Unreachable.label(), "❌ Backend not reachable");
        assert!(!BackendStatus::Unreachable.is_connected());
        assert!(!BackendStatus::Checking.is_connected());
    }

    #[test]
    fn test_tenant_status_defaults_to_active() {
        let tenant: Tenant =
            serde_json::from_str(r#"{"id":"t1","name":"Acme","code":"ACM"}"#).unwrap();
        assert_eq!(tenant.status_label(), "active");

        let tenant: Tenant = serde_json::from_str(
            r#"{"id":"t1","name":"Acme","code":"ACM","status":"suspended"}"#,
        )
        .unwrap();
        assert_eq!(tenant.status_label(), "suspended");
    }

    #[test]
    fn test_tenant_blank_status_reads_as_active() {
        let tenant: Tenant = serde_json::from_str(
            r#"{"id":"t1","name":"Acme","code":"ACM","status":""}"#,
        )
        .unwrap();
        assert_eq!(tenant.status_label(), "active");
    }

    #[test]
    fn test_invoice_deserializes_numeric_amount() {
        let invoice: Invoice = serde_json::from_str(
            r#"{"id":"i1","tenant_id":"t1","student_id":"s1","title":"Tuition","amount":149.5,"status":"unpaid"}"#,
        )
        .unwrap();
        assert_eq!(invoice.amount, 149.5);
        assert_eq!(invoice.status, "unpaid");
    }

    #[test]
    fn test_student_full_name() {
        let student = Student {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            ..Default::default()
        };
        assert_eq!(student.full_name(), "Ada Lovelace");
    }
}
