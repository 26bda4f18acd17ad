//! HTTP API Client
//!
//! Functions for communicating with the EDmin REST API.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::state::global::{Announcement, Class, Invoice, Student, Tenant};

/// Default API base URL, overridable at build time
pub const DEFAULT_API_BASE: &str = match option_env!("EDMIN_API_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};

const STORAGE_KEY: &str = "edmin_api_url";

/// Get the API base URL from local storage or use the default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item(STORAGE_KEY) {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    normalize_base(&url)
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(STORAGE_KEY, url);
        }
    }
}

/// Normalize: remove trailing slashes so paths can be appended verbatim
fn normalize_base(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

// ============ Response Types ============

/// Body of the health probe endpoint
#[derive(Debug, serde::Deserialize)]
pub struct HealthResponse {
    pub message: String,
}

/// All five entity collections, fetched as one unit
#[derive(Clone, Debug, Default)]
pub struct Collections {
    pub tenants: Vec<Tenant>,
    pub students: Vec<Student>,
    pub classes: Vec<Class>,
    pub announcements: Vec<Announcement>,
    pub invoices: Vec<Invoice>,
}

// ============ Request Plumbing ============

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = Request::get(&format!("{}{}", get_api_base(), path))
        .header("Content-Type", "application/json")
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        // Non-2xx surfaces the bare status code as the message
        return Err(response.status().to_string());
    }

    response.json().await.map_err(|e| format!("Parse error: {}", e))
}

async fn post_json<T, B>(path: &str, body: &B) -> Result<T, String>
where
    T: DeserializeOwned,
    B: Serialize,
{
    let response = Request::post(&format!("{}{}", get_api_base(), path))
        .json(body)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(response.status().to_string());
    }

    response.json().await.map_err(|e| format!("Parse error: {}", e))
}

// ============ API Functions ============

/// Probe backend reachability
pub async fn check_health() -> Result<HealthResponse, String> {
    get_json("/").await
}

/// Fetch all tenants
pub async fn fetch_tenants() -> Result<Vec<Tenant>, String> {
    get_json("/tenants").await
}

/// Fetch all students
pub async fn fetch_students() -> Result<Vec<Student>, String> {
    get_json("/students").await
}

/// Fetch all classes
pub async fn fetch_classes() -> Result<Vec<Class>, String> {
    get_json("/classes").await
}

/// Fetch all announcements
pub async fn fetch_announcements() -> Result<Vec<Announcement>, String> {
    get_json("/announcements").await
}

/// Fetch all invoices
pub async fn fetch_invoices() -> Result<Vec<Invoice>, String> {
    get_json("/invoices").await
}

/// Fetch all five collections concurrently.
///
/// The requests are awaited jointly: if any one fails the whole batch
/// fails and the caller applies nothing.
pub async fn fetch_all() -> Result<Collections, String> {
    let (tenants, students, classes, announcements, invoices) = futures::try_join!(
        fetch_tenants(),
        fetch_students(),
        fetch_classes(),
        fetch_announcements(),
        fetch_invoices(),
    )?;

    Ok(Collections {
        tenants,
        students,
        classes,
        announcements,
        invoices,
    })
}

/// Create a new tenant
pub async fn create_tenant(name: &str, code: &str) -> Result<Tenant, String> {
    #[derive(serde::Serialize)]
    struct CreateTenantRequest {
        name: String,
        code: String,
    }

    post_json(
        "/tenants",
        &CreateTenantRequest {
            name: name.to_string(),
            code: code.to_string(),
        },
    )
    .await
}

/// Register a new student
pub async fn create_student(
    tenant_id: &str,
    student_number: &str,
    first_name: &str,
    last_name: &str,
    grade_level: &str,
) -> Result<Student, String> {
    #[derive(serde::Serialize)]
    struct CreateStudentRequest {
        tenant_id: String,
        student_number: String,
        first_name: String,
        last_name: String,
        grade_level: String,
    }

    post_json(
        "/students",
        &CreateStudentRequest {
            tenant_id: tenant_id.to_string(),
            student_number: student_number.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            grade_level: grade_level.to_string(),
        },
    )
    .await
}

/// Create a new class
pub async fn create_class(
    tenant_id: &str,
    name: &str,
    code: &str,
    subject: &str,
    grade_level: &str,
) -> Result<Class, String> {
    #[derive(serde::Serialize)]
    struct CreateClassRequest {
        tenant_id: String,
        name: String,
        code: String,
        subject: String,
        grade_level: String,
    }

    post_json(
        "/classes",
        &CreateClassRequest {
            tenant_id: tenant_id.to_string(),
            name: name.to_string(),
            code: code.to_string(),
            subject: subject.to_string(),
            grade_level: grade_level.to_string(),
        },
    )
    .await
}

/// Publish a new announcement
pub async fn create_announcement(
    tenant_id: &str,
    title: &str,
    message: &str,
) -> Result<Announcement, String> {
    #[derive(serde::Serialize)]
    struct CreateAnnouncementRequest {
        tenant_id: String,
        title: String,
        message: String,
    }

    post_json(
        "/announcements",
        &CreateAnnouncementRequest {
            tenant_id: tenant_id.to_string(),
            title: title.to_string(),
            message: message.to_string(),
        },
    )
    .await
}

/// Create a new invoice
pub async fn create_invoice(
    tenant_id: &str,
    student_id: &str,
    title: &str,
    amount: f64,
) -> Result<Invoice, String> {
    #[derive(serde::Serialize)]
    struct CreateInvoiceRequest {
        tenant_id: String,
        student_id: String,
        title: String,
        amount: f64,
    }

    post_json(
        "/invoices",
        &CreateInvoiceRequest {
            tenant_id: tenant_id.to_string(),
            student_id: student_id.to_string(),
            title: title.to_string(),
            amount,
        },
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_strips_trailing_slash() {
        assert_eq!(normalize_base("http://localhost:8000/"), "http://localhost:8000");
        assert_eq!(normalize_base("http://localhost:8000///"), "http://localhost:8000");
    }

    #[test]
    fn test_normalize_base_leaves_clean_urls_alone() {
        assert_eq!(normalize_base("https://api.example.com"), "https://api.example.com");
    }
}
