//! Creation Form Drafts
//!
//! One draft struct per creation form, holding field values as entered.
//! Required-field checking is a single rule shared by every entity rather
//! than a per-form copy.

/// A creation draft whose required fields can be enumerated.
///
/// `required_fields` is the per-entity rule table: one `(name, value)`
/// pair per field the backend expects. A draft is complete when every
/// required value is a non-empty string; incomplete drafts are never
/// submitted.
pub trait Draft {
    fn required_fields(&self) -> Vec<(&'static str, &str)>;

    fn is_complete(&self) -> bool {
        self.required_fields().iter().all(|(_, value)| !value.is_empty())
    }
}

/// Draft for the tenant creation form
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TenantDraft {
    pub name: String,
    pub code: String,
}

impl Draft for TenantDraft {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![("name", &self.name), ("code", &self.code)]
    }
}

/// Draft for the student registration form
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StudentDraft {
    pub tenant_id: String,
    pub student_number: String,
    pub first_name: String,
    pub last_name: String,
    pub grade_level: String,
}

impl Draft for StudentDraft {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("tenant_id", &self.tenant_id),
            ("student_number", &self.student_number),
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("grade_level", &self.grade_level),
        ]
    }
}

/// Draft for the class creation form
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClassDraft {
    pub tenant_id: String,
    pub name: String,
    pub code: String,
    pub subject: String,
    pub grade_level: String,
}

impl Draft for ClassDraft {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("tenant_id", &self.tenant_id),
            ("name", &self.name),
            ("code", &self.code),
            ("subject", &self.subject),
            ("grade_level", &self.grade_level),
        ]
    }
}

/// Draft for the announcement form
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnnouncementDraft {
    pub tenant_id: String,
    pub title: String,
    pub message: String,
}

impl Draft for AnnouncementDraft {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("tenant_id", &self.tenant_id),
            ("title", &self.title),
            ("message", &self.message),
        ]
    }
}

/// Draft for the invoice creation form.
///
/// `amount` stays a string until submission; the parse rule is the one
/// entity-specific special case on top of the shared required-field rule.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InvoiceDraft {
    pub tenant_id: String,
    pub student_id: String,
    pub title: String,
    pub amount: String,
}

impl InvoiceDraft {
    /// Amount as submitted to the backend.
    ///
    /// `None` when the text does not parse to a finite, non-zero number,
    /// in which case the draft is not submittable.
    pub fn parsed_amount(&self) -> Option<f64> {
        self.amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|amount| amount.is_finite() && *amount != 0.0)
    }
}

impl Draft for InvoiceDraft {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("tenant_id", &self.tenant_id),
            ("student_id", &self.student_id),
            ("title", &self.title),
            ("amount", &self.amount),
        ]
    }

    fn is_complete(&self) -> bool {
        self.required_fields().iter().all(|(_, value)| !value.is_empty())
            && self.parsed_amount().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_drafts_are_incomplete() {
        assert!(!TenantDraft::default().is_complete());
        assert!(!StudentDraft::default().is_complete());
        assert!(!ClassDraft::default().is_complete());
        assert!(!AnnouncementDraft::default().is_complete());
        assert!(!InvoiceDraft::default().is_complete());
    }

    #[test]
    fn test_tenant_draft_requires_every_field() {
        let draft = TenantDraft {
            name: "Acme".to_string(),
            code: String::new(),
        };
        assert!(!draft.is_complete());

        let draft = TenantDraft {
            name: "Acme".to_string(),
            code: "ACM".to_string(),
        };
        assert!(draft.is_complete());
    }

    #[test]
    fn test_student_draft_rule_table_covers_payload_fields() {
        let draft = StudentDraft::default();
        let names: Vec<&str> = draft.required_fields().iter().map(|(n, _)| *n).collect();
        assert_eq!(
            names,
            ["tenant_id", "student_number", "first_name", "last_name", "grade_level"]
        );
    }

    #[test]
    fn test_invoice_amount_must_be_nonzero() {
        let mut draft = InvoiceDraft {
            tenant_id: "t1".to_string(),
            student_id: "s1".to_string(),
            title: "Tuition".to_string(),
            amount: "0".to_string(),
        };
        assert_eq!(draft.parsed_amount(), None);
        assert!(!draft.is_complete());

        draft.amount = "0.0".to_string();
        assert!(!draft.is_complete());

        draft.amount = "149.50".to_string();
        assert_eq!(draft.parsed_amount(), Some(149.50));
        assert!(draft.is_complete());
    }

    #[test]
    fn test_invoice_amount_rejects_garbage() {
        let draft = InvoiceDraft {
            tenant_id: "t1".to_string(),
            student_id: "s1".to_string(),
            title: "Tuition".to_string(),
            amount: "lots".to_string(),
        };
        assert_eq!(draft.parsed_amount(), None);
        assert!(!draft.is_complete());

        let draft = InvoiceDraft {
            amount: "NaN".to_string(),
            ..draft
        };
        assert_eq!(draft.parsed_amount(), None);
    }

    #[test]
    fn test_invoice_amount_tolerates_surrounding_whitespace() {
        let draft = InvoiceDraft {
            tenant_id: "t1".to_string(),
            student_id: "s1".to_string(),
            title: "Tuition".to_string(),
            amount: " 25 ".to_string(),
        };
        assert_eq!(draft.parsed_amount(), Some(25.0));
    }

    #[test]
    fn test_negative_amounts_are_submittable() {
        // Credit notes come through the same form
        let draft = InvoiceDraft {
            tenant_id: "t1".to_string(),
            student_id: "s1".to_string(),
            title: "Refund".to_string(),
            amount: "-10".to_string(),
        };
        assert_eq!(draft.parsed_amount(), Some(-10.0));
        assert!(draft.is_complete());
    }
}
