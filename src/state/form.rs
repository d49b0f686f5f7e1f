//! Form entity: lifecycle status, ordered fields and completion

use super::field::{Field, FieldId};
use chrono::{DateTime, Utc};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a form, assigned at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FormId(Uuid);

impl FormId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FormId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for FormId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Lifecycle status. Strictly forward-moving: draft → published → submitted.
///
/// Editing fields never moves status backward; a published form stays
/// published while its answers change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormStatus {
    #[default]
    Draft,
    Published,
    Submitted,
}

impl FormStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Published => "Published",
            Self::Submitted => "Submitted",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Self::Draft => Color::DarkGray,
            Self::Published => Color::Green,
            Self::Submitted => Color::Magenta,
        }
    }

    /// Submitted forms accept no further transitions
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Submitted)
    }
}

/// A named, ordered collection of fields with lifecycle metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Form {
    pub id: FormId,
    pub title: String,
    /// Order is meaningful: it is the display and fill order
    pub fields: Vec<Field>,
    pub status: FormStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Bumped by the store on every save, never here
    pub version: u32,
}

impl Form {
    /// Create an empty draft form
    pub fn new(title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: FormId::new(),
            title: title.into(),
            fields: Vec::new(),
            status: FormStatus::Draft,
            created_at: now,
            updated_at: now,
            version: 1,
        }
    }

    /// First field matching `id`
    #[allow(dead_code)]
    pub fn field(&self, id: FieldId) -> Option<&Field> {
        self.fields.iter().find(|f| f.id == id)
    }

    pub fn field_mut(&mut self, id: FieldId) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.id == id)
    }

    /// Move the field at `from` to `to`, shifting the fields in between by
    /// one position. Equal indices are a no-op.
    ///
    /// Both indices must be within `0..self.fields.len()`.
    pub fn move_field(&mut self, from: usize, to: usize) {
        if from == to {
            return;
        }
        let field = self.fields.remove(from);
        self.fields.insert(to, field);
    }

    /// Fraction of fields with a non-empty trimmed answer, as 0–100.
    /// Defined as 0 for a form with no fields.
    pub fn completion_percentage(&self) -> f64 {
        if self.fields.is_empty() {
            return 0.0;
        }
        let filled = self.fields.iter().filter(|f| f.is_filled()).count();
        100.0 * filled as f64 / self.fields.len() as f64
    }

    /// Integral form of the 100% gate, so submission never compares floats
    pub fn is_complete(&self) -> bool {
        !self.fields.is_empty() && self.fields.iter().all(|f| f.is_filled())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FieldPatch;

    fn form_with_fields(n: usize) -> Form {
        let mut form = Form::new("Test Form");
        for _ in 0..n {
            form.fields.push(Field::new());
        }
        form
    }

    mod status {
        use super::*;

        #[test]
        fn test_default_is_draft() {
            assert_eq!(FormStatus::default(), FormStatus::Draft);
        }

        #[test]
        fn test_only_submitted_is_terminal() {
            assert!(!FormStatus::Draft.is_terminal());
            assert!(!FormStatus::Published.is_terminal());
            assert!(FormStatus::Submitted.is_terminal());
        }

        #[test]
        fn test_serializes_lowercase() {
            assert_eq!(
                serde_json::to_string(&FormStatus::Published).unwrap(),
                "\"published\""
            );
        }
    }

    mod entity {
        use super::*;

        #[test]
        fn test_new_form_is_empty_draft_at_version_one() {
            let form = Form::new("Survey");
            assert_eq!(form.title, "Survey");
            assert!(form.fields.is_empty());
            assert_eq!(form.status, FormStatus::Draft);
            assert_eq!(form.version, 1);
            assert_eq!(form.created_at, form.updated_at);
        }

        #[test]
        fn test_field_lookup_by_id() {
            let mut form = form_with_fields(3);
            let id = form.fields[1].id;
            form.field_mut(id)
                .unwrap()
                .apply(FieldPatch::Label("middle".into()));
            assert_eq!(form.field(id).unwrap().label, "middle");
            assert!(form.field(FieldId::new()).is_none());
        }
    }

    mod reorder {
        use super::*;

        fn labelled_form() -> Form {
            let mut form = form_with_fields(3);
            for (field, label) in form.fields.iter_mut().zip(["A", "B", "C"]) {
                field.label = label.to_string();
            }
            form
        }

        fn labels(form: &Form) -> Vec<&str> {
            form.fields.iter().map(|f| f.label.as_str()).collect()
        }

        #[test]
        fn test_move_first_to_last() {
            let mut form = labelled_form();
            form.move_field(0, 2);
            assert_eq!(labels(&form), vec!["B", "C", "A"]);
        }

        #[test]
        fn test_move_last_to_first() {
            let mut form = labelled_form();
            form.move_field(2, 0);
            assert_eq!(labels(&form), vec!["C", "A", "B"]);
        }

        #[test]
        fn test_equal_indices_is_noop() {
            let mut form = labelled_form();
            form.move_field(1, 1);
            assert_eq!(labels(&form), vec!["A", "B", "C"]);
        }
    }

    mod completion {
        use super::*;

        #[test]
        fn test_no_fields_is_zero() {
            let form = form_with_fields(0);
            assert_eq!(form.completion_percentage(), 0.0);
            assert!(!form.is_complete());
        }

        #[test]
        fn test_none_filled_is_zero() {
            let form = form_with_fields(3);
            assert_eq!(form.completion_percentage(), 0.0);
        }

        #[test]
        fn test_two_of_three_filled() {
            let mut form = form_with_fields(3);
            form.fields[0].value = "yes".to_string();
            form.fields[1].value = "no".to_string();
            let pct = form.completion_percentage();
            assert!((pct - 200.0 / 3.0).abs() < 1e-9);
            assert_eq!(format!("{pct:.0}"), "67"); // display convention
            assert!(!form.is_complete());
        }

        #[test]
        fn test_whitespace_only_answers_do_not_count() {
            let mut form = form_with_fields(2);
            form.fields[0].value = "  ".to_string();
            form.fields[1].value = "done".to_string();
            assert!((form.completion_percentage() - 50.0).abs() < 1e-9);
        }

        #[test]
        fn test_all_filled_is_complete() {
            let mut form = form_with_fields(3);
            for field in &mut form.fields {
                field.value = "x".to_string();
            }
            assert_eq!(form.completion_percentage(), 100.0);
            assert!(form.is_complete());
        }
    }
}
