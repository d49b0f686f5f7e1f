//! The form store: saved collection plus the current working copy.
//!
//! All mutation of form state goes through this container. It is owned by
//! the [`App`](crate::app::App) and passed by reference to whatever needs
//! it; there is no ambient/global state.
//!
//! Operations follow a silent-guard convention: a precondition that does
//! not hold (no current form, empty form on publish, incomplete form on
//! submit) declines the operation instead of erroring, mirroring the UI's
//! disabled controls.

use super::field::{Field, FieldId, FieldPatch};
use super::form::{Form, FormStatus};
use chrono::Utc;

/// In-memory container for the saved forms collection and the single
/// "current" form being edited or filled.
///
/// The current form is a working copy: until [`FormStore::save_form`]
/// commits it, the saved collection is untouched.
#[derive(Debug, Default)]
pub struct FormStore {
    /// Saved forms, in insertion order
    forms: Vec<Form>,
    current: Option<Form>,
}

impl FormStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Saved collection, insertion-ordered
    pub fn forms(&self) -> &[Form] {
        &self.forms
    }

    pub fn current_form(&self) -> Option<&Form> {
        self.current.as_ref()
    }

    /// Create an empty draft and make it current. Any prior current form
    /// is discarded without being persisted.
    pub fn create_form(&mut self, title: impl Into<String>) -> &Form {
        let form = Form::new(title);
        tracing::debug!(form_id = %form.id, "created form");
        self.current.insert(form)
    }

    /// Replace the working reference. The saved collection is unaffected.
    pub fn set_current_form(&mut self, form: Form) {
        self.current = Some(form);
    }

    /// Clear the working reference
    pub fn reset_current_form(&mut self) {
        self.current = None;
    }

    /// Stamp and persist a form: `updated_at` becomes now, `version` is
    /// incremented from the passed form's version (not looked up by id),
    /// and the result is upserted into the collection by id: replaced in
    /// place when the id exists, appended otherwise. The stamped form also
    /// becomes the current form.
    pub fn save_form(&mut self, mut form: Form) -> Form {
        form.updated_at = Utc::now();
        form.version += 1;

        match self.forms.iter().position(|f| f.id == form.id) {
            Some(index) => self.forms[index] = form.clone(),
            None => self.forms.push(form.clone()),
        }

        tracing::info!(form_id = %form.id, version = form.version, status = form.status.label(), "saved form");
        self.current = Some(form.clone());
        form
    }

    /// Save the current working copy as-is (the "Save as Draft" path).
    /// No current form: no-op, returns `None`.
    pub fn save_current(&mut self) -> Option<Form> {
        let form = self.current.clone()?;
        Some(self.save_form(form))
    }

    /// Publish the current form. Declined (returns `false`) when there is
    /// no current form or it has no fields; the gate lives here so it
    /// cannot be bypassed by a UI that forgets to disable a button.
    pub fn publish_form(&mut self) -> bool {
        let Some(form) = self.current.clone() else {
            return false;
        };
        if form.fields.is_empty() {
            tracing::debug!(form_id = %form.id, "publish declined: form has no fields");
            return false;
        }
        self.save_form(Form {
            status: FormStatus::Published,
            ..form
        });
        true
    }

    /// Submit the current form. Allowed only from `Published` and only at
    /// 100% completion; otherwise declined and status is left untouched.
    pub fn submit_form(&mut self) -> bool {
        let Some(form) = self.current.clone() else {
            return false;
        };
        if form.status != FormStatus::Published || !form.is_complete() {
            tracing::debug!(
                form_id = %form.id,
                status = form.status.label(),
                completion = form.completion_percentage(),
                "submit declined"
            );
            return false;
        }
        self.save_form(Form {
            status: FormStatus::Submitted,
            ..form
        });
        true
    }

    /// Replace the current form's title in place. Versions are only bumped
    /// by saves, never by edits.
    pub fn update_form_title(&mut self, title: impl Into<String>) {
        if let Some(form) = self.current.as_mut() {
            form.title = title.into();
        }
    }

    /// Apply one patch to the first field matching `field_id` on the
    /// current form. Unknown ids and a missing current form are no-ops.
    pub fn update_form_field(&mut self, field_id: FieldId, patch: FieldPatch) {
        if let Some(field) = self
            .current
            .as_mut()
            .and_then(|form| form.field_mut(field_id))
        {
            field.apply(patch);
        }
    }

    /// Append a freshly created field to the current form, returning its id
    pub fn add_form_field(&mut self) -> Option<FieldId> {
        let form = self.current.as_mut()?;
        let field = Field::new();
        let id = field.id;
        form.fields.push(field);
        Some(id)
    }

    /// Remove the first field matching `field_id`, preserving the order of
    /// the rest. Unknown ids are a no-op.
    pub fn remove_form_field(&mut self, field_id: FieldId) {
        if let Some(form) = self.current.as_mut() {
            if let Some(index) = form.fields.iter().position(|f| f.id == field_id) {
                form.fields.remove(index);
            }
        }
    }

    /// Move the field at `from` to `to` on the current form.
    ///
    /// Both indices must be within `0..fields.len()`; equal indices no-op.
    pub fn reorder_fields(&mut self, from: usize, to: usize) {
        if let Some(form) = self.current.as_mut() {
            form.move_field(from, to);
        }
    }

    /// Append one empty option to a single-select field
    pub fn add_field_option(&mut self, field_id: FieldId) {
        if let Some(field) = self
            .current
            .as_mut()
            .and_then(|form| form.field_mut(field_id))
        {
            field.add_option();
        }
    }

    /// Remove one option by position; declined while only the minimum
    /// number of options remains
    pub fn remove_field_option(&mut self, field_id: FieldId, index: usize) {
        if let Some(field) = self
            .current
            .as_mut()
            .and_then(|form| form.field_mut(field_id))
        {
            field.remove_option(index);
        }
    }

    /// Saved forms with the given status, in insertion order
    pub fn forms_by_status(&self, status: FormStatus) -> Vec<&Form> {
        self.forms.iter().filter(|f| f.status == status).collect()
    }
}
