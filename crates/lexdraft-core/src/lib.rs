//! Document editing session
//!
//! An [`EditSession`] owns everything one editing flow needs: the template,
//! the value map being filled in, the synthesized validation schema, the
//! current per-field error map, and a bounded undo/redo history of value
//! snapshots. Nothing here is shared or global; drop the session and the
//! state is gone.

use std::collections::BTreeMap;

use shared_types::{DocumentDraft, FieldValue, Template, Values};
use thiserror::Error;
use validation_engine::{build_schema, Schema, SchemaError, ValidationReport};

/// Snapshots kept for undo/redo; the oldest are dropped beyond this
const MAX_HISTORY: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("Template has no field '{0}'")]
    UnknownField(String),
}

/// One document-editing flow over a single template
pub struct EditSession {
    template: Template,
    schema: Schema,
    values: Values,
    errors: BTreeMap<String, String>,
    history: Vec<Values>,
    cursor: usize,
}

impl EditSession {
    /// Start a session with an empty value map
    pub fn new(template: Template) -> Result<Self, SessionError> {
        let schema = build_schema(&template)?;
        Ok(Self {
            template,
            schema,
            values: Values::new(),
            errors: BTreeMap::new(),
            history: vec![Values::new()],
            cursor: 0,
        })
    }

    /// Resume a session from previously saved values (editing an existing
    /// document)
    pub fn with_values(template: Template, values: Values) -> Result<Self, SessionError> {
        let schema = build_schema(&template)?;
        Ok(Self {
            template,
            schema,
            values: values.clone(),
            errors: BTreeMap::new(),
            history: vec![values],
            cursor: 0,
        })
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn values(&self) -> &Values {
        &self.values
    }

    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    /// Set one field's value
    ///
    /// Clears that field's error so stale messages disappear as the user
    /// types; the full map is re-checked on the next `validate`.
    pub fn set_value(
        &mut self,
        field_id: &str,
        value: impl Into<FieldValue>,
    ) -> Result<(), SessionError> {
        if self.template.field(field_id).is_none() {
            return Err(SessionError::UnknownField(field_id.to_string()));
        }
        self.values.insert(field_id.to_string(), value.into());
        self.errors.remove(field_id);
        self.record();
        Ok(())
    }

    /// Remove one field's value
    pub fn clear_value(&mut self, field_id: &str) -> Result<(), SessionError> {
        if self.template.field(field_id).is_none() {
            return Err(SessionError::UnknownField(field_id.to_string()));
        }
        self.values.remove(field_id);
        self.errors.remove(field_id);
        self.record();
        Ok(())
    }

    /// Step back one snapshot; returns whether a move happened
    pub fn undo(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.values = self.history[self.cursor].clone();
        true
    }

    /// Step forward one snapshot; returns whether a move happened
    pub fn redo(&mut self) -> bool {
        if self.cursor + 1 >= self.history.len() {
            return false;
        }
        self.cursor += 1;
        self.values = self.history[self.cursor].clone();
        true
    }

    /// Validate the current values and store the per-field errors
    pub fn validate(&mut self) -> ValidationReport {
        let report = self.schema.validate(&self.values);
        if !report.success {
            tracing::debug!(
                template = %self.template.id,
                failing_fields = report.errors.len(),
                "validation failed"
            );
        }
        self.errors = report.errors.clone();
        report
    }

    /// Render the template body from the current values
    pub fn preview(&self) -> String {
        template_engine::preview(&self.template, &self.values)
    }

    /// Assemble the persistence payload
    ///
    /// The title defaults to the template title when none is given.
    pub fn draft(&self, title: Option<String>) -> DocumentDraft {
        DocumentDraft {
            template_id: self.template.id.clone(),
            template_name: self.template.title.clone(),
            title: title.unwrap_or_else(|| self.template.title.clone()),
            values: self.values.clone(),
            content: self.preview(),
        }
    }

    /// Record the current values as a new snapshot, truncating any redo
    /// branch and dropping the oldest snapshot past capacity
    fn record(&mut self) {
        self.history.truncate(self.cursor + 1);
        self.history.push(self.values.clone());
        if self.history.len() > MAX_HISTORY {
            self.history.remove(0);
        }
        self.cursor = self.history.len() - 1;
    }
}
