pub mod envelope;
pub mod format;
pub mod types;

pub use envelope::ApiEnvelope;
pub use format::ExportFormat;
pub use types::{
    Document, DocumentDraft, ExportRequest, Field, FieldOption, FieldType, FieldValue, Template,
    TemplateError, Values,
};
