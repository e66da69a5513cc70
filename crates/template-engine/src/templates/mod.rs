//! Static template catalog

mod embedded;
mod registry;

pub use registry::{get_template, list_templates};
