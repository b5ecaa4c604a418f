pub mod defaults;
pub mod error;
pub mod field_set;
pub mod prompt;

pub use defaults::{DefaultFields, DefaultsConfig};
pub use error::AppError;
pub use field_set::{FieldSet, RawFields};
pub use prompt::{build_prompt, hints};
