pub use crate::cli::{command, run_app};
pub use crate::domain::{
    card::{ContactCard, SubmitOutcome},
    fields::{ContactFields, Field, FieldErrors},
};
pub use crate::errors::AppError;
pub use crate::store::{self, JsonFileStore, KeyValueStore, MemStore, StorageChoice, parse_store};
pub use crate::validation::validate;
