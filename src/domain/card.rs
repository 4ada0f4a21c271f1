use tracing::{error, warn};

use crate::domain::fields::{ContactFields, Field, FieldErrors};
use crate::store::KeyValueStore;
use crate::validation::validate;

/// Where a submit ended up. Validation failures never touch the store;
/// a failed save reports no per-key detail beyond "not fully saved".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Invalid(FieldErrors),
    Saved,
    SaveFailed,
}

/// One contact card: the current field values, the messages from the last
/// validation pass, and the store they persist to. The card is the single
/// owner of its fields; all mutation goes through `update_field`.
pub struct ContactCard {
    fields: ContactFields,
    errors: FieldErrors,
    store: Box<dyn KeyValueStore>,
}

impl ContactCard {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self {
            fields: ContactFields::default(),
            errors: FieldErrors::default(),
            store,
        }
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    /// Messages from the most recent submit. Empty until a submit has run.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.fields.set(field, value.into());
    }

    /// Pull whatever the store holds into the card, one key at a time.
    /// Absent keys leave the field as it is, and a fault on one key is
    /// logged and skipped without disturbing the other three.
    pub async fn load(&mut self) {
        for field in Field::ALL {
            match self.store.get_item(field.key()).await {
                Ok(Some(value)) => self.fields.set(field, value),
                Ok(None) => {}
                Err(err) => {
                    warn!(key = %field, error = %err, "could not read stored field");
                }
            }
        }
    }

    /// Validate, then persist. The four writes are independent calls, so a
    /// fault partway through can leave a mix of old and new values behind;
    /// the caller only learns that the card was not fully saved.
    pub async fn submit(&mut self) -> SubmitOutcome {
        self.errors = validate(&self.fields);

        if !self.errors.is_empty() {
            return SubmitOutcome::Invalid(self.errors.clone());
        }

        for field in Field::ALL {
            if let Err(err) = self.store.set_item(field.key(), self.fields.get(field)).await {
                error!(key = %field, error = %err, "could not persist field");
                return SubmitOutcome::SaveFailed;
            }
        }

        SubmitOutcome::Saved
    }
}
