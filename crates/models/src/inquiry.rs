use sea_orm::{entity::prelude::*, NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::errors::{FieldErrors, ModelError};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "inquiries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub plot_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub created_at: DateTimeWithTimeZone,
}

// No relation to listings: an inquiry may name a plot that was never listed.
#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { match *self {} }
}

impl ActiveModelBehavior for ActiveModel {}

/// Create-inquiry request body.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NewInquiry {
    pub plot_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidInquiry {
    plot_id: String,
    name: String,
    email: String,
    phone: String,
    message: String,
}

impl NewInquiry {
    /// All five fields are required and non-empty. Email is kept opaque.
    pub fn validate(self) -> Result<ValidInquiry, ModelError> {
        let mut errs = FieldErrors::new();
        errs.require_non_empty("plot_id", &self.plot_id);
        errs.require_non_empty("name", &self.name);
        errs.require_non_empty("email", &self.email);
        errs.require_non_empty("phone", &self.phone);
        errs.require_non_empty("message", &self.message);
        errs.into_result(ValidInquiry {
            plot_id: self.plot_id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            message: self.message,
        })
    }
}

impl ValidInquiry {
    pub fn plot_id(&self) -> &str { &self.plot_id }

    /// The caller (the store) picks the id.
    pub fn into_model(self, id: i32, now: DateTimeWithTimeZone) -> Model {
        Model {
            id,
            plot_id: self.plot_id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            message: self.message,
            created_at: now,
        }
    }

    /// Leaves `id` unset so the database assigns it.
    pub fn into_active_model(self, now: DateTimeWithTimeZone) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            plot_id: Set(self.plot_id),
            name: Set(self.name),
            email: Set(self.email),
            phone: Set(self.phone),
            message: Set(self.message),
            created_at: Set(now),
        }
    }
}
