use std::fmt;
use std::str::FromStr;

use sea_orm::{entity::prelude::*, sea_query::StringLen, Set};
use serde::{Deserialize, Serialize};

use crate::errors::{FieldError, FieldErrors, ModelError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(8))")]
pub enum Category {
    #[sea_orm(string_value = "Sale")]
    Sale,
    #[sea_orm(string_value = "Rent")]
    Rent,
}

const CATEGORY_RULE: &str = "must be one of: Sale, Rent";

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Sale => "Sale",
            Category::Rent => "Rent",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

/// Exact, case-sensitive match on the two literals.
impl FromStr for Category {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Sale" => Ok(Category::Sale),
            "Rent" => Ok(Category::Rent),
            _ => Err(FieldError { field: "category", message: CATEGORY_RULE.to_string() }),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "listings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub plot_id: String,
    pub title: String,
    pub location: String,
    pub category: Category,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    pub available: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { match *self {} }
}

impl ActiveModelBehavior for ActiveModel {}

fn default_available() -> bool { true }

/// Create-listing request body.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NewListing {
    pub plot_id: String,
    pub title: String,
    pub location: String,
    /// Kept as free text so an unknown category is a field error, not a decode error.
    pub category: String,
    pub price: f64,
    #[serde(default = "default_available")]
    pub available: bool,
}

/// A listing that passed validation; only constructible through [`NewListing::validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct ValidListing {
    plot_id: String,
    title: String,
    location: String,
    category: Category,
    price: f64,
    available: bool,
}

pub fn validate_price(price: f64, errs: &mut FieldErrors) {
    if !price.is_finite() || price <= 0.0 {
        errs.push("price", "must be greater than 0");
    }
}

impl NewListing {
    /// Check every field and report all failures at once.
    pub fn validate(self) -> Result<ValidListing, ModelError> {
        let mut errs = FieldErrors::new();
        errs.require_non_empty("plot_id", &self.plot_id);
        errs.require_non_empty("title", &self.title);
        errs.require_non_empty("location", &self.location);
        let category = self.category.parse::<Category>().map_err(|e| errs.push(e.field, e.message)).ok();
        validate_price(self.price, &mut errs);

        match category {
            Some(category) if errs.is_empty() => Ok(ValidListing {
                plot_id: self.plot_id,
                title: self.title,
                location: self.location,
                category,
                price: self.price,
                available: self.available,
            }),
            _ => Err(ModelError::Validation(errs)),
        }
    }
}

impl ValidListing {
    pub fn plot_id(&self) -> &str { &self.plot_id }

    pub fn category(&self) -> Category { self.category }

    /// Materialize with server-assigned timestamps; `updated_at` starts equal to `created_at`.
    pub fn into_model(self, now: DateTimeWithTimeZone) -> Model {
        Model {
            plot_id: self.plot_id,
            title: self.title,
            location: self.location,
            category: self.category,
            price: self.price,
            available: self.available,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn into_active_model(self, now: DateTimeWithTimeZone) -> ActiveModel {
        ActiveModel {
            plot_id: Set(self.plot_id),
            title: Set(self.title),
            location: Set(self.location),
            category: Set(self.category),
            price: Set(self.price),
            available: Set(self.available),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn input() -> NewListing {
        NewListing {
            plot_id: "PLOT001".into(),
            title: "Luxury Villa in Colombo".into(),
            location: "Colombo 07".into(),
            category: "Sale".into(),
            price: 50_000_000.0,
            available: true,
        }
    }

    fn field_errors(res: Result<ValidListing, ModelError>) -> FieldErrors {
        match res {
            Err(ModelError::Validation(e)) => e,
            Ok(v) => panic!("expected validation failure, got {v:?}"),
        }
    }

    #[test]
    fn valid_input_round_trips_into_model() {
        let now = Utc::now().into();
        let m = input().validate().unwrap().into_model(now);
        assert_eq!(m.plot_id, "PLOT001");
        assert_eq!(m.category, Category::Sale);
        assert_eq!(m.price, 50_000_000.0);
        assert!(m.available);
        assert_eq!(m.created_at, m.updated_at);
    }

    #[test]
    fn category_is_exact_and_case_sensitive() {
        for bad in ["Lease", "sale", "RENT", "", " Sale"] {
            let errs = field_errors(NewListing { category: bad.into(), ..input() }.validate());
            assert!(errs.contains("category"), "{bad:?} should be rejected");
        }
        let rent = NewListing { category: "Rent".into(), ..input() }.validate().unwrap();
        assert_eq!(rent.category(), Category::Rent);
    }

    #[test]
    fn price_must_be_strictly_positive() {
        for bad in [0.0, -1000.0, f64::NAN, f64::INFINITY] {
            let errs = field_errors(NewListing { price: bad, ..input() }.validate());
            assert!(errs.contains("price"));
        }
        assert!(NewListing { price: 0.01, ..input() }.validate().is_ok());
    }

    #[test]
    fn empty_strings_are_all_reported() {
        let errs = field_errors(
            NewListing { plot_id: String::new(), title: String::new(), location: String::new(), ..input() }.validate(),
        );
        assert_eq!(errs.len(), 3);
        assert!(errs.contains("plot_id") && errs.contains("title") && errs.contains("location"));
    }

    #[test]
    fn available_defaults_to_true_when_absent() {
        let parsed: NewListing = serde_json::from_value(serde_json::json!({
            "plot_id": "P1", "title": "A", "location": "L", "category": "Rent", "price": 100
        }))
        .unwrap();
        assert!(parsed.available);
        assert_eq!(parsed.price, 100.0);
    }

    #[test]
    fn category_rule_is_reported_once() {
        let errs = field_errors(NewListing { category: "Lease".into(), ..input() }.validate());
        assert_eq!(errs.len(), 1);
        assert_eq!(errs.to_string(), "category: must be one of: Sale, Rent");
        let e = "Lease".parse::<Category>().unwrap_err();
        assert_eq!(e.field, "category");
    }

    #[test]
    fn category_serializes_as_literal() {
        assert_eq!(serde_json::to_value(Category::Sale).unwrap(), "Sale");
        assert_eq!(Category::Rent.to_string(), "Rent");
    }
}
