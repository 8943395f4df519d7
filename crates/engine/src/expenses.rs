//! Expense primitives.
//!
//! A [`NewExpense`] is raw form input. Validating it yields an [`Expense`],
//! which becomes an [`ExpenseRecord`] once the store has assigned its id.

use chrono::NaiveDate;
use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    ResultEngine,
    util::{parse_amount, require_choice, require_text},
};

/// Categories offered by front ends. Any other text is accepted.
pub const CATEGORIES: [&str; 4] = ["Food", "Transport", "Entertainment", "Other"];
/// Payment methods offered by front ends. Any other text is accepted.
pub const PAYMENT_METHODS: [&str; 3] = ["Cash", "Card", "Online"];
/// Value shown before a category is picked; counts as missing.
pub const CATEGORY_PLACEHOLDER: &str = "Select Category";
/// Value shown before a payment method is picked; counts as missing.
pub const PAYMENT_METHOD_PLACEHOLDER: &str = "Select Payment Method";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Unvalidated expense as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewExpense {
    pub owner: String,
    pub amount: String,
    pub category: String,
    /// `YYYY-MM-DD`. Empty or missing means today.
    pub date: Option<String>,
    pub notes: String,
    pub payment_method: String,
    pub location: String,
}

impl NewExpense {
    /// Check the required fields, then the amount, and fill in the date.
    ///
    /// Presence is checked before the amount is parsed, so a form that is both
    /// incomplete and non-numeric reports the missing field.
    pub fn validate(self, today: NaiveDate) -> ResultEngine<Expense> {
        require_text(&self.owner, "name")?;
        require_text(&self.amount, "amount")?;
        require_choice(&self.category, CATEGORY_PLACEHOLDER, "category")?;
        require_choice(
            &self.payment_method,
            PAYMENT_METHOD_PLACEHOLDER,
            "payment method",
        )?;
        let amount = parse_amount(&self.amount)?;

        let date = match self.date {
            Some(date) if !date.is_empty() => date,
            _ => today.format(DATE_FORMAT).to_string(),
        };

        Ok(Expense {
            owner: self.owner,
            amount,
            category: self.category,
            date,
            notes: self.notes,
            payment_method: self.payment_method,
            location: self.location,
        })
    }
}

/// A validated expense, not yet stored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub owner: String,
    pub amount: f64,
    pub category: String,
    pub date: String,
    pub notes: String,
    pub payment_method: String,
    pub location: String,
}

/// A stored expense.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub id: i64,
    #[serde(flatten)]
    pub expense: Expense,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "expenses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub amount: f64,
    pub category: String,
    pub date: String,
    pub notes: Option<String>,
    pub payment_method: Option<String>,
    pub location: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Expense> for ActiveModel {
    fn from(expense: &Expense) -> Self {
        Self {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(expense.owner.clone()),
            amount: ActiveValue::Set(expense.amount),
            category: ActiveValue::Set(expense.category.clone()),
            date: ActiveValue::Set(expense.date.clone()),
            notes: ActiveValue::Set(Some(expense.notes.clone())),
            payment_method: ActiveValue::Set(Some(expense.payment_method.clone())),
            location: ActiveValue::Set(Some(expense.location.clone())),
        }
    }
}

impl From<Model> for ExpenseRecord {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            expense: Expense {
                owner: model.name,
                amount: model.amount,
                category: model.category,
                date: model.date,
                notes: model.notes.unwrap_or_default(),
                payment_method: model.payment_method.unwrap_or_default(),
                location: model.location.unwrap_or_default(),
            },
        }
    }
}
