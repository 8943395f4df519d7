use chrono::Local;
use sea_orm::{QueryFilter, QueryOrder, Statement, TransactionTrait, prelude::*};

use crate::{EngineError, Expense, ExpenseRecord, NewExpense, OwnerReport, ResultEngine, expenses};

use super::{Engine, with_tx};

impl Engine {
    /// Validate and store an expense, returning the id the store assigned.
    ///
    /// Nothing is written when validation fails. When the mirror append fails
    /// the expense is already stored and the error carries its id.
    pub async fn insert_expense(&self, input: NewExpense) -> ResultEngine<i64> {
        self.insert_expense_record(input)
            .await
            .map(|record| record.id)
    }

    /// Same as [`Engine::insert_expense`], returning the stored record.
    pub async fn insert_expense_record(&self, input: NewExpense) -> ResultEngine<ExpenseRecord> {
        let expense = input.validate(Local::now().date_naive())?;

        let id = self.store_expense(&expense).await?;
        tracing::info!(id, owner = %expense.owner, amount = expense.amount, "expense stored");

        self.append_mirror(id, &expense).await?;
        Ok(ExpenseRecord { id, expense })
    }

    async fn store_expense(&self, expense: &Expense) -> ResultEngine<i64> {
        let active: expenses::ActiveModel = expense.into();
        with_tx!(self, |db_tx| {
            let inserted = expenses::Entity::insert(active).exec(&db_tx).await?;
            Ok(inserted.last_insert_id)
        })
    }

    /// The mirror row is numbered with the highest id in the table at the
    /// time of the append, not with `id`.
    async fn append_mirror(&self, id: i64, expense: &Expense) -> ResultEngine<()> {
        let Some(mirror) = &self.mirror else {
            return Ok(());
        };

        let mirror_id = self
            .max_expense_id()
            .await
            .map_err(|err| mirror_failure(id, err.to_string()))?;
        mirror
            .append(mirror_id, expense)
            .map_err(|err| mirror_failure(id, err.to_string()))
    }

    async fn max_expense_id(&self) -> ResultEngine<i64> {
        let backend = self.database.get_database_backend();
        let row = self
            .database
            .query_one(Statement::from_string(
                backend,
                "SELECT MAX(id) AS max_id FROM expenses;",
            ))
            .await?;
        let max_id = match row {
            Some(row) => row.try_get::<Option<i64>>("", "max_id")?,
            None => None,
        };
        Ok(max_id.unwrap_or(0))
    }

    /// Delete one expense. Unknown ids are ignored; returns the rows removed.
    pub async fn delete_expense(&self, id: i64) -> ResultEngine<u64> {
        let removed = with_tx!(self, |db_tx| {
            let result = expenses::Entity::delete_by_id(id).exec(&db_tx).await?;
            Ok::<_, EngineError>(result.rows_affected)
        })?;
        tracing::info!(id, removed, "expense deleted");
        Ok(removed)
    }

    /// Expenses of `owner` (exact match), by date then id.
    pub async fn list_expenses(&self, owner: &str) -> ResultEngine<Vec<ExpenseRecord>> {
        with_tx!(self, |db_tx| {
            let models = expenses::Entity::find()
                .filter(expenses::Column::Name.eq(owner))
                .order_by_asc(expenses::Column::Date)
                .order_by_asc(expenses::Column::Id)
                .all(&db_tx)
                .await?;
            tracing::debug!(owner, count = models.len(), "listed expenses");
            Ok(models.into_iter().map(ExpenseRecord::from).collect())
        })
    }

    pub async fn owner_report(&self, owner: &str) -> ResultEngine<OwnerReport> {
        let expenses = self.list_expenses(owner).await?;
        Ok(OwnerReport::new(owner, expenses))
    }
}

fn mirror_failure(id: i64, reason: String) -> EngineError {
    tracing::warn!(id, %reason, "mirror append failed");
    EngineError::MirrorWrite { id, reason }
}
