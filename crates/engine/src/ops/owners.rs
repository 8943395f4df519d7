use sea_orm::{QueryFilter, QueryOrder, QuerySelect, TransactionTrait, prelude::*, sea_query::Expr};

use crate::{EngineError, OwnerListing, ResultEngine, expenses, util::normalize_filter};

use super::{Engine, with_tx};

impl Engine {
    /// Distinct owner names in ascending byte order.
    ///
    /// A non-blank `filter` keeps only names containing it, case-sensitively.
    pub async fn list_owners(&self, filter: Option<&str>) -> ResultEngine<Vec<String>> {
        let filter = normalize_filter(filter);
        with_tx!(self, |db_tx| {
            let mut query = expenses::Entity::find()
                .select_only()
                .column(expenses::Column::Name)
                .distinct();
            if let Some(needle) = filter {
                // LIKE folds ASCII case; instr does not.
                query = query.filter(Expr::cust_with_values("instr(name, ?) > 0", [needle]));
            }
            let owners = query
                .order_by_asc(expenses::Column::Name)
                .into_tuple::<String>()
                .all(&db_tx)
                .await?;
            Ok(owners)
        })
    }

    /// [`Engine::list_owners`] together with the filter that produced it.
    pub async fn owner_index(&self, filter: Option<&str>) -> ResultEngine<OwnerListing> {
        let filter = normalize_filter(filter).map(ToString::to_string);
        let owners = self.list_owners(filter.as_deref()).await?;
        Ok(OwnerListing { filter, owners })
    }

    /// Delete every expense of `owner` (exact match); returns the rows removed.
    pub async fn delete_owner(&self, owner: &str) -> ResultEngine<u64> {
        let removed = with_tx!(self, |db_tx| {
            let result = expenses::Entity::delete_many()
                .filter(expenses::Column::Name.eq(owner))
                .exec(&db_tx)
                .await?;
            Ok::<_, EngineError>(result.rows_affected)
        })?;
        tracing::info!(owner, removed, "owner deleted");
        Ok(removed)
    }
}
