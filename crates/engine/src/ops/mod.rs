use sea_orm::DatabaseConnection;

use crate::{MirrorLog, ResultEngine};

mod expenses;
mod owners;

/// Run a block inside a DB transaction, committing on success and rolling back on error.
///
/// The transaction (and the pooled connection behind it) lives only as long as
/// the block; dropping it on the error path rolls back and releases it.
macro_rules! with_tx {
    ($self:expr, |$tx:ident| $body:expr) => {{
        let $tx = $self.database.begin().await?;
        let result = $body;
        match result {
            Ok(value) => {
                $tx.commit().await?;
                Ok(value)
            }
            Err(err) => Err(err),
        }
    }};
}

pub(crate) use with_tx;

/// The expense store.
///
/// Holds no state between calls besides the connection pool and, when set,
/// the CSV mirror every insert is copied to.
#[derive(Debug)]
pub struct Engine {
    database: DatabaseConnection,
    mirror: Option<MirrorLog>,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    database: DatabaseConnection,
    mirror: Option<MirrorLog>,
}

impl EngineBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> EngineBuilder {
        self.database = db;
        self
    }

    /// Copy every insert to this CSV file. Without it nothing is mirrored.
    pub fn mirror(mut self, mirror: MirrorLog) -> EngineBuilder {
        self.mirror = Some(mirror);
        self
    }

    /// Construct `Engine`
    pub async fn build(self) -> ResultEngine<Engine> {
        Ok(Engine {
            database: self.database,
            mirror: self.mirror,
        })
    }
}
