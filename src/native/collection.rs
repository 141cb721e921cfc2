//! The collection-convention front-end: execution operations take one
//! ordered collection of values, and the integer-width toggle is published
//! as `safe_integers`.

use async_trait::async_trait;

use crate::config::SqliteConfig;
use crate::driver::{
    BindingArgs, BindingConvention, DriverCapabilities, DriverConnection, DriverStatement,
    RunOutcome, SqliteDriver, WideIntegerStyle,
};
use crate::error::SqliteCompatError;
use crate::results::RowSet;
use crate::types::Value;

use super::connection::NativeConnection;
use super::statement::StatementParts;

/// Opens [`CollectionConnection`] sessions.
#[derive(Debug, Clone, Copy, Default)]
pub struct CollectionDriver;

#[async_trait]
impl SqliteDriver for CollectionDriver {
    async fn open(
        &self,
        config: &SqliteConfig,
    ) -> Result<Box<dyn DriverConnection>, SqliteCompatError> {
        let core = NativeConnection::open(config).await?;
        Ok(Box::new(CollectionConnection { core }))
    }
}

pub struct CollectionConnection {
    core: NativeConnection,
}

#[async_trait]
impl DriverConnection for CollectionConnection {
    fn capabilities(&self) -> DriverCapabilities {
        DriverCapabilities {
            binding_convention: BindingConvention::Collection,
            wide_integer_style: Some(WideIntegerStyle::SafeIntegers),
        }
    }

    async fn prepare(&mut self, sql: &str) -> Result<Box<dyn DriverStatement>, SqliteCompatError> {
        let parts = self.core.compile(sql).await?;
        Ok(Box::new(CollectionStatement { parts }))
    }

    async fn pragma(&mut self, pragma: &str) -> Result<RowSet, SqliteCompatError> {
        self.core.pragma(pragma).await
    }

    async fn begin(&mut self) -> Result<(), SqliteCompatError> {
        self.core.begin().await
    }

    async fn commit(&mut self) -> Result<(), SqliteCompatError> {
        self.core.commit().await
    }

    async fn rollback(&mut self) -> Result<(), SqliteCompatError> {
        self.core.rollback().await
    }

    async fn pluck(
        &mut self,
        sql: &str,
        bindings: &[Value],
    ) -> Result<Option<Value>, SqliteCompatError> {
        self.core.pluck(sql, bindings).await
    }

    async fn raw_exec(&mut self, sql: &str) -> Result<(), SqliteCompatError> {
        self.core.raw_exec(sql).await
    }

    fn expand(&mut self, on: bool) {
        self.core.expand(on);
    }

    async fn close(&mut self) -> Result<(), SqliteCompatError> {
        self.core.close().await
    }
}

pub struct CollectionStatement {
    parts: StatementParts,
}

#[async_trait]
impl DriverStatement for CollectionStatement {
    fn column_count(&self) -> usize {
        self.parts.column_count()
    }

    async fn fetch_all(&mut self, bindings: BindingArgs) -> Result<RowSet, SqliteCompatError> {
        match bindings {
            BindingArgs::Collection(values) => self.parts.query_with_collection(values).await,
            BindingArgs::Spread(_) => Err(SqliteCompatError::ParameterError(
                "collection-convention statement handed spread bindings".into(),
            )),
        }
    }

    async fn run(&mut self, bindings: BindingArgs) -> Result<RunOutcome, SqliteCompatError> {
        match bindings {
            BindingArgs::Collection(values) => self.parts.run_with_collection(values).await,
            BindingArgs::Spread(_) => Err(SqliteCompatError::ParameterError(
                "collection-convention statement handed spread bindings".into(),
            )),
        }
    }

    fn safe_integers(&mut self, wide: bool) {
        self.parts.set_wide(wide);
    }
}
