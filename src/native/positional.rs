//! The positional-convention front-end: every binding is bound separately
//! at its 1-based ordinal, and the integer-width toggle is published as
//! `set_read_big_ints`.

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

/// Opens [`PositionalConnection`] sessions.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalDriver;

#[async_trait]
impl SqliteDriver for PositionalDriver {
    async fn open(
        &self,
        config: &SqliteConfig,
    ) -> Result<Box<dyn DriverConnection>, SqliteCompatError> {
        let core = NativeConnection::open(config).await?;
        Ok(Box::new(PositionalConnection { core }))
    }
}

pub struct PositionalConnection {
    core: NativeConnection,
}

#[async_trait]
impl DriverConnection for PositionalConnection {
    fn capabilities(&self) -> DriverCapabilities {
        DriverCapabilities {
            binding_convention: BindingConvention::Positional,
            wide_integer_style: Some(WideIntegerStyle::ReadBigInts),
        }
    }

    async fn prepare(&mut self, sql: &str) -> Result<Box<dyn DriverStatement>, SqliteCompatError> {
        let parts = self.core.compile(sql).await?;
        Ok(Box::new(PositionalStatement { parts }))
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

pub struct PositionalStatement {
    parts: StatementParts,
}

#[async_trait]
impl DriverStatement for PositionalStatement {
    fn column_count(&self) -> usize {
        self.parts.column_count()
    }

    async fn fetch_all(&mut self, bindings: BindingArgs) -> Result<RowSet, SqliteCompatError> {
        match bindings {
            BindingArgs::Spread(pairs) => self.parts.query_with_spread(pairs).await,
            BindingArgs::Collection(_) => Err(SqliteCompatError::ParameterError(
                "positional-convention statement handed collection bindings".into(),
            )),
        }
    }

    async fn run(&mut self, bindings: BindingArgs) -> Result<RunOutcome, SqliteCompatError> {
        match bindings {
            BindingArgs::Spread(pairs) => self.parts.run_with_spread(pairs).await,
            BindingArgs::Collection(_) => Err(SqliteCompatError::ParameterError(
                "positional-convention statement handed collection bindings".into(),
            )),
        }
    }

    fn set_read_big_ints(&mut self, wide: bool) {
        self.parts.set_wide(wide);
    }
}
