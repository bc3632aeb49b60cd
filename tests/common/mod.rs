#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use cql_middleware::prelude::*;

/// One captured `execute` invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecuteCall {
    pub query: String,
    pub params: Vec<RowValues>,
    pub options: QueryOptions,
}

/// One captured `batch` invocation.
#[derive(Debug, Clone)]
pub struct BatchCall {
    pub statements: Vec<(String, Vec<RowValues>)>,
    pub options: QueryOptions,
}

/// Recording driver: captures every call and replays scripted results in
/// order. An exhausted script yields empty result sets / successful batches.
#[derive(Default)]
pub struct MockDriver {
    pub executes: Mutex<Vec<ExecuteCall>>,
    pub batches: Mutex<Vec<BatchCall>>,
    execute_script: Mutex<Vec<Result<ResultSet, CqlMiddlewareDbError>>>,
    batch_script: Mutex<Vec<Result<(), CqlMiddlewareDbError>>>,
}

impl MockDriver {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_result(&self, result: Result<ResultSet, CqlMiddlewareDbError>) {
        self.execute_script.lock().unwrap().push(result);
    }

    pub fn push_batch_result(&self, result: Result<(), CqlMiddlewareDbError>) {
        self.batch_script.lock().unwrap().push(result);
    }

    pub fn execute_calls(&self) -> Vec<ExecuteCall> {
        self.executes.lock().unwrap().clone()
    }

    pub fn batch_calls(&self) -> Vec<BatchCall> {
        self.batches.lock().unwrap().clone()
    }
}

#[async_trait]
impl CqlDriver for MockDriver {
    async fn execute(
        &self,
        query: &str,
        params: &[RowValues],
        options: &QueryOptions,
    ) -> Result<ResultSet, CqlMiddlewareDbError> {
        self.executes.lock().unwrap().push(ExecuteCall {
            query: query.to_string(),
            params: params.to_vec(),
            options: *options,
        });

        let mut script = self.execute_script.lock().unwrap();
        if script.is_empty() {
            Ok(ResultSet::default())
        } else {
            script.remove(0)
        }
    }

    async fn batch(
        &self,
        statements: &[QueryAndParams],
        options: &QueryOptions,
    ) -> Result<(), CqlMiddlewareDbError> {
        self.batches.lock().unwrap().push(BatchCall {
            statements: statements
                .iter()
                .map(|s| (s.query.clone(), s.params.clone()))
                .collect(),
            options: *options,
        });

        let mut script = self.batch_script.lock().unwrap();
        if script.is_empty() {
            Ok(())
        } else {
            script.remove(0)
        }
    }
}

/// Build a result set from column names and row values.
pub fn result_set(columns: &[&str], rows: Vec<Vec<RowValues>>) -> ResultSet {
    let mut set = ResultSet::with_capacity(rows.len());
    set.set_column_names(std::sync::Arc::new(
        columns.iter().map(|c| (*c).to_string()).collect(),
    ));
    for row in rows {
        set.add_row_values(row);
    }
    set
}
