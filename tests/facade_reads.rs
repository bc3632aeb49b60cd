use cql_middleware::prelude::*;
use tokio::runtime::Runtime;

mod common;
use common::{MockDriver, result_set};

#[test]
fn find_by_id_projects_all_columns_when_none_given() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let driver = MockDriver::new();
        driver.push_result(Ok(result_set(
            &["id", "name"],
            vec![vec![RowValues::Int(1), RowValues::Text("a".to_string())]],
        )));
        let client = CqlClient::with_driver(driver.clone());

        let key = KeyValue::new("id", RowValues::Int(1));
        let row = client.find_by_id("users", &key, None).await.unwrap();

        let calls = driver.execute_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].query, "SELECT * FROM users WHERE id = ?");
        assert_eq!(calls[0].params, vec![RowValues::Int(1)]);
        assert_eq!(row.get("name"), Some(&RowValues::Text("a".to_string())));
    });
}

#[test]
fn find_by_id_projects_named_columns_in_order() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let driver = MockDriver::new();
        driver.push_result(Ok(result_set(
            &["name", "age"],
            vec![vec![RowValues::Text("a".to_string()), RowValues::Int(30)]],
        )));
        let client = CqlClient::with_driver(driver.clone());

        let key = KeyValue::new("id", RowValues::Int(1));
        client
            .find_by_id("users", &key, Some(&["name", "age"]))
            .await
            .unwrap();

        let calls = driver.execute_calls();
        assert_eq!(calls[0].query, "SELECT name, age FROM users WHERE id = ?");
    });
}

#[test]
fn find_by_id_rejects_empty_projection() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let driver = MockDriver::new();
        let client = CqlClient::with_driver(driver.clone());

        let key = KeyValue::new("id", RowValues::Int(1));
        let err = client
            .find_by_id("users", &key, Some(&[]))
            .await
            .unwrap_err();

        assert!(matches!(err, CqlMiddlewareDbError::InvalidArgument(_)));
        assert!(driver.execute_calls().is_empty());
    });
}

#[test]
fn find_by_id_zero_rows_is_not_found_not_a_driver_error() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let driver = MockDriver::new();
        driver.push_result(Ok(result_set(&["id"], vec![])));
        let client = CqlClient::with_driver(driver.clone());

        let key = KeyValue::new("id", RowValues::Int(99));
        let err = client.find_by_id("users", &key, None).await.unwrap_err();

        match err {
            CqlMiddlewareDbError::NotFound { table, key } => {
                assert_eq!(table, "users");
                assert_eq!(key, "id");
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    });
}

#[test]
fn find_by_id_keeps_only_the_first_of_multiple_rows() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let driver = MockDriver::new();
        driver.push_result(Ok(result_set(
            &["id", "name"],
            vec![
                vec![RowValues::Int(1), RowValues::Text("first".to_string())],
                vec![RowValues::Int(1), RowValues::Text("second".to_string())],
            ],
        )));
        let client = CqlClient::with_driver(driver.clone());

        let key = KeyValue::new("id", RowValues::Int(1));
        let row = client.find_by_id("users", &key, None).await.unwrap();

        assert_eq!(row.get("name"), Some(&RowValues::Text("first".to_string())));
    });
}

#[test]
fn find_with_zero_rows_succeeds_with_empty_result() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let driver = MockDriver::new();
        driver.push_result(Ok(result_set(&["id"], vec![])));
        let client = CqlClient::with_driver(driver.clone());

        let result = client
            .find("SELECT id FROM users WHERE age > ?", &[RowValues::Int(100)])
            .await
            .unwrap();

        assert_eq!(result.row_count(), 0);
        assert!(result.rows.is_empty());
    });
}

#[test]
fn find_passes_query_text_and_params_through() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let driver = MockDriver::new();
        driver.push_result(Ok(result_set(
            &["id"],
            vec![vec![RowValues::Int(1)], vec![RowValues::Int(2)]],
        )));
        let client = CqlClient::with_driver(driver.clone());

        let result = client
            .find("SELECT id FROM users WHERE age > ?", &[RowValues::Int(18)])
            .await
            .unwrap();

        let calls = driver.execute_calls();
        assert_eq!(calls[0].query, "SELECT id FROM users WHERE age > ?");
        assert_eq!(calls[0].params, vec![RowValues::Int(18)]);
        assert!(calls[0].options.prepare);
        assert_eq!(result.row_count(), 2);
    });
}

#[test]
fn find_forwards_driver_error() {
    let rt = Runtime::new().unwrap();
    rt.block_on(async {
        let driver = MockDriver::new();
        driver.push_result(Err(CqlMiddlewareDbError::ExecutionError(
            "timeout".to_string(),
        )));
        let client = CqlClient::with_driver(driver.clone());

        let err = client
            .find("SELECT * FROM users", &[])
            .await
            .unwrap_err();
        assert!(matches!(err, CqlMiddlewareDbError::ExecutionError(msg) if msg == "timeout"));
    });
}
