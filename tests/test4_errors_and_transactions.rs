use sqlite_compat::prelude::*;
use tempfile::tempdir;
use tokio::runtime::Runtime;

enum TestCase {
    Collection,
    Positional,
}

impl TestCase {
    async fn open(&self, config: SqliteConfig) -> Result<ConnectionHandle, SqliteCompatError> {
        match self {
            TestCase::Collection => acquire_connection(&CollectionDriver, config).await,
            TestCase::Positional => acquire_connection(&PositionalDriver, config).await,
        }
    }
}

fn insert_request(name: &str, email: &str) -> ExecutionRequest {
    ExecutionRequest::new(
        "INSERT INTO users(name, email) VALUES (?1, ?2)",
        vec![Value::Text(name.into()), Value::Text(email.into())],
    )
}

#[test]
fn driver_errors_pass_through_verbatim() -> Result<(), Box<dyn std::error::Error>> {
    let rt = Runtime::new()?;

    for case in [TestCase::Collection, TestCase::Positional] {
        rt.block_on(async {
            let mut conn = case.open(SqliteConfig::new(":memory:")).await?;
            conn.raw_exec(
                "CREATE TABLE users (id INTEGER PRIMARY KEY, name TEXT, email TEXT UNIQUE)",
            )
            .await?;
            conn.execute(&insert_request("A", "a@x.com")).await?;

            // Constraint violation: the driver's own wording survives.
            let err = conn
                .execute(&insert_request("B", "a@x.com"))
                .await
                .unwrap_err();
            assert!(matches!(err, SqliteCompatError::SqliteError(_)));
            assert!(
                err.to_string()
                    .contains("UNIQUE constraint failed: users.email"),
                "unexpected message: {err}"
            );

            // The failed insert committed nothing.
            let count = conn.pluck("SELECT count(*) FROM users", &[]).await?;
            assert_eq!(count.and_then(|v| v.as_number()), Some(1.0));

            // Compilation failure, same policy.
            let err = conn
                .execute(&ExecutionRequest::new_without_bindings("SELECT FROM"))
                .await
                .unwrap_err();
            assert!(matches!(err, SqliteCompatError::SqliteError(_)));
            assert!(err.to_string().contains("syntax error"));

            Ok::<(), SqliteCompatError>(())
        })?;
    }

    Ok(())
}

#[test]
fn surrounding_transaction_rolls_back_in_full() -> Result<(), Box<dyn std::error::Error>> {
    let rt = Runtime::new()?;

    for case in [TestCase::Collection, TestCase::Positional] {
        rt.block_on(async {
            let mut conn = case.open(SqliteConfig::new(":memory:")).await?;
            conn.raw_exec(
                "CREATE TABLE users (id INTEGER PRIMARY KEY, name TEXT, email TEXT UNIQUE)",
            )
            .await?;
            conn.execute(&insert_request("A", "a@x.com")).await?;

            conn.begin_transaction().await?;
            conn.execute(&insert_request("B", "b@x.com")).await?;
            let err = conn
                .execute(&insert_request("C", "a@x.com"))
                .await
                .unwrap_err();
            assert!(matches!(err, SqliteCompatError::SqliteError(_)));
            conn.rollback().await?;

            // The whole transaction is gone, including the insert that
            // succeeded before the violation.
            let count = conn.pluck("SELECT count(*) FROM users", &[]).await?;
            assert_eq!(count.and_then(|v| v.as_number()), Some(1.0));

            Ok::<(), SqliteCompatError>(())
        })?;
    }

    Ok(())
}

#[tokio::test]
async fn read_only_and_open_failures_carry_native_errors()
-> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let db_path = dir.path().join("readonly.db");

    {
        let mut conn =
            acquire_connection(&CollectionDriver, SqliteConfig::new(&db_path)).await?;
        conn.raw_exec("CREATE TABLE t (v TEXT); INSERT INTO t VALUES ('kept');")
            .await?;
        conn.close().await?;
    }

    let mut conn = acquire_connection(
        &PositionalDriver,
        SqliteConfig::new(&db_path).read_only(true),
    )
    .await?;
    assert!(conn.read_only());

    let rows = conn
        .execute(&ExecutionRequest::new_without_bindings("SELECT v FROM t"))
        .await?
        .into_rows()
        .unwrap();
    assert_eq!(rows.rows()[0].get("v").and_then(|v| v.as_text()), Some("kept"));

    let err = conn
        .execute(&ExecutionRequest::new_without_bindings(
            "INSERT INTO t VALUES ('rejected')",
        ))
        .await
        .unwrap_err();
    assert!(matches!(err, SqliteCompatError::SqliteError(_)));
    assert!(err.to_string().contains("readonly"), "unexpected message: {err}");
    conn.close().await?;

    // Opening a database under a directory that does not exist fails with
    // the driver's open error, untranslated.
    let missing = dir.path().join("no-such-dir").join("db.sqlite");
    let err = acquire_connection(&CollectionDriver, SqliteConfig::new(missing))
        .await
        .err()
        .expect("open must fail");
    assert!(matches!(err, SqliteCompatError::SqliteError(_)));

    Ok(())
}
