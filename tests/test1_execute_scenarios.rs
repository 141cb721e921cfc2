use sqlite_compat::prelude::*;
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

#[test]
fn reader_writer_classification_through_both_drivers() -> Result<(), Box<dyn std::error::Error>> {
    let rt = Runtime::new()?;

    for case in [TestCase::Collection, TestCase::Positional] {
        rt.block_on(async {
            let mut conn = case.open(SqliteConfig::new(":memory:")).await?;

            // DDL compiles to zero result columns: writer path.
            let ddl = ExecutionRequest::new_without_bindings(
                "CREATE TABLE users (id INTEGER PRIMARY KEY, name TEXT, email TEXT UNIQUE)",
            );
            let created = conn.execute(&ddl).await?;
            assert!(created.as_mutation().is_some());

            // Plain insert: mutation summary with rowid and change count.
            let insert = ExecutionRequest::new(
                "INSERT INTO users(name, email) VALUES (?1, ?2)",
                vec![Value::Text("A".into()), Value::Text("a@x.com".into())],
            );
            let summary = *conn
                .execute(&insert)
                .await?
                .as_mutation()
                .expect("plain insert is a writer");
            assert_eq!(summary.inserted_row_id, 1);
            assert_eq!(summary.changed_row_count, 1);

            // RETURNING adds result columns, so the same mutation becomes a
            // reader and yields rows instead of a change count.
            let returning = ExecutionRequest::new(
                "INSERT INTO users(name, email) VALUES (?1, ?2) RETURNING id, name",
                vec![Value::Text("B".into()), Value::Text("b@x.com".into())],
            )
            .with_wide_integers(true);
            let rows = conn
                .execute(&returning)
                .await?
                .into_rows()
                .expect("INSERT .. RETURNING is a reader");
            assert_eq!(rows.len(), 1);
            assert_eq!(rows.rows()[0].get("id"), Some(&Value::Integer(2)));
            assert_eq!(
                rows.rows()[0].get("name").and_then(|v| v.as_text()),
                Some("B")
            );

            let select = ExecutionRequest::new_without_bindings(
                "SELECT id, name, email FROM users ORDER BY id",
            )
            .with_wide_integers(true);
            let rows = conn.execute(&select).await?.into_rows().unwrap();
            assert_eq!(rows.len(), 2);
            assert_eq!(
                rows.rows()[1].get("email").and_then(|v| v.as_text()),
                Some("b@x.com")
            );

            // Classification is by column count, never by keyword sniffing.
            let disguised = ExecutionRequest::new_without_bindings(
                "-- select everything\nUPDATE users SET name = 'Z' WHERE id = 1",
            );
            let updated = conn.execute(&disguised).await?;
            assert_eq!(updated.as_mutation().unwrap().changed_row_count, 1);

            let delete_returning = ExecutionRequest::new(
                "DELETE FROM users WHERE id = ?1 RETURNING id",
                vec![Value::Integer(2)],
            )
            .with_wide_integers(true);
            let rows = conn
                .execute(&delete_returning)
                .await?
                .into_rows()
                .expect("a RETURNING clause makes even DELETE a reader");
            assert_eq!(rows.len(), 1);
            assert_eq!(rows.rows()[0].get("id"), Some(&Value::Integer(2)));

            let delete = ExecutionRequest::new(
                "DELETE FROM users WHERE id = ?1",
                vec![Value::Integer(1)],
            );
            let deleted = conn.execute(&delete).await?;
            assert_eq!(deleted.as_mutation().unwrap().changed_row_count, 1);

            conn.close().await?;
            Ok::<(), SqliteCompatError>(())
        })?;
    }

    Ok(())
}

#[test]
fn is_reader_is_stable_across_repeated_preparation() -> Result<(), Box<dyn std::error::Error>> {
    let rt = Runtime::new()?;

    for case in [TestCase::Collection, TestCase::Positional] {
        rt.block_on(async {
            let mut conn = case.open(SqliteConfig::new(":memory:")).await?;
            conn.raw_exec("CREATE TABLE t (v TEXT)").await?;

            let first = conn.prepare("SELECT v FROM t").await?;
            let second = conn.prepare("SELECT v FROM t").await?;
            assert!(first.is_reader());
            assert_eq!(first.is_reader(), second.is_reader());

            let w1 = conn.prepare("INSERT INTO t(v) VALUES (?1)").await?;
            let w2 = conn.prepare("INSERT INTO t(v) VALUES (?1)").await?;
            assert!(!w1.is_reader());
            assert_eq!(w1.is_reader(), w2.is_reader());

            Ok::<(), SqliteCompatError>(())
        })?;
    }

    Ok(())
}

#[tokio::test]
async fn enhancement_operations_pass_through() -> Result<(), Box<dyn std::error::Error>> {
    for case in [TestCase::Collection, TestCase::Positional] {
        let mut conn = case.open(SqliteConfig::new(":memory:")).await?;

        conn.raw_exec(
            "CREATE TABLE a (id INTEGER PRIMARY KEY, v TEXT);
             CREATE TABLE b (id INTEGER PRIMARY KEY, w TEXT);
             INSERT INTO a VALUES (1, 'av');
             INSERT INTO b VALUES (1, 'bv');",
        )
        .await?;

        // Assignment pragma reports nothing; the query form reads it back.
        conn.pragma("user_version = 7").await?;
        let version = conn.pragma("user_version").await?;
        assert_eq!(version.len(), 1);
        assert_eq!(
            version.rows()[0].get_by_index(0).and_then(Value::as_number),
            Some(7.0)
        );

        let plucked = conn.pluck("SELECT v FROM a WHERE id = ?1", &[Value::Integer(1)]).await?;
        assert_eq!(plucked.and_then(|v| v.as_text().map(str::to_owned)), Some("av".into()));
        let missing = conn.pluck("SELECT v FROM a WHERE id = ?1", &[Value::Integer(99)]).await?;
        assert!(missing.is_none());

        // Expanded naming keeps joined duplicate columns addressable.
        conn.expand(true)?;
        let joined = conn
            .execute(&ExecutionRequest::new_without_bindings(
                "SELECT a.id, b.id FROM a JOIN b ON a.id = b.id",
            ))
            .await?
            .into_rows()
            .unwrap();
        assert_eq!(joined.column_names(), ["id".to_string(), "id:1".to_string()]);
        conn.expand(false)?;

        conn.close().await?;
        // Close is explicit and idempotent.
        conn.close().await?;
    }

    Ok(())
}
