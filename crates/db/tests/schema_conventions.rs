//! Schema convention checks: key types, timestamps, and constraint naming.

use sqlx::PgPool;

/// All `id` columns must be bigint.
#[sqlx::test(migrations = "./migrations")]
async fn test_all_pks_are_bigint(pool: PgPool) {
    let rows: Vec<(String, String)> = sqlx::query_as(
        "SELECT table_name, data_type
         FROM information_schema.columns
         WHERE column_name = 'id'
           AND table_schema = 'public'
           AND table_name != '_sqlx_migrations'
         ORDER BY table_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert!(!rows.is_empty());
    for (table, data_type) in &rows {
        assert_eq!(
            data_type, "bigint",
            "Table {table}.id should be bigint, got {data_type}"
        );
    }
}

/// Every table carries a `created_at` timestamptz.
#[sqlx::test(migrations = "./migrations")]
async fn test_all_tables_have_created_at(pool: PgPool) {
    let tables: Vec<(String,)> = sqlx::query_as(
        "SELECT table_name
         FROM information_schema.tables
         WHERE table_schema = 'public'
           AND table_type = 'BASE TABLE'
           AND table_name != '_sqlx_migrations'
         ORDER BY table_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    for (table,) in &tables {
        let row: Option<(String,)> = sqlx::query_as(
            "SELECT data_type
             FROM information_schema.columns
             WHERE table_schema = 'public' AND table_name = $1 AND column_name = 'created_at'",
        )
        .bind(table)
        .fetch_optional(&pool)
        .await
        .unwrap();

        let (data_type,) = row.unwrap_or_else(|| panic!("Table {table} is missing created_at"));
        assert_eq!(
            data_type, "timestamp with time zone",
            "Table {table}.created_at should be timestamptz"
        );
    }
}

/// Every sluggable content table has a unique constraint named
/// `uq_<table>_slug`; the 409 mapping in the API relies on the prefix.
#[sqlx::test(migrations = "./migrations")]
async fn test_slug_constraints_follow_naming_convention(pool: PgPool) {
    let tables: Vec<(String,)> = sqlx::query_as(
        "SELECT table_name
         FROM information_schema.columns
         WHERE table_schema = 'public' AND column_name = 'slug'
         ORDER BY table_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    let expected = [
        "admissions",
        "departments",
        "events",
        "faculties",
        "journals",
        "news",
    ];
    let found: Vec<_> = tables.iter().map(|(t,)| t.as_str()).collect();
    assert_eq!(found, expected);

    for (table,) in &tables {
        let constraint: Option<(String,)> = sqlx::query_as(
            "SELECT constraint_name
             FROM information_schema.table_constraints
             WHERE table_schema = 'public'
               AND table_name = $1
               AND constraint_type = 'UNIQUE'
               AND constraint_name = 'uq_' || $1 || '_slug'",
        )
        .bind(table)
        .fetch_optional(&pool)
        .await
        .unwrap();
        assert!(
            constraint.is_some(),
            "Table {table} is missing constraint uq_{table}_slug"
        );
    }
}

/// Content tables default `is_active` to true.
#[sqlx::test(migrations = "./migrations")]
async fn test_is_active_defaults_to_true(pool: PgPool) {
    let rows: Vec<(String, Option<String>)> = sqlx::query_as(
        "SELECT table_name, column_default
         FROM information_schema.columns
         WHERE table_schema = 'public' AND column_name = 'is_active'
         ORDER BY table_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert!(!rows.is_empty());
    for (table, default) in &rows {
        assert_eq!(
            default.as_deref(),
            Some("true"),
            "Table {table}.is_active should default to true"
        );
    }
}
