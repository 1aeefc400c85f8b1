use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify seed data.
#[sqlx::test(migrations = "./migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    fundra_db::health_check(&pool).await.unwrap();

    // Verify all four lookup tables exist and have seed data
    let tables = [
        ("project_phases", 4i64),
        ("pitch_statuses", 4),
        ("plan_statuses", 5),
        ("project_needs", 3),
    ];

    for (table, expected) in tables {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, expected, "{table} seed rows");
    }
}

/// Seed order must match the i16 enums.
#[sqlx::test(migrations = "./migrations")]
async fn test_phase_seed_order(pool: PgPool) {
    let rows: Vec<(i16, String)> = sqlx::query_as("SELECT id, name FROM project_phases ORDER BY id")
        .fetch_all(&pool)
        .await
        .unwrap();
    let names: Vec<(i16, &str)> = rows.iter().map(|(id, n)| (*id, n.as_str())).collect();
    assert_eq!(
        names,
        vec![(1, "pitch"), (2, "plan"), (3, "campaign"), (4, "results")]
    );
}
