use sqlx::PgPool;

/// Connect, migrate, verify the content table exists and starts empty.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    vela_db::health_check(&pool).await.unwrap();

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM site_content")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 0, "site_content should start empty");
}

/// The table refuses documents that are not JSON objects.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_document_must_be_object(pool: PgPool) {
    let result = sqlx::query("INSERT INTO site_content (id, document) VALUES ('x', '[]'::json)")
        .execute(&pool)
        .await;
    assert!(result.is_err(), "array documents must violate the check constraint");
}
