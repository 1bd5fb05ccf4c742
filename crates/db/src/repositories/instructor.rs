use crate::models::DbInstructor;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_instructor(
    pool: &Pool<Postgres>,
    name: &str,
    hourly_rate: f64,
    booking_fee: Option<f64>,
) -> Result<DbInstructor> {
    let id = Uuid::new_v4();

    tracing::debug!(
        "Creating instructor: id={}, name={}, hourly_rate={}",
        id,
        name,
        hourly_rate
    );

    let instructor = sqlx::query_as::<_, DbInstructor>(
        r#"
        INSERT INTO instructors (id, name, hourly_rate, booking_fee, created_at)
        VALUES ($1, $2, $3, $4, NOW())
        RETURNING id, name, hourly_rate, booking_fee, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(hourly_rate)
    .bind(booking_fee)
    .fetch_one(pool)
    .await?;

    Ok(instructor)
}

pub async fn get_instructor_by_id(
    pool: &Pool<Postgres>,
    id: Uuid,
) -> Result<Option<DbInstructor>> {
    let instructor = sqlx::query_as::<_, DbInstructor>(
        r#"
        SELECT id, name, hourly_rate, booking_fee, created_at
        FROM instructors
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(instructor)
}
