use crate::models::{DbScheduleEntry, DbTimeOffPeriod};
use chrono::{NaiveDate, NaiveTime};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_schedule_entry(
    pool: &Pool<Postgres>,
    instructor_id: Uuid,
    day_of_week: i16,
    start_time: NaiveTime,
    end_time: NaiveTime,
) -> Result<DbScheduleEntry> {
    let id = Uuid::new_v4();

    let entry = sqlx::query_as::<_, DbScheduleEntry>(
        r#"
        INSERT INTO weekly_schedule_entries (id, instructor_id, day_of_week, start_time, end_time, created_at)
        VALUES ($1, $2, $3, $4, $5, NOW())
        RETURNING id, instructor_id, day_of_week, start_time, end_time, created_at
        "#,
    )
    .bind(id)
    .bind(instructor_id)
    .bind(day_of_week)
    .bind(start_time)
    .bind(end_time)
    .fetch_one(pool)
    .await?;

    Ok(entry)
}

pub async fn get_schedule_entries_by_instructor(
    pool: &Pool<Postgres>,
    instructor_id: Uuid,
) -> Result<Vec<DbScheduleEntry>> {
    let entries = sqlx::query_as::<_, DbScheduleEntry>(
        r#"
        SELECT id, instructor_id, day_of_week, start_time, end_time, created_at
        FROM weekly_schedule_entries
        WHERE instructor_id = $1
        ORDER BY day_of_week ASC
        "#,
    )
    .bind(instructor_id)
    .fetch_all(pool)
    .await?;

    Ok(entries)
}

pub async fn create_time_off_period(
    pool: &Pool<Postgres>,
    instructor_id: Uuid,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<DbTimeOffPeriod> {
    let id = Uuid::new_v4();

    let period = sqlx::query_as::<_, DbTimeOffPeriod>(
        r#"
        INSERT INTO time_off_periods (id, instructor_id, start_date, end_date, created_at)
        VALUES ($1, $2, $3, $4, NOW())
        RETURNING id, instructor_id, start_date, end_date, created_at
        "#,
    )
    .bind(id)
    .bind(instructor_id)
    .bind(start_date)
    .bind(end_date)
    .fetch_one(pool)
    .await?;

    Ok(period)
}

pub async fn get_time_off_by_instructor(
    pool: &Pool<Postgres>,
    instructor_id: Uuid,
) -> Result<Vec<DbTimeOffPeriod>> {
    let periods = sqlx::query_as::<_, DbTimeOffPeriod>(
        r#"
        SELECT id, instructor_id, start_date, end_date, created_at
        FROM time_off_periods
        WHERE instructor_id = $1
        ORDER BY start_date ASC
        "#,
    )
    .bind(instructor_id)
    .fetch_all(pool)
    .await?;

    Ok(periods)
}
