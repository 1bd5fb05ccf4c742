use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create instructors table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS instructors (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            hourly_rate DOUBLE PRECISION NOT NULL,
            booking_fee DOUBLE PRECISION NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create weekly_schedule_entries table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS weekly_schedule_entries (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            instructor_id UUID NOT NULL REFERENCES instructors(id),
            day_of_week SMALLINT NOT NULL CHECK (day_of_week BETWEEN 0 AND 6),
            start_time TIME NOT NULL,
            end_time TIME NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_working_window CHECK (end_time > start_time),
            CONSTRAINT one_window_per_weekday UNIQUE (instructor_id, day_of_week)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create time_off_periods table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS time_off_periods (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            instructor_id UUID NOT NULL REFERENCES instructors(id),
            start_date DATE NOT NULL,
            end_date DATE NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_period CHECK (end_date >= start_date)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create bookings table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS bookings (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            instructor_id UUID NOT NULL REFERENCES instructors(id),
            student_id UUID NOT NULL,
            scheduled_time TIMESTAMP WITH TIME ZONE NOT NULL,
            duration_minutes INTEGER NOT NULL CHECK (duration_minutes > 0),
            status VARCHAR(32) NOT NULL DEFAULT 'confirmed',
            pickup_address VARCHAR(512) NOT NULL,
            notes TEXT NULL,
            cancellation_fee DOUBLE PRECISION NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_bookings_instructor_time
            ON bookings (instructor_id, scheduled_time);
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_bookings_student_time
            ON bookings (student_id, scheduled_time);
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_time_off_instructor
            ON time_off_periods (instructor_id, start_date);
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized");
    Ok(())
}
