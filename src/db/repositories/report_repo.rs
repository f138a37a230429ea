//! Report repository

use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::{
    db::predicate::{Predicate, Sort},
    error::AppResult,
    models::{NewReport, Report, ReportPatch, ReportRecord},
};

/// Columns selected by every read query; reports are always joined with
/// their owning user so the login can be projected into responses.
const RECORD_COLUMNS: &str =
    "r.id, r.title, r.description, r.ip_address, r.user_id, u.login AS user_login";

const FROM_JOINED: &str = " FROM reports r LEFT JOIN users u ON u.id = r.user_id";

/// Repository for report database operations
pub struct ReportRepository;

impl ReportRepository {
    /// Find all reports matching a predicate, in the requested order
    pub async fn find_all(
        pool: &PgPool,
        predicate: &Predicate,
        sort: Sort,
    ) -> AppResult<Vec<ReportRecord>> {
        let mut qb = Self::select(predicate);
        sort.push_order_by(&mut qb);

        let records = qb.build_query_as::<ReportRecord>().fetch_all(pool).await?;
        Ok(records)
    }

    /// Find one page of reports matching a predicate
    pub async fn find_page(
        pool: &PgPool,
        predicate: &Predicate,
        sort: Sort,
        offset: i64,
        limit: i64,
    ) -> AppResult<Vec<ReportRecord>> {
        let mut qb = Self::select(predicate);
        sort.push_order_by(&mut qb);
        qb.push(" LIMIT ").push_bind(limit);
        qb.push(" OFFSET ").push_bind(offset);

        let records = qb.build_query_as::<ReportRecord>().fetch_all(pool).await?;
        Ok(records)
    }

    /// Count reports matching a predicate without materializing rows
    pub async fn count(pool: &PgPool, predicate: &Predicate) -> AppResult<i64> {
        let mut qb = QueryBuilder::new(if predicate.is_distinct() {
            "SELECT COUNT(DISTINCT r.id)"
        } else {
            "SELECT COUNT(*)"
        });
        qb.push(FROM_JOINED);
        predicate.push_where(&mut qb);

        let count: i64 = qb.build_query_scalar().fetch_one(pool).await?;
        Ok(count)
    }

    /// Find report by ID
    pub async fn find_by_id(pool: &PgPool, id: i64) -> AppResult<Option<ReportRecord>> {
        let record = sqlx::query_as::<_, ReportRecord>(
            r#"
            SELECT r.id, r.title, r.description, r.ip_address, r.user_id, u.login AS user_login
            FROM reports r LEFT JOIN users u ON u.id = r.user_id
            WHERE r.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Check whether a report exists
    pub async fn exists(pool: &PgPool, id: i64) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar(r#"SELECT EXISTS(SELECT 1 FROM reports WHERE id = $1)"#)
                .bind(id)
                .fetch_one(pool)
                .await?;

        Ok(exists)
    }

    /// Create a new report
    pub async fn create(pool: &PgPool, new: &NewReport) -> AppResult<Report> {
        let report = sqlx::query_as::<_, Report>(
            r#"
            INSERT INTO reports (title, description, ip_address, user_id)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&new.title)
        .bind(&new.description)
        .bind(&new.ip_address)
        .bind(new.user_id)
        .fetch_one(pool)
        .await?;

        Ok(report)
    }

    /// Replace all report fields
    pub async fn update(pool: &PgPool, id: i64, new: &NewReport) -> AppResult<Report> {
        let report = sqlx::query_as::<_, Report>(
            r#"
            UPDATE reports
            SET title = $2, description = $3, ip_address = $4, user_id = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&new.title)
        .bind(&new.description)
        .bind(&new.ip_address)
        .bind(new.user_id)
        .fetch_one(pool)
        .await?;

        Ok(report)
    }

    /// Update only the provided report fields
    pub async fn partial_update(pool: &PgPool, id: i64, patch: &ReportPatch) -> AppResult<Report> {
        let report = sqlx::query_as::<_, Report>(
            r#"
            UPDATE reports
            SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                ip_address = COALESCE($4, ip_address),
                user_id = COALESCE($5, user_id)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&patch.title)
        .bind(&patch.description)
        .bind(&patch.ip_address)
        .bind(patch.user_id)
        .fetch_one(pool)
        .await?;

        Ok(report)
    }

    /// Delete report
    pub async fn delete(pool: &PgPool, id: i64) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM reports WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }

    fn select(predicate: &Predicate) -> QueryBuilder<'static, Postgres> {
        let mut qb = QueryBuilder::new(if predicate.is_distinct() {
            "SELECT DISTINCT "
        } else {
            "SELECT "
        });
        qb.push(RECORD_COLUMNS);
        qb.push(FROM_JOINED);
        predicate.push_where(&mut qb);
        qb
    }
}
