//! Repository for the `users` table.

use sqlx::PgPool;
use unipas_core::types::DbId;

use crate::models::user::{UpdateUser, User, UserWithRole};

const COLUMNS: &str = "id, username, email, password_hash, role_id, is_active, \
     failed_login_attempts, locked_until, created_at, updated_at";

/// Columns for the user-with-role join.
const JOINED_COLUMNS: &str = "u.id, u.username, u.email, r.name AS role, u.is_active, \
     u.created_at, u.updated_at";

/// Provides CRUD and login-bookkeeping operations for admin panel users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user. The password is already hashed by the caller.
    pub async fn create(
        pool: &PgPool,
        username: &str,
        email: &str,
        password_hash: &str,
        role_id: DbId,
    ) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (username, email, password_hash, role_id) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .bind(email)
            .bind(password_hash)
            .bind(role_id)
            .fetch_one(pool)
            .await
    }

    /// Find a user by username (login path).
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE username = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user joined with its role name.
    pub async fn find_with_role(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<UserWithRole>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM users u \
             JOIN roles r ON r.id = u.role_id \
             WHERE u.id = $1"
        );
        sqlx::query_as::<_, UserWithRole>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all users with role names, ordered by username.
    pub async fn list_with_roles(pool: &PgPool) -> Result<Vec<UserWithRole>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM users u \
             JOIN roles r ON r.id = u.role_id \
             ORDER BY u.username"
        );
        sqlx::query_as::<_, UserWithRole>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update a user's email, role, or active flag. The role name in
    /// `input` is resolved to `role_id` by the caller.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateUser,
        role_id: Option<DbId>,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET \
                email = COALESCE($2, email), \
                role_id = COALESCE($3, role_id), \
                is_active = COALESCE($4, is_active), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(&input.email)
            .bind(role_id)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Replace a user's password hash (admin reset).
    pub async fn set_password_hash(
        pool: &PgPool,
        id: DbId,
        password_hash: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE users SET password_hash = $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(password_hash)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Record a failed login attempt; lock the account for `lock_mins`
    /// once `max_attempts` consecutive failures are reached.
    pub async fn record_login_failure(
        pool: &PgPool,
        id: DbId,
        max_attempts: i32,
        lock_mins: i32,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE users SET \
                failed_login_attempts = failed_login_attempts + 1, \
                locked_until = CASE \
                    WHEN failed_login_attempts + 1 >= $2 \
                    THEN NOW() + make_interval(mins => $3::int) \
                    ELSE locked_until \
                END, \
                updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(id)
        .bind(max_attempts)
        .bind(lock_mins)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Reset the failed-attempt counter and clear any lock (successful login).
    pub async fn reset_login_failures(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE users SET failed_login_attempts = 0, locked_until = NULL, \
             updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(())
    }
}
