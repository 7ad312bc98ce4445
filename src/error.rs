//! # Error Handling
//!
//! Error taxonomy for the fixture loader. Recoverable errors are contained
//! at the smallest possible scope: a missing prerequisite skips one tenant's
//! loop, a row-insert failure skips one fixture. Neither aborts the run.

use sea_orm::DbErr;
use thiserror::Error;
use uuid::Uuid;

/// Errors raised while seeding.
#[derive(Debug, Error)]
pub enum SeedError {
    /// A prerequisite entity set is empty for the tenant; the dependent
    /// loop is skipped with a warning.
    #[error("missing prerequisite for tenant {tenant_id}: no {what}")]
    MissingPrerequisite {
        tenant_id: Uuid,
        what: &'static str,
    },

    /// A single fixture row failed to insert. Logged and skipped.
    #[error("failed to insert fixture '{fixture}' for tenant {tenant_id}: {source}")]
    RowInsert {
        fixture: String,
        tenant_id: Uuid,
        #[source]
        source: DbErr,
    },

    #[error(transparent)]
    Db(#[from] DbErr),
}

/// Classifies a [`DbErr`] as a unique-constraint violation.
///
/// A duplicate natural key means a previous partial run already created the
/// row, so the fixture is counted as skipped rather than failed.
pub fn is_unique_violation(error: &DbErr) -> bool {
    use sea_orm::RuntimeErr;

    const PG_UNIQUE: &str = "23505";
    const MYSQL_DUPLICATE_CODES: &[&str] = &["1022", "1062", "1169", "1586"];
    const SQLITE_DUPLICATE_CODES: &[&str] = &["1555", "2067"];

    let runtime_err = match error {
        DbErr::Query(RuntimeErr::SqlxError(sqlx_err))
        | DbErr::Exec(RuntimeErr::SqlxError(sqlx_err)) => sqlx_err,
        _ => return false,
    };

    let Some(db_error) = runtime_err.as_database_error() else {
        return false;
    };

    if db_error.is_unique_violation() {
        return true;
    }

    if let Some(code) = db_error.code() {
        let code_str = code.as_ref();
        if code_str == PG_UNIQUE
            || MYSQL_DUPLICATE_CODES.contains(&code_str)
            || SQLITE_DUPLICATE_CODES.contains(&code_str)
        {
            return true;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_prerequisite_message_names_tenant_and_entity() {
        let tenant_id = Uuid::new_v4();
        let err = SeedError::MissingPrerequisite {
            tenant_id,
            what: "branches",
        };
        let message = err.to_string();
        assert!(message.contains("no branches"));
        assert!(message.contains(&tenant_id.to_string()));
    }

    #[test]
    fn non_sqlx_errors_are_not_unique_violations() {
        assert!(!is_unique_violation(&DbErr::RecordNotFound(
            "tenant".to_string()
        )));
        assert!(!is_unique_violation(&DbErr::Custom("boom".to_string())));
    }
}
