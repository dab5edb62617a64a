//! Database error type and its client-facing payload

use serde::Serialize;
use sqlx::mysql::MySqlDatabaseError;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Driver error as reported back to API clients.
///
/// No classification happens here: the driver's own kind, SQLSTATE,
/// server error number and message are passed through as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorPayload {
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errno: Option<u16>,
    pub message: String,
}

impl DbError {
    /// Render the underlying driver error for a response body
    pub fn payload(&self) -> ErrorPayload {
        match self {
            Self::Sqlx(e) => sqlx_payload(e),
        }
    }
}

fn sqlx_payload(err: &sqlx::Error) -> ErrorPayload {
    if let sqlx::Error::Database(db_err) = err {
        let errno = db_err
            .try_downcast_ref::<MySqlDatabaseError>()
            .map(MySqlDatabaseError::number);
        return ErrorPayload {
            kind: "Database",
            code: db_err.code().map(|c| c.into_owned()),
            errno,
            message: db_err.message().to_string(),
        };
    }

    let kind = match err {
        sqlx::Error::Configuration(_) => "Configuration",
        sqlx::Error::Io(_) => "Io",
        sqlx::Error::Tls(_) => "Tls",
        sqlx::Error::Protocol(_) => "Protocol",
        sqlx::Error::RowNotFound => "RowNotFound",
        sqlx::Error::TypeNotFound { .. } => "TypeNotFound",
        sqlx::Error::ColumnIndexOutOfBounds { .. } => "ColumnIndexOutOfBounds",
        sqlx::Error::ColumnNotFound(_) => "ColumnNotFound",
        sqlx::Error::ColumnDecode { .. } => "ColumnDecode",
        sqlx::Error::Decode(_) => "Decode",
        sqlx::Error::PoolTimedOut => "PoolTimedOut",
        sqlx::Error::PoolClosed => "PoolClosed",
        sqlx::Error::WorkerCrashed => "WorkerCrashed",
        _ => "Other",
    };

    ErrorPayload {
        kind,
        code: None,
        errno: None,
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn protocol_error_payload() {
        let err = DbError::from(sqlx::Error::Protocol("connection lost".into()));
        let payload = err.payload();

        assert_eq!(payload.kind, "Protocol");
        assert!(payload.message.contains("connection lost"));
        assert!(payload.code.is_none());
    }

    #[test]
    fn payload_skips_missing_codes() {
        let payload = DbError::from(sqlx::Error::PoolClosed).payload();
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value["kind"], json!("PoolClosed"));
        assert!(value.get("code").is_none());
        assert!(value.get("errno").is_none());
    }
}
