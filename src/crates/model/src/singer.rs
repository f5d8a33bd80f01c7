use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

type Cause = Box<dyn std::error::Error + Send + Sync>;

/// Persistence error for singer operations, classified once at the storage
/// boundary. Storage-originated variants keep the low-level cause attached
/// for diagnostics; callers match on the kind.
#[derive(Debug, Error)]
pub enum SingerError {
    #[error("singer {id} already exists")]
    Duplicate {
        id: i64,
        #[source]
        cause: Cause,
    },
    #[error("singer {0} not found")]
    NotFound(i64),
    #[error("singer record has a bad value")]
    BadValue(#[source] Cause),
    #[error("internal persistence error")]
    Unknown(#[source] Cause),
}

impl SingerError {
    pub fn duplicate(id: i64, cause: impl Into<Cause>) -> Self {
        Self::Duplicate {
            id,
            cause: cause.into(),
        }
    }

    pub fn bad_value(cause: impl Into<Cause>) -> Self {
        Self::BadValue(cause.into())
    }

    pub fn unknown(cause: impl Into<Cause>) -> Self {
        Self::Unknown(cause.into())
    }
}

/// Nested singer info, persisted as a single JSON blob column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Info {
    pub songs: Vec<String>,
    pub awards: Vec<String>,
}

/// Canonical read-side singer representation.
///
/// Empty `first_name`/`last_name` means the name is absent; the row layer
/// renders those as NULL columns. `birth_date` carries no time-of-day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detail {
    pub singer_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub info: Info,
    pub birth_date: Option<NaiveDate>,
}

/// Write-side input for creating a singer. `singer_id` is caller-supplied;
/// uniqueness is enforced by the store, not by this layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePayload {
    pub singer_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub info: Info,
    pub birth_date: Option<NaiveDate>,
}

/// Filter condition for listing singers. All present predicates are
/// combined with AND.
///
/// `name` is a substring match against first or last name via SQL `LIKE`,
/// so it is case sensitive on PostgreSQL; an empty string disables the
/// predicate. Date bounds are inclusive, `None` means unbounded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterPayload {
    pub name: String,
    pub birth_date_start: Option<NaiveDate>,
    pub birth_date_end: Option<NaiveDate>,
}

/// Repository contract for singer persistence.
///
/// Implementations are stateless apart from the shared storage handle and
/// safe for concurrent use. Every operation is cancellable by dropping the
/// returned future; none spawns background work.
#[async_trait]
pub trait SingerRepository: Send + Sync {
    /// Store a new singer. Fails with [`SingerError::Duplicate`] when the
    /// id is already taken.
    async fn create(&self, payload: CreatePayload) -> Result<(), SingerError>;

    /// Fetch singers matching the filter. No matches is `Ok` with an empty
    /// vec, not an error. Result order is storage-defined.
    async fn list(&self, filter: FilterPayload) -> Result<Vec<Detail>, SingerError>;

    /// Point lookup by id.
    async fn get(&self, singer_id: i64) -> Result<Detail, SingerError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_serializes_with_stable_field_names() {
        let info = Info {
            songs: vec!["Total Junk".to_string()],
            awards: vec![],
        };

        let json = serde_json::to_string(&info).unwrap();
        assert_eq!(json, r#"{"songs":["Total Junk"],"awards":[]}"#);

        let back: Info = serde_json::from_str(&json).unwrap();
        assert_eq!(back, info);
    }

    #[test]
    fn errors_keep_their_cause() {
        let cause = serde_json::from_str::<Info>("not json").unwrap_err();
        let err = SingerError::bad_value(cause);

        assert!(matches!(err, SingerError::BadValue(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
