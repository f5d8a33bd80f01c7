use super::db_data::singer::{ActiveModel, Column, Entity, Model};
use async_trait::async_trait;
use log::debug;
use model::singer::{CreatePayload, Detail, FilterPayload, SingerError, SingerRepository};
use sea_orm::sea_query::Condition;
use sea_orm::{ColumnTrait, DbConn, EntityTrait, QueryFilter, SqlErr};

/// Postgres-backed singer repository. Stateless apart from the injected
/// connection pool, safe to clone and share.
#[derive(Clone)]
pub struct SingerRepositoryImpl {
    db: DbConn,
}

impl SingerRepositoryImpl {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

/// Build the AND-joined filter condition for a singer listing.
///
/// Absent predicates contribute nothing; an entirely empty filter yields an
/// unconditioned select. The name pattern is the raw input wrapped in `%`
/// wildcards, matched against either name column.
fn filter_condition(filter: &FilterPayload) -> Condition {
    let mut condition = Condition::all();

    if !filter.name.is_empty() {
        let pattern = format!("%{}%", filter.name);
        condition = condition.add(
            Condition::any()
                .add(Column::FirstName.like(pattern.as_str()))
                .add(Column::LastName.like(pattern.as_str())),
        );
    }

    if let Some(start) = filter.birth_date_start {
        condition = condition.add(Column::BirthDate.gte(start));
    }

    if let Some(end) = filter.birth_date_end {
        condition = condition.add(Column::BirthDate.lte(end));
    }

    condition
}

#[async_trait]
impl SingerRepository for SingerRepositoryImpl {
    async fn create(&self, payload: CreatePayload) -> Result<(), SingerError> {
        let row = ActiveModel::try_from(&payload).map_err(SingerError::bad_value)?;

        Entity::insert(row)
            .exec(&self.db)
            .await
            .map_err(|err| match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    SingerError::duplicate(payload.singer_id, err)
                }
                _ => SingerError::unknown(err),
            })?;

        Ok(())
    }

    async fn list(&self, filter: FilterPayload) -> Result<Vec<Detail>, SingerError> {
        debug!("listing singers with {:?}", filter);

        let rows: Vec<Model> = Entity::find()
            .filter(filter_condition(&filter))
            .all(&self.db)
            .await
            .map_err(SingerError::unknown)?;

        rows.into_iter()
            .map(|row| Detail::try_from(row).map_err(SingerError::bad_value))
            .collect()
    }

    async fn get(&self, singer_id: i64) -> Result<Detail, SingerError> {
        let row = Entity::find_by_id(singer_id)
            .one(&self.db)
            .await
            .map_err(SingerError::unknown)?
            .ok_or(SingerError::NotFound(singer_id))?;

        Detail::try_from(row).map_err(SingerError::bad_value)
    }
}
