use model::singer::{CreatePayload, Detail, Info};
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "singers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[sea_orm(column_type = "BigInteger")]
    pub singer_id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub singer_info: Vec<u8>,
    pub birth_date: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

impl TryFrom<&CreatePayload> for ActiveModel {
    type Error = serde_json::Error;

    fn try_from(payload: &CreatePayload) -> Result<Self, Self::Error> {
        Ok(Self {
            singer_id: Set(payload.singer_id),
            first_name: Set(non_empty(&payload.first_name)),
            last_name: Set(non_empty(&payload.last_name)),
            singer_info: Set(serde_json::to_vec(&payload.info)?),
            birth_date: Set(payload.birth_date),
        })
    }
}

/// Row-to-domain mapping. NULL names come back as empty strings.
///
/// The info blob must always decode; an empty or otherwise undecodable blob
/// is corrupt data and fails with the decode cause, it is never read as an
/// empty [`Info`].
impl TryFrom<Model> for Detail {
    type Error = serde_json::Error;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let info: Info = serde_json::from_slice(&model.singer_info)?;

        Ok(Self {
            singer_id: model.singer_id,
            first_name: model.first_name.unwrap_or_default(),
            last_name: model.last_name.unwrap_or_default(),
            info,
            birth_date: model.birth_date,
        })
    }
}
