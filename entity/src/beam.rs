use sea_orm::entity::prelude::*;

use crate::sea_orm_active_enums::{CreationOrigin, DeletionOrigin, LinkDirection};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "beam")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub link_direction: LinkDirection,
    pub pattern: Option<String>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
    pub creation_origin: CreationOrigin,
    pub deleted: bool,
    pub deleted_at: Option<DateTimeUtc>,
    pub deletion_origin: Option<DeletionOrigin>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
