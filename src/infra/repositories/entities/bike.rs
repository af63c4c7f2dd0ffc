//! Bike database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Bike;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "bikes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Text")]
    pub id: String,
    /// Stored as `model`; renamed to keep `Column::Model` from shadowing the entity type
    #[sea_orm(column_name = "model", column_type = "Text")]
    pub model_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Bike {
    fn from(model: Model) -> Self {
        Bike {
            id: model.id,
            model: model.model_name,
        }
    }
}
