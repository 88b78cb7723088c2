use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "dishes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub category: String,
    pub name: Option<String>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub ingredients: Option<Json>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub allergens: Option<Json>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub removable_allergens: Option<Json>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub diet: Option<Json>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
