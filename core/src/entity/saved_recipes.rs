use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "saved_recipes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub recipe_id: i64,
    pub title: String,
    pub image: Option<String>,
    pub servings: Option<i32>,
    pub ready_in_minutes: Option<i32>,
    pub source_url: Option<String>,
    pub summary: Option<String>,
    pub instructions: Option<String>,
    #[sea_orm(column_type = "JsonBinary")]
    pub ingredients: Json,
    pub saved_at: DateTimeWithTimeZone,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
