use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "inventory_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub barcode: String,
    pub product_name: String,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub quantity: i32,
    pub unit: String,
    pub expiry_date: Date,
    pub ingredients: Option<String>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub nutrition: Option<Json>,
    pub image_url: Option<String>,
    #[sea_orm(column_type = "JsonBinary")]
    pub suggestions: Json,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
