use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "client_order_lines")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub client_order_id: Option<i32>,
    pub article_id: Option<i32>,
    #[sea_orm(column_type = "Decimal(Some((12, 3)))")]
    pub quantity: Decimal,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub unit_price: Decimal,
    pub created_at: Option<DateTimeWithTimeZone>,
    pub updated_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::client_orders::Entity",
        from = "Column::ClientOrderId",
        to = "super::client_orders::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    ClientOrder,
    #[sea_orm(
        belongs_to = "super::articles::Entity",
        from = "Column::ArticleId",
        to = "super::articles::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Article,
}

impl Related<super::client_orders::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClientOrder.def()
    }
}

impl Related<super::articles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Article.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
