//! `favorite_games` table entity
//!
//! One row per favorite, keyed by the catalog id. `added_at` holds unix
//! milliseconds.

#![allow(missing_docs)]

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "favorite_games")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,

    #[sea_orm(column_type = "Text")]
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub background_image: Option<String>,
    pub rating: f64,
    pub metacritic: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub released: Option<String>,

    pub added_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
