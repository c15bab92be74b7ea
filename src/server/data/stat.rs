//! Public stat data repository for database operations

use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::stat::{Stat, UpsertStatParams};

pub struct StatRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: UpsertStatParams) -> Result<Stat, DbErr> {
        let stat = entity::stat::ActiveModel {
            label: ActiveValue::Set(params.label),
            value: ActiveValue::Set(params.value),
            sort_order: ActiveValue::Set(params.sort_order),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Stat::from_entity(stat))
    }

    /// Gets every stat in display order
    pub async fn get_all(&self) -> Result<Vec<Stat>, DbErr> {
        let stats = entity::prelude::Stat::find()
            .order_by_asc(entity::stat::Column::SortOrder)
            .order_by_asc(entity::stat::Column::Id)
            .all(self.db)
            .await?;

        Ok(stats.into_iter().map(Stat::from_entity).collect())
    }

    pub async fn update(&self, id: i32, params: UpsertStatParams) -> Result<Option<Stat>, DbErr> {
        let Some(existing) = entity::prelude::Stat::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut stat: entity::stat::ActiveModel = existing.into();
        stat.label = ActiveValue::Set(params.label);
        stat.value = ActiveValue::Set(params.value);
        stat.sort_order = ActiveValue::Set(params.sort_order);
        let stat = stat.update(self.db).await?;

        Ok(Some(Stat::from_entity(stat)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Stat::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
