pub mod plan;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::catalog::{CreateProductDto, UpdateProductDto};

pub struct ProductRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProductRepository<'a, C> {
    /// Creates a new instance of [`ProductRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, dto: CreateProductDto) -> Result<entity::product::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let product = entity::product::ActiveModel {
            name: ActiveValue::Set(dto.name),
            description: ActiveValue::Set(dto.description),
            image_url: ActiveValue::Set(dto.image_url),
            is_active: ActiveValue::Set(dto.is_active.unwrap_or(true)),
            sort_order: ActiveValue::Set(dto.sort_order.unwrap_or(0)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        product.insert(self.db).await
    }

    pub async fn get(&self, product_id: i32) -> Result<Option<entity::product::Model>, DbErr> {
        entity::prelude::Product::find_by_id(product_id)
            .one(self.db)
            .await
    }

    /// Lists products by `sort_order`, optionally only active ones
    pub async fn list(&self, active_only: bool) -> Result<Vec<entity::product::Model>, DbErr> {
        let mut query = entity::prelude::Product::find();

        if active_only {
            query = query.filter(entity::product::Column::IsActive.eq(true));
        }

        query
            .order_by_asc(entity::product::Column::SortOrder)
            .order_by_asc(entity::product::Column::Id)
            .all(self.db)
            .await
    }

    /// Applies the fields present in `dto`
    ///
    /// Returns `Ok(None)` when the product does not exist.
    pub async fn update(
        &self,
        product_id: i32,
        dto: UpdateProductDto,
    ) -> Result<Option<entity::product::Model>, DbErr> {
        let Some(product) = self.get(product_id).await? else {
            return Ok(None);
        };

        let mut product_am = product.into_active_model();
        if let Some(name) = dto.name {
            product_am.name = ActiveValue::Set(name);
        }
        if let Some(description) = dto.description {
            product_am.description = ActiveValue::Set(description);
        }
        if let Some(image_url) = dto.image_url {
            product_am.image_url = ActiveValue::Set(Some(image_url));
        }
        if let Some(is_active) = dto.is_active {
            product_am.is_active = ActiveValue::Set(is_active);
        }
        if let Some(sort_order) = dto.sort_order {
            product_am.sort_order = ActiveValue::Set(sort_order);
        }
        product_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let product = product_am.update(self.db).await?;

        Ok(Some(product))
    }

    /// Deletes a product, its plans are removed by cascade
    ///
    /// Returns OK regardless of the product existing, check
    /// [`DeleteResult::rows_affected`] to confirm the deletion.
    pub async fn delete(&self, product_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Product::delete_by_id(product_id)
            .exec(self.db)
            .await
    }
}
