use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ProductDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub sort_order: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::product::Model> for ProductDto {
    fn from(product: entity::product::Model) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            image_url: product.image_url,
            is_active: product.is_active,
            sort_order: product.sort_order,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// A product with the plans currently offered for it
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ProductDetailDto {
    #[serde(flatten)]
    pub product: ProductDto,
    pub plans: Vec<PlanDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateProductDto {
    pub name: String,
    pub description: String,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
    pub sort_order: Option<i32>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateProductDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
    pub sort_order: Option<i32>,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PlanDto {
    pub id: i32,
    pub product_id: i32,
    pub name: String,
    pub duration_days: i32,
    pub price: i64,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

impl From<entity::product_plan::Model> for PlanDto {
    fn from(plan: entity::product_plan::Model) -> Self {
        Self {
            id: plan.id,
            product_id: plan.product_id,
            name: plan.name,
            duration_days: plan.duration_days,
            price: plan.price,
            is_active: plan.is_active,
            created_at: plan.created_at,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreatePlanDto {
    pub product_id: i32,
    pub name: String,
    pub duration_days: i32,
    pub price: i64,
    pub is_active: Option<bool>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdatePlanDto {
    pub name: Option<String>,
    pub duration_days: Option<i32>,
    pub price: Option<i64>,
    pub is_active: Option<bool>,
}
