//! Products and the plans sold for them.

use sea_orm::DatabaseConnection;

use crate::{
    model::catalog::{
        CreatePlanDto, CreateProductDto, PlanDto, ProductDetailDto, ProductDto, UpdatePlanDto,
        UpdateProductDto,
    },
    server::{
        data::catalog::{plan::PlanRepository, ProductRepository},
        error::{request::RequestError, resource::ResourceError, Error},
        service::require_text,
    },
};

/// Which catalog entries a caller may see
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    /// Storefront, active products and plans only
    Public,
    /// Back-office, everything
    Admin,
}

impl Visibility {
    fn active_only(self) -> bool {
        self == Visibility::Public
    }
}

fn validate_plan_terms(duration_days: Option<i32>, price: Option<i64>) -> Result<(), RequestError> {
    if duration_days.is_some_and(|days| days <= 0) {
        return Err(RequestError::invalid("duration_days", "must be greater than zero"));
    }
    if price.is_some_and(|price| price < 0) {
        return Err(RequestError::invalid("price", "must not be negative"));
    }

    Ok(())
}

pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogService<'a> {
    /// Creates a new instance of [`CatalogService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_products(&self, visibility: Visibility) -> Result<Vec<ProductDto>, Error> {
        let products = ProductRepository::new(self.db)
            .list(visibility.active_only())
            .await?;

        Ok(products.into_iter().map(ProductDto::from).collect())
    }

    /// Retrieves a product with its plans.
    ///
    /// Inactive products are reported as not found to the storefront.
    pub async fn get_product(
        &self,
        product_id: i32,
        visibility: Visibility,
    ) -> Result<ProductDetailDto, Error> {
        let product = self.visible_product(product_id, visibility).await?;

        let plans = PlanRepository::new(self.db)
            .list_by_product(product.id, visibility.active_only())
            .await?;

        Ok(ProductDetailDto {
            product: product.into(),
            plans: plans.into_iter().map(PlanDto::from).collect(),
        })
    }

    pub async fn list_plans(
        &self,
        product_id: i32,
        visibility: Visibility,
    ) -> Result<Vec<PlanDto>, Error> {
        let product = self.visible_product(product_id, visibility).await?;

        let plans = PlanRepository::new(self.db)
            .list_by_product(product.id, visibility.active_only())
            .await?;

        Ok(plans.into_iter().map(PlanDto::from).collect())
    }

    pub async fn create_product(&self, dto: CreateProductDto) -> Result<ProductDto, Error> {
        require_text("name", &dto.name)?;

        let product = ProductRepository::new(self.db).create(dto).await?;

        tracing::info!(product_id = product.id, "Created product");

        Ok(product.into())
    }

    pub async fn update_product(
        &self,
        product_id: i32,
        dto: UpdateProductDto,
    ) -> Result<ProductDto, Error> {
        if let Some(name) = &dto.name {
            require_text("name", name)?;
        }

        let product = ProductRepository::new(self.db)
            .update(product_id, dto)
            .await?
            .ok_or_else(|| ResourceError::not_found("Product", product_id))?;

        Ok(product.into())
    }

    /// Deletes a product together with its plans.
    ///
    /// Fails with a store error while accounts or orders still reference it.
    pub async fn delete_product(&self, product_id: i32) -> Result<(), Error> {
        let result = ProductRepository::new(self.db).delete(product_id).await?;

        if result.rows_affected == 0 {
            return Err(ResourceError::not_found("Product", product_id).into());
        }

        tracing::info!(product_id = product_id, "Deleted product");

        Ok(())
    }

    pub async fn create_plan(&self, dto: CreatePlanDto) -> Result<PlanDto, Error> {
        require_text("name", &dto.name)?;
        validate_plan_terms(Some(dto.duration_days), Some(dto.price))?;

        if ProductRepository::new(self.db)
            .get(dto.product_id)
            .await?
            .is_none()
        {
            return Err(ResourceError::not_found("Product", dto.product_id).into());
        }

        let plan = PlanRepository::new(self.db).create(dto).await?;

        tracing::info!(plan_id = plan.id, product_id = plan.product_id, "Created plan");

        Ok(plan.into())
    }

    pub async fn update_plan(&self, plan_id: i32, dto: UpdatePlanDto) -> Result<PlanDto, Error> {
        if let Some(name) = &dto.name {
            require_text("name", name)?;
        }
        validate_plan_terms(dto.duration_days, dto.price)?;

        let plan = PlanRepository::new(self.db)
            .update(plan_id, dto)
            .await?
            .ok_or_else(|| ResourceError::not_found("Plan", plan_id))?;

        Ok(plan.into())
    }

    /// Deletes a plan, failing with a store error while orders reference it
    pub async fn delete_plan(&self, plan_id: i32) -> Result<(), Error> {
        let result = PlanRepository::new(self.db).delete(plan_id).await?;

        if result.rows_affected == 0 {
            return Err(ResourceError::not_found("Plan", plan_id).into());
        }

        Ok(())
    }

    async fn visible_product(
        &self,
        product_id: i32,
        visibility: Visibility,
    ) -> Result<entity::product::Model, Error> {
        match ProductRepository::new(self.db).get(product_id).await? {
            Some(product) if product.is_active || !visibility.active_only() => Ok(product),
            _ => Err(ResourceError::not_found("Product", product_id).into()),
        }
    }
}
