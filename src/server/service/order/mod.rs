//! Order ledger operations.
//!
//! Checkout of standard and extension orders, admin reads, classification of
//! legacy rows, status updates and the guarded delete.

pub mod status;

#[cfg(test)]
mod tests;

use entity::sea_orm_active_enums::OrderType;
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        assignment::AssignmentDto,
        order::{
            ClassifyOrderDto, CreateOrderDto, ExtendOrderDto, OrderDetailDto, OrderDto,
            OrderFilterParams, OrderLookupDto, OrderTypeDto, StatusUpdateDto,
        },
    },
    server::{
        data::{
            catalog::plan::PlanRepository,
            order::{order_account::AssignmentRepository, NewOrder, OrderRepository},
        },
        error::{order::OrderError, resource::ResourceError, Error},
        service::{order::status::StatusChange, require_text},
    },
};

/// Buyer details shared by standard and extension checkout
struct Buyer {
    name: String,
    email: String,
    phone: Option<String>,
    depositor_name: String,
}

impl Buyer {
    /// Trims every field so lookup by email and name matches what was stored
    fn new(name: String, email: String, phone: Option<String>, depositor_name: String) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            phone: phone
                .map(|phone| phone.trim().to_string())
                .filter(|phone| !phone.is_empty()),
            depositor_name: depositor_name.trim().to_string(),
        }
    }

    fn validate(&self) -> Result<(), Error> {
        require_text("buyer_name", &self.name)?;
        require_text("buyer_email", &self.email)?;
        require_text("depositor_name", &self.depositor_name)?;

        Ok(())
    }
}

pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    /// Creates a new instance of [`OrderService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Places a standard order for a plan of a product.
    ///
    /// The amount is copied from the plan's current price.
    ///
    /// # Returns
    /// - `Ok(OrderDto)` - Order created as `STANDARD`, `PENDING`, `UNASSIGNED`
    /// - `Err(Error::RequestError)` - Blank buyer details
    /// - `Err(Error::ResourceError)` - Plan does not exist
    /// - `Err(Error::OrderError)` - Plan belongs to another product or is not on sale
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create(&self, dto: CreateOrderDto) -> Result<OrderDto, Error> {
        let buyer = Buyer::new(
            dto.buyer_name,
            dto.buyer_email,
            dto.buyer_phone,
            dto.depositor_name,
        );
        buyer.validate()?;

        let plan = self.purchasable_plan(dto.plan_id, dto.product_id).await?;

        let order = OrderRepository::new(self.db)
            .create(NewOrder {
                product_id: plan.product_id,
                plan_id: plan.id,
                buyer_name: buyer.name,
                buyer_email: buyer.email,
                buyer_phone: buyer.phone,
                depositor_name: buyer.depositor_name,
                amount: plan.price,
                order_type: OrderType::Standard,
                related_order_id: None,
            })
            .await?;

        tracing::info!(order_id = order.id, plan_id = plan.id, "Created order");

        Ok(order.into())
    }

    /// Places an extension of an existing order.
    ///
    /// The plan must belong to the original order's product.
    ///
    /// # Returns
    /// - `Ok(OrderDto)` - Order created as `EXTENSION` linked to `original_id`
    /// - `Err(Error::OrderError)` - Original missing, plan mismatch or plan not on sale
    /// - `Err(Error::RequestError)` - Blank buyer details
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn extend(&self, original_id: i32, dto: ExtendOrderDto) -> Result<OrderDto, Error> {
        let buyer = Buyer::new(
            dto.buyer_name,
            dto.buyer_email,
            dto.buyer_phone,
            dto.depositor_name,
        );
        buyer.validate()?;

        let order_repo = OrderRepository::new(self.db);
        let original = order_repo
            .get(original_id)
            .await?
            .ok_or(OrderError::OriginalNotFound(original_id))?;

        let plan = self.purchasable_plan(dto.plan_id, original.product_id).await?;

        let order = order_repo
            .create(NewOrder {
                product_id: original.product_id,
                plan_id: plan.id,
                buyer_name: buyer.name,
                buyer_email: buyer.email,
                buyer_phone: buyer.phone,
                depositor_name: buyer.depositor_name,
                amount: plan.price,
                order_type: OrderType::Extension,
                related_order_id: Some(original.id),
            })
            .await?;

        tracing::info!(
            order_id = order.id,
            original_order_id = original.id,
            "Created extension order"
        );

        Ok(order.into())
    }

    /// Retrieves an order with its assignments and the extensions made to it
    pub async fn get(&self, order_id: i32) -> Result<OrderDetailDto, Error> {
        let order_repo = OrderRepository::new(self.db);

        let order = order_repo
            .get(order_id)
            .await?
            .ok_or(OrderError::NotFound(order_id))?;

        let assignments = AssignmentRepository::new(self.db)
            .list_by_order(order_id)
            .await?
            .into_iter()
            .map(AssignmentDto::from)
            .collect();
        let extension_order_ids = order_repo.find_extension_ids(order_id).await?;

        Ok(OrderDetailDto {
            order: order.into(),
            assignments,
            extension_order_ids,
        })
    }

    pub async fn list(&self, filter: OrderFilterParams) -> Result<Vec<OrderDto>, Error> {
        let orders = OrderRepository::new(self.db).list(filter).await?;

        Ok(orders.into_iter().map(OrderDto::from).collect())
    }

    /// Finds a buyer's orders by the email and name given at checkout
    pub async fn lookup(&self, dto: OrderLookupDto) -> Result<Vec<OrderDto>, Error> {
        require_text("buyer_email", &dto.buyer_email)?;
        require_text("buyer_name", &dto.buyer_name)?;

        let orders = OrderRepository::new(self.db)
            .find_by_buyer(dto.buyer_email.trim(), dto.buyer_name.trim())
            .await?;

        Ok(orders.into_iter().map(OrderDto::from).collect())
    }

    /// Sets the classification of an order, typically a legacy unclassified row.
    ///
    /// `EXTENSION` requires `related_order_id` naming another existing order;
    /// `STANDARD` always clears it.
    ///
    /// # Returns
    /// - `Ok(OrderDto)` - Order reclassified
    /// - `Err(Error::OrderError)` - Order or related order missing, link absent or self-referencing
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn classify(&self, order_id: i32, dto: ClassifyOrderDto) -> Result<OrderDto, Error> {
        let order_repo = OrderRepository::new(self.db);

        if order_repo.get(order_id).await?.is_none() {
            return Err(OrderError::NotFound(order_id).into());
        }

        let related_order_id = match dto.order_type {
            OrderTypeDto::Standard => None,
            OrderTypeDto::Extension => {
                let related_order_id = dto
                    .related_order_id
                    .ok_or(OrderError::MissingRelatedOrder)?;

                if related_order_id == order_id {
                    return Err(OrderError::SelfReference(order_id).into());
                }
                if order_repo.get(related_order_id).await?.is_none() {
                    return Err(OrderError::OriginalNotFound(related_order_id).into());
                }

                Some(related_order_id)
            }
        };

        let order = order_repo
            .classify(order_id, dto.order_type.into(), related_order_id)
            .await?
            .ok_or(OrderError::NotFound(order_id))?;

        tracing::info!(
            order_id = order.id,
            order_type = ?dto.order_type,
            related_order_id = ?related_order_id,
            "Classified order"
        );

        Ok(order.into())
    }

    /// Applies a partial status update, see [`StatusChange::resolve`]
    pub async fn update_status(
        &self,
        order_id: i32,
        dto: StatusUpdateDto,
    ) -> Result<OrderDto, Error> {
        let change = StatusChange::resolve(dto)?;

        let order = OrderRepository::new(self.db)
            .update_status(order_id, change.payment_status, change.assignment_status)
            .await?
            .ok_or(OrderError::NotFound(order_id))?;

        Ok(order.into())
    }

    /// Deletes an order that no assignment references.
    ///
    /// # Returns
    /// - `Ok(())` - Order deleted
    /// - `Err(Error::OrderError(HasDependentAssignments))` - Any assignment row references the order, nothing changed
    /// - `Err(Error::OrderError(NotFound))` - Order does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn delete(&self, order_id: i32) -> Result<(), Error> {
        let order_repo = OrderRepository::new(self.db);

        let result = order_repo.delete_if_unassigned(order_id).await?;
        if result.rows_affected > 0 {
            tracing::info!(order_id = order_id, "Deleted order");

            return Ok(());
        }

        match order_repo.get(order_id).await? {
            Some(_) => Err(OrderError::HasDependentAssignments(order_id).into()),
            None => Err(OrderError::NotFound(order_id).into()),
        }
    }

    async fn purchasable_plan(
        &self,
        plan_id: i32,
        product_id: i32,
    ) -> Result<entity::product_plan::Model, Error> {
        let plan = PlanRepository::new(self.db)
            .get(plan_id)
            .await?
            .ok_or_else(|| ResourceError::not_found("Plan", plan_id))?;

        if plan.product_id != product_id {
            return Err(OrderError::PlanProductMismatch {
                plan_id,
                product_id,
            }
            .into());
        }
        if !plan.is_active {
            return Err(OrderError::PlanUnavailable(plan_id).into());
        }

        Ok(plan)
    }
}
