pub mod order_account;

use chrono::Utc;
use entity::sea_orm_active_enums::OrderType;
use sea_orm::{
    sea_query::Query, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr,
    DeleteResult, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::order::OrderFilterParams;

/// Fields of an order about to be inserted
pub struct NewOrder {
    pub product_id: i32,
    pub plan_id: i32,
    pub buyer_name: String,
    pub buyer_email: String,
    pub buyer_phone: Option<String>,
    pub depositor_name: String,
    pub amount: i64,
    pub order_type: OrderType,
    pub related_order_id: Option<i32>,
}

pub const DEFAULT_PAYMENT_STATUS: &str = "PENDING";
pub const ASSIGNED_STATUS: &str = "ASSIGNED";
pub const UNASSIGNED_STATUS: &str = "UNASSIGNED";

pub struct OrderRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrderRepository<'a, C> {
    /// Creates a new instance of [`OrderRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an order with `PENDING` payment and `UNASSIGNED` assignment status
    pub async fn create(&self, order: NewOrder) -> Result<entity::order::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let order = entity::order::ActiveModel {
            product_id: ActiveValue::Set(order.product_id),
            plan_id: ActiveValue::Set(order.plan_id),
            buyer_name: ActiveValue::Set(order.buyer_name),
            buyer_email: ActiveValue::Set(order.buyer_email),
            buyer_phone: ActiveValue::Set(order.buyer_phone),
            depositor_name: ActiveValue::Set(order.depositor_name),
            amount: ActiveValue::Set(order.amount),
            order_type: ActiveValue::Set(Some(order.order_type)),
            related_order_id: ActiveValue::Set(order.related_order_id),
            payment_status: ActiveValue::Set(DEFAULT_PAYMENT_STATUS.to_string()),
            assignment_status: ActiveValue::Set(UNASSIGNED_STATUS.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        order.insert(self.db).await
    }

    pub async fn get(&self, order_id: i32) -> Result<Option<entity::order::Model>, DbErr> {
        entity::prelude::Order::find_by_id(order_id)
            .one(self.db)
            .await
    }

    /// Lists orders matching every provided filter, newest first
    pub async fn list(&self, filter: OrderFilterParams) -> Result<Vec<entity::order::Model>, DbErr> {
        let mut query = entity::prelude::Order::find();

        if let Some(payment_status) = filter.payment_status {
            query = query.filter(entity::order::Column::PaymentStatus.eq(payment_status));
        }
        if let Some(assignment_status) = filter.assignment_status {
            query = query.filter(entity::order::Column::AssignmentStatus.eq(assignment_status));
        }
        if let Some(order_type) = filter.order_type {
            query = query.filter(entity::order::Column::OrderType.eq(OrderType::from(order_type)));
        }
        if let Some(buyer_email) = filter.buyer_email {
            query = query.filter(entity::order::Column::BuyerEmail.eq(buyer_email));
        }

        query
            .order_by_desc(entity::order::Column::CreatedAt)
            .order_by_desc(entity::order::Column::Id)
            .all(self.db)
            .await
    }

    /// Orders placed under the given buyer email and name, newest first
    pub async fn find_by_buyer(
        &self,
        buyer_email: &str,
        buyer_name: &str,
    ) -> Result<Vec<entity::order::Model>, DbErr> {
        entity::prelude::Order::find()
            .filter(entity::order::Column::BuyerEmail.eq(buyer_email))
            .filter(entity::order::Column::BuyerName.eq(buyer_name))
            .order_by_desc(entity::order::Column::CreatedAt)
            .order_by_desc(entity::order::Column::Id)
            .all(self.db)
            .await
    }

    /// IDs of the extension orders pointing back at `order_id`
    pub async fn find_extension_ids(&self, order_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Order::find()
            .select_only()
            .column(entity::order::Column::Id)
            .filter(entity::order::Column::RelatedOrderId.eq(order_id))
            .order_by_asc(entity::order::Column::Id)
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Orders with no `order_type` at all
    pub async fn find_unclassified(&self) -> Result<Vec<entity::order::Model>, DbErr> {
        entity::prelude::Order::find()
            .filter(entity::order::Column::OrderType.is_null())
            .order_by_asc(entity::order::Column::Id)
            .all(self.db)
            .await
    }

    /// Extension orders whose `related_order_id` is null
    pub async fn find_extensions_missing_link(&self) -> Result<Vec<entity::order::Model>, DbErr> {
        entity::prelude::Order::find()
            .filter(entity::order::Column::OrderType.eq(OrderType::Extension))
            .filter(entity::order::Column::RelatedOrderId.is_null())
            .order_by_asc(entity::order::Column::Id)
            .all(self.db)
            .await
    }

    /// Orders that may fail either classification audit
    ///
    /// Superset of both audits: rows with no `order_type` or no
    /// `related_order_id`. Callers narrow it down per audit.
    pub async fn find_classification_suspects(&self) -> Result<Vec<entity::order::Model>, DbErr> {
        entity::prelude::Order::find()
            .filter(
                Condition::any()
                    .add(entity::order::Column::OrderType.is_null())
                    .add(entity::order::Column::RelatedOrderId.is_null()),
            )
            .order_by_asc(entity::order::Column::Id)
            .all(self.db)
            .await
    }

    /// Overwrites whichever statuses are provided
    ///
    /// Returns `Ok(None)` when the order does not exist.
    pub async fn update_status(
        &self,
        order_id: i32,
        payment_status: Option<String>,
        assignment_status: Option<String>,
    ) -> Result<Option<entity::order::Model>, DbErr> {
        let Some(order) = self.get(order_id).await? else {
            return Ok(None);
        };

        let mut order_am = order.into_active_model();
        if let Some(payment_status) = payment_status {
            order_am.payment_status = ActiveValue::Set(payment_status);
        }
        if let Some(assignment_status) = assignment_status {
            order_am.assignment_status = ActiveValue::Set(assignment_status);
        }
        order_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let order = order_am.update(self.db).await?;

        Ok(Some(order))
    }

    /// Sets the classification of an order
    ///
    /// Returns `Ok(None)` when the order does not exist.
    pub async fn classify(
        &self,
        order_id: i32,
        order_type: OrderType,
        related_order_id: Option<i32>,
    ) -> Result<Option<entity::order::Model>, DbErr> {
        let Some(order) = self.get(order_id).await? else {
            return Ok(None);
        };

        let mut order_am = order.into_active_model();
        order_am.order_type = ActiveValue::Set(Some(order_type));
        order_am.related_order_id = ActiveValue::Set(related_order_id);
        order_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let order = order_am.update(self.db).await?;

        Ok(Some(order))
    }

    /// Deletes an order only when no assignment row, active or not, references it
    ///
    /// Runs as a single conditional `DELETE`, so no assignment can be created
    /// between the check and the delete. Zero [`DeleteResult::rows_affected`]
    /// means the order is missing or still referenced.
    pub async fn delete_if_unassigned(&self, order_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Order::delete_many()
            .filter(entity::order::Column::Id.eq(order_id))
            .filter(
                entity::order::Column::Id.not_in_subquery(
                    Query::select()
                        .column(entity::order_account::Column::OrderId)
                        .from(entity::order_account::Entity)
                        .to_owned(),
                ),
            )
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use slotshare_test_utils::prelude::*;

    use super::*;
    use crate::model::order::OrderTypeDto;

    mod list {
        use super::*;

        /// Expect filters to combine and results to be newest first
        #[tokio::test]
        async fn filters_and_orders_newest_first() -> Result<(), TestError> {
            let test = TestBuilder::new().with_store_tables().build().await?;
            let (_, plan) = test.catalog().insert_product_with_plan().await?;
            let first = test.order().insert_standard_order(&plan).await?;
            let second = test.order().insert_standard_order(&plan).await?;
            let extension = test.order().insert_extension_order(&plan, first.id).await?;

            let repo = OrderRepository::new(&test.db);
            repo.update_status(second.id, Some("PAID".to_string()), None)
                .await?;

            let all: Vec<i32> = repo
                .list(OrderFilterParams::default())
                .await?
                .into_iter()
                .map(|o| o.id)
                .collect();
            let paid = repo
                .list(OrderFilterParams {
                    payment_status: Some("PAID".to_string()),
                    ..Default::default()
                })
                .await?;
            let extensions = repo
                .list(OrderFilterParams {
                    order_type: Some(OrderTypeDto::Extension),
                    ..Default::default()
                })
                .await?;

            assert_eq!(all, vec![extension.id, second.id, first.id]);
            assert_eq!(paid.len(), 1);
            assert_eq!(paid[0].id, second.id);
            assert_eq!(extensions.len(), 1);
            assert_eq!(extensions[0].id, extension.id);

            Ok(())
        }
    }

    mod audits {
        use super::*;

        /// Expect null-type and extension/null rows to be reported separately
        #[tokio::test]
        async fn finds_unclassified_and_orphaned() -> Result<(), TestError> {
            let test = TestBuilder::new().with_store_tables().build().await?;
            let (_, plan) = test.catalog().insert_product_with_plan().await?;
            let legacy = test.order().insert_order(&plan, None, None).await?;
            let orphan = test
                .order()
                .insert_order(&plan, Some(OrderType::Extension), None)
                .await?;
            test.order().insert_extension_order(&plan, legacy.id).await?;

            let repo = OrderRepository::new(&test.db);
            let unclassified: Vec<i32> = repo
                .find_unclassified()
                .await?
                .into_iter()
                .map(|o| o.id)
                .collect();
            let orphaned: Vec<i32> = repo
                .find_extensions_missing_link()
                .await?
                .into_iter()
                .map(|o| o.id)
                .collect();

            assert_eq!(unclassified, vec![legacy.id]);
            assert_eq!(orphaned, vec![orphan.id]);

            Ok(())
        }
    }

    mod delete_if_unassigned {
        use super::*;

        /// Expect the order to be removed when nothing references it
        #[tokio::test]
        async fn deletes_order_without_assignments() -> Result<(), TestError> {
            let test = TestBuilder::new().with_store_tables().build().await?;
            let (_, plan) = test.catalog().insert_product_with_plan().await?;
            let order = test.order().insert_standard_order(&plan).await?;

            let repo = OrderRepository::new(&test.db);
            let result = repo.delete_if_unassigned(order.id).await?;

            assert_eq!(result.rows_affected, 1);
            assert!(repo.get(order.id).await?.is_none());

            Ok(())
        }

        /// Expect no deletion while an inactive assignment references the order
        #[tokio::test]
        async fn keeps_order_with_assignment() -> Result<(), TestError> {
            let test = TestBuilder::new().with_store_tables().build().await?;
            let (product, plan) = test.catalog().insert_product_with_plan().await?;
            let account = test.catalog().insert_account(product.id, 4).await?;
            let order = test.order().insert_standard_order(&plan).await?;
            test.assignment()
                .insert_assignment(account.id, 1, order.id, false)
                .await?;

            let repo = OrderRepository::new(&test.db);
            let result = repo.delete_if_unassigned(order.id).await?;

            assert_eq!(result.rows_affected, 0);
            assert!(repo.get(order.id).await?.is_some());

            Ok(())
        }

        /// Expect deleting an original order to null its extension's link
        #[tokio::test]
        async fn orphans_extensions_of_deleted_order() -> Result<(), TestError> {
            let test = TestBuilder::new().with_store_tables().build().await?;
            let (_, plan) = test.catalog().insert_product_with_plan().await?;
            let original = test.order().insert_standard_order(&plan).await?;
            let extension = test.order().insert_extension_order(&plan, original.id).await?;

            let repo = OrderRepository::new(&test.db);
            repo.delete_if_unassigned(original.id).await?;

            let extension = repo.get(extension.id).await?.unwrap();
            assert_eq!(extension.related_order_id, None);
            assert_eq!(repo.find_extensions_missing_link().await?.len(), 1);

            Ok(())
        }
    }

    /// Expect extension ids of an order to be listed
    #[tokio::test]
    async fn finds_extension_ids() -> Result<(), TestError> {
        let test = TestBuilder::new().with_store_tables().build().await?;
        let (_, plan) = test.catalog().insert_product_with_plan().await?;
        let original = test.order().insert_standard_order(&plan).await?;
        let first = test.order().insert_extension_order(&plan, original.id).await?;
        let second = test.order().insert_extension_order(&plan, original.id).await?;

        let ids = OrderRepository::new(&test.db)
            .find_extension_ids(original.id)
            .await?;

        assert_eq!(ids, vec![first.id, second.id]);

        Ok(())
    }
}
