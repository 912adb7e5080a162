use entity::{order, sea_orm_active_enums::OrderType};

/// Orders that were never classified as standard or extension.
pub fn is_unclassified(order: &order::Model) -> bool {
    order.order_type.is_none()
}

/// Extension orders that have lost the link to the order they extend.
///
/// Arises when the original order is deleted and the back-reference is set
/// to null by the foreign key.
pub fn is_orphaned_extension(order: &order::Model) -> bool {
    order.order_type == Some(OrderType::Extension) && order.related_order_id.is_none()
}

#[cfg(test)]
mod tests {
    use slotshare_test_utils::prelude::*;

    use super::*;

    fn order(id: i32, order_type: Option<OrderType>, related_order_id: Option<i32>) -> order::Model {
        factory::mock_order_model(id, order_type, related_order_id)
    }

    /// Expect null type flagged as unclassified and extension without link flagged as orphan
    #[test]
    fn partitions_mixed_orders() {
        let orders = vec![
            order(1, None, None),
            order(2, Some(OrderType::Extension), None),
            order(3, Some(OrderType::Extension), Some(1)),
        ];

        let unclassified: Vec<i32> = orders
            .iter()
            .filter(|o| is_unclassified(o))
            .map(|o| o.id)
            .collect();
        let orphaned: Vec<i32> = orders
            .iter()
            .filter(|o| is_orphaned_extension(o))
            .map(|o| o.id)
            .collect();

        assert_eq!(unclassified, vec![1]);
        assert_eq!(orphaned, vec![2]);
    }

    /// Expect standard orders to pass both checks with or without a related order
    #[test]
    fn standard_orders_pass() {
        assert!(!is_unclassified(&order(1, Some(OrderType::Standard), None)));
        assert!(!is_orphaned_extension(&order(1, Some(OrderType::Standard), None)));
        assert!(!is_orphaned_extension(&order(1, Some(OrderType::Standard), Some(2))));
    }

    /// Expect an unclassified order not to count as an orphaned extension
    #[test]
    fn unclassified_is_not_orphan() {
        assert!(!is_orphaned_extension(&order(1, None, None)));
    }
}
