mod extend;
mod get;
mod update_status;

use slotshare_test_utils::prelude::*;

use crate::{
    model::order::CreateOrderDto,
    server::{
        error::{order::OrderError, Error},
        service::order::OrderService,
    },
};

fn checkout(product_id: i32, plan_id: i32) -> CreateOrderDto {
    CreateOrderDto {
        product_id,
        plan_id,
        buyer_name: "Kim Buyer".to_string(),
        buyer_email: "kim@example.com".to_string(),
        buyer_phone: Some("010-0000-0000".to_string()),
        depositor_name: "Kim Buyer".to_string(),
    }
}
