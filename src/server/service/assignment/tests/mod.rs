mod unassign;

use slotshare_test_utils::prelude::*;

use crate::{
    model::assignment::AssignSlotDto,
    server::{
        data::order::{ASSIGNED_STATUS, UNASSIGNED_STATUS},
        error::{assignment::AssignmentError, Error},
        service::assignment::AssignmentService,
    },
};

fn assign_dto(order_id: i32, account_id: i32, slot_number: Option<i32>) -> AssignSlotDto {
    AssignSlotDto {
        order_id,
        account_id,
        slot_number,
    }
}
