use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AccountDto {
    pub id: i32,
    pub product_id: i32,
    pub login_id: String,
    pub login_password: String,
    pub max_slots: i32,
    pub memo: Option<String>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::account::Model> for AccountDto {
    fn from(account: entity::account::Model) -> Self {
        Self {
            id: account.id,
            product_id: account.product_id,
            login_id: account.login_id,
            login_password: account.login_password,
            max_slots: account.max_slots,
            memo: account.memo,
            is_active: account.is_active,
            created_at: account.created_at,
            updated_at: account.updated_at,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateAccountDto {
    pub product_id: i32,
    pub login_id: String,
    pub login_password: String,
    pub max_slots: i32,
    pub memo: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateAccountDto {
    pub login_id: Option<String>,
    pub login_password: Option<String>,
    pub max_slots: Option<i32>,
    pub memo: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AccountFilterParams {
    pub product_id: Option<i32>,
    pub is_active: Option<bool>,
}
