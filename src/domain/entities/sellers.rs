use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::sellers;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = sellers)]
pub struct SellerEntity {
    pub id: Uuid,
    pub display_name: Option<String>,
    pub enable_payment_email: bool,
    pub created_at: DateTime<Utc>,
}
