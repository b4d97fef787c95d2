use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use diesel::prelude::*;
use uuid::Uuid;

use crate::{
    domain::{entities::sellers::SellerEntity, repositories::sellers::SellerRepository},
    infrastructure::postgres::{postgres_connection::PgPool, schema::sellers},
};

pub struct SellerPostgres {
    db_pool: Arc<PgPool>,
}

impl SellerPostgres {
    pub fn new(db_pool: Arc<PgPool>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl SellerRepository for SellerPostgres {
    async fn find_by_id(&self, seller_id: Uuid) -> Result<Option<SellerEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = sellers::table
            .find(seller_id)
            .select(SellerEntity::as_select())
            .first::<SellerEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }
}
