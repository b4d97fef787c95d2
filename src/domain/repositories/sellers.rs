use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::sellers::SellerEntity;

#[async_trait]
#[automock]
pub trait SellerRepository {
    async fn find_by_id(&self, seller_id: Uuid) -> Result<Option<SellerEntity>>;
}
