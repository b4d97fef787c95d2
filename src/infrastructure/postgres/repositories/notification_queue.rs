use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use uuid::Uuid;

use crate::{
    domain::{
        entities::jobs::InsertJobEntity,
        repositories::notification_queue::NotificationQueueRepository,
        value_objects::notification_emails::{NotificationCommand, NotificationEmailPayload},
    },
    infrastructure::postgres::{postgres_connection::PgPool, schema::jobs},
};

pub struct NotificationQueuePostgres {
    db_pool: Arc<PgPool>,
}

impl NotificationQueuePostgres {
    pub fn new(db_pool: Arc<PgPool>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl NotificationQueueRepository for NotificationQueuePostgres {
    async fn enqueue_email(
        &self,
        command: NotificationCommand,
        subscription_id: Uuid,
    ) -> Result<i64> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let payload = NotificationEmailPayload {
            audience: command.audience(),
            template: command.template(),
            subscription_id,
        };
        let payload_json = serde_json::to_value(payload)?;

        let insert_entity = InsertJobEntity {
            type_: "NotificationEmail".to_string(),
            payload: payload_json,
            run_at: Utc::now(),
            attempts: 0,
            locked_at: None,
            locked_by: None,
            status: "queued".to_string(),
            error: None,
            created_at: Utc::now(),
        };

        let result = diesel::insert_into(jobs::table)
            .values(&insert_entity)
            .returning(jobs::id)
            .get_result::<i64>(&mut conn)?;

        Ok(result)
    }
}
