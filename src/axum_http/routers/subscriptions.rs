use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use uuid::Uuid;

use crate::{
    auth::AuthSeller,
    domain::repositories::{
        notification_queue::NotificationQueueRepository, sellers::SellerRepository,
        subscriptions::SubscriptionRepository,
    },
    infrastructure::postgres::{
        postgres_connection::PgPool,
        repositories::{
            notification_queue::NotificationQueuePostgres, sellers::SellerPostgres,
            subscriptions::SubscriptionPostgres,
        },
    },
    usecases::subscription_pause::SubscriptionPauseUseCase,
};

pub fn routes(db_pool: Arc<PgPool>) -> Router {
    let subscription_repository = SubscriptionPostgres::new(Arc::clone(&db_pool));
    let seller_repository = SellerPostgres::new(Arc::clone(&db_pool));
    let notification_queue = NotificationQueuePostgres::new(Arc::clone(&db_pool));
    let usecase = SubscriptionPauseUseCase::new(
        Arc::new(subscription_repository),
        Arc::new(seller_repository),
        Arc::new(notification_queue),
    );

    Router::new()
        .route("/manage/:token", get(manage_view))
        .route("/manage/:token/pause", post(pause_as_customer))
        .route("/manage/:token/resume", post(resume_as_customer))
        .route("/audience", get(list_audience))
        .route("/:subscription_id/pause", post(pause_as_seller))
        .route("/:subscription_id/resume", post(resume_as_seller))
        .with_state(Arc::new(usecase))
}

pub async fn manage_view<S, O, N>(
    State(usecase): State<Arc<SubscriptionPauseUseCase<S, O, N>>>,
    Path(token): Path<String>,
) -> impl IntoResponse
where
    S: SubscriptionRepository + Send + Sync + 'static,
    O: SellerRepository + Send + Sync + 'static,
    N: NotificationQueueRepository + Send + Sync + 'static,
{
    match usecase.manage_view(&token).await {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn pause_as_customer<S, O, N>(
    State(usecase): State<Arc<SubscriptionPauseUseCase<S, O, N>>>,
    Path(token): Path<String>,
) -> impl IntoResponse
where
    S: SubscriptionRepository + Send + Sync + 'static,
    O: SellerRepository + Send + Sync + 'static,
    N: NotificationQueueRepository + Send + Sync + 'static,
{
    match usecase.pause_as_customer(&token).await {
        Ok(receipt) => (StatusCode::OK, Json(receipt)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn resume_as_customer<S, O, N>(
    State(usecase): State<Arc<SubscriptionPauseUseCase<S, O, N>>>,
    Path(token): Path<String>,
) -> impl IntoResponse
where
    S: SubscriptionRepository + Send + Sync + 'static,
    O: SellerRepository + Send + Sync + 'static,
    N: NotificationQueueRepository + Send + Sync + 'static,
{
    match usecase.resume_as_customer(&token).await {
        Ok(receipt) => (StatusCode::OK, Json(receipt)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn list_audience<S, O, N>(
    State(usecase): State<Arc<SubscriptionPauseUseCase<S, O, N>>>,
    auth: AuthSeller,
) -> impl IntoResponse
where
    S: SubscriptionRepository + Send + Sync + 'static,
    O: SellerRepository + Send + Sync + 'static,
    N: NotificationQueueRepository + Send + Sync + 'static,
{
    match usecase.list_for_seller(auth.seller_id).await {
        Ok(audience) => (StatusCode::OK, Json(audience)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn pause_as_seller<S, O, N>(
    State(usecase): State<Arc<SubscriptionPauseUseCase<S, O, N>>>,
    auth: AuthSeller,
    Path(subscription_id): Path<Uuid>,
) -> impl IntoResponse
where
    S: SubscriptionRepository + Send + Sync + 'static,
    O: SellerRepository + Send + Sync + 'static,
    N: NotificationQueueRepository + Send + Sync + 'static,
{
    match usecase.pause_as_seller(auth.seller_id, subscription_id).await {
        Ok(receipt) => (StatusCode::OK, Json(receipt)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn resume_as_seller<S, O, N>(
    State(usecase): State<Arc<SubscriptionPauseUseCase<S, O, N>>>,
    auth: AuthSeller,
    Path(subscription_id): Path<Uuid>,
) -> impl IntoResponse
where
    S: SubscriptionRepository + Send + Sync + 'static,
    O: SellerRepository + Send + Sync + 'static,
    N: NotificationQueueRepository + Send + Sync + 'static,
{
    match usecase
        .resume_as_seller(auth.seller_id, subscription_id)
        .await
    {
        Ok(receipt) => (StatusCode::OK, Json(receipt)).into_response(),
        Err(err) => err.into_response(),
    }
}
