use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListServiceContractsParams {
    pub client_id: String,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
    pub sort_desc: Option<bool>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListServiceContractsParams>,
) -> impl IntoResponse {
    match state
        .contract_queries
        .list_by_client_id(
            &params.client_id,
            params.offset.unwrap_or(0),
            params.limit.unwrap_or(20),
            params.sort_desc.unwrap_or(false),
        )
        .await
    {
        Ok(contracts) => Json(contracts).into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

pub async fn get(
    State(state): State<AppState>,
    Path(contract_id): Path<String>,
) -> impl IntoResponse {
    match state.contract_queries.get_by_contract_id(&contract_id).await {
        Ok(Some(contract)) => Json(contract).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

#[cfg(test)]
mod list_service_contracts_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::modules::service_contracts::adapters::outbound::projections::ServiceContractProjectionRepository;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::state::{make_service_contract_row, make_test_state};

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/service-contracts", get(super::list))
            .route("/service-contracts/{contract_id}", get(super::get))
            .with_state(state)
    }

    async fn get_json(state: AppState, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app(state)
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn it_should_return_200_with_empty_list_when_no_contracts_exist() {
        let (status, json) = get_json(make_test_state(), "/service-contracts?client_id=c-1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, serde_json::json!([]));
    }

    #[tokio::test]
    async fn it_should_return_400_when_client_id_is_missing() {
        let (status, _) = get_json(make_test_state(), "/service-contracts").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn it_should_return_the_contract_by_id() {
        let state = make_test_state();
        state
            .projections
            .upsert(make_service_contract_row("sc-1", "c-1", Some(1_000)))
            .await
            .unwrap();

        let (status, json) = get_json(state, "/service-contracts/sc-1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["contract_id"], "sc-1");
        assert_eq!(json["service_frequency"], "MONTHLY");
        assert_eq!(json["next_service_date"], 1_000);
    }

    #[tokio::test]
    async fn it_should_return_404_for_an_unknown_contract() {
        let (status, _) = get_json(make_test_state(), "/service-contracts/sc-404").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
