use async_graphql::http::GraphiQLSource;
use async_graphql::{EmptySubscription, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, response::Html};

use crate::modules::appointments::use_cases::change_appointment_status::inbound::graphql::AppointmentsMutation;
use crate::modules::service_contracts::use_cases::create_service_contract::inbound::graphql::ServiceContractsMutation;
use crate::modules::service_contracts::use_cases::list_service_contracts::inbound::graphql::ServiceContractsQuery;
use crate::modules::service_contracts::use_cases::preview_next_service_date::inbound::graphql::NextServiceDateQuery;
use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(ServiceContractsQuery, NextServiceDateQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(ServiceContractsMutation, AppointmentsMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

pub async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}
