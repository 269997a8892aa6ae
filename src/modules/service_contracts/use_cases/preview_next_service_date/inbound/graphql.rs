use async_graphql::{Object, Result as GqlResult, SimpleObject};

use crate::modules::service_contracts::core::next_service_date::project_from_millis;
use crate::modules::service_contracts::use_cases::preview_next_service_date::inbound::http::NextServiceDateResponse;

#[derive(SimpleObject, Clone, Debug, PartialEq, Eq)]
pub struct GqlNextServiceDate {
    /// One of `recurs`, `no_recurrence`, `unsupported`.
    pub kind: String,
    pub next_service_date: Option<i64>,
    pub tag: Option<String>,
}

impl From<NextServiceDateResponse> for GqlNextServiceDate {
    fn from(response: NextServiceDateResponse) -> Self {
        match response {
            NextServiceDateResponse::Recurs { next_service_date } => Self {
                kind: "recurs".into(),
                next_service_date: Some(next_service_date),
                tag: None,
            },
            NextServiceDateResponse::NoRecurrence => Self {
                kind: "no_recurrence".into(),
                next_service_date: None,
                tag: None,
            },
            NextServiceDateResponse::Unsupported { tag } => Self {
                kind: "unsupported".into(),
                next_service_date: None,
                tag: Some(tag),
            },
        }
    }
}

#[derive(Default)]
pub struct NextServiceDateQuery;

#[Object]
impl NextServiceDateQuery {
    async fn next_service_date(
        &self,
        base_date: i64,
        frequency: String,
        value: i64,
    ) -> GqlResult<GqlNextServiceDate> {
        let next = project_from_millis(base_date, &frequency, value)?;
        Ok(NextServiceDateResponse::from(next).into())
    }
}
