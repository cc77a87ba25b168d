use serde::Serialize;
use utoipa::ToSchema;

use crate::board::{GroupId, GroupTexts};

/// Response of `GET /state`
#[derive(Serialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StateResponse {
    pub group_id: Option<GroupId>,
    #[schema(value_type = Object)]
    pub group_texts: GroupTexts,
    pub combined_text: String,
}
