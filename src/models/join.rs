use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `POST /join`
#[derive(Serialize, Deserialize, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JoinRequest {
    #[serde(default)]
    pub group_id: Option<String>,
}

/// Response of `POST /join`
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, ToSchema)]
pub struct JoinResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl JoinResponse {
    pub fn accepted() -> Self {
        Self { ok: true, error: None }
    }

    pub fn rejected(error: impl ToString) -> Self {
        Self {
            ok: false,
            error: Some(error.to_string()),
        }
    }
}
