use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Media attachment as exposed to clients: the storage-relative key has
/// already been rewritten into a public URL.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MediaDto {
    pub id: i32,
    pub url: String,
    pub kind: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateMediaDto {
    pub storage_key: String,
    #[serde(default = "default_kind")]
    pub kind: String,
}

fn default_kind() -> String {
    "image".to_string()
}
