//! OAuth2 token pair for the external commerce platform.

use serde::{Deserialize, Serialize};

/// The process-wide access/refresh token pair.
///
/// At most one persisted record ever exists; it is upserted in place by the
/// token refresher and never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub updated_at: String,
}
