use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::model::signature_format::SignatureFormat;
use crate::model::validation::ReasonCode;

#[skip_serializing_none]
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ValidateRequestRestDTO {
    pub format: SignatureFormat,
    pub document: String,
    pub file_name: Option<String>,
    pub correlation_id: String,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ValidateResponseRestDTO {
    pub is_valid: bool,
    #[serde(default)]
    pub reason_code: Option<ReasonCode>,
    #[serde(default)]
    pub correlation_id: Option<String>,
}
