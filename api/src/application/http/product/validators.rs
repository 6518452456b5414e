use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct LookupProductValidator {
    #[validate(length(min = 1, message = "barcode is required"))]
    pub barcode: String,
}
