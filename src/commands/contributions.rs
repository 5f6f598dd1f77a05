//! Contribution Review Commands

use wasm_bindgen::prelude::*;
use crate::models::ContributionIssue;
use super::call;

pub async fn list_contributions() -> Result<Vec<ContributionIssue>, String> {
    call("list_contributions", JsValue::NULL).await
}
