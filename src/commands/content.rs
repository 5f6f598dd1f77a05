//! Guide Content Commands

use wasm_bindgen::prelude::*;
use serde::Serialize;
use crate::models::{GuideInfo, GuideView, Section};
use super::{call, to_args};

#[derive(Serialize)]
struct SearchArgs<'a> {
    query: &'a str,
    #[serde(rename = "activeSection")]
    active_section: Option<&'a str>,
}

pub async fn get_guide_info() -> Result<GuideInfo, String> {
    call("get_guide_info", JsValue::NULL).await
}

pub async fn list_sections() -> Result<Vec<Section>, String> {
    call("list_sections", JsValue::NULL).await
}

pub async fn search_sections(query: &str, active_section: Option<&str>) -> Result<GuideView, String> {
    let js_args = to_args(&SearchArgs { query, active_section })?;
    call("search_sections", js_args).await
}
