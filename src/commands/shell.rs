//! System Browser
//!
//! External links open through the shell plugin instead of the webview.

use serde::Serialize;
use super::{invoke, error_text, to_args};

#[derive(Serialize)]
struct OpenArgs<'a> {
    path: &'a str,
}

pub async fn open_url(url: &str) -> Result<(), String> {
    invoke("plugin:shell|open", to_args(&OpenArgs { path: url })?)
        .await
        .map(|_| ())
        .map_err(error_text)
}
