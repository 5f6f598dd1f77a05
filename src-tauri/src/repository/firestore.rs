//! Firestore Comment Repository
//!
//! Talks to the Firestore REST API (v1) with the web API key. Reads use
//! `documents:runQuery`, votes use a `documents:commit` field transform so
//! concurrent increments never overwrite each other.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::config::FirestoreConfig;
use crate::domain::{
    sort_for_display, Comment, DomainError, DomainResult, NewComment, ANONYMOUS,
};
use super::traits::CommentRepository;

/// Collection holding every comment, partitioned by `sectionId`
pub const COMMENTS_COLLECTION: &str = "comments";

const SERVICE: &str = "Firestore";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

// ========================
// Wire format
// ========================

/// A typed Firestore value, e.g. `{"stringValue": "hi"}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Value {
    StringValue(String),
    IntegerValue(Integer),
    DoubleValue(f64),
    BooleanValue(bool),
    TimestampValue(String),
    NullValue(Option<()>),
}

/// 64-bit integers travel as strings in JSON; the emulator sometimes sends numbers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Integer {
    Text(String),
    Number(i64),
}

impl Value {
    fn as_str(&self) -> Option<&str> {
        match self {
            Value::StringValue(s) | Value::TimestampValue(s) => Some(s),
            _ => None,
        }
    }

    fn as_i64(&self) -> Option<i64> {
        match self {
            Value::IntegerValue(Integer::Text(s)) => s.parse().ok(),
            Value::IntegerValue(Integer::Number(n)) => Some(*n),
            Value::DoubleValue(f) => Some(*f as i64),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Document {
    name: String,
    /// Raw typed values; unknown value kinds stay undecoded
    #[serde(default)]
    fields: HashMap<String, serde_json::Value>,
    #[serde(default)]
    create_time: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RunQueryRow {
    #[serde(default)]
    document: Option<Document>,
}

fn parse_time(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

impl Document {
    fn id(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }

    fn field(&self, name: &str) -> Option<Value> {
        let raw = self.fields.get(name)?;
        serde_json::from_value(raw.clone()).ok()
    }

    fn string(&self, name: &str) -> Option<String> {
        self.field(name).and_then(|v| v.as_str().map(str::to_string))
    }

    fn into_comment(self) -> DomainResult<Comment> {
        let section_id = self
            .string("sectionId")
            .ok_or_else(|| DomainError::Decode(format!("{} has no sectionId", self.name)))?;
        let text = self.string("text").unwrap_or_default();
        let author = self
            .string("author")
            .filter(|a| !a.trim().is_empty())
            .unwrap_or_else(|| ANONYMOUS.to_string());
        let votes = self.field("votes").and_then(|v| v.as_i64()).unwrap_or(0);
        let created_at = self
            .string("createdAt")
            .as_deref()
            .and_then(parse_time)
            .or_else(|| self.create_time.as_deref().and_then(parse_time))
            .unwrap_or_default();

        Ok(Comment {
            id: self.id().to_string(),
            section_id,
            author,
            text,
            votes,
            created_at,
        })
    }
}

fn encode_new_comment(comment: &NewComment) -> serde_json::Value {
    json!({
        "fields": {
            "sectionId": { "stringValue": comment.section_id },
            "author": { "stringValue": comment.author },
            "text": { "stringValue": comment.text },
            "votes": { "integerValue": "0" },
            "createdAt": {
                "stringValue": comment.created_at.to_rfc3339_opts(SecondsFormat::Millis, true)
            }
        }
    })
}

// ========================
// Repository
// ========================

pub struct FirestoreCommentRepository {
    client: reqwest::Client,
    base_url: String,
    project_id: String,
    api_key: String,
}

impl FirestoreCommentRepository {
    pub fn new(config: &FirestoreConfig) -> DomainResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| DomainError::Internal(format!("HTTP client: {}", e)))?;
        Ok(Self {
            client,
            base_url: config.base_url().to_string(),
            project_id: config.project_id.clone(),
            api_key: config.api_key.clone(),
        })
    }

    fn database_path(&self) -> String {
        format!("projects/{}/databases/(default)/documents", self.project_id)
    }

    fn url(&self, suffix: &str) -> String {
        format!("{}/{}{}", self.base_url, self.database_path(), suffix)
    }

    fn document_name(&self, comment_id: &str) -> String {
        format!("{}/{}/{}", self.database_path(), COMMENTS_COLLECTION, comment_id)
    }

    async fn post(&self, url: String, body: &serde_json::Value) -> DomainResult<reqwest::Response> {
        let response = self
            .client
            .post(url)
            .query(&[("key", self.api_key.as_str())])
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let detail = response.text().await.unwrap_or_default();
        log::warn!("{} returned {}: {}", SERVICE, status, detail);
        Err(DomainError::remote(SERVICE, status.as_u16()))
    }
}

#[async_trait]
impl CommentRepository for FirestoreCommentRepository {
    async fn list_by_section(&self, section_id: &str) -> DomainResult<Vec<Comment>> {
        let query = json!({
            "structuredQuery": {
                "from": [{ "collectionId": COMMENTS_COLLECTION }],
                "where": {
                    "fieldFilter": {
                        "field": { "fieldPath": "sectionId" },
                        "op": "EQUAL",
                        "value": { "stringValue": section_id }
                    }
                }
            }
        });

        let rows: Vec<RunQueryRow> = self.post(self.url(":runQuery"), &query).await?.json().await?;

        let mut comments = Vec::with_capacity(rows.len());
        for document in rows.into_iter().filter_map(|row| row.document) {
            match document.into_comment() {
                Ok(comment) => comments.push(comment),
                Err(e) => log::warn!("Skipping comment: {}", e),
            }
        }
        sort_for_display(&mut comments);
        Ok(comments)
    }

    async fn create(&self, comment: &NewComment) -> DomainResult<Comment> {
        let url = self.url(&format!("/{}", COMMENTS_COLLECTION));
        let document: Document = self.post(url, &encode_new_comment(comment)).await?.json().await?;
        document.into_comment()
    }

    async fn increment_votes(&self, comment_id: &str, delta: i64) -> DomainResult<()> {
        if comment_id.is_empty() || comment_id.contains('/') {
            return Err(DomainError::InvalidInput(format!("bad comment id '{}'", comment_id)));
        }
        let commit = json!({
            "writes": [{
                "transform": {
                    "document": self.document_name(comment_id),
                    "fieldTransforms": [{
                        "fieldPath": "votes",
                        "increment": { "integerValue": delta.to_string() }
                    }]
                },
                "currentDocument": { "exists": true }
            }]
        });
        self.post(self.url(":commit"), &commit).await?;
        Ok(())
    }
}
