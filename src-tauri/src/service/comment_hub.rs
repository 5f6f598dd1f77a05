//! Comment Hub
//!
//! Owns every live comment subscription. Each subscription is a tokio task
//! that re-reads one section at the poll interval and pushes the ordered
//! list whenever it differs from the last push. Writes issued through the
//! hub wake the watchers of the touched section right away.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;

use crate::config::FirestoreConfig;
use crate::domain::{Comment, DomainError, DomainResult, NewComment, Vote};
use crate::repository::{CommentRepository, FirestoreCommentRepository};

pub const COMMENTS_DISABLED: &str =
    "Comments disabled. Configure Firebase to enable. See SETUP.md";

pub type SubscriptionId = u64;

/// Receives every push of a subscription
pub type UpdateSink = Arc<dyn Fn(CommentsUpdate) + Send + Sync>;

/// Payload of one push
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentsUpdate {
    pub subscription_id: SubscriptionId,
    pub section_id: String,
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentsStatus {
    Disabled,
    Enabled,
}

/// A running watch. Dropping it stops the task.
pub struct Subscription {
    section_id: String,
    handle: JoinHandle<()>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Comment access for one run of the app
pub enum CommentsHub {
    Disabled,
    Enabled(CommentFeed),
}

impl CommentsHub {
    /// Enabled only when a usable document-store config exists
    pub fn from_config(config: Option<&FirestoreConfig>) -> Self {
        let Some(config) = config else {
            log::info!("No document store config, comments disabled");
            return CommentsHub::Disabled;
        };
        match FirestoreCommentRepository::new(config) {
            Ok(repo) => {
                log::info!("Comments enabled for project {}", config.project_id);
                CommentsHub::Enabled(CommentFeed::new(Arc::new(repo), config.poll_interval()))
            }
            Err(e) => {
                log::error!("Comment store unavailable: {}", e);
                CommentsHub::Disabled
            }
        }
    }

    pub fn with_repository(repo: Arc<dyn CommentRepository>, poll_interval: Duration) -> Self {
        CommentsHub::Enabled(CommentFeed::new(repo, poll_interval))
    }

    pub fn status(&self) -> CommentsStatus {
        match self {
            CommentsHub::Disabled => CommentsStatus::Disabled,
            CommentsHub::Enabled(_) => CommentsStatus::Enabled,
        }
    }

    fn feed(&self) -> DomainResult<&CommentFeed> {
        match self {
            CommentsHub::Disabled => Err(DomainError::NotConfigured(COMMENTS_DISABLED.to_string())),
            CommentsHub::Enabled(feed) => Ok(feed),
        }
    }

    pub async fn subscribe(&self, section_id: &str, sink: UpdateSink) -> DomainResult<SubscriptionId> {
        Ok(self.feed()?.subscribe(section_id, sink).await)
    }

    /// Returns false for unknown ids, including ids already released
    pub async fn unsubscribe(&self, id: SubscriptionId) -> bool {
        match self {
            CommentsHub::Disabled => false,
            CommentsHub::Enabled(feed) => feed.unsubscribe(id).await,
        }
    }

    /// `Ok(None)` when the text is blank; nothing is written then.
    pub async fn submit(&self, section_id: &str, author: &str, text: &str) -> DomainResult<Option<Comment>> {
        let feed = self.feed()?;
        let Some(new) = NewComment::from_input(section_id, author, text) else {
            return Ok(None);
        };
        let created = feed.repo.create(&new).await.map_err(|e| {
            log::warn!("Comment submit for '{}' failed: {}", section_id, e);
            e
        })?;
        feed.refresh(section_id).await;
        Ok(Some(created))
    }

    pub async fn vote(&self, section_id: &str, comment_id: &str, vote: Vote) -> DomainResult<()> {
        let feed = self.feed()?;
        feed.repo
            .increment_votes(comment_id, vote.delta())
            .await
            .map_err(|e| {
                log::warn!("Vote on {} failed: {}", comment_id, e);
                e
            })?;
        feed.refresh(section_id).await;
        Ok(())
    }
}

pub struct CommentFeed {
    repo: Arc<dyn CommentRepository>,
    poll_interval: Duration,
    next_id: AtomicU64,
    subscriptions: Mutex<HashMap<SubscriptionId, Subscription>>,
    /// Per-section generation counter bumped after each write
    refreshers: Mutex<HashMap<String, watch::Sender<u64>>>,
}

impl CommentFeed {
    fn new(repo: Arc<dyn CommentRepository>, poll_interval: Duration) -> Self {
        Self {
            repo,
            poll_interval,
            next_id: AtomicU64::new(1),
            subscriptions: Mutex::new(HashMap::new()),
            refreshers: Mutex::new(HashMap::new()),
        }
    }

    async fn refresh_receiver(&self, section_id: &str) -> watch::Receiver<u64> {
        let mut refreshers = self.refreshers.lock().await;
        refreshers
            .entry(section_id.to_string())
            .or_insert_with(|| watch::channel(0).0)
            .subscribe()
    }

    async fn refresh(&self, section_id: &str) {
        if let Some(sender) = self.refreshers.lock().await.get(section_id) {
            sender.send_modify(|generation| *generation += 1);
        }
    }

    async fn subscribe(&self, section_id: &str, sink: UpdateSink) -> SubscriptionId {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        // Held across refresher lookup so unsubscribe cannot prune it meanwhile
        let mut subscriptions = self.subscriptions.lock().await;
        let refresh = self.refresh_receiver(section_id).await;
        let handle = tokio::spawn(watch_section(
            Arc::clone(&self.repo),
            id,
            section_id.to_string(),
            self.poll_interval,
            refresh,
            sink,
        ));

        subscriptions.insert(
            id,
            Subscription {
                section_id: section_id.to_string(),
                handle,
            },
        );
        log::info!("Subscription {} watching '{}' ({} live)", id, section_id, subscriptions.len());
        id
    }

    async fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscriptions = self.subscriptions.lock().await;
        let Some(subscription) = subscriptions.remove(&id) else {
            return false;
        };
        let section_id = &subscription.section_id;
        if !subscriptions.values().any(|s| &s.section_id == section_id) {
            self.refreshers.lock().await.remove(section_id);
        }
        log::info!("Subscription {} on '{}' released", id, section_id);
        true
    }

    #[cfg(test)]
    async fn live(&self) -> usize {
        self.subscriptions.lock().await.len()
    }

    #[cfg(test)]
    async fn watched_sections(&self) -> Vec<String> {
        let mut sections: Vec<String> = self.refreshers.lock().await.keys().cloned().collect();
        sections.sort();
        sections
    }
}

async fn watch_section(
    repo: Arc<dyn CommentRepository>,
    id: SubscriptionId,
    section_id: String,
    poll_interval: Duration,
    mut refresh: watch::Receiver<u64>,
    sink: UpdateSink,
) {
    let mut last: Option<Vec<Comment>> = None;
    loop {
        match repo.list_by_section(&section_id).await {
            Ok(comments) if last.as_ref() != Some(&comments) => {
                sink(CommentsUpdate {
                    subscription_id: id,
                    section_id: section_id.clone(),
                    comments: comments.clone(),
                });
                last = Some(comments);
            }
            Ok(_) => {}
            Err(e) => log::warn!("Reading comments for '{}' failed: {}", section_id, e),
        }

        tokio::select! {
            _ = tokio::time::sleep(poll_interval) => {}
            changed = refresh.changed() => {
                if changed.is_err() {
                    tokio::time::sleep(poll_interval).await;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryCommentRepository;
    use tokio::sync::mpsc;
    use tokio::time::timeout;

    const SLOW_POLL: Duration = Duration::from_secs(60);
    const WAIT: Duration = Duration::from_secs(2);

    fn channel_sink() -> (UpdateSink, mpsc::UnboundedReceiver<CommentsUpdate>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let sink: UpdateSink = Arc::new(move |update| {
            let _ = tx.send(update);
        });
        (sink, rx)
    }

    async fn next(rx: &mut mpsc::UnboundedReceiver<CommentsUpdate>) -> CommentsUpdate {
        timeout(WAIT, rx.recv())
            .await
            .expect("push in time")
            .expect("channel open")
    }

    fn hub_with(repo: &Arc<InMemoryCommentRepository>) -> CommentsHub {
        CommentsHub::with_repository(repo.clone(), SLOW_POLL)
    }

    #[tokio::test]
    async fn test_disabled_hub_refuses_everything() {
        let hub = CommentsHub::from_config(None);
        assert_eq!(hub.status(), CommentsStatus::Disabled);

        let (sink, _rx) = channel_sink();
        let err = hub.subscribe("git", sink).await.unwrap_err();
        assert_eq!(err.to_string(), COMMENTS_DISABLED);
        assert!(matches!(hub.submit("git", "", "hi").await, Err(DomainError::NotConfigured(_))));
        assert!(matches!(hub.vote("git", "x", Vote::Up).await, Err(DomainError::NotConfigured(_))));
        assert!(!hub.unsubscribe(1).await);
    }

    #[tokio::test]
    async fn test_first_push_is_immediate() {
        let repo = Arc::new(InMemoryCommentRepository::new());
        let hub = hub_with(&repo);
        let (sink, mut rx) = channel_sink();

        let id = hub.subscribe("git", sink).await.unwrap();
        let update = next(&mut rx).await;

        assert_eq!(update.subscription_id, id);
        assert_eq!(update.section_id, "git");
        assert!(update.comments.is_empty());
    }

    #[tokio::test]
    async fn test_submit_pushes_new_list() {
        let repo = Arc::new(InMemoryCommentRepository::new());
        let hub = hub_with(&repo);
        let (sink, mut rx) = channel_sink();
        hub.subscribe("git", sink).await.unwrap();
        next(&mut rx).await;

        let created = hub.submit("git", "  ", " Try git switch ").await.unwrap().unwrap();
        let update = next(&mut rx).await;

        assert_eq!(created.author, "Anonymous");
        assert_eq!(created.votes, 0);
        assert_eq!(update.comments, vec![created]);
    }

    #[tokio::test]
    async fn test_blank_submit_writes_nothing() {
        let repo = Arc::new(InMemoryCommentRepository::new());
        let hub = hub_with(&repo);

        let result = hub.submit("git", "Ann", " \n\t ").await.unwrap();

        assert_eq!(result, None);
        assert_eq!(repo.calls(), 0);
    }

    #[tokio::test]
    async fn test_votes_reorder_pushed_list() {
        let repo = Arc::new(InMemoryCommentRepository::new());
        let hub = hub_with(&repo);
        let first = hub.submit("git", "", "first").await.unwrap().unwrap();
        let second = hub.submit("git", "", "second").await.unwrap().unwrap();

        let (sink, mut rx) = channel_sink();
        hub.subscribe("git", sink).await.unwrap();
        next(&mut rx).await;

        hub.vote("git", &second.id, Vote::Up).await.unwrap();
        let update = next(&mut rx).await;
        let ids: Vec<&str> = update.comments.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec![second.id.as_str(), first.id.as_str()]);

        hub.vote("git", &second.id, Vote::Down).await.unwrap();
        let update = next(&mut rx).await;
        assert!(update.comments.iter().all(|c| c.votes == 0));
    }

    #[tokio::test]
    async fn test_writes_only_wake_their_section() {
        let repo = Arc::new(InMemoryCommentRepository::new());
        let hub = hub_with(&repo);
        let (sink, mut rx) = channel_sink();
        hub.subscribe("tips", sink).await.unwrap();
        next(&mut rx).await;

        hub.submit("git", "", "elsewhere").await.unwrap();

        assert!(timeout(Duration::from_millis(200), rx.recv()).await.is_err());
    }

    #[tokio::test]
    async fn test_unsubscribe_stops_the_watch() {
        let repo = Arc::new(InMemoryCommentRepository::new());
        let hub = hub_with(&repo);
        let (sink, mut rx) = channel_sink();
        let id = hub.subscribe("git", sink).await.unwrap();
        next(&mut rx).await;

        assert!(hub.unsubscribe(id).await);
        assert!(!hub.unsubscribe(id).await);

        let closed = timeout(WAIT, rx.recv()).await.expect("sink dropped");
        assert!(closed.is_none());
        if let CommentsHub::Enabled(feed) = &hub {
            assert_eq!(feed.live().await, 0);
        }
    }

    #[tokio::test]
    async fn test_last_unsubscribe_forgets_section() {
        let repo = Arc::new(InMemoryCommentRepository::new());
        let hub = hub_with(&repo);
        let CommentsHub::Enabled(feed) = &hub else {
            panic!("hub should be enabled");
        };
        let (sink, _rx) = channel_sink();
        let git_a = hub.subscribe("git", sink.clone()).await.unwrap();
        let git_b = hub.subscribe("git", sink.clone()).await.unwrap();
        let tips = hub.subscribe("tips", sink).await.unwrap();
        assert_eq!(feed.watched_sections().await, vec!["git", "tips"]);

        hub.unsubscribe(git_a).await;
        assert_eq!(feed.watched_sections().await, vec!["git", "tips"]);

        hub.unsubscribe(git_b).await;
        assert_eq!(feed.watched_sections().await, vec!["tips"]);

        hub.unsubscribe(tips).await;
        assert!(feed.watched_sections().await.is_empty());

        // Writes to a forgotten section are still accepted
        hub.submit("git", "", "later").await.unwrap();
    }

    #[tokio::test]
    async fn test_read_failures_are_swallowed() {
        let repo = Arc::new(InMemoryCommentRepository::new());
        repo.set_fail_reads(true);
        let hub = hub_with(&repo);
        let (sink, mut rx) = channel_sink();
        hub.subscribe("git", sink).await.unwrap();

        assert!(timeout(Duration::from_millis(200), rx.recv()).await.is_err());

        repo.set_fail_reads(false);
        let created = hub.submit("git", "Ann", "back online").await.unwrap().unwrap();
        let update = next(&mut rx).await;
        assert_eq!(update.comments, vec![created]);
    }

    #[tokio::test]
    async fn test_polling_picks_up_foreign_writes() {
        let repo = Arc::new(InMemoryCommentRepository::new());
        let hub = CommentsHub::with_repository(repo.clone(), Duration::from_millis(50));
        let (sink, mut rx) = channel_sink();
        hub.subscribe("git", sink).await.unwrap();
        next(&mut rx).await;

        let outside = NewComment::from_input("git", "Bob", "from another client").unwrap();
        repo.create(&outside).await.unwrap();

        let update = next(&mut rx).await;
        assert_eq!(update.comments.len(), 1);
        assert_eq!(update.comments[0].author, "Bob");
    }

    #[test]
    fn test_update_wire_names() {
        let update = CommentsUpdate {
            subscription_id: 3,
            section_id: "git".to_string(),
            comments: vec![],
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json["subscriptionId"], 3);
        assert_eq!(json["sectionId"], "git");
        assert_eq!(serde_json::to_value(CommentsStatus::Enabled).unwrap(), "enabled");
    }
}
