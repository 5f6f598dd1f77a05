//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::collections::HashMap;

use leptos::prelude::*;

use crate::models::{Comment, CommentsStatus, CommentsUpdate};
use crate::route::{push_history, Route};
use crate::theme;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub dark_mode: RwSignal<bool>,
    pub route: RwSignal<Route>,
    /// `None` until the backend answered
    pub comments_status: RwSignal<Option<CommentsStatus>>,
    /// Latest pushed list per live subscription
    pub comment_feeds: RwSignal<HashMap<u64, Vec<Comment>>>,
}

impl AppContext {
    pub fn new(dark_mode: bool, route: Route) -> Self {
        Self {
            dark_mode: RwSignal::new(dark_mode),
            route: RwSignal::new(route),
            comments_status: RwSignal::new(None),
            comment_feeds: RwSignal::new(HashMap::new()),
        }
    }

    /// Flip the theme and persist it
    pub fn toggle_dark_mode(&self) {
        let dark = !self.dark_mode.get_untracked();
        self.dark_mode.set(dark);
        theme::save_dark_mode(dark);
    }

    pub fn navigate(&self, route: Route) {
        if self.route.get_untracked() != route {
            push_history(route);
            self.route.set(route);
        }
    }

    pub fn apply_comments(&self, update: CommentsUpdate) {
        self.comment_feeds.update(|feeds| {
            feeds.insert(update.subscription_id, update.comments);
        });
    }

    pub fn forget_feed(&self, subscription_id: u64) {
        self.comment_feeds.update(|feeds| {
            feeds.remove(&subscription_id);
        });
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
