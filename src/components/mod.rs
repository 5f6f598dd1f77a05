//! UI Components
//!
//! Reusable Leptos components.

mod external_link;
pub mod header_bar;
mod section_sidebar;
mod search_bar;
mod guide_page;
mod section_panel;
mod entry_card;
mod platform_block;
mod copy_button;
mod comments_panel;
mod admin_panel;
mod contribution_card;

pub use external_link::ExternalLink;
pub use header_bar::HeaderBar;
pub use section_sidebar::SectionSidebar;
pub use search_bar::SearchBar;
pub use guide_page::GuidePage;
pub use section_panel::SectionPanel;
pub use entry_card::{EntryCard, KindBadge};
pub use platform_block::PlatformBlock;
pub use copy_button::CopyButton;
pub use comments_panel::CommentsPanel;
pub use admin_panel::AdminPanel;
pub use contribution_card::ContributionCard;
