//! Document title synchronization
//!
//! A view renders [`PageTitle`] with its route title. Rendering only
//! stages the value; the owning view's lifecycle calls
//! [`PageTitleSynchronizer::commit`] after its output is committed, and the
//! ambient title is written then. Several titles staged in one pass
//! collapse to the last one. Committing a title equal to the last applied
//! one writes nothing.
//!
//! # Example
//!
//! ```rust
//! use brand_core::BrandIdentity;
//! use brand_ui::brand::page_title::{DocumentTitle, PageTitle, PageTitleSynchronizer};
//!
//! let identity = BrandIdentity::intellectx();
//! let document = DocumentTitle::new();
//! let mut sync = PageTitleSynchronizer::new(&identity, document.clone());
//!
//! PageTitle::new("Settings").render(&mut sync);
//! sync.commit();
//!
//! assert_eq!(document.current(), "Settings · IntellectX Chat");
//! ```

use crate::components::DrawableNode;
use crate::navigation::Route;
use brand_core::{brand_identity, BrandIdentity};
use parking_lot::RwLock;
use std::sync::Arc;

/// Destination of ambient title writes
#[cfg_attr(test, mockall::automock)]
pub trait TitleSink {
    /// Replace the ambient title
    fn write_title(&mut self, title: &str);
}

#[derive(Debug, Default)]
struct DocumentTitleInner {
    title: String,
    writes: usize,
}

/// In-process ambient title, shared between the synchronizer and readers
#[derive(Debug, Clone, Default)]
pub struct DocumentTitle {
    inner: Arc<RwLock<DocumentTitleInner>>,
}

impl DocumentTitle {
    /// Empty title
    pub fn new() -> Self {
        Self::default()
    }

    /// Current title
    pub fn current(&self) -> String {
        self.inner.read().title.clone()
    }

    /// Number of writes so far
    pub fn write_count(&self) -> usize {
        self.inner.read().writes
    }
}

impl TitleSink for DocumentTitle {
    fn write_title(&mut self, title: &str) {
        let mut inner = self.inner.write();
        inner.title = title.to_string();
        inner.writes += 1;
    }
}

/// Synchronizer state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TitleSyncState {
    /// No title applied yet
    #[default]
    Idle,
    /// Last applied route title, before the transform
    Synced(String),
}

/// Applies route titles to a [`TitleSink`]
#[derive(Debug)]
pub struct PageTitleSynchronizer<'a, S: TitleSink> {
    identity: &'a BrandIdentity,
    sink: S,
    state: TitleSyncState,
    pending: Option<String>,
}

impl<S: TitleSink> PageTitleSynchronizer<'static, S> {
    /// Synchronizer over the process-wide identity
    pub fn with_global_identity(sink: S) -> Self {
        Self::new(brand_identity(), sink)
    }
}

impl<'a, S: TitleSink> PageTitleSynchronizer<'a, S> {
    /// Idle synchronizer writing to `sink`
    pub fn new(identity: &'a BrandIdentity, sink: S) -> Self {
        Self {
            identity,
            sink,
            state: TitleSyncState::Idle,
            pending: None,
        }
    }

    /// Stage a title for the next commit, replacing any staged one
    pub fn observe(&mut self, title: &str) {
        self.pending = Some(title.to_string());
    }

    /// Apply the staged title
    ///
    /// Returns true if the ambient title was written.
    pub fn commit(&mut self) -> bool {
        let Some(title) = self.pending.take() else {
            return false;
        };

        if matches!(&self.state, TitleSyncState::Synced(last) if *last == title) {
            tracing::trace!(title = %title, "Title unchanged, skipping write");
            return false;
        }

        let document_title = self.identity.document_title(&title);
        tracing::debug!(title = %document_title, "Updating document title");
        self.sink.write_title(&document_title);
        self.state = TitleSyncState::Synced(title);
        true
    }

    /// Stage and apply in one step
    pub fn synchronize_title(&mut self, title: &str) {
        self.observe(title);
        self.commit();
    }

    /// Current state
    pub fn state(&self) -> &TitleSyncState {
        &self.state
    }

    /// The sink
    pub fn sink(&self) -> &S {
        &self.sink
    }
}

/// Title-only component; renders nothing visible
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTitle {
    /// Route title; empty for the bare product name
    pub title: String,
}

impl PageTitle {
    /// Component for a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// Component for a route's title
    pub fn for_route(route: &Route) -> Self {
        Self::new(route.title())
    }

    /// Stage the title and render nothing
    pub fn render<S: TitleSink>(&self, sync: &mut PageTitleSynchronizer<'_, S>) -> DrawableNode {
        sync.observe(&self.title);
        DrawableNode::Empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::SettingsTab;
    use mockall::predicate::eq;
    use mockall::Sequence;

    #[test]
    fn test_same_title_written_once() {
        let identity = BrandIdentity::intellectx();
        let mut sink = MockTitleSink::new();
        sink.expect_write_title()
            .with(eq("Settings · IntellectX Chat"))
            .times(1)
            .return_const(());

        let mut sync = PageTitleSynchronizer::new(&identity, sink);
        sync.synchronize_title("Settings");
        sync.synchronize_title("Settings");

        assert_eq!(
            sync.state(),
            &TitleSyncState::Synced("Settings".to_string())
        );
    }

    #[test]
    fn test_distinct_titles_written_in_order() {
        let identity = BrandIdentity::intellectx();
        let mut seq = Sequence::new();
        let mut sink = MockTitleSink::new();
        sink.expect_write_title()
            .with(eq("A · IntellectX Chat"))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        sink.expect_write_title()
            .with(eq("B · IntellectX Chat"))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        let mut sync = PageTitleSynchronizer::new(&identity, sink);
        sync.synchronize_title("A");
        sync.synchronize_title("B");
    }

    #[test]
    fn test_empty_title_falls_back_to_product_name() {
        let identity = BrandIdentity::intellectx();
        let mut sink = MockTitleSink::new();
        sink.expect_write_title()
            .with(eq("IntellectX Chat"))
            .times(1)
            .return_const(());

        let mut sync = PageTitleSynchronizer::new(&identity, sink);
        sync.synchronize_title("");
    }

    #[test]
    fn test_nothing_written_before_commit() {
        let identity = BrandIdentity::intellectx();
        let mut sink = MockTitleSink::new();
        sink.expect_write_title().never();

        let mut sync = PageTitleSynchronizer::new(&identity, sink);
        let node = PageTitle::new("Discover").render(&mut sync);

        assert_eq!(node, DrawableNode::Empty);
        assert_eq!(sync.state(), &TitleSyncState::Idle);
    }

    #[test]
    fn test_last_staged_title_wins() {
        let identity = BrandIdentity::intellectx();
        let document = DocumentTitle::new();
        let mut sync = PageTitleSynchronizer::new(&identity, document.clone());

        PageTitle::new("A").render(&mut sync);
        PageTitle::new("B").render(&mut sync);
        assert!(sync.commit());

        assert_eq!(document.current(), "B · IntellectX Chat");
        assert_eq!(document.write_count(), 1);
    }

    #[test]
    fn test_commit_without_pending_is_noop() {
        let identity = BrandIdentity::intellectx();
        let document = DocumentTitle::new();
        let mut sync = PageTitleSynchronizer::new(&identity, document.clone());

        assert!(!sync.commit());
        sync.synchronize_title("Welcome");
        assert!(!sync.commit());
        assert_eq!(document.write_count(), 1);
    }

    #[test]
    fn test_return_to_previous_title_rewrites() {
        let identity = BrandIdentity::intellectx();
        let document = DocumentTitle::new();
        let mut sync = PageTitleSynchronizer::new(&identity, document.clone());

        sync.synchronize_title("A");
        sync.synchronize_title("B");
        sync.synchronize_title("A");

        assert_eq!(document.current(), "A · IntellectX Chat");
        assert_eq!(document.write_count(), 3);
    }

    #[test]
    fn test_route_titles() {
        let identity = BrandIdentity::intellectx();
        let document = DocumentTitle::new();
        let mut sync = PageTitleSynchronizer::new(&identity, document.clone());

        PageTitle::for_route(&Route::Settings {
            tab: SettingsTab::About,
        })
        .render(&mut sync);
        sync.commit();
        assert_eq!(document.current(), "About · IntellectX Chat");

        PageTitle::for_route(&Route::Chat).render(&mut sync);
        sync.commit();
        assert_eq!(document.current(), "IntellectX Chat");
    }

    #[test]
    fn test_whitespace_title_used_as_is() {
        let identity = BrandIdentity::intellectx();
        let document = DocumentTitle::new();
        let mut sync = PageTitleSynchronizer::new(&identity, document.clone());

        sync.synchronize_title(" ");
        assert_eq!(document.current(), "  · IntellectX Chat");
    }
}
