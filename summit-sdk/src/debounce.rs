//! Debounced filter commits.
//!
//! One reusable debounce utility backs every list screen instead of each
//! screen running its own ad hoc timer. Every edit restarts the quiet
//! period; when it elapses uninterrupted the draft is committed into a
//! `QueryKey` with the page reset to 1. Explicit page changes skip the
//! timer entirely. Must be used from within a Tokio runtime.

use std::time::Duration;
use summit_core::{FilterDraft, QueryKey};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub struct DebouncedFilter {
    resource: String,
    quiet_period: Duration,
    draft: FilterDraft,
    committed_tx: mpsc::UnboundedSender<QueryKey>,
    pending: Option<JoinHandle<()>>,
}

impl DebouncedFilter {
    pub fn new(
        resource: impl Into<String>,
        quiet_period: Duration,
    ) -> (Self, mpsc::UnboundedReceiver<QueryKey>) {
        let (committed_tx, committed_rx) = mpsc::unbounded_channel();
        (
            Self {
                resource: resource.into(),
                quiet_period,
                draft: FilterDraft::new(),
                committed_tx,
                pending: None,
            },
            committed_rx,
        )
    }

    pub fn draft(&self) -> &FilterDraft {
        &self.draft
    }

    /// Apply one edit to the draft and restart the quiet-period timer.
    pub fn edit(&mut self, apply: impl FnOnce(&mut FilterDraft)) {
        apply(&mut self.draft);
        self.cancel_pending();

        let key = self.draft.commit(&self.resource);
        let tx = self.committed_tx.clone();
        let quiet_period = self.quiet_period;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(quiet_period).await;
            let _ = tx.send(key);
        }));
    }

    /// Jump to a page immediately, keeping the current filters. Page
    /// navigation is deliberate, so it does not wait out the quiet period.
    pub fn set_page(&mut self, page: u32) {
        self.cancel_pending();
        let key = self.draft.commit(&self.resource).with_page(page);
        let _ = self.committed_tx.send(key);
    }

    /// Commit the current draft right away (initial load, manual refresh).
    pub fn flush(&mut self) {
        self.cancel_pending();
        let _ = self.committed_tx.send(self.draft.commit(&self.resource));
    }

    fn cancel_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}

impl Drop for DebouncedFilter {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUIET: Duration = Duration::from_millis(350);

    async fn tick(ms: u64) {
        tokio::time::advance(Duration::from_millis(ms)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_edits_commit_once_with_the_last_value() {
        let (mut filter, mut committed) = DebouncedFilter::new("exhibition-demands", QUIET);

        for text in ["a", "ac", "acme"] {
            filter.edit(|draft| draft.search = text.to_string());
            tick(100).await;
        }
        tick(400).await;

        let key = committed.recv().await.unwrap();
        assert_eq!(key.search(), Some("acme"));
        assert_eq!(key.page(), 1);
        assert!(committed.try_recv().is_err(), "exactly one commit expected");
    }

    #[tokio::test(start_paused = true)]
    async fn test_separate_pauses_commit_separately() {
        let (mut filter, mut committed) = DebouncedFilter::new("pitch-decks", QUIET);

        filter.edit(|draft| draft.search = "alpha".to_string());
        tick(400).await;
        filter.edit(|draft| draft.search = "beta".to_string());
        tick(400).await;

        assert_eq!(committed.recv().await.unwrap().search(), Some("alpha"));
        assert_eq!(committed.recv().await.unwrap().search(), Some("beta"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_page_change_bypasses_the_timer() {
        let (mut filter, mut committed) = DebouncedFilter::new("visa-demands", QUIET);

        filter.edit(|draft| draft.status = Some("pending".to_string()));
        tick(400).await;
        assert_eq!(committed.recv().await.unwrap().page(), 1);

        filter.set_page(3);
        let key = committed.try_recv().expect("page change is immediate");
        assert_eq!(key.page(), 3);
        assert_eq!(key.status(), Some("pending"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_page_change_cancels_a_pending_commit() {
        let (mut filter, mut committed) = DebouncedFilter::new("visa-demands", QUIET);

        filter.edit(|draft| draft.search = "half-typed".to_string());
        tick(100).await;
        filter.set_page(2);
        tick(400).await;

        let key = committed.recv().await.unwrap();
        assert_eq!(key.page(), 2);
        assert!(
            committed.try_recv().is_err(),
            "the superseded timer must not fire"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_the_pending_timer() {
        let (mut filter, mut committed) = DebouncedFilter::new("pitch-decks", QUIET);

        filter.edit(|draft| draft.search = "late".to_string());
        drop(filter);
        tick(400).await;

        assert!(committed.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_flush_commits_immediately() {
        let (mut filter, mut committed) = DebouncedFilter::new("media-posts", QUIET);

        filter.edit(|draft| draft.search = "launch".to_string());
        filter.flush();

        let key = committed.try_recv().expect("flush is immediate");
        assert_eq!(key.search(), Some("launch"));
    }
}
