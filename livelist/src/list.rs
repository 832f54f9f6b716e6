//! The deduplicated ordered collection behind every paginated realtime view.
//!
//! DESIGN
//! ======
//! A [`LiveList`] is mutated from two directions at once: paginated fetches
//! completing in arbitrary order and push events arriving between them. All
//! mutations funnel through one merge rule so arrival order cannot corrupt
//! the collection: identity is the item id, precedence on collision goes to
//! the higher revision, and a tie keeps the element already present.
//! Deletions leave a tombstone so an in-flight fetch response cannot
//! resurrect a removed item; tombstones clear when a reset load begins and
//! the server response becomes authoritative again.

#[cfg(test)]
#[path = "list_test.rs"]
mod list_test;

use std::collections::HashSet;

use events::ItemEvent;

use crate::cursor::PageCursor;

/// An item that can live in a [`LiveList`].
pub trait ListItem: Clone {
    /// Stable identity key; the sole deduplication key.
    fn id(&self) -> &str;

    /// Ordering key: milliseconds since the Unix epoch.
    fn sort_ts(&self) -> i64;

    /// Monotonic revision used for merge precedence; higher wins.
    ///
    /// Defaults to the ordering key, which is correct for immutable items.
    fn revision(&self) -> i64 {
        self.sort_ts()
    }
}

/// Direction of the active sort over [`ListItem::sort_ts`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Feed-style: most recent items first.
    #[default]
    NewestFirst,
    /// Thread-style: chronological.
    OldestFirst,
}

/// Permit for one outstanding fetch, handed out by [`LiveList::begin_load`].
///
/// Carries the offset and limit the caller should request, plus the
/// generation token used to discard responses a newer reset has superseded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    /// Starting index for the request.
    pub offset: usize,
    /// Number of items to request.
    pub limit: usize,
    /// Whether this load replaces the collection instead of appending.
    pub reset: bool,
}

/// A deduplicated, sorted collection fed by paginated fetches and push events.
#[derive(Clone, Debug, PartialEq)]
pub struct LiveList<T> {
    items: Vec<T>,
    deleted: HashSet<String>,
    order: SortOrder,
    cursor: PageCursor,
    generation: u64,
    in_flight: bool,
}

impl<T: ListItem> LiveList<T> {
    /// Create an empty list with the given sort order and page sizes.
    #[must_use]
    pub fn new(order: SortOrder, initial_page: usize, follow_page: usize) -> Self {
        Self {
            items: Vec::new(),
            deleted: HashSet::new(),
            order,
            cursor: PageCursor::new(initial_page, follow_page),
            generation: 0,
            in_flight: false,
        }
    }

    /// The current working set, in active sort order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id() == id)
    }

    /// Whether the last completed fetch indicated further items exist.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.cursor.has_more()
    }

    /// Whether a fetch for the current generation is outstanding.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.in_flight
    }

    #[must_use]
    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Change the active sort order and re-sort in place. Callers follow up
    /// with a reset load since the server-side page boundaries change too.
    pub fn set_order(&mut self, order: SortOrder) {
        if self.order != order {
            self.order = order;
            self.sort();
        }
    }

    /// Start a load. Returns the ticket describing the request to issue, or
    /// `None` when the load is suppressed: an append while another fetch is
    /// in flight, or an append past the end of the collection.
    ///
    /// A reset is never suppressed — it supersedes any outstanding fetch by
    /// bumping the generation, so the stale response is discarded on arrival.
    pub fn begin_load(&mut self, reset: bool) -> Option<LoadTicket> {
        if reset {
            self.generation += 1;
            self.cursor.reset();
            self.deleted.clear();
        } else if self.in_flight || !self.cursor.has_more() {
            return None;
        }
        self.in_flight = true;
        Some(LoadTicket {
            generation: self.generation,
            offset: self.cursor.offset(),
            limit: self.cursor.page_size(),
            reset,
        })
    }

    /// Merge a successful fetch into the collection.
    ///
    /// Returns `false` when the ticket belongs to a superseded generation;
    /// the batch is discarded and nothing changes.
    pub fn complete_load(&mut self, ticket: LoadTicket, batch: Vec<T>) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        let received = batch.len();
        if ticket.reset {
            self.items.clear();
        }
        for item in batch {
            self.merge(item);
        }
        self.sort();
        self.cursor.complete(received, ticket.limit);
        self.in_flight = false;
        true
    }

    /// Record a failed fetch. The collection and cursor are untouched so the
    /// caller can surface an error and retry on user action.
    pub fn fail_load(&mut self, ticket: LoadTicket) {
        if ticket.generation == self.generation {
            self.in_flight = false;
        }
    }

    /// Apply a push event against the collection.
    ///
    /// Creations are idempotent against duplicate delivery and respect
    /// tombstones. Updates patch in place only when the incoming revision is
    /// newer, then re-sort since the ordering key may have moved. Deletions
    /// remove by id without error when absent and are remembered so a racing
    /// fetch response cannot bring the item back.
    pub fn apply(&mut self, event: ItemEvent<T>) {
        match event {
            ItemEvent::Created(item) => {
                if self.deleted.contains(item.id()) || self.contains(item.id()) {
                    return;
                }
                self.items.push(item);
                self.sort();
            }
            ItemEvent::Updated(item) | ItemEvent::Approved(item) => {
                if self.deleted.contains(item.id()) {
                    return;
                }
                if let Some(existing) = self.items.iter_mut().find(|e| e.id() == item.id())
                    && item.revision() > existing.revision()
                {
                    *existing = item;
                    self.sort();
                }
            }
            ItemEvent::Deleted(id) => {
                self.items.retain(|e| e.id() != id);
                self.deleted.insert(id);
            }
        }
    }

    /// Insert an item, or replace the held copy when the incoming revision is
    /// newer. Used where a view must surface an item an [`ItemEvent`] alone
    /// would not insert, e.g. a post entering the feed on approval.
    pub fn upsert(&mut self, item: T) {
        if self.deleted.contains(item.id()) {
            return;
        }
        if let Some(existing) = self.items.iter_mut().find(|e| e.id() == item.id()) {
            if item.revision() > existing.revision() {
                *existing = item;
            }
        } else {
            self.items.push(item);
        }
        self.sort();
    }

    /// Remove an item that no longer matches the view's filter. Unlike a
    /// deletion event this leaves no tombstone, so a later fetch or event may
    /// legitimately reintroduce the id.
    pub fn remove(&mut self, id: &str) {
        self.items.retain(|e| e.id() != id);
    }

    /// Insert an optimistic placeholder carrying a locally generated id.
    pub fn push_pending(&mut self, item: T) {
        self.items.push(item);
        self.sort();
    }

    /// Replace a placeholder with the server's item. Exactly one copy of the
    /// confirmed item remains even when its realtime echo arrived first.
    pub fn confirm_pending(&mut self, temp_id: &str, item: T) {
        self.items.retain(|e| e.id() != temp_id);
        self.upsert(item);
    }

    /// Roll back a placeholder after the write failed.
    pub fn reject_pending(&mut self, temp_id: &str) {
        self.items.retain(|e| e.id() != temp_id);
    }

    fn merge(&mut self, item: T) {
        if self.deleted.contains(item.id()) {
            return;
        }
        if let Some(existing) = self.items.iter_mut().find(|e| e.id() == item.id()) {
            if item.revision() > existing.revision() {
                *existing = item;
            }
        } else {
            self.items.push(item);
        }
    }

    fn sort(&mut self) {
        match self.order {
            SortOrder::NewestFirst => self.items.sort_by(|a, b| b.sort_ts().cmp(&a.sort_ts())),
            SortOrder::OldestFirst => self.items.sort_by(|a, b| a.sort_ts().cmp(&b.sort_ts())),
        }
    }
}
