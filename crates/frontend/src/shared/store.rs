//! Client-side cache of server collections.
//!
//! One `Collection` per resource variant, ordered the way the server
//! returned the entries. All writes go through `upsert`/`remove`/
//! `replace_all` so identifier uniqueness and ordering are preserved;
//! nothing mutates cached entries in place.

use contracts::domain::job::Job;
use contracts::domain::product::Product;
use contracts::domain::webhook::Webhook;
use contracts::resource::{Resource, ResourceId, ResourceKind};

/// A cached entry with a stable identity key.
pub trait Keyed: Clone + PartialEq {
    fn key(&self) -> ResourceId;
}

impl Keyed for Product {
    fn key(&self) -> ResourceId {
        self.id.into()
    }
}

impl Keyed for Webhook {
    fn key(&self) -> ResourceId {
        self.id.into()
    }
}

impl Keyed for Job {
    fn key(&self) -> ResourceId {
        self.job_id.into()
    }
}

/// Ordered collection keyed by resource identity.
///
/// The revision counter bumps on every effective write; views compare
/// revisions to decide whether a snapshot is new. A collection starts
/// stale and becomes fresh after the first full `replace_all`.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<T> {
    items: Vec<T>,
    revision: u64,
    stale: bool,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            revision: 0,
            stale: true,
        }
    }
}

impl<T: Keyed> Collection<T> {
    pub fn list(&self) -> &[T] {
        &self.items
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    pub fn mark_stale(&mut self) {
        self.stale = true;
    }

    pub fn get(&self, id: &ResourceId) -> Option<&T> {
        self.items.iter().find(|item| item.key() == *id)
    }

    /// Replace-or-insert: a replaced entry keeps its position, a new one
    /// is appended. Replacing with an identical snapshot is a no-op so
    /// repeated observations do not bump the revision.
    pub fn upsert(&mut self, item: T) {
        match self.items.iter_mut().find(|i| i.key() == item.key()) {
            Some(slot) => {
                if *slot == item {
                    return;
                }
                *slot = item;
            }
            None => self.items.push(item),
        }
        self.revision += 1;
    }

    /// Delete by identifier; no-op when absent.
    pub fn remove(&mut self, id: &ResourceId) {
        let before = self.items.len();
        self.items.retain(|item| item.key() != *id);
        if self.items.len() != before {
            self.revision += 1;
        }
    }

    /// Adopt a full list fetch, discarding entries the server no longer
    /// returns.
    pub fn replace_all(&mut self, items: Vec<T>) {
        self.items = items;
        self.stale = false;
        self.revision += 1;
    }
}

/// Process-wide cache shared by every page of the session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceStore {
    pub products: Collection<Product>,
    pub webhooks: Collection<Webhook>,
    pub jobs: Collection<Job>,
}

impl ResourceStore {
    pub fn list(&self, kind: ResourceKind) -> Vec<Resource> {
        match kind {
            ResourceKind::Product => self
                .products
                .list()
                .iter()
                .cloned()
                .map(Resource::Product)
                .collect(),
            ResourceKind::Webhook => self
                .webhooks
                .list()
                .iter()
                .cloned()
                .map(Resource::Webhook)
                .collect(),
            ResourceKind::Job => self.jobs.list().iter().cloned().map(Resource::Job).collect(),
        }
    }

    pub fn get(&self, kind: ResourceKind, id: &ResourceId) -> Option<Resource> {
        match kind {
            ResourceKind::Product => self.products.get(id).cloned().map(Resource::Product),
            ResourceKind::Webhook => self.webhooks.get(id).cloned().map(Resource::Webhook),
            ResourceKind::Job => self.jobs.get(id).cloned().map(Resource::Job),
        }
    }

    pub fn upsert(&mut self, resource: Resource) {
        match resource {
            Resource::Product(p) => self.products.upsert(p),
            Resource::Webhook(w) => self.webhooks.upsert(w),
            Resource::Job(j) => self.jobs.upsert(j),
        }
    }

    pub fn remove(&mut self, kind: ResourceKind, id: &ResourceId) {
        match kind {
            ResourceKind::Product => self.products.remove(id),
            ResourceKind::Webhook => self.webhooks.remove(id),
            ResourceKind::Job => self.jobs.remove(id),
        }
    }

    /// Adopt a full list fetch for one variant. Entries of a different
    /// variant are a programming error and are dropped.
    pub fn replace_all(&mut self, kind: ResourceKind, items: Vec<Resource>) {
        debug_assert!(items.iter().all(|r| r.kind() == kind));
        match kind {
            ResourceKind::Product => self.products.replace_all(
                items
                    .into_iter()
                    .filter_map(|r| match r {
                        Resource::Product(p) => Some(p),
                        _ => None,
                    })
                    .collect(),
            ),
            ResourceKind::Webhook => self.webhooks.replace_all(
                items
                    .into_iter()
                    .filter_map(|r| match r {
                        Resource::Webhook(w) => Some(w),
                        _ => None,
                    })
                    .collect(),
            ),
            ResourceKind::Job => self.jobs.replace_all(
                items
                    .into_iter()
                    .filter_map(|r| match r {
                        Resource::Job(j) => Some(j),
                        _ => None,
                    })
                    .collect(),
            ),
        }
    }

    pub fn revision(&self, kind: ResourceKind) -> u64 {
        match kind {
            ResourceKind::Product => self.products.revision(),
            ResourceKind::Webhook => self.webhooks.revision(),
            ResourceKind::Job => self.jobs.revision(),
        }
    }

    pub fn is_stale(&self, kind: ResourceKind) -> bool {
        match kind {
            ResourceKind::Product => self.products.is_stale(),
            ResourceKind::Webhook => self.webhooks.is_stale(),
            ResourceKind::Job => self.jobs.is_stale(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::product::ProductId;

    fn product(id: i64, sku: &str, name: &str) -> Product {
        Product {
            id: ProductId(id),
            sku: sku.into(),
            name: name.into(),
            description: None,
            active: true,
            created_at: None,
        }
    }

    #[test]
    fn upsert_appends_new_and_replaces_in_place() {
        let mut products = Collection::default();
        products.upsert(product(1, "A", "a"));
        products.upsert(product(2, "B", "b"));
        products.upsert(product(1, "A", "a renamed"));

        let skus: Vec<_> = products.list().iter().map(|p| p.sku.as_str()).collect();
        assert_eq!(skus, vec!["A", "B"]);
        assert_eq!(products.list()[0].name, "a renamed");
        assert_eq!(products.list().len(), 2);
    }

    #[test]
    fn upsert_of_identical_snapshot_keeps_the_revision() {
        let mut products = Collection::default();
        products.upsert(product(1, "A", "a"));
        let revision = products.revision();
        products.upsert(product(1, "A", "a"));
        assert_eq!(products.revision(), revision);
    }

    #[test]
    fn remove_is_a_noop_when_absent() {
        let mut products = Collection::default();
        products.upsert(product(1, "A", "a"));
        let revision = products.revision();
        products.remove(&ResourceId::Num(99));
        assert_eq!(products.list().len(), 1);
        assert_eq!(products.revision(), revision);
    }

    #[test]
    fn replace_all_discards_stale_entries_and_clears_the_stale_flag() {
        let mut products = Collection::default();
        assert!(products.is_stale());
        products.upsert(product(1, "A", "a"));
        products.upsert(product(2, "B", "b"));

        products.replace_all(vec![product(2, "B", "b")]);
        assert!(!products.is_stale());
        assert_eq!(products.list().len(), 1);
        assert!(products.get(&ResourceId::Num(1)).is_none());
    }

    #[test]
    fn last_completed_replace_all_wins() {
        // Two racing refreshes: the first-issued response arrives last and
        // must be what the store reflects.
        let mut products = Collection::default();
        products.replace_all(vec![product(2, "B", "b")]); // second-issued, arrived first
        products.replace_all(vec![product(1, "A", "a")]); // first-issued, arrived last
        assert_eq!(products.list().len(), 1);
        assert_eq!(products.list()[0].sku, "A");
    }

    #[test]
    fn read_your_writes_through_the_variant_facade() {
        let mut store = ResourceStore::default();
        store.upsert(Resource::Product(product(5, "S", "s")));

        let listed = store.list(ResourceKind::Product);
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id(), ResourceId::Num(5));
        assert!(store.get(ResourceKind::Product, &ResourceId::Num(5)).is_some());
        assert!(store.get(ResourceKind::Webhook, &ResourceId::Num(5)).is_none());
    }
}
