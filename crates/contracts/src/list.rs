//! Generic list view-model: one instantiation per resource view.
//!
//! Owns the authoritative in-memory copy of one resource's list and
//! mediates every mutation through a single reload-after-write
//! discipline: the held list is only ever replaced by a subsequent
//! successful `load`, never merged optimistically.

use crate::client::ResourceClient;
use crate::descriptor::{DeleteMode, ResourceDescriptor};
use crate::domain::common::Record;
use crate::error::Error;
use crate::form::FormState;

#[derive(Debug, Clone)]
pub struct ListViewModel<C: ResourceClient> {
    client: C,
    items: Vec<C::Record>,
    loading: bool,
    error: Option<String>,
}

impl<C: ResourceClient> ListViewModel<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            items: Vec::new(),
            loading: false,
            error: None,
        }
    }

    pub fn descriptor(&self) -> &'static ResourceDescriptor {
        C::Record::descriptor()
    }

    /// Snapshot of the backend at the last successful fetch.
    pub fn items(&self) -> &[C::Record] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Record an error produced outside the view-model's own
    /// operations, e.g. a failed single-record fetch when opening an
    /// edit form.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Fetch the full collection and replace the held list.
    ///
    /// On failure the previous list is preserved and a descriptive
    /// message recorded. Concurrent calls are not deduplicated here;
    /// the `loading` flag is exposed so views can suppress duplicates,
    /// and overlapping responses resolve last-write-wins.
    pub async fn load(&mut self) {
        let d = self.descriptor();
        self.loading = true;
        match self.client.fetch_all().await {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(e) => {
                self.error = Some(format!("Failed to fetch {}: {}", d.plural, e));
            }
        }
        self.loading = false;
    }

    /// Validate, convert and submit a new record, then reload.
    ///
    /// Returns whether the mutation itself succeeded; a reload failure
    /// afterwards surfaces through `error` without changing the result.
    pub async fn create(&mut self, form: &FormState) -> bool {
        let d = self.descriptor();
        let payload = match form.to_payload() {
            Ok(p) => p,
            Err(e) => {
                self.error = Some(format!("Failed to save {}: {}", d.singular, e));
                return false;
            }
        };
        match self.client.create(payload).await {
            Ok(_) => {
                self.load().await;
                true
            }
            Err(e) => {
                self.error = Some(format!("Failed to save {}: {}", d.singular, e));
                false
            }
        }
    }

    /// Full-record replace of an existing record, then reload.
    ///
    /// The backend contract is "send the complete record, including
    /// unchanged fields", so the payload carries every field plus the
    /// identity captured when the form was opened.
    pub async fn update(&mut self, form: &FormState) -> bool {
        let d = self.descriptor();
        if form.editing_id().is_none() {
            let e = Error::validation("an existing identity is required for update");
            self.error = Some(format!("Failed to save {}: {}", d.singular, e));
            return false;
        }
        let payload = match form.to_payload() {
            Ok(p) => p,
            Err(e) => {
                self.error = Some(format!("Failed to save {}: {}", d.singular, e));
                return false;
            }
        };
        match self.client.update(payload).await {
            Ok(_) => {
                self.load().await;
                true
            }
            Err(e) => {
                self.error = Some(format!("Failed to save {}: {}", d.singular, e));
                false
            }
        }
    }

    /// Hard-delete one record, then reload.
    ///
    /// Rejected client-side for cancel-only resources: factures are
    /// archived, never removed.
    pub async fn remove(&mut self, id: i64) -> bool {
        let d = self.descriptor();
        if d.delete_mode == DeleteMode::CancelOnly {
            let e = Error::validation(format!("{} can only be cancelled", d.plural));
            self.error = Some(format!("Failed to delete {}: {}", d.singular, e));
            return false;
        }
        match self.client.remove(id).await {
            Ok(()) => {
                self.load().await;
                true
            }
            Err(e) => {
                self.error = Some(format!("Failed to delete {}: {}", d.singular, e));
                false
            }
        }
    }

    /// Archive one record (cancel-only resources), then reload.
    pub async fn cancel(&mut self, id: i64) -> bool {
        let d = self.descriptor();
        if d.delete_mode != DeleteMode::CancelOnly {
            let e = Error::validation(format!("{} do not support cancellation", d.plural));
            self.error = Some(format!("Failed to cancel {}: {}", d.singular, e));
            return false;
        }
        match self.client.cancel(id).await {
            Ok(()) => {
                self.load().await;
                true
            }
            Err(e) => {
                self.error = Some(format!("Failed to cancel {}: {}", d.singular, e));
                false
            }
        }
    }

    /// Submit a relation assignment for one table row, then reload so
    /// denormalized relation displays refresh.
    pub async fn assign_relation(&mut self, row_id: i64, other_id: i64) -> bool {
        let d = self.descriptor();
        let Some(rel) = d.relation else {
            let e = Error::validation(format!("{} have no relation endpoint", d.plural));
            self.error = Some(format!("Failed to assign relation: {}", e));
            return false;
        };
        let (first, second) = if rel.row_first {
            (row_id, other_id)
        } else {
            (other_id, row_id)
        };
        match self.client.assign_relation(first, second).await {
            Ok(()) => {
                self.load().await;
                true
            }
            Err(e) => {
                self.error = Some(format!("Failed to assign {}: {}", rel.label, e));
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use serde_json::Value;

    use super::*;
    use crate::domain::facture::Facture;
    use crate::domain::produit::Produit;
    use crate::domain::stock::Stock;

    /// In-memory backend double: assigns ids on create, archives on
    /// cancel, and can be switched to fail fetches.
    struct Memory<R> {
        rows: RefCell<Vec<R>>,
        next_id: Cell<i64>,
        fail_fetch: Cell<bool>,
        remove_calls: Cell<usize>,
        cancel_calls: Cell<usize>,
        assignments: RefCell<Vec<(i64, i64)>>,
    }

    struct MemoryClient<R>(Rc<Memory<R>>);

    impl<R> Clone for MemoryClient<R> {
        fn clone(&self) -> Self {
            Self(Rc::clone(&self.0))
        }
    }

    impl<R: Record> MemoryClient<R> {
        fn new(rows: Vec<R>) -> Self {
            let next = rows.iter().filter_map(|r| r.id()).max().unwrap_or(0) + 1;
            Self(Rc::new(Memory {
                rows: RefCell::new(rows),
                next_id: Cell::new(next),
                fail_fetch: Cell::new(false),
                remove_calls: Cell::new(0),
                cancel_calls: Cell::new(0),
                assignments: RefCell::new(Vec::new()),
            }))
        }

        fn set_json(record: &R, field: &str, value: Value) -> R {
            let mut v = serde_json::to_value(record).unwrap();
            v[field] = value;
            serde_json::from_value(v).unwrap()
        }
    }

    impl<R: Record> ResourceClient for MemoryClient<R> {
        type Record = R;

        async fn fetch_all(&self) -> Result<Vec<R>, Error> {
            if self.0.fail_fetch.get() {
                return Err(Error::transport("Network Error"));
            }
            Ok(self.0.rows.borrow().clone())
        }

        async fn fetch_by_id(&self, id: i64) -> Result<R, Error> {
            self.0
                .rows
                .borrow()
                .iter()
                .find(|r| r.id() == Some(id))
                .cloned()
                .ok_or(Error::NotFound)
        }

        async fn create(&self, payload: Value) -> Result<R, Error> {
            assert!(payload.get(R::descriptor().id_field).is_none());
            let record: R = serde_json::from_value(payload)
                .map_err(|e| Error::Status { status: 400, message: e.to_string() })?;
            let id = self.0.next_id.get();
            self.0.next_id.set(id + 1);
            let record = Self::set_json(&record, R::descriptor().id_field, Value::from(id));
            self.0.rows.borrow_mut().push(record.clone());
            Ok(record)
        }

        async fn update(&self, payload: Value) -> Result<R, Error> {
            let record: R = serde_json::from_value(payload)
                .map_err(|e| Error::Status { status: 400, message: e.to_string() })?;
            let id = record.id().ok_or(Error::NotFound)?;
            let mut rows = self.0.rows.borrow_mut();
            let slot = rows
                .iter_mut()
                .find(|r| r.id() == Some(id))
                .ok_or(Error::NotFound)?;
            *slot = record.clone();
            Ok(record)
        }

        async fn remove(&self, id: i64) -> Result<(), Error> {
            self.0.remove_calls.set(self.0.remove_calls.get() + 1);
            self.0.rows.borrow_mut().retain(|r| r.id() != Some(id));
            Ok(())
        }

        async fn cancel(&self, id: i64) -> Result<(), Error> {
            self.0.cancel_calls.set(self.0.cancel_calls.get() + 1);
            let mut rows = self.0.rows.borrow_mut();
            let slot = rows
                .iter_mut()
                .find(|r| r.id() == Some(id))
                .ok_or(Error::NotFound)?;
            *slot = Self::set_json(slot, "archivee", Value::Bool(true));
            Ok(())
        }

        async fn assign_relation(&self, first: i64, second: i64) -> Result<(), Error> {
            self.0.assignments.borrow_mut().push((first, second));
            Ok(())
        }
    }

    fn produit(id: i64, code: &str, prix: f64) -> Produit {
        Produit {
            id_produit: Some(id),
            code_produit: code.into(),
            libelle_produit: format!("Produit {}", code),
            prix,
            date_creation: None,
            date_derniere_modification: None,
        }
    }

    fn facture(id: i64, montant: f64) -> Facture {
        Facture {
            id_facture: Some(id),
            montant_remise: 0.0,
            montant_facture: montant,
            date_creation_facture: None,
            date_derniere_modification_facture: None,
            archivee: false,
        }
    }

    #[tokio::test]
    async fn load_replaces_list_in_backend_order() {
        let client = MemoryClient::new(vec![
            produit(2, "ZZZ", 5.0),
            produit(1, "AAA", 3.0),
        ]);
        let mut vm = ListViewModel::new(client);
        vm.load().await;
        assert!(vm.error().is_none());
        assert!(!vm.is_loading());
        // Order is preserved exactly as returned, never re-sorted.
        let codes: Vec<&str> = vm.items().iter().map(|p| p.code_produit.as_str()).collect();
        assert_eq!(codes, ["ZZZ", "AAA"]);
    }

    #[tokio::test]
    async fn create_appends_exactly_one_record_with_assigned_id() {
        let client = MemoryClient::new(vec![produit(1, "P0", 1.0)]);
        let mut vm = ListViewModel::new(client);
        vm.load().await;

        let mut form = FormState::empty(vm.descriptor());
        form.set_text("codeProduit", "P1".into());
        form.set_text("libelleProduit", "Widget".into());
        form.set_text("prix", "9.99".into());
        assert!(vm.create(&form).await);

        assert_eq!(vm.items().len(), 2);
        let created = &vm.items()[1];
        assert_eq!(created.id_produit, Some(2));
        assert_eq!(created.code_produit, "P1");
        assert_eq!(created.libelle_produit, "Widget");
        assert_eq!(created.prix, 9.99);
    }

    #[tokio::test]
    async fn create_with_missing_required_field_leaves_list_untouched() {
        let client = MemoryClient::new(vec![produit(1, "P0", 1.0)]);
        let mut vm = ListViewModel::new(client);
        vm.load().await;

        let mut form = FormState::empty(vm.descriptor());
        form.set_text("prix", "9.99".into());
        assert!(!vm.create(&form).await);
        assert_eq!(
            vm.error(),
            Some("Failed to save product: codeProduit is required")
        );
        assert_eq!(vm.items().len(), 1);
    }

    #[tokio::test]
    async fn update_changes_only_the_target_record() {
        let client = MemoryClient::new(vec![produit(1, "P1", 1.0), produit(2, "P2", 2.0)]);
        let mut vm = ListViewModel::new(client);
        vm.load().await;
        let untouched = vm.items()[1].clone();

        let mut form = FormState::for_record(&vm.items()[0]);
        form.set_text("libelleProduit", "Renamed".into());
        assert!(vm.update(&form).await);

        assert_eq!(vm.items().len(), 2);
        assert_eq!(vm.items()[0].libelle_produit, "Renamed");
        assert_eq!(vm.items()[0].code_produit, "P1");
        assert_eq!(vm.items()[1], untouched);
    }

    #[tokio::test]
    async fn update_without_identity_fails_validation() {
        let client = MemoryClient::new(vec![produit(1, "P1", 1.0)]);
        let mut vm = ListViewModel::new(client);
        vm.load().await;

        let form = FormState::empty(vm.descriptor());
        assert!(!vm.update(&form).await);
        assert_eq!(
            vm.error(),
            Some("Failed to save product: an existing identity is required for update")
        );
    }

    #[tokio::test]
    async fn remove_deletes_exactly_that_record() {
        let client = MemoryClient::new(vec![produit(1, "P1", 1.0), produit(2, "P2", 2.0)]);
        let mut vm = ListViewModel::new(client);
        vm.load().await;
        assert!(vm.remove(1).await);
        assert_eq!(vm.items().len(), 1);
        assert_eq!(vm.items()[0].id_produit, Some(2));
    }

    #[tokio::test]
    async fn remove_on_factures_fails_validation_without_a_network_call() {
        let client = MemoryClient::new(vec![facture(7, 100.0)]);
        let handle = client.clone();
        let mut vm = ListViewModel::new(client);
        vm.load().await;

        assert!(!vm.remove(7).await);
        assert_eq!(
            vm.error(),
            Some("Failed to delete facture: factures can only be cancelled")
        );
        assert_eq!(handle.0.remove_calls.get(), 0);
        assert_eq!(vm.items().len(), 1);
    }

    #[tokio::test]
    async fn cancel_archives_the_facture_in_place() {
        let client = MemoryClient::new(vec![facture(7, 100.0)]);
        let handle = client.clone();
        let mut vm = ListViewModel::new(client);
        vm.load().await;

        assert!(vm.cancel(7).await);
        assert_eq!(handle.0.cancel_calls.get(), 1);
        assert_eq!(handle.0.remove_calls.get(), 0);
        // Still present, archived rather than deleted.
        assert_eq!(vm.items().len(), 1);
        assert!(vm.items()[0].archivee);
    }

    #[tokio::test]
    async fn cancel_on_a_hard_delete_resource_fails_validation() {
        let client = MemoryClient::new(vec![produit(1, "P1", 1.0)]);
        let handle = client.clone();
        let mut vm = ListViewModel::new(client);
        vm.load().await;

        assert!(!vm.cancel(1).await);
        assert_eq!(
            vm.error(),
            Some("Failed to cancel product: products do not support cancellation")
        );
        assert_eq!(handle.0.cancel_calls.get(), 0);
    }

    #[tokio::test]
    async fn fetch_failure_preserves_previous_list() {
        let client = MemoryClient::new(vec![
            Stock {
                id_stock: Some(1),
                libelle_stock: "Stock Principal".into(),
                qte: 1000,
                qte_min: 100,
            },
            Stock {
                id_stock: Some(2),
                libelle_stock: "Stock Secondaire".into(),
                qte: 500,
                qte_min: 50,
            },
        ]);
        let handle = client.clone();
        let mut vm = ListViewModel::new(client);
        vm.load().await;
        assert_eq!(vm.items().len(), 2);

        handle.0.fail_fetch.set(true);
        vm.load().await;
        assert!(!vm.is_loading());
        assert_eq!(vm.error(), Some("Failed to fetch stocks: Network Error"));
        assert_eq!(vm.items().len(), 2);
    }

    #[tokio::test]
    async fn first_fetch_failure_yields_empty_list() {
        let client = MemoryClient::<Stock>::new(vec![]);
        client.0.fail_fetch.set(true);
        let mut vm = ListViewModel::new(client);
        vm.load().await;
        assert_eq!(vm.error(), Some("Failed to fetch stocks: Network Error"));
        assert!(vm.items().is_empty());
    }

    #[tokio::test]
    async fn assignment_argument_order_follows_the_endpoint() {
        // Produit→stock: the row supplies the first path argument.
        let client = MemoryClient::new(vec![produit(4, "P4", 1.0)]);
        let handle = client.clone();
        let mut vm = ListViewModel::new(client);
        vm.load().await;
        assert!(vm.assign_relation(4, 2).await);
        assert_eq!(*handle.0.assignments.borrow(), vec![(4, 2)]);

        // Operateur→facture: the row (facture) supplies the second.
        let client = MemoryClient::new(vec![facture(7, 100.0)]);
        let handle = client.clone();
        let mut vm = ListViewModel::new(client);
        vm.load().await;
        assert!(vm.assign_relation(7, 3).await);
        assert_eq!(*handle.0.assignments.borrow(), vec![(3, 7)]);
    }

    #[tokio::test]
    async fn assignment_without_endpoint_fails_validation() {
        let client = MemoryClient::new(vec![Stock {
            id_stock: Some(1),
            libelle_stock: "Stock Principal".into(),
            qte: 1000,
            qte_min: 100,
        }]);
        let mut vm = ListViewModel::new(client);
        vm.load().await;
        assert!(!vm.assign_relation(1, 2).await);
        assert!(vm.error().unwrap().contains("no relation endpoint"));
    }
}
