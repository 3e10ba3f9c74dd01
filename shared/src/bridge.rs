//! Binds form state to admin calls and reflects in-flight status back.

use std::rc::Rc;

use crate::{
    client::AdminClient,
    control::{ControlId, ControlSet},
    error::AdminError,
    surface::FormSurface,
    EditableFields, QuerySpec, RunRequest, SavedQuery,
};

/// Mediates between the panel's inputs and the admin service.
///
/// Every remote call that has a triggering control disables it for the
/// duration of the call and re-enables it exactly once when the call
/// settles. Clones share the client, the surface and the control table.
pub struct FormBridge<S> {
    client: Rc<dyn AdminClient>,
    surface: S,
    controls: ControlSet,
}

impl<S: Clone> Clone for FormBridge<S> {
    fn clone(&self) -> Self {
        Self {
            client: Rc::clone(&self.client),
            surface: self.surface.clone(),
            controls: self.controls.clone(),
        }
    }
}

impl<S: FormSurface> FormBridge<S> {
    /// Bridge `client` to `surface`, with every control idle.
    pub fn new(client: Rc<dyn AdminClient>, surface: S) -> Self {
        Self {
            client,
            surface,
            controls: ControlSet::new(),
        }
    }

    /// The control state table.
    pub fn controls(&self) -> &ControlSet {
        &self.controls
    }

    /// The surface this bridge writes to.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Disable `control` for a call the caller is about to make.
    ///
    /// Fails with [`AdminError::ControlBusy`] if it already has a call in
    /// flight; the surface is left untouched in that case.
    pub fn press(&self, control: ControlId) -> Result<(), AdminError> {
        self.controls.begin(control)?;
        self.surface.set_control_enabled(control, false);
        Ok(())
    }

    fn enable(&self, control: ControlId) {
        if self.controls.settle(control) {
            self.surface.set_control_enabled(control, true);
        }
    }

    /// Handle a click on `add`: disable it, then submit `spec`.
    pub async fn click_add(&self, spec: QuerySpec) -> Result<(), AdminError> {
        self.press(ControlId::Add)?;
        self.submit_new_query(spec).await
    }

    /// Send `spec` to the add endpoint.
    ///
    /// Expects the add control to be disabled already; re-enables it once
    /// the call settles. On success the saved-query tree is reloaded.
    pub async fn submit_new_query(&self, spec: QuerySpec) -> Result<(), AdminError> {
        tracing::debug!(control = %ControlId::Add, name = %spec.name, db = %spec.db, "adding query");
        let result = self.client.add_query(&spec).await;
        self.enable(ControlId::Add);

        if let Err(err) = result {
            tracing::warn!(name = %spec.name, "failed to add query: {err}");
            return Err(err);
        }
        if let Err(err) = self.load_saved_queries().await {
            tracing::warn!("failed to reload saved queries after add: {err}");
        }
        Ok(())
    }

    /// Run `query` against `db` once and show the result.
    ///
    /// The results region is only written on success; the test control is
    /// re-enabled either way.
    pub async fn run_inspection(&self, db: &str, query: &str) -> Result<(), AdminError> {
        self.press(ControlId::Test)?;
        self.surface.show_inspection_target(db, query);

        let request = RunRequest::new(db, query);
        tracing::debug!(control = %ControlId::Test, db = %request.db, "running query");
        let result = self.client.run_query(&request).await;
        match result {
            Ok(text) => {
                self.surface.show_inspection_result(text);
                self.enable(ControlId::Test);
                Ok(())
            },
            Err(err) => {
                tracing::warn!(db = %request.db, "test run failed: {err}");
                self.enable(ControlId::Test);
                Err(err)
            },
        }
    }

    /// Copy a tree entry into the name, query and period inputs.
    pub fn select_existing_query(&self, entry: &SavedQuery) {
        self.surface.set_fields(EditableFields::from(entry));
    }

    /// Test-run a tree entry against its own database.
    pub async fn test_saved_query(&self, entry: &SavedQuery) -> Result<(), AdminError> {
        self.run_inspection(&entry.opts.db, &entry.query).await
    }

    /// Delete the saved query called `name` and reload the tree.
    pub async fn remove_saved_query(&self, name: &str) -> Result<(), AdminError> {
        self.press(ControlId::Remove)?;
        tracing::debug!(control = %ControlId::Remove, name, "removing query");
        let result = self.client.remove_query(name).await;
        self.enable(ControlId::Remove);

        if let Err(err) = result {
            tracing::warn!(name, "failed to remove query: {err}");
            return Err(err);
        }
        if let Err(err) = self.load_saved_queries().await {
            tracing::warn!("failed to reload saved queries after remove: {err}");
        }
        Ok(())
    }

    /// Fetch saved queries into the tree.
    pub async fn load_saved_queries(&self) -> Result<(), AdminError> {
        let entries = self.client.list_queries().await?;
        tracing::debug!(count = entries.len(), "loaded saved queries");
        self.surface.set_saved_queries(entries);
        Ok(())
    }

    /// Fetch the choices of `option` into its selector.
    pub async fn load_options(&self, option: &str) -> Result<(), AdminError> {
        let choices = self.client.list_options(option).await?;
        tracing::debug!(option, count = choices.len(), "loaded options");
        self.surface.set_options(option, choices);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, collections::VecDeque, rc::Rc};

    use anyhow::Result;
    use async_trait::async_trait;

    use super::FormBridge;
    use crate::{
        AdminClient, AdminError, ControlId, EditableFields, FormSurface, QuerySpec, RunRequest,
        SavedQuery, SavedQueryOpts,
    };

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Add(QuerySpec),
        Run(RunRequest),
        Remove(String),
        List,
        Options(String),
    }

    #[derive(Default)]
    struct FakeClient {
        calls: RefCell<Vec<Call>>,
        run_results: RefCell<VecDeque<Result<String, AdminError>>>,
        fail_add: Option<AdminError>,
        saved: Vec<SavedQuery>,
    }

    #[async_trait(?Send)]
    impl AdminClient for FakeClient {
        async fn add_query(&self, spec: &QuerySpec) -> Result<(), AdminError> {
            self.calls.borrow_mut().push(Call::Add(spec.clone()));
            match &self.fail_add {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        }

        async fn run_query(&self, request: &RunRequest) -> Result<String, AdminError> {
            self.calls.borrow_mut().push(Call::Run(request.clone()));
            self.run_results
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Ok(String::new()))
        }

        async fn remove_query(&self, name: &str) -> Result<(), AdminError> {
            self.calls.borrow_mut().push(Call::Remove(name.to_string()));
            Ok(())
        }

        async fn list_queries(&self) -> Result<Vec<SavedQuery>, AdminError> {
            self.calls.borrow_mut().push(Call::List);
            Ok(self.saved.clone())
        }

        async fn list_options(&self, option: &str) -> Result<Vec<String>, AdminError> {
            self.calls.borrow_mut().push(Call::Options(option.to_string()));
            Ok(vec!["users".to_string(), "events".to_string()])
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Paint {
        Enabled(ControlId, bool),
        Fields(EditableFields),
        Target(String, String),
        Result(String),
        Tree(usize),
        Options(String, Vec<String>),
    }

    #[derive(Clone, Default)]
    struct RecordingSurface {
        paints: Rc<RefCell<Vec<Paint>>>,
    }

    impl RecordingSurface {
        fn paints(&self) -> Vec<Paint> {
            self.paints.borrow().clone()
        }
    }

    impl FormSurface for RecordingSurface {
        fn set_control_enabled(&self, control: ControlId, enabled: bool) {
            self.paints.borrow_mut().push(Paint::Enabled(control, enabled));
        }

        fn set_fields(&self, fields: EditableFields) {
            self.paints.borrow_mut().push(Paint::Fields(fields));
        }

        fn show_inspection_target(&self, db: &str, query: &str) {
            self.paints
                .borrow_mut()
                .push(Paint::Target(db.to_string(), query.to_string()));
        }

        fn show_inspection_result(&self, result: String) {
            self.paints.borrow_mut().push(Paint::Result(result));
        }

        fn set_saved_queries(&self, entries: Vec<SavedQuery>) {
            self.paints.borrow_mut().push(Paint::Tree(entries.len()));
        }

        fn set_options(&self, option: &str, choices: Vec<String>) {
            self.paints
                .borrow_mut()
                .push(Paint::Options(option.to_string(), choices));
        }
    }

    fn bridge_with(client: FakeClient) -> (FormBridge<RecordingSurface>, Rc<FakeClient>) {
        let client = Rc::new(client);
        let bridge = FormBridge::new(client.clone(), RecordingSurface::default());
        (bridge, client)
    }

    fn spec() -> QuerySpec {
        QuerySpec {
            name: "query:signups".to_string(),
            query: "SELECT count(*) FROM users".to_string(),
            db: "users".to_string(),
            period: "{:minute [0 15 30 45]}".to_string(),
        }
    }

    fn count_enabled(paints: &[Paint], control: ControlId, enabled: bool) -> usize {
        paints
            .iter()
            .filter(|paint| **paint == Paint::Enabled(control, enabled))
            .count()
    }

    #[tokio::test]
    async fn add_disables_then_re_enables_once_on_success() -> Result<()> {
        let (bridge, client) = bridge_with(FakeClient::default());
        bridge.click_add(spec()).await?;

        let paints = bridge.surface().paints();
        assert_eq!(paints.first(), Some(&Paint::Enabled(ControlId::Add, false)));
        assert_eq!(count_enabled(&paints, ControlId::Add, false), 1);
        assert_eq!(count_enabled(&paints, ControlId::Add, true), 1);
        assert!(!bridge.controls().is_pending(ControlId::Add));
        assert_eq!(client.calls.borrow().first(), Some(&Call::Add(spec())));
        Ok(())
    }

    #[tokio::test]
    async fn add_re_enables_once_on_failure() {
        let (bridge, client) = bridge_with(FakeClient {
            fail_add: Some(AdminError::Http {
                status: 500,
                body: "boom".to_string(),
            }),
            ..FakeClient::default()
        });

        let err = bridge.click_add(spec()).await.err();
        assert!(matches!(err, Some(AdminError::Http { status: 500, .. })));

        let paints = bridge.surface().paints();
        assert_eq!(count_enabled(&paints, ControlId::Add, true), 1);
        assert!(!bridge.controls().is_pending(ControlId::Add));
        assert!(!client.calls.borrow().contains(&Call::List));
    }

    #[tokio::test]
    async fn successful_add_reloads_the_tree() -> Result<()> {
        let (bridge, client) = bridge_with(FakeClient {
            saved: vec![SavedQuery::default(), SavedQuery::default()],
            ..FakeClient::default()
        });
        bridge.click_add(spec()).await?;

        assert_eq!(*client.calls.borrow(), vec![Call::Add(spec()), Call::List]);
        assert_eq!(bridge.surface().paints().last(), Some(&Paint::Tree(2)));
        Ok(())
    }

    #[tokio::test]
    async fn submit_without_prior_disable_does_not_repaint_control() -> Result<()> {
        let (bridge, _client) = bridge_with(FakeClient::default());
        bridge.submit_new_query(spec()).await?;
        assert_eq!(count_enabled(&bridge.surface().paints(), ControlId::Add, true), 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_sends_exact_request_and_shows_result() -> Result<()> {
        let client = FakeClient::default();
        client
            .run_results
            .borrow_mut()
            .push_back(Ok("[{:count 1}]".to_string()));
        let (bridge, client) = bridge_with(client);

        bridge.run_inspection("users", "SELECT 1").await?;

        assert_eq!(*client.calls.borrow(), vec![Call::Run(RunRequest::new("users", "SELECT 1"))]);
        assert_eq!(bridge.surface().paints(), vec![
            Paint::Enabled(ControlId::Test, false),
            Paint::Target("users".to_string(), "SELECT 1".to_string()),
            Paint::Result("[{:count 1}]".to_string()),
            Paint::Enabled(ControlId::Test, true),
        ]);
        Ok(())
    }

    #[tokio::test]
    async fn failed_test_leaves_results_untouched() {
        let client = FakeClient::default();
        client
            .run_results
            .borrow_mut()
            .push_back(Err(AdminError::Network("offline".to_string())));
        let (bridge, _client) = bridge_with(client);

        let err = bridge.run_inspection("users", "SELECT 1").await.err();
        assert_eq!(err, Some(AdminError::Network("offline".to_string())));

        let paints = bridge.surface().paints();
        assert!(!paints.iter().any(|paint| matches!(paint, Paint::Result(_))));
        assert_eq!(count_enabled(&paints, ControlId::Test, true), 1);
    }

    #[tokio::test]
    async fn pending_control_refuses_second_click_without_remote_call() {
        let (bridge, client) = bridge_with(FakeClient::default());
        assert!(bridge.controls().begin(ControlId::Test).is_ok());

        let err = bridge.run_inspection("users", "SELECT 1").await.err();
        assert_eq!(err, Some(AdminError::ControlBusy(ControlId::Test)));
        assert!(client.calls.borrow().is_empty());
        assert!(bridge.surface().paints().is_empty());
    }

    #[test]
    fn selecting_entry_overwrites_fields() {
        let (bridge, client) = bridge_with(FakeClient::default());
        let entry = SavedQuery {
            query: "SELECT * FROM events".to_string(),
            period: "{:hour [0 12]}".to_string(),
            opts: SavedQueryOpts {
                name: "query:events".to_string(),
                db: "events".to_string(),
            },
        };

        bridge.select_existing_query(&entry);

        assert_eq!(bridge.surface().paints(), vec![Paint::Fields(EditableFields {
            name: "query:events".to_string(),
            query: "SELECT * FROM events".to_string(),
            period: "{:hour [0 12]}".to_string(),
        })]);
        assert!(client.calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn testing_saved_entry_uses_its_own_db() -> Result<()> {
        let (bridge, client) = bridge_with(FakeClient::default());
        let entry = SavedQuery {
            query: "SELECT 2".to_string(),
            period: String::new(),
            opts: SavedQueryOpts {
                name: "query:two".to_string(),
                db: "events".to_string(),
            },
        };

        bridge.test_saved_query(&entry).await?;
        assert_eq!(*client.calls.borrow(), vec![Call::Run(RunRequest::new("events", "SELECT 2"))]);
        Ok(())
    }

    #[tokio::test]
    async fn remove_guards_control_and_reloads_tree() -> Result<()> {
        let (bridge, client) = bridge_with(FakeClient::default());
        bridge.remove_saved_query("query:old").await?;

        assert_eq!(*client.calls.borrow(), vec![
            Call::Remove("query:old".to_string()),
            Call::List
        ]);
        let paints = bridge.surface().paints();
        assert_eq!(count_enabled(&paints, ControlId::Remove, false), 1);
        assert_eq!(count_enabled(&paints, ControlId::Remove, true), 1);
        Ok(())
    }

    #[tokio::test]
    async fn load_options_fills_named_selector() -> Result<()> {
        let (bridge, client) = bridge_with(FakeClient::default());
        bridge.load_options("db").await?;

        assert_eq!(*client.calls.borrow(), vec![Call::Options("db".to_string())]);
        assert_eq!(bridge.surface().paints(), vec![Paint::Options("db".to_string(), vec![
            "users".to_string(),
            "events".to_string()
        ])]);
        Ok(())
    }
}
