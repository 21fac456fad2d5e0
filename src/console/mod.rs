//! The user-management console: form state, result panels, handlers.
//!
//! Each handler is a single request/response cycle. Input is trimmed and
//! checked locally first; a failed check shows an error panel and never
//! touches the network. Successful mutations clear their form and
//! reload the user list.

pub mod confirm;
pub mod run;

use std::collections::BTreeMap;

use serde_json::json;
use strum::Display;
use tracing::{debug, info, warn};

use crate::api::ApiClient;
use crate::messages::{Locale, Messages};
use crate::models::{NewUser, User, UserPatch};
use crate::output::{CardAction, ResultPanel, UserListView};

pub use confirm::{AutoConfirm, Confirm, StdinConfirm};
pub use run::{Action, Outcome, run_action};

/// Result areas, one per action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ResultSlot {
    Get,
    Create,
    Update,
    Delete,
    Health,
}

/// Fields of the create and update forms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserForm {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl UserForm {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Raw input of every form on the console.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Forms {
    pub get_id: String,
    pub create: UserForm,
    pub update: UserForm,
    pub delete_id: String,
}

/// Console state plus the handlers that drive it.
pub struct Console<C: Confirm> {
    client: ApiClient,
    confirm: C,
    messages: &'static Messages,
    pub forms: Forms,
    panels: BTreeMap<ResultSlot, ResultPanel>,
    users: UserListView,
}

impl<C: Confirm> Console<C> {
    pub fn new(client: ApiClient, confirm: C, locale: Locale) -> Self {
        Self {
            client,
            confirm,
            messages: locale.messages(),
            forms: Forms::default(),
            panels: BTreeMap::new(),
            users: UserListView::default(),
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Point subsequent requests at another API.
    pub fn set_base_url(&mut self, base_url: &str) {
        self.client = self.client.clone().with_base_url(base_url);
    }

    pub fn messages(&self) -> &'static Messages {
        self.messages
    }

    pub fn users(&self) -> &UserListView {
        &self.users
    }

    /// Panel currently shown in `slot`, if any.
    pub fn panel(&self, slot: ResultSlot) -> Option<&ResultPanel> {
        self.panels.get(&slot)
    }

    fn show(&mut self, slot: ResultSlot, panel: ResultPanel) {
        debug!(%slot, is_error = panel.is_error, "showing result");
        self.panels.insert(slot, panel);
    }

    fn show_validation_error(&mut self, slot: ResultSlot, message: &str) {
        self.show(slot, ResultPanel::error(json!({ "error": message })));
    }

    /// `GET /api/users` into the list view.
    pub async fn load_users(&mut self) {
        self.users = UserListView::Loading;
        let result = self.client.list_users().await;
        self.users = UserListView::from_result(&result);
    }

    /// `GET /api/users/{id}` using the get form.
    pub async fn get_user(&mut self) {
        let id = self.forms.get_id.trim().to_string();
        if id.is_empty() {
            self.show_validation_error(ResultSlot::Get, self.messages.id_required);
            return;
        }
        let result = self.client.get_user(&id).await;
        self.show(ResultSlot::Get, ResultPanel::from_result(&result));
    }

    /// `POST /api/users` using the create form.
    pub async fn create_user(&mut self) {
        let form = &self.forms.create;
        let name = form.name.trim();
        let email = form.email.trim();
        if name.is_empty() || email.is_empty() {
            self.show_validation_error(ResultSlot::Create, self.messages.name_email_required);
            return;
        }
        let custom_id = form.id.trim();
        let body = NewUser {
            name: name.to_string(),
            email: email.to_string(),
            role: form.role.trim().to_string(),
            id: (!custom_id.is_empty()).then(|| custom_id.to_string()),
        };

        let result = self.client.create_user(&body).await;
        self.show(ResultSlot::Create, ResultPanel::from_result(&result));
        if result.ok {
            info!(name = %body.name, "user created");
            self.forms.create.clear();
            self.load_users().await;
        }
    }

    /// `PUT /api/users/{id}` with only the non-empty fields of the update form.
    pub async fn update_user(&mut self) {
        let form = &self.forms.update;
        let id = form.id.trim().to_string();
        if id.is_empty() {
            self.show_validation_error(ResultSlot::Update, self.messages.id_required);
            return;
        }
        let patch = UserPatch::from_fields(&form.name, &form.email, &form.role);
        if patch.is_empty() {
            self.show_validation_error(ResultSlot::Update, self.messages.update_field_required);
            return;
        }

        let result = self.client.update_user(&id, &patch).await;
        self.show(ResultSlot::Update, ResultPanel::from_result(&result));
        if result.ok {
            info!(%id, "user updated");
            self.forms.update.clear();
            self.load_users().await;
        }
    }

    /// `DELETE /api/users/{id}` using the delete form, after confirmation.
    pub async fn delete_user(&mut self) {
        let id = self.forms.delete_id.trim().to_string();
        if id.is_empty() {
            self.show_validation_error(ResultSlot::Delete, self.messages.id_required);
            return;
        }
        if self.delete(&id).await {
            self.forms.delete_id.clear();
        }
    }

    /// Delete triggered from a user card.
    pub async fn delete_user_by_id(&mut self, id: &str) {
        self.delete(id).await;
    }

    /// Confirm, delete, show the result, reload on success. Returns
    /// whether the API accepted the delete.
    async fn delete(&mut self, id: &str) -> bool {
        if !self.confirm.confirm(&self.messages.confirm_delete(id)).await {
            debug!(%id, "delete declined");
            return false;
        }
        let result = self.client.delete_user(id).await;
        self.show(ResultSlot::Delete, ResultPanel::from_result(&result));
        if result.ok {
            info!(%id, "user deleted");
            self.load_users().await;
        }
        result.ok
    }

    /// Prefill the update form from a listed user.
    ///
    /// A missing role leaves the role field blank; `N/A` is a display
    /// default only.
    pub fn fill_update_form(&mut self, user: &User) {
        self.forms.update = UserForm {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.clone().unwrap_or_default(),
        };
    }

    /// `GET /health`
    pub async fn check_health(&mut self) {
        let result = self.client.health().await;
        self.show(ResultSlot::Health, ResultPanel::from_result(&result));
    }

    /// Route an action bound to a user card.
    pub async fn dispatch(&mut self, action: CardAction) {
        match action {
            CardAction::Edit(id) => match self.users.find(&id).cloned() {
                Some(user) => self.fill_update_form(&user),
                None => warn!(%id, "edit requested for a user not in the list"),
            },
            CardAction::Delete(id) => self.delete_user_by_id(&id).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use async_trait::async_trait;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Records prompts and answers with a fixed value.
    struct RecordingConfirm {
        answer: bool,
        prompts: Mutex<Vec<String>>,
    }

    impl RecordingConfirm {
        fn new(answer: bool) -> Self {
            Self {
                answer,
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl Confirm for RecordingConfirm {
        async fn confirm(&self, prompt: &str) -> bool {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.answer
        }
    }

    fn console(server: &MockServer, confirm: bool) -> Console<RecordingConfirm> {
        Console::new(
            ApiClient::new(server.uri()),
            RecordingConfirm::new(confirm),
            Locale::En,
        )
    }

    async fn mount_list(server: &MockServer, users: serde_json::Value, times: u64) {
        Mock::given(method("GET"))
            .and(path("/api/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(users))
            .expect(times)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn load_users_fills_list_view() {
        let server = MockServer::start().await;
        mount_list(&server, json!([{"id": "1", "name": "A", "email": "a@x.com"}]), 1).await;

        let mut console = console(&server, true);
        console.load_users().await;
        assert_eq!(console.users().users().len(), 1);
    }

    #[tokio::test]
    async fn get_user_requires_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(0)
            .mount(&server)
            .await;

        let mut console = console(&server, true);
        console.forms.get_id = "   ".into();
        console.get_user().await;

        let panel = console.panel(ResultSlot::Get).unwrap();
        assert!(panel.is_error);
        assert_eq!(panel.data["error"], "Please enter a User ID");
    }

    #[tokio::test]
    async fn get_user_shows_remote_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/users/9"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "User not found"})))
            .expect(1)
            .mount(&server)
            .await;

        let mut console = console(&server, true);
        console.forms.get_id = " 9 ".into();
        console.get_user().await;

        let panel = console.panel(ResultSlot::Get).unwrap();
        assert!(panel.is_error);
        assert_eq!(panel.data["error"], "User not found");
    }

    #[tokio::test]
    async fn create_with_empty_name_never_hits_network() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({})))
            .expect(0)
            .mount(&server)
            .await;

        let mut console = console(&server, true);
        console.forms.create.email = "a@x.com".into();
        console.create_user().await;

        let panel = console.panel(ResultSlot::Create).unwrap();
        assert!(panel.is_error);
        assert_eq!(panel.data["error"], "Please enter Name and Email");
        assert_eq!(console.forms.create.email, "a@x.com");
    }

    #[tokio::test]
    async fn create_success_clears_form_and_reloads() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/users"))
            .and(body_json(json!({"name": "A", "email": "a@x.com", "role": "", "id": "u1"})))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(json!({"id": "u1", "name": "A", "email": "a@x.com"})),
            )
            .expect(1)
            .mount(&server)
            .await;
        mount_list(&server, json!([{"id": "u1", "name": "A", "email": "a@x.com"}]), 1).await;

        let mut console = console(&server, true);
        console.forms.create = UserForm {
            id: " u1 ".into(),
            name: " A ".into(),
            email: "a@x.com".into(),
            role: String::new(),
        };
        console.create_user().await;

        assert!(!console.panel(ResultSlot::Create).unwrap().is_error);
        assert_eq!(console.forms.create, UserForm::default());
        assert!(console.users().find("u1").is_some());
    }

    #[tokio::test]
    async fn create_failure_keeps_form_and_skips_reload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/users"))
            .respond_with(ResponseTemplate::new(409).set_body_json(json!({"error": "exists"})))
            .expect(1)
            .mount(&server)
            .await;
        mount_list(&server, json!([]), 0).await;

        let mut console = console(&server, true);
        console.forms.create.name = "A".into();
        console.forms.create.email = "a@x.com".into();
        console.create_user().await;

        assert!(console.panel(ResultSlot::Create).unwrap().is_error);
        assert_eq!(console.forms.create.name, "A");
    }

    #[tokio::test]
    async fn update_requires_id_then_a_field() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(0)
            .mount(&server)
            .await;

        let mut console = console(&server, true);
        console.forms.update.name = "A".into();
        console.update_user().await;
        assert_eq!(
            console.panel(ResultSlot::Update).unwrap().data["error"],
            "Please enter a User ID"
        );

        console.forms.update = UserForm {
            id: "1".into(),
            ..UserForm::default()
        };
        console.update_user().await;
        assert_eq!(
            console.panel(ResultSlot::Update).unwrap().data["error"],
            "Please enter at least one field to update"
        );
    }

    #[tokio::test]
    async fn update_sends_only_filled_fields() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/users/1"))
            .and(body_json(json!({"email": "new@x.com"})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"id": "1", "name": "A", "email": "new@x.com"})),
            )
            .expect(1)
            .mount(&server)
            .await;
        mount_list(&server, json!([{"id": "1", "name": "A", "email": "new@x.com"}]), 1).await;

        let mut console = console(&server, true);
        console.forms.update = UserForm {
            id: "1".into(),
            email: "new@x.com".into(),
            ..UserForm::default()
        };
        console.update_user().await;

        assert!(!console.panel(ResultSlot::Update).unwrap().is_error);
        assert_eq!(console.forms.update, UserForm::default());
    }

    #[tokio::test]
    async fn delete_declined_issues_no_request() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(0)
            .mount(&server)
            .await;

        let mut console = console(&server, false);
        console.forms.delete_id = "5".into();
        console.delete_user().await;

        assert!(console.panel(ResultSlot::Delete).is_none());
        assert_eq!(console.forms.delete_id, "5");
        let prompts = console.confirm.prompts.lock().unwrap();
        assert_eq!(prompts.as_slice(), ["Are you sure you want to delete User ID: 5?"]);
    }

    #[tokio::test]
    async fn delete_confirmed_issues_exactly_one_delete() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/users/5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "deleted"})))
            .expect(1)
            .mount(&server)
            .await;
        mount_list(&server, json!([]), 1).await;

        let mut console = console(&server, true);
        console.forms.delete_id = "5".into();
        console.delete_user().await;

        assert!(!console.panel(ResultSlot::Delete).unwrap().is_error);
        assert!(console.forms.delete_id.is_empty());
        assert_eq!(console.users(), &UserListView::Empty);
    }

    #[tokio::test]
    async fn delete_requires_id_without_prompting() {
        let server = MockServer::start().await;
        let mut console = console(&server, true);
        console.delete_user().await;

        assert!(console.panel(ResultSlot::Delete).unwrap().is_error);
        assert!(console.confirm.prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn dispatch_edit_prefills_update_form() {
        let server = MockServer::start().await;
        mount_list(&server, json!([{"id": "3", "name": "C", "email": "c@x.com"}]), 1).await;

        let mut console = console(&server, true);
        console.load_users().await;
        console.dispatch(CardAction::Edit("3".into())).await;

        assert_eq!(
            console.forms.update,
            UserForm {
                id: "3".into(),
                name: "C".into(),
                email: "c@x.com".into(),
                role: String::new(),
            }
        );
    }

    #[tokio::test]
    async fn dispatch_edit_unknown_user_is_noop() {
        let server = MockServer::start().await;
        let mut console = console(&server, true);
        console.dispatch(CardAction::Edit("404".into())).await;
        assert_eq!(console.forms.update, UserForm::default());
    }

    #[tokio::test]
    async fn dispatch_delete_uses_card_id() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/users/3"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "locked"})))
            .expect(1)
            .mount(&server)
            .await;
        mount_list(&server, json!([]), 0).await;

        let mut console = console(&server, true);
        console.dispatch(CardAction::Delete("3".into())).await;

        let panel = console.panel(ResultSlot::Delete).unwrap();
        assert!(panel.is_error);
        assert_eq!(panel.data["error"], "locked");
    }

    #[tokio::test]
    async fn health_shows_payload() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "healthy"})))
            .mount(&server)
            .await;

        let mut console = console(&server, true);
        console.check_health().await;
        let panel = console.panel(ResultSlot::Health).unwrap();
        assert!(!panel.is_error);
        assert_eq!(panel.data["status"], "healthy");
    }

    #[test]
    fn set_base_url_rebinds_client() {
        let mut console = Console::new(
            ApiClient::new("http://a"),
            AutoConfirm(true),
            Locale::Th,
        );
        console.set_base_url("http://b");
        assert_eq!(console.client().base_url(), "http://b");
        assert_eq!(console.messages().delete_button, "ลบ");
    }
}
