//! Interaction controller
//!
//! Turns user events into API calls and renders. The controller owns the view
//! model behind an async mutex that is only locked between awaits, so several
//! events may be in flight at once. Each logical action (search, detail) has
//! its own request sequence: a response is applied only while its token is
//! still the newest one issued for that action, otherwise it is dropped.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, error, info};

use crate::client::ApiClient;
use crate::dom::Element;
use crate::error::{Result, ShowFinderError};
use crate::render::{render_result_list, render_show_detail};
use crate::sanitize::SummaryPolicy;
use crate::types::ShowSummary;
use crate::view::{ViewModel, ViewSnapshot};

/// What happened in response to an event
#[derive(Debug)]
pub enum Outcome {
    /// The event did not apply; default action not prevented
    Ignored,
    /// The view was re-rendered
    Updated,
    /// A newer request of the same kind was issued first; response discarded
    Superseded,
    /// The request failed; the error was logged and the view left as it was
    Failed(ShowFinderError),
}

impl Outcome {
    pub fn is_updated(&self) -> bool {
        matches!(self, Outcome::Updated)
    }
}

/// Monotonic token source for one kind of request
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: AtomicU64,
}

impl RequestSequence {
    /// Issue a token newer than every token issued before
    pub fn issue(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether `token` is still the newest one issued
    pub fn is_current(&self, token: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == token
    }
}

/// Element a click landed on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    /// A selectable result entry carrying a show id
    Entry { show_id: String },
    /// Anything else inside the result list
    Other,
}

impl ClickTarget {
    /// Classify the clicked element. Only the entry link itself counts, not its
    /// list item or any other ancestor.
    pub fn from_element(element: &Element) -> Self {
        match (element.tag(), element.data("id")) {
            ("a", Some(id)) => ClickTarget::Entry {
                show_id: id.to_string(),
            },
            _ => ClickTarget::Other,
        }
    }
}

/// Event handler for the search form and the result list
pub struct Controller {
    client: ApiClient,
    policy: SummaryPolicy,
    view: Mutex<ViewModel>,
    searches: RequestSequence,
    details: RequestSequence,
}

impl Controller {
    /// Create a controller with a fresh view. The submit control starts
    /// disabled because the query is empty.
    pub fn new(client: ApiClient) -> Self {
        Self::with_policy(client, SummaryPolicy::default())
    }

    /// Create a controller with an explicit summary policy
    pub fn with_policy(client: ApiClient, policy: SummaryPolicy) -> Self {
        let mut view = ViewModel::new();
        view.form.refresh_submit_state();

        Self {
            client,
            policy,
            view: Mutex::new(view),
            searches: RequestSequence::default(),
            details: RequestSequence::default(),
        }
    }

    /// Lock the view model for reading
    pub async fn view(&self) -> MutexGuard<'_, ViewModel> {
        self.view.lock().await
    }

    pub async fn snapshot(&self) -> ViewSnapshot {
        self.view.lock().await.snapshot()
    }

    /// Input event: store the query and recompute whether submit is enabled.
    /// Returns the new enablement.
    pub async fn on_input(&self, text: &str) -> bool {
        let mut view = self.view.lock().await;
        view.form.set_query(text);
        view.form.refresh_submit_state();
        view.form.is_submit_enabled()
    }

    /// Submit event: search with the current query. Ignored while the submit
    /// control is disabled.
    pub async fn on_submit(&self) -> Outcome {
        let query = {
            let view = self.view.lock().await;
            if !view.form.is_submit_enabled() {
                return Outcome::Ignored;
            }
            view.form.query().to_string()
        };
        self.search(&query).await
    }

    /// Run a search for `query` and render the hits.
    pub async fn search(&self, query: &str) -> Outcome {
        let token = self.searches.issue();
        debug!(token, query, "search started");

        let hits = match self.client.search_shows(query).await {
            Ok(hits) => hits,
            Err(e) => return failed("search", e),
        };

        let mut view = self.view.lock().await;
        if !self.searches.is_current(token) {
            debug!(token, query, "stale search response dropped");
            return Outcome::Superseded;
        }

        let shows: Vec<ShowSummary> = hits.into_iter().map(|hit| hit.show).collect();
        render_result_list(&mut view, &shows, query);
        info!(query, results = shows.len(), "search rendered");
        Outcome::Updated
    }

    /// Click event on the result list
    pub async fn on_click(&self, target: &ClickTarget) -> Outcome {
        match target {
            ClickTarget::Entry { show_id } => match parse_show_id(show_id) {
                Ok(id) => self.open_show(id).await,
                Err(e) => failed("detail", e),
            },
            ClickTarget::Other => Outcome::Ignored,
        }
    }

    /// Fetch a show and its episodes together and render the detail panels.
    /// Either failure abandons the pair.
    pub async fn open_show(&self, show_id: u64) -> Outcome {
        let token = self.details.issue();
        debug!(token, show_id, "detail started");

        let fetched = tokio::try_join!(self.client.show(show_id), self.client.episodes(show_id));
        let (show, episodes) = match fetched {
            Ok(pair) => pair,
            Err(e) => return failed("detail", e),
        };

        let mut view = self.view.lock().await;
        if !self.details.is_current(token) {
            debug!(token, show_id, "stale detail response dropped");
            return Outcome::Superseded;
        }

        render_show_detail(&mut view, &show, &episodes, self.policy);
        info!(show_id, name = %show.name, episodes = episodes.len(), "detail rendered");
        Outcome::Updated
    }
}

fn parse_show_id(raw: &str) -> Result<u64> {
    raw.parse()
        .map_err(|_| ShowFinderError::InvalidId(raw.to_string()))
}

fn failed(action: &str, e: ShowFinderError) -> Outcome {
    error!(action, "{}", e);
    Outcome::Failed(e)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ClientConfig;
    use serde_json::{json, Value};
    use std::time::Duration;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn controller_for(server: &MockServer) -> Controller {
        let client = ApiClient::with_config(ClientConfig::with_base_url(server.uri())).unwrap();
        Controller::new(client)
    }

    fn show_json(id: u64, name: &str) -> Value {
        json!({
            "id": id,
            "name": name,
            "type": "Scripted",
            "genres": ["Drama"],
            "status": "Ended",
            "runtime": 60,
            "premiered": "2004-09-22",
            "officialSite": null,
            "image": null,
            "summary": "<p>About</p>",
            "externals": {"tvrage": 1, "thetvdb": 2, "imdb": "tt3"}
        })
    }

    fn episodes_json() -> Value {
        json!([
            {"id": 1, "name": "Pilot", "season": 1, "number": 1},
            {"id": 2, "name": "Two", "season": 1, "number": 2},
            {"id": 3, "name": "Return", "season": 2, "number": 1}
        ])
    }

    async fn mount_search(server: &MockServer, query: &str, body: Value, delay: Duration) {
        Mock::given(method("GET"))
            .and(path("/search/shows"))
            .and(query_param("q", query))
            .respond_with(ResponseTemplate::new(200).set_body_json(body).set_delay(delay))
            .mount(server)
            .await;
    }

    async fn mount_detail(server: &MockServer, id: u64, name: &str, delay: Duration) {
        Mock::given(method("GET"))
            .and(path(format!("/shows/{}", id)))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(show_json(id, name))
                    .set_delay(delay),
            )
            .mount(server)
            .await;
        Mock::given(method("GET"))
            .and(path(format!("/shows/{}/episodes", id)))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(episodes_json())
                    .set_delay(delay),
            )
            .mount(server)
            .await;
    }

    #[test]
    fn test_request_sequence() {
        let sequence = RequestSequence::default();
        let first = sequence.issue();
        assert!(sequence.is_current(first));
        let second = sequence.issue();
        assert!(second > first);
        assert!(!sequence.is_current(first));
        assert!(sequence.is_current(second));
    }

    #[test]
    fn test_click_target_classification() {
        let link = Element::new("a").attr("href", "#").attr("data-id", "4").text("X");
        assert_eq!(
            ClickTarget::from_element(&link),
            ClickTarget::Entry {
                show_id: "4".to_string()
            }
        );

        let item = Element::new("li").child(link);
        assert_eq!(ClickTarget::from_element(&item), ClickTarget::Other);

        let bare_link = Element::new("a").attr("href", "#");
        assert_eq!(ClickTarget::from_element(&bare_link), ClickTarget::Other);
    }

    #[tokio::test]
    async fn test_init_disables_submit() {
        let server = MockServer::start().await;
        let controller = controller_for(&server);
        assert!(!controller.snapshot().await.submit_enabled);
    }

    #[tokio::test]
    async fn test_input_toggles_submit() {
        let server = MockServer::start().await;
        let controller = controller_for(&server);

        for (text, enabled) in [("b", true), ("ba", true), ("", false), ("x", true), ("", false)] {
            assert_eq!(controller.on_input(text).await, enabled);
            assert_eq!(controller.view().await.form.is_submit_enabled(), enabled);
        }
    }

    #[tokio::test]
    async fn test_submit_ignored_while_disabled() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(0)
            .mount(&server)
            .await;

        let controller = controller_for(&server);
        assert!(matches!(controller.on_submit().await, Outcome::Ignored));
    }

    #[tokio::test]
    async fn test_submit_empty_results_message() {
        let server = MockServer::start().await;
        mount_search(&server, "nothing here", json!([]), Duration::ZERO).await;

        let controller = controller_for(&server);
        controller.on_input("nothing here").await;
        assert!(controller.on_submit().await.is_updated());

        let view = controller.view().await;
        assert_eq!(view.show_list.text_content(), "No results for criteria nothing here");
    }

    #[tokio::test]
    async fn test_search_then_open_show_end_to_end() {
        let server = MockServer::start().await;
        mount_search(
            &server,
            "batman",
            json!([
                {"score": 0.9, "show": show_json(975, "Batman")},
                {"score": 0.7, "show": show_json(481, "Batman: The Animated Series")}
            ]),
            Duration::ZERO,
        )
        .await;
        mount_detail(&server, 481, "Batman: The Animated Series", Duration::ZERO).await;

        let controller = controller_for(&server);
        controller.on_input("batman").await;
        assert!(controller.on_submit().await.is_updated());

        let target = {
            let view = controller.view().await;
            let entries = view.entries();
            assert_eq!(entries.len(), 2);
            let names: Vec<String> = entries.iter().map(|a| a.text_content()).collect();
            assert_eq!(names, vec!["Batman", "Batman: The Animated Series"]);
            ClickTarget::from_element(entries[1])
        };

        assert!(controller.on_click(&target).await.is_updated());

        let view = controller.view().await;
        assert_eq!(
            view.show_detail.find_all("h1")[0].text_content(),
            "Batman: The Animated Series"
        );
        let sections: Vec<&Element> = view.episode_list.child_elements().collect();
        assert_eq!(sections.len(), 2);
        assert!(sections[0].has_attribute("open"));
        assert_eq!(sections[0].find_all("summary")[0].text_content(), "1");
        assert!(!sections[1].has_attribute("open"));
    }

    #[tokio::test]
    async fn test_click_on_non_entry_makes_no_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(0)
            .mount(&server)
            .await;

        let controller = controller_for(&server);
        let item = Element::new("li").child(Element::new("a").attr("data-id", "1"));
        let outcome = controller.on_click(&ClickTarget::from_element(&item)).await;

        assert!(matches!(outcome, Outcome::Ignored));
        assert!(controller.view().await.show_detail.is_empty());
    }

    #[tokio::test]
    async fn test_failed_detail_keeps_previous_view() {
        let server = MockServer::start().await;
        mount_detail(&server, 1, "First", Duration::ZERO).await;
        Mock::given(method("GET"))
            .and(path("/shows/2"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/shows/2/episodes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(episodes_json()))
            .mount(&server)
            .await;

        let controller = controller_for(&server);
        assert!(controller.open_show(1).await.is_updated());
        let before = controller.snapshot().await;

        let outcome = controller
            .on_click(&ClickTarget::Entry {
                show_id: "2".to_string(),
            })
            .await;
        assert!(matches!(outcome, Outcome::Failed(ShowFinderError::DecodeError { .. })));
        assert_eq!(controller.snapshot().await, before);
    }

    #[tokio::test]
    async fn test_failed_search_keeps_previous_list() {
        let server = MockServer::start().await;
        mount_search(&server, "good", json!([{"score": 1.0, "show": show_json(1, "Good")}]), Duration::ZERO).await;
        mount_search(&server, "bad", json!({"unexpected": "shape"}), Duration::ZERO).await;

        let controller = controller_for(&server);
        assert!(controller.search("good").await.is_updated());
        let outcome = controller.search("bad").await;

        assert!(matches!(outcome, Outcome::Failed(_)));
        assert_eq!(controller.view().await.entries().len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_entry_id_fails() {
        let server = MockServer::start().await;
        let controller = controller_for(&server);
        let outcome = controller
            .on_click(&ClickTarget::Entry {
                show_id: "abc".to_string(),
            })
            .await;
        assert!(matches!(outcome, Outcome::Failed(ShowFinderError::InvalidId(_))));
    }

    #[tokio::test]
    async fn test_stale_search_is_discarded() {
        let server = MockServer::start().await;
        mount_search(
            &server,
            "slow",
            json!([{"score": 1.0, "show": show_json(1, "Slow")}]),
            Duration::from_millis(300),
        )
        .await;
        mount_search(
            &server,
            "fast",
            json!([{"score": 1.0, "show": show_json(2, "Fast")}]),
            Duration::ZERO,
        )
        .await;

        let controller = controller_for(&server);
        let (slow, fast) = tokio::join!(controller.search("slow"), controller.search("fast"));

        assert!(matches!(slow, Outcome::Superseded));
        assert!(fast.is_updated());
        let view = controller.view().await;
        let names: Vec<String> = view.entries().iter().map(|a| a.text_content()).collect();
        assert_eq!(names, vec!["Fast"]);
    }

    #[tokio::test]
    async fn test_stale_detail_is_discarded() {
        let server = MockServer::start().await;
        mount_detail(&server, 1, "Slow Show", Duration::from_millis(300)).await;
        mount_detail(&server, 2, "Fast Show", Duration::ZERO).await;

        let controller = controller_for(&server);
        let (slow, fast) = tokio::join!(controller.open_show(1), controller.open_show(2));

        assert!(matches!(slow, Outcome::Superseded));
        assert!(fast.is_updated());
        let view = controller.view().await;
        assert_eq!(view.show_detail.find_all("h1")[0].text_content(), "Fast Show");
    }
}
