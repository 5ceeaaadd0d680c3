//! View model
//!
//! Owns every piece of document the application touches: the search form and
//! the three output containers. Renderers and the controller receive it
//! explicitly instead of reaching for global element handles.

use serde::{Deserialize, Serialize};

use crate::dom::{Container, Element};

/// Container id of the search result list
pub const SHOW_LIST_ID: &str = "show-list";
/// Container id of the show detail panel
pub const SHOW_DETAIL_ID: &str = "show-detail";
/// Container id of the episode panel
pub const EPISODE_LIST_ID: &str = "episode-list";

/// The search form: a text input and its submit control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchForm {
    query: String,
    submit: Element,
}

impl Default for SearchForm {
    fn default() -> Self {
        Self {
            query: String::new(),
            submit: Element::new("button").attr("type", "submit").text("Search"),
        }
    }
}

impl SearchForm {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn submit(&self) -> &Element {
        &self.submit
    }

    pub fn is_submit_enabled(&self) -> bool {
        !self.submit.has_attribute("disabled")
    }

    /// Disable the submit control when the query is empty, enable it otherwise
    pub fn refresh_submit_state(&mut self) {
        if self.query.is_empty() {
            self.submit.set_attribute("disabled", "disabled");
        } else {
            self.submit.remove_attribute("disabled");
        }
    }
}

/// Everything the renderers write to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub form: SearchForm,
    pub show_list: Container,
    pub show_detail: Container,
    pub episode_list: Container,
}

impl Default for ViewModel {
    fn default() -> Self {
        Self {
            form: SearchForm::default(),
            show_list: Container::new(SHOW_LIST_ID),
            show_detail: Container::new(SHOW_DETAIL_ID),
            episode_list: Container::new(EPISODE_LIST_ID),
        }
    }
}

impl ViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selectable entries currently in the result list, in display order
    pub fn entries(&self) -> Vec<&Element> {
        self.show_list
            .find_all("a")
            .into_iter()
            .filter(|a| a.data("id").is_some())
            .collect()
    }

    /// Serialisable copy of the current document state
    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            query: self.form.query().to_string(),
            submit_enabled: self.form.is_submit_enabled(),
            show_list: self.show_list.inner_html(),
            show_detail: self.show_detail.inner_html(),
            episode_list: self.episode_list.inner_html(),
        }
    }
}

/// HTML fragments for each container plus the form state, as sent to a webview
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewSnapshot {
    pub query: String,
    pub submit_enabled: bool,
    pub show_list: String,
    pub show_detail: String,
    pub episode_list: String,
}
