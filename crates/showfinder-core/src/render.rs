//! Renderers for the result list and the show detail panels
//!
//! Each renderer clears the containers it owns and rebuilds them from the data
//! it is given. Input order is always preserved.

use tracing::debug;

use crate::dom::{Element, Node};
use crate::sanitize::SummaryPolicy;
use crate::season::{group_by_season, SeasonGroup};
use crate::types::{Episode, ShowSummary};
use crate::view::ViewModel;

/// Lead text of the message shown when a search finds nothing
pub const NO_RESULTS_MESSAGE: &str = "No results for criteria ";

/// Placeholder shown for an external id the API does not know
pub const MISSING_EXTERNAL: &str = "undefined";

/// Season whose section starts expanded
const OPEN_SEASON: u32 = 1;

/// Render search results into the show list.
///
/// An empty result set renders the no-results message with `query` in bold;
/// otherwise each show becomes `<li><a href="#" data-id="..">name</a></li>`.
pub fn render_result_list(view: &mut ViewModel, results: &[ShowSummary], query: &str) {
    let list = &mut view.show_list;
    list.clear();

    if results.is_empty() {
        list.append(Node::Text(NO_RESULTS_MESSAGE.to_string()));
        list.append(Element::new("b").text(query));
        return;
    }

    for show in results {
        list.append(Element::new("li").child(result_entry(show)));
    }
    debug!(count = results.len(), "rendered result list");
}

/// A selectable entry for `show`
fn result_entry(show: &ShowSummary) -> Element {
    Element::new("a")
        .attr("href", "#")
        .attr("data-id", show.id.to_string())
        .text(show.name.as_str())
}

/// Render a show and its episodes into the detail and episode panels.
pub fn render_show_detail(
    view: &mut ViewModel,
    show: &ShowSummary,
    episodes: &[Episode],
    policy: SummaryPolicy,
) {
    render_show(view, show, policy);
    render_episodes(view, episodes);
}

fn render_show(view: &mut ViewModel, show: &ShowSummary, policy: SummaryPolicy) {
    let detail = &mut view.show_detail;
    detail.clear();

    detail.append(Element::new("h1").text(show.name.as_str()));

    if let Some(src) = show.medium_image() {
        detail.append(Element::new("img").attr("src", src).attr("alt", show.name.as_str()));
    }

    let summary = show.summary.as_deref().unwrap_or_default();
    detail.append(Element::new("div").child(Node::Markup(policy.apply(summary))));

    detail.append(attribute_table(show));
}

/// The fixed-order attribute table
fn attribute_table(show: &ShowSummary) -> Element {
    let text_or_empty = |value: Option<&str>| value.unwrap_or_default().to_string();

    let mut site = Element::new("a").text(show.name.as_str());
    if let Some(url) = show.official_site.as_deref() {
        site.set_attribute("href", url);
    }

    Element::new("table")
        .child(text_row("Premiered", text_or_empty(show.premiered.as_deref())))
        .child(text_row("Status", text_or_empty(show.status.as_deref())))
        .child(text_row("Type", text_or_empty(show.show_type.as_deref())))
        .child(text_row("Genres", show.genres.join(", ")))
        .child(text_row(
            "Runtime",
            show.runtime.map(|m| m.to_string()).unwrap_or_default(),
        ))
        .child(row("Site", site))
        .child(row("Externals", externals_list(show)))
}

fn externals_list(show: &ShowSummary) -> Element {
    let externals = &show.externals;
    let entry = |source: &str, id: Option<String>| {
        Element::new("li").text(format!(
            "{} - {}",
            source,
            id.unwrap_or_else(|| MISSING_EXTERNAL.to_string())
        ))
    };

    Element::new("ul")
        .child(entry("tvrage", externals.tvrage.map(|id| id.to_string())))
        .child(entry("thetvdb", externals.thetvdb.map(|id| id.to_string())))
        .child(entry("imdb", externals.imdb.clone()))
}

fn text_row(title: &str, content: String) -> Element {
    Element::new("tr")
        .child(Element::new("td").text(title))
        .child(Element::new("td").text(content))
}

fn row(title: &str, content: Element) -> Element {
    Element::new("tr")
        .child(Element::new("td").text(title))
        .child(Element::new("td").child(content))
}

fn render_episodes(view: &mut ViewModel, episodes: &[Episode]) {
    let list = &mut view.episode_list;
    list.clear();

    let seasons = group_by_season(episodes);
    for group in &seasons {
        list.append(season_section(group));
    }
    debug!(seasons = seasons.len(), episodes = episodes.len(), "rendered episodes");
}

fn season_section(group: &SeasonGroup) -> Element {
    let mut names = Element::new("ul");
    for episode in &group.episodes {
        names.append(Element::new("li").text(episode.name.as_str()));
    }

    let mut section = Element::new("details")
        .child(Element::new("summary").text(group.label()))
        .child(names);
    if group.season == OPEN_SEASON {
        section.set_attribute("open", "");
    }
    section
}
