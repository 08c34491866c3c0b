//! Mission results panel with tabbed views
//!
//! Four mutually exclusive views over the fetched results: an overview with
//! the count tiles and the plan's queries, then the per-category lists.
//! Every view renders an empty state when its array is missing; absent data
//! is never an error.

use datastage_core::MissionResults;
use iocraft::prelude::*;

const CONTENT_PREVIEW_CHARS: usize = 500;

/// The four result views, selected by local UI state only
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResultsTab {
    #[default]
    Overview,
    Searches,
    Content,
    Screenshots,
}

impl ResultsTab {
    pub const ALL: [ResultsTab; 4] = [
        ResultsTab::Overview,
        ResultsTab::Searches,
        ResultsTab::Content,
        ResultsTab::Screenshots,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ResultsTab::Overview => "Overview",
            ResultsTab::Searches => "Searches",
            ResultsTab::Content => "Content",
            ResultsTab::Screenshots => "Screenshots",
        }
    }

    pub fn next(&self) -> ResultsTab {
        match self {
            ResultsTab::Overview => ResultsTab::Searches,
            ResultsTab::Searches => ResultsTab::Content,
            ResultsTab::Content => ResultsTab::Screenshots,
            ResultsTab::Screenshots => ResultsTab::Overview,
        }
    }

    pub fn previous(&self) -> ResultsTab {
        match self {
            ResultsTab::Overview => ResultsTab::Screenshots,
            ResultsTab::Searches => ResultsTab::Overview,
            ResultsTab::Content => ResultsTab::Searches,
            ResultsTab::Screenshots => ResultsTab::Content,
        }
    }
}

#[derive(Clone, Default, Props)]
pub struct ResultsPanelProps {
    pub results: Option<MissionResults>,
    pub active_tab: ResultsTab,
}

/// Tabbed mission results panel
#[component]
pub fn ResultsPanel(_hooks: Hooks, props: &ResultsPanelProps) -> impl Into<AnyElement<'static>> {
    let active_tab = props.active_tab;

    let content: Option<AnyElement<'static>> = props.results.as_ref().map(|results| {
        match active_tab {
            ResultsTab::Overview => overview_tab(results),
            ResultsTab::Searches => searches_tab(results),
            ResultsTab::Content => content_tab(results),
            ResultsTab::Screenshots => screenshots_tab(results),
        }
    });

    element! {
        View(flex_direction: FlexDirection::Column, margin_top: 1) {
            Text(content: "Mission Results", weight: Weight::Bold)
            View(flex_direction: FlexDirection::Row, gap: 2, margin_bottom: 1) {
                #(ResultsTab::ALL.iter().map(|tab| {
                    let is_active = *tab == active_tab;
                    element! {
                        Text(
                            content: if is_active {
                                format!("▸ {}", tab.label())
                            } else {
                                tab.label().to_string()
                            },
                            color: if is_active { Color::Cyan } else { Color::DarkGrey },
                            weight: if is_active { Weight::Bold } else { Weight::Normal },
                        )
                    }
                }))
            }
            #(content)
        }
    }
}

fn empty_state(message: &str) -> AnyElement<'static> {
    element! {
        Text(content: message.to_string(), color: Color::DarkGrey)
    }
    .into()
}

fn overview_tab(results: &MissionResults) -> AnyElement<'static> {
    // Tile counts come from the delivered arrays, not the backend's running
    // summary
    let overview = results.overview();
    let tiles = [
        ("🔍 URLs Found", overview.urls_found, Color::Cyan),
        ("🗄 Contents Extracted", overview.contents_extracted, Color::Green),
        ("📷 Screenshots", overview.screenshots_captured, Color::Magenta),
    ];
    let queries: Vec<String> = results.search_queries().to_vec();

    element! {
        View(flex_direction: FlexDirection::Column) {
            View(flex_direction: FlexDirection::Row, gap: 2) {
                #(tiles.into_iter().map(|(label, count, color)| element! {
                    View(
                        border_style: BorderStyle::Round,
                        border_color: color,
                        flex_direction: FlexDirection::Column,
                        padding_left: 1,
                        padding_right: 1,
                    ) {
                        Text(content: label, color: color)
                        Text(content: count.to_string(), color: Color::White, weight: Weight::Bold)
                    }
                }))
            }
            View(flex_direction: FlexDirection::Column, margin_top: 1) {
                Text(content: "Search Queries", weight: Weight::Bold)
                #(if queries.is_empty() {
                    Some(element! {
                        Text(content: "(no queries in the mission plan)", color: Color::DarkGrey)
                    })
                } else {
                    None
                })
                #(queries.into_iter().map(|query| element! {
                    Text(content: format!("• {}", query), color: Color::Grey)
                }))
            }
        }
    }
    .into()
}

fn searches_tab(results: &MissionResults) -> AnyElement<'static> {
    if results.search_results.is_empty() {
        return empty_state("No search results");
    }

    let hits = results.search_results.clone();
    element! {
        View(flex_direction: FlexDirection::Column) {
            #(hits.into_iter().enumerate().map(|(index, hit)| {
                let platform = hit.platform.clone();
                element! {
                    View(
                        key: format!("hit-{}", index),
                        flex_direction: FlexDirection::Column,
                        margin_bottom: 1,
                    ) {
                        Text(content: hit.title.clone(), color: Color::White, weight: Weight::Bold)
                        Text(content: hit.url.clone(), color: Color::Blue)
                        #(platform.map(|platform| element! {
                            Text(content: format!("platform: {}", platform), color: Color::DarkGrey)
                        }))
                        #(if hit.snippet.is_empty() {
                            None
                        } else {
                            Some(element! {
                                Text(content: hit.snippet.clone(), color: Color::Grey)
                            })
                        })
                    }
                }
            }))
        }
    }
    .into()
}

fn content_tab(results: &MissionResults) -> AnyElement<'static> {
    if results.extracted_data.is_empty() {
        return empty_state("No extracted content");
    }

    let contents = results.extracted_data.clone();
    element! {
        View(flex_direction: FlexDirection::Column) {
            #(contents.into_iter().enumerate().map(|(index, content)| {
                let preview = content.preview(CONTENT_PREVIEW_CHARS);
                element! {
                    View(
                        key: format!("content-{}", index),
                        flex_direction: FlexDirection::Column,
                        margin_bottom: 1,
                    ) {
                        Text(content: format!("👁 {}", content.method), color: Color::Green)
                        Text(content: content.url.clone(), color: Color::Blue)
                        View(
                            border_style: BorderStyle::Round,
                            border_color: Color::DarkGrey,
                            padding_left: 1,
                            padding_right: 1,
                        ) {
                            Text(content: preview, color: Color::Grey)
                        }
                    }
                }
            }))
        }
    }
    .into()
}

fn screenshots_tab(results: &MissionResults) -> AnyElement<'static> {
    if results.screenshot_results.is_empty() {
        return empty_state("No screenshots captured");
    }

    let shots = results.screenshot_results.clone();
    element! {
        View(flex_direction: FlexDirection::Column) {
            #(shots.into_iter().enumerate().map(|(index, shot)| {
                let (marker, marker_color) = if shot.success {
                    ("📷 Captured", Color::Green)
                } else {
                    ("📷 Failed", Color::Red)
                };
                let detail = shot
                    .filepath
                    .clone()
                    .map(|filepath| format!("file: {}", filepath))
                    .or_else(|| shot.error.clone().map(|error| format!("error: {}", error)));
                element! {
                    View(
                        key: format!("shot-{}", index),
                        flex_direction: FlexDirection::Column,
                        margin_bottom: 1,
                    ) {
                        Text(content: marker, color: marker_color)
                        Text(content: shot.url.clone(), color: Color::Blue)
                        #(detail.map(|detail| element! {
                            Text(content: detail, color: Color::DarkGrey)
                        }))
                    }
                }
            }))
        }
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabs_cycle_in_order() {
        let mut tab = ResultsTab::Overview;
        for expected in [
            ResultsTab::Searches,
            ResultsTab::Content,
            ResultsTab::Screenshots,
            ResultsTab::Overview,
        ] {
            tab = tab.next();
            assert_eq!(tab, expected);
        }
    }

    #[test]
    fn previous_inverts_next() {
        for tab in ResultsTab::ALL {
            assert_eq!(tab.next().previous(), tab);
        }
    }

    #[test]
    fn default_tab_is_overview() {
        assert_eq!(ResultsTab::default(), ResultsTab::Overview);
        assert_eq!(ResultsPanelProps::default().active_tab, ResultsTab::Overview);
    }
}
