//! Navigation integration tests.
//!
//! Exercise the public API end to end: range selection, URL policy and the
//! assembled display model.

use paginav::{
    build_url, render, select_ranges, try_render, AppError, AppResult, NavOptions, PageGroup,
    PageState, QueryParams, QuerySource, UrlConfig,
};

/// Query source that can never be read.
struct UnreadableQuery;

impl QuerySource for UnreadableQuery {
    fn query_params(&self) -> AppResult<QueryParams> {
        Err(AppError::query_unavailable("request already consumed"))
    }
}

fn groups(nav: &paginav::PageNav) -> Vec<Vec<u32>> {
    nav.pages
        .iter()
        .map(|group| group.iter().map(|link| link.number).collect())
        .collect()
}

// =============================================================================
// Range selection
// =============================================================================

#[test]
fn test_first_of_two_hundred() {
    assert_eq!(
        select_ranges(1, 200, 3, 1),
        vec![PageGroup::new(1, 7), PageGroup::new(200, 200)]
    );
}

#[test]
fn test_seventh_of_twenty() {
    assert_eq!(
        select_ranges(7, 20, 3, 1),
        vec![
            PageGroup::new(1, 1),
            PageGroup::new(4, 10),
            PageGroup::new(20, 20)
        ]
    );
}

// =============================================================================
// URL building
// =============================================================================

#[test]
fn test_path_template() {
    let config = UrlConfig::default().with_base_url("/browse/1/items");
    assert_eq!(
        build_url(3, &config, &QueryParams::new()).unwrap(),
        "/browse/3/items"
    );
}

#[test]
fn test_query_string_keeps_ambient_order() {
    let ambient: QueryParams = [("sort", "asc")].into_iter().collect();
    let config = UrlConfig::default();
    assert_eq!(build_url(1, &config, &ambient).unwrap(), "?sort=asc");
    assert_eq!(build_url(5, &config, &ambient).unwrap(), "?sort=asc&page=5");
    // the caller's map is not modified
    assert_eq!(ambient.encode(), "sort=asc");
}

#[test]
fn test_bare_first_page() {
    assert_eq!(
        build_url(1, &UrlConfig::default(), &QueryParams::new()).unwrap(),
        "."
    );
}

#[test]
fn test_first_page_override() {
    let config = UrlConfig::default()
        .with_base_url("/entries/page/1/")
        .with_first_page_url("/entries/");
    let ambient: QueryParams = [("sort", "asc")].into_iter().collect();
    assert_eq!(build_url(1, &config, &ambient).unwrap(), "/entries/");
    assert_eq!(build_url(2, &config, &ambient).unwrap(), "/entries/page/2/");
}

// =============================================================================
// Display model
// =============================================================================

#[test]
fn test_single_page_renders_nothing() {
    for num_pages in [0, 1] {
        let nav = render(
            &PageState::new(1, num_pages),
            &NavOptions::default(),
            &QueryParams::new(),
        );
        assert_eq!(nav.num_pages, num_pages);
        assert!(nav.pages.is_empty());
        assert!(nav.previous_url.is_none());
        assert!(nav.next_url.is_none());
    }
}

#[test]
fn test_full_model() {
    let ambient = QueryParams::parse("q=rust+books&page=7").unwrap();
    let nav = try_render(&PageState::new(7, 20), &NavOptions::default(), &ambient).unwrap();

    assert_eq!(nav.num_pages, 20);
    assert_eq!(groups(&nav), vec![vec![1], vec![4, 5, 6, 7, 8, 9, 10], vec![20]]);
    assert_eq!(nav.previous_url.as_deref(), Some("?q=rust+books&page=6"));
    assert_eq!(nav.next_url.as_deref(), Some("?q=rust+books&page=8"));

    let first = &nav.pages[0][0];
    assert_eq!(first.url, "?q=rust+books");
    assert!(!first.current);

    let current: Vec<_> = nav.links().filter(|l| l.current).collect();
    assert_eq!(current.len(), 1);
    assert_eq!(current[0].number, 7);
    assert_eq!(current[0].url, "?q=rust+books&page=7");
}

#[test]
fn test_edges_have_one_neighbour_link() {
    let options = NavOptions::default();
    let ambient = QueryParams::new();

    let first = render(&PageState::new(1, 5), &options, &ambient);
    assert!(first.previous_url.is_none());
    assert_eq!(first.next_url.as_deref(), Some("?page=2"));

    let last = render(&PageState::new(5, 5), &options, &ambient);
    assert_eq!(last.previous_url.as_deref(), Some("?page=4"));
    assert!(last.next_url.is_none());
}

#[test]
fn test_unreadable_query_drops_everything() {
    let nav = render(
        &PageState::new(4, 9),
        &NavOptions::default(),
        &UnreadableQuery,
    );
    assert_eq!(nav, paginav::PageNav::default());

    let err = try_render(
        &PageState::new(4, 9),
        &NavOptions::default(),
        &UnreadableQuery,
    )
    .unwrap_err();
    assert!(matches!(err, AppError::QueryUnavailable(_)));
}

#[test]
fn test_path_urls_ignore_unreadable_query() {
    let options = NavOptions {
        adjacent: 1,
        caps: 0,
        url: UrlConfig::default()
            .with_base_url("/list/1")
            .with_first_page_url("/list"),
        ..NavOptions::default()
    };
    let nav = render(&PageState::new(2, 9), &options, &UnreadableQuery);

    // no caps, so the window simply stops at 3
    assert_eq!(nav.to_string(), "1 [2] 3");
    assert_eq!(nav.pages[0][0].url, "/list");
    assert_eq!(nav.previous_url.as_deref(), Some("/list"));
    assert_eq!(nav.next_url.as_deref(), Some("/list/3"));
}

#[test]
fn test_every_page_is_linked_once() {
    let options = NavOptions::default();
    let ambient = QueryParams::new();
    for num_pages in 2..=30 {
        for number in 1..=num_pages {
            let nav = render(&PageState::new(number, num_pages), &options, &ambient);
            let numbers: Vec<u32> = nav.links().map(|l| l.number).collect();

            assert!(numbers.windows(2).all(|w| w[0] < w[1]));
            assert_eq!(numbers.first(), Some(&1));
            assert_eq!(numbers.last(), Some(&num_pages));
            assert_eq!(nav.links().filter(|l| l.current).count(), 1);
        }
    }
}
