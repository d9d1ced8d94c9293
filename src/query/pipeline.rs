//! Filtering, sorting and pagination over borrowed catalog items.
//!
//! All functions are pure and order-preserving except [`sort_items`], which
//! reorders in place with a stable sort so equal keys keep their filtered
//! order.

use super::state::QueryState;
use super::window::{page_window, PageMarker};
use crate::domain::{CatalogItem, CategoryFilter, SortKey};
use std::num::NonZeroUsize;

/// One computed page plus the metadata the pagination control needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView<'a> {
    /// Items on the requested page, in display order.
    pub items: Vec<&'a CatalogItem>,
    /// Number of items that survived filtering.
    pub total_matches: usize,
    /// `ceil(total_matches / page_size)`; zero when nothing matched.
    pub total_pages: usize,
    /// The page these items belong to.
    pub page: usize,
    /// Page-number markers for the pagination control.
    pub window: Vec<PageMarker>,
}

impl PageView<'_> {
    /// Returns `true` when no item matched the query.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total_pages == 0
    }
}

/// Keeps items accepted by `filter`.
#[must_use]
pub fn filter_by_category<'a>(items: &[&'a CatalogItem], filter: CategoryFilter) -> Vec<&'a CatalogItem> {
    if filter == CategoryFilter::All {
        return items.to_vec();
    }
    items
        .iter()
        .copied()
        .filter(|item| filter.accepts(item.category))
        .collect()
}

/// Keeps items whose lower-cased name contains the lower-cased, trimmed term.
///
/// A blank term (empty or whitespace only) keeps everything.
///
/// # Examples
///
/// ```
/// use memeverse::domain::CatalogItem;
/// use memeverse::query::filter_by_search;
///
/// let doge = CatalogItem::builder("1", "Doge Meme").build();
/// let cat = CatalogItem::builder("2", "Grumpy Cat").build();
/// let items = vec![&doge, &cat];
///
/// assert_eq!(filter_by_search(&items, "doge").len(), 1);
/// assert_eq!(filter_by_search(&items, "   ").len(), 2);
/// ```
#[must_use]
pub fn filter_by_search<'a>(items: &[&'a CatalogItem], term: &str) -> Vec<&'a CatalogItem> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .copied()
        .filter(|item| item.name.to_lowercase().contains(&needle))
        .collect()
}

/// Sorts in place by `key`, descending. `SortKey::All` leaves the order alone.
pub fn sort_items(items: &mut [&CatalogItem], key: SortKey) {
    match key {
        SortKey::All => {}
        SortKey::Likes => items.sort_by(|a, b| b.likes.cmp(&a.likes)),
        SortKey::Comments => items.sort_by(|a, b| b.comments.cmp(&a.comments)),
        SortKey::Date => items.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
    }
}

/// Runs the filter and sort stages, returning every matching item in order.
#[must_use]
pub fn select<'a>(catalog: &'a [CatalogItem], query: &QueryState) -> Vec<&'a CatalogItem> {
    let all: Vec<&CatalogItem> = catalog.iter().collect();
    let by_category = filter_by_category(&all, query.category_filter());
    let mut matched = filter_by_search(&by_category, query.search_term());
    sort_items(&mut matched, query.sort_key());
    matched
}

/// Number of pages needed for `len` items; zero for an empty sequence.
#[must_use]
pub const fn total_pages(len: usize, page_size: NonZeroUsize) -> usize {
    let size = page_size.get();
    (len + size - 1) / size
}

/// Returns the half-open slice `[(page-1)*size, page*size)`, clipped to `items`.
///
/// Pages past the end yield an empty slice; page 0 is treated as page 1.
#[must_use]
pub fn page_slice<T>(items: &[T], page: usize, page_size: NonZeroUsize) -> &[T] {
    let size = page_size.get();
    let start = page.saturating_sub(1).saturating_mul(size).min(items.len());
    let end = start.saturating_add(size).min(items.len());
    &items[start..end]
}

/// Computes the page requested by `query` over `catalog`.
///
/// The page number is used as given; clamping it to `1..=total_pages` is the
/// caller's responsibility.
#[must_use]
pub fn compute_page<'a>(catalog: &'a [CatalogItem], query: &QueryState, page_size: NonZeroUsize) -> PageView<'a> {
    let _span = tracing::debug_span!("compute_page",
        catalog_len = catalog.len(),
        page = query.page(),
        sort_key = ?query.sort_key(),
        category_filter = ?query.category_filter()
    ).entered();

    let matched = select(catalog, query);
    let total_matches = matched.len();
    let pages = total_pages(total_matches, page_size);
    let items = page_slice(&matched, query.page(), page_size).to_vec();

    tracing::trace!(total_matches, total_pages = pages, page_len = items.len(), "page computed");

    PageView {
        items,
        total_matches,
        total_pages: pages,
        page: query.page(),
        window: page_window(query.page(), pages),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;
    use chrono::{Duration, TimeZone, Utc};

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn item(id: u32, name: &str, category: Category, likes: u32, comments: u32) -> CatalogItem {
        CatalogItem::builder(id.to_string(), name)
            .category(category)
            .likes(likes)
            .comments(comments)
            .created_at(Utc.with_ymd_and_hms(2026, 9, 1, 0, 0, 0).unwrap() + Duration::hours(i64::from(id)))
            .build()
    }

    fn ids(items: &[&CatalogItem]) -> Vec<String> {
        items.iter().map(|i| i.id.clone()).collect()
    }

    fn sample() -> Vec<CatalogItem> {
        vec![
            item(1, "Doge Meme", Category::Trending, 10, 5),
            item(2, "Grumpy Cat", Category::Classic, 30, 5),
            item(3, "doge strikes back", Category::Classic, 10, 1),
            item(4, "Success Kid", Category::New, 30, 9),
            item(5, "DOGE", Category::Random, 20, 5),
        ]
    }

    #[test]
    fn category_filter_keeps_order() {
        let catalog = sample();
        let all: Vec<&CatalogItem> = catalog.iter().collect();
        let classic = filter_by_category(&all, CategoryFilter::Only(Category::Classic));
        assert_eq!(ids(&classic), vec!["2", "3"]);
        assert_eq!(filter_by_category(&all, CategoryFilter::All).len(), 5);
    }

    #[test]
    fn search_is_case_insensitive_substring_and_trimmed() {
        let catalog = sample();
        let all: Vec<&CatalogItem> = catalog.iter().collect();
        assert_eq!(ids(&filter_by_search(&all, "doge")), vec!["1", "3", "5"]);
        assert_eq!(ids(&filter_by_search(&all, "  DoGe  ")), vec!["1", "3", "5"]);
        assert_eq!(filter_by_search(&all, "  ").len(), 5);
        assert!(filter_by_search(&all, "nyan").is_empty());
    }

    #[test]
    fn filters_are_idempotent() {
        let catalog = sample();
        let all: Vec<&CatalogItem> = catalog.iter().collect();
        let once = filter_by_search(&filter_by_category(&all, CategoryFilter::Only(Category::Classic)), "doge");
        let twice = filter_by_search(&filter_by_category(&once, CategoryFilter::Only(Category::Classic)), "doge");
        assert_eq!(once, twice);
    }

    #[test]
    fn likes_sort_is_descending_and_stable() {
        let catalog = sample();
        let mut items: Vec<&CatalogItem> = catalog.iter().collect();
        sort_items(&mut items, SortKey::Likes);
        assert_eq!(ids(&items), vec!["2", "4", "5", "1", "3"]);
        assert!(items.windows(2).all(|w| w[0].likes >= w[1].likes));
    }

    #[test]
    fn comments_sort_keeps_ties_in_input_order() {
        let catalog = sample();
        let mut items: Vec<&CatalogItem> = catalog.iter().collect();
        sort_items(&mut items, SortKey::Comments);
        assert_eq!(ids(&items), vec!["4", "1", "2", "5", "3"]);
    }

    #[test]
    fn date_sort_is_newest_first() {
        let catalog = sample();
        let mut items: Vec<&CatalogItem> = catalog.iter().collect();
        sort_items(&mut items, SortKey::Date);
        assert_eq!(ids(&items), vec!["5", "4", "3", "2", "1"]);
        assert!(items.windows(2).all(|w| w[0].created_at >= w[1].created_at));
    }

    #[test]
    fn sort_all_is_identity() {
        let catalog = sample();
        let mut items: Vec<&CatalogItem> = catalog.iter().collect();
        sort_items(&mut items, SortKey::All);
        assert_eq!(ids(&items), vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn total_pages_rounds_up_and_is_zero_when_empty() {
        assert_eq!(total_pages(0, size(12)), 0);
        assert_eq!(total_pages(1, size(12)), 1);
        assert_eq!(total_pages(12, size(12)), 1);
        assert_eq!(total_pages(13, size(12)), 2);
    }

    #[test]
    fn page_slice_bounds() {
        let data: Vec<u32> = (0..25).collect();
        assert_eq!(page_slice(&data, 1, size(12)), &data[0..12]);
        assert_eq!(page_slice(&data, 3, size(12)), &data[24..25]);
        assert!(page_slice(&data, 4, size(12)).is_empty());
        assert_eq!(page_slice(&data, 0, size(12)), &data[0..12]);
    }

    #[test]
    fn every_page_is_full_except_the_last() {
        let catalog: Vec<CatalogItem> = (0..40).map(|i| item(i, "m", Category::New, i, 0)).collect();
        let mut query = QueryState::default();
        let view = compute_page(&catalog, &query, size(12));
        for page in 1..=view.total_pages {
            query.set_page(page);
            let len = compute_page(&catalog, &query, size(12)).items.len();
            if page < view.total_pages {
                assert_eq!(len, 12);
            } else {
                assert!(len <= 12 && len > 0);
            }
        }
    }

    #[test]
    fn twenty_five_items_sorted_by_likes() {
        let catalog: Vec<CatalogItem> = (0..25)
            .map(|i| item(i, &format!("meme {i}"), Category::ALL[i as usize % 4], (i * 37) % 101, 0))
            .collect();
        let mut query = QueryState::default();
        query.set_sort_key(SortKey::Likes);

        let first = compute_page(&catalog, &query, size(12));
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.items.len(), 12);

        let mut expected: Vec<u32> = catalog.iter().map(|i| i.likes).collect();
        expected.sort_unstable_by(|a, b| b.cmp(a));
        let got: Vec<u32> = first.items.iter().map(|i| i.likes).collect();
        assert_eq!(got, expected[..12].to_vec());

        query.set_page(3);
        let last = compute_page(&catalog, &query, size(12));
        assert_eq!(last.items.len(), 1);
        assert_eq!(last.items[0].likes, expected[24]);
    }

    #[test]
    fn empty_result_has_no_pages() {
        let catalog = sample();
        let mut query = QueryState::default();
        query.set_search_term("nothing matches this");
        let view = compute_page(&catalog, &query, size(12));
        assert!(view.is_empty());
        assert_eq!(view.total_pages, 0);
        assert!(view.items.is_empty());
        assert!(view.window.is_empty());
    }

    #[test]
    fn changing_only_the_page_keeps_the_selection() {
        let catalog: Vec<CatalogItem> = (0..30).map(|i| item(i, "m", Category::New, i % 7, 0)).collect();
        let mut query = QueryState::default();
        query.set_sort_key(SortKey::Likes);
        let before = select(&catalog, &query);
        query.set_page(2);
        assert_eq!(select(&catalog, &query), before);
    }
}
