//! In-memory listing over the fetched post set: filter, sort, paginate.

use super::model::Post;

/// One page of a filtered, recency-sorted post sequence.
///
/// Derived, never stored: recomputed on every filter or page change.
#[derive(Debug, Clone, PartialEq)]
pub struct PageWindow {
    pub items: Vec<Post>,
    /// The page actually served; out-of-range requests clamp into
    /// `[1, total_pages]` instead of erroring.
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    /// Count of posts after filtering, across all pages.
    pub total: usize,
}

/// Filter `posts` by `query`, sort by recency, and slice out one page.
///
/// An empty (or all-whitespace) query keeps every post. A non-empty query
/// keeps posts where it appears, case-insensitively, in the title,
/// description, content, or any category name. Sorting is stable, so posts
/// with equal timestamps keep their fetched order. The input is never
/// mutated.
pub fn paginate(posts: &[Post], query: &str, page: usize, page_size: usize) -> PageWindow {
    let page_size = page_size.max(1);
    let needle = query.trim().to_lowercase();

    let mut filtered: Vec<&Post> = posts
        .iter()
        .filter(|post| needle.is_empty() || matches_query(post, &needle))
        .collect();
    filtered.sort_by(|a, b| b.sort_key().cmp(&a.sort_key()));

    let total = filtered.len();
    let total_pages = total.div_ceil(page_size).max(1);
    let page = page.clamp(1, total_pages);
    let start = (page - 1) * page_size;

    let items = filtered
        .into_iter()
        .skip(start)
        .take(page_size)
        .cloned()
        .collect();

    PageWindow {
        items,
        page,
        page_size,
        total_pages,
        total,
    }
}

fn matches_query(post: &Post, needle: &str) -> bool {
    post.title.to_lowercase().contains(needle)
        || post.description.to_lowercase().contains(needle)
        || post.content.to_lowercase().contains(needle)
        || post
            .categories
            .iter()
            .any(|c| c.name.to_lowercase().contains(needle))
}
