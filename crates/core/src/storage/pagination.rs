//! The paginated crawl loop shared by every upstream resource.
//!
//! The loop is written against a page-fetching closure so it can be driven by
//! the HTTP client in production and by plain vectors in tests.

use std::future::Future;

use serde::{Deserialize, Serialize};

use super::{RepositoryError, Result};

/// Pagination block returned with every upstream page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub page: u64,
    pub total: u64,
    pub number_of_pages: u64,
    pub from: u64,
    pub to: u64,
    pub per_page: u64,
}

/// One page of a resource collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub meta: PaginationMeta,
}

/// Fetches every page of a collection and concatenates the items.
///
/// Pages are requested one after another starting at page 1. The loop stops
/// once the next page number exceeds the `number_of_pages` reported by the
/// page just read, so a server that shrinks its page count mid-crawl still
/// terminates.
///
/// A page with no items means the resource does not exist and fails with
/// [`RepositoryError::NotFound`]. Any error from `fetch_page` aborts the crawl
/// unchanged.
pub async fn crawl_pages<T, F, Fut>(resource: &'static str, mut fetch_page: F) -> Result<Vec<T>>
where
    F: FnMut(u64) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    let mut items = Vec::new();
    let mut page = 1;

    loop {
        let current = fetch_page(page).await?;
        if current.items.is_empty() {
            return Err(RepositoryError::not_found(
                resource,
                format!("page {} returned no items", page),
            ));
        }

        let number_of_pages = current.meta.number_of_pages;
        items.extend(current.items);
        page += 1;

        if page > number_of_pages {
            break;
        }
    }

    Ok(items)
}
