use std::collections::HashMap;

use spanlcli::spotify::paging::drain_pages;
use spanlcli::types::Page;

// Helper function to create one page of a scripted listing
fn page(items: &[u32], next: Option<&str>) -> Page<u32> {
    Page {
        items: items.to_vec(),
        next: next.map(str::to_string),
        total: None,
    }
}

// Builds a fetch closure over a scripted url -> page outcome map
fn scripted(
    pages: HashMap<String, Result<Page<u32>, String>>,
) -> impl FnMut(String) -> std::future::Ready<Result<Page<u32>, String>> {
    move |url: String| {
        let outcome = pages
            .get(&url)
            .cloned()
            .unwrap_or_else(|| Err(format!("unscripted url: {}", url)));
        std::future::ready(outcome)
    }
}

#[tokio::test]
async fn test_drain_pages_follows_next_links_in_order() {
    let mut pages = HashMap::new();
    pages.insert("p1".to_string(), Ok(page(&[1, 2], Some("p2"))));
    pages.insert("p2".to_string(), Ok(page(&[3], Some("p3"))));
    pages.insert("p3".to_string(), Ok(page(&[4, 5], None)));

    let items = drain_pages("p1", scripted(pages)).await.unwrap();

    // Flattened in page and item order, stopping at the page without next
    assert_eq!(items, vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn test_drain_pages_partial_success_on_failing_continuation() {
    let mut pages = HashMap::new();
    pages.insert("p1".to_string(), Ok(page(&[1, 2], Some("p2"))));
    pages.insert("p2".to_string(), Ok(page(&[3, 4], Some("p3"))));
    pages.insert("p3".to_string(), Err("bad gateway".to_string()));
    pages.insert("p4".to_string(), Ok(page(&[7, 8], Some("p5"))));
    pages.insert("p5".to_string(), Ok(page(&[9], None)));

    let items = drain_pages("p1", scripted(pages)).await.unwrap();

    // Page 3 of 5 failing keeps pages 1-2 and is not an error; the pages
    // behind the broken link are not reachable and not retried
    assert_eq!(items, vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn test_drain_pages_first_page_failure_is_an_error() {
    let mut pages = HashMap::new();
    pages.insert("p1".to_string(), Err("unauthorized".to_string()));

    let result = drain_pages("p1", scripted(pages)).await;

    assert_eq!(result, Err("unauthorized".to_string()));
}

#[tokio::test]
async fn test_drain_pages_single_page_listing() {
    let mut pages = HashMap::new();
    pages.insert("p1".to_string(), Ok(page(&[42], None)));

    let items = drain_pages("p1", scripted(pages)).await.unwrap();
    assert_eq!(items, vec![42]);

    let mut pages = HashMap::new();
    pages.insert("p1".to_string(), Ok(page(&[], None)));

    let items = drain_pages("p1", scripted(pages)).await.unwrap();
    assert!(items.is_empty());
}
