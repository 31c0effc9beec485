//! Live smoke test against the real Wildberries search endpoint.
//!
//! Run with:
//! ```sh
//! cargo test --test smoke_test -- --ignored --nocapture
//! ```

use wb_search::{PageOutcome, SearchFilter, WbSearch};

#[test]
#[ignore]
fn live_first_page_maps_cleanly() {
    let search = WbSearch::builder().max_pages(1).build().unwrap();
    let filter = SearchFilter::new("телефон", 1000, 50000).unwrap();

    match search.fetcher().fetch_page(1, &filter) {
        PageOutcome::Products(products) => {
            eprintln!("page 1: {} products", products.len());
            let records = wb_search::mapper::map_products(&products);
            assert_eq!(records.len(), products.len());
            assert!(records.iter().all(|r| r.link.ends_with("/detail.aspx")));
        }
        PageOutcome::Empty => eprintln!("page 1 was empty"),
        PageOutcome::Failed(e) => eprintln!("page 1 failed: {e}"),
    }
}

#[test]
#[ignore]
fn live_run_exports_workbook() {
    let dir = tempfile::tempdir().unwrap();
    let search = WbSearch::builder()
        .max_pages(2)
        .output_dir(dir.path())
        .build()
        .unwrap();
    let filter = SearchFilter::new("phone", 1000, 5000).unwrap();

    let outcome = search.run(&filter).unwrap();
    eprintln!("{outcome:?}");
}
