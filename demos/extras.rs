use bundlemap::{Bundle, BundleBuilder};

// A viewer component that only knows the keys it cares about. Missing or
// mistyped entries fall back to sensible defaults instead of erroring.
fn open_document(extras: &Bundle) {
    let document = extras.get_string_or("document", "untitled");
    let page = extras.get_int_or("page", 1);
    let read_only = extras.get_boolean("read_only");

    println!("Opening {} at page {}", document, page);
    if read_only {
        println!("  (read-only)");
    }

    match extras.get_string_list("recent_searches") {
        Some(searches) => {
            println!("  {} recent searches", searches.borrow().len());
        }
        None => println!("  no search history"),
    }
}

fn main() {
    // Assemble the hand-off payload in one expression.
    let extras = BundleBuilder::new()
        .put_string("document", "quarterly.pdf")
        .put_int("page", 4)
        .put_boolean("read_only", true)
        .put_string_list(
            "recent_searches",
            vec!["revenue".to_string(), "forecast".to_string()],
        )
        .build();

    println!("Sending {} extras", extras.len());
    open_document(&extras);

    // A payload missing most keys still opens fine.
    let sparse = BundleBuilder::new().put_string("document", "notes.txt").build();
    open_document(&sparse);

    // Keys can be inspected without knowing the kinds.
    let mut keys: Vec<&str> = extras.keys().collect();
    keys.sort_unstable();
    println!("Keys: {:?}", keys);
}
