use bundlemap::{Bundle, BundleBuilder};

fn main() {
    // Bundles nest: a settings bundle inside a session bundle.
    let settings = BundleBuilder::new()
        .put_boolean("dark_mode", true)
        .put_int("font_size", 14)
        .build();

    let mut session = Bundle::new();
    session.put_string("user", "ada");
    session.put_bundle("settings", settings);
    session.put_int_array("window_geometry", vec![0, 0, 1280, 720]);

    // Nested bundles come back as shared handles.
    if let Some(settings) = session.get_bundle("settings") {
        println!("dark mode: {}", settings.borrow().get_boolean("dark_mode"));

        // Mutations through the handle stick.
        settings.borrow_mut().put_int("font_size", 16);
    }
    let font_size = session
        .get_bundle("settings")
        .map(|s| s.borrow().get_int("font_size"))
        .unwrap_or(0);
    println!("font size after tweak: {}", font_size);

    // Clones share array values but not key mappings.
    let restored = session.clone();
    restored
        .get_int_array("window_geometry")
        .expect("geometry was just put")
        .borrow_mut()[3] = 800;

    let original_geometry = session.get_int_array("window_geometry").unwrap();
    println!("both sessions see height {}", original_geometry.borrow()[3]);

    let mut trimmed = restored.clone();
    trimmed.remove("settings");
    println!(
        "trimmed has settings: {}, session has settings: {}",
        trimmed.contains_key("settings"),
        session.contains_key("settings")
    );
}
