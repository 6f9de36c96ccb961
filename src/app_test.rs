use super::*;

const MANIFEST: &str = include_str!("../Cargo.toml");
const STYLES: &str = include_str!("../style/main.css");

fn leptos_metadata(key: &str) -> Option<&'static str> {
    MANIFEST
        .lines()
        .skip_while(|line| line.trim() != "[package.metadata.leptos]")
        .filter_map(|line| line.split_once('='))
        .find(|(k, _)| k.trim() == key)
        .map(|(_, v)| v.trim().trim_matches('"'))
}

#[test]
fn stylesheet_href_matches_build_output() {
    let output = leptos_metadata("output-name").unwrap();
    let pkg_dir = leptos_metadata("site-pkg-dir").unwrap();
    assert_eq!(STYLESHEET_HREF, format!("/{pkg_dir}/{output}.css"));
}

#[test]
fn style_file_is_configured_and_styles_views() {
    assert_eq!(leptos_metadata("style-file"), Some("style/main.css"));
    for class in [".nav-bar", ".filter-bar__tab--active", ".listing-card", ".dialog-backdrop", ".cart__item"] {
        assert!(STYLES.contains(class), "missing {class}");
    }
}
