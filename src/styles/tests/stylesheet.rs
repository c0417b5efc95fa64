use crate::runtime::Color;
use crate::styles::{StyleQuery, Stylesheet};

#[test]
fn root_properties_apply_to_every_query() {
    let css = r"
        :root { --center-channel-bg: #ffffff; --center-channel-color: #3d3c40; }
        theme { --link-color: #2389d7; }
    ";
    let sheet = Stylesheet::parse(css).expect("parse css");
    assert!(!sheet.is_empty());
    let root = sheet.root();
    assert_eq!(
        root.color("--center-channel-bg"),
        Some(Color::Rgb(255, 255, 255))
    );

    let theme = sheet.query(StyleQuery::element("theme"));
    assert_eq!(theme.color("--link-color"), Some(Color::Rgb(35, 137, 215)));
    assert_eq!(
        theme.color("--center-channel-color"),
        Some(Color::Rgb(61, 60, 64))
    );
}

#[test]
fn id_rules_override_element_rules_regardless_of_order() {
    let css = r"
        theme#onyx { --center-channel-bg: #1f1f1f; }
        theme { --center-channel-bg: #ffffff; --button-bg: #166de0; }
    ";
    let sheet = Stylesheet::parse(css).expect("parse css");
    let onyx = sheet.query(StyleQuery::element("theme").with_id("onyx"));
    assert_eq!(onyx.color("--center-channel-bg"), Some(Color::Rgb(31, 31, 31)));
    assert_eq!(onyx.color("--button-bg"), Some(Color::Rgb(22, 109, 224)));

    let other = sheet.query(StyleQuery::element("theme").with_id("denim"));
    assert_eq!(
        other.color("--center-channel-bg"),
        Some(Color::Rgb(255, 255, 255))
    );
}

#[test]
fn ids_for_lists_declared_ids_once() {
    let css = r"
        theme#denim { --x: 1; }
        theme#onyx { --x: 2; }
        theme#denim, panel#denim { --y: 3; }
    ";
    let sheet = Stylesheet::parse(css).expect("parse css");
    assert_eq!(sheet.ids_for("theme"), vec!["denim".to_string(), "onyx".to_string()]);
    assert_eq!(sheet.ids_for("panel"), vec!["denim".to_string()]);
    assert!(sheet.ids_for("missing").is_empty());
}
