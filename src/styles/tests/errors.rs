use crate::styles::Stylesheet;

#[test]
fn parse_fails_when_selector_repeats_id_segment() {
    let css = "theme#onyx#again { --center-channel-bg: #000; }";
    let err = Stylesheet::parse(css).expect_err("expected duplicate id failure");
    assert!(err.to_string().contains("selector already has id"));
}

#[test]
fn parse_rejects_class_and_descendant_selectors() {
    let err = Stylesheet::parse("theme.dark { color: red; }").expect_err("class selector");
    assert!(err.to_string().contains("class selectors are not supported"));

    let err = Stylesheet::parse("screen theme { color: red; }").expect_err("descendant selector");
    assert!(err.to_string().contains("descendant selectors are not supported"));
}

#[test]
fn from_file_reports_missing_path() {
    let err = Stylesheet::from_file("does/not/exist.css").expect_err("missing file");
    assert!(format!("{err:#}").contains("read stylesheet does/not/exist.css"));
}
