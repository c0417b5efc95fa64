use crate::runtime::Color;
use crate::styles::{BoxStyle, Borders, Spacing};

#[test]
fn box_chrome_counts_borders_margin_and_padding() {
    let style = BoxStyle::default()
        .borders(Borders::HORIZONTAL, Color::Gray)
        .margin(Spacing::top(1))
        .padding(Spacing::horizontal(2));
    assert_eq!(style.chrome_rows(), 3);
    assert_eq!(style.chrome_columns(), 4);
    assert_eq!(BoxStyle::default().chrome_rows(), 0);
}

#[test]
fn spacing_helpers_fill_expected_edges() {
    assert_eq!(Spacing::horizontal(1).width(), 2);
    assert_eq!(Spacing::vertical(1).height(), 2);
    assert_eq!(Spacing::left(3).plus(Spacing::top(2)), Spacing {
        top: 2,
        right: 0,
        bottom: 0,
        left: 3,
    });
}
