use crate::runtime::Color;
use crate::theme::change_opacity;

#[test]
fn change_opacity_clamps_alpha() {
    assert_eq!(change_opacity(Color::White, 1.5).alpha, 1.0);
    assert_eq!(change_opacity(Color::White, -0.2).alpha, 0.0);
    assert_eq!(change_opacity(Color::White, f32::NAN).alpha, 1.0);
}

#[test]
fn over_blends_rgb_channels() {
    let tint = change_opacity(Color::Rgb(0x3f, 0x43, 0x50), 0.25);
    assert_eq!(tint.over(Color::Rgb(255, 255, 255)), Color::Rgb(207, 208, 211));

    let half = change_opacity(Color::Black, 0.5);
    assert_eq!(half.over(Color::White), Color::Rgb(128, 128, 128));
}

#[test]
fn over_falls_back_to_nearest_layer_for_indexed_colors() {
    assert_eq!(
        change_opacity(Color::Indexed(42), 0.8).over(Color::Black),
        Color::Indexed(42)
    );
    assert_eq!(
        change_opacity(Color::Indexed(42), 0.2).over(Color::Black),
        Color::Black
    );
}
