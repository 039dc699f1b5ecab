use super::*;

#[test]
fn records_first_layout_only() {
    let style = ImageStyle::new().width_percent(100.0);
    let mut measurer = LayoutMeasurer::new();
    assert_eq!(measurer.measured(), Size::ZERO);

    assert!(!measurer.on_layout(&style, Size::ZERO));
    assert!(measurer.on_layout(&style, Size::new(320.0, 180.0)));
    assert!(!measurer.on_layout(&style, Size::new(10.0, 10.0)));
    assert_eq!(measurer.measured(), Size::new(320.0, 180.0));
}

#[test]
fn explicit_size_skips_measurement() {
    let style = ImageStyle::new().size(100.0, 50.0);
    let mut measurer = LayoutMeasurer::new();
    assert!(!measurer.on_layout(&style, Size::new(300.0, 300.0)));

    let geometry = measurer.resolve(&style);
    assert_eq!(geometry.width, Some(100.0));
    assert_eq!(geometry.height, Some(50.0));
}

#[test]
fn explicit_axis_wins_over_measured_axis() {
    let style = ImageStyle::new().height(90.0);
    let mut measurer = LayoutMeasurer::new();
    assert!(measurer.on_layout(&style, Size::new(240.0, 10.0)));

    let geometry = measurer.resolve(&style);
    assert_eq!(geometry.width, Some(240.0));
    assert_eq!(geometry.height, Some(90.0));
}

#[test]
fn unmeasured_and_undeclared_axes_stay_unknown() {
    let geometry = LayoutMeasurer::new().resolve(&ImageStyle::new().corner_radius(4.0));
    assert_eq!(geometry.width, None);
    assert_eq!(geometry.height, None);
    assert_eq!(geometry.corner_radius, 4.0);
}

#[test]
fn zero_width_report_does_not_lock_the_width() {
    let style = ImageStyle::new();
    let mut measurer = LayoutMeasurer::new();

    assert!(measurer.on_layout(&style, Size::new(0.0, 120.0)));
    assert_eq!(measurer.resolve(&style).width, None);

    assert!(measurer.on_layout(&style, Size::new(300.0, 80.0)));
    assert_eq!(measurer.measured(), Size::new(300.0, 120.0));
    let geometry = measurer.resolve(&style);
    assert_eq!(geometry.width, Some(300.0));
    assert_eq!(geometry.height, Some(120.0));
}
