use super::*;

use glimmer_core::Runtime;

const MS: u64 = 1_000_000;

fn approx(actual: f32, expected: f32) -> bool {
    (actual - expected).abs() < 0.01
}

fn animated(runtime: &Runtime, letters: &str) -> DancingText {
    DancingText::new(
        DancingTextConfig::new().letters(letters).animated(true),
        runtime.handle(),
        Platform::Android,
    )
}

#[test]
fn empty_letters_fall_back_to_default_word() {
    let runtime = Runtime::default();
    let text = DancingText::new(DancingTextConfig::new(), runtime.handle(), Platform::Ios);
    assert_eq!(text.letters(), &['C', 'h', 'a', 'i', 'n']);
    assert_eq!(text.cycle_ms(), 1400);
}

#[test]
fn bounce_rises_drops_and_settles() {
    assert_eq!(bounce_offset(-50.0), 0.0);
    assert_eq!(bounce_offset(0.0), 0.0);
    assert!(approx(bounce_offset(100.0), -2.5));
    assert!(approx(bounce_offset(200.0), -5.0));
    assert!(approx(bounce_offset(300.0), 0.0));
    assert!(approx(bounce_offset(400.0), 5.0));
    assert!(approx(bounce_offset(500.0), 2.5));
    assert_eq!(bounce_offset(600.0), 0.0);
    assert_eq!(bounce_offset(900.0), 0.0);
}

#[test]
fn letters_bounce_one_stagger_apart() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    let text = animated(&runtime, "abc");
    assert_eq!(text.cycle_ms(), 1000);

    text.mount();
    assert!(text.is_animating());
    handle.drain_frame_callbacks(0);
    handle.drain_frame_callbacks(300 * MS);

    assert!(approx(text.letter_offset(0), 0.0));
    assert!(approx(text.letter_offset(1), -2.5));
    assert_eq!(text.letter_offset(2), 0.0);

    handle.drain_frame_callbacks(800 * MS);
    assert_eq!(text.letter_offset(0), 0.0);
    assert!(approx(text.letter_offset(2), 5.0));
}

#[test]
fn wave_repeats_after_last_letter_settles() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    let text = animated(&runtime, "ab");

    text.mount();
    handle.drain_frame_callbacks(0);
    handle.drain_frame_callbacks(100 * MS);
    let first = text.letter_offset(0);

    handle.drain_frame_callbacks((800 + 100) * MS);
    assert!(approx(text.letter_offset(0), first));
    assert!(text.is_animating());
}

#[test]
fn static_text_never_schedules_frames() {
    let runtime = Runtime::default();
    let text = DancingText::new(
        DancingTextConfig::new().letters("idle"),
        runtime.handle(),
        Platform::Android,
    );
    text.mount();

    assert!(!text.is_animating());
    assert!(!runtime.needs_frame());
    assert!((0..4).all(|index| text.letter_offset(index) == 0.0));
}

#[test]
fn unmount_stops_the_wave_and_remount_is_ignored() {
    let runtime = Runtime::default();
    let text = animated(&runtime, "go");
    text.mount();
    text.unmount();

    assert!(!text.is_animating());
    assert!(!runtime.needs_frame());

    text.mount();
    assert!(!text.is_animating());
}

#[test]
fn render_lays_out_one_styled_text_per_letter() {
    let runtime = Runtime::default();
    let style = TextStyle {
        font_size: 18.0,
        bold: false,
        color: Color::BLACK,
    };
    let text = DancingText::new(
        DancingTextConfig::new().letters("Hi").text_style(style),
        runtime.handle(),
        Platform::Web,
    );

    let VisualNode::Row { children } = text.render() else {
        panic!("expected a row");
    };
    assert_eq!(
        children,
        vec![
            VisualNode::Text {
                text: "H".into(),
                font_size: 18.0,
                bold: false,
                color: Color::BLACK,
                translate_y: 0.0,
                driver: AnimationDriver::Layout,
            },
            VisualNode::Text {
                text: "i".into(),
                font_size: 18.0,
                bold: false,
                color: Color::BLACK,
                translate_y: 0.0,
                driver: AnimationDriver::Layout,
            },
        ]
    );
}

#[test]
fn default_style_is_bold_green() {
    let style = TextStyle::default();
    assert_eq!(style.font_size, 14.0);
    assert!(style.bold);
    assert_eq!(style.color, Color::from_rgb_u8(0x4c, 0xaf, 0x50));
}
