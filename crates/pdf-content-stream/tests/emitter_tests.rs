use pdf_content_stream::{ContentStream, TextParams};
use pdf_graphics::PathFillType;
use pdf_graphics::color::Color;
use pdf_graphics::transform::Transform;

fn text(cs: &ContentStream) -> &str {
    core::str::from_utf8(cs.bytes()).unwrap()
}

fn operator_tokens(cs: &ContentStream) -> Vec<String> {
    text(cs)
        .split_whitespace()
        .filter(|t| t.parse::<f32>().is_err() && !t.starts_with('/') && !t.starts_with('['))
        .map(str::to_string)
        .collect()
}

#[test]
fn filled_and_clipped_figure_emits_in_call_order() {
    let mut cs = ContentStream::new();
    cs.save_context();
    cs.draw_rect(0.0, 0.0, 100.0, 100.0).unwrap();
    cs.clip_path(PathFillType::Winding, true);
    cs.set_fill_color(Color::from_rgb(1.0, 0.0, 0.0)).unwrap();
    cs.draw_circle(50.0, 50.0, 40.0).unwrap();
    cs.fill_path(PathFillType::Winding);
    cs.restore_context();

    assert_eq!(
        operator_tokens(&cs),
        ["q", "re", "W", "n", "rg", "m", "c", "c", "c", "c", "f", "Q"]
    );
}

#[test]
fn identical_inputs_produce_identical_bytes() {
    let draw = || {
        let mut cs = ContentStream::new();
        cs.set_line_width(2.0).unwrap();
        cs.draw_rounded_rect(5.0, 5.0, 50.0, 20.0, 4.0, 4.0).unwrap();
        cs.stroke_path(false);
        cs.into_bytes()
    };
    assert_eq!(draw(), draw());
}

#[test]
fn every_emitted_number_parses_back() {
    let mut cs = ContentStream::new();
    cs.set_transform(&Transform::from_row(0.1234, -0.5, 3.25, 1e-4, 1000.5, -0.0))
        .unwrap();
    cs.move_to(1.0 / 3.0, 2.0 / 7.0).unwrap();
    cs.set_dash_pattern(&[0.75, 1.5], 0.25).unwrap();

    for token in text(&cs)
        .split_whitespace()
        .filter(|t| t.chars().next().is_some_and(|c| c.is_ascii_digit() || c == '-' || c == '['))
    {
        let token = token.trim_start_matches('[').trim_end_matches(']');
        if token.is_empty() {
            continue;
        }
        assert!(
            token.parse::<f32>().is_ok(),
            "token {token:?} should be a number"
        );
    }
}

#[test]
fn nested_save_restore_tracks_matrices() {
    let mut cs = ContentStream::new();
    cs.set_transform(&Transform::from_scale(2.0, 2.0)).unwrap();
    cs.save_context();
    cs.set_transform(&Transform::from_translate(5.0, 5.0)).unwrap();
    cs.save_context();
    cs.set_transform(&Transform::from_rotate(1.0)).unwrap();
    cs.restore_context();
    cs.restore_context();

    // Back to the outermost transform.
    assert_eq!(cs.matrix().transform_point(1.0, 0.0), (2.0, 0.0));
    assert_eq!(cs.saved_context_count(), 0);
}

#[test]
fn text_block_combines_position_font_and_showing() {
    let mut cs = ContentStream::new();
    cs.begin_text();
    cs.move_text_position(72.0, 720.0).unwrap();
    cs.set_font("F2", 14.0, &TextParams::default()).unwrap();
    cs.show_text(b"<00410042>");
    cs.end_text();

    assert_eq!(
        text(&cs),
        "BT\n72 720 Td\n/F2 14 Tf\n[<00410042>] TJ\nET\n"
    );
}

#[test]
fn shape_and_arc_share_the_path_state() {
    let mut cs = ContentStream::new();
    cs.draw_shape("M 0 0 L 10 0").unwrap();
    cs.bezier_arc(10.0, 0.0, 5.0, 5.0, 20.0, 0.0, false, true, 0.0)
        .unwrap();
    cs.stroke_path(false);

    let tokens = operator_tokens(&cs);
    assert_eq!(tokens.first().map(String::as_str), Some("m"));
    assert_eq!(tokens.last().map(String::as_str), Some("S"));
    assert!(tokens.contains(&"c".to_string()));
}
