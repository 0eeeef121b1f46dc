use picogl::{
    Button, Circle, Color, FrameBuffer, Hoverable, Rect, Shape, ShapeOptions, Style, Vec2,
};

fn lit(buf: &FrameBuffer, color: Color) -> Vec<(i64, i64)> {
    buf.pixels_with(color).collect()
}

#[test]
fn two_by_two_rect_sets_nine_pixels() {
    let mut buf = FrameBuffer::new(8, 8);

    Rect::new(2., 2., Vec2::ZERO).draw(&mut buf);

    assert_eq!(
        lit(&buf, Color::WHITE),
        [(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2), (2, 0), (2, 1), (2, 2)]
    );
}

#[test]
fn outline_corners_are_drawn_once_in_color() {
    let mut buf = FrameBuffer::new(16, 16);
    let style = Style::outline(Color::RED, 2.);

    Rect::with_options(10., 10., Vec2::new(2., 2.), ShapeOptions::with_style(style))
        .draw(&mut buf);

    let red = lit(&buf, Color::RED);

    assert!(red.contains(&(2, 2)));
    assert!(red.contains(&(12, 12)));
    assert!(!red.contains(&(7, 7)));
    assert!(red.iter().all(|&(r, c)| (2..=12).contains(&r) && (2..=12).contains(&c)));
}

#[test]
fn circle_pixels_sit_within_radius() {
    let mut buf = FrameBuffer::new(40, 40);
    let circle = Circle::new(16., Vec2::new(20., 20.)).with_style(Style::solid(Color::BLUE));

    circle.draw(&mut buf);

    let blue = lit(&buf, Color::BLUE);

    assert!(!blue.is_empty());
    for (r, c) in blue {
        assert!(circle.is_within(Vec2::new(c as f64, r as f64)), "({r}, {c})");
    }
    for (r, c) in [(20, 12), (20, 28), (12, 20), (28, 20), (20, 20)] {
        assert_eq!(buf.pixel(r, c), Some(Color::BLUE), "({r}, {c})");
    }
}

#[test]
fn shapes_clip_at_every_edge() {
    let mut buf = FrameBuffer::new(10, 10);

    Circle::new(8., Vec2::new(0., 0.)).draw(&mut buf);
    Circle::new(8., Vec2::new(10., 10.)).draw(&mut buf);
    Rect::new(30., 2., Vec2::new(-10., 4.)).draw(&mut buf);
    Rect::new(3., 3., Vec2::new(-50., -50.)).draw(&mut buf);

    assert_eq!(buf.as_slice().len(), 100);
    assert_eq!(buf.pixel(0, 0), Some(Color::WHITE));
    assert_eq!(buf.pixel(9, 9), Some(Color::WHITE));
    assert_eq!(buf.pixel(5, 9), Some(Color::WHITE));
}

#[test]
fn button_draws_shape_then_label() {
    let mut buf = FrameBuffer::new(120, 60);
    let rect = Rect::new(100., 40., Vec2::new(10., 10.)).with_style(Style::solid(Color::GRAY));
    let mut button = Button::new(rect, "");

    button.set_label_text("OK").set_label_color(Color::BLACK);
    button.draw(&mut buf);

    assert_eq!(button.label().pos(), Vec2::new(60., 30.));
    assert_eq!(buf.pixel(10, 10), Some(Color::GRAY));

    // The label punches black glyph pixels into the grey body, around its centre.
    let glyphs: Vec<_> = lit(&buf, Color::BLACK)
        .into_iter()
        .filter(|&(r, c)| (10..=50).contains(&r) && (10..=110).contains(&c))
        .collect();

    assert!(!glyphs.is_empty());
    assert!(glyphs.iter().all(|&(r, c)| (20..40).contains(&r) && (45..75).contains(&c)));
}

#[test]
fn follow_chain_keeps_segments_adjacent() {
    let mut head = Circle::new(30., Vec2::new(100., 100.));
    let mut body: Vec<Circle> = (1..6)
        .map(|i| Circle::new(30., Vec2::new(100., 100. + 30. * f64::from(i))))
        .collect();

    head.set_pos(Vec2::new(160., 100.));

    let mut ahead = head.pos();
    for segment in &mut body {
        if segment.pos().dist(ahead) > 30. {
            let diff = ahead - segment.pos();
            segment.move_by(diff - diff.set_mag(30.));
            segment.set_direction((ahead - segment.pos()).normalise());
        }
        ahead = segment.pos();
    }

    let mut prev = head.pos();
    for segment in &body {
        assert!((segment.pos().dist(prev) - 30.).abs() < 1e-9);
        assert!((segment.direction().mag() - 1.).abs() < 1e-9);

        let marker = segment.edge_point(0.);
        assert!((marker.dist(segment.pos()) - 15.).abs() < 1e-9);

        prev = segment.pos();
    }
}
