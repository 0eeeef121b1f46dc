use std::f64::consts::TAU;

use picogl::{
    Circle, Color, Event, FrameBuffer, Key, MainLoop, Rect, Shape, ShapeOptions, Style, Text,
    Vec2, Window, WindowConfig,
};
use tracing_subscriber::EnvFilter;

struct State {
    time: f64,
    paused: bool,
    orbit: Circle,
    frame: Rect,
    caption: Text,
}

impl MainLoop for State {
    fn handle_event(&mut self, win: &mut Window, event: &Event) {
        match event {
            Event::KeyPress(Key::ESCAPE) => win.close(),
            Event::KeyPress(Key::SPACE) => self.paused = !self.paused,
            _ => (),
        }
    }

    fn update(&mut self, _win: &mut Window, dt: f32, _time: f64) {
        if self.paused {
            return;
        }

        self.time += f64::from(dt);
        self.orbit.set_direction(Vec2::UP.rotate(-self.time % TAU));
        self.caption.set_text(format!("t = {:.1}s", self.time));
    }

    fn render(&mut self, buf: &mut FrameBuffer) {
        buf.clear();

        self.frame.draw(buf);
        self.orbit.draw(buf);

        let marker = self.orbit.edge_point(0.);
        Circle::with_options(12., marker, ShapeOptions::with_style(Style::solid(Color::RED)))
            .draw(buf);

        self.caption.draw(buf);
    }
}

fn main() -> picogl::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut win = Window::new(WindowConfig {
        width: 400,
        height: 400,
        title: String::from("Space to pause"),
        update_rate: 30,
        ..WindowConfig::default()
    })?;
    let mut state = State {
        time: 0.,
        paused: false,
        orbit: Circle::new(200., Vec2::new(200., 200.)).with_style(Style::outline(Color::GREEN, 3.)),
        frame: Rect::new(380., 380., Vec2::new(10., 10.)).with_style(Style::outline(Color::GRAY, 2.)),
        caption: Text::new("", Vec2::new(200., 370.), ""),
    };

    win.run(&mut state)
}
