use std::cell::Cell;
use std::rc::Rc;

use picogl::{
    Behaviour, Button, Circle, Color, Event, FrameBuffer, Key, MainLoop, MouseState, Rect,
    Style, Vec2, Window, WindowConfig,
};
use tracing_subscriber::EnvFilter;

const BEHAVIOURS: [(Behaviour, &str); 6] = [
    (Behaviour::OnAll, "all"),
    (Behaviour::OnPress, "press"),
    (Behaviour::OnRelease, "release"),
    (Behaviour::OnPressAndRelease, "press+release"),
    (Behaviour::OnHold, "hold"),
    (Behaviour::OnHover, "hover"),
];

struct Counter {
    name: &'static str,
    hits: Rc<Cell<u64>>,
}

struct State {
    rects: Vec<(Button<Rect>, Counter)>,
    dot: Button<Circle>,
    dot_hits: Rc<Cell<u64>>,
}

impl State {
    fn new() -> Self {
        let rects = BEHAVIOURS
            .iter()
            .enumerate()
            .map(|(i, &(behaviour, name))| {
                let hits = Rc::new(Cell::new(0));
                let counter = Rc::clone(&hits);
                let pos = Vec2::new(40., 40. + 70. * i as f64);
                let rect = Rect::new(260., 50., pos).with_style(Style::solid(Color::GRAY));
                let mut button = Button::new(rect, "");

                button
                    .set_behaviour(behaviour)
                    .set_callback(move |_| counter.set(counter.get() + 1))
                    .set_label_color(Color::BLACK)
                    .set_label_text(name);

                (button, Counter { name, hits })
            })
            .collect();

        let dot_hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&dot_hits);
        let circle = Circle::new(120., Vec2::new(480., 200.))
            .with_style(Style::outline(Color::YELLOW, 6.));
        let mut dot = Button::new(circle, "");

        dot.set_behaviour(Behaviour::OnPress)
            .set_trigger(MouseState::RightClick)
            .set_callback(move |_| counter.set(counter.get() + 1))
            .set_label_size(24.)
            .set_label_text("right-click");

        Self {
            rects,
            dot,
            dot_hits,
        }
    }
}

impl MainLoop for State {
    fn handle_event(&mut self, win: &mut Window, event: &Event) {
        if matches!(event, Event::KeyPress(Key::ESCAPE)) {
            win.close();
        }
    }

    fn update(&mut self, win: &mut Window, _dt: f32, _time: f64) {
        for (button, counter) in &mut self.rects {
            button.update(&*win);
            button.set_label_text(format!("{}: {}", counter.name, counter.hits.get()));
        }

        self.dot.update(&*win);
        self.dot
            .set_label_text(format!("right-click: {}", self.dot_hits.get()));
    }

    fn render(&mut self, buf: &mut FrameBuffer) {
        buf.clear();

        for (button, _) in &mut self.rects {
            button.draw(buf);
        }

        self.dot.draw(buf);
    }
}

fn main() -> picogl::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut win = Window::new(WindowConfig {
        width: 640,
        height: 480,
        title: String::from("Buttons"),
        ..WindowConfig::default()
    })?;
    let mut state = State::new();

    win.run(&mut state)
}
