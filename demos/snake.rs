use std::f64::consts::FRAC_PI_2;

use picogl::{
    Circle, Color, Event, FrameBuffer, Key, MainLoop, MouseInput, Shape, ShapeOptions, Style,
    Vec2, Window, WindowConfig,
};
use tracing_subscriber::EnvFilter;

const NUM_SEGMENTS: usize = 30;
const HEAD_SIZE: f64 = 30.;
const BODY_SCALE: f64 = 0.97;
const MARKER_SIZE: f64 = 4.;
const SPEED: f64 = 300.;

struct Snake {
    head: Circle,
    body: Vec<Circle>,
    velocity: Vec2,
}

impl Snake {
    fn new(head_pos: Vec2) -> Self {
        let head = Circle::with_options(
            HEAD_SIZE,
            head_pos,
            ShapeOptions::with_style(Style::solid(Color::WHITE)),
        );

        let body = (0..NUM_SEGMENTS - 1)
            .map(|i| {
                let diameter = HEAD_SIZE * BODY_SCALE.powi(i as i32);
                let pos = head_pos + Vec2::new(0., HEAD_SIZE * i as f64);

                Circle::new(diameter, pos).with_style(Style::outline(Color::WHITE, 4.))
            })
            .collect();

        let mut snake = Self {
            head,
            body,
            velocity: Vec2::ZERO,
        };
        snake.update_body();
        snake
    }

    fn update(&mut self, dt: f64, bounds: Vec2) {
        let radius = HEAD_SIZE / 2.;
        let next = self.head.pos() + self.velocity * dt;
        let next = Vec2::new(
            next.x.clamp(radius, bounds.x - radius - 1.),
            next.y.clamp(radius, bounds.y - radius - 1.),
        );

        self.head.set_pos(next);
        if let Some(direction) = self.velocity.checked_normalise() {
            self.head.set_direction(direction);
        }

        self.update_body();
    }

    /// Pulls every segment to within one diameter of the segment ahead of it.
    fn update_body(&mut self) {
        let mut ahead = (self.head.pos(), self.head.width());

        for node in &mut self.body {
            let (ahead_pos, ahead_width) = ahead;

            if node.pos().dist(ahead_pos) > ahead_width {
                let diff = ahead_pos - node.pos();
                node.move_by(diff - diff.set_mag(ahead_width));
                node.set_direction((ahead_pos - node.pos()).normalise());
            }

            ahead = (node.pos(), node.width());
        }
    }

    fn draw(&self, buf: &mut FrameBuffer) {
        let marker_style = ShapeOptions::with_style(Style::solid(Color::RED));

        self.head.draw(buf);

        for segment in &self.body {
            segment.draw(buf);

            for theta in [FRAC_PI_2, 3. * FRAC_PI_2] {
                Circle::with_options(MARKER_SIZE, segment.edge_point(theta), marker_style)
                    .draw(buf);
            }
        }
    }
}

struct State {
    snake: Snake,
}

impl MainLoop for State {
    fn handle_event(&mut self, win: &mut Window, event: &Event) {
        if matches!(event, Event::KeyPress(Key::ESCAPE)) {
            win.close();
        }
    }

    fn update(&mut self, win: &mut Window, dt: f32, _time: f64) {
        let target = win.mouse_location() - self.snake.head.pos();

        self.snake.velocity = if target.mag() > 2. {
            target.set_mag(SPEED)
        } else {
            Vec2::ZERO
        };

        let bounds = Vec2::new(win.buffer().widthf(), win.buffer().heightf());
        self.snake.update(f64::from(dt), bounds);
    }

    fn render(&mut self, buf: &mut FrameBuffer) {
        buf.clear();
        self.snake.draw(buf);
    }
}

fn main() -> picogl::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut win = Window::new(WindowConfig {
        width: 1024,
        height: 768,
        title: String::from("Snake"),
        ..WindowConfig::default()
    })?;
    let mut state = State {
        snake: Snake::new(Vec2::new(512., 200.)),
    };

    win.run(&mut state)
}
