use std::collections::HashMap;
use std::ffi::{c_int, CStr, CString};
use std::mem::{size_of, MaybeUninit};
use std::ptr;

use log::{debug, info};
#[allow(clippy::wildcard_imports)]
use sdl2_sys::*;

use crate::error::{Error, Result};
use crate::framebuffer::FrameBuffer;
use crate::input::{MouseInput, MouseState};
use crate::key::Key;
use crate::vec::Vec2;

/// Host window settings.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    /// Fixed updates per second.
    pub update_rate: i16,
    pub max_fps: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: String::from("picogl"),
            update_rate: 60,
            max_fps: 500.,
        }
    }
}

/// An SDL window presenting a [`FrameBuffer`] and supplying mouse and
/// keyboard input.
pub struct Window {
    // Dropped in declaration order: texture, renderer, window, then SDL itself.
    texture: Owned<SDL_Texture>,
    renderer: Owned<SDL_Renderer>,
    handle: Owned<SDL_Window>,
    _sdl: SdlContext,
    title: String,
    buffer: FrameBuffer,
    running: bool,
    dt: f32,
    max_fps: f64,
    fps_buf: FpsCounter,
    key_pressed: HashMap<Key, bool>,
}

#[derive(Debug)]
pub enum Event {
    KeyPress(Key),
    KeyRelease(Key),
    MouseMove(i32, i32),
}

/// Per-frame hooks driven by [`Window::run`].
pub trait MainLoop {
    fn handle_event(&mut self, win: &mut Window, event: &Event);
    fn update(&mut self, win: &mut Window, dt: f32, time: f64);
    fn render(&mut self, buf: &mut FrameBuffer);
}

trait CheckErr: Sized {
    fn check_err(self, action: &'static str) -> Result<Self>;
}

/// Keeps SDL initialised until dropped.
struct SdlContext;

/// An SDL object released through `destroy` when dropped.
struct Owned<T> {
    ptr: *mut T,
    destroy: unsafe extern "C" fn(*mut T),
}

struct FpsCounter {
    measurements: Vec<f64>,
    idx: usize,
    sum: f64,
}

const LEFT_MASK: u32 = 1 << 0;
const MIDDLE_MASK: u32 = 1 << 1;
const RIGHT_MASK: u32 = 1 << 2;

impl Window {
    pub fn new(config: WindowConfig) -> Result<Self> {
        let sdl = init_library()?;

        let w_int = config.width as c_int;
        let h_int = config.height as c_int;
        let handle = create_window(w_int, h_int, &config.title)?;
        let renderer = create_renderer(&handle)?;
        let texture = create_texture(&renderer, w_int, h_int)?;

        info!(
            "opened {}x{} window \"{}\"",
            config.width, config.height, config.title
        );

        Ok(Self {
            texture,
            renderer,
            handle,
            _sdl: sdl,
            buffer: FrameBuffer::new(config.width, config.height),
            title: config.title,
            running: true,
            dt: 1. / f32::from(config.update_rate),
            max_fps: config.max_fps,
            fps_buf: FpsCounter::new(32),
            key_pressed: HashMap::with_capacity(240),
        })
    }

    fn poll_events(&mut self, state: &mut impl MainLoop) {
        let mut event_ptr = MaybeUninit::<SDL_Event>::uninit();

        loop {
            let event = unsafe {
                if SDL_PollEvent(event_ptr.as_mut_ptr()) == 0 {
                    break;
                }

                event_ptr.assume_init()
            };

            let type_ = unsafe { event.type_ };

            if type_ == SDL_EventType::SDL_KEYDOWN as u32 {
                let key = Key(unsafe { event.key.keysym.sym });
                self.key_pressed.insert(key, true);
                state.handle_event(self, &Event::KeyPress(key));
            } else if type_ == SDL_EventType::SDL_KEYUP as u32 {
                let key = Key(unsafe { event.key.keysym.sym });
                self.key_pressed.insert(key, false);
                state.handle_event(self, &Event::KeyRelease(key));
            } else if type_ == SDL_EventType::SDL_MOUSEMOTION as u32 {
                let (dx, dy) = unsafe { (event.motion.xrel, event.motion.yrel) };
                state.handle_event(self, &Event::MouseMove(dx, dy));
            } else if type_ == SDL_EventType::SDL_QUIT as u32 {
                self.running = false;
            }
        }
    }

    fn show_fps(&mut self, real_time: f64) {
        let elapsed = current_time_seconds() - real_time;
        let Some(average) = self.fps_buf.record_frame(elapsed) else {
            return;
        };

        if self.fps_buf.idx == 0 {
            debug!(
                "{:.1} FPS over the last {} frames",
                average,
                self.fps_buf.measurements.len()
            );
        }

        self.set_window_title(&format!("{} FPS {:5.3}", self.title, average));
    }

    /// Runs fixed-timestep updates and one render per frame until the window
    /// is closed.
    pub fn run(&mut self, state: &mut impl MainLoop) -> Result<()> {
        let mut current_time = current_time_seconds();

        while self.running {
            let real_time = current_time_seconds();

            while current_time < real_time {
                current_time += f64::from(self.dt);

                self.poll_events(state);
                state.update(self, self.dt, current_time);
            }

            // Can be cleared by any of the callbacks above
            if !self.running {
                break;
            }

            state.render(&mut self.buffer);
            self.present()?;

            limit_fps(self.max_fps, real_time);
            self.show_fps(real_time);
        }

        debug!("main loop finished");

        Ok(())
    }

    fn present(&self) -> Result<()> {
        let pitch = (self.buffer.width() as usize * size_of::<u32>()) as c_int;

        unsafe {
            SDL_UpdateTexture(
                self.texture.as_ptr(),
                ptr::null(),
                self.buffer.as_slice().as_ptr().cast(),
                pitch,
            )
            .check_err("update texture")?;
            SDL_RenderCopy(
                self.renderer.as_ptr(),
                self.texture.as_ptr(),
                ptr::null(),
                ptr::null(),
            )
            .check_err("copy texture")?;
            SDL_RenderPresent(self.renderer.as_ptr());
        }

        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    /// The frame presented after each render.
    pub fn buffer(&self) -> &FrameBuffer {
        &self.buffer
    }

    pub fn close(&mut self) {
        self.running = false;
    }

    pub fn set_window_title(&mut self, title: &str) {
        // Titles with interior NULs are not worth failing a frame over.
        let Ok(cstr) = CString::new(title) else {
            return;
        };

        unsafe {
            SDL_SetWindowTitle(self.handle.as_ptr(), cstr.as_ptr());
        }
    }

    pub fn key_pressed(&self, key: Key) -> bool {
        *self.key_pressed.get(&key).unwrap_or(&false)
    }
}

impl MouseInput for Window {
    fn mouse_button_state(&self) -> MouseState {
        let mask = unsafe { SDL_GetMouseState(ptr::null_mut(), ptr::null_mut()) };

        mouse_state_from_mask(mask)
    }

    fn mouse_location(&self) -> Vec2 {
        let mut x = 0;
        let mut y = 0;

        unsafe {
            SDL_GetMouseState(&mut x, &mut y);
        }

        Vec2::new(f64::from(x), f64::from(y))
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        info!("closed window \"{}\"", self.title);
    }
}

impl Drop for SdlContext {
    fn drop(&mut self) {
        unsafe { SDL_Quit() };
    }
}

impl<T> Owned<T> {
    fn new(ptr: *mut T, destroy: unsafe extern "C" fn(*mut T)) -> Self {
        Self { ptr, destroy }
    }

    fn as_ptr(&self) -> *mut T {
        self.ptr
    }
}

impl<T> Drop for Owned<T> {
    fn drop(&mut self) {
        unsafe { (self.destroy)(self.ptr) };
    }
}

/// Left wins over right, right over middle, when several are held.
fn mouse_state_from_mask(mask: u32) -> MouseState {
    if mask & LEFT_MASK != 0 {
        MouseState::LeftClick
    } else if mask & RIGHT_MASK != 0 {
        MouseState::RightClick
    } else if mask & MIDDLE_MASK != 0 {
        MouseState::MiddleClick
    } else {
        MouseState::NoClick
    }
}

fn sdl_error(action: &'static str) -> Error {
    let message = unsafe { CStr::from_ptr(SDL_GetError()) }
        .to_string_lossy()
        .into_owned();

    Error::Sdl { action, message }
}

impl CheckErr for c_int {
    fn check_err(self, action: &'static str) -> Result<Self> {
        if self == 0 {
            return Ok(self);
        }

        Err(sdl_error(action))
    }
}

impl<T> CheckErr for *mut T {
    fn check_err(self, action: &'static str) -> Result<Self> {
        if !self.is_null() {
            return Ok(self);
        }

        Err(sdl_error(action))
    }
}

impl FpsCounter {
    fn new(num_measurements: usize) -> Self {
        Self {
            measurements: vec![0.; num_measurements],
            idx: 0,
            sum: 0.,
        }
    }

    /// Records a frame that took `elapsed` seconds and returns the running
    /// average. Frames too short for the timer to see are skipped.
    fn record_frame(&mut self, elapsed: f64) -> Option<f64> {
        if elapsed <= 0. || !elapsed.is_finite() {
            return None;
        }

        Some(self.add_measurement(1. / elapsed))
    }

    #[allow(clippy::cast_precision_loss)]
    fn add_measurement(&mut self, fps: f64) -> f64 {
        let num_measurements = self.measurements.len();

        self.sum -= self.measurements[self.idx];
        self.sum += fps;
        self.measurements[self.idx] = fps;
        self.idx += 1;
        self.idx %= num_measurements;

        self.sum / (num_measurements as f64)
    }
}

fn init_library() -> Result<SdlContext> {
    let flags = SDL_INIT_VIDEO | SDL_INIT_EVENTS | SDL_INIT_TIMER;
    // SDL_Quit is also required after a failed SDL_Init.
    let context = SdlContext;

    unsafe { SDL_Init(flags) }.check_err("initialize SDL")?;

    Ok(context)
}

fn create_window(w: c_int, h: c_int, title: &str) -> Result<Owned<SDL_Window>> {
    let cstr = CString::new(title).map_err(|_| Error::Sdl {
        action: "create window",
        message: String::from("title contains a null byte"),
    })?;
    let any_pos = SDL_WINDOWPOS_UNDEFINED_MASK as c_int;
    let flags = 0;

    let window = unsafe { SDL_CreateWindow(cstr.as_ptr(), any_pos, any_pos, w, h, flags) }
        .check_err("create window")?;

    Ok(Owned::new(window, SDL_DestroyWindow))
}

fn create_renderer(window: &Owned<SDL_Window>) -> Result<Owned<SDL_Renderer>> {
    let flags = SDL_RendererFlags::SDL_RENDERER_ACCELERATED as u32;

    let renderer = unsafe { SDL_CreateRenderer(window.as_ptr(), -1, flags) }
        .check_err("create renderer")?;

    Ok(Owned::new(renderer, SDL_DestroyRenderer))
}

fn create_texture(
    renderer: &Owned<SDL_Renderer>,
    w: c_int,
    h: c_int,
) -> Result<Owned<SDL_Texture>> {
    let format = SDL_PixelFormatEnum::SDL_PIXELFORMAT_ARGB8888 as u32;
    let access = SDL_TextureAccess::SDL_TEXTUREACCESS_STREAMING as c_int;

    let texture = unsafe { SDL_CreateTexture(renderer.as_ptr(), format, access, w, h) }
        .check_err("create texture")?;

    Ok(Owned::new(texture, SDL_DestroyTexture))
}

fn current_time_seconds() -> f64 {
    let ms = unsafe { SDL_GetTicks() };

    f64::from(ms) / 1000.0
}

fn limit_fps(target_fps: f64, real_time: f64) {
    let frame_time = current_time_seconds() - real_time;

    if let Some(to_sleep) = frame_delay_ms(target_fps, frame_time) {
        unsafe { SDL_Delay(to_sleep) };
    }
}

/// Whole milliseconds left of a frame at `target_fps` after `frame_time`
/// seconds of work. A non-positive target means no limit.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn frame_delay_ms(target_fps: f64, frame_time: f64) -> Option<u32> {
    let to_sleep = 1000.0 / target_fps - frame_time * 1000.0;

    (target_fps > 0. && to_sleep >= 1. && to_sleep.is_finite()).then(|| to_sleep.floor() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn mouse_mask_priority() {
        assert_eq!(mouse_state_from_mask(0), MouseState::NoClick);
        assert_eq!(mouse_state_from_mask(LEFT_MASK), MouseState::LeftClick);
        assert_eq!(mouse_state_from_mask(MIDDLE_MASK), MouseState::MiddleClick);
        assert_eq!(mouse_state_from_mask(RIGHT_MASK), MouseState::RightClick);
        assert_eq!(
            mouse_state_from_mask(LEFT_MASK | RIGHT_MASK),
            MouseState::LeftClick
        );
        assert_eq!(
            mouse_state_from_mask(MIDDLE_MASK | RIGHT_MASK),
            MouseState::RightClick
        );
    }

    #[test]
    fn fps_counter_averages_window() {
        let mut fps = FpsCounter::new(2);

        assert_eq!(fps.add_measurement(10.), 5.);
        assert_eq!(fps.add_measurement(20.), 15.);
        assert_eq!(fps.add_measurement(40.), 30.);
    }

    #[test]
    fn zero_length_frames_are_skipped() {
        let mut fps = FpsCounter::new(2);

        assert_eq!(fps.record_frame(0.), None);
        assert_eq!(fps.record_frame(-0.001), None);
        assert_eq!(fps.record_frame(f64::NAN), None);
        assert_eq!(fps.idx, 0);

        assert_eq!(fps.record_frame(0.25), Some(2.));
        assert!(fps.sum.is_finite());
    }

    #[test]
    fn frame_delay_in_milliseconds() {
        assert_eq!(frame_delay_ms(60., 0.010), Some(6));
        assert_eq!(frame_delay_ms(500., 0.), Some(2));
        assert_eq!(frame_delay_ms(60., 0.0166), None);
        assert_eq!(frame_delay_ms(60., 0.020), None);
        assert_eq!(frame_delay_ms(0., 0.), None);
    }

    thread_local! {
        static RELEASED: RefCell<Vec<usize>> = const { RefCell::new(Vec::new()) };
    }

    unsafe extern "C" fn release(ptr: *mut u8) {
        RELEASED.with(|r| r.borrow_mut().push(ptr as usize));
    }

    fn fake_handle(id: usize) -> Owned<u8> {
        Owned::new(ptr::null_mut::<u8>().wrapping_add(id), release)
    }

    fn open_handles(fail_at: usize) -> Result<Vec<Owned<u8>>> {
        let mut handles = Vec::new();

        for id in 1..=3 {
            if id == fail_at {
                return Err(Error::Sdl {
                    action: "create handle",
                    message: String::from("no device"),
                });
            }

            handles.push(fake_handle(id));
        }

        Ok(handles)
    }

    #[test]
    fn handles_are_released_on_failed_setup() {
        RELEASED.with(|r| r.borrow_mut().clear());

        assert!(open_handles(3).is_err());
        assert_eq!(RELEASED.with(|r| r.borrow().clone()), [1, 2]);
    }

    #[test]
    fn handles_are_released_once() {
        RELEASED.with(|r| r.borrow_mut().clear());

        let handle = fake_handle(7);
        assert_eq!(handle.as_ptr() as usize, 7);
        assert!(RELEASED.with(|r| r.borrow().is_empty()));

        drop(handle);
        assert_eq!(RELEASED.with(|r| r.borrow().clone()), [7]);
    }
}
