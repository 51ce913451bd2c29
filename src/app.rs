use std::sync::Arc;
use std::time::{Duration, Instant};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use waves::config::{FIELD_HEIGHT, FIELD_WIDTH, FRAMES_PER_SEC, HIGHLIGHT_COLOR, WINDOW_SCALE};
use waves::present::compose_frame;
use waves::simulation::{Action, Direction};
use waves::{Result, Session, WaveError};

use crate::gpu::{FramePipeline, FrameTexture, GpuContext};

/// Window and GPU resources, created once the event loop is running
struct Presenter {
    window: Arc<Window>,
    gpu: GpuContext,
    frame: FrameTexture,
    pipeline: FramePipeline,
}

impl Presenter {
    fn new(event_loop: &ActiveEventLoop, width: u32, height: u32) -> Result<Self> {
        let window_attrs = Window::default_attributes()
            .with_title("Waves")
            .with_resizable(false)
            .with_inner_size(winit::dpi::LogicalSize::new(
                width * WINDOW_SCALE,
                height * WINDOW_SCALE,
            ));
        let window = Arc::new(event_loop.create_window(window_attrs)?);

        log::info!("Creating GPU context...");
        let gpu = pollster::block_on(GpuContext::new(window.clone()))?;

        let frame = FrameTexture::new(&gpu.device, width, height, gpu.format());
        let pipeline = FramePipeline::new(&gpu.device, gpu.format(), &frame);

        Ok(Self {
            window,
            gpu,
            frame,
            pipeline,
        })
    }

    fn draw(&self) {
        let output = match self.gpu.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.gpu.surface.configure(&self.gpu.device, &self.gpu.config);
                self.window.request_redraw();
                return;
            }
            Err(e) => {
                log::error!("Surface error: {:?}", e);
                return;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("frame-encoder"),
            });
        self.pipeline.draw(&mut encoder, &view);

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();
    }
}

/// Application state
pub struct App {
    session: Session,
    presenter: Option<Presenter>,
    gate: FrameGate,
    /// A state change has not been shown yet
    pending: bool,
    failure: Option<WaveError>,
}

impl App {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            presenter: None,
            gate: FrameGate::new(FRAMES_PER_SEC),
            pending: true,
            failure: None,
        }
    }

    /// Error that stopped the event loop, if any
    pub fn take_failure(&mut self) -> Option<WaveError> {
        self.failure.take()
    }

    /// Recompute, compose and upload the frame, then ask for a redraw
    fn refresh(&mut self) {
        let Some(presenter) = &self.presenter else {
            return;
        };
        let start = Instant::now();

        let display = self.session.recompute_and_normalize();
        let pixels = compose_frame(&display, &self.session.highlights(), HIGHLIGHT_COLOR);
        presenter.frame.upload(&presenter.gpu.queue, &pixels);
        presenter.window.set_title(&self.title());
        presenter.window.request_redraw();

        log::debug!("Took {} ms to redraw", start.elapsed().as_millis());
        self.gate.mark(Instant::now());
        self.pending = false;
    }

    fn title(&self) -> String {
        let osc = self.session.registry.selected();
        format!(
            "Waves - #{} amplitude {:.1} - {}{}",
            self.session.registry.selection() + 1,
            osc.amplitude,
            self.session.field.dissipation_model,
            if self.session.field.rendering { "" } else { " [frozen]" }
        )
    }

    fn handle_key(&mut self, key_code: KeyCode) {
        let Some(action) = action_for_key(key_code) else {
            return;
        };
        match self.session.apply(action) {
            Ok(true) => {
                self.pending = true;
                if self.gate.is_open(Instant::now()) {
                    self.refresh();
                }
            }
            Ok(false) => {}
            Err(e) => log::warn!("Ignored {:?}: {}", action, e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.presenter.is_some() {
            return;
        }

        log::info!("Initializing waves...");
        log::info!("Field size: {}x{}", FIELD_WIDTH, FIELD_HEIGHT);

        match Presenter::new(event_loop, FIELD_WIDTH, FIELD_HEIGHT) {
            Ok(presenter) => self.presenter = Some(presenter),
            Err(e) => {
                log::error!("Initialization failed: {}", e);
                self.failure = Some(e);
                event_loop.exit();
                return;
            }
        }

        log::info!("Initialization complete!");
        log::info!("Controls:");
        log::info!("  Arrows: Move the selected oscillator");
        log::info!("  1-9, 0: Select (or create) an oscillator");
        log::info!("  Delete: Remove the selected oscillator");
        log::info!("  +/-: Adjust amplitude");
        log::info!("  D: Cycle dissipation model");
        log::info!("  R: Freeze/resume rendering");
        log::info!("  H: Toggle center highlights");
        log::info!("  Escape: Quit");

        self.refresh();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting...");
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state.is_pressed() {
                    if let PhysicalKey::Code(key_code) = event.physical_key {
                        if key_code == KeyCode::Escape {
                            log::info!("Escape pressed, exiting...");
                            event_loop.exit();
                        } else {
                            self.handle_key(key_code);
                        }
                    }
                }
            }
            WindowEvent::Resized(new_size) => {
                if let Some(presenter) = &mut self.presenter {
                    presenter.gpu.resize(new_size);
                    presenter.window.request_redraw();
                }
            }
            WindowEvent::RedrawRequested => {
                if let Some(presenter) = &self.presenter {
                    presenter.draw();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if !self.pending {
            event_loop.set_control_flow(ControlFlow::Wait);
            return;
        }
        let now = Instant::now();
        if self.gate.is_open(now) {
            self.refresh();
            event_loop.set_control_flow(ControlFlow::Wait);
        } else if let Some(at) = self.gate.next_open() {
            event_loop.set_control_flow(ControlFlow::WaitUntil(at));
        }
    }
}

/// Key binding for a physical key
pub fn action_for_key(key_code: KeyCode) -> Option<Action> {
    let action = match key_code {
        KeyCode::ArrowUp => Action::Move(Direction::Up),
        KeyCode::ArrowDown => Action::Move(Direction::Down),
        KeyCode::ArrowLeft => Action::Move(Direction::Left),
        KeyCode::ArrowRight => Action::Move(Direction::Right),
        KeyCode::Digit1 => Action::Select(0),
        KeyCode::Digit2 => Action::Select(1),
        KeyCode::Digit3 => Action::Select(2),
        KeyCode::Digit4 => Action::Select(3),
        KeyCode::Digit5 => Action::Select(4),
        KeyCode::Digit6 => Action::Select(5),
        KeyCode::Digit7 => Action::Select(6),
        KeyCode::Digit8 => Action::Select(7),
        KeyCode::Digit9 => Action::Select(8),
        KeyCode::Digit0 => Action::Select(9),
        KeyCode::Delete | KeyCode::Backspace => Action::DeleteCurrent,
        KeyCode::NumpadAdd | KeyCode::Equal => Action::IncreaseAmplitude,
        KeyCode::NumpadSubtract | KeyCode::Minus => Action::DecreaseAmplitude,
        KeyCode::KeyR => Action::ToggleRendering,
        KeyCode::KeyD => Action::CycleDissipation,
        KeyCode::KeyH => Action::ToggleHighlight,
        _ => return None,
    };
    Some(action)
}

/// Minimum spacing between redraws
pub struct FrameGate {
    interval: Duration,
    last: Option<Instant>,
}

impl FrameGate {
    pub fn new(frames_per_sec: u32) -> Self {
        Self {
            interval: Duration::from_secs(1) / frames_per_sec.max(1),
            last: None,
        }
    }

    /// True once a full interval has passed since the last redraw
    pub fn is_open(&self, now: Instant) -> bool {
        match self.last {
            Some(last) => now.saturating_duration_since(last) >= self.interval,
            None => true,
        }
    }

    pub fn mark(&mut self, now: Instant) {
        self.last = Some(now);
    }

    /// Earliest instant the gate opens again
    pub fn next_open(&self) -> Option<Instant> {
        self.last.map(|last| last + self.interval)
    }
}
