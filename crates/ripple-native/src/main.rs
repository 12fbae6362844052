use glam::Vec2;
use winit::{event::*, event_loop::EventLoop, window::WindowBuilder};

use ripple_core::gpu::RippleResources;
use ripple_core::{
    Clock, MaterialInstance, Rect, RippleMaterial, RippleParams, RippleTracker, RippleUniforms,
    ScreenProjection, ScreenYAxis, SinceStart,
};

struct GpuState<'w> {
    window: &'w winit::window::Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    ripple: RippleResources,
    width: u32,
    height: u32,
}

impl<'w> GpuState<'w> {
    async fn new(
        window: &'w winit::window::Window,
        material: &MaterialInstance,
    ) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let width = size.width.max(1);
        let height = size.height.max(1);
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps
            .formats
            .first()
            .copied()
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);
        log::info!("[gpu] surface {}x{} {:?}", width, height, format);

        let ripple = RippleResources::new(&device, material, format);

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            ripple,
            width,
            height,
        })
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.width = new_size.width;
        self.height = new_size.height;
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    fn render(&mut self, uniforms: &RippleUniforms, full: bool) -> Result<(), wgpu::SurfaceError> {
        self.ripple.upload(&self.queue, uniforms, full);

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        self.ripple.encode(&mut encoder, &view);
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

/// The whole window is the ripple element; winit reports cursor positions
/// in physical pixels with Y pointing down.
fn window_projection(size: winit::dpi::PhysicalSize<u32>) -> Option<ScreenProjection> {
    let bounds = Rect::from_size(size.width as f32, size.height as f32);
    ScreenProjection::from_bounds(bounds, bounds, ScreenYAxis::Down)
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Ripple (native)")
        .build(&event_loop)?;

    let params = RippleParams::default();
    let material = RippleMaterial::ripple(&params.wave).instantiate();
    let mut state = pollster::block_on(GpuState::new(&window, &material))?;
    let size = window.inner_size();
    let mut tracker = RippleTracker::new(
        material,
        Rect::from_size(size.width as f32, size.height as f32),
        params,
    )?;
    let clock = SinceStart::new();
    let mut cursor = Vec2::ZERO;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } => {
            state.resize(size);
            tracker.set_rect(Rect::from_size(size.width as f32, size.height as f32));
            if let Err(e) = tracker.publish() {
                log::warn!("[resize] publish failed: {}", e);
            }
        }
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } => elwt.exit(),
        Event::WindowEvent {
            event: WindowEvent::CursorMoved { position, .. },
            ..
        } => cursor = Vec2::new(position.x as f32, position.y as f32),
        Event::WindowEvent {
            event:
                WindowEvent::MouseInput {
                    state: ElementState::Released,
                    button: MouseButton::Left,
                    ..
                },
            ..
        } => {
            let Some(projection) = window_projection(state.window.inner_size()) else {
                log::warn!("[click] window has no area; ignoring");
                return;
            };
            match tracker.register_click(cursor, &projection, clock.now_secs()) {
                Ok(hit) => log::info!(
                    "[click] ripple slot {} at uv=({:.2},{:.2})",
                    hit.slot,
                    hit.uv.x,
                    hit.uv.y
                ),
                Err(e) => log::warn!("[click] ignored: {}", e),
            }
        }
        Event::AboutToWait => {
            let uniforms = RippleUniforms::pack(
                tracker.surface(),
                clock.now_secs(),
                [state.width as f32, state.height as f32],
            );
            let full = tracker.surface_mut().take_dirty();
            match state.render(&uniforms, full) {
                Ok(_) => state.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    state.resize(state.window.inner_size())
                }
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(_) => {}
            }
        }
        _ => {}
    })?;
    Ok(())
}
