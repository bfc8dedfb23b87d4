//! Window presentation.
//!
//! Frames are rasterized on the CPU into a [`PixelBuffer`]; [`GpuState`]
//! owns the wgpu device and swapchain and shows that buffer.
//! [`WindowCanvas`] ties the two together behind the [`Surface`] trait.

mod present;

use std::sync::Arc;

use winit::dpi::PhysicalSize;
use winit::window::Window;

use crate::canvas::PixelBuffer;
use crate::color::Color;
use crate::error::{GpuError, SimulationError, SwarmError};
use crate::surface::Surface;

use present::FramePresenter;

/// wgpu device, queue and swapchain for one window.
pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    presenter: FramePresenter,
}

impl GpuState {
    pub async fn new(window: Arc<Window>) -> Result<Self, GpuError> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance.create_surface(window)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(GpuError::NoAdapter)?;
        log::info!("using adapter {:?}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::downlevel_defaults().using_resolution(adapter.limits()),
                    memory_hints: Default::default(),
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let presenter = FramePresenter::new(&device, size.width, size.height, surface_format);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            presenter,
        })
    }

    /// Reconfigure the swapchain. Zero-sized (minimized) windows are ignored.
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
            self.presenter.resize(&self.device, new_size.width, new_size.height);
        }
    }

    fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    /// Queue `frame` for the next [`present`](Self::present).
    ///
    /// Fails when the frame does not match the frame texture.
    pub fn upload(&self, frame: &PixelBuffer) -> Result<(), SwarmError> {
        if !self.presenter.upload(&self.queue, frame) {
            return Err(SwarmError::surface(format!(
                "frame is {}x{} but the swapchain is {}x{}",
                frame.width(),
                frame.height(),
                self.config.width,
                self.config.height
            )));
        }
        Ok(())
    }

    /// Show the last uploaded frame.
    pub fn present(&mut self) -> Result<(), wgpu::SurfaceError> {
        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });
        self.presenter.draw(&mut encoder, &view);

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

/// The window as a [`Surface`]: draws into a CPU frame, presents through wgpu.
pub struct WindowCanvas {
    gpu: GpuState,
    frame: PixelBuffer,
}

impl WindowCanvas {
    pub async fn new(window: Arc<Window>) -> Result<Self, SimulationError> {
        let size = window.inner_size();
        let gpu = GpuState::new(window).await?;
        let frame = PixelBuffer::new(size.width, size.height)?;
        Ok(Self { gpu, frame })
    }

    /// Follow a window resize. The frame is reallocated (and cleared).
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) -> Result<(), SwarmError> {
        self.gpu.resize(new_size);
        self.frame.resize(new_size.width, new_size.height)
    }
}

impl Surface for WindowCanvas {
    fn size(&self) -> Result<(u32, u32), SwarmError> {
        self.frame.size()
    }

    fn set_draw_color(&mut self, color: Color) -> Result<(), SwarmError> {
        self.frame.set_draw_color(color)
    }

    fn clear(&mut self) -> Result<(), SwarmError> {
        self.frame.clear()
    }

    fn plot_pixel(&mut self, x: i32, y: i32) -> Result<(), SwarmError> {
        self.frame.plot_pixel(x, y)
    }

    fn draw_span(&mut self, x0: i32, x1: i32, y: i32) -> Result<(), SwarmError> {
        self.frame.draw_span(x0, x1, y)
    }

    fn present(&mut self) -> Result<(), SwarmError> {
        self.gpu.upload(&self.frame)?;
        match self.gpu.present() {
            Ok(()) => self.frame.present(),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.gpu.reconfigure();
                Err(SwarmError::surface("swapchain lost; reconfigured"))
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                Err(SwarmError::AllocationFailure("swapchain texture: out of GPU memory".into()))
            }
            Err(e) => Err(SwarmError::surface(e.to_string())),
        }
    }
}
