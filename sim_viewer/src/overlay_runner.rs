use raw_window_handle::{HasDisplayHandle, HasWindowHandle};
use sim_core::OverlayPlugin;
use sim_input::KeyboardState;
use thiserror::Error;
use tracing::debug;
use ultraviolet::UVec2;
use wgpu::{Backends, Gles3MinorVersion, Instance, InstanceDescriptor, InstanceFlags};

use crate::{egui_platform::EguiPlatform, system::SystemEvent};

/// Owns the GPU surface and drives one [OverlayPlugin] on top of it.
pub struct OverlayRunner<'surface> {
    plugin: OverlayPlugin,
    egui_platform: EguiPlatform,
    egui_renderer: egui_wgpu::Renderer,
    keyboard: KeyboardState,

    size: UVec2,
    backdrop: wgpu::Color,

    surface: wgpu::Surface<'surface>,
    surface_format: wgpu::TextureFormat,

    device: wgpu::Device,
    queue: wgpu::Queue,

    // Acquired at the end of draw so the next frame can start immediately.
    next_texture: Option<wgpu::SurfaceTexture>,
}

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("Window handle unavailable: {0}")]
    HandleError(#[from] raw_window_handle::HandleError),

    #[error("Failed to create surface: {0}")]
    CreateSurfaceError(#[from] wgpu::CreateSurfaceError),
    #[error("Failed to request device: {0}")]
    RequestDeviceError(#[from] wgpu::RequestDeviceError),
    #[error("Surface error: {0}")]
    SurfaceError(#[from] wgpu::SurfaceError),

    #[error("Surface supports no texture formats")]
    NoSurfaceFormat,
    #[error("No swapchain texture to draw into")]
    NoSwapchain,
    #[error("No suitable graphics adapter")]
    NoSuitableAdapter,
}

fn create_surface_information(
    surface_format: wgpu::TextureFormat,
    width: u32,
    height: u32,
) -> wgpu::SurfaceConfiguration {
    wgpu::SurfaceConfiguration {
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        format: surface_format,
        width,
        height,
        present_mode: wgpu::PresentMode::Fifo,
        alpha_mode: wgpu::CompositeAlphaMode::Auto,
        view_formats: Vec::default(),
        desired_maximum_frame_latency: 2,
    }
}

impl<'surface> OverlayRunner<'surface> {
    pub async fn from_system_window<SW>(
        system_window: &'surface SW,
        drawable_size: UVec2,
        plugin: OverlayPlugin,
    ) -> Result<Self, RunnerError>
    where
        SW: HasWindowHandle + HasDisplayHandle,
    {
        let (width, height) = (drawable_size.x, drawable_size.y);

        let instance = Instance::new(InstanceDescriptor {
            backends: Backends::PRIMARY,
            flags: InstanceFlags::empty(),
            dx12_shader_compiler: Default::default(),
            gles_minor_version: Gles3MinorVersion::Automatic,
        });

        let surface = unsafe {
            instance.create_surface_unsafe(wgpu::SurfaceTargetUnsafe::RawHandle {
                raw_window_handle: system_window.window_handle()?.into(),
                raw_display_handle: system_window.display_handle()?.into(),
            })?
        };

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::None,
                force_fallback_adapter: false,
                compatible_surface: Some(&surface),
            })
            .await
            .ok_or(RunnerError::NoSuitableAdapter)?;

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    ..Default::default()
                },
                None,
            )
            .await?;

        // Prefer sRGB, but take whatever the surface offers.
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .ok_or(RunnerError::NoSurfaceFormat)?;

        surface.configure(
            &device,
            &create_surface_information(surface_format, width, height),
        );

        let egui_renderer = egui_wgpu::Renderer::new(
            &device,
            surface_format,
            None,
            1,
            /* dithering: */ false,
        );

        let backdrop = {
            let background = plugin.palette().background;
            wgpu::Color {
                r: background.r as f64 * 0.5,
                g: background.g as f64 * 0.5,
                b: background.b as f64 * 0.5,
                a: 1.0,
            }
        };

        let next_texture = Some(surface.get_current_texture()?);

        debug!(?surface_format, width, height, "Overlay runner ready");

        Ok(OverlayRunner {
            plugin,
            egui_platform: EguiPlatform::new((width, height)),
            egui_renderer,
            keyboard: KeyboardState::new(),

            size: drawable_size,
            backdrop,

            surface,
            surface_format,

            device,
            queue,

            next_texture,
        })
    }

    pub fn plugin(&self) -> &OverlayPlugin {
        &self.plugin
    }

    pub fn handle_event(&mut self, event: SystemEvent) -> Result<(), RunnerError> {
        if let SystemEvent::SizeChanged { width, height } = event {
            self.size = UVec2::new(width, height);

            self.next_texture.take();
            self.surface.configure(
                &self.device,
                &create_surface_information(self.surface_format, width, height),
            );
            self.next_texture = Some(self.surface.get_current_texture()?);
        }

        let consumed = self.egui_platform.handle_event(&event);

        // Releases always reach the keyboard so a key can't get stuck held.
        match event {
            SystemEvent::KeyDown { key, .. } if !consumed => self.keyboard.key_down(key),
            SystemEvent::KeyUp { key, .. } => self.keyboard.key_up(key),
            _ => {}
        }

        Ok(())
    }

    /// The host update hook: the plugin sees this frame's key presses, then
    /// the edges are cleared.
    pub fn think(&mut self) {
        self.plugin.update(&self.keyboard);
        self.keyboard.begin_frame();
    }

    /// The host render hook.
    pub fn draw(&mut self) -> Result<(), RunnerError> {
        let texture = self.next_texture.take().ok_or(RunnerError::NoSwapchain)?;

        self.egui_platform.begin_frame();
        self.plugin.render_egui(&self.egui_platform.context());
        let full_output = self.egui_platform.end_frame();

        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui_renderer
                .update_texture(&self.device, &self.queue, *id, image_delta);
        }

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("OverlayRunner::command_encoder"),
            });

        let paint_jobs = self
            .egui_platform
            .tessellate(&full_output, /* retina: */ 1.0);
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.size.x, self.size.y],
            pixels_per_point: 1.0,
        };

        self.egui_renderer.update_buffers(
            &self.device,
            &self.queue,
            &mut encoder,
            &paint_jobs,
            &screen_descriptor,
        );

        let output = texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        {
            let mut rpass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &output,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Clear(self.backdrop),
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    label: Some("OverlayRunner::rpass"),
                    ..Default::default()
                })
                .forget_lifetime();

            self.egui_renderer
                .render(&mut rpass, &paint_jobs, &screen_descriptor);
        }

        self.queue.submit([encoder.finish()]);
        for id in full_output.textures_delta.free {
            self.egui_renderer.free_texture(&id);
        }

        texture.present();
        self.next_texture = Some(self.surface.get_current_texture()?);

        Ok(())
    }
}
