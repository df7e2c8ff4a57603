// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


use super::conversions::IntoWgpu;
use anyhow::{anyhow, Result};
use hello_core::math::LinearRgba;
use std::sync::Arc;
use wgpu::{Instance, InstanceDescriptor, Surface, SurfaceCapabilities, SurfaceTexture, TextureFormat};
use winit::window::Window;

/// Holds the WGPU state needed to clear and present one window's surface.
///
/// This is the window's "graphics context": a surface, the device that owns it
/// and the swapchain configuration.
#[derive(Debug)]
pub struct WgpuGraphicsContext {
    surface: Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,

    // Configuration for the surface's swapchain behavior
    surface_config: wgpu::SurfaceConfiguration,

    adapter_name: String,
    adapter_backend: wgpu::Backend,
}

impl WgpuGraphicsContext {
    /// Initializes the graphics context for `window`.
    /// This sets up the WGPU instance, surface, adapter, device and queue, then
    /// configures the swapchain for the window's current size.
    pub fn new(window: Arc<Window>) -> Result<Self> {
        log::info!("Initializing WGPU Graphics Context...");
        pollster::block_on(Self::initialize_async(window))
    }

    async fn initialize_async(window: Arc<Window>) -> Result<Self> {
        let window_size = window.inner_size();
        log::debug!(
            "Window size for initial graphics setup: {}x{}",
            window_size.width,
            window_size.height
        );

        // --- 1. Create Instance and Surface ---
        let instance = Instance::new(&InstanceDescriptor::default());
        let surface: Surface<'static> = instance.create_surface(window)?;
        log::debug!("WGPU surface created for the window.");

        // --- 2. Pick an adapter able to present to the surface ---
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                force_fallback_adapter: false,
                compatible_surface: Some(&surface),
            })
            .await
            .map_err(|e| anyhow!("No graphics adapter can present to the window: {e}"))?;

        let adapter_info = adapter.get_info();
        log::info!(
            "Using graphics adapter: \"{}\" (Backend: {:?})",
            adapter_info.name,
            adapter_info.backend
        );

        // --- 3. Create Logical Device and Command Queue ---
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Hello Window Logical Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_defaults().using_resolution(adapter.limits()),
                memory_hints: wgpu::MemoryHints::default(),
                trace: wgpu::Trace::Off,
            })
            .await
            .map_err(|e| anyhow!("Failed to create logical device: {e}"))?;
        log::info!("Logical device and command queue created.");

        device.on_uncaptured_error(Box::new(|e| {
            log::error!("WGPU Uncaptured Error: {e:?}");
        }));

        // --- 4. Configure Surface ---
        let surface_caps: SurfaceCapabilities = surface.get_capabilities(&adapter);
        let surface_format: TextureFormat = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .ok_or_else(|| anyhow!("The window surface reports no supported format"))?;

        // Fifo is always supported and is the platform's default vsync behavior.
        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: window_size.width.max(1),
            height: window_size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &surface_config);
        log::debug!("Surface configured: {surface_config:?}");

        Ok(Self {
            surface,
            device,
            queue,
            surface_config,
            adapter_name: adapter_info.name,
            adapter_backend: adapter_info.backend,
        })
    }

    /// Reconfigures the surface (swapchain) after the window was resized.
    /// Zero-sized requests (minimized windows) are ignored.
    pub fn resize(&mut self, new_width: u32, new_height: u32) {
        if new_width > 0 && new_height > 0 {
            log::info!(
                "WGPUGraphicsContext: Resizing surface configuration to {new_width}x{new_height}"
            );
            self.surface_config.width = new_width;
            self.surface_config.height = new_height;
            self.surface.configure(&self.device, &self.surface_config);
        } else {
            log::warn!(
                "WGPUGraphicsContext: Ignoring resize request to zero dimensions: {new_width}x{new_height}"
            );
        }
    }

    /// Acquires the next swapchain texture and clears its color buffer to `color`.
    ///
    /// The returned texture has the clear submitted but is not yet presented.
    /// Returns `None` when no frame could be acquired; the surface is reconfigured
    /// if it was lost or outdated so the next frame can succeed.
    pub fn clear(&mut self, color: LinearRgba) -> Option<SurfaceTexture> {
        let output_frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(e @ (wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)) => {
                log::warn!(
                    "Swapchain surface lost or outdated ({e:?}). Reconfiguring with {}x{}.",
                    self.surface_config.width,
                    self.surface_config.height
                );
                self.surface.configure(&self.device, &self.surface_config);
                return None;
            }
            Err(wgpu::SurfaceError::Timeout) => {
                log::warn!("Swapchain timeout acquiring frame; skipping it.");
                return None;
            }
            Err(e) => {
                log::error!("Unexpected SurfaceError: {e:?}; skipping frame.");
                return None;
            }
        };
        log::trace!("Acquired surface texture frame from swapchain");

        let view = output_frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Clear Command Encoder"),
            });

        {
            // Color only: no depth/stencil attachment.
            let _render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Clear Screen Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    depth_slice: None,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(color.into_wgpu()),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        log::trace!("Submitted clear pass to GPU queue.");

        Some(output_frame)
    }

    /// Returns the name of the adapter in use.
    pub fn adapter_name(&self) -> &str {
        &self.adapter_name
    }

    /// Returns the graphics API backing the adapter.
    pub fn adapter_backend(&self) -> wgpu::Backend {
        self.adapter_backend
    }
}
