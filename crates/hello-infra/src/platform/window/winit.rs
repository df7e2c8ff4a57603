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


//! A `winit`-based window paired with its WGPU graphics context.

use crate::graphics::wgpu::WgpuGraphicsContext;
use hello_core::config::{DEFAULT_HEIGHT, DEFAULT_TITLE, DEFAULT_WIDTH};
use hello_core::math::LinearRgba;
use hello_core::platform::WindowDescriptor;
use std::sync::Arc;
use winit::{
    dpi::LogicalSize,
    error::OsError,
    event_loop::ActiveEventLoop,
    window::{Window, WindowAttributes, WindowId},
};

/// The window handle produced by [`WinitWindowSystem`](crate::platform::WinitWindowSystem).
///
/// Owns the `winit` window, its graphics context, the frame cleared but not yet
/// presented, and the close flag.
#[derive(Debug)]
pub struct WinitWindow {
    // Declared before `graphics` so a pending frame is released before its surface.
    pending_frame: Option<wgpu::SurfaceTexture>,
    graphics: WgpuGraphicsContext,
    inner: Arc<Window>,
    close_requested: bool,
}

impl WinitWindow {
    pub(crate) fn new(inner: Arc<Window>, graphics: WgpuGraphicsContext) -> Self {
        Self {
            pending_frame: None,
            graphics,
            inner,
            close_requested: false,
        }
    }

    /// Returns the winit identifier of the window.
    pub fn id(&self) -> WindowId {
        self.inner.id()
    }

    /// Returns `true` once the user asked for the window to close.
    pub fn close_requested(&self) -> bool {
        self.close_requested
    }

    pub(crate) fn request_close(&mut self) {
        self.close_requested = true;
    }

    pub(crate) fn resize(&mut self, width: u32, height: u32) {
        // A frame acquired at the old size must not be presented after reconfiguring.
        self.pending_frame = None;
        self.graphics.resize(width, height);
    }

    pub(crate) fn clear(&mut self, color: LinearRgba) {
        self.pending_frame = self.graphics.clear(color);
    }

    /// Presents the frame cleared by the last `clear`. Returns `false` if there was none.
    pub(crate) fn present(&mut self) -> bool {
        match self.pending_frame.take() {
            Some(frame) => {
                self.inner.pre_present_notify();
                frame.present();
                true
            }
            None => false,
        }
    }
}

/// A builder for the `winit` window behind a [`WinitWindow`].
///
/// Window creation in `winit` must happen inside an active event loop callback,
/// so the builder is queued and built once the loop hands out an [`ActiveEventLoop`].
#[derive(Debug, Clone)]
pub struct WinitWindowBuilder {
    title: String,
    width: u32,
    height: u32,
}

impl WinitWindowBuilder {
    /// Creates a new `WinitWindowBuilder` with default settings.
    pub fn new() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }

    /// Creates a builder matching a window creation request.
    pub fn from_descriptor(descriptor: &WindowDescriptor) -> Self {
        Self::new()
            .with_title(descriptor.title.clone())
            .with_dimensions(descriptor.width, descriptor.height)
    }

    /// Sets the title of the window to be built.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the initial inner dimensions of the window to be built.
    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Returns the `winit` attributes the window will be created with.
    pub fn attributes(&self) -> WindowAttributes {
        Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(LogicalSize::new(self.width, self.height))
            .with_visible(true)
    }

    /// Builds the window using the provided `winit` event loop.
    ///
    /// # Errors
    /// Returns an `OsError` if the underlying `winit` window creation fails.
    pub fn build(&self, event_loop: &ActiveEventLoop) -> Result<Arc<Window>, OsError> {
        log::info!(
            "Building window with title: '{}' and size: {}x{}",
            self.title,
            self.width,
            self.height
        );

        let window = event_loop.create_window(self.attributes())?;

        log::info!("Winit window created successfully (id: {:?}).", window.id());
        Ok(Arc::new(window))
    }
}

impl Default for WinitWindowBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::Size;

    #[test]
    fn test_builder_defaults() {
        let attributes = WinitWindowBuilder::default().attributes();
        assert_eq!(attributes.title, "Hello World");
        assert_eq!(
            attributes.inner_size,
            Some(Size::Logical(LogicalSize::new(640.0, 480.0)))
        );
        assert!(attributes.visible);
    }

    #[test]
    fn test_builder_from_descriptor() {
        let descriptor = WindowDescriptor::new(1024, 768, "Other");
        let attributes = WinitWindowBuilder::from_descriptor(&descriptor).attributes();
        assert_eq!(attributes.title, "Other");
        assert_eq!(
            attributes.inner_size,
            Some(Size::Logical(LogicalSize::new(1024.0, 768.0)))
        );
    }
}
