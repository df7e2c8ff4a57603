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

//! The window system contract and window creation request.

use crate::error::{InitializationError, WindowCreationError};
use crate::math::LinearRgba;

/// The parameters of a window creation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowDescriptor {
    /// Inner width in pixels.
    pub width: u32,
    /// Inner height in pixels.
    pub height: u32,
    /// Title bar text.
    pub title: String,
}

impl WindowDescriptor {
    /// Creates a descriptor for a `width` x `height` window titled `title`.
    pub fn new(width: u32, height: u32, title: impl Into<String>) -> Self {
        Self {
            width,
            height,
            title: title.into(),
        }
    }
}

/// A trait that abstracts a windowing subsystem together with the graphics
/// context attached to its windows.
///
/// Any windowing backend (Winit, SDL2, Glfw, etc.) can implement this trait
/// to be driven by a [`WindowRunner`](crate::runner::WindowRunner).
///
/// Only [`initialize`](WindowSystem::initialize) and
/// [`create_window`](WindowSystem::create_window) may fail. The per-frame
/// operations are expected to absorb their own transient errors.
pub trait WindowSystem {
    /// The opaque handle of a window created by this subsystem.
    type Window;

    /// Starts the subsystem for the current process.
    fn initialize(&mut self) -> Result<(), InitializationError>;

    /// Opens a window described by `descriptor`.
    fn create_window(
        &mut self,
        descriptor: &WindowDescriptor,
    ) -> Result<Self::Window, WindowCreationError>;

    /// Makes `window` the target of subsequent `clear` and `swap_buffers` calls.
    fn make_context_current(&mut self, window: &mut Self::Window);

    /// Returns `true` once the user has asked for `window` to close.
    fn should_close(&self, window: &Self::Window) -> bool;

    /// Clears the color buffer of `window` to `color`. Depth and stencil are untouched.
    fn clear(&mut self, window: &mut Self::Window, color: LinearRgba);

    /// Presents the frame buffer of `window`.
    fn swap_buffers(&mut self, window: &mut Self::Window);

    /// Processes pending window and input events without blocking.
    fn poll_events(&mut self, window: &mut Self::Window);

    /// Releases the subsystem. Windows must have been dropped beforehand.
    fn terminate(&mut self);
}
