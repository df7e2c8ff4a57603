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


//! The `winit` + WGPU implementation of [`WindowSystem`].

use super::events::PlatformEvents;
use super::window::{WinitWindow, WinitWindowBuilder};
use crate::graphics::wgpu::WgpuGraphicsContext;
use hello_core::error::{InitializationError, WindowCreationError};
use hello_core::math::LinearRgba;
use hello_core::platform::{WindowDescriptor, WindowSystem};
use std::time::Duration;
use winit::error::EventLoopError;
use winit::event_loop::EventLoop;
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::WindowId;

/// How long a single pump may wait for the platform while a window is being created.
const CREATION_PUMP_TIMEOUT: Duration = Duration::from_millis(16);
/// How many pumps a window creation may take before it is considered refused.
const MAX_CREATION_PUMPS: u32 = 120;

/// A [`WindowSystem`] backed by a `winit` event loop driven through
/// `pump_app_events`, with one WGPU graphics context per window.
///
/// `winit` only allows one event loop per process, so a terminated system
/// cannot be initialized again.
#[derive(Default)]
pub struct WinitWindowSystem {
    event_loop: Option<EventLoop<()>>,
    events: PlatformEvents,
    current: Option<WindowId>,
}

impl WinitWindowSystem {
    /// Creates an uninitialized window system.
    pub fn new() -> Self {
        Self::default()
    }

    fn is_current(&self, window: &WinitWindow) -> bool {
        if self.current == Some(window.id()) {
            return true;
        }
        log::warn!(
            "Window {:?} is not the current context target; skipping.",
            window.id()
        );
        false
    }
}

fn to_initialization_error(err: EventLoopError) -> InitializationError {
    match err {
        EventLoopError::NotSupported(e) => InitializationError::NoDisplay(e.to_string()),
        other => InitializationError::Platform(other.to_string()),
    }
}

impl WindowSystem for WinitWindowSystem {
    type Window = WinitWindow;

    fn initialize(&mut self) -> Result<(), InitializationError> {
        if self.event_loop.is_some() {
            log::warn!("winit event loop already created.");
            return Ok(());
        }
        let event_loop = EventLoop::new().map_err(to_initialization_error)?;
        log::debug!("winit event loop created.");
        self.event_loop = Some(event_loop);
        Ok(())
    }

    fn create_window(
        &mut self,
        descriptor: &WindowDescriptor,
    ) -> Result<WinitWindow, WindowCreationError> {
        let event_loop = self
            .event_loop
            .as_mut()
            .ok_or(WindowCreationError::NotInitialized)?;

        self.events
            .request_window(WinitWindowBuilder::from_descriptor(descriptor));

        for _ in 0..MAX_CREATION_PUMPS {
            if let PumpStatus::Exit(code) =
                event_loop.pump_app_events(Some(CREATION_PUMP_TIMEOUT), &mut self.events)
            {
                log::error!("Event loop exited with code {code} during window creation.");
                return Err(WindowCreationError::EventLoopExited);
            }

            let Some(created) = self.events.take_created_window() else {
                continue;
            };
            let window = created.map_err(|e| WindowCreationError::Os(e.to_string()))?;
            let graphics = WgpuGraphicsContext::new(window.clone())
                .map_err(|e| WindowCreationError::Graphics(format!("{e:#}")))?;
            log::info!(
                "Graphics context ready on \"{}\" ({:?}).",
                graphics.adapter_name(),
                graphics.adapter_backend()
            );
            return Ok(WinitWindow::new(window, graphics));
        }

        Err(WindowCreationError::Os(format!(
            "no window was created after {MAX_CREATION_PUMPS} event loop pumps"
        )))
    }

    fn make_context_current(&mut self, window: &mut WinitWindow) {
        log::debug!("Making window {:?} the current context target.", window.id());
        self.current = Some(window.id());
    }

    fn should_close(&self, window: &WinitWindow) -> bool {
        window.close_requested()
    }

    fn clear(&mut self, window: &mut WinitWindow, color: LinearRgba) {
        if self.is_current(window) {
            window.clear(color);
        }
    }

    fn swap_buffers(&mut self, window: &mut WinitWindow) {
        if self.is_current(window) && !window.present() {
            log::trace!("No cleared frame to present this iteration.");
        }
    }

    fn poll_events(&mut self, window: &mut WinitWindow) {
        let Some(event_loop) = self.event_loop.as_mut() else {
            window.request_close();
            return;
        };

        if let PumpStatus::Exit(code) =
            event_loop.pump_app_events(Some(Duration::ZERO), &mut self.events)
        {
            log::info!("Event loop exited with code {code}.");
            window.request_close();
        }

        let id = window.id();
        if self.events.take_close_request(id) {
            window.request_close();
        }
        if let Some((width, height)) = self.events.take_resize(id) {
            window.resize(width, height);
        }
    }

    fn terminate(&mut self) {
        self.current = None;
        self.events.clear();
        if self.event_loop.take().is_some() {
            log::debug!("winit event loop released.");
        }
    }
}
