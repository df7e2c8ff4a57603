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


//! The `winit` application handler used while pumping the event loop.
//!
//! Events are only recorded here; the window system applies them to the owning
//! [`WinitWindow`](super::window::WinitWindow) after each pump returns.

use super::window::WinitWindowBuilder;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    error::OsError,
    event::WindowEvent,
    event_loop::ActiveEventLoop,
    window::{Window, WindowId},
};

/// Collects the window events delivered during one pump of the event loop.
#[derive(Debug, Default)]
pub struct PlatformEvents {
    pending_window: Option<WinitWindowBuilder>,
    created_window: Option<Result<Arc<Window>, OsError>>,
    close_requested: HashSet<WindowId>,
    resized: HashMap<WindowId, (u32, u32)>,
}

impl PlatformEvents {
    /// Queues a window to be built the next time the event loop is active.
    pub fn request_window(&mut self, builder: WinitWindowBuilder) {
        self.pending_window = Some(builder);
        self.created_window = None;
    }

    /// Takes the outcome of the queued window creation, if it has happened.
    pub fn take_created_window(&mut self) -> Option<Result<Arc<Window>, OsError>> {
        self.created_window.take()
    }

    /// Records the parts of `event` the window system cares about.
    pub fn record_window_event(&mut self, id: WindowId, event: &WindowEvent) {
        match event {
            WindowEvent::CloseRequested | WindowEvent::Destroyed => {
                log::info!("Close requested for window {id:?}.");
                self.close_requested.insert(id);
            }
            WindowEvent::Resized(size) => {
                log::debug!("Window {id:?} resized to {}x{}", size.width, size.height);
                self.resized.insert(id, (size.width, size.height));
            }
            _ => {}
        }
    }

    /// Returns whether a close was requested for `id` since the last call.
    pub fn take_close_request(&mut self, id: WindowId) -> bool {
        self.close_requested.remove(&id)
    }

    /// Returns the latest size `id` was resized to since the last call.
    pub fn take_resize(&mut self, id: WindowId) -> Option<(u32, u32)> {
        self.resized.remove(&id)
    }

    /// Forgets every queued request and recorded event.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn create_pending_window(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(builder) = self.pending_window.take() {
            self.created_window = Some(builder.build(event_loop));
        }
    }
}

impl ApplicationHandler for PlatformEvents {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        self.create_pending_window(event_loop);
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, id: WindowId, event: WindowEvent) {
        self.record_window_event(id, &event);
    }

    /// Fallback for a window queued after `resumed` was already delivered.
    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        self.create_pending_window(event_loop);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalSize;

    #[test]
    fn test_close_request_is_consumed_once() {
        let id = WindowId::from(1u64);
        let mut events = PlatformEvents::default();

        events.record_window_event(id, &WindowEvent::CloseRequested);

        assert!(events.take_close_request(id));
        assert!(!events.take_close_request(id));
    }

    #[test]
    fn test_close_request_is_per_window() {
        let mut events = PlatformEvents::default();
        events.record_window_event(WindowId::from(1u64), &WindowEvent::Destroyed);

        assert!(!events.take_close_request(WindowId::from(2u64)));
        assert!(events.take_close_request(WindowId::from(1u64)));
    }

    #[test]
    fn test_latest_resize_wins() {
        let id = WindowId::from(7u64);
        let mut events = PlatformEvents::default();

        events.record_window_event(id, &WindowEvent::Resized(PhysicalSize::new(800, 600)));
        events.record_window_event(id, &WindowEvent::Resized(PhysicalSize::new(1024, 768)));

        assert_eq!(events.take_resize(id), Some((1024, 768)));
        assert_eq!(events.take_resize(id), None);
    }

    #[test]
    fn test_request_window_resets_previous_outcome() {
        let mut events = PlatformEvents::default();
        events.request_window(WinitWindowBuilder::new());

        assert!(events.take_created_window().is_none());
        events.clear();
        assert!(events.take_created_window().is_none());
        assert!(!events.take_close_request(WindowId::from(1u64)));
    }
}
