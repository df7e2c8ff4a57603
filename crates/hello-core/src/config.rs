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


//! Compiled-in settings for the window the runner opens.

use crate::math::LinearRgba;
use crate::platform::WindowDescriptor;

/// Default inner width of the window, in pixels.
pub const DEFAULT_WIDTH: u32 = 640;
/// Default inner height of the window, in pixels.
pub const DEFAULT_HEIGHT: u32 = 480;
/// Default window title.
pub const DEFAULT_TITLE: &str = "Hello World";

/// Settings for the single window opened by a [`WindowRunner`](crate::runner::WindowRunner).
#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    /// Inner width in pixels.
    pub width: u32,
    /// Inner height in pixels.
    pub height: u32,
    /// Title bar text.
    pub title: String,
    /// Background the color buffer is cleared to every frame.
    pub clear_color: LinearRgba,
}

impl WindowConfig {
    /// Creates the default configuration: 640x480, "Hello World", black background.
    pub fn new() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            title: DEFAULT_TITLE.to_string(),
            clear_color: LinearRgba::BLACK,
        }
    }

    /// Sets the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the inner dimensions of the window.
    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the background color.
    pub fn with_clear_color(mut self, color: LinearRgba) -> Self {
        self.clear_color = color;
        self
    }

    /// Builds the window creation request for this configuration.
    pub fn descriptor(&self) -> WindowDescriptor {
        WindowDescriptor::new(self.width, self.height, self.title.clone())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_window_is_hello_world_640x480() {
        let config = WindowConfig::default();
        assert_eq!(
            config.descriptor(),
            WindowDescriptor::new(640, 480, "Hello World")
        );
        assert_eq!(config.clear_color, LinearRgba::BLACK);
    }

    #[test]
    fn test_builder_overrides() {
        let config = WindowConfig::new()
            .with_title("Other")
            .with_dimensions(800, 600)
            .with_clear_color(LinearRgba::WHITE);

        assert_eq!(config.width, 800);
        assert_eq!(config.height, 600);
        assert_eq!(config.descriptor().title, "Other");
        assert_eq!(config.clear_color, LinearRgba::WHITE);
    }
}
