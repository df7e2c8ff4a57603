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


//! Error types for the window lifecycle.
//!
//! Only two failures are fatal: the windowing subsystem refusing to start and
//! the window refusing to open. Everything after that is treated as infallible
//! by the runner.

use std::fmt;

/// The windowing/graphics subsystem could not be started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitializationError {
    /// No display server or compositor could be reached.
    NoDisplay(String),
    /// The platform layer reported a failure while starting up.
    Platform(String),
    /// The runner already shut its subsystem down and cannot start it again.
    AlreadyTerminated,
}

impl fmt::Display for InitializationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitializationError::NoDisplay(msg) => {
                write!(f, "No display available for the windowing subsystem: {msg}")
            }
            InitializationError::Platform(msg) => {
                write!(f, "Failed to initialize the windowing subsystem: {msg}")
            }
            InitializationError::AlreadyTerminated => write!(
                f,
                "The windowing subsystem was already terminated and cannot be restarted."
            ),
        }
    }
}

impl std::error::Error for InitializationError {}

/// A window handle could not be produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowCreationError {
    /// `create_window` was called before the subsystem was initialized.
    NotInitialized,
    /// The platform refused to create the window.
    Os(String),
    /// The event loop stopped before the window could be created.
    EventLoopExited,
    /// The window opened but its graphics context could not be set up.
    Graphics(String),
}

impl fmt::Display for WindowCreationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowCreationError::NotInitialized => {
                write!(f, "Cannot create a window before the subsystem is initialized.")
            }
            WindowCreationError::Os(msg) => {
                write!(f, "The platform refused to create the window: {msg}")
            }
            WindowCreationError::EventLoopExited => write!(
                f,
                "The event loop exited before the window could be created."
            ),
            WindowCreationError::Graphics(msg) => {
                write!(f, "Failed to set up the window's graphics context: {msg}")
            }
        }
    }
}

impl std::error::Error for WindowCreationError {}

/// Any fatal failure of a [`WindowRunner`](crate::runner::WindowRunner) run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunnerError {
    /// See [`InitializationError`].
    Initialization(InitializationError),
    /// See [`WindowCreationError`].
    WindowCreation(WindowCreationError),
}

impl RunnerError {
    /// Process exit status reported for a fatal failure.
    pub const EXIT_CODE: i32 = -1;

    /// Returns the process exit code this failure maps to.
    ///
    /// Both failure kinds are reported the same way; the detail only goes to the log.
    pub fn exit_code(&self) -> i32 {
        Self::EXIT_CODE
    }
}

impl fmt::Display for RunnerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunnerError::Initialization(err) => write!(f, "Initialization failed: {err}"),
            RunnerError::WindowCreation(err) => write!(f, "Window creation failed: {err}"),
        }
    }
}

impl std::error::Error for RunnerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RunnerError::Initialization(err) => Some(err),
            RunnerError::WindowCreation(err) => Some(err),
        }
    }
}

impl From<InitializationError> for RunnerError {
    fn from(err: InitializationError) -> Self {
        RunnerError::Initialization(err)
    }
}

impl From<WindowCreationError> for RunnerError {
    fn from(err: WindowCreationError) -> Self {
        RunnerError::WindowCreation(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_runner_error_source_chain() {
        let err: RunnerError = WindowCreationError::Os("refused".to_string()).into();
        let source = err.source().expect("window creation error should be the source");
        assert_eq!(
            source.to_string(),
            "The platform refused to create the window: refused"
        );
    }

    #[test]
    fn test_every_failure_maps_to_non_zero_exit() {
        let init: RunnerError = InitializationError::NoDisplay(":0".to_string()).into();
        let window: RunnerError = WindowCreationError::EventLoopExited.into();

        assert_eq!(init.exit_code(), -1);
        assert_eq!(window.exit_code(), -1);
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            InitializationError::Platform("boom".to_string()).to_string(),
            "Failed to initialize the windowing subsystem: boom"
        );
        assert_eq!(
            RunnerError::from(WindowCreationError::NotInitialized).to_string(),
            "Window creation failed: Cannot create a window before the subsystem is initialized."
        );
    }
}
