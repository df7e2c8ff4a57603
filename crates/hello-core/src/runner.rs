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


//! The window lifecycle driver.
//!
//! A [`WindowRunner`] walks a [`WindowSystem`] through
//! `Uninitialized → Initialized → WindowOpen → Closed → Terminated`, owning the
//! only window handle for the whole run. A failed window creation goes straight
//! to `Terminated`.

use crate::config::WindowConfig;
use crate::error::{InitializationError, RunnerError, WindowCreationError};
use crate::platform::{WindowDescriptor, WindowSystem};

/// Where a [`WindowRunner`] is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunnerState {
    /// Nothing has been started yet.
    #[default]
    Uninitialized,
    /// The windowing subsystem is up, no window yet.
    Initialized,
    /// The window is open and its context is current.
    WindowOpen,
    /// The frame loop observed the close flag.
    Closed,
    /// The subsystem has been released.
    Terminated,
}

/// Drives a [`WindowSystem`] through a single open-clear-present-close run.
pub struct WindowRunner<S: WindowSystem> {
    system: S,
    config: WindowConfig,
    window: Option<S::Window>,
    state: RunnerState,
}

impl<S: WindowSystem> WindowRunner<S> {
    /// Creates a runner for `system`. Nothing is started until [`initialize`](Self::initialize).
    pub fn new(system: S, config: WindowConfig) -> Self {
        Self {
            system,
            config,
            window: None,
            state: RunnerState::Uninitialized,
        }
    }

    /// Returns the current lifecycle state.
    pub fn state(&self) -> RunnerState {
        self.state
    }

    /// Returns the configuration this runner was created with.
    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    /// Starts the windowing subsystem.
    ///
    /// On failure the runner stays `Uninitialized` and makes no further backend calls,
    /// including on drop. A terminated runner cannot be started again.
    pub fn initialize(&mut self) -> Result<(), InitializationError> {
        match self.state {
            RunnerState::Uninitialized => {}
            RunnerState::Terminated => {
                let err = InitializationError::AlreadyTerminated;
                log::error!("{err}");
                return Err(err);
            }
            state => {
                log::warn!("initialize() called in state {state:?}; already initialized.");
                return Ok(());
            }
        }

        log::info!("Initializing windowing subsystem...");
        if let Err(e) = self.system.initialize() {
            log::error!("{e}");
            return Err(e);
        }

        self.state = RunnerState::Initialized;
        log::info!("Windowing subsystem initialized.");
        Ok(())
    }

    /// Opens the window described by `descriptor` and makes its context current.
    ///
    /// If the backend fails, the subsystem is shut down before the error is returned.
    pub fn create_window(
        &mut self,
        descriptor: &WindowDescriptor,
    ) -> Result<(), WindowCreationError> {
        match self.state {
            RunnerState::Initialized => {}
            RunnerState::WindowOpen => {
                log::warn!("create_window() called while a window is already open; ignoring.");
                return Ok(());
            }
            state => {
                log::error!("create_window() called in state {state:?}.");
                return Err(WindowCreationError::NotInitialized);
            }
        }

        log::info!(
            "Creating window '{}' ({}x{})...",
            descriptor.title,
            descriptor.width,
            descriptor.height
        );
        let mut window = match self.system.create_window(descriptor) {
            Ok(window) => window,
            Err(e) => {
                log::error!("{e}");
                self.shutdown();
                return Err(e);
            }
        };

        self.system.make_context_current(&mut window);
        self.window = Some(window);
        self.state = RunnerState::WindowOpen;
        Ok(())
    }

    /// Clears and presents frames until the window's close flag is set.
    ///
    /// Each iteration clears the color buffer, presents it, then processes pending
    /// events. Returns the number of completed iterations.
    pub fn run_loop(&mut self) -> u64 {
        let Some(window) = self.window.as_mut() else {
            log::warn!("run_loop() called in state {:?}; no window to drive.", self.state);
            return 0;
        };
        if self.state != RunnerState::WindowOpen {
            log::warn!("run_loop() called in state {:?}; ignoring.", self.state);
            return 0;
        }

        let clear_color = self.config.clear_color;
        let mut frames: u64 = 0;
        log::info!("Entering frame loop.");

        while !self.system.should_close(window) {
            self.system.clear(window, clear_color);
            self.system.swap_buffers(window);
            self.system.poll_events(window);
            frames += 1;
            log::trace!("Frame {frames} presented.");
        }

        self.state = RunnerState::Closed;
        log::info!("Window closed after {frames} frame(s).");
        frames
    }

    /// Drops the window and releases the subsystem.
    ///
    /// Idempotent: the backend is terminated at most once, and never if it was not
    /// successfully initialized.
    pub fn shutdown(&mut self) {
        match self.state {
            RunnerState::Uninitialized | RunnerState::Terminated => {}
            _ => {
                log::info!("Shutting down windowing subsystem...");
                self.window = None;
                self.system.terminate();
                self.state = RunnerState::Terminated;
                log::info!("Windowing subsystem terminated.");
            }
        }
    }

    /// Runs the whole lifecycle: initialize, open the configured window, loop until
    /// it is closed, shut down.
    ///
    /// Returns the number of frames presented.
    pub fn run(&mut self) -> Result<u64, RunnerError> {
        self.initialize()?;
        let descriptor = self.config.descriptor();
        self.create_window(&descriptor)?;
        let frames = self.run_loop();
        self.shutdown();
        Ok(frames)
    }
}

/// Shuts the subsystem down if the runner is dropped mid-lifecycle.
impl<S: WindowSystem> Drop for WindowRunner<S> {
    fn drop(&mut self) {
        if !matches!(
            self.state,
            RunnerState::Uninitialized | RunnerState::Terminated
        ) {
            log::info!("WindowRunner dropped in state {:?}; performing shutdown.", self.state);
        }
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::LinearRgba;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Initialize,
        CreateWindow(WindowDescriptor),
        MakeContextCurrent,
        ShouldClose,
        Clear(LinearRgba),
        SwapBuffers,
        PollEvents,
        Terminate,
    }

    type CallLog = Rc<RefCell<Vec<Call>>>;

    /// Records every call and closes the window after a fixed number of polls.
    struct MockSystem {
        calls: CallLog,
        fail_initialize: bool,
        fail_create_window: bool,
        close_after_polls: usize,
    }

    impl MockSystem {
        fn new(close_after_polls: usize) -> (Self, CallLog) {
            let calls = CallLog::default();
            let system = Self {
                calls: calls.clone(),
                fail_initialize: false,
                fail_create_window: false,
                close_after_polls,
            };
            (system, calls)
        }

        fn record(&self, call: Call) {
            self.calls.borrow_mut().push(call);
        }
    }

    struct MockWindow {
        polls: usize,
        close_after_polls: usize,
    }

    impl WindowSystem for MockSystem {
        type Window = MockWindow;

        fn initialize(&mut self) -> Result<(), InitializationError> {
            self.record(Call::Initialize);
            if self.fail_initialize {
                return Err(InitializationError::NoDisplay("mock".to_string()));
            }
            Ok(())
        }

        fn create_window(
            &mut self,
            descriptor: &WindowDescriptor,
        ) -> Result<MockWindow, WindowCreationError> {
            self.record(Call::CreateWindow(descriptor.clone()));
            if self.fail_create_window {
                return Err(WindowCreationError::Os("mock".to_string()));
            }
            Ok(MockWindow {
                polls: 0,
                close_after_polls: self.close_after_polls,
            })
        }

        fn make_context_current(&mut self, _window: &mut MockWindow) {
            self.record(Call::MakeContextCurrent);
        }

        fn should_close(&self, window: &MockWindow) -> bool {
            self.record(Call::ShouldClose);
            window.polls >= window.close_after_polls
        }

        fn clear(&mut self, _window: &mut MockWindow, color: LinearRgba) {
            self.record(Call::Clear(color));
        }

        fn swap_buffers(&mut self, _window: &mut MockWindow) {
            self.record(Call::SwapBuffers);
        }

        fn poll_events(&mut self, window: &mut MockWindow) {
            self.record(Call::PollEvents);
            window.polls += 1;
        }

        fn terminate(&mut self) {
            self.record(Call::Terminate);
        }
    }

    fn count(calls: &CallLog, call: &Call) -> usize {
        calls.borrow().iter().filter(|c| *c == call).count()
    }

    #[test]
    fn test_full_run_presents_until_close() {
        let (system, calls) = MockSystem::new(3);
        let mut runner = WindowRunner::new(system, WindowConfig::default());

        let frames = runner.run().expect("run should succeed");

        assert_eq!(frames, 3);
        assert_eq!(runner.state(), RunnerState::Terminated);

        let mut expected = vec![
            Call::Initialize,
            Call::CreateWindow(WindowDescriptor::new(640, 480, "Hello World")),
            Call::MakeContextCurrent,
        ];
        for _ in 0..3 {
            expected.extend([
                Call::ShouldClose,
                Call::Clear(LinearRgba::BLACK),
                Call::SwapBuffers,
                Call::PollEvents,
            ]);
        }
        expected.extend([Call::ShouldClose, Call::Terminate]);
        assert_eq!(*calls.borrow(), expected);
    }

    #[test]
    fn test_initialize_failure_makes_no_further_calls() {
        let (mut system, calls) = MockSystem::new(1);
        system.fail_initialize = true;
        let mut runner = WindowRunner::new(system, WindowConfig::default());

        let err = runner.run().unwrap_err();
        assert!(matches!(err, RunnerError::Initialization(_)));
        assert_eq!(err.exit_code(), -1);
        assert_eq!(runner.state(), RunnerState::Uninitialized);

        drop(runner);
        assert_eq!(*calls.borrow(), vec![Call::Initialize]);
    }

    #[test]
    fn test_create_window_failure_shuts_down_exactly_once() {
        let (mut system, calls) = MockSystem::new(1);
        system.fail_create_window = true;
        let mut runner = WindowRunner::new(system, WindowConfig::default());

        let err = runner.run().unwrap_err();
        assert!(matches!(err, RunnerError::WindowCreation(WindowCreationError::Os(_))));
        assert_eq!(err.exit_code(), -1);
        assert_eq!(runner.state(), RunnerState::Terminated);

        runner.shutdown();
        drop(runner);
        assert_eq!(count(&calls, &Call::Terminate), 1);
        assert_eq!(calls.borrow().last(), Some(&Call::Terminate));
        assert_eq!(count(&calls, &Call::MakeContextCurrent), 0);
    }

    #[test]
    fn test_no_frame_calls_after_close_flag() {
        let (system, calls) = MockSystem::new(2);
        let mut runner = WindowRunner::new(system, WindowConfig::default());
        runner.initialize().unwrap();
        runner.create_window(&runner.config().descriptor()).unwrap();

        assert_eq!(runner.run_loop(), 2);
        assert_eq!(runner.state(), RunnerState::Closed);

        let log = calls.borrow();
        let last_check = log
            .iter()
            .rposition(|c| *c == Call::ShouldClose)
            .expect("close flag should have been checked");
        assert_eq!(last_check, log.len() - 1);
    }

    #[test]
    fn test_window_closed_before_first_frame() {
        let (system, calls) = MockSystem::new(0);
        let mut runner = WindowRunner::new(system, WindowConfig::default());

        assert_eq!(runner.run(), Ok(0));
        assert_eq!(count(&calls, &Call::SwapBuffers), 0);
        assert_eq!(count(&calls, &Call::PollEvents), 0);
    }

    #[test]
    fn test_clear_uses_configured_color() {
        let (system, calls) = MockSystem::new(1);
        let config = WindowConfig::default().with_clear_color(LinearRgba::rgb(0.2, 0.3, 0.3));
        let mut runner = WindowRunner::new(system, config);

        runner.run().unwrap();
        assert_eq!(count(&calls, &Call::Clear(LinearRgba::rgb(0.2, 0.3, 0.3))), 1);
    }

    #[test]
    fn test_create_window_before_initialize_is_rejected() {
        let (system, calls) = MockSystem::new(1);
        let mut runner = WindowRunner::new(system, WindowConfig::default());

        let err = runner
            .create_window(&WindowDescriptor::new(1, 1, "x"))
            .unwrap_err();
        assert_eq!(err, WindowCreationError::NotInitialized);
        assert_eq!(runner.state(), RunnerState::Uninitialized);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_run_loop_without_window_does_nothing() {
        let (system, calls) = MockSystem::new(5);
        let mut runner = WindowRunner::new(system, WindowConfig::default());
        runner.initialize().unwrap();

        assert_eq!(runner.run_loop(), 0);
        assert_eq!(runner.state(), RunnerState::Initialized);
        assert_eq!(*calls.borrow(), vec![Call::Initialize]);
    }

    #[test]
    fn test_drop_shuts_down_open_window() {
        let (system, calls) = MockSystem::new(1);
        let mut runner = WindowRunner::new(system, WindowConfig::default());
        runner.initialize().unwrap();
        runner.create_window(&runner.config().descriptor()).unwrap();
        assert_eq!(runner.state(), RunnerState::WindowOpen);

        drop(runner);
        assert_eq!(count(&calls, &Call::Terminate), 1);
    }

    #[test]
    fn test_initialize_after_terminate_is_rejected() {
        let (system, calls) = MockSystem::new(1);
        let mut runner = WindowRunner::new(system, WindowConfig::default());
        runner.run().unwrap();
        assert_eq!(runner.state(), RunnerState::Terminated);

        let err = runner.run().unwrap_err();
        assert_eq!(
            err,
            RunnerError::Initialization(InitializationError::AlreadyTerminated)
        );
        assert_eq!(runner.state(), RunnerState::Terminated);
        assert_eq!(count(&calls, &Call::Initialize), 1);
        assert_eq!(count(&calls, &Call::Terminate), 1);
    }

    #[test]
    fn test_second_initialize_is_ignored() {
        let (system, calls) = MockSystem::new(1);
        let mut runner = WindowRunner::new(system, WindowConfig::default());

        runner.initialize().unwrap();
        runner.initialize().unwrap();
        assert_eq!(count(&calls, &Call::Initialize), 1);
    }
}
