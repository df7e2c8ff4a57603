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


//! # Hello Core
//!
//! Backend-agnostic pieces of the hello-window program: the window lifecycle
//! contract, the runner that drives it, and the small types they share.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod math;
pub mod placeholder;
pub mod platform;
pub mod runner;

pub use config::WindowConfig;
pub use error::{InitializationError, RunnerError, WindowCreationError};
pub use math::LinearRgba;
pub use placeholder::{Bar, Foo};
pub use platform::{WindowDescriptor, WindowSystem};
pub use runner::{RunnerState, WindowRunner};
