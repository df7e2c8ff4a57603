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


//! Stand-in value types with no behavior of their own.
//!
//! They exist so the binary has something to construct and call before the
//! window opens. Give them a real capability contract before growing them.

/// A zero-state placeholder.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Foo;

impl Foo {
    /// Creates a new `Foo`.
    pub const fn new() -> Self {
        Foo
    }

    /// Does nothing.
    #[inline]
    pub fn do_nothing(&self) {}
}

/// A zero-state placeholder.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bar;

impl Bar {
    /// Creates a new `Bar`.
    pub const fn new() -> Self {
        Bar
    }

    /// Does nothing.
    #[inline]
    pub fn do_nothing(&self) {}
}
