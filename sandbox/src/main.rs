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


// Hello Window sandbox
// Opens a 640x480 window and clears it every frame until it is closed.

use hello_core::{Bar, Foo, WindowConfig, WindowRunner};
use hello_infra::WinitWindowSystem;

fn main() {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info"))
        .filter_module("wgpu_hal", log::LevelFilter::Error)
        .init();

    let foo = Foo::new();
    let bar = Bar::new();
    foo.do_nothing();
    bar.do_nothing();

    let mut runner = WindowRunner::new(WinitWindowSystem::new(), WindowConfig::default());
    let code = match runner.run() {
        Ok(frames) => {
            log::info!("Exited cleanly after {frames} frame(s).");
            0
        }
        Err(e) => {
            log::error!("{e}");
            e.exit_code()
        }
    };

    // Release the window system before exiting; `process::exit` skips destructors.
    drop(runner);
    std::process::exit(code);
}
