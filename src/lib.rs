// Copyright 2025 dentsusoken
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

pub mod compat;
pub mod detect;
pub mod error;
pub mod family;
pub mod logging;
pub mod release;

pub use compat::is_compatible_os;
pub use detect::local::{is_linux, is_macos, local_sys_conf};
pub use detect::{HostSystem, ID_COMPONENT_SEPARATOR, SysConfiguration};
pub use error::{Result, SysidError};
pub use family::OsFamily;
pub use release::ReleaseMetadata;
