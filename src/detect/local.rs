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

use crate::detect::{HostSystem, SysConfiguration};
use crate::error::Result;
use std::path::Path;
use std::sync::{Mutex, OnceLock};

/// Resolved configuration of the running host, computed at most once per
/// process lifetime. The host's identity is assumed immutable, so there is
/// no refresh operation.
static LOCAL_SYSTEM: OnceLock<SysConfiguration> = OnceLock::new();

/// Serializes the first resolution so concurrent callers never race it.
static RESOLVE_LOCK: Mutex<()> = Mutex::new(());

/// The memoized configuration of the host this process runs on.
///
/// The first successful call reads the real filesystem root; every later
/// call returns the stored value without touching the filesystem. A failed
/// resolution is returned to the caller and not cached, so a subsequent
/// call retries. To resolve against an arbitrary root instead, use
/// [`SysConfiguration::from_local_system`] directly.
pub fn local_sys_conf() -> Result<&'static SysConfiguration> {
    if let Some(conf) = LOCAL_SYSTEM.get() {
        return Ok(conf);
    }

    let _guard = RESOLVE_LOCK.lock().unwrap();
    if let Some(conf) = LOCAL_SYSTEM.get() {
        return Ok(conf);
    }

    let conf = SysConfiguration::from_local_system(Path::new("/"))?;
    Ok(LOCAL_SYSTEM.get_or_init(|| conf))
}

pub fn is_linux() -> bool {
    HostSystem::current() == HostSystem::Linux
}

pub fn is_macos() -> bool {
    HostSystem::current() == HostSystem::Darwin
}
