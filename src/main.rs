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

use clap::Parser;
use std::path::PathBuf;
use sysid::detect::{ID_COMPONENT_SEPARATOR, SysConfiguration};
use sysid::error::{Result, format_error_chain, get_exit_code};
use sysid::local_sys_conf;
use sysid::logging;

#[derive(Parser)]
#[command(name = "sysid")]
#[command(author, version, about = "Identify the host OS for packaging", long_about = None)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Extra identifier component inserted between the OS name and the
    /// architecture (repeatable, e.g. --mid-part clang11)
    #[arg(long = "mid-part", value_name = "PART")]
    mid_parts: Vec<String>,

    /// Separator between identifier components
    #[arg(long, value_name = "SEP", default_value = ID_COMPONENT_SEPARATOR)]
    separator: String,

    /// Resolve against an alternate filesystem root instead of /
    #[arg(long, value_name = "DIR")]
    root: Option<PathBuf>,

    /// Output the full resolved configuration as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    logging::setup_logger(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("{}", format_error_chain(&e));
        std::process::exit(get_exit_code(&e));
    }
}

fn run(cli: &Cli) -> Result<()> {
    // An explicit root bypasses the process-wide cache; the plain
    // invocation resolves the real host once and memoizes it.
    let resolved;
    let conf: &SysConfiguration = match &cli.root {
        Some(root) => {
            resolved = SysConfiguration::from_local_system(root)?;
            &resolved
        }
        None => local_sys_conf()?,
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(conf)?);
        return Ok(());
    }

    let mid_parts: Vec<&str> = cli.mid_parts.iter().map(String::as_str).collect();
    println!("{}", conf.id_for_packaging(&mid_parts, &cli.separator)?);
    Ok(())
}
