// (C) Copyright IBM Corp. 2025.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::process::ExitCode;

use clap::Parser;
use log::error;

use comva::{logger, run, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = logger::init(cli.log_level()) {
        eprintln!("Cannot install logger: {e}");
    }

    match run(&cli, &cli.encoders()) {
        Ok(Some(report)) => {
            println!("Operation completed. {}", report.summary());
            ExitCode::SUCCESS
        }
        Ok(None) => {
            println!("Operation completed. Nothing to do.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
