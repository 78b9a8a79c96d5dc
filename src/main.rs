// Copyright (c) 2026, Anthony DeDominic <adedomin@gmail.com>
//
// Permission to use, copy, modify, and/or distribute this software for any
// purpose with or without fee is hereby granted, provided that the above
// copyright notice and this permission notice appear in all copies.
//
// THE SOFTWARE IS PROVIDED "AS IS" AND THE AUTHOR DISCLAIMS ALL WARRANTIES
// WITH REGARD TO THIS SOFTWARE INCLUDING ALL IMPLIED WARRANTIES OF
// MERCHANTABILITY AND FITNESS. IN NO EVENT SHALL THE AUTHOR BE LIABLE FOR
// ANY SPECIAL, DIRECT, INDIRECT, OR CONSEQUENTIAL DAMAGES OR ANY DAMAGES
// WHATSOEVER RESULTING FROM LOSS OF USE, DATA OR PROFITS, WHETHER IN AN
// ACTION OF CONTRACT, NEGLIGENCE OR OTHER TORTIOUS ACTION, ARISING OUT OF
// OR IN CONNECTION WITH THE USE OR PERFORMANCE OF THIS SOFTWARE.
use std::process::exit;

use crate::config::get_config;
mod config;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let (config, files) = match get_config() {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!(
                "{e}\n\nusage: {} [ -c config.json ] FILE...",
                env!("CARGO_PKG_NAME")
            );
            exit(1);
        }
    };
    let mut failed = false;
    for file in files {
        match config.classify(&file) {
            Ok(mime) => println!("{}: {mime}", file.display()),
            Err(e) => {
                log::error!("{e}");
                failed = true;
                if config.fail_fast {
                    break;
                }
            }
        }
    }
    if failed {
        exit(1);
    }
}
