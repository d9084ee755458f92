// SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
//
// SPDX-License-Identifier: MIT

use std::process::Command;

fn main() {
    println!("cargo::rerun-if-changed=.git/HEAD");
    let output = Command::new("git").args(["describe", "--tags", "--long"]).output();
    let version = match output {
        Ok(output) if output.status.success() => {
            let rev = String::from_utf8_lossy(&output.stdout).trim().to_owned();
            if rev.is_empty() {
                env!("CARGO_PKG_VERSION").to_owned()
            } else {
                rev
            }
        },
        _ => env!("CARGO_PKG_VERSION").to_owned(),
    };
    println!("cargo:rustc-env=GIT_DESCRIBE_OR_CARGO_PKG_VERSION={}", version);
}
