//! Shared test utilities for the codecheck workspace.
//!
//! Several crates (repo, app, cli) need to build throwaway source trees on disk,
//! so the helpers live here rather than behind `#[cfg(test)]` in one of them.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// A license header accepted by the built-in template.
pub const LICENSE_HEADER: &str = r#"// Copyright (c) 2021-2023 RBB S.r.l
// opensource@mintlayer.org
// SPDX-License-Identifier: MIT
// Licensed under the MIT License;
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// https://github.com/mintlayer/mintlayer-core/blob/master/LICENSE
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
"#;

/// Root manifest whose package and workspace versions agree.
pub const COMPLIANT_MANIFEST: &str = r#"[package]
name = "mintlayer-core"
version = "0.1.0"
edition = "2021"

[workspace]
members = ["common"]

[workspace.package]
version = "0.1.0"
"#;

/// Lockfile with exactly one version of each single-version crate.
pub const COMPLIANT_LOCKFILE: &str = r#"# This file is automatically @generated by Cargo.
# It is not intended for manual editing.
version = 3

[[package]]
name = "common"
version = "0.1.0"
dependencies = [
 "parity-scale-codec",
]

[[package]]
name = "parity-scale-codec"
version = "3.6.5"
source = "registry+https://github.com/rust-lang/crates.io-index"
dependencies = [
 "parity-scale-codec-derive",
]

[[package]]
name = "parity-scale-codec-derive"
version = "3.6.5"
source = "registry+https://github.com/rust-lang/crates.io-index"
"#;

/// `body` preceded by an accepted license header and a blank line.
pub fn licensed(body: &str) -> String {
    format!("{LICENSE_HEADER}\n{body}")
}

/// A temporary repository root, removed on drop.
pub struct TestRepo {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl TestRepo {
    pub fn empty() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf8 tempdir");
        Self { _dir: dir, root }
    }

    /// A tree that passes every built-in check.
    pub fn compliant() -> Self {
        let repo = Self::empty();
        repo.write("Cargo.toml", COMPLIANT_MANIFEST)
            .write("Cargo.lock", COMPLIANT_LOCKFILE)
            .write("src/lib.rs", &licensed("pub mod codec;\n"))
            .write("src/codec.rs", &licensed("pub use serialization::Encode;\n"))
            .write(
                "common/src/lib.rs",
                &licensed("pub fn id(x: u32) -> u32 {\n    x\n}\n"),
            );
        repo
    }

    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Write `contents` to `rel`, creating parent directories.
    pub fn write(&self, rel: &str, contents: &str) -> &Self {
        let path = self.root.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dirs");
        }
        std::fs::write(&path, contents).expect("write file");
        self
    }

    pub fn remove(&self, rel: &str) -> &Self {
        std::fs::remove_file(self.root.join(rel)).expect("remove file");
        self
    }
}
