use crate::checks::license_header::LicenseTemplate;
use crate::checks::markers::MarkerSet;
use crate::model::{LockedPackage, LockfileModel, SourceFile, WorkspaceVersionPair};
use codecheck_types::RepoPath;

pub const TEMPLATE: [&str; 15] = [
    r"// Copyright \(c\) 202[0-9](-202[0-9])? .+",
    r"// opensource@mintlayer\.org",
    r"// SPDX-License-Identifier: MIT",
    r"// Licensed under the MIT License;",
    r"// you may not use this file except in compliance with the License\.",
    r"// You may obtain a copy of the License at",
    r"//",
    r"// https://github.com/mintlayer/mintlayer-core/blob/master/LICENSE",
    r"//",
    r"// Unless required by applicable law or agreed to in writing, software",
    r#"// distributed under the License is distributed on an "AS IS" BASIS,"#,
    r"// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied\.",
    r"// See the License for the specific language governing permissions and",
    r"// limitations under the License\.",
    r"|//",
];

/// Header lines satisfying `TEMPLATE` (without the optional trailing entry).
pub const HEADER: [&str; 14] = [
    "// Copyright (c) 2021-2023 RBB S.r.l",
    "// opensource@mintlayer.org",
    "// SPDX-License-Identifier: MIT",
    "// Licensed under the MIT License;",
    "// you may not use this file except in compliance with the License.",
    "// You may obtain a copy of the License at",
    "//",
    "// https://github.com/mintlayer/mintlayer-core/blob/master/LICENSE",
    "//",
    "// Unless required by applicable law or agreed to in writing, software",
    r#"// distributed under the License is distributed on an "AS IS" BASIS,"#,
    "// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.",
    "// See the License for the specific language governing permissions and",
    "// limitations under the License.",
];

pub const MARKERS: [&str; 3] = ["TODO(PR)", "FIXME", "todo!()"];

pub fn template() -> LicenseTemplate {
    LicenseTemplate::compile(&TEMPLATE).expect("template compiles")
}

pub fn markers() -> MarkerSet {
    MarkerSet::new(&MARKERS).expect("markers compile")
}

pub fn header_lines() -> Vec<String> {
    HEADER.iter().map(|l| l.to_string()).collect()
}

/// A file with the header followed by `body`.
pub fn licensed(body: &str) -> String {
    format!("{}\n\n{}", HEADER.join("\n"), body)
}

pub fn source(path: &str, text: &str) -> SourceFile {
    SourceFile::new(path, text)
}

pub fn lockfile(packages: &[(&str, &str)]) -> LockfileModel {
    LockfileModel {
        packages: packages
            .iter()
            .map(|(name, version)| LockedPackage {
                name: name.to_string(),
                version: version.to_string(),
            })
            .collect(),
    }
}

pub fn version_pair(package: &str, workspace: &str) -> WorkspaceVersionPair {
    WorkspaceVersionPair {
        manifest: RepoPath::new("Cargo.toml"),
        package_version: package.to_string(),
        workspace_version: workspace.to_string(),
    }
}
