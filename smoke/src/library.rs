use std::path::{Path, PathBuf};

use crate::config::SmokeConfig;
use crate::error::SmokeError;
use crate::platform::Platform;

/// A `staticlib` and/or `cdylib` target of a workspace package.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundLibrary {
    package: String,
    name: String,
    has_staticlib: bool,
    has_cdylib: bool,
}

impl BoundLibrary {
    pub fn from_metadata(
        package: &cargo_metadata::Package,
        target: &cargo_metadata::Target,
    ) -> Option<Self> {
        Self::from_kinds(&package.name, &target.name, &target.kind)
    }

    /// Returns `None` for targets C callers cannot link against.
    fn from_kinds(package: &str, name: &str, kinds: &[String]) -> Option<Self> {
        let has_staticlib = kinds.iter().any(|k| k == "staticlib");
        let has_cdylib = kinds.iter().any(|k| k == "cdylib");
        if !has_staticlib && !has_cdylib {
            return None;
        }

        Some(BoundLibrary {
            package: package.to_string(),
            name: name.to_string(),
            has_staticlib,
            has_cdylib,
        })
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn has_cdylib(&self) -> bool {
        self.has_cdylib
    }

    fn lib_name(&self) -> String {
        self.name.replace('-', "_")
    }

    pub fn dynamic_lib_name(&self, platform: &Platform) -> String {
        platform.dynamic_lib_name(&self.lib_name())
    }

    /// File names cargo produces for this target.
    pub fn artifact_names(&self, platform: &Platform) -> Vec<String> {
        let mut names = vec![];
        if self.has_staticlib {
            names.push(platform.static_lib_name(&self.lib_name()));
        }
        if self.has_cdylib {
            names.push(self.dynamic_lib_name(platform));
        }
        names
    }
}

/// Bound libraries of the workspace members, restricted to `packages` unless
/// it is empty. Every name in `packages` must be a workspace member.
pub fn select(
    metadata: &cargo_metadata::Metadata,
    packages: &[String],
) -> Result<Vec<BoundLibrary>, SmokeError> {
    let members: Vec<_> = metadata
        .packages
        .iter()
        .filter(|p| metadata.workspace_members.contains(&p.id))
        .collect();

    let member_names: Vec<&str> = members.iter().map(|p| p.name.as_str()).collect();
    check_packages(&member_names, packages)?;

    Ok(members
        .into_iter()
        .filter(|p| packages.is_empty() || packages.contains(&p.name))
        .flat_map(|package| {
            package
                .targets
                .iter()
                .filter_map(move |t| BoundLibrary::from_metadata(package, t))
        })
        .collect())
}

fn check_packages(members: &[&str], packages: &[String]) -> Result<(), SmokeError> {
    match packages.iter().find(|p| !members.contains(&p.as_str())) {
        Some(unknown) => Err(SmokeError::UnknownPackage(unknown.clone())),
        None => Ok(()),
    }
}

/// `<target-dir>[/<triple>]/<profile-dir>`
pub fn artifact_dir(target_directory: &Path, config: &SmokeConfig) -> PathBuf {
    let mut dir = target_directory.to_path_buf();
    if let Some(target) = &config.target {
        dir.push(target);
    }
    dir.push(config.profile_dir());
    dir
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(kinds: &[&str]) -> Vec<String> {
        kinds.iter().map(|k| k.to_string()).collect()
    }

    #[test]
    fn only_linkable_targets() {
        assert!(BoundLibrary::from_kinds("pkg", "pkg", &kinds(&["lib"])).is_none());
        assert!(BoundLibrary::from_kinds("pkg", "pkg", &kinds(&["bin"])).is_none());
        assert!(BoundLibrary::from_kinds("pkg", "pkg", &kinds(&["rlib", "cdylib"])).is_some());
    }

    #[test]
    fn artifact_names_follow_platform() {
        let library = BoundLibrary::from_kinds(
            "tw-crypto-bindgen",
            "tw-crypto-bindgen",
            &kinds(&["rlib", "staticlib", "cdylib"]),
        )
        .unwrap();

        assert_eq!(library.package(), "tw-crypto-bindgen");
        assert!(library.has_cdylib());
        assert_eq!(
            library.artifact_names(&Platform::Unix),
            vec![
                "libtw_crypto_bindgen.a".to_string(),
                "libtw_crypto_bindgen.so".to_string()
            ]
        );
        assert_eq!(
            library.artifact_names(&Platform::Windows { msvc: true }),
            vec![
                "tw_crypto_bindgen.lib".to_string(),
                "tw_crypto_bindgen.dll".to_string()
            ]
        );
    }

    #[test]
    fn staticlib_only() {
        let library = BoundLibrary::from_kinds("pkg", "pkg", &kinds(&["staticlib"])).unwrap();
        assert!(!library.has_cdylib());
        assert_eq!(
            library.artifact_names(&Platform::MacOS),
            vec!["libpkg.a".to_string()]
        );
    }

    #[test]
    fn unknown_package_is_rejected() {
        let members = ["tw-crypto-bindgen", "tw-bindgen-smoke"];
        assert!(check_packages(&members, &[]).is_ok());
        assert!(check_packages(&members, &["tw-crypto-bindgen".to_string()]).is_ok());

        let requested = ["tw-crypto-bindgen".to_string(), "tw-crypto-bindgn".to_string()];
        match check_packages(&members, &requested) {
            Err(SmokeError::UnknownPackage(name)) => assert_eq!(name, "tw-crypto-bindgn"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn artifact_directory() {
        let target_dir = Path::new("/work/target");
        let mut config = SmokeConfig::default();
        assert_eq!(
            artifact_dir(target_dir, &config),
            PathBuf::from("/work/target/debug")
        );

        config.target = Some("x86_64-unknown-linux-gnu".to_string());
        config.profile = Some("release".to_string());
        assert_eq!(
            artifact_dir(target_dir, &config),
            PathBuf::from("/work/target/x86_64-unknown-linux-gnu/release")
        );
    }
}
