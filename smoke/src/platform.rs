use platforms::target::{Env, OS};

use crate::error::SmokeError;

/// File naming conventions of the platform the bound library is built for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    Windows { msvc: bool },
    MacOS,
    Unix,
}

impl Platform {
    /// Resolves `triple`, or the host when no target was given.
    pub fn from_target(triple: Option<&str>) -> Result<Self, SmokeError> {
        match triple {
            Some(triple) => platforms::Platform::find(triple)
                .map(Self::from_cargo_target)
                .ok_or_else(|| SmokeError::UnknownTarget(triple.to_string())),
            None => Ok(Self::host()),
        }
    }

    fn from_cargo_target(cargo_target: &platforms::Platform) -> Self {
        match cargo_target.target_os {
            OS::Windows => Platform::Windows {
                msvc: cargo_target.target_env == Some(Env::Msvc),
            },
            OS::MacOS => Platform::MacOS,
            _ => Platform::Unix,
        }
    }

    fn host() -> Self {
        if cfg!(windows) {
            Platform::Windows {
                msvc: cfg!(target_env = "msvc"),
            }
        } else if cfg!(target_os = "macos") {
            Platform::MacOS
        } else {
            Platform::Unix
        }
    }

    pub fn is_windows(&self) -> bool {
        matches!(self, Platform::Windows { .. })
    }

    pub fn is_msvc(&self) -> bool {
        matches!(self, Platform::Windows { msvc: true })
    }

    pub fn static_lib_name(&self, lib_name: &str) -> String {
        if self.is_msvc() {
            format!("{}.lib", lib_name)
        } else {
            format!("lib{}.a", lib_name)
        }
    }

    pub fn dynamic_lib_name(&self, lib_name: &str) -> String {
        if self.is_windows() {
            format!("{}.dll", lib_name)
        } else if *self == Platform::MacOS {
            format!("lib{}.dylib", lib_name)
        } else {
            format!("lib{}.so", lib_name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_triples() {
        assert_eq!(
            Platform::from_target(Some("x86_64-unknown-linux-gnu")).unwrap(),
            Platform::Unix
        );
        assert_eq!(
            Platform::from_target(Some("x86_64-apple-darwin")).unwrap(),
            Platform::MacOS
        );
        assert_eq!(
            Platform::from_target(Some("x86_64-pc-windows-msvc")).unwrap(),
            Platform::Windows { msvc: true }
        );
        assert_eq!(
            Platform::from_target(Some("x86_64-pc-windows-gnu")).unwrap(),
            Platform::Windows { msvc: false }
        );
    }

    #[test]
    fn unknown_triple() {
        match Platform::from_target(Some("not-a-real-triple")) {
            Err(SmokeError::UnknownTarget(triple)) => assert_eq!(triple, "not-a-real-triple"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn library_file_names() {
        let msvc = Platform::Windows { msvc: true };
        let gnu = Platform::Windows { msvc: false };

        assert_eq!(Platform::Unix.dynamic_lib_name("tw"), "libtw.so");
        assert_eq!(Platform::MacOS.dynamic_lib_name("tw"), "libtw.dylib");
        assert_eq!(msvc.dynamic_lib_name("tw"), "tw.dll");
        assert_eq!(msvc.static_lib_name("tw"), "tw.lib");
        assert_eq!(gnu.static_lib_name("tw"), "libtw.a");
        assert!(gnu.is_windows() && !gnu.is_msvc());
    }
}
