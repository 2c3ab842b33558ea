//! Target framework monikers (TFMs) and their decoder.
//!
//! A project lists the frameworks it builds against in `TargetFramework` or
//! `TargetFrameworks`, using short monikers such as `net48`, `netstandard2.0`,
//! `netcoreapp3.1` or `net8.0-windows7.0`. This module decodes one moniker at a time into a
//! [`Framework`].
//!
//! # Grammar
//!
//! The decoder checks three prefixes in order: `netstandard`, `netcoreapp`, then `net`.
//!
//! - `netstandard<version>` → [`FrameworkType::NetStandard`]
//! - `netcoreapp<version>` → [`FrameworkType::NetCore`]
//! - `net<version>[-<platform><platform-version>]` → [`FrameworkType::NetFramework`]
//!
//! A framework `<version>` is either two dot-separated integers (`6.0`) or a compact number
//! of at least two digits whose first digit is the major version and whose remainder is the
//! minor version (`48` → 4.8, `472` → 4.72). A `<platform-version>` only accepts the dotted
//! two-component form.
//!
//! Tokens that do not decode are dropped without an error: a project may list several
//! frameworks and partial understanding is acceptable. A platform version that does not decode
//! keeps the framework, with the platform version components left at `-1`.
//!
//! # Examples
//!
//! ```rust
//! use slnscope::{Framework, FrameworkMoniker, FrameworkType};
//!
//! let framework = Framework::parse("net8.0-windows7.0").unwrap();
//! assert_eq!(framework.framework_type(), FrameworkType::NetFramework);
//! assert_eq!((framework.major(), framework.minor()), (8, 0));
//! assert_eq!(framework.moniker(), FrameworkMoniker::Windows);
//! assert_eq!((framework.moniker_major(), framework.moniker_minor()), (7, 0));
//!
//! assert!(Framework::parse("uap10.0").is_none());
//! ```

use std::fmt;

use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

const NET_STANDARD_PREFIX: &str = "netstandard";
const NET_CORE_PREFIX: &str = "netcoreapp";
const NET_PREFIX: &str = "net";

/// Family of a target framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
pub enum FrameworkType {
    /// Not determined.
    #[default]
    None,
    /// `net*`: .NET Framework, and .NET 5 and later.
    NetFramework,
    /// `netstandard*`
    NetStandard,
    /// `netcoreapp*`
    NetCore,
}

/// Operating system specific suffix of a target framework moniker.
///
/// Names are the lowercase spellings used inside monikers (`-windows`, `-android`, ...).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum FrameworkMoniker {
    /// No platform suffix.
    #[default]
    None,
    /// `-android`
    Android,
    /// `-ios`
    Ios,
    /// `-macos`
    Macos,
    /// `-tvos`
    Tvos,
    /// `-watchos`
    Watchos,
    /// `-windows`
    Windows,
}

/// One decoded target framework.
///
/// Version components that could not be determined hold `-1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Framework {
    name: String,
    framework_type: FrameworkType,
    major: i32,
    minor: i32,
    moniker: FrameworkMoniker,
    moniker_major: i32,
    moniker_minor: i32,
}

impl Framework {
    /// Creates a framework from already decoded parts.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        framework_type: FrameworkType,
        major: i32,
        minor: i32,
        moniker: FrameworkMoniker,
        moniker_major: i32,
        moniker_minor: i32,
    ) -> Self {
        Framework {
            name: name.into(),
            framework_type,
            major,
            minor,
            moniker,
            moniker_major,
            moniker_minor,
        }
    }

    /// Decodes a single target framework moniker.
    ///
    /// Returns `None` if the token does not match any known framework family or its version
    /// cannot be decoded.
    #[must_use]
    pub fn parse(name: &str) -> Option<Framework> {
        if let Some(version) = name.strip_prefix(NET_STANDARD_PREFIX) {
            let (major, minor) = parse_net_version(version)?;
            return Some(Self::without_platform(name, FrameworkType::NetStandard, major, minor));
        }

        if let Some(version) = name.strip_prefix(NET_CORE_PREFIX) {
            let (major, minor) = parse_net_version(version)?;
            return Some(Self::without_platform(name, FrameworkType::NetCore, major, minor));
        }

        if name.starts_with(NET_PREFIX) {
            return Self::parse_net(name);
        }

        None
    }

    fn without_platform(name: &str, framework_type: FrameworkType, major: i32, minor: i32) -> Self {
        Framework::new(
            name,
            framework_type,
            major,
            minor,
            FrameworkMoniker::None,
            -1,
            -1,
        )
    }

    fn parse_net(name: &str) -> Option<Framework> {
        let mut framework_text = name;
        let mut platform = None;

        for moniker in FrameworkMoniker::iter().filter(|m| *m != FrameworkMoniker::None) {
            let moniker_name: &'static str = moniker.into();
            let pattern = format!("-{moniker_name}");

            if let Some(index) = name.find(&pattern).filter(|index| *index > 0) {
                framework_text = &name[..index];
                platform = Some((moniker, &name[index + 1..]));
                break;
            }
        }

        let (major, minor) = parse_net_version(&framework_text[NET_PREFIX.len()..])?;

        let Some((moniker, platform_text)) = platform else {
            return Some(Self::without_platform(name, FrameworkType::NetFramework, major, minor));
        };

        let moniker_name: &'static str = moniker.into();
        let (moniker_major, moniker_minor) =
            parse_moniker_version(&platform_text[moniker_name.len()..]).unwrap_or((-1, -1));

        Some(Framework::new(
            name,
            FrameworkType::NetFramework,
            major,
            minor,
            moniker,
            moniker_major,
            moniker_minor,
        ))
    }

    /// Returns the moniker exactly as written in the project file.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the framework family.
    #[must_use]
    pub fn framework_type(&self) -> FrameworkType {
        self.framework_type
    }

    /// Returns the major version, or `-1` if not determined.
    #[must_use]
    pub fn major(&self) -> i32 {
        self.major
    }

    /// Returns the minor version, or `-1` if not determined.
    #[must_use]
    pub fn minor(&self) -> i32 {
        self.minor
    }

    /// Returns the platform suffix, [`FrameworkMoniker::None`] when absent.
    #[must_use]
    pub fn moniker(&self) -> FrameworkMoniker {
        self.moniker
    }

    /// Returns the platform major version, or `-1` if absent or not decodable.
    #[must_use]
    pub fn moniker_major(&self) -> i32 {
        self.moniker_major
    }

    /// Returns the platform minor version, or `-1` if absent or not decodable.
    #[must_use]
    pub fn moniker_minor(&self) -> i32 {
        self.moniker_minor
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Parses a framework version: `<major>.<minor>` or the compact `<digit><minor>` form.
fn parse_net_version(text: &str) -> Option<(i32, i32)> {
    let parts: Vec<&str> = text.split('.').collect();

    match parts.as_slice() {
        [major, minor] => Some((major.parse().ok()?, minor.parse().ok()?)),
        [compact] if compact.chars().count() > 1 => {
            let split = compact.chars().next()?.len_utf8();
            let (major, minor) = compact.split_at(split);
            Some((major.parse().ok()?, minor.parse().ok()?))
        }
        _ => None,
    }
}

/// Parses a platform version, which only accepts `<major>.<minor>`.
fn parse_moniker_version(text: &str) -> Option<(i32, i32)> {
    let parts: Vec<&str> = text.split('.').collect();

    match parts.as_slice() {
        [major, minor] => Some((major.parse().ok()?, minor.parse().ok()?)),
        _ => None,
    }
}
