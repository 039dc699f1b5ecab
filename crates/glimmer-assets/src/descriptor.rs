use std::fmt;

/// How the asset value should be interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AssetKind {
    /// A remote URI.
    Link,
    /// A resource bundled with the application.
    Local,
}

impl AssetKind {
    fn prefix(self) -> &'static str {
        match self {
            AssetKind::Link => "link",
            AssetKind::Local => "local",
        }
    }
}

/// Opaque handle to a bundled resource, as handed out by the host packager.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResourceHandle {
    pub id: u32,
    pub bundle: Option<String>,
}

impl ResourceHandle {
    pub fn new(id: u32) -> Self {
        Self { id, bundle: None }
    }

    pub fn in_bundle(id: u32, bundle: impl Into<String>) -> Self {
        Self {
            id,
            bundle: Some(bundle.into()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AssetValue {
    Uri(String),
    Resource(ResourceHandle),
}

impl AssetValue {
    pub fn as_uri(&self) -> Option<&str> {
        match self {
            AssetValue::Uri(uri) => Some(uri),
            AssetValue::Resource(_) => None,
        }
    }

    /// Serialization that is equal for equal values, independent of which
    /// instance produced it. Strings are quoted so that no two values share
    /// a key.
    fn stable_key(&self) -> String {
        match self {
            AssetValue::Uri(uri) => format!("{uri:?}"),
            AssetValue::Resource(handle) => match &handle.bundle {
                Some(bundle) => format!("resource:{bundle:?}#{}", handle.id),
                None => format!("resource:#{}", handle.id),
            },
        }
    }
}

impl From<&str> for AssetValue {
    fn from(uri: &str) -> Self {
        AssetValue::Uri(uri.to_string())
    }
}

impl From<String> for AssetValue {
    fn from(uri: String) -> Self {
        AssetValue::Uri(uri)
    }
}

impl From<ResourceHandle> for AssetValue {
    fn from(handle: ResourceHandle) -> Self {
        AssetValue::Resource(handle)
    }
}

/// What to load. Immutable for the lifetime of a mount.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AssetDescriptor {
    pub kind: AssetKind,
    pub value: AssetValue,
}

impl AssetDescriptor {
    pub fn new(kind: AssetKind, value: impl Into<AssetValue>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    pub fn link(uri: impl Into<String>) -> Self {
        Self::new(AssetKind::Link, AssetValue::Uri(uri.into()))
    }

    pub fn local(handle: ResourceHandle) -> Self {
        Self::new(AssetKind::Local, handle)
    }

    /// Cache identity: the raw URI for links, a kind-prefixed serialization
    /// of the value otherwise.
    pub fn identity(&self) -> AssetIdentity {
        match (self.kind, &self.value) {
            (AssetKind::Link, AssetValue::Uri(uri)) => AssetIdentity::Uri(uri.clone()),
            (kind, value) => AssetIdentity::Serialized(format!(
                "{}:{}",
                kind.prefix(),
                value.stable_key()
            )),
        }
    }
}

/// Key under which a loaded asset is remembered.
///
/// Raw URIs and serialized values live in separate variants, so a link
/// whose text happens to match a serialization never aliases it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AssetIdentity {
    Uri(String),
    Serialized(String),
}

impl AssetIdentity {
    pub fn as_str(&self) -> &str {
        match self {
            AssetIdentity::Uri(key) | AssetIdentity::Serialized(key) => key,
        }
    }
}

impl fmt::Display for AssetIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "tests/descriptor_tests.rs"]
mod tests;
