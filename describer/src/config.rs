use std::fmt;

/// Identifies a cluster object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectRef {
    pub api_version: String,
    pub kind: String,
    pub namespace: Option<String>,
    pub name: String,
}

impl ObjectRef {
    pub fn new(api_version: impl Into<String>, kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            api_version: api_version.into(),
            kind: kind.into(),
            namespace: None,
            name: name.into(),
        }
    }

    pub fn in_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }
}

impl fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(namespace) => write!(f, "{} {}/{}", self.kind, namespace, self.name),
            None => write!(f, "{} {}", self.kind, self.name),
        }
    }
}

/// Everything a [`TabsGenerator`](crate::TabsGenerator) needs to build the tabs of one object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TabsGeneratorConfig {
    pub object: ObjectRef,
    pub title: String,
    /// Path of the object view, relative to its section.
    pub path: String,
    pub full_path: String,
    pub cluster_scoped: bool,
}

impl TabsGeneratorConfig {
    pub fn new(object: ObjectRef) -> Self {
        let title = object.name.clone();
        let path = format!("{}/{}", object.kind.to_lowercase(), object.name);
        let full_path = match &object.namespace {
            Some(namespace) => format!("namespace/{namespace}/{path}"),
            None => format!("cluster-overview/{path}"),
        };
        Self {
            cluster_scoped: object.namespace.is_none(),
            object,
            title,
            path,
            full_path,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}
