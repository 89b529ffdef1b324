/// One tab of a rendered object view.
///
/// The describer never looks inside a component; it only hands them on.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Component {
    pub kind: String,
    pub title: String,
    /// Name of the field holding this tab in the content response.
    pub accessor: String,
}

impl Component {
    pub fn new(kind: impl Into<String>, title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            kind: kind.into(),
            accessor: title.to_lowercase().replace(' ', "_"),
            title,
        }
    }
}

/// What the describer answers for one object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContentResponse {
    pub title: String,
    pub components: Vec<Component>,
}
