//! Labeled training and evaluation instances.

/// One labeled instance: an integer label plus a fixed-length sequence of
/// categorical attribute codes.
///
/// Immutable after construction. Every instance in a corpus must carry the
/// same number of attributes; [`FeatureSet::from_instances`](crate::features::FeatureSet::from_instances)
/// enforces this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    label: i32,
    attributes: Vec<u32>,
}

impl Instance {
    /// Create an instance from its label and attribute values.
    pub fn new(label: i32, attributes: Vec<u32>) -> Self {
        Self { label, attributes }
    }

    /// The observed label.
    pub fn label(&self) -> i32 {
        self.label
    }

    /// The ordered categorical attribute values.
    pub fn attributes(&self) -> &[u32] {
        &self.attributes
    }
}
