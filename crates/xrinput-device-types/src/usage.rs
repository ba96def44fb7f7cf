//! Feature usages and their semantic value types.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Backing value type of a feature usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SemanticType {
    Bool,
    UInt32,
    Float,
    Vector2,
    Vector3,
    Quaternion,
}

impl SemanticType {
    pub const ALL: [SemanticType; 6] = [
        SemanticType::Bool,
        SemanticType::UInt32,
        SemanticType::Float,
        SemanticType::Vector2,
        SemanticType::Vector3,
        SemanticType::Quaternion,
    ];
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SemanticType::Bool => write!(f, "bool"),
            SemanticType::UInt32 => write!(f, "uint"),
            SemanticType::Float => write!(f, "float"),
            SemanticType::Vector2 => write!(f, "Vector2"),
            SemanticType::Vector3 => write!(f, "Vector3"),
            SemanticType::Quaternion => write!(f, "Quaternion"),
        }
    }
}

/// A named, typed reading exposed by a device.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeatureUsage {
    pub name: String,
    #[serde(rename = "type")]
    pub value_type: SemanticType,
}

impl FeatureUsage {
    pub fn new(name: impl Into<String>, value_type: SemanticType) -> Self {
        Self {
            name: name.into(),
            value_type,
        }
    }

    pub fn bool(name: impl Into<String>) -> Self {
        Self::new(name, SemanticType::Bool)
    }

    pub fn uint(name: impl Into<String>) -> Self {
        Self::new(name, SemanticType::UInt32)
    }

    pub fn float(name: impl Into<String>) -> Self {
        Self::new(name, SemanticType::Float)
    }

    pub fn vector2(name: impl Into<String>) -> Self {
        Self::new(name, SemanticType::Vector2)
    }

    pub fn vector3(name: impl Into<String>) -> Self {
        Self::new(name, SemanticType::Vector3)
    }

    pub fn quaternion(name: impl Into<String>) -> Self {
        Self::new(name, SemanticType::Quaternion)
    }
}

impl fmt::Display for FeatureUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value_type)
    }
}
