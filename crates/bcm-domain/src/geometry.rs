//! Geometry module - axes and faces of the rectangular solver domain

use serde::{Deserialize, Serialize};

/// Coordinate axis of the computational domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// First horizontal dimension
    X,

    /// Second horizontal dimension
    Y,

    /// Vertical dimension
    Z,
}

impl Axis {
    /// All axes in index order
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Get the axis name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }

    /// Zero-based dimension index used by the solver (x = 0, y = 1, z = 2)
    pub fn index(&self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Parse an axis from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "x" | "0" => Some(Axis::X),
            "y" | "1" => Some(Axis::Y),
            "z" | "2" => Some(Axis::Z),
            _ => None,
        }
    }
}

impl std::str::FromStr for Axis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid axis: {}", s))
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Face of the domain along an axis
///
/// - Low: the face at the minimum coordinate
/// - High: the face at the maximum coordinate
/// - Both: both faces (sponge layers only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Face {
    /// Face at the lower end of the axis
    Low,

    /// Face at the upper end of the axis
    High,

    /// Both ends of the axis
    Both,
}

impl Face {
    /// Get the face name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Face::Low => "low",
            Face::High => "high",
            Face::Both => "both",
        }
    }

    /// Parse a face from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" | "0" => Some(Face::Low),
            "high" | "1" => Some(Face::High),
            "both" => Some(Face::Both),
            _ => None,
        }
    }

    /// Whether this face names a single side of the domain
    pub fn is_single(&self) -> bool {
        !matches!(self, Face::Both)
    }

    /// Whether two faces share at least one side
    pub fn overlaps(&self, other: Face) -> bool {
        match (self, other) {
            (Face::Both, _) | (_, Face::Both) => true,
            (a, b) => *a == b,
        }
    }
}

impl std::str::FromStr for Face {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid face: {}", s))
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_index() {
        assert_eq!(Axis::X.index(), 0);
        assert_eq!(Axis::Y.index(), 1);
        assert_eq!(Axis::Z.index(), 2);
    }

    #[test]
    fn test_axis_parse() {
        assert_eq!("Z".parse::<Axis>(), Ok(Axis::Z));
        assert_eq!(Axis::parse("1"), Some(Axis::Y));
        assert!("w".parse::<Axis>().is_err());
    }

    #[test]
    fn test_face_overlaps() {
        assert!(Face::Low.overlaps(Face::Low));
        assert!(!Face::Low.overlaps(Face::High));
        assert!(Face::Both.overlaps(Face::High));
        assert!(Face::High.overlaps(Face::Both));
    }

    #[test]
    fn test_face_is_single() {
        assert!(Face::Low.is_single());
        assert!(Face::High.is_single());
        assert!(!Face::Both.is_single());
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Axis::Y).unwrap(), "\"y\"");
        assert_eq!(serde_json::to_string(&Face::Both).unwrap(), "\"both\"");
        let face: Face = serde_json::from_str("\"high\"").unwrap();
        assert_eq!(face, Face::High);
    }
}
