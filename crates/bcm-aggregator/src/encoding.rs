//! Supported input encodings

use serde::{Deserialize, Serialize};

/// Encoding of a raw boundary-models blob
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Protobuf wire format
    #[default]
    Binary,
    /// TOML document
    Toml,
    /// JSON document
    Json,
}

impl Encoding {
    /// All encodings
    pub const ALL: [Encoding; 3] = [Encoding::Binary, Encoding::Toml, Encoding::Json];

    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Encoding::Binary => "binary",
            Encoding::Toml => "toml",
            Encoding::Json => "json",
        }
    }

    /// Whether the encoding is human-readable text
    pub fn is_text(&self) -> bool {
        !matches!(self, Encoding::Binary)
    }
}

impl std::str::FromStr for Encoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "binary" | "proto" | "protobuf" => Ok(Encoding::Binary),
            "toml" => Ok(Encoding::Toml),
            "json" => Ok(Encoding::Json),
            _ => Err(format!("Invalid encoding: {}", s)),
        }
    }
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_from_str() {
        assert_eq!("toml".parse::<Encoding>().unwrap(), Encoding::Toml);
        assert_eq!("JSON".parse::<Encoding>().unwrap(), Encoding::Json);
        assert_eq!("protobuf".parse::<Encoding>().unwrap(), Encoding::Binary);
        assert!("yaml".parse::<Encoding>().is_err());
    }

    #[test]
    fn test_encoding_display_round_trip() {
        for encoding in Encoding::ALL {
            assert_eq!(encoding.to_string().parse::<Encoding>().unwrap(), encoding);
        }
    }

    #[test]
    fn test_is_text() {
        assert!(!Encoding::Binary.is_text());
        assert!(Encoding::Toml.is_text());
        assert!(Encoding::Json.is_text());
    }
}
