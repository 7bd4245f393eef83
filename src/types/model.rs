use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Represents a Generative Language model identifier.
///
/// This can be a predefined model version or a custom string value
/// for models that may be added in the future.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    /// Known model versions
    Known(KnownModel),

    /// Custom model identifier (for future models or private models)
    Custom(String),
}

/// Known Generative Language model versions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownModel {
    /// Gemini 2.5 Pro
    Gemini25Pro,

    /// Gemini 2.5 Flash
    Gemini25Flash,

    /// Gemini 2.5 Flash-Lite
    Gemini25FlashLite,

    /// Gemini 2.0 Flash
    Gemini20Flash,

    /// Gemini 2.0 Flash-Lite
    Gemini20FlashLite,

    /// Gemini 1.5 Pro
    Gemini15Pro,

    /// Gemini 1.5 Flash
    Gemini15Flash,
}

impl Model {
    /// Resolves a model name to a known model where possible, falling back
    /// to a custom identifier otherwise.
    pub fn from_name(name: &str) -> Self {
        match name.parse::<KnownModel>() {
            Ok(known) => Model::Known(known),
            Err(_) => Model::Custom(name.to_string()),
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Model::Known(known_model) => write!(f, "{}", known_model),
            Model::Custom(custom) => write!(f, "{}", custom),
        }
    }
}

impl fmt::Display for KnownModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KnownModel::Gemini25Pro => write!(f, "gemini-2.5-pro"),
            KnownModel::Gemini25Flash => write!(f, "gemini-2.5-flash"),
            KnownModel::Gemini25FlashLite => write!(f, "gemini-2.5-flash-lite"),
            KnownModel::Gemini20Flash => write!(f, "gemini-2.0-flash"),
            KnownModel::Gemini20FlashLite => write!(f, "gemini-2.0-flash-lite"),
            KnownModel::Gemini15Pro => write!(f, "gemini-1.5-pro"),
            KnownModel::Gemini15Flash => write!(f, "gemini-1.5-flash"),
        }
    }
}

impl FromStr for KnownModel {
    type Err = UnknownModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gemini-2.5-pro" => Ok(KnownModel::Gemini25Pro),
            "gemini-2.5-flash" => Ok(KnownModel::Gemini25Flash),
            "gemini-2.5-flash-lite" => Ok(KnownModel::Gemini25FlashLite),
            "gemini-2.0-flash" => Ok(KnownModel::Gemini20Flash),
            "gemini-2.0-flash-lite" => Ok(KnownModel::Gemini20FlashLite),
            "gemini-1.5-pro" => Ok(KnownModel::Gemini15Pro),
            "gemini-1.5-flash" => Ok(KnownModel::Gemini15Flash),
            _ => Err(UnknownModelError),
        }
    }
}

impl FromStr for Model {
    type Err = UnknownModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Model::from_name(s))
    }
}

/// Error returned when a model name does not match any known model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownModelError;

impl fmt::Display for UnknownModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown model identifier")
    }
}

impl std::error::Error for UnknownModelError {}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(Model::from_name(&name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_model_round_trip() {
        for name in [
            "gemini-2.5-pro",
            "gemini-2.5-flash",
            "gemini-2.5-flash-lite",
            "gemini-2.0-flash",
            "gemini-2.0-flash-lite",
            "gemini-1.5-pro",
            "gemini-1.5-flash",
        ] {
            let model = Model::from_name(name);
            assert!(matches!(model, Model::Known(_)), "{name} should be known");
            assert_eq!(model.to_string(), name);
        }
    }

    #[test]
    fn unrecognized_name_becomes_custom() {
        let model = Model::from_name("gemini-9.9-experimental");
        assert_eq!(
            model,
            Model::Custom("gemini-9.9-experimental".to_string())
        );
        assert_eq!(model.to_string(), "gemini-9.9-experimental");
    }

    #[test]
    fn serde_as_plain_string() {
        let model = Model::Known(KnownModel::Gemini25Flash);
        let json = serde_json::to_string(&model).unwrap();
        assert_eq!(json, "\"gemini-2.5-flash\"");
        let back: Model = serde_json::from_str(&json).unwrap();
        assert_eq!(back, model);
    }
}
