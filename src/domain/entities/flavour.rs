//! Flavour entity - a kernel build variant being cloned from `generic`

use crate::error::{PrepError, PrepResult};

/// Name of the flavour every new one is cloned from
pub const BASE_FLAVOUR: &str = "generic";

/// The flavour being created and the architecture it is created for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flavour {
    pub name: String,
    pub arch: String,
}

impl Flavour {
    pub fn new(name: impl Into<String>, arch: impl Into<String>) -> PrepResult<Self> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self {
            name,
            arch: arch.into(),
        })
    }

    /// File name of the ABI modules list for this flavour
    pub fn modules_name(&self) -> String {
        format!("{}.modules", self.name)
    }
}

/// Kernel configuration produced by the generator, held across the reset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedConfig(pub String);

impl GeneratedConfig {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Flavour names end up in file names and whitespace-separated rule lists.
pub fn validate_name(name: &str) -> PrepResult<()> {
    let reason = if name.is_empty() {
        Some("name is empty")
    } else if name.chars().any(char::is_whitespace) {
        Some("name contains whitespace")
    } else if name.contains('/') {
        Some("name contains '/'")
    } else if name == BASE_FLAVOUR {
        Some("name is the base flavour")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(PrepError::InvalidFlavourName {
            name: name.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}
