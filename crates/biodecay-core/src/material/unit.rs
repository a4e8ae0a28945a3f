use std::fmt;

use serde::{Deserialize, Serialize};

/// Unit of a material's tracked quantity. The engine itself is unit-agnostic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantityUnit {
    #[default]
    Grams,
    Millimeters,
}

impl QuantityUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            QuantityUnit::Grams => "g",
            QuantityUnit::Millimeters => "mm",
        }
    }
}

impl fmt::Display for QuantityUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
