use crate::entities::{Component, Sheet};
use crate::error::ConfigError;
use log::debug;

/// Validated, immutable input of the placement engine: the sheets available, the components to
/// place (in priority order) and the tolerance applied around every component.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    sheets: Vec<Sheet>,
    components: Vec<Component>,
    tolerance: f64,
}

impl Instance {
    /// Validates all input up-front. Either every precondition holds, or a [`ConfigError`]
    /// describing the first violation is returned.
    pub fn new(
        sheets: Vec<Sheet>,
        components: Vec<Component>,
        tolerance: f64,
    ) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() {
            return Err(ConfigError::NonFiniteTolerance(tolerance));
        }
        if tolerance < 0.0 {
            return Err(ConfigError::NegativeTolerance(tolerance));
        }
        if let Some((index, s)) = sheets
            .iter()
            .enumerate()
            .find(|(_, s)| !valid_dimensions(s.length, s.width))
        {
            return Err(ConfigError::InvalidSheet {
                index,
                length: s.length,
                width: s.width,
            });
        }
        if let Some((index, c)) = components
            .iter()
            .enumerate()
            .find(|(_, c)| !valid_dimensions(c.length, c.width))
        {
            return Err(ConfigError::InvalidComponent {
                index,
                length: c.length,
                width: c.width,
            });
        }
        if sheets.is_empty() && !components.is_empty() {
            return Err(ConfigError::NoSheets {
                n_components: components.len(),
            });
        }

        debug!(
            "[INST] {} sheets, {} components, tolerance {}",
            sheets.len(),
            components.len(),
            tolerance
        );

        Ok(Instance {
            sheets,
            components,
            tolerance,
        })
    }

    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    pub fn sheet(&self, idx: usize) -> &Sheet {
        &self.sheets[idx]
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn component(&self, idx: usize) -> &Component {
        &self.components[idx]
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }
}

fn valid_dimensions(length: f64, width: f64) -> bool {
    // also rejects NaN
    length.is_finite() && width.is_finite() && length > 0.0 && width > 0.0
}
