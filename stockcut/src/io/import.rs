use crate::entities::{Component, Instance, Sheet};
use crate::error::ConfigError;
use crate::io::ext_repr::{ExtComponent, ExtInstance, ExtNumber, ExtSheet};
use thiserror::Error;

/// A field of an external record that cannot be turned into a number.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{entity} {index}: {field} is missing")]
    Missing {
        entity: &'static str,
        index: usize,
        field: &'static str,
    },

    #[error("{entity} {index}: {field} is not a number: {text:?}")]
    NotANumber {
        entity: &'static str,
        index: usize,
        field: &'static str,
        text: String,
    },

    #[error("tolerance is not a number: {0:?}")]
    ToleranceNotANumber(String),
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ImportError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Imports an instance into the library.
///
/// Every field is checked to be numeric before the engine preconditions are validated.
/// Sheets and components are numbered from 1 in [`ValidationError`]s, as they are presented to users.
pub fn import(ext_instance: &ExtInstance) -> Result<Instance, ImportError> {
    let sheets = ext_instance
        .sheets
        .iter()
        .enumerate()
        .map(|(i, s)| import_sheet(i, s))
        .collect::<Result<Vec<Sheet>, ValidationError>>()?;

    let components = ext_instance
        .components
        .iter()
        .enumerate()
        .map(|(i, c)| import_component(i, c))
        .collect::<Result<Vec<Component>, ValidationError>>()?;

    let tolerance = match ext_instance.tolerance.value() {
        None => 0.0,
        Some(Ok(t)) => t,
        Some(Err(text)) => return Err(ValidationError::ToleranceNotANumber(text.to_owned()).into()),
    };

    Ok(Instance::new(sheets, components, tolerance)?)
}

pub fn import_sheet(index: usize, ext_sheet: &ExtSheet) -> Result<Sheet, ValidationError> {
    let number = |field, n: &ExtNumber| required_number("sheet", index, field, n);
    let thickness = match &ext_sheet.thickness {
        None => 0.0,
        Some(t) => optional_number("sheet", index, "thickness", t)?.unwrap_or(0.0),
    };
    Ok(Sheet {
        length: number("length", &ext_sheet.length)?,
        width: number("width", &ext_sheet.width)?,
        thickness,
    })
}

pub fn import_component(
    index: usize,
    ext_component: &ExtComponent,
) -> Result<Component, ValidationError> {
    let number = |field, n: &ExtNumber| required_number("component", index, field, n);
    Ok(Component {
        length: number("length", &ext_component.length)?,
        width: number("width", &ext_component.width)?,
    })
}

fn required_number(
    entity: &'static str,
    index: usize,
    field: &'static str,
    n: &ExtNumber,
) -> Result<f64, ValidationError> {
    optional_number(entity, index, field, n)?.ok_or(ValidationError::Missing {
        entity,
        index: index + 1,
        field,
    })
}

fn optional_number(
    entity: &'static str,
    index: usize,
    field: &'static str,
    n: &ExtNumber,
) -> Result<Option<f64>, ValidationError> {
    match n.value() {
        None => Ok(None),
        Some(Ok(v)) => Ok(Some(v)),
        Some(Err(text)) => Err(ValidationError::NotANumber {
            entity,
            index: index + 1,
            field,
            text: text.to_owned(),
        }),
    }
}
