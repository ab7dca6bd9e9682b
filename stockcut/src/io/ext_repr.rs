use serde::{Deserialize, Serialize};

/// A numeric field as it is stored by input forms: either a JSON number or its text.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum ExtNumber {
    Number(f64),
    Text(String),
    /// A cleared field, stored as `null`
    Null,
}

impl ExtNumber {
    /// The numeric value, `None` if the field is empty or `null`.
    /// `Some(Err(text))` if the field holds text which is not a number.
    pub fn value(&self) -> Option<Result<f64, &str>> {
        match self {
            ExtNumber::Number(n) => Some(Ok(*n)),
            ExtNumber::Null => None,
            ExtNumber::Text(text) => match text.trim() {
                "" => None,
                trimmed => Some(trimmed.parse::<f64>().map_err(|_| text.as_str())),
            },
        }
    }
}

impl From<f64> for ExtNumber {
    fn from(n: f64) -> Self {
        ExtNumber::Number(n)
    }
}

impl Default for ExtNumber {
    fn default() -> Self {
        ExtNumber::Text(String::new())
    }
}

/// External representation of a [`Sheet`](crate::entities::Sheet).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtSheet {
    pub length: ExtNumber,
    pub width: ExtNumber,
    /// Informational, defaults to 0 if absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thickness: Option<ExtNumber>,
}

/// External representation of a [`Component`](crate::entities::Component).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtComponent {
    pub length: ExtNumber,
    pub width: ExtNumber,
}

/// The full input of a placement run, also the record kept by persistence stores.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtInstance {
    #[serde(default)]
    pub sheets: Vec<ExtSheet>,
    #[serde(default)]
    pub components: Vec<ExtComponent>,
    /// Spacing kept around every component, 0 if absent
    #[serde(default)]
    pub tolerance: ExtNumber,
}

/// External representation of a [`Placement`](crate::entities::Placement), including the
/// dimensions of the placed component.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPlacement {
    /// The index of the component in the instance
    pub component_id: usize,
    /// The index of the sheet the component was placed on
    pub sheet_id: usize,
    /// Top-left corner of the component
    pub x: f64,
    pub y: f64,
    pub length: f64,
    pub width: f64,
}

/// Summary of a single sheet in a solution
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtLayout {
    pub sheet_id: usize,
    /// The components placed on this sheet, in placement order
    pub component_ids: Vec<usize>,
    /// Area of the placed components divided by the area of the sheet
    pub density: f64,
}

/// External representation of a [`Solution`](crate::entities::Solution).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtSolution {
    pub placements: Vec<ExtPlacement>,
    /// Components which did not fit on any sheet
    pub unplaced: Vec<usize>,
    /// One entry per sheet holding at least one component
    pub layouts: Vec<ExtLayout>,
    pub n_sheets_used: usize,
    /// Area of all placed components divided by the area of all used sheets
    pub density: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_numbers_keep_double_precision() {
        let json = r#"{"sheets":[{"length":2440.123456789,"width":16777217}],"components":[],"tolerance":16777217}"#;
        let record: ExtInstance = serde_json::from_str(json).unwrap();
        assert_eq!(record.sheets[0].length, ExtNumber::Number(2440.123456789));
        assert_eq!(record.sheets[0].width, ExtNumber::Number(16777217.0));

        let restored: ExtInstance =
            serde_json::from_str(&serde_json::to_string(&record).unwrap()).unwrap();
        assert_eq!(restored, record);
        assert_eq!(restored.tolerance.value(), Some(Ok(16777217.0)));
    }

    #[test]
    fn null_reads_as_an_empty_field() {
        let json = r#"{"length":null,"width":"  ","thickness":null}"#;
        let sheet: ExtSheet = serde_json::from_str(json).unwrap();
        assert_eq!(sheet.length, ExtNumber::Null);
        assert_eq!(sheet.length.value(), None);
        assert_eq!(sheet.width.value(), None);
    }
}
