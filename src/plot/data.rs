//! Input and output records of the scale layer
//!
//! [`Data`] holds the raw columns produced upstream, one per [`Field`].
//! [`Aesthetics`] holds what the scales wrote: transformed numbers, level
//! indices or colours, plus label formatters and the colour key.
//!
//! A field that was never supplied is absent from the map. A supplied column
//! marks individual missing elements with `None`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::aesthetic::{Field, FieldSet};
use super::scale::colour::Color;
use super::scale::discretize::Discretized;
use super::scale::labeler::Labeler;
use super::types::{Column, Value};

// =============================================================================
// Data
// =============================================================================

/// Raw input columns for one panel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Data {
    pub columns: BTreeMap<Field, Column>,
    pub titles: BTreeMap<Field, String>,
}

impl Data {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a column with no missing elements
    pub fn with_values<I, V>(mut self, field: Field, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let column = values.into_iter().map(|v| Some(v.into())).collect();
        self.columns.insert(field, column);
        self
    }

    /// Add a column that may contain missing elements
    pub fn with_column(mut self, field: Field, column: Column) -> Self {
        self.columns.insert(field, column);
        self
    }

    pub fn with_title(mut self, field: Field, title: impl Into<String>) -> Self {
        self.titles.insert(field, title.into());
        self
    }

    /// The column for `field`, if supplied
    pub fn get(&self, field: Field) -> Option<&Column> {
        self.columns.get(&field)
    }

    pub fn has(&self, field: Field) -> bool {
        self.columns.contains_key(&field)
    }
}

// =============================================================================
// Aesthetic Columns
// =============================================================================

/// Colours for each element plus the full palette they were drawn from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorColumn {
    pub values: Vec<Option<Color>>,
    /// Every colour the column may take, including ones no element uses
    pub palette: Vec<Color>,
}

/// One scaled output column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "values", rename_all = "snake_case")]
pub enum AesColumn {
    /// Transformed numeric values
    Continuous(Vec<Option<f64>>),
    /// 1-based categorical indices
    Indices(Vec<Option<usize>>),
    /// Categorical values kept together with their level pool
    Pooled(Discretized),
    /// Mapped colours
    Colors(ColorColumn),
}

impl AesColumn {
    pub fn len(&self) -> usize {
        match self {
            AesColumn::Continuous(v) => v.len(),
            AesColumn::Indices(v) => v.len(),
            AesColumn::Pooled(d) => d.len(),
            AesColumn::Colors(c) => c.values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// =============================================================================
// Aesthetics
// =============================================================================

/// Scaled output for one panel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Aesthetics {
    pub columns: BTreeMap<Field, AesColumn>,
    /// `<field>_label` formatters, only for fields with a label slot
    pub labels: BTreeMap<Field, Labeler>,
    pub xviewmin: Option<f64>,
    pub xviewmax: Option<f64>,
    pub yviewmin: Option<f64>,
    pub yviewmax: Option<f64>,
    /// Ordered legend swatches
    pub color_key_colors: Vec<Color>,
    /// Whether the key is drawn as a continuous strip
    pub color_key_continuous: bool,
    pub titles: BTreeMap<Field, String>,
}

impl Aesthetics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> Option<&AesColumn> {
        self.columns.get(&field)
    }

    /// Store a column, replacing whatever an earlier scale wrote
    pub fn set(&mut self, field: Field, column: AesColumn) {
        self.columns.insert(field, column);
    }

    /// Transformed numbers, if `field` holds a continuous column
    pub fn numeric(&self, field: Field) -> Option<&[Option<f64>]> {
        match self.columns.get(&field) {
            Some(AesColumn::Continuous(values)) => Some(values),
            _ => None,
        }
    }

    /// Level indices, if `field` holds a categorical column
    pub fn indices(&self, field: Field) -> Option<&[Option<usize>]> {
        match self.columns.get(&field) {
            Some(AesColumn::Indices(values)) => Some(values),
            Some(AesColumn::Pooled(d)) => Some(d.indices()),
            _ => None,
        }
    }

    /// Mapped colours, if `field` holds a colour column
    pub fn colors(&self, field: Field) -> Option<&[Option<Color>]> {
        match self.columns.get(&field) {
            Some(AesColumn::Colors(c)) => Some(&c.values),
            _ => None,
        }
    }

    pub fn label(&self, field: Field) -> Option<&Labeler> {
        self.labels.get(&field)
    }

    /// Install a label formatter. Fields without a label slot ignore it.
    pub fn set_label(&mut self, field: Field, labeler: Labeler) -> bool {
        if field.has_label_slot() {
            self.labels.insert(field, labeler);
            true
        } else {
            false
        }
    }

    /// Format values with the formatter installed for `field`
    pub fn format_labels(&self, field: Field, values: &[f64]) -> Option<Vec<String>> {
        self.labels.get(&field).map(|l| l.format(values))
    }

    /// Store explicit view bounds for a positional family.
    ///
    /// Single-field sets carry no view range and are ignored.
    pub fn set_view(&mut self, fields: FieldSet, min: Option<f64>, max: Option<f64>) {
        let (lo, hi) = match fields {
            FieldSet::XFamily => (&mut self.xviewmin, &mut self.xviewmax),
            FieldSet::YFamily => (&mut self.yviewmin, &mut self.yviewmax),
            FieldSet::Single(_) => return,
        };
        if min.is_some() {
            *lo = min;
        }
        if max.is_some() {
            *hi = max;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_builder() {
        let data = Data::new()
            .with_values(Field::X, [1.0, 2.0])
            .with_column(Field::Color, vec![Some(Value::from("a")), None])
            .with_title(Field::X, "Weight");

        assert!(data.has(Field::X));
        assert!(!data.has(Field::Y));
        assert_eq!(data.get(Field::Color).unwrap()[1], None);
        assert_eq!(data.titles[&Field::X], "Weight");
    }

    #[test]
    fn test_data_from_json() {
        let json = r#"{"columns": {"x": [1, null, 2.5], "color": ["a", "b", null]},
                       "titles": {"x": "Speed"}}"#;
        let data: Data = serde_json::from_str(json).unwrap();
        assert_eq!(
            data.get(Field::X).unwrap(),
            &vec![Some(Value::Integer(1)), None, Some(Value::Number(2.5))]
        );
        assert_eq!(data.get(Field::Color).unwrap()[2], None);
        assert_eq!(data.titles[&Field::X], "Speed");
    }

    #[test]
    fn test_label_slots() {
        let mut aes = Aesthetics::new();
        assert!(aes.set_label(Field::X, Labeler::levels(vec![Value::from("a")])));
        assert!(!aes.set_label(Field::XMin, Labeler::levels(vec![Value::from("a")])));
        assert!(aes.label(Field::XMin).is_none());
        assert_eq!(aes.format_labels(Field::X, &[1.0]), Some(vec!["a".to_string()]));
        assert_eq!(aes.format_labels(Field::Y, &[1.0]), None);
    }

    #[test]
    fn test_set_view() {
        let mut aes = Aesthetics::new();
        aes.set_view(FieldSet::XFamily, Some(0.0), None);
        aes.set_view(FieldSet::YFamily, None, Some(3.0));
        aes.set_view(FieldSet::Single(Field::Size), Some(9.0), Some(9.0));
        assert_eq!(aes.xviewmin, Some(0.0));
        assert_eq!(aes.xviewmax, None);
        assert_eq!(aes.yviewmin, None);
        assert_eq!(aes.yviewmax, Some(3.0));
    }

    #[test]
    fn test_column_accessors() {
        let mut aes = Aesthetics::new();
        aes.set(Field::X, AesColumn::Continuous(vec![Some(1.0), None]));
        aes.set(Field::Y, AesColumn::Indices(vec![Some(2)]));
        assert_eq!(aes.numeric(Field::X), Some(&[Some(1.0), None][..]));
        assert_eq!(aes.indices(Field::Y), Some(&[Some(2)][..]));
        assert!(aes.numeric(Field::Y).is_none());
        assert_eq!(aes.get(Field::X).unwrap().len(), 2);
    }

    #[test]
    fn test_aesthetics_json_uses_hex_colours() {
        let mut aes = Aesthetics::new();
        aes.set(
            Field::Color,
            AesColumn::Colors(ColorColumn {
                values: vec![Some(Color::new(255, 0, 0)), None],
                palette: vec![Color::new(255, 0, 0)],
            }),
        );
        let json = serde_json::to_string(&aes).unwrap();
        assert!(json.contains("\"#ff0000\""));
        assert!(json.contains("\"type\":\"colors\""));
    }
}
