//! Backend-neutral plot descriptions
//!
//! Simulators hand the host a `Plot`: values plus the labels a renderer
//! needs. Line plots use the implicit x axis `0..values.len()`; bar plots
//! pair `categories[i]` with `values[i]`.

use rustler::{NifStruct, NifUnitEnum};
use serde::{Deserialize, Serialize};

use crate::error::SimResult;

#[derive(NifUnitEnum, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PlotKind {
    Line,
    Bar,
}

#[derive(NifStruct, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[module = "Wicsada.Channels.Types.Plot"]
pub struct Plot {
    pub kind: PlotKind,
    pub title: String,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub grid: bool,
    pub legend: bool,
    /// Legend entry for the single series
    pub series_label: Option<String>,
    pub categories: Vec<String>,
    pub values: Vec<f64>,
}

impl Plot {
    /// Line plot of `values` against sample index
    pub fn line(title: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            kind: PlotKind::Line,
            title: title.into(),
            x_label: None,
            y_label: None,
            grid: false,
            legend: false,
            series_label: None,
            categories: Vec::new(),
            values,
        }
    }

    /// Bar chart, one bar per category
    pub fn bar(title: impl Into<String>, categories: Vec<String>, values: Vec<f64>) -> Self {
        debug_assert_eq!(categories.len(), values.len());
        Self {
            kind: PlotKind::Bar,
            categories,
            ..Self::line(title, values)
        }
    }

    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }

    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = Some(label.into());
        self
    }

    pub fn grid(mut self, on: bool) -> Self {
        self.grid = on;
        self
    }

    /// Name the series and show it in a legend
    pub fn legend(mut self, series_label: impl Into<String>) -> Self {
        self.series_label = Some(series_label.into());
        self.legend = true;
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Serialize for renderers outside the BEAM (JS charting, notebooks)
    pub fn to_json(&self) -> SimResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_builder() {
        let plot = Plot::line("Trace", vec![1.0, 2.0, 3.0])
            .x_label("Sample Index")
            .y_label("Amplitude")
            .grid(true)
            .legend("Signal");

        assert_eq!(plot.kind, PlotKind::Line);
        assert_eq!(plot.len(), 3);
        assert_eq!(plot.x_label.as_deref(), Some("Sample Index"));
        assert_eq!(plot.series_label.as_deref(), Some("Signal"));
        assert!(plot.grid && plot.legend);
        assert!(plot.categories.is_empty());
    }

    #[test]
    fn test_bar_builder() {
        let plot = Plot::bar("Bars", vec!["a".into(), "b".into()], vec![0.5, 1.5]);
        assert_eq!(plot.kind, PlotKind::Bar);
        assert_eq!(plot.categories, vec!["a", "b"]);
        assert!(!plot.legend);
        assert!(plot.x_label.is_none());
    }

    #[test]
    fn test_json_shape() {
        let plot = Plot::bar("Bars", vec!["a".into()], vec![2.0]).grid(true);
        let json: serde_json::Value = serde_json::from_str(&plot.to_json().unwrap()).unwrap();

        assert_eq!(json["kind"], "bar");
        assert_eq!(json["title"], "Bars");
        assert_eq!(json["grid"], true);
        assert_eq!(json["x_label"], serde_json::Value::Null);
        assert_eq!(json["values"][0], 2.0);
    }
}
