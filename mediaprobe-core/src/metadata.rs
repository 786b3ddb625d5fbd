//! Metadata mapping produced by probing backends.
//!
//! `MediaMetadata` is an open mapping from field name to JSON value. Only a
//! handful of fields are interpreted by this crate (`width`, `height`,
//! `video_width`, `video_height`, `rotate`); everything else is carried
//! through untouched so that backend-specific detail reaches the caller.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field names interpreted by the orientation logic.
pub mod fields {
    pub const WIDTH: &str = "width";
    pub const HEIGHT: &str = "height";
    pub const VIDEO_WIDTH: &str = "video_width";
    pub const VIDEO_HEIGHT: &str = "video_height";
    pub const ROTATE: &str = "rotate";

    /// Fields added by the media info accessor.
    pub const MEDIA: &str = "media";
    pub const INFO_BACKEND: &str = "info_backend";
    pub const TYPE_FROM_NAME: &str = "type_from_name";
}

/// Metadata for a single media reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaMetadata(Map<String, Value>);

impl MediaMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Sets a field, replacing any previous value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(field.into(), value.into());
    }

    /// Sets a field only when a value is available.
    pub fn insert_opt<V: Into<Value>>(&mut self, field: &str, value: Option<V>) {
        if let Some(value) = value {
            self.insert(field, value);
        }
    }

    /// Builder-style variant of [`MediaMetadata::insert`].
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the string value of a field, if it is a string.
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Value::as_str)
    }

    /// Reads a field as a number. Numeric strings (`"90.000"`) are accepted.
    pub fn number(&self, field: &str) -> Option<f64> {
        self.0.get(field).and_then(value_as_f64)
    }

    /// Reads a dimension field, treating absent, null, zero and non-numeric
    /// values as unresolved.
    pub fn dimension(&self, field: &str) -> Option<f64> {
        self.number(field).filter(|v| *v != 0.0 && v.is_finite())
    }

    /// Effective width: `video_width` when truthy, else `width`.
    pub fn effective_width(&self) -> Option<f64> {
        self.dimension(fields::VIDEO_WIDTH)
            .or_else(|| self.dimension(fields::WIDTH))
    }

    /// Effective height: `video_height` when truthy, else `height`.
    pub fn effective_height(&self) -> Option<f64> {
        self.dimension(fields::VIDEO_HEIGHT)
            .or_else(|| self.dimension(fields::HEIGHT))
    }

    /// Rotation in degrees, 0 when absent or not numeric.
    pub fn rotation(&self) -> f64 {
        self.number(fields::ROTATE).unwrap_or(0.0)
    }
}

impl From<Map<String, Value>> for MediaMetadata {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, Value)> for MediaMetadata {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Interprets a JSON value as a number. Booleans and nulls are not numbers.
pub(crate) fn value_as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn meta(value: Value) -> MediaMetadata {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_video_dimensions_take_precedence() {
        let m = meta(json!({"width": 640, "height": 480, "video_width": 1080, "video_height": 1920}));
        assert_eq!(m.effective_width(), Some(1080.0));
        assert_eq!(m.effective_height(), Some(1920.0));
    }

    #[test]
    fn test_falsy_video_dimensions_fall_back() {
        let m = meta(json!({"width": 640, "height": 480, "video_width": 0, "video_height": null}));
        assert_eq!(m.effective_width(), Some(640.0));
        assert_eq!(m.effective_height(), Some(480.0));
    }

    #[test]
    fn test_unresolved_dimensions() {
        let m = meta(json!({"width": "", "video_height": false}));
        assert_eq!(m.effective_width(), None);
        assert_eq!(m.effective_height(), None);
    }

    #[test]
    fn test_numeric_strings() {
        let m = meta(json!({"width": "1920", "height": " 1080 ", "rotate": "90.000"}));
        assert_eq!(m.effective_width(), Some(1920.0));
        assert_eq!(m.effective_height(), Some(1080.0));
        assert_eq!(m.rotation(), 90.0);
    }

    #[test]
    fn test_rotation_defaults_to_zero() {
        assert_eq!(MediaMetadata::new().rotation(), 0.0);
        assert_eq!(meta(json!({"rotate": "sideways"})).rotation(), 0.0);
    }

    #[test]
    fn test_serializes_transparently() {
        let m = MediaMetadata::new().with("width", 10).with("codec", "h264");
        assert_eq!(
            serde_json::to_value(&m).unwrap(),
            json!({"width": 10, "codec": "h264"})
        );
    }
}
