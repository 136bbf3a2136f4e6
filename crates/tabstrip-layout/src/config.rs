#![forbid(unsafe_code)]

//! Strip layout configuration.

use std::fmt;

use serde::{Deserialize, Serialize};
use tabstrip_core::geometry::Axis;
use tabstrip_core::gesture::Platform;

/// Default gap between adjacent items.
pub const DEFAULT_SPACING: f64 = 2.0;

/// Default length of a fixed-length tab.
pub const DEFAULT_TAB_LENGTH: f64 = 150.0;

/// Default cross-axis size of the strip on `platform`.
///
/// Touch targets get a taller strip.
#[must_use]
pub const fn default_thickness(platform: Platform) -> f64 {
    match platform {
        Platform::Touch => 30.0,
        Platform::Pointer => 25.0,
    }
}

/// Geometry of a strip.
///
/// `fixed_length: None` means every item must be measured by the host and
/// reported through [`LayoutModel::set_measured`](crate::LayoutModel::set_measured).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Axis items are laid out along.
    pub axis: Axis,
    /// Gap between adjacent items.
    pub spacing: f64,
    /// Leading and trailing inset of the strip.
    pub padding: f64,
    /// Shared length of every item, or `None` for per-item measurement.
    pub fixed_length: Option<f64>,
    /// Cross-axis size of the strip.
    pub thickness: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::for_platform(Platform::current())
    }
}

impl LayoutConfig {
    /// Defaults for `platform`: horizontal, measured items.
    #[must_use]
    pub const fn for_platform(platform: Platform) -> Self {
        Self {
            axis: Axis::Horizontal,
            spacing: DEFAULT_SPACING,
            padding: 0.0,
            fixed_length: None,
            thickness: default_thickness(platform),
        }
    }

    /// Defaults with every item sharing `length`.
    #[must_use]
    pub fn fixed(length: f64) -> Self {
        Self::default().fixed_length(Some(length))
    }

    /// Set the layout axis.
    #[must_use]
    pub fn axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// Set the inter-item gap.
    #[must_use]
    pub fn spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the leading/trailing inset.
    #[must_use]
    pub fn padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Set or clear the shared item length.
    #[must_use]
    pub fn fixed_length(mut self, length: Option<f64>) -> Self {
        self.fixed_length = length;
        self
    }

    /// Set the cross-axis size.
    #[must_use]
    pub fn thickness(mut self, thickness: f64) -> Self {
        self.thickness = thickness;
        self
    }

    /// Check every scalar is usable for geometry.
    pub fn validate(&self) -> Result<(), LayoutConfigError> {
        check_non_negative("spacing", self.spacing)?;
        check_non_negative("padding", self.padding)?;
        check_non_negative("thickness", self.thickness)?;
        if let Some(length) = self.fixed_length
            && !(length.is_finite() && length > 0.0)
        {
            return Err(LayoutConfigError::NonPositiveLength { value: length });
        }
        Ok(())
    }
}

fn check_non_negative(field: &'static str, value: f64) -> Result<(), LayoutConfigError> {
    if !value.is_finite() {
        return Err(LayoutConfigError::NonFinite { field, value });
    }
    if value < 0.0 {
        return Err(LayoutConfigError::Negative { field, value });
    }
    Ok(())
}

/// A [`LayoutConfig`] that cannot produce sound geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayoutConfigError {
    /// A scalar field is NaN or infinite.
    NonFinite { field: &'static str, value: f64 },
    /// A scalar field is below zero.
    Negative { field: &'static str, value: f64 },
    /// The fixed item length is zero, negative, or not finite.
    NonPositiveLength { value: f64 },
}

impl fmt::Display for LayoutConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { field, value } => {
                write!(f, "layout {field} must be finite, got {value}")
            }
            Self::Negative { field, value } => {
                write!(f, "layout {field} must not be negative, got {value}")
            }
            Self::NonPositiveLength { value } => {
                write!(f, "fixed item length must be positive and finite, got {value}")
            }
        }
    }
}

impl std::error::Error for LayoutConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_platform() {
        let touch = LayoutConfig::for_platform(Platform::Touch);
        let pointer = LayoutConfig::for_platform(Platform::Pointer);
        assert_eq!(touch.thickness, 30.0);
        assert_eq!(pointer.thickness, 25.0);
        assert_eq!(pointer.spacing, DEFAULT_SPACING);
        assert_eq!(pointer.padding, 0.0);
        assert_eq!(pointer.fixed_length, None);
        assert_eq!(pointer.axis, Axis::Horizontal);
    }

    #[test]
    fn default_config_is_valid() {
        assert_eq!(LayoutConfig::default().validate(), Ok(()));
        assert_eq!(LayoutConfig::fixed(DEFAULT_TAB_LENGTH).validate(), Ok(()));
    }

    #[test]
    fn negative_spacing_rejected() {
        let err = LayoutConfig::default().spacing(-1.0).validate().unwrap_err();
        assert_eq!(
            err,
            LayoutConfigError::Negative {
                field: "spacing",
                value: -1.0
            }
        );
        assert_eq!(err.to_string(), "layout spacing must not be negative, got -1");
    }

    #[test]
    fn non_finite_padding_rejected() {
        let err = LayoutConfig::default()
            .padding(f64::INFINITY)
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            LayoutConfigError::NonFinite {
                field: "padding",
                ..
            }
        ));
    }

    #[test]
    fn zero_fixed_length_rejected() {
        let err = LayoutConfig::fixed(0.0).validate().unwrap_err();
        assert_eq!(err, LayoutConfigError::NonPositiveLength { value: 0.0 });
    }

    #[test]
    fn nan_fixed_length_rejected() {
        assert!(LayoutConfig::fixed(f64::NAN).validate().is_err());
    }

    #[test]
    fn deserialize_fills_missing_fields_with_defaults() {
        let config: LayoutConfig =
            serde_json::from_str(r#"{"axis":"vertical","fixed_length":120.0}"#)
                .expect("valid layout json");
        assert_eq!(config.axis, Axis::Vertical);
        assert_eq!(config.fixed_length, Some(120.0));
        assert_eq!(config.spacing, DEFAULT_SPACING);
    }

    #[test]
    fn serialize_round_trips() {
        let config = LayoutConfig::fixed(80.0).padding(4.0).axis(Axis::Vertical);
        let json = serde_json::to_string(&config).expect("serialize layout");
        let back: LayoutConfig = serde_json::from_str(&json).expect("deserialize layout");
        assert_eq!(back, config);
    }
}
