//! Certificate configuration
//!
//! Every label, colour, size and position used by the bond certificate
//! layout. The defaults reproduce the stamped-paper design; any subset can
//! be overridden from YAML, missing keys fall back to the defaults.
//!
//! ```yaml
//! stamp:
//!   value: "Rs. 500"
//! watermark:
//!   text: "SPECIMEN"
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::renderers::{PageSize, Rgb};

pub const PARCHMENT: Rgb = Rgb::new(255, 254, 240);
pub const MAROON: Rgb = Rgb::new(120, 0, 0);
pub const WATERMARK_GRAY: Rgb = Rgb::new(230, 230, 230);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CertificateConfig {
    pub page: PageSize,
    pub background: Rgb,
    pub stamp: StampConfig,
    pub details: DetailsConfig,
    pub heading: HeadingConfig,
    pub body: BodyConfig,
    pub watermark: WatermarkConfig,
}

impl Default for CertificateConfig {
    fn default() -> Self {
        Self {
            page: PageSize::A4,
            background: PARCHMENT,
            stamp: StampConfig::default(),
            details: DetailsConfig::default(),
            heading: HeadingConfig::default(),
            body: BodyConfig::default(),
            watermark: WatermarkConfig::default(),
        }
    }
}

impl CertificateConfig {
    /// Parse a (possibly partial) YAML override
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

/// Stamp-duty header box and the three centred lines inside it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StampConfig {
    /// Distance of the box from the top, left and right page edges
    pub inset_mm: f32,
    pub height_mm: f32,
    pub stroke_width_mm: f32,
    pub ink: Rgb,
    pub label: String,
    pub label_size_pt: f32,
    pub label_y_mm: f32,
    pub caption: String,
    pub caption_size_pt: f32,
    pub caption_y_mm: f32,
    pub value: String,
    pub value_size_pt: f32,
    pub value_y_mm: f32,
}

impl Default for StampConfig {
    fn default() -> Self {
        Self {
            inset_mm: 10.0,
            height_mm: 45.0,
            stroke_width_mm: 1.0,
            ink: MAROON,
            label: "BHARAT (INDIA)".to_string(),
            label_size_pt: 22.0,
            label_y_mm: 22.0,
            caption: "NON JUDICIAL STAMP DUTY".to_string(),
            caption_size_pt: 16.0,
            caption_y_mm: 32.0,
            value: "Rs. 100".to_string(),
            value_size_pt: 28.0,
            value_y_mm: 48.0,
        }
    }
}

/// Certificate number and issuance date lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DetailsConfig {
    pub left_mm: f32,
    pub first_y_mm: f32,
    pub line_gap_mm: f32,
    pub size_pt: f32,
    pub number_label: String,
    /// Fixed prefix the random serial is appended to
    pub number_prefix: String,
    pub date_label: String,
}

impl Default for DetailsConfig {
    fn default() -> Self {
        Self {
            left_mm: 20.0,
            first_y_mm: 70.0,
            line_gap_mm: 10.0,
            size_pt: 12.0,
            number_label: "CERTIFICATE NO: ".to_string(),
            number_prefix: "INFRA-TOKEN-".to_string(),
            date_label: "DATE OF ISSUANCE: ".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeadingConfig {
    pub text: String,
    pub size_pt: f32,
    /// Gap between the issuance date line and the heading baseline
    pub gap_mm: f32,
}

impl Default for HeadingConfig {
    fn default() -> Self {
        Self {
            text: "MEMORANDUM OF TOKENIZED INVESTMENT".to_string(),
            size_pt: 14.0,
            gap_mm: 20.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BodyConfig {
    pub size_pt: f32,
    /// Gap between the heading baseline and the first body baseline
    pub gap_mm: f32,
    /// Left and right margin; lines wrap to page width minus both
    pub margin_mm: f32,
    /// Baseline-to-baseline distance as a multiple of the font size
    pub line_height_factor: f32,
    /// No body baseline may fall below page height minus this
    pub bottom_margin_mm: f32,
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            size_pt: 11.0,
            gap_mm: 15.0,
            margin_mm: 20.0,
            line_height_factor: 1.15,
            bottom_margin_mm: 15.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WatermarkConfig {
    pub text: String,
    pub size_pt: f32,
    pub color: Rgb,
    pub angle_deg: f32,
    pub x_mm: f32,
    pub y_mm: f32,
}

impl Default for WatermarkConfig {
    fn default() -> Self {
        Self {
            text: "GOVT OF INDIA".to_string(),
            size_pt: 60.0,
            color: WATERMARK_GRAY,
            angle_deg: 45.0,
            x_mm: 30.0,
            y_mm: 200.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_yaml_matches_defaults() {
        let config = CertificateConfig::from_yaml(include_str!("bond_certificate.yaml")).unwrap();
        assert_eq!(config, CertificateConfig::default());
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let config = CertificateConfig::from_yaml(
            "stamp:\n  value: \"Rs. 500\"\nwatermark:\n  color: [200, 200, 200]\n",
        )
        .unwrap();

        assert_eq!(config.stamp.value, "Rs. 500");
        assert_eq!(config.stamp.caption, "NON JUDICIAL STAMP DUTY");
        assert_eq!(config.watermark.color, Rgb::new(200, 200, 200));
        assert_eq!(config.watermark.text, "GOVT OF INDIA");
        assert_eq!(config.body, BodyConfig::default());
    }

    #[test]
    fn test_invalid_yaml_is_config_error() {
        let err = CertificateConfig::from_yaml("stamp: [1, 2").unwrap_err();
        assert!(matches!(err, crate::errors::CertificateError::Config(_)));
    }

    #[test]
    fn test_yaml_round_trip_of_defaults() {
        let yaml = CertificateConfig::default().to_yaml().unwrap();
        assert_eq!(CertificateConfig::from_yaml(&yaml).unwrap(), CertificateConfig::default());
    }
}
