//! Page geometry used when manufacturing blank pages

use lopdf::Object;
use crate::error::{Error, Result};

/// Simple length type in millimeters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length(pub f64);

impl Length {
    /// Create a length from millimeters
    pub fn from_mm(mm: f64) -> Self {
        Length(mm)
    }

    /// Create a length from inches
    pub fn from_inches(inches: f64) -> Self {
        Length(inches * 25.4)
    }

    /// Create a length from points (1/72 inch)
    pub fn from_pt(pt: f64) -> Self {
        Length(pt * 25.4 / 72.0)
    }

    /// Get the value in millimeters
    pub fn mm(&self) -> f64 {
        self.0
    }

    /// Get the value in points (1/72 inch)
    pub fn pt(&self) -> f64 {
        self.0 * 72.0 / 25.4
    }
}

/// Page dimensions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageDimensions {
    pub width: Length,
    pub height: Length,
}

impl PageDimensions {
    /// US Letter size (8.5" × 11")
    pub fn letter() -> Self {
        Self {
            width: Length::from_inches(8.5),
            height: Length::from_inches(11.0),
        }
    }

    /// Read dimensions from a `MediaBox` array `[llx lly urx ury]`
    pub fn from_media_box(media_box: &[Object]) -> Result<Self> {
        if media_box.len() != 4 {
            return Err(Error::MalformedPdf(format!(
                "MediaBox has {} entries, expected 4",
                media_box.len()
            )));
        }

        let mut coords = [0.0f64; 4];
        for (coord, obj) in coords.iter_mut().zip(media_box) {
            *coord = match obj {
                Object::Integer(n) => *n as f64,
                Object::Real(r) => *r as f64,
                other => {
                    return Err(Error::MalformedPdf(format!(
                        "MediaBox entry is not a number: {:?}",
                        other
                    )))
                }
            };
        }

        Ok(Self {
            width: Length::from_pt((coords[2] - coords[0]).abs()),
            height: Length::from_pt((coords[3] - coords[1]).abs()),
        })
    }

    /// `MediaBox` array with the origin at (0, 0)
    pub fn to_media_box(&self) -> Vec<Object> {
        vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(self.width.pt() as f32),
            Object::Real(self.height.pt() as f32),
        ]
    }
}

impl Default for PageDimensions {
    fn default() -> Self {
        Self::letter()
    }
}
