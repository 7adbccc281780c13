// Export handoff for the downstream recognition pipeline.

use crate::error::SetterError;
use crate::state::{Digit, SegmentName};
use crate::transform::Point;
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentExport {
    pub position: Point,
    /// Canonical name, or null for an unnamed segment (unreachable through
    /// a completed session, but representable).
    pub name: Option<SegmentName>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitExport {
    pub segments: Vec<SegmentExport>,
}

/// Immutable snapshot of a completed session, handed to the recognition
/// pipeline that reads pixel colors at these positions every `step` frames.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportModel {
    pub start_frame: i64,
    pub step: i64,
    pub digits: Vec<DigitExport>,
}

impl ExportModel {
    /// Build the snapshot from finished digits. `step` is the rounded
    /// frame rate of the source.
    pub fn from_digits(digits: &[Digit], fps: f64) -> Self {
        Self {
            start_frame: 0,
            step: fps.round() as i64,
            digits: digits
                .iter()
                .map(|digit| DigitExport {
                    segments: digit
                        .segments
                        .iter()
                        .map(|s| SegmentExport {
                            position: s.pos,
                            name: s.name,
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExportInfo {
    pub year: i32,
    pub version: String,
    pub description: String,
    pub date_created: String,
}

/// On-disk envelope around the export model.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportFile {
    pub info: ExportInfo,
    pub model: ExportModel,
}

impl ExportFile {
    pub fn new(model: ExportModel) -> Self {
        let now = chrono::Local::now();
        ExportFile {
            info: ExportInfo {
                year: now.year(),
                version: "1.0".to_string(),
                description: "Segment layout exported from videosetter".to_string(),
                date_created: now.format("%Y-%m-%d").to_string(),
            },
            model,
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), SetterError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
