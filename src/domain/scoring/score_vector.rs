//! Per-dimension signed scores.

use serde::{Deserialize, Serialize};

use crate::domain::quiz::Dimension;

/// Four signed averages, one per dimension.
///
/// Positive values lean towards E, N, F and P; negative values towards I, S,
/// T and J.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreVector {
    #[serde(rename = "EI")]
    pub ei: f64,
    #[serde(rename = "SN")]
    pub sn: f64,
    #[serde(rename = "TF")]
    pub tf: f64,
    #[serde(rename = "JP")]
    pub jp: f64,
}

impl ScoreVector {
    pub const ZERO: Self = Self {
        ei: 0.0,
        sn: 0.0,
        tf: 0.0,
        jp: 0.0,
    };

    pub fn new(ei: f64, sn: f64, tf: f64, jp: f64) -> Self {
        Self { ei, sn, tf, jp }
    }

    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::EI => self.ei,
            Dimension::SN => self.sn,
            Dimension::TF => self.tf,
            Dimension::JP => self.jp,
        }
    }

    pub fn set(&mut self, dimension: Dimension, score: f64) {
        match dimension {
            Dimension::EI => self.ei = score,
            Dimension::SN => self.sn = score,
            Dimension::TF => self.tf = score,
            Dimension::JP => self.jp = score,
        }
    }

    /// (dimension, score) pairs in type-code order.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, f64)> + '_ {
        Dimension::all().iter().map(move |d| (*d, self.get(*d)))
    }

    /// Mean of the four absolute scores.
    pub fn mean_magnitude(&self) -> f64 {
        self.iter().map(|(_, s)| s.abs()).sum::<f64>() / Dimension::all().len() as f64
    }
}
