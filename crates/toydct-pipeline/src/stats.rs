//! Luma statistics used for stage diagnostics

use std::fmt;

use toydct_core::{Block, YCbCr};

/// Pipeline stage a statistics snapshot was taken after
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Converted,
    Shifted,
    Transformed,
    Quantized,
    Pruned,
    Inverted,
    Restored,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Converted => "converted",
            Stage::Shifted => "shifted",
            Stage::Transformed => "transformed",
            Stage::Quantized => "quantized",
            Stage::Pruned => "pruned",
            Stage::Inverted => "inverted",
            Stage::Restored => "restored",
        };
        f.write_str(name)
    }
}

/// Range and sparsity of the luma channel over a block list
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LumaStats {
    pub min: f32,
    pub max: f32,
    /// Pixels whose luma is exactly zero
    pub zeroed: usize,
    pub count: usize,
}

impl LumaStats {
    /// Collect statistics, `None` for an empty list
    pub fn of(blocks: &[Block<YCbCr>]) -> Option<Self> {
        let mut lumas = blocks.iter().flat_map(|b| b.pixels()).map(|p| p.color.y);
        let first = lumas.next()?;

        let mut stats = LumaStats {
            min: first,
            max: first,
            zeroed: usize::from(first == 0.0),
            count: 1,
        };
        for y in lumas {
            stats.min = stats.min.min(y);
            stats.max = stats.max.max(y);
            stats.zeroed += usize::from(y == 0.0);
            stats.count += 1;
        }
        Some(stats)
    }

    /// Share of pixels with zero luma
    pub fn zero_ratio(&self) -> f64 {
        self.zeroed as f64 / self.count as f64
    }
}

/// Statistics snapshot after one stage
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageStats {
    pub stage: Stage,
    pub luma: LumaStats,
}
