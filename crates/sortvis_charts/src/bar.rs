use sortvis_core::{Frame, Value};

use crate::color::{role_of, Color, ColorRole, PartitionShading};

#[derive(Clone, Debug)]
pub struct BarChartStyle {
    pub sorted: Color,
    pub pivot: Color,
    pub scan: Color,
    pub probe: Color,
    pub active: Color,
    pub bar: Color,
    /// Alpha of bars outside the current partition
    pub dim_alpha: f32,
    pub shading: PartitionShading,
}

impl Default for BarChartStyle {
    fn default() -> Self {
        Self {
            sorted: Color::GREEN,
            pivot: Color::ORANGE,
            scan: Color::PURPLE,
            probe: Color::RED,
            active: Color::RED,
            bar: Color::BLUE,
            dim_alpha: 0.2,
            shading: PartitionShading::Dim,
        }
    }
}

impl BarChartStyle {
    pub fn color(&self, role: ColorRole) -> Color {
        match role {
            ColorRole::Sorted => self.sorted,
            ColorRole::Pivot => self.pivot,
            ColorRole::Scan => self.scan,
            ColorRole::Probe => self.probe,
            ColorRole::InRange | ColorRole::Default => self.bar,
            ColorRole::OutOfRange => self.bar.with_alpha(self.dim_alpha),
            ColorRole::Active => self.active,
        }
    }
}

/// One bar, ready to draw
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bar {
    pub index: usize,
    pub value: Value,
    /// `value / max`, in `0.0..=1.0`
    pub height: f32,
    pub role: ColorRole,
    pub color: Color,
}

pub struct BarChartModel {
    pub bars: Vec<Bar>,
    pub max_value: Value,
    pub finished: bool,
}

impl BarChartModel {
    pub fn new(frame: &Frame, style: &BarChartStyle) -> anyhow::Result<Self> {
        anyhow::ensure!(
            frame.values.iter().all(|v| *v >= 0),
            "BarChartModel does not support negative values"
        );

        let max_value = frame.values.iter().copied().max().unwrap_or(0);

        let bars = frame
            .values
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                let role = role_of(index, frame, style.shading);
                let height = if max_value > 0 {
                    value as f32 / max_value as f32
                } else {
                    0.0
                };
                Bar {
                    index,
                    value,
                    height,
                    role,
                    color: style.color(role),
                }
            })
            .collect();

        tracing::trace!(len = frame.values.len(), max_value, "built bar chart model");
        Ok(Self {
            bars,
            max_value,
            finished: frame.finished,
        })
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Bar height in whole rows for a plot `rows` tall; nonzero values get
    /// at least one row
    pub fn rows(&self, index: usize, rows: usize) -> usize {
        let Some(bar) = self.bars.get(index) else {
            return 0;
        };
        if bar.value <= 0 {
            return 0;
        }
        ((bar.height * rows as f32).round() as usize).clamp(1, rows.max(1))
    }
}
