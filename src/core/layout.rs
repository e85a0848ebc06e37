use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::palette::ColorResolver;
use crate::core::settings::{ChartSettings, DisplaySettings};
use crate::core::table::{DataTable, LABEL_ROLE, PERCENTAGE_ROLE};
use crate::core::trig::{angle_from_percentage, normalize_angle};
use crate::core::types::ArcDescriptor;
use crate::error::{ChartError, ChartResult};

/// Output of one layout pass. Rebuilt in full on every data or settings change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartModel {
    /// Rings ordered outer to inner, following table row order.
    pub rings: Vec<ArcDescriptor>,
    /// Raw percentage of the first row, shown at the chart center.
    pub headline_value: Option<f64>,
    pub settings: ChartSettings,
}

impl ChartModel {
    /// Valid "no data" model.
    #[must_use]
    pub fn empty(settings: ChartSettings) -> Self {
        Self {
            rings: Vec::new(),
            headline_value: None,
            settings,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }
}

/// Thickness shared by all rings of a pass.
///
/// More rows give thinner rings; the result never exceeds `max_thickness`.
pub fn ring_thickness(display: &DisplaySettings, row_count: usize) -> ChartResult<f64> {
    if row_count == 0 {
        return Err(ChartError::InvalidData(
            "ring thickness requires at least one row".to_owned(),
        ));
    }

    let overlap = 1.0 - display.overlap_amount;
    let possible = (display.max_radius - display.min_radius) / (row_count as f64 * overlap);
    Ok(possible.min(display.max_thickness))
}

/// Converts an input table into concentric ring descriptors.
///
/// A missing table, an empty table, or a table without a percentage column
/// yields the empty model. The function keeps no state of its own: equal
/// inputs and color assignments give equal models.
pub fn visual_transform(
    table: Option<&DataTable>,
    settings: &ChartSettings,
    colors: &mut dyn ColorResolver,
) -> ChartResult<ChartModel> {
    settings.validate()?;

    let Some(table) = table.filter(|table| !table.is_empty()) else {
        debug!("layout transform without rows");
        return Ok(ChartModel::empty(*settings));
    };
    let Some(percentage_index) = table.role_index(PERCENTAGE_ROLE) else {
        debug!(
            columns = table.columns.len(),
            "layout transform without percentage column"
        );
        return Ok(ChartModel::empty(*settings));
    };
    let label_index = table.role_index(LABEL_ROLE);

    let display = settings.display;
    let overlap = 1.0 - display.overlap_amount;
    let thickness = ring_thickness(&display, table.rows.len())?;

    let mut rings = Vec::with_capacity(table.rows.len());
    let mut cumulative_angle = 0.0;
    for index in 0..table.rows.len() {
        // Full scale is half a turn.
        let percentage = table.cell(index, percentage_index).to_f64("percentage")? / 2.0;
        let label = label_index
            .and_then(|column| table.cell(index, column).to_label())
            .unwrap_or_else(|| index.to_string());
        let angular_span = angle_from_percentage(percentage);

        rings.push(ArcDescriptor {
            angular_span,
            angular_offset: cumulative_angle,
            adjust: 0.0,
            color: colors.resolve(&label),
            radius: display.max_radius - index as f64 * thickness * overlap,
            thickness,
        });
        cumulative_angle = normalize_angle(cumulative_angle + angular_span);
    }

    let headline_value = table.cell(0, percentage_index).to_f64("percentage")?;
    debug!(rings = rings.len(), thickness, "layout transform");

    Ok(ChartModel {
        rings,
        headline_value: Some(headline_value),
        settings: *settings,
    })
}
