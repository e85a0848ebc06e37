use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    #[error(
        "degenerate arc geometry: center={center}, offset={offset}, radius={radius}, angle={angle}"
    )]
    DegenerateGeometry {
        center: f64,
        offset: f64,
        radius: f64,
        angle: f64,
    },
}
