/// Errors raised by the map catalog and the map view
///
/// The geometric solver itself never fails; every input combination maps to a
/// defined output value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Unknown map: {0:?}")]
    UnknownMap(String),

    #[error("Invalid map image size: {width}x{height}")]
    InvalidImageSize { width: f64, height: f64 },

    #[error("Invalid canvas size: {width}x{height}")]
    InvalidCanvasSize { width: f64, height: f64 },

    #[error("Invalid map size: {0} m")]
    InvalidMapSize(f64),
}

pub type Result<T> = std::result::Result<T, Error>;
