use seg_core::CoreError;
use seg_grid::GridError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] CoreError),

    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    #[error("supplied grid is {got_width}x{got_height} but the config asks for {width}x{height}")]
    GridMismatch {
        width:      u32,
        height:     u32,
        got_width:  u32,
        got_height: u32,
    },
}

pub type SimResult<T> = Result<T, SimError>;
