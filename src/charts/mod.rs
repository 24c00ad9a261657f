//! Terminal line charts for recorded series.
mod ascii;


pub use ascii::{
    DEFAULT_HEIGHT, DEFAULT_OFFSET, DEFAULT_PRECISION, MAX_HEIGHT, MAX_OFFSET, MAX_WIDTH,
    PlotOptions, interpolate, plot,
};
