//! Feature-by-time matrix assembled from per-frame outputs

use crate::analyzers::FrameOutput;
use crate::error::{FeatureError, Result};
use ndarray::{Array2, ArrayView1, ArrayView2, Axis};

/// 2-D feature matrix: rows are feature dimensions, columns are frames
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMatrix {
    data: Array2<f64>,
}

impl FeatureMatrix {
    /// Transpose per-frame outputs into a feature-by-time matrix
    ///
    /// # Arguments
    /// * `outputs` - One output per frame, in frame order
    /// * `empty_rows` - Row count to report when there are no outputs
    ///
    /// # Errors
    /// `ShapeMismatch` if any output differs in length from the first
    pub fn from_frame_outputs<O: FrameOutput>(outputs: &[O], empty_rows: usize) -> Result<Self> {
        let Some(first) = outputs.first() else {
            return Ok(Self::empty(empty_rows));
        };

        let rows = first.dimension();
        let mut values = Vec::with_capacity(rows * outputs.len());
        for (frame, output) in outputs.iter().enumerate() {
            let found = output.dimension();
            if found != rows {
                log::warn!("Frame {frame} has {found} features, frame 0 had {rows}");
                return Err(FeatureError::ShapeMismatch {
                    frame,
                    expected: rows,
                    found,
                });
            }
            output.write_into(&mut values);
        }

        // Frame-major buffer reads as (frames, features); flip to (features, frames)
        let by_frame = Array2::from_shape_vec((outputs.len(), rows), values)?;
        Ok(Self {
            data: by_frame.reversed_axes().as_standard_layout().into_owned(),
        })
    }

    /// Matrix with `rows` feature rows and no frames
    pub fn empty(rows: usize) -> Self {
        Self {
            data: Array2::zeros((rows, 0)),
        }
    }

    /// Number of feature rows
    pub fn n_features(&self) -> usize {
        self.data.nrows()
    }

    /// Number of frame columns
    pub fn n_frames(&self) -> usize {
        self.data.ncols()
    }

    /// (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    /// True when no frame was analysed
    pub fn is_empty(&self) -> bool {
        self.n_frames() == 0
    }

    /// Value of feature `feature` at frame `frame`
    pub fn get(&self, feature: usize, frame: usize) -> Option<f64> {
        self.data.get((feature, frame)).copied()
    }

    /// One feature dimension across all frames
    pub fn feature(&self, index: usize) -> ArrayView1<'_, f64> {
        self.data.index_axis(Axis(0), index)
    }

    /// All feature values of one frame
    pub fn frame(&self, index: usize) -> ArrayView1<'_, f64> {
        self.data.index_axis(Axis(1), index)
    }

    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.data.view()
    }

    pub fn into_array(self) -> Array2<f64> {
        self.data
    }
}

impl From<FeatureMatrix> for Array2<f64> {
    fn from(matrix: FeatureMatrix) -> Self {
        matrix.data
    }
}
