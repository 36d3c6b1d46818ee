use crate::error::SimError;

/// Uniform 1-D node layout across the gap between the two plates.
///
/// Node 0 sits on the stationary bottom wall (y = 0) and node N−1 on the
/// moving top wall (y = H). Built once from the configuration and immutable
/// for the lifetime of a run.
#[derive(Debug, Clone)]
pub struct Grid {
    num_nodes: usize,
    height: f64,
    spacing: f64,
}

impl Grid {
    /// Create a grid with `num_nodes` nodes (≥ 3) across a gap of `height`
    /// meters (> 0). Spacing is dy = H/(N−1).
    pub fn new(num_nodes: usize, height: f64) -> Result<Self, SimError> {
        if num_nodes < 3 {
            return Err(SimError::Configuration(format!(
                "node count must be at least 3, got {num_nodes}"
            )));
        }
        if !height.is_finite() || height <= 0.0 {
            return Err(SimError::Configuration(format!(
                "gap height must be positive and finite, got {height}"
            )));
        }
        Ok(Self {
            num_nodes,
            height,
            spacing: height / (num_nodes - 1) as f64,
        })
    }

    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Gap between the plates [m].
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Node spacing dy [m]. Always > 0.
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// y-coordinate of node `i` [m].
    pub fn coordinate(&self, i: usize) -> f64 {
        self.spacing * i as f64
    }

    /// y-coordinates of all nodes, bottom wall first.
    pub fn coordinates(&self) -> Vec<f64> {
        (0..self.num_nodes).map(|i| self.coordinate(i)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacing() {
        let grid = Grid::new(10, 0.01).unwrap();
        // dy = 0.01 / 9
        assert!((grid.spacing() - 0.01 / 9.0).abs() < 1e-18);
        assert_eq!(grid.num_nodes(), 10);
        assert!((grid.height() - 0.01).abs() < 1e-18);
    }

    #[test]
    fn test_coordinates_span_the_gap() {
        let grid = Grid::new(5, 2.0).unwrap();
        let y = grid.coordinates();
        assert_eq!(y.len(), 5);
        assert_eq!(y[0], 0.0);
        assert!((y[4] - 2.0).abs() < 1e-12);
        assert!((y[2] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_degenerate_inputs() {
        assert!(Grid::new(2, 0.01).is_err());
        assert!(Grid::new(50, 0.0).is_err());
        assert!(Grid::new(50, -1.0).is_err());
        assert!(Grid::new(50, f64::NAN).is_err());
        assert!(Grid::new(3, 0.01).is_ok());
    }
}
