//! Waxman models over Gaussian-clustered points in the unit square.
//!
//! Points are drawn around `centers` uniformly placed centers with spread
//! `σ ~ U(0.005, 0.1)`; each cluster gets `⌊n·σ/Σσ⌋` points, clipped to
//! the square, and uniform points pad the total up to `n`. Each unordered
//! pair at distance `d` is linked with probability `α·exp(−d/(β·L))`,
//! `L` being the largest pairwise distance, and every link becomes two arcs.

use immunet_core::errors::GeneratorError;
use rand::Rng;
use rand_distr::{Distribution, Normal};

use super::weights::build_model;
use super::{check_nodes, ModelParams};
use crate::model::ContagionModel;

const MAX_SIGMA: f64 = 0.1;
const MIN_SIGMA: f64 = 0.05 * MAX_SIGMA;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaxmanParams {
    pub nodes: usize,
    pub centers: usize,
    /// Edge density, in `(0, 1]`.
    pub alpha: f64,
    /// Distance decay, `> 0`.
    pub beta: f64,
    pub model: ModelParams,
}

impl WaxmanParams {
    pub fn new(nodes: usize, centers: usize, alpha: f64, beta: f64) -> Self {
        Self {
            nodes,
            centers,
            alpha,
            beta,
            model: ModelParams::default(),
        }
    }

    pub fn validate(&self) -> Result<(), GeneratorError> {
        check_nodes(self.nodes)?;
        if self.centers == 0 {
            return Err(GeneratorError::InvalidParameter {
                field: "centers",
                message: "must be at least 1".to_string(),
            });
        }
        if !(self.alpha > 0.0 && self.alpha <= 1.0) {
            return Err(GeneratorError::InvalidParameter {
                field: "alpha",
                message: format!("{} is outside (0, 1]", self.alpha),
            });
        }
        if !(self.beta > 0.0 && self.beta.is_finite()) {
            return Err(GeneratorError::InvalidParameter {
                field: "beta",
                message: format!("{} must be a positive number", self.beta),
            });
        }
        self.model.validate()
    }

    /// `LT_waxman_gaussian_{nodes}_{vaccines}_{instances}.txt`
    pub fn default_file_name(&self) -> String {
        format!(
            "LT_waxman_gaussian_{}_{}_{}.txt",
            self.nodes,
            self.model.num_vaccines(self.nodes),
            self.model.num_instances
        )
    }
}

pub fn generate<R: Rng + ?Sized>(
    params: &WaxmanParams,
    rng: &mut R,
) -> Result<ContagionModel, GeneratorError> {
    params.validate()?;

    let points = gaussian_points(params.nodes, params.centers, rng)?;
    let max_distance = points
        .iter()
        .enumerate()
        .flat_map(|(i, a)| points[..i].iter().map(move |b| distance(*a, *b)))
        .fold(0.0_f64, f64::max);

    let mut arcs = Vec::new();
    if max_distance > 0.0 {
        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                let d = distance(points[i], points[j]);
                let probability = params.alpha * (-d / (params.beta * max_distance)).exp();
                if rng.gen::<f64>() < probability {
                    arcs.push((i, j));
                    arcs.push((j, i));
                }
            }
        }
    }

    tracing::debug!(
        nodes = params.nodes,
        centers = params.centers,
        edges = arcs.len(),
        "generated Waxman graph"
    );
    Ok(build_model(params.nodes, arcs, &params.model, rng))
}

/// Exactly `nodes` points in the unit square.
fn gaussian_points<R: Rng + ?Sized>(
    nodes: usize,
    centers: usize,
    rng: &mut R,
) -> Result<Vec<[f64; 2]>, GeneratorError> {
    let cluster_centers: Vec<[f64; 2]> = (0..centers)
        .map(|_| [rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0)])
        .collect();
    let sigmas: Vec<f64> = (0..centers)
        .map(|_| rng.gen_range(MIN_SIGMA..MAX_SIGMA))
        .collect();
    let sigma_sum: f64 = sigmas.iter().sum();

    let mut points = Vec::with_capacity(nodes);
    for (center, &sigma) in cluster_centers.iter().zip(&sigmas) {
        let count = (nodes as f64 * sigma / sigma_sum) as usize;
        let normals = [center[0], center[1]].map(|mean| Normal::new(mean, sigma));
        let [x, y] = match normals {
            [Ok(x), Ok(y)] => [x, y],
            _ => {
                return Err(GeneratorError::InvalidParameter {
                    field: "centers",
                    message: format!("invalid cluster spread {sigma}"),
                })
            }
        };
        for _ in 0..count {
            points.push([
                x.sample(rng).clamp(0.0, 1.0),
                y.sample(rng).clamp(0.0, 1.0),
            ]);
        }
    }
    points.truncate(nodes);
    while points.len() < nodes {
        points.push([rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0)]);
    }
    Ok(points)
}

fn distance(a: [f64; 2], b: [f64; 2]) -> f64 {
    ((a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2)).sqrt()
}
