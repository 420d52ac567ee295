//! Trajectory comparison
//!
//! For every active initial condition, the four methods of [`Method::ALL`]
//! are run on the same [`TimeGrid`](crate::solver::TimeGrid). The results are
//! returned three ways:
//!
//! - per condition ([`TrajectorySet`]), for plotting one curve per method
//! - per time ([`TimeRecord`]), keyed `"{method}_{index}"`, for tables
//! - aggregated ([`ErrorSummary`]), the maximum absolute error of each
//!   numerical method against the closed form
//!
//! Conditions are independent. Above
//! [`parallel_threshold`](crate::solver::parallel_threshold) they are spread
//! over the rayon pool (feature `parallel`); the output order is always the
//! input order.
//!
//! # Example
//!
//! ```rust
//! use logistic_rs::comparison::{compare, InitialCondition, ParameterSet};
//! use logistic_rs::solver::Method;
//!
//! let parameters = ParameterSet::default();
//! let conditions = [InitialCondition::new(0.1), InitialCondition::new(0.5)];
//!
//! let report = compare(&parameters, &conditions).unwrap();
//!
//! assert_eq!(report.trajectories.len(), 2);
//! assert_eq!(report.records.len(), 21);
//! assert!(report.errors.rk4 < report.errors.heun);
//! assert!(report.errors.heun < report.errors.euler);
//! assert!(report.errors.ratio_to_rk4(Method::Euler).value().unwrap() > 1.0);
//! ```

pub mod convergence;
mod types;

pub use convergence::{observed_orders, ConvergenceStudy};
pub use types::{
    series_key, ComparisonReport, ErrorRatio, ErrorSummary, InitialCondition, ParameterSet,
    SeriesVisibility, TimeRecord, TrajectorySet,
};

use std::collections::BTreeMap;

use crate::error::SolverError;
use crate::models::LogisticGrowth;
use crate::physics::PhysicalState;
use crate::solver::{Method, Scenario, SolverConfiguration, TimeGrid};

/// Run every method for every active initial condition
///
/// Inactive conditions are skipped and do not consume an index. With no
/// active condition the report is empty and every maximum error is zero.
///
/// # Errors
///
/// `InvalidParameter` if a parameter or an active `y0` is out of domain;
/// `NonFiniteState` if any method diverges. No partial report is returned.
pub fn compare(
    parameters: &ParameterSet,
    conditions: &[InitialCondition],
) -> Result<ComparisonReport, SolverError> {
    parameters.validate()?;
    let grid = parameters.grid()?;
    let model = parameters.model()?;
    let config = parameters.configuration();

    let active = conditions
        .iter()
        .filter(|condition| condition.active)
        .map(InitialCondition::validate)
        .collect::<Result<Vec<f64>, _>>()?;

    if active.is_empty() {
        log::warn!("comparison requested with no active initial condition");
    }

    let trajectories = evaluate_conditions(&model, &config, &active)?;
    let records = merge_records(&grid, &trajectories);
    let errors = ErrorSummary::from_trajectories(&trajectories);

    log::debug!(
        "comparison: {} condition(s) x {} samples, max errors euler = {:e}, eulerApr = {:e}, rk4 = {:e}",
        trajectories.len(),
        grid.len(),
        errors.euler,
        errors.heun,
        errors.rk4
    );

    Ok(ComparisonReport {
        parameters: *parameters,
        trajectories,
        records,
        errors,
    })
}

/// All four trajectories for one starting value
fn trajectory_set(
    model: &LogisticGrowth,
    config: &SolverConfiguration,
    index: usize,
    y0: f64,
) -> Result<TrajectorySet, SolverError> {
    let scenario = Scenario::new(Box::new(model.clone()), PhysicalState::scalar(y0));
    let solve = |method: Method| {
        method
            .solver()
            .solve(&scenario, config)
            .map(|result| result.points(0))
    };

    Ok(TrajectorySet {
        index,
        initial_value: y0,
        analytic: solve(Method::Analytic)?,
        euler: solve(Method::Euler)?,
        heun: solve(Method::Heun)?,
        rk4: solve(Method::RungeKutta4)?,
    })
}

/// Sequential or parallel evaluation of the active conditions, in input order
fn evaluate_conditions(
    model: &LogisticGrowth,
    config: &SolverConfiguration,
    active: &[f64],
) -> Result<Vec<TrajectorySet>, SolverError> {
    let run = |(index, &y0): (usize, &f64)| trajectory_set(model, config, index, y0);

    #[cfg(feature = "parallel")]
    if active.len() > crate::solver::parallel_threshold() {
        use rayon::prelude::*;

        log::debug!("comparison: {} conditions on the rayon pool", active.len());
        return active.par_iter().enumerate().map(run).collect();
    }

    active.iter().enumerate().map(run).collect()
}

/// Flatten the trajectory sets into one record per grid time
fn merge_records(grid: &TimeGrid, trajectories: &[TrajectorySet]) -> Vec<TimeRecord> {
    (0..grid.len())
        .map(|i| {
            let mut values = BTreeMap::new();
            for set in trajectories {
                for method in Method::ALL {
                    values.insert(series_key(method, set.index), set.series(method)[i].y);
                }
            }
            TimeRecord {
                t: grid.time(i),
                values,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::ThresholdGuard;
    use approx::assert_relative_eq;

    fn conditions(values: &[f64]) -> Vec<InitialCondition> {
        values.iter().copied().map(InitialCondition::new).collect()
    }

    #[test]
    fn test_compare_reference_scenario() {
        let report = compare(&ParameterSet::default(), &conditions(&[0.5])).unwrap();

        let set = &report.trajectories[0];
        assert_eq!(set.len(), 21);
        assert_relative_eq!(set.analytic[20].y, 0.9933071490757153, max_relative = 1e-12);
        assert!((set.rk4[20].y - set.analytic[20].y).abs() < 1e-5);
        assert!(report.errors.euler > report.errors.heun);
        assert!(report.errors.heun > report.errors.rk4);
    }

    #[test]
    fn test_compare_skips_inactive_conditions() {
        let input = vec![
            InitialCondition::new(0.1),
            InitialCondition::inactive(0.3),
            InitialCondition::new(0.7),
        ];

        let report = compare(&ParameterSet::default(), &input).unwrap();

        assert_eq!(report.trajectories.len(), 2);
        assert_eq!(report.trajectories[1].index, 1);
        assert_eq!(report.trajectories[1].initial_value, 0.7);
        assert!(report.records[0].values.contains_key("rk4_1"));
        assert!(!report.records[0].values.contains_key("rk4_2"));
    }

    #[test]
    fn test_compare_without_active_conditions() {
        let input = vec![InitialCondition::inactive(0.3)];

        let report = compare(&ParameterSet::default(), &input).unwrap();

        assert!(report.is_empty());
        assert_eq!(report.records.len(), 21);
        assert!(report.records.iter().all(|record| record.values.is_empty()));
        assert_eq!(report.errors, ErrorSummary::default());
        assert_eq!(report.errors.ratio_to_rk4(Method::Euler), ErrorRatio::Undefined);
    }

    #[test]
    fn test_compare_records_cover_every_series() {
        let report = compare(&ParameterSet::default(), &conditions(&[0.2, 0.4])).unwrap();

        assert_eq!(report.records.len(), 21);
        for (i, record) in report.records.iter().enumerate() {
            assert_eq!(record.t, 5.0 * i as f64);
            assert_eq!(record.values.len(), 8);
            assert_eq!(
                record.get(Method::Heun, 1),
                Some(report.trajectories[1].heun[i].y)
            );
        }
    }

    #[test]
    fn test_compare_fixed_point_has_undefined_ratio() {
        let report = compare(&ParameterSet::default(), &conditions(&[1.0])).unwrap();

        assert_eq!(report.errors.rk4, 0.0);
        assert_eq!(report.errors.ratio_to_rk4(Method::Heun), ErrorRatio::Undefined);
        assert!(report.trajectories[0].euler.iter().all(|p| p.y == 1.0));
    }

    #[test]
    fn test_compare_rejects_invalid_input() {
        let parameters = ParameterSet::default().with_step_size(-1.0);
        assert!(compare(&parameters, &conditions(&[0.5])).is_err());

        let bad = conditions(&[0.5, f64::NAN]);
        assert!(compare(&ParameterSet::default(), &bad).is_err());

        // An inactive NaN is never looked at.
        let mut skipped = conditions(&[0.5]);
        skipped.push(InitialCondition::inactive(f64::NAN));
        assert!(compare(&ParameterSet::default(), &skipped).is_ok());
    }

    #[test]
    fn test_compare_reports_divergence() {
        // Euler with r·h = 50 overshoots a negative start to −∞.
        let parameters = ParameterSet::new(10.0, 1.0, 100.0, 5.0);

        let result = compare(&parameters, &conditions(&[-0.5]));

        assert!(matches!(result, Err(SolverError::NonFiniteState { .. })));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let values: Vec<f64> = (1..=12).map(|i| 0.1 * i as f64).collect();
        let input = conditions(&values);

        let sequential = {
            let _guard = ThresholdGuard::save(usize::MAX);
            compare(&ParameterSet::default(), &input).unwrap()
        };
        let parallel = {
            let _guard = ThresholdGuard::save(1);
            compare(&ParameterSet::default(), &input).unwrap()
        };

        assert_eq!(sequential, parallel);
        let order: Vec<usize> = parallel.trajectories.iter().map(|set| set.index).collect();
        assert_eq!(order, (0..12).collect::<Vec<_>>());
    }

    #[test]
    fn test_visible_filters_trajectory_sets() {
        let report = compare(&ParameterSet::default(), &conditions(&[0.1, 0.9, 1.2])).unwrap();

        let above: Vec<f64> = report
            .visible(|set| set.initial_value > 0.5)
            .map(|set| set.initial_value)
            .collect();

        assert_eq!(above, vec![0.9, 1.2]);
        assert_eq!(report.series(Method::Euler, 2).map(<[_]>::len), Some(21));
        assert!(report.series(Method::Euler, 3).is_none());
    }
}
