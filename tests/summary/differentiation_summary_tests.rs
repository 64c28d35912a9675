use tabula::summary::build_differentiation_methods_summary_with_cfg;
use tabula::differentiation::DifferentiationCfg;
use tabula::{build_differentiation_methods_summary, ConfigError, DataError, TabulaError, TabularFunction};

#[test]
fn both_methods_agree_on_quartic() {
    let quartic = |t: f64| t.powi(4) - 2.0 * t.powi(3) + t - 1.0;
    let x: Vec<f64> = (0..7).map(|i| 0.5 * f64::from(i)).collect();
    let f: Vec<f64> = x.iter().map(|&t| quartic(t)).collect();

    let summary = build_differentiation_methods_summary(&TabularFunction::new(&x, &f), &x);
    assert!(summary.interpolation5_error.is_none());
    assert!(summary.approximation5_error.is_none());
    assert_eq!(summary.rows.len(), x.len());
    for row in &summary.rows {
        assert!(row.interpolation5.is_some());
        assert!(row.approximation5.is_some());
        assert!(row.abs_diff.is_some_and(|d| d <= 1e-9));
    }

    let mean = summary.mean_abs_diff.expect("both methods produced values");
    let max  = summary.max_abs_diff.expect("both methods produced values");
    assert!(mean <= max && max <= 1e-9);
}

#[test]
fn non_uniform_grid_degrades_one_side() {
    let x = [0.0, 1.0, 2.0, 3.0, 4.1];
    let f = x.map(|t| t * t);
    let x_eval = [0.5, 2.0, 3.5];

    let summary = build_differentiation_methods_summary(&TabularFunction::new(&x, &f), &x_eval);
    assert!(summary.interpolation5_error.is_none());
    assert!(matches!(
        summary.approximation5_error,
        Some(TabulaError::Data(DataError::NonUniformGrid { .. }))
    ));

    for (row, &xq) in summary.rows.iter().zip(x_eval.iter()) {
        assert_eq!(row.x, xq);
        let d = row.interpolation5.expect("interpolation5 applies on any grid");
        assert!((d - 2.0 * xq).abs() <= 1e-10);
        assert_eq!(row.approximation5, None);
        assert_eq!(row.abs_diff, None);
    }
    assert_eq!(summary.mean_abs_diff, None);
    assert_eq!(summary.max_abs_diff, None);
}

#[test]
fn off_node_points_degrade_one_side() {
    let x = [0.0, 1.0, 2.0, 3.0, 4.0];
    let f = x.map(|t| t * t * t);

    let summary = build_differentiation_methods_summary(&TabularFunction::new(&x, &f), &[1.0, 2.5]);
    assert!(matches!(
        summary.approximation5_error,
        Some(TabulaError::Data(DataError::NotOnNode { got, .. })) if got == 2.5
    ));
    assert!(summary.rows.iter().all(|r| r.interpolation5.is_some() && r.approximation5.is_none()));
    assert_eq!(summary.mean_abs_diff, None);
}

#[test]
fn both_methods_fail() {
    let x = [0.0, 1.0, 2.0, 3.0, 4.0];
    let f = [0.0; 5];
    let x_eval = [1.0, 9.0];

    let summary = build_differentiation_methods_summary(&TabularFunction::new(&x, &f), &x_eval);
    let expected = TabulaError::Data(DataError::OutOfBounds { got: 9.0, x_min: 0.0, x_max: 4.0 });
    assert_eq!(summary.interpolation5_error, Some(expected.clone()));
    assert_eq!(summary.approximation5_error, Some(expected));

    assert_eq!(summary.rows.len(), 2);
    assert!(summary.rows.iter().all(|r| r.interpolation5.is_none() && r.approximation5.is_none()));
    assert_eq!(summary.max_abs_diff, None);
}

#[test]
fn cfg_reaches_both_methods() -> Result<(), ConfigError> {
    let x = [0.0, 1.0, 2.0, 3.0, 4.1];
    let f = x.map(|t| 3.0 * t);
    let cfg = DifferentiationCfg::new().set_step_tol(0.1)?;

    let summary = build_differentiation_methods_summary_with_cfg(&TabularFunction::new(&x, &f), &[2.0], &cfg);
    assert!(summary.approximation5_error.is_none());
    assert!(summary.rows[0].interpolation5.is_some_and(|d| (d - 3.0).abs() <= 1e-10));
    assert!(summary.mean_abs_diff.is_some());
    Ok(())
}
