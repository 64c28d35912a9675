use approx::assert_abs_diff_eq;
use tabula::differentiation::finite_difference::{five_point_derivative_at_node, FiniteDifference};
use tabula::differentiation::{differentiate_with_cfg, Algorithm, DifferentiationCfg, Differentiator};
use tabula::{differentiate, ConfigError, DataError, TabulaError, TabularFunction};

type TestResult = Result<(), TabulaError>;

#[inline]
fn quartic(t: f64) -> f64 {
    t.powi(4) - 2.0 * t.powi(3) + t - 1.0
}

#[inline]
fn dquartic(t: f64) -> f64 {
    4.0 * t.powi(3) - 6.0 * t.powi(2) + 1.0
}

#[test]
fn exact_for_quartic_at_every_node() -> TestResult {
    let x: Vec<f64> = (0..7).map(|i| 0.5 * f64::from(i)).collect();
    let f: Vec<f64> = x.iter().map(|&t| quartic(t)).collect();

    let rep = differentiate("approximation5", &TabularFunction::new(&x, &f), &x)?;
    assert_eq!(rep.algorithm_name, "approximation5");
    for (xq, dq) in rep.x.iter().zip(rep.fd.iter()) {
        assert_abs_diff_eq!(*dq, dquartic(*xq), epsilon = 1e-6);
    }
    Ok(())
}

#[test]
fn every_formula_on_five_nodes() {
    let x = [-2.0, -1.0, 0.0, 1.0, 2.0];
    let f = x.map(quartic);
    for (i, &xi) in x.iter().enumerate() {
        assert_abs_diff_eq!(five_point_derivative_at_node(&f, i, 1.0), dquartic(xi), epsilon = 1e-9);
    }
}

#[test]
fn point_near_node_snaps() -> TestResult {
    let x: Vec<f64> = (0..7).map(|i| 0.5 * f64::from(i)).collect();
    let f: Vec<f64> = x.iter().map(|&t| quartic(t)).collect();

    // node tolerance is 0.5 * 1e-3
    let rep = differentiate("approximation5", &TabularFunction::new(&x, &f), &[1.0002, 2.9996])?;
    assert_abs_diff_eq!(rep.fd[0], dquartic(1.0), epsilon = 1e-6);
    assert_abs_diff_eq!(rep.fd[1], dquartic(3.0), epsilon = 1e-6);
    Ok(())
}

#[test]
fn point_between_nodes_rejected() {
    let x: Vec<f64> = (0..7).map(|i| 0.5 * f64::from(i)).collect();
    let f: Vec<f64> = x.iter().map(|&t| quartic(t)).collect();

    let err = differentiate("approximation5", &TabularFunction::new(&x, &f), &[1.25]).unwrap_err();
    assert!(matches!(
        err,
        TabulaError::Data(DataError::NotOnNode { got, nearest, tol })
        if got == 1.25 && nearest == 1.0 && (tol - 5e-4).abs() < 1e-15
    ));
}

#[test]
fn non_uniform_grid_rejected() {
    let x = [0.0, 1.0, 2.0, 3.0, 4.1];
    let f = x.map(quartic);

    let err = differentiate("approximation5", &TabularFunction::new(&x, &f), &[1.0]).unwrap_err();
    assert!(matches!(err, TabulaError::Data(DataError::NonUniformGrid { .. })));

    let err = FiniteDifference::new(TabularFunction::new(&x, &f), &DifferentiationCfg::new()).unwrap_err();
    assert_eq!(err, DataError::NonUniformGrid { tol: 1e-6 });
}

#[test]
fn looser_step_tolerance_accepts_grid() -> TestResult {
    let x = [0.0, 1.0, 2.0, 3.0, 4.1];
    let f = [1.0; 5];
    let cfg = DifferentiationCfg::new().set_step_tol(0.1)?;

    let est = FiniteDifference::new(TabularFunction::new(&x, &f), &cfg)?;
    assert_abs_diff_eq!(est.step(), 1.025, epsilon = 1e-12);
    assert_abs_diff_eq!(est.derivative(2.0)?, 0.0, epsilon = 1e-12);

    let rep = differentiate_with_cfg(Algorithm::Approximation5, &TabularFunction::new(&x, &f), &[4.1], &cfg)?;
    assert_abs_diff_eq!(rep.fd[0], 0.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn invalid_tolerances_rejected() {
    let err = DifferentiationCfg::new().set_step_tol(0.0).unwrap_err();
    assert_eq!(err, ConfigError::InvalidStepTol { got: 0.0 });

    let err = DifferentiationCfg::new().set_node_tol_factor(f64::NAN).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidNodeTolFactor { got } if got.is_nan()));
}

#[test]
fn wider_node_tolerance() -> TestResult {
    let x = [0.0, 1.0, 2.0, 3.0, 4.0];
    let f = [0.0, 2.0, 4.0, 6.0, 8.0];
    let cfg = DifferentiationCfg::new().set_node_tol_factor(0.25)?;

    let rep = differentiate_with_cfg(Algorithm::Approximation5, &TabularFunction::new(&x, &f), &[0.2, 3.8], &cfg)?;
    assert_abs_diff_eq!(rep.fd[0], 2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(rep.fd[1], 2.0, epsilon = 1e-12);
    Ok(())
}
