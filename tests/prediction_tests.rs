// tests/prediction_tests.rs

mod common;

use bvll::{
    BvllError, Normalization, ParamKey, ParameterSet, Predictor, PredictorConfig, Scan,
};
use common::{np_wilson, reference_parameters, sm_wilson};

fn without(par: &ParameterSet, key: &ParamKey) -> ParameterSet {
    par.iter()
        .filter(|(k, _)| *k != key)
        .map(|(k, v)| (k.clone(), v))
        .collect()
}

fn branching_ratio_predictor(parent: &str, daughter: &str, lepton: &str) -> Predictor {
    let config = PredictorConfig { normalization: Normalization::BranchingRatio, ..PredictorConfig::default() };
    Predictor::from_labels(parent, daughter, lepton)
        .and_then(|p| p.with_config(config))
        .expect("supported mode")
}

#[test]
fn test_unsupported_labels_are_configuration_errors() {
    let par = reference_parameters();
    let wc = sm_wilson();
    for (parent, daughter, lepton) in [("B0", "phi", "mu"), ("B0", "K*0", "nu"), ("Bc", "K*0", "mu")] {
        assert!(
            matches!(
                bvll::compute_angular_coefficients(2.0, &wc, &par, parent, daughter, lepton),
                Err(BvllError::Configuration { .. })
            ),
            "{} -> {} {} accepted",
            parent,
            daughter,
            lepton
        );
    }
}

#[test]
fn test_string_api_reports_domain_violations() {
    let result = bvll::compute_angular_coefficients(25.0, &sm_wilson(), &reference_parameters(), "B0", "K*0", "mu");
    match result {
        Err(BvllError::Domain { q2, .. }) => assert_eq!(q2, 25.0),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_missing_parameters_are_named() {
    let par = without(&reference_parameters(), &ParamKey::plain("Gmu"));
    match bvll::compute_angular_coefficients(2.0, &sm_wilson(), &par, "B0", "K*0", "mu") {
        Err(BvllError::MissingParameter { key }) => assert_eq!(key, "Gmu"),
        other => panic!("unexpected {:?}", other),
    }

    // lifetimes are only needed for branching ratios
    let par = without(&reference_parameters(), &ParamKey::lifetime("B0"));
    assert!(bvll::compute_angular_coefficients(2.0, &sm_wilson(), &par, "B0", "K*0", "mu").is_ok());
    match branching_ratio_predictor("B0", "K*0", "mu").angular_coefficients(2.0, &sm_wilson(), &par) {
        Err(BvllError::MissingParameter { key }) => assert_eq!(key, "lifetime:B0"),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_missing_form_factor_coefficient() {
    let par = without(&reference_parameters(), &ParamKey::qualified("B->K* BSZ", "a1_T23"));
    match bvll::compute_angular_coefficients(2.0, &sm_wilson(), &par, "B+", "K*+", "e") {
        Err(BvllError::MissingFormFactor { process, name }) => {
            assert_eq!(process, "B->K*");
            assert_eq!(name, "B->K* BSZ:a1_T23");
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_config_from_json_drives_the_predictor() -> Result<(), BvllError> {
    let config = PredictorConfig::from_json_str(r#"{"normalization": "branching_ratio", "engine": "helicity"}"#)?;
    let par = reference_parameters();
    let wc = sm_wilson();
    let br = Predictor::from_labels("B0", "K*0", "mu")?.with_config(config)?.angular_coefficients(2.0, &wc, &par)?;
    let rate = Predictor::from_labels("B0", "K*0", "mu")?.angular_coefficients(2.0, &wc, &par)?;

    let lifetime = par.lifetime("B0")?;
    assert!((br.j1s / rate.j1s - lifetime).abs() < 1e-12 * lifetime);

    assert!(matches!(
        Predictor::from_labels("B0", "K*0", "mu")?.with_config(PredictorConfig { bin_points: 8, ..config }),
        Err(BvllError::Configuration { .. })
    ));
    Ok(())
}

#[test]
fn test_standard_model_observables() -> Result<(), BvllError> {
    let par = reference_parameters();
    let wc = sm_wilson();
    let p = branching_ratio_predictor("B0", "K*0", "mu");

    let low = p.observables(1.5, &wc, &par)?;
    assert!(low.rate > 3.5e-8 && low.rate < 4.6e-8, "dBR/dq2 = {}", low.rate);
    assert!(low.fl > 0.8 && low.fl < 0.93, "FL = {}", low.fl);

    let mid = p.observables(6.0, &wc, &par)?;
    assert!(mid.fl > 0.6 && mid.fl < 0.75, "FL = {}", mid.fl);
    assert!(p.observables(4.0, &wc, &par)?.s5 < -0.2);

    // real Wilson coefficients: no T-odd asymmetries
    for value in [mid.s7, mid.s8, mid.s9] {
        assert!(value.abs() < 1e-12, "T-odd observable {}", value);
    }
    Ok(())
}

#[test]
fn test_observables_at_threshold_are_unstable() {
    let par = reference_parameters();
    let p = Predictor::from_labels("B0", "K*0", "tau").unwrap();
    let (lower, _) = p.q2_range(&par).unwrap();
    assert!(matches!(
        p.observables(lower, &sm_wilson(), &par),
        Err(BvllError::NumericalInstability { .. })
    ));
}

#[test]
fn test_parallel_scan_matches_sequential_evaluation() -> Result<(), BvllError> {
    let par = reference_parameters();
    let wc = np_wilson();
    let p = Predictor::from_labels("Bs", "phi", "mu")?;
    let q2_points: Vec<f64> = (1..=40).map(|i| 0.45 * i as f64).collect();

    let scan = p.scan(&q2_points, &wc, &par)?;
    assert_eq!(scan.len(), q2_points.len());
    assert_eq!(scan.mode(), "Bs -> phi");
    for (point, q2) in scan.points().iter().zip(q2_points.iter()) {
        assert_eq!(point.q2, *q2);
        let sequential = p.angular_coefficients(*q2, &wc, &par)?;
        for (a, b) in point.coefficients.iter().zip(sequential.iter()) {
            assert_eq!(a.1.to_bits(), b.1.to_bits());
        }
    }

    let restored: Scan = serde_json::from_str(&scan.to_json()?).expect("scan json");
    assert_eq!(restored.len(), scan.len());
    assert_eq!(restored.lepton(), "mu");
    let (a, b) = (restored.points()[7].coefficients.j5, scan.points()[7].coefficients.j5);
    assert!((a - b).abs() <= 1e-15 * b.abs());
    Ok(())
}

#[test]
fn test_scan_fails_on_the_first_bad_point() {
    let par = reference_parameters();
    let p = Predictor::from_labels("B0", "K*0", "mu").unwrap();
    assert!(matches!(
        p.scan(&[1.0, 2.0, 30.0, 4.0], &sm_wilson(), &par),
        Err(BvllError::Domain { .. })
    ));
}

#[test]
fn test_binned_observables() -> Result<(), BvllError> {
    let par = reference_parameters();
    let wc = sm_wilson();
    let p = branching_ratio_predictor("B0", "K*0", "mu");

    let bin = p.binned(1.1, 6.0, &wc, &par)?;
    assert!(bin.observables.fl > 0.6 && bin.observables.fl < 0.9);
    let edges = [p.observables(1.1, &wc, &par)?.rate, p.observables(6.0, &wc, &par)?.rate];
    let average = bin.average_rate();
    assert!(average > 0.8 * edges[0].min(edges[1]) && average < 1.2 * edges[0].max(edges[1]));

    // Simpson converges quickly on the smooth integrand
    let config = PredictorConfig { bin_points: 129, ..*p.config() };
    let fine = p.clone().with_config(config)?.binned(1.1, 6.0, &wc, &par)?;
    assert!((fine.observables.rate - bin.observables.rate).abs() < 1e-6 * bin.observables.rate);
    Ok(())
}

#[test]
fn test_bins_outside_phase_space_are_rejected() {
    let par = reference_parameters();
    let p = Predictor::from_labels("B0", "K*0", "mu").unwrap();
    assert!(matches!(p.binned(15.0, 20.0, &sm_wilson(), &par), Err(BvllError::Domain { .. })));
    assert!(matches!(p.binned(0.0, 2.0, &sm_wilson(), &par), Err(BvllError::Domain { .. })));
    assert!(matches!(p.binned(4.0, 2.0, &sm_wilson(), &par), Err(BvllError::Configuration { .. })));
}

#[test]
fn test_tau_bin_from_threshold() -> Result<(), BvllError> {
    let par = reference_parameters();
    let p = Predictor::from_labels("B+", "K*+", "tau")?;
    let (lower, upper) = p.q2_range(&par)?;
    let bin = p.binned(lower, upper, &np_wilson(), &par)?;
    assert!(bin.coefficients.is_finite());
    assert!(bin.observables.rate > 0.0);
    Ok(())
}
