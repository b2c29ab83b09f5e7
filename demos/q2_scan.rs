//! q² scan of B0 -> K*0 mu+ mu- in the Standard Model and with a
//! right-handed current benchmark: angular coefficients, observables and the
//! [1.1, 6] GeV² bin.

use bvll::{BvllError, Complex64, Normalization, ParameterSet, Predictor, PredictorConfig, WilsonCoefficients};

const PARAMETERS: &str = r#"{
    "mass:B0": 5.27961, "mass:K*0": 0.89166, "mass:mu": 0.1056583715, "mass:b": 4.17,
    "lifetime:B0": 2.3092866e12,
    "Gmu": 1.1663787e-5, "alpha_e": 0.0078161638,
    "Vus": 0.22, "Vub": 0.0037, "Vcb": 0.041, "gamma": 1.22,
    "B->K* BSZ:a0_V": 0.34, "B->K* BSZ:a1_V": -1.05, "B->K* BSZ:a2_V": 2.37,
    "B->K* BSZ:a0_A0": 0.36, "B->K* BSZ:a1_A0": -1.04, "B->K* BSZ:a2_A0": 1.12,
    "B->K* BSZ:a0_A1": 0.27, "B->K* BSZ:a1_A1": 0.30, "B->K* BSZ:a2_A1": -0.11,
    "B->K* BSZ:a1_A12": 0.60, "B->K* BSZ:a2_A12": 0.12,
    "B->K* BSZ:a0_T1": 0.28, "B->K* BSZ:a1_T1": -0.89, "B->K* BSZ:a2_T1": 1.95,
    "B->K* BSZ:a1_T2": 0.40, "B->K* BSZ:a2_T2": 0.36,
    "B->K* BSZ:a0_T23": 0.67, "B->K* BSZ:a1_T23": 1.48, "B->K* BSZ:a2_T23": 1.92
}"#;

fn main() -> Result<(), BvllError> {
    println!("--- bvll Example: B0 -> K*0 mu mu q2 scan ---");

    let par = ParameterSet::from_json_str(PARAMETERS)?;
    let sm = WilsonCoefficients::new("bsmumu", 4.8)
        .with("C7", Complex64::new(-0.29, 0.0))
        .with("C9", Complex64::new(4.2, 0.0))
        .with("C10", Complex64::new(-4.2, 0.0));
    let right_handed = sm.clone().with("C9p", Complex64::new(1.0, 0.5));

    let config = PredictorConfig {
        normalization: Normalization::BranchingRatio,
        cross_check: true,
        ..PredictorConfig::default()
    };
    let predictor = Predictor::from_labels("B0", "K*0", "mu")?.with_config(config)?;

    let q2_points: Vec<f64> = (1..=18).map(|i| i as f64).collect();
    let scan = predictor.scan(&q2_points, &sm, &par)?;
    println!("\n{}", scan);

    println!("{:>6} {:>12} {:>8} {:>8} {:>8} {:>8}", "q2", "dBR/dq2", "FL", "AFB", "P5'", "P5'(C9')");
    for q2 in &q2_points {
        let obs = predictor.observables(*q2, &sm, &par)?;
        let np = predictor.observables(*q2, &right_handed, &par)?;
        println!(
            "{:>6.2} {:>12.4e} {:>8.4} {:>8.4} {:>8.4} {:>8.4}",
            q2, obs.rate, obs.fl, obs.afb, obs.p5p, np.p5p
        );
    }

    let bin = predictor.binned(1.1, 6.0, &sm, &par)?;
    println!(
        "\n[1.1, 6.0] GeV^2: BR = {:.4e}, FL = {:.4}, P5' = {:.4}",
        bin.observables.rate, bin.observables.fl, bin.observables.p5p
    );
    Ok(())
}
