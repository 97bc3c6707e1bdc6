//! Tests for the truncated gamma SAS function

#[cfg(test)]
mod tests {
    use ndarray::array;
    use rsas::SasError;
    use rsas::support::configuration::CDF_TOLERANCE;
    use rsas::functions::{Gamma, SasCdf, SasCdfAll, SasInverseCdf};

    // Tests that an infinite ST_max leaves the incomplete gamma unscaled
    // Verified by computing the rescale factor for every row
    #[test]
    fn test_gamma_untruncated_matches_exponential() {
        let params = array![[1.0, f64::INFINITY, 2.0, 1.0]];
        let gamma = Gamma::new(params.view()).expect("Valid gamma");
        assert!((gamma.rescale()[0] - 1.0).abs() < f64::EPSILON);

        let st = array![0.0, 1.0, 3.0, 11.0, f64::INFINITY].into_dyn();
        let cdf = gamma.cdf_i(st.view(), 0).expect("Valid timestep");
        assert!(cdf[[0]].abs() < f64::EPSILON);
        assert!(cdf[[1]].abs() < f64::EPSILON);
        assert!((cdf[[2]] - (1.0 - (-1.0_f64).exp())).abs() < 1e-12);
        assert!((cdf[[3]] - (1.0 - (-5.0_f64).exp())).abs() < 1e-12);
        assert!((cdf[[4]] - 1.0).abs() < f64::EPSILON);
    }

    // Tests truncation rescales the CDF to reach exactly 1 at ST_max
    // Verified by dropping the rescale factor from the CDF
    #[test]
    fn test_gamma_truncation_reaches_one_at_st_max() {
        let params = array![[0.0, 2.0, 1.0, 2.0]];
        let gamma = Gamma::new(params.view()).expect("Valid gamma");

        let untruncated_at_max = 1.0 - (-2.0_f64).exp() * 3.0;
        assert!((gamma.rescale()[0] - 1.0 / untruncated_at_max).abs() < 1e-12);

        let st = array![2.0 - 1e-9, 2.0, 5.0, 1.0].into_dyn();
        let cdf = gamma.cdf_i(st.view(), 0).expect("Valid timestep");
        assert!((cdf[[0]] - 1.0).abs() < 1e-8, "got {}", cdf[[0]]);
        assert!((cdf[[1]] - 1.0).abs() < f64::EPSILON);
        assert!((cdf[[2]] - 1.0).abs() < f64::EPSILON);

        let at_one = (1.0 - (-1.0_f64).exp() * 2.0) / untruncated_at_max;
        assert!((cdf[[3]] - at_one).abs() < 1e-12);
    }

    // Tests cdf_all matches cdf_i row by row
    // Verified by using the rescale factor of row 0 for all rows
    #[test]
    fn test_gamma_cdf_all_matches_cdf_i() {
        let params = array![
            [0.0, f64::INFINITY, 1.0, 0.5],
            [1.0, 5.0, 2.0, 3.0],
            [0.0, 10.0, 0.5, 1.5]
        ];
        let gamma = Gamma::new(params.view()).expect("Valid gamma");

        let st = array![0.7, 3.0, 0.0];
        let all = gamma.cdf_all(st.view()).expect("Matching length");
        for (i, value) in st.iter().enumerate() {
            let single = gamma
                .cdf_i(array![*value].into_dyn().view(), i)
                .expect("Valid timestep");
            assert!((all[i] - single[[0]]).abs() < 1e-15);
        }
    }

    // Tests the inverse saturates to +inf and returns NaN for P <= 0
    // Verified by returning ST_min for P <= 0
    #[test]
    fn test_gamma_inverse_edges() {
        let params = array![[3.0, f64::INFINITY, 2.0, 1.0]];
        let gamma = Gamma::new(params.view()).expect("Valid gamma");

        let p = array![-0.1, 0.0, 1.0, 1.5, f64::NAN].into_dyn();
        let st = gamma.invcdf_i(p.view(), 0).expect("Valid timestep");
        assert!(st[[0]].is_nan());
        assert!(st[[1]].is_nan());
        assert!(st[[2]].is_infinite() && st[[2]] > 0.0);
        assert!(st[[3]].is_infinite());
        assert!(st[[4]].is_nan());

        let median = gamma
            .invcdf_i(array![0.5].into_dyn().view(), 0)
            .expect("Valid timestep");
        assert!((median[[0]] - (3.0 + 2.0 * std::f64::consts::LN_2)).abs() < 1e-10);
    }

    // Tests the truncated inverse round-trips through the CDF
    // Verified by inverting P without dividing by the rescale factor
    #[test]
    fn test_gamma_truncated_round_trip() {
        let params = array![[0.5, 4.0, 1.5, 2.5]];
        let gamma = Gamma::new(params.view()).expect("Valid gamma");

        let p = array![0.05, 0.3, 0.6, 0.95].into_dyn();
        let st = gamma.invcdf_i(p.view(), 0).expect("Valid timestep");
        assert!(st.iter().all(|value| *value > 0.5 && *value < 4.0));

        let recovered = gamma.cdf_i(st.view(), 0).expect("Valid timestep");
        for (value, want) in recovered.iter().zip(p.iter()) {
            assert!((value - want).abs() < CDF_TOLERANCE, "Expected {want}, got {value}");
        }
    }

    // Tests small shapes invert to quantiles below 1e-15 and round-trip
    // Verified by evaluating P(a, x) with the statrs routine for tiny x
    #[test]
    fn test_gamma_small_shape_round_trip() {
        let params = array![[0.0, f64::INFINITY, 1.0, 0.01], [0.0, f64::INFINITY, 2.0, 0.001]];
        let gamma = Gamma::new(params.view()).expect("Valid gamma");

        let p = array![1e-3, 0.5, 0.9].into_dyn();
        let st = gamma.invcdf_i(p.view(), 0).expect("Valid timestep");
        assert!(st[[1]] < 1e-15 && st[[1]] > 0.0, "got {}", st[[1]]);
        let recovered = gamma.cdf_i(st.view(), 0).expect("Valid timestep");
        for (value, want) in recovered.iter().zip(p.iter()) {
            assert!((value - want).abs() < CDF_TOLERANCE, "Expected {want}, got {value}");
        }

        let upper = array![0.6, 0.99].into_dyn();
        let st = gamma.invcdf_i(upper.view(), 1).expect("Valid timestep");
        let recovered = gamma.cdf_i(st.view(), 1).expect("Valid timestep");
        for (value, want) in recovered.iter().zip(upper.iter()) {
            assert!((value - want).abs() < CDF_TOLERANCE, "Expected {want}, got {value}");
        }
    }

    // Tests a truncation far inside the left tail keeps every quantile below ST_max
    // Verified by storing the rescale factor instead of its logarithm
    #[test]
    fn test_gamma_narrow_truncation_round_trip() {
        let params = array![[0.0, 1e-6, 1.0, 20.0]];
        let gamma = Gamma::new(params.view()).expect("Valid gamma");

        let p = array![1e-12, 1e-3, 0.5, 0.999].into_dyn();
        let st = gamma.invcdf_i(p.view(), 0).expect("Valid timestep");
        assert!(st.iter().all(|value| *value > 0.0 && *value < 1e-6), "got {st}");

        let recovered = gamma.cdf_i(st.view(), 0).expect("Valid timestep");
        for (value, want) in recovered.iter().zip(p.iter()) {
            assert!(
                (value - want).abs() < CDF_TOLERANCE * want.max(1e-3),
                "Expected {want}, got {value}"
            );
        }

        let at_bound = gamma
            .cdf_i(array![1e-6].into_dyn().view(), 0)
            .expect("Valid timestep");
        assert!((at_bound[[0]] - 1.0).abs() < f64::EPSILON);
    }

    // Tests non-positive scale and shape are rejected
    // Verified by skipping the shape validation
    #[test]
    fn test_gamma_rejects_invalid_parameters() {
        let bad_shape = array![[0.0, 1.0, 1.0, 0.0]];
        assert!(matches!(
            Gamma::new(bad_shape.view()),
            Err(SasError::InvalidParameter {
                parameter: "shape",
                ..
            })
        ));

        let bad_scale = array![[0.0, 1.0, -2.0, 1.0]];
        assert!(Gamma::new(bad_scale.view()).is_err());

        let wrong_columns = array![[0.0, 1.0, 1.0]];
        assert!(Gamma::new(wrong_columns.view()).is_err());
    }
}
