//! Tests for the uniform SAS function

#[cfg(test)]
mod tests {
    use ndarray::array;
    use rsas::functions::{SasCdf, SasCdfAll, SasInverseCdf, Uniform};

    // Tests the linear ramp with exclusive bounds on [0, 10]
    // Verified by changing the upper comparison to <=
    #[test]
    fn test_uniform_linear_ramp() {
        let params = array![[0.0, 10.0]];
        let uniform = Uniform::new(params.view()).expect("Valid uniform");

        let st = array![-1.0, 0.0, 2.5, 5.0, 10.0, 12.0].into_dyn();
        let cdf = uniform.cdf_i(st.view(), 0).expect("Valid timestep");
        let expected = [0.0, 0.0, 0.25, 0.5, 1.0, 1.0];
        for (value, want) in cdf.iter().zip(expected) {
            assert!((value - want).abs() < 1e-12, "Expected {want}, got {value}");
        }
        assert!((uniform.rate()[0] - 0.1).abs() < 1e-12);
    }

    // Tests cdf_i preserves the shape of multi-dimensional queries
    // Verified by flattening the output
    #[test]
    fn test_uniform_cdf_i_keeps_shape() {
        let params = array![[0.0, 4.0]];
        let uniform = Uniform::new(params.view()).expect("Valid uniform");

        let st = array![[1.0, 2.0], [3.0, 5.0]].into_dyn();
        let cdf = uniform.cdf_i(st.view(), 0).expect("Valid timestep");
        assert_eq!(cdf.shape(), &[2, 2]);
        assert!((cdf[[1, 0]] - 0.75).abs() < 1e-12);
        assert!((cdf[[1, 1]] - 1.0).abs() < f64::EPSILON);
    }

    // Tests cdf_all pairs each storage value with its own timestep
    // Verified by evaluating every element against timestep 0
    #[test]
    fn test_uniform_cdf_all() {
        let params = array![[0.0, 10.0], [5.0, 15.0], [0.0, 2.0]];
        let uniform = Uniform::new(params.view()).expect("Valid uniform");

        let cdf = uniform
            .cdf_all(array![5.0, 5.0, 1.0].view())
            .expect("Matching length");
        assert!((cdf[0] - 0.5).abs() < 1e-12);
        assert!(cdf[1].abs() < f64::EPSILON);
        assert!((cdf[2] - 0.5).abs() < 1e-12);

        assert!(uniform.cdf_all(array![1.0].view()).is_err());
        assert!(uniform.cdf_i(array![1.0].into_dyn().view(), 3).is_err());
    }

    // Tests the inverse clamps probabilities outside [0, 1]
    // Verified by removing the clamp
    #[test]
    fn test_uniform_inverse_clamps() {
        let params = array![[2.0, 6.0]];
        let uniform = Uniform::new(params.view()).expect("Valid uniform");

        let p = array![-0.5, 0.0, 0.25, 1.0, 1.5].into_dyn();
        let st = uniform.invcdf_i(p.view(), 0).expect("Valid timestep");
        let expected = [2.0, 2.0, 3.0, 6.0, 6.0];
        for (value, want) in st.iter().zip(expected) {
            assert!((value - want).abs() < 1e-12, "Expected {want}, got {value}");
        }

        let nan = uniform
            .invcdf_i(array![f64::NAN].into_dyn().view(), 0)
            .expect("Valid timestep");
        assert!(nan[[0]].is_nan());
    }

    // Tests the wrong column count is rejected
    // Verified by skipping the column check
    #[test]
    fn test_uniform_requires_two_columns() {
        let params = array![[0.0, 1.0, 2.0]];
        assert!(Uniform::new(params.view()).is_err());
    }
}
