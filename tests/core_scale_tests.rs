use approx::assert_abs_diff_eq;
use bandchart::core::{LinearScale, ValueDomain};

#[test]
fn linear_scale_maps_domain_ends_to_range_ends() {
    let scale = LinearScale::new(0.0, 30.0, 300.0, 0.0);
    assert_abs_diff_eq!(scale.map(0.0), 300.0, epsilon = 1e-9);
    assert_abs_diff_eq!(scale.map(30.0), 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(scale.map(15.0), 150.0, epsilon = 1e-9);
}

#[test]
fn linear_scale_extrapolates_outside_domain() {
    let scale = LinearScale::new(0.0, 10.0, 0.0, 100.0);
    assert_abs_diff_eq!(scale.map(-5.0), -50.0, epsilon = 1e-9);
    assert_abs_diff_eq!(scale.map(20.0), 200.0, epsilon = 1e-9);
}

#[test]
fn linear_scale_with_zero_width_domain_stays_finite() {
    let scale = LinearScale::new(5.0, 5.0, 0.0, 100.0);
    let px = scale.map(5.0);
    assert!(px.is_finite());
    assert_abs_diff_eq!(px, 0.0, epsilon = 1e-9);
}

#[test]
fn linear_scale_invert_recovers_value() {
    let scale = LinearScale::new(-20.0, 80.0, 400.0, 0.0);
    let px = scale.map(37.5);
    assert_abs_diff_eq!(scale.invert(px), 37.5, epsilon = 1e-9);
}

#[test]
fn linear_scale_exposes_domain_and_range() {
    let scale = LinearScale::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(scale.domain(), (1.0, 2.0));
    assert_eq!(scale.range(), (3.0, 4.0));
}

#[test]
fn value_domain_defaults_to_zero_and_data_max() {
    let domain = ValueDomain::resolve(None, None, [10.0, 30.0, 20.0]);
    assert_eq!(domain, ValueDomain::new(0.0, 30.0));
}

#[test]
fn value_domain_of_empty_data_is_unit() {
    let domain = ValueDomain::resolve(None, None, std::iter::empty());
    assert_eq!(domain, ValueDomain::new(0.0, 1.0));
}

#[test]
fn value_domain_max_never_drops_below_zero() {
    let domain = ValueDomain::resolve(None, None, [-4.0, -9.0]);
    assert_eq!(domain, ValueDomain::new(0.0, 1.0));
}

#[test]
fn value_domain_widens_collapsed_override() {
    let domain = ValueDomain::resolve(Some(7.0), Some(7.0), [1.0, 2.0]);
    assert_eq!(domain, ValueDomain::new(7.0, 8.0));
}

#[test]
fn value_domain_overrides_take_precedence() {
    let domain = ValueDomain::resolve(Some(-10.0), Some(50.0), [100.0]);
    assert_eq!(domain, ValueDomain::new(-10.0, 50.0));
    assert_abs_diff_eq!(domain.span(), 60.0);
}
