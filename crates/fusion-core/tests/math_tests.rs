use fusion_core::math::*;

#[test]
fn test_mix_endpoints() {
    assert_eq!(mix_f32(2.0, 6.0, 0.0), 2.0);
    assert_eq!(mix_f32(2.0, 6.0, 1.0), 6.0);
    assert_eq!(mix_f32(2.0, 6.0, 0.5), 4.0);
}

#[test]
fn test_smoothstep_clamped() {
    assert_eq!(smoothstep(0.0, 1.0, -3.0), 0.0);
    assert_eq!(smoothstep(0.0, 1.0, 3.0), 1.0);
    assert!((smoothstep(0.0, 1.0, 0.5) - 0.5).abs() < 1e-6);
}

#[test]
fn test_smoothstep_monotonic() {
    let mut last = 0.0;
    for i in 0..=100 {
        let v = smoothstep(13.0, 17.0, 13.0 + i as f32 * 0.04);
        assert!(v >= last, "smoothstep decreased at step {}", i);
        last = v;
    }
}

#[test]
fn test_unit_position() {
    assert_eq!(unit_position(10.0, 20.0, 15.0), 0.5);
    assert_eq!(unit_position(10.0, 20.0, 0.0), 0.0);
    assert_eq!(unit_position(10.0, 20.0, 99.0), 1.0);
    assert_eq!(unit_position(5.0, 5.0, 5.0), 0.0);
}
