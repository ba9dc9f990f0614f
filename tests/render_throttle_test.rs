use tui_life::term::RenderThrottle;

#[test]
fn render_throttle_renders_first_frame() {
    let mut t = RenderThrottle::new(1000);
    assert!(t.should_render(0, 1));
}

#[test]
fn render_throttle_renders_on_change() {
    let mut t = RenderThrottle::new(1000);
    assert!(t.should_render(0, 1));
    assert!(t.should_render(1, 2));
}

#[test]
fn render_throttle_skips_unchanged_until_idle_refresh() {
    let mut t = RenderThrottle::new(1000);
    assert!(t.should_render(0, 1));
    assert!(!t.should_render(10, 1));
    assert!(!t.should_render(999, 1));
    assert!(t.should_render(1000, 1));
    assert!(!t.should_render(1001, 1));
}

#[test]
fn render_throttle_invalidate_forces_next_frame() {
    let mut t = RenderThrottle::new(1000);
    assert!(t.should_render(0, 1));
    t.invalidate();
    assert!(t.should_render(5, 1));
    assert!(!t.should_render(6, 1));
}
