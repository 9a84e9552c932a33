use replay_injector::{default_injector, init_from_env, inject};
use std::time::{Duration, Instant};

// Only test in this binary: the default injector is process-wide.
#[test]
fn test_invalid_gr_max_falls_back_to_nop() {
    unsafe {
        std::env::set_var("GRSEED", "abc");
        std::env::set_var("GRMAX", "-5ms");
        std::env::remove_var("GRZBIAS");
        std::env::remove_var("GRDEBUG");
    }

    let injector = init_from_env();
    assert!(!injector.is_active());
    assert!(!default_injector().expect("published").is_active());

    let start = Instant::now();
    inject(Some(b"after fallback"));
    assert!(start.elapsed() < Duration::from_millis(100));
}
