use replay_injector::{default_injector, init_from_env, install, InjectorImpl};

#[test]
fn test_init_from_env_runs_once() {
    let first = init_from_env();
    let second = init_from_env();
    assert!(std::ptr::eq(first, second));
    assert!(std::ptr::eq(first, default_injector().expect("published")));
    assert!(install(InjectorImpl::default()).is_err());
}
