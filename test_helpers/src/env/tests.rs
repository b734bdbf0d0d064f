//! Unit tests for environment helpers.

use super::*;

#[test]
fn set_var_restores_absent_variable() {
    const KEY: &str = "CUKERUNNER_TEST_HELPERS_ABSENT";
    let _clear = remove_var(KEY);
    {
        let _guard = set_var(KEY, "value");
        assert_eq!(env::var(KEY).ok().as_deref(), Some("value"));
    }
    assert!(env::var_os(KEY).is_none());
}

#[test]
fn stacked_guards_restore_in_reverse_order() {
    const KEY: &str = "CUKERUNNER_TEST_HELPERS_STACKED";
    let _outer = set_var(KEY, "outer");
    {
        let _inner = set_var(KEY, "inner");
        assert_eq!(env::var(KEY).ok().as_deref(), Some("inner"));
    }
    assert_eq!(env::var(KEY).ok().as_deref(), Some("outer"));
}

#[test]
fn override_is_cleared_on_drop() {
    let _clear = clear_properties_override();
    {
        let _override = override_properties("custom.properties");
        assert_eq!(
            env::var(PROPERTIES_OVERRIDE_ENV).ok().as_deref(),
            Some("custom.properties")
        );
    }
    assert!(env::var_os(PROPERTIES_OVERRIDE_ENV).is_none());
}
