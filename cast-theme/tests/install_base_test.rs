//! Installing a base theme before first use
//!
//! Kept in its own test binary: the base theme is process-wide and can be
//! installed only once.

use cast_theme::base::default_token_tree;
use cast_theme::{assemble, base_theme, create_theme, install_base_theme, ThemeError, ThemeOverrides};

#[test]
fn test_installed_base_is_used_by_create_theme() {
    let mut custom = assemble(&default_token_tree().unwrap(), "house").unwrap();
    custom.semantic.color.primary = "#7C3AED".to_string();

    install_base_theme(custom.clone()).unwrap();

    assert_eq!(base_theme().unwrap(), &custom);
    let derived = create_theme(&ThemeOverrides::new().with("name", "house-alt"), None)
        .unwrap()
        .into_theme()
        .unwrap();
    assert_eq!(derived.semantic.color.primary, "#7C3AED");
    assert_eq!(derived.name, "house-alt");

    assert!(matches!(
        install_base_theme(custom),
        Err(ThemeError::BaseThemeAlreadyInitialized)
    ));
}
