//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use van_config::GuideConfig;

#[test]
fn loads_catalog_section_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[catalog]
systems_path = "data/systems.json"
tasks_path = "data/tasks.json"
manifest_path = "data/required-images.json"
"#,
        )?;

        let config: GuideConfig = Figment::from(Serialized::defaults(GuideConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.catalog.systems_path, "data/systems.json");
        assert_eq!(config.catalog.tasks_path, "data/tasks.json");
        assert_eq!(config.catalog.manifest_path, "data/required-images.json");
        Ok(())
    });
}

#[test]
fn loads_full_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[catalog]
systems_path = "content/systems.json"

[assets]
root = "static/img"

[display]
max_results = 8
"#,
        )?;

        let config: GuideConfig = Figment::from(Serialized::defaults(GuideConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.assets.root, "static/img");
        assert_eq!(config.display.max_results, 8);
        assert_eq!(config.display.result_cap(), Some(8));
        // Unspecified fields keep their defaults
        assert_eq!(config.catalog.tasks_path, "content/tasks.json");
        Ok(())
    });
}

#[test]
fn env_var_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.set_env("VANGUIDE_ASSETS__ROOT", "/mnt/sdcard/assets");

        jail.create_file(
            "config.toml",
            r#"
[assets]
root = "assets"
"#,
        )?;

        let config: GuideConfig = Figment::from(Serialized::defaults(GuideConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("VANGUIDE_").split("__"))
            .extract()?;

        // Env should win over TOML
        assert_eq!(config.assets.root, "/mnt/sdcard/assets");
        Ok(())
    });
}

#[test]
fn env_var_overrides_default() {
    Jail::expect_with(|jail| {
        jail.set_env("VANGUIDE_DISPLAY__MAX_RESULTS", "0");

        // No TOML file -- just defaults + env
        let config: GuideConfig = Figment::from(Serialized::defaults(GuideConfig::default()))
            .merge(Env::prefixed("VANGUIDE_").split("__"))
            .extract()?;

        assert_eq!(config.display.max_results, 0);
        assert_eq!(config.display.result_cap(), None);
        Ok(())
    });
}

/// Documents the figment gotcha: typo'd env var keys are silently ignored.
#[test]
fn typo_env_var_silently_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("VANGUIDE_ASSETS__ROOTT", "/elsewhere");

        let config: GuideConfig = Figment::from(Serialized::defaults(GuideConfig::default()))
            .merge(Env::prefixed("VANGUIDE_").split("__"))
            .extract()?;

        // "roott" is not a known field -- silently ignored, root stays default
        assert_eq!(config.assets.root, "assets");
        Ok(())
    });
}
