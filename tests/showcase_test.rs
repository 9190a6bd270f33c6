use patterns_recipe::runtime::{Pattern, Showcase, ShowcaseConfig};

fn only(patterns: &[Pattern]) -> ShowcaseConfig {
    ShowcaseConfig {
        patterns: patterns.to_vec(),
        ..ShowcaseConfig::default()
    }
}

/// The default showcase runs every pattern once, in canonical order.
#[test]
fn test_full_showcase_reports_every_pattern() {
    let reports = Showcase::default().run().unwrap();

    let patterns: Vec<Pattern> = reports.iter().map(|r| r.pattern).collect();
    assert_eq!(patterns, Pattern::ALL.to_vec());
    assert!(reports.iter().all(|r| !r.lines.is_empty()));
}

#[test]
fn test_protection_proxy_walkthrough() {
    let reports = Showcase::new(only(&[Pattern::ProtectionProxy])).run().unwrap();

    assert_eq!(
        reports[0].lines,
        vec![
            "Incorrect password. Access denied!",
            "Password is correct",
            "Reading file: readme.md",
        ]
    );
}

/// A wrong password is part of the walkthrough, not a failure of the run.
#[test]
fn test_protection_proxy_walkthrough_with_wrong_password() {
    let config = ShowcaseConfig {
        password: "letmein".to_string(),
        ..only(&[Pattern::ProtectionProxy])
    };
    let reports = Showcase::new(config).run().unwrap();

    assert_eq!(
        reports[0].lines,
        vec![
            "Incorrect password. Access denied!",
            "Incorrect password. Access denied!",
        ]
    );
}

/// The facade walkthrough reports the store's configured path.
#[test]
fn test_facade_walkthrough_uses_configured_path() {
    let config = ShowcaseConfig {
        prefs_path: "/tmp/showcase.prefs".to_string(),
        ..only(&[Pattern::Facade])
    };
    let reports = Showcase::new(config).run().unwrap();

    assert_eq!(reports[0].lines[0], "Reading data from file: /tmp/showcase.prefs");
    assert!(reports[0].lines[1].ends_with("to file: /tmp/showcase.prefs"));
}

#[test]
fn test_walkthrough_lines() {
    let showcase = Showcase::default();

    assert_eq!(
        showcase.run_pattern(Pattern::FactoryMethod).unwrap(),
        vec!["Greece currency: EUR", "USA currency: USD"]
    );
    assert_eq!(
        showcase.run_pattern(Pattern::Facade).unwrap(),
        vec![
            "Reading data from file: /data/default.prefs",
            r#"Storing cached data: {"file_path":"/data/default.prefs","entries":{"USER_KEY":"dbacinski"}} to file: /data/default.prefs"#,
            "Found stored user: User(login=dbacinski)",
        ]
    );
    assert_eq!(
        showcase.run_pattern(Pattern::Singleton).unwrap(),
        vec!["Start", "Printing with object", "Printing with object"]
    );
    assert_eq!(
        showcase.run_pattern(Pattern::Listener).unwrap(),
        vec!["Text is changed: Lorem ipsum -> dolor sit amet"]
    );
    assert_eq!(
        showcase.run_pattern(Pattern::AbstractFactory).unwrap(),
        vec!["Created plant: OrangePlant"]
    );
    assert_eq!(
        showcase.run_pattern(Pattern::Decorator).unwrap().len(),
        5
    );
}
