use svg_icon::*;

fn sample_icons() -> IconMap {
    [
        ("star", "<svg>...</svg>"),
        ("heart", "<svg>H</svg>"),
        ("check", "<svg viewBox=\"0 0 24 24\"><path d=\"M20 6 9 17l-5-5\"/></svg>"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

#[test]
fn test_merge_is_superset_of_registered_icons() {
    let mut registry = IconRegistry::with_icons([("existing", "<svg>E</svg>")]);
    let icons = sample_icons();
    registry.register_icons(icons.clone(), RegisterMode::Merge);

    let available = registry.available_icons();
    assert_eq!(available.get("existing").map(String::as_str), Some("<svg>E</svg>"));
    for (name, markup) in &icons {
        assert_eq!(
            available.get(name),
            Some(markup),
            "Icon '{}' missing or changed after merge",
            name
        );
    }
}

#[test]
fn test_reset_leaves_exactly_registered_icons() {
    let mut registry = IconRegistry::with_icons([("existing", "<svg>E</svg>")]);
    let icons = sample_icons();
    registry.register_icons(icons.clone(), RegisterMode::Reset);

    assert_eq!(registry.available_icons(), &icons);
}

#[test]
fn test_registration_is_idempotent() {
    let icons = sample_icons();

    let mut once = IconRegistry::with_icons([("existing", "<svg>E</svg>")]);
    once.register_icons(icons.clone(), RegisterMode::Merge);

    let mut twice = once.clone();
    twice.register_icons(icons, RegisterMode::Merge);

    assert_eq!(once.available_icons(), twice.available_icons());
}

#[test]
fn test_registered_names_resolve_byte_identical() {
    let registry = IconRegistry::with_icons(sample_icons());

    for (name, markup) in sample_icons() {
        let resolved = registry
            .resolve(&MarkupSource::Registered(name.clone()))
            .expect("registered icon should resolve");
        assert_eq!(resolved, markup, "Markup for '{}' changed on resolve", name);
    }
}

#[test]
fn test_unknown_names_fail() {
    let registry = IconRegistry::with_icons(sample_icons());

    for name in ["Star", "star ", "unknown"] {
        assert_eq!(
            registry.resolve_request(&IconRequest::named(name)),
            Err(IconError::Unregistered {
                name: name.to_string()
            })
        );
    }
}

#[test]
fn test_empty_name_falls_through_to_src() {
    let registry = IconRegistry::with_icons(sample_icons());

    assert_eq!(
        registry.resolve_request(&IconRequest::named("")),
        Err(IconError::MissingSource)
    );
    assert_eq!(
        registry.resolve_request(&IconRequest::new(
            Some(String::new()),
            Some(trust_markup("<svg>T</svg>").into())
        )),
        Ok("<svg>T</svg>".to_string())
    );
}

#[test]
fn test_request_validation() {
    let registry = IconRegistry::new();

    assert_eq!(
        registry.resolve_request(&IconRequest::default()),
        Err(IconError::MissingSource)
    );
    assert_eq!(
        registry.resolve_request(&IconRequest::from_src("<svg>raw</svg>")),
        Err(IconError::UntrustedMarkup)
    );
    assert_eq!(
        registry.resolve_request(&IconRequest::from_src(trust_markup("<svg>ok</svg>"))),
        Ok("<svg>ok</svg>".to_string())
    );
}

#[test]
fn test_star_heart_scenario() {
    let mut registry = IconRegistry::new();
    registry.register_icons([("star", "<svg>...</svg>")], RegisterMode::Merge);

    assert_eq!(
        registry.resolve_request(&IconRequest::named("star")).as_deref(),
        Ok("<svg>...</svg>")
    );
    assert!(matches!(
        registry.resolve_request(&IconRequest::named("heart")),
        Err(IconError::Unregistered { .. })
    ));

    registry.register_icons([("heart", "<svg>H</svg>")], RegisterMode::Reset);
    let expected: IconMap = [("heart".to_string(), "<svg>H</svg>".to_string())]
        .into_iter()
        .collect();
    assert_eq!(registry.available_icons(), &expected);
}

#[test]
fn test_isolated_registries_do_not_share_state() {
    let mut a = IconRegistry::new();
    let b = IconRegistry::new();
    a.register_icons(sample_icons(), RegisterMode::Merge);

    assert_eq!(a.len(), 3);
    assert!(b.is_empty());
}
