use copyserv_shop::prelude::*;
use proptest::prelude::*;
use proptest::test_runner::Config;

fn selector_value() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("all".to_string()),
        Just("ricoh".to_string()),
        Just("canon".to_string()),
        Just("equipo".to_string()),
        Just("repuesto".to_string()),
        Just("insumo".to_string()),
        "[a-zA-Z]{0,8}",
    ]
}

fn expected(catalog: &Catalog, brand: &str, category: &str) -> Vec<String> {
    catalog
        .products()
        .iter()
        .filter(|p| {
            (brand == "all" || p.brand.as_str() == brand)
                && (category == "all" || p.category.as_str() == category)
        })
        .map(|p| p.name.clone())
        .collect()
}

proptest! {
    #![proptest_config(Config::with_cases(256))]
    #[test]
    fn render_is_the_filtered_subsequence(brand in selector_value(), category in selector_value()) {
        let catalog = Catalog::standard();
        let mut selection = FilterSelection::new();
        selection.set_brand(&brand);
        selection.set_category(&category);

        let rendered: Vec<String> = catalog
            .render(&selection)
            .into_iter()
            .map(|p| p.name.clone())
            .collect();

        prop_assert_eq!(rendered, expected(&catalog, &brand, &category));
    }

    #[test]
    fn resolve_path_is_total_and_deterministic(
        name in "\\PC{0,24}",
        brand in prop_oneof![Just(Brand::Ricoh), Just(Brand::Canon)],
        category in prop_oneof![
            Just(ProductCategory::Equipo),
            Just(ProductCategory::Repuesto),
            Just(ProductCategory::Insumo),
        ],
    ) {
        let product = Product::new(name, brand, category);
        let first = resolve_path(&product);
        prop_assert_eq!(&first, &resolve_path(&product));
        prop_assert!(first.starts_with("IMAGENES/"));
        prop_assert!(first.ends_with(".jpg"));
    }
}

#[test]
fn brand_and_category_views() {
    let catalog = Catalog::standard();

    let canon_equipment = catalog.render(&FilterSelection::from_raw("canon", "equipo"));
    assert_eq!(canon_equipment.len(), 12);
    assert_eq!(canon_equipment[0].name, "Canon 256");
    assert_eq!(canon_equipment[11].name, "Canon 5535");

    let supplies = catalog.render(&FilterSelection::from_raw("all", "insumo"));
    let names: Vec<_> = supplies.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Toner Ricoh", "Toner Canon"]);

    let ricoh_parts = catalog.render(&FilterSelection::from_raw("ricoh", "repuesto"));
    assert_eq!(ricoh_parts.len(), 9);
    assert_eq!(ricoh_parts[0].name, "Cilindro Ricoh");
}

#[test]
fn unknown_selector_renders_nothing() {
    let catalog = Catalog::standard();
    assert!(catalog
        .render(&FilterSelection::from_raw("xerox", "all"))
        .is_empty());
    assert!(catalog
        .render(&FilterSelection::from_raw("all", "Equipo"))
        .is_empty());
}
