use copyserv_shop::media::SLUG_OVERRIDES;
use copyserv_shop::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn every_override_yields_its_literal_slug() {
    for (name, slug) in SLUG_OVERRIDES {
        for brand in Brand::ALL {
            for category in ProductCategory::ALL {
                let product = Product::new(name, brand, category);
                let resolver = ImagePathResolver::new();
                assert_eq!(resolver.slug_for(&product), slug, "{name} as {brand:?}/{category:?}");
            }
        }
    }
}

#[test]
fn standard_catalog_paths() {
    let catalog = Catalog::standard();
    let resolver = ImagePathResolver::new();
    let path = |name: &str| resolver.resolve(catalog.find(name).unwrap());

    assert_eq!(path("Ricoh MPC 2004"), "IMAGENES/ricoh/ricoh-mpc-2004.jpg");
    assert_eq!(path("Ricoh MP 9003"), "IMAGENES/ricoh/ricoh-mp-9003.jpg");
    assert_eq!(path("Ricoh IM 2500"), "IMAGENES/ricoh/ricoh-im-2500.jpg");
    assert_eq!(path("Canon 5560"), "IMAGENES/canon/canon-ir-5560.jpg");
    assert_eq!(path("Cilindro Canon 5560"), "IMAGENES/repuestos/cilindro-canon-5560.jpg");
    assert_eq!(path("Revelador"), "IMAGENES/repuestos/revelador.jpg");
    assert_eq!(path("Almohadilla Ricoh"), "IMAGENES/repuestos/ricoh almohadilla.jpg");
    assert_eq!(path("Rodillo de Presión"), "IMAGENES/repuestos/rodillo_de_precion.jpg");
    assert_eq!(
        path("Faja Transferencia Canon"),
        "IMAGENES/repuestos/canon_faja_trasferencia.jpg"
    );
    assert_eq!(path("Toner Canon"), "IMAGENES/insumos/toner-canon.jpg");
}

#[test]
fn every_catalog_item_resolves_under_the_image_root() {
    let resolver = ImagePathResolver::new();
    for product in Catalog::standard().products() {
        let path = resolver.resolve(product);
        assert!(path.starts_with("IMAGENES/"), "{path}");
        assert!(path.ends_with(".jpg"), "{path}");
    }
}
