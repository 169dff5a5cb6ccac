use sweet_images_rs::{get_all_sweet_images, get_all_sweet_names, get_product_image_url, Catalog};

fn url_for(name: &str) -> &'static str {
    Catalog::sweets().get(name).unwrap()
}

#[test]
fn test_every_name_resolves_to_its_own_url() {
    for entry in Catalog::sweets().entries() {
        assert_eq!(get_product_image_url(Some(entry.name.as_str())), entry.url);

        // Case and surrounding whitespace are ignored
        let shouted = format!("  {}  ", entry.name.to_uppercase());
        assert_eq!(get_product_image_url(Some(shouted.as_str())), entry.url);
    }
}

#[test]
fn test_named_examples() {
    assert_eq!(get_product_image_url(Some("Rasgulla")), url_for("rasgulla"));
    assert_eq!(
        get_product_image_url(Some("Kaju Katli Box")),
        url_for("kaju katli")
    );
    assert_eq!(get_product_image_url(Some("Besan Laddu")), url_for("laddu"));
    assert_eq!(get_product_image_url(Some("Kesar Peda")), url_for("peda"));
    assert_eq!(get_product_image_url(Some("Gajar Ka Halwa")), url_for("halwa"));
}

#[test]
fn test_name_contained_in_key() {
    // "jam" is part of "gulab jamun"
    assert_eq!(get_product_image_url(Some("Jam")), url_for("gulab jamun"));
    assert_eq!(get_product_image_url(Some("Kaju")), url_for("kaju katli"));
    // "pe" is first found in "peda"
    assert_eq!(get_product_image_url(Some("pe")), url_for("peda"));
    // "a" is already in the first entry
    assert_eq!(get_product_image_url(Some("a")), url_for("rasgulla"));
}

#[test]
fn test_absent_empty_and_blank_names() {
    let primary = url_for("rasgulla");
    assert_eq!(get_product_image_url(None), primary);
    assert_eq!(get_product_image_url(Some("")), primary);
    assert_eq!(get_product_image_url(Some("   ")), primary);
    assert_eq!(get_product_image_url(Some("\t\n")), primary);
}

#[test]
fn test_unknown_names_use_first_character() {
    // 'z' -> 122 % 10 = 2
    assert_eq!(get_product_image_url(Some("Zzyzx")), url_for("laddu"));
    // 'x' -> 120 % 10 = 0
    assert_eq!(get_product_image_url(Some("x")), url_for("rasgulla"));
    // 'c' -> 99 % 10 = 9
    assert_eq!(get_product_image_url(Some("Chocolate Fudge")), url_for("burfi"));
    // 's' -> 115 % 10 = 5
    assert_eq!(get_product_image_url(Some("Soan Papdi")), url_for("gulab jamun"));
    // 'ñ' -> 241 % 10 = 1
    assert_eq!(get_product_image_url(Some("Ñandú")), url_for("kheer"));
    // U+1F36C -> 127852 % 10 = 2
    assert_eq!(get_product_image_url(Some("🍬 candy")), url_for("laddu"));
}

#[test]
fn test_resolution_is_stable_and_never_empty() {
    let inputs = ["Zzyzx", "x", "Q", "Ω", "日本", " \u{00a0}", "Mysore Pak", "42"];
    for input in inputs {
        let first = get_product_image_url(Some(input));
        let second = get_product_image_url(Some(input));
        assert_eq!(first, second, "unstable result for {:?}", input);
        assert!(!first.is_empty());
        assert!(get_all_sweet_images().iter().any(|url| url == first));
    }
}

#[test]
fn test_companion_accessors() {
    let names = get_all_sweet_names();
    assert_eq!(
        names,
        vec![
            "rasgulla",
            "kheer",
            "laddu",
            "halwa",
            "peda",
            "gulab jamun",
            "barfi",
            "jalebi",
            "kaju katli",
            "burfi",
        ]
    );

    let images = get_all_sweet_images();
    assert_eq!(images.len(), names.len());
    for (name, url) in names.iter().zip(&images) {
        assert_eq!(url_for(name), url);
    }

    // Each call materializes a fresh list
    assert_eq!(get_all_sweet_names(), names);
    assert_eq!(get_all_sweet_images(), images);
}
