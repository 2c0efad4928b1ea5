use serde_json::json;

use super::*;

fn listing() -> NormalizerOptions {
    NormalizerOptions::listing()
}

fn raw(value: serde_json::Value) -> RawProduct {
    RawProduct::from(value)
}

// -----------------------------------------------------------------------
// price and discount
// -----------------------------------------------------------------------

#[test]
fn string_price_with_promotion_computes_sale_price() {
    let product = normalize(
        &raw(json!({"id": 1, "nom": "Tee", "prix": "1000", "promotion": "10", "couleurs": []})),
        &listing(),
    );
    assert_eq!(product.id, "1");
    assert_eq!(product.name, "Tee");
    assert!((product.price - 1000.0).abs() < f64::EPSILON);
    assert!((product.discount_percent - 10.0).abs() < f64::EPSILON);
    assert_eq!(product.sale_price, Some(900.0));
    assert!(product.on_sale);
    assert_eq!(product.colors.len(), 1);
    assert_eq!(product.colors[0].name, "Standard");
}

#[test]
fn sale_price_is_rounded_to_two_decimals() {
    let product = normalize(&raw(json!({"prix": 19.99, "promotion": 15})), &listing());
    assert_eq!(product.sale_price, Some(16.99));
}

#[test]
fn no_promotion_means_no_sale_price() {
    let product = normalize(&raw(json!({"prix": 50})), &listing());
    assert!(product.discount_percent.abs() < f64::EPSILON);
    assert!(product.sale_price.is_none());
    assert!(!product.on_sale);
}

#[test]
fn zero_or_garbage_promotion_is_no_discount() {
    for promotion in [json!(0), json!("0"), json!(""), json!("soon"), json!(false)] {
        let product = normalize(&raw(json!({"prix": 50, "promotion": promotion})), &listing());
        assert!(product.sale_price.is_none(), "promotion {promotion} gave a sale price");
    }
}

#[test]
fn explicit_sale_flag_sets_on_sale_without_sale_price() {
    let product = normalize(&raw(json!({"prix": 50, "en_promo": true})), &listing());
    assert!(product.on_sale);
    assert!(product.sale_price.is_none());
}

#[test]
fn promotion_above_hundred_is_clamped() {
    let product = normalize(&raw(json!({"prix": 50, "promotion": 150})), &listing());
    assert!((product.discount_percent - 100.0).abs() < f64::EPSILON);
    assert_eq!(product.sale_price, Some(0.0));
}

#[test]
fn unparseable_price_defaults_to_zero() {
    let product = normalize(&raw(json!({"prix": "douze", "promotion": 20})), &listing());
    assert!(product.price.abs() < f64::EPSILON);
    assert_eq!(product.sale_price, Some(0.0));
}

#[test]
fn negative_price_defaults_to_zero() {
    let product = normalize(&raw(json!({"price": -5})), &listing());
    assert!(product.price.abs() < f64::EPSILON);
}

// -----------------------------------------------------------------------
// images
// -----------------------------------------------------------------------

#[test]
fn json_encoded_image_string_is_decoded() {
    let product = normalize(&raw(json!({"images": r#"["a.jpg","b.jpg"]"#})), &listing());
    assert_eq!(product.extra_images, vec!["a.jpg", "b.jpg"]);
}

#[test]
fn non_json_image_string_yields_no_images() {
    let product = normalize(&raw(json!({"images": "not json"})), &listing());
    assert!(product.extra_images.is_empty());
}

#[test]
fn extra_images_are_capped_at_ten() {
    let images: Vec<String> = (0..14).map(|i| format!("img-{i}.jpg")).collect();
    let product = normalize(&raw(json!({ "images": images })), &listing());
    assert_eq!(product.extra_images.len(), 10);
    assert_eq!(product.extra_images[9], "img-9.jpg");
}

// -----------------------------------------------------------------------
// sizes
// -----------------------------------------------------------------------

#[test]
fn sizes_accept_strings_and_objects_in_order() {
    let product = normalize(
        &raw(json!({"tailles": ["S", {"taille": "M"}, {"nom": "L"}, "S", 42, {}]})),
        &listing(),
    );
    assert_eq!(product.sizes, vec!["S", "M", "L", "S"]);
}

#[test]
fn missing_sizes_are_empty() {
    let product = normalize(&raw(json!({})), &listing());
    assert!(product.sizes.is_empty());
}

// -----------------------------------------------------------------------
// colors
// -----------------------------------------------------------------------

#[test]
fn color_synonyms_resolve_in_priority_order() {
    let product = normalize(
        &raw(json!({"couleurs": [
            {"couleur": "Rouge", "nom": "ignored", "code_hexa": "#ff0000", "code": "#000"},
            {"name": "Blue", "color": "#0000ff"},
            {}
        ]})),
        &listing(),
    );
    let names: Vec<&str> = product.colors.iter().map(|c| c.name.as_str()).collect();
    let hexes: Vec<&str> = product.colors.iter().map(|c| c.hex_code.as_str()).collect();
    assert_eq!(names, vec!["Rouge", "Blue", "Standard"]);
    assert_eq!(hexes, vec!["#ff0000", "#0000ff", "#000000"]);
}

#[test]
fn color_images_fall_back_to_product_image_then_placeholder() {
    let product = normalize(
        &raw(json!({
            "image": "main.jpg",
            "couleurs": [
                {"couleur": "Noir", "image_avant": "noir-front.jpg", "image_arriere": ""},
                {"couleur": "Blanc"}
            ]
        })),
        &listing(),
    );
    assert_eq!(product.colors[0].front_image, "noir-front.jpg");
    assert_eq!(product.colors[0].back_image, "main.jpg");
    assert_eq!(product.colors[1].front_image, "main.jpg");

    let bare = normalize(&raw(json!({"couleurs": [{"couleur": "Noir"}]})), &listing());
    assert_eq!(bare.colors[0].front_image, "/images/placeholder.jpg");
    assert_eq!(bare.colors[0].back_image, "/images/placeholder.jpg");
}

#[test]
fn missing_colors_synthesize_one_standard_entry() {
    let product = normalize(&raw(json!({"image": "main.jpg"})), &listing());
    assert_eq!(product.colors.len(), 1);
    let color = &product.colors[0];
    assert_eq!(color.name, "Standard");
    assert_eq!(color.hex_code, "#000000");
    assert_eq!(color.front_image, "main.jpg");
    assert_eq!(color.back_image, "main.jpg");
}

#[test]
fn detail_preset_uses_product_face_images() {
    let record = raw(json!({
        "image": "main.jpg",
        "image_avant": "front.jpg",
        "image_arriere": "back.jpg"
    }));

    let detail = normalize(&record, &NormalizerOptions::detail());
    assert_eq!(detail.colors[0].front_image, "front.jpg");
    assert_eq!(detail.colors[0].back_image, "back.jpg");

    let from_listing = normalize(&record, &listing());
    assert_eq!(from_listing.colors[0].front_image, "main.jpg");
    assert_eq!(from_listing.colors[0].back_image, "main.jpg");
}

#[test]
fn string_color_entries_are_names() {
    let product = normalize(&raw(json!({"colors": ["Vert"]})), &listing());
    assert_eq!(product.colors[0].name, "Vert");
    assert_eq!(product.colors[0].hex_code, "#000000");
}

// -----------------------------------------------------------------------
// pass-through fields
// -----------------------------------------------------------------------

#[test]
fn absent_fields_use_defaults() {
    let product = normalize(&raw(json!({})), &listing());
    assert_eq!(product.id, "");
    assert_eq!(product.name, "");
    assert_eq!(product.description, "");
    assert_eq!(product.category, "homme");
    assert!(!product.is_new);
    assert_eq!(product.stock, 0);
    assert!(!product.out_of_stock);
}

#[test]
fn detail_preset_has_its_own_default_category() {
    let product = normalize(&raw(json!({})), &NormalizerOptions::detail());
    assert_eq!(product.category, "unisexe");
}

#[test]
fn pass_through_fields_are_copied() {
    let product = normalize(
        &raw(json!({
            "_id": "abc123",
            "name": "Hoodie",
            "description": "Warm",
            "categorie": "femme",
            "nouveau": true,
            "stock": "12",
            "rupture_stock": false
        })),
        &listing(),
    );
    assert_eq!(product.id, "abc123");
    assert_eq!(product.name, "Hoodie");
    assert_eq!(product.description, "Warm");
    assert_eq!(product.category, "femme");
    assert!(product.is_new);
    assert_eq!(product.stock, 12);
    assert!(!product.out_of_stock);
}

#[test]
fn zero_stock_is_preserved() {
    let product = normalize(&raw(json!({"stock": 0, "rupture_stock": false})), &listing());
    assert_eq!(product.stock, 0);
    assert!(!product.is_in_stock());
}

#[test]
fn normalize_all_preserves_order() {
    let raws = vec![raw(json!({"id": 2})), raw(json!({"id": 1}))];
    let products = normalize_all(&raws, &listing());
    let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "1"]);
}

#[test]
fn blank_synonyms_fall_through_to_next_candidate() {
    let product = normalize(
        &raw(json!({
            "nom": "",
            "name": "Tee",
            "couleurs": [{"couleur": "", "nom": "Rouge", "code_hexa": "", "code": "#ff0000"}],
            "tailles": [{"taille": " ", "label": "M"}]
        })),
        &listing(),
    );
    assert_eq!(product.name, "Tee");
    assert_eq!(product.colors[0].name, "Rouge");
    assert_eq!(product.colors[0].hex_code, "#ff0000");
    assert_eq!(product.sizes, vec!["M"]);
}
