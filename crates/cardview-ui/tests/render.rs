use cardview_core::detect::{CatalogEntry, IinCatalog, IinPattern};
use cardview_core::{Brand, CardFace, CardField, CardInput};
use cardview_ui::{CardView, CardViewConfig, IconManifest, IconSet, Platform, SlotRole};

fn view(config: CardViewConfig) -> CardView {
    CardView::with_icons(config, IconSet::from_manifest(&IconManifest::placeholder()))
        .expect("valid config")
}

fn visa() -> CardInput {
    CardInput::new()
        .with_number("4111 1111 1111 1111")
        .with_name("Grace Hopper")
        .with_expiry("12/29")
        .with_cvc("123")
}

fn amex() -> CardInput {
    CardInput::new()
        .with_number("3714 4963 5398 431")
        .with_name("Grace Hopper")
        .with_expiry("12/29")
        .with_cvc("1234")
}

#[test]
fn visa_flips_when_cvc_focused() {
    let model = view(CardViewConfig::default())
        .render_standard(&visa().with_focus(Some(CardField::Cvc)));
    assert_eq!(model.brand, Brand::Visa);
    assert_eq!(model.face, CardFace::Back);
    assert!(model.flipped);
    assert!(model.back.cvc.focused);
    assert_eq!(model.back.cvc.text, "123");
    assert!(model.front.amex_cvc.is_none());
    assert_eq!(model.front.icon.as_deref(), Some("icons/stp_card_visa.png"));
}

#[test]
fn amex_keeps_front_and_shows_front_cvc() {
    let model = view(CardViewConfig::default())
        .render_standard(&amex().with_focus(Some(CardField::Cvc)));
    assert_eq!(model.brand, Brand::AmericanExpress);
    assert_eq!(model.face, CardFace::Front);
    assert!(!model.flipped);

    let front_cvc = model.front.amex_cvc.expect("amex prints cvc on the front");
    assert_eq!(front_cvc.role, SlotRole::Cvc);
    assert_eq!(front_cvc.text, "1234");
    assert!(front_cvc.focused);
    assert_eq!(front_cvc.font_family.as_deref(), Some("Courier"));
    assert_eq!(model.front.icon.as_deref(), Some("icons/stp_card_amex.png"));
}

#[test]
fn amex_front_cvc_falls_back_to_placeholder() {
    let model = view(CardViewConfig::default()).render_standard(&amex().with_cvc(""));
    let front_cvc = model.front.amex_cvc.expect("front cvc slot");
    assert!(front_cvc.placeholder);
    assert_eq!(front_cvc.text, "•••");
}

#[test]
fn custom_icons_override_defaults() {
    let config = CardViewConfig::default()
        .with_custom_icon(Brand::Visa, "brand/visa-gold.png")
        .with_custom_icon(Brand::Mir, "brand/mir.png");
    let view = view(config);

    let model = view.render_standard(&visa());
    assert_eq!(model.front.icon.as_deref(), Some("brand/visa-gold.png"));

    let mir = view.render_standard(&CardInput::new().with_number("2200 1234 5678 9010"));
    assert_eq!(mir.brand, Brand::Mir);
    assert_eq!(mir.front.icon.as_deref(), Some("brand/mir.png"));
}

#[test]
fn brands_without_icons_render_none() {
    let model = view(CardViewConfig::default())
        .render_standard(&CardInput::new().with_number("6200 0000 0000 0005"));
    assert_eq!(model.brand, Brand::UnionPay);
    assert_eq!(model.front.icon, None);
}

#[test]
fn focus_marks_exactly_one_field() {
    let view = view(CardViewConfig::default());
    let model = view.render_standard(&visa().with_focus(Some(CardField::Name)));
    assert!(model.front.name.focused);
    assert!(!model.front.number.focused);
    assert!(!model.front.expiry.focused);
    assert!(!model.front.expiry_title.focused);
    assert!(!model.back.cvc.focused);

    let unfocused = view.render_standard(&visa());
    assert!(!unfocused.front.name.focused);
    assert!(!unfocused.flipped);
}

#[test]
fn flip_depends_only_on_focus_and_brand() {
    let view = view(CardViewConfig::default());
    for (name, expiry, cvc) in [("", "", ""), ("a", "01/30", "999")] {
        let input = CardInput::new()
            .with_number("4111 1111 1111 1111")
            .with_name(name)
            .with_expiry(expiry)
            .with_cvc(cvc)
            .with_focus(Some(CardField::Cvc));
        assert!(view.render_standard(&input).flipped);
    }
}

#[test]
fn android_uses_monospace_and_scale_applies() {
    let config = CardViewConfig::for_platform(Platform::Android).with_scale(1.5);
    let model = view(config).render_standard(&visa());
    assert_eq!(model.front.number.font_family.as_deref(), Some("monospace"));
    assert_eq!(model.geometry.container.height, 285.0);
    assert_eq!(model.geometry.transform.scale, 1.5);
}

#[test]
fn custom_detector_drives_brand_and_flip() {
    let catalog = IinCatalog::empty().with_entry(CatalogEntry::new(
        Brand::AmericanExpress,
        [IinPattern::Prefix(9)],
    ));
    let input = CardInput::new()
        .with_number("9000")
        .with_focus(Some(CardField::Cvc));
    let model = view(CardViewConfig::default()).render(&input, &catalog);
    assert_eq!(model.brand, Brand::AmericanExpress);
    assert!(!model.flipped);
}

#[test]
fn invalid_config_is_rejected() {
    let err = CardView::new(CardViewConfig::default().with_scale(0.0))
        .err()
        .expect("zero scale rejected");
    assert_eq!(err.field(), "scale");
}

#[test]
fn model_serializes_with_snake_case_roles() {
    let model = view(CardViewConfig::default()).render_standard(&visa());
    let json = serde_json::to_value(&model).expect("serialize");
    assert_eq!(json["brand"], "visa");
    assert_eq!(json["face"], "front");
    assert_eq!(json["front"]["expiry_title"]["role"], "expiry_title");
}
