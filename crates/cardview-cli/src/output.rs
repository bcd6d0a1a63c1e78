use std::fmt::{self, Write as _};

use cardview_ui::{CardViewModel, TextSlot};

pub fn render_json(model: &CardViewModel) -> serde_json::Result<String> {
    serde_json::to_string_pretty(model)
}

/// Human-readable summary of both faces; the visible face is marked with `>`.
pub fn render_text(model: &CardViewModel) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let front_marker = if model.flipped { ' ' } else { '>' };
    let back_marker = if model.flipped { '>' } else { ' ' };

    writeln!(
        out,
        "brand: {} ({})",
        model.brand,
        model.brand.display_name()
    )?;
    writeln!(out, "face: {}", model.face)?;

    write!(out, "{front_marker} front [{}]", model.front.background)?;
    if let Some(icon) = model.front.icon.as_deref() {
        write!(out, " icon={icon}")?;
    }
    out.push('\n');
    for slot in [
        &model.front.number,
        &model.front.name,
        &model.front.expiry_title,
        &model.front.expiry,
    ]
    .into_iter()
    .chain(model.front.amex_cvc.as_ref())
    {
        write_slot(&mut out, slot)?;
    }

    writeln!(out, "{back_marker} back [{}]", model.back.background)?;
    write_slot(&mut out, &model.back.cvc)?;

    let geometry = &model.geometry;
    writeln!(
        out,
        "size: {}x{} scale={} translate_y={}",
        geometry.container.width,
        geometry.container.height,
        geometry.transform.scale,
        geometry.transform.translate_y
    )?;
    Ok(out)
}

fn write_slot(out: &mut String, slot: &TextSlot) -> fmt::Result {
    write!(out, "    {:<13}{}", slot.role.label(), slot.text)?;
    if slot.placeholder {
        out.push_str("  (placeholder)");
    }
    if slot.focused {
        out.push_str("  [focused]");
    }
    out.push('\n');
    Ok(())
}
