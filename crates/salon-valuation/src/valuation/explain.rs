use super::engine::ValuationBreakdown;

/// Display lines describing how the final multiple was reached: the base,
/// each non-zero adjustment, then the final multiple.
pub fn get_multiple_explanation(breakdown: &ValuationBreakdown) -> Vec<String> {
    let mut lines = vec![format!(
        "Base multiple: {}x (service business standard)",
        multiple(breakdown.base_multiple)
    )];

    if breakdown.location_adjustment != 0.0 {
        lines.push(format!(
            "Location ({}, tier {}): {}",
            breakdown.area_name,
            breakdown.location_tier.number(),
            signed(breakdown.location_adjustment)
        ));
    }

    if breakdown.years_adjustment > 0.0 {
        lines.push(format!(
            "Established operating history: {}",
            signed(breakdown.years_adjustment)
        ));
    } else if breakdown.years_adjustment < 0.0 {
        lines.push(format!(
            "Limited operating history: {}",
            signed(breakdown.years_adjustment)
        ));
    }

    if breakdown.loyalty_adjustment != 0.0 {
        lines.push(format!(
            "Loyal client base: {}",
            signed(breakdown.loyalty_adjustment)
        ));
    }

    if breakdown.rating_adjustment > 0.0 {
        lines.push(format!(
            "Strong Google rating: {}",
            signed(breakdown.rating_adjustment)
        ));
    } else if breakdown.rating_adjustment < 0.0 {
        lines.push(format!(
            "Weak Google rating: {}",
            signed(breakdown.rating_adjustment)
        ));
    }

    if breakdown.lease_adjustment > 0.0 {
        lines.push(format!(
            "Secure lease or owned premises: {}",
            signed(breakdown.lease_adjustment)
        ));
    } else if breakdown.lease_adjustment < 0.0 {
        lines.push(format!(
            "Short lease term: {}",
            signed(breakdown.lease_adjustment)
        ));
    }

    let mut final_line = format!("Final multiple: {}x", multiple(breakdown.final_multiple));
    if breakdown.final_multiple < breakdown.unclamped_multiple {
        final_line.push_str(&format!(
            " (capped from {}x)",
            multiple(breakdown.unclamped_multiple)
        ));
    } else if breakdown.final_multiple > breakdown.unclamped_multiple {
        final_line.push_str(&format!(
            " (raised from {}x)",
            multiple(breakdown.unclamped_multiple)
        ));
    }
    lines.push(final_line);

    lines
}

fn signed(adjustment: f64) -> String {
    let sign = if adjustment < 0.0 { "-" } else { "+" };
    format!("{sign}{}x", multiple(adjustment.abs()))
}

/// Two decimals with at most one trailing zero dropped: 2.2, 3.0, 2.25.
fn multiple(value: f64) -> String {
    let mut rendered = format!("{value:.2}");
    if rendered.ends_with('0') {
        rendered.pop();
    }
    rendered
}
