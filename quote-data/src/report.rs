//! Plain-text rendering of quotes and catalog listings for the terminal.

use quote_core::calculations::common::{format_usd, format_usd_range};
use quote_core::{QuoteResult, TierSelection, WoodProfile};
use rust_decimal::Decimal;

fn tier_label(tier: TierSelection) -> String {
    match tier {
        TierSelection::Quality(q) => format!("quality {}", q.as_str()),
        TierSelection::Condition(c) => format!("condition {}", c.as_str()),
    }
}

/// Multi-line summary of one quote: headline range, breakdown, assumptions.
pub fn render_quote(result: &QuoteResult) -> String {
    let mut lines = vec![
        format!(
            "{} · {} sq ft · {} · {} cost area",
            result.project_type,
            result.square_feet.normalize(),
            tier_label(result.tier),
            result.location.as_str()
        ),
        format!("Estimate:      {}", result.totals.display),
        format!(
            "Per sq ft:     ${} \u{2013} ${}",
            result.price_per_sq_ft.min, result.price_per_sq_ft.max
        ),
        format!(
            "Base:          {}",
            format_usd_range(result.base.min, result.base.max)
        ),
    ];
    lines.extend(result.add_ons.iter().map(|add_on| {
        format!(
            "  + {:<24} {}",
            add_on.label,
            format_usd_range(add_on.min, add_on.max)
        )
    }));
    lines.push(format!(
        "Subtotal:      {}",
        format_usd_range(result.subtotal.min, result.subtotal.max)
    ));
    lines.extend(
        result
            .meta
            .assumptions
            .iter()
            .map(|assumption| format!("  * {assumption}")),
    );

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// One line per profile: SKU, name, and price if listed.
pub fn render_catalog(profiles: &[WoodProfile]) -> String {
    profiles
        .iter()
        .map(|profile| {
            let price = profile
                .price_per_sqft
                .map(|p| format!("${}/sq ft", p.normalize()))
                .unwrap_or_else(|| "unpriced".to_string());
            format!("{:<12} {:<32} {}\n", profile.sku, profile.name, price)
        })
        .collect()
}

/// Material line for `area` square feet of `profile`.
pub fn render_material(
    profile: &WoodProfile,
    area: Decimal,
    cost: Option<Decimal>,
) -> String {
    match cost {
        Some(cost) => format!(
            "{} ({}): {} sq ft = {} materials",
            profile.name,
            profile.sku,
            area.normalize(),
            format_usd(cost)
        ),
        None => format!(
            "{} ({}): no listed price for {} sq ft",
            profile.name,
            profile.sku,
            area.normalize()
        ),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use quote_core::{QuoteRequest, estimate};
    use rust_decimal_macros::dec;

    use super::*;

    fn walnut(price: Option<Decimal>) -> WoodProfile {
        WoodProfile {
            sku: "WAL-01".to_string(),
            name: "Walnut Select".to_string(),
            price_per_sqft: price,
            glb_url: None,
            usdz_url: None,
            poster_url: None,
        }
    }

    #[test]
    fn quote_report_lists_headline_and_add_ons() {
        let request = QuoteRequest {
            project_type: Some("new_hardwood".to_string()),
            square_feet: Some(dec!(500)),
            has_stairs: true,
            stair_count: Some(10),
            rush_job: true,
            ..QuoteRequest::default()
        };
        let result = estimate(&request).unwrap();

        let text = render_quote(&result);

        assert!(text.starts_with("new_hardwood · 500 sq ft · quality standard · medium"));
        assert!(text.contains(&format!("Estimate:      {}", result.totals.display)));
        assert!(text.contains("Stairs"));
        assert!(text.contains("Rush"));
        assert!(text.contains("Pricing is based on typical LA-area"));
    }

    #[test]
    fn quote_report_line_layout() {
        let request = QuoteRequest {
            project_type: Some("refinish".to_string()),
            square_feet: Some(dec!(1000)),
            ..QuoteRequest::default()
        };
        let result = estimate(&request).unwrap();

        let text = render_quote(&result);

        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines[..5],
            [
                "refinish · 1000 sq ft · quality standard · medium cost area",
                "Estimate:      $3,500 \u{2013} $5,500",
                "Per sq ft:     $3.5 \u{2013} $5.5",
                "Base:          $3,500 \u{2013} $5,500",
                "Subtotal:      $3,500 \u{2013} $5,500",
            ]
        );
        assert_eq!(lines.len(), 5 + result.meta.assumptions.len());
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn condition_tier_is_labelled() {
        let request = QuoteRequest {
            project_type: Some("refinish".to_string()),
            square_feet: Some(dec!(1000)),
            condition: Some("heavy".to_string()),
            ..QuoteRequest::default()
        };
        let result = estimate(&request).unwrap();

        assert!(render_quote(&result).contains("condition heavy"));
    }

    #[test]
    fn catalog_lines_show_price_or_unpriced() {
        let mut oak = walnut(None);
        oak.sku = "OAK-01".to_string();
        oak.name = "White Oak".to_string();

        let text = render_catalog(&[walnut(Some(dec!(9.50))), oak]);

        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("WAL-01"));
        assert!(lines[0].ends_with("$9.5/sq ft"));
        assert!(lines[1].ends_with("unpriced"));
    }

    #[test]
    fn material_line_formats_cost() {
        let text = render_material(&walnut(Some(dec!(9.5))), dec!(200), Some(dec!(1900)));

        assert_eq!(text, "Walnut Select (WAL-01): 200 sq ft = $1,900 materials");
    }

    #[test]
    fn material_line_without_price() {
        let text = render_material(&walnut(None), dec!(200), None);

        assert_eq!(text, "Walnut Select (WAL-01): no listed price for 200 sq ft");
    }
}
