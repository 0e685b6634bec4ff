use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::WoodProfile;

/// Material cost for covering `area` square feet with `profile`, to the cent.
///
/// Returns `None` when the profile has no listed price, the area is not
/// positive, or the product overflows.
pub fn material_cost(
    area: Decimal,
    profile: &WoodProfile,
) -> Option<Decimal> {
    if area <= Decimal::ZERO {
        return None;
    }
    let price = profile.price_per_sqft?;
    Some(
        area.checked_mul(price)?
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
            .normalize(),
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn profile(price: Option<Decimal>) -> WoodProfile {
        WoodProfile {
            sku: "WO-NAT-5".to_string(),
            name: "White Oak Natural 5in".to_string(),
            price_per_sqft: price,
            glb_url: None,
            usdz_url: None,
            poster_url: None,
        }
    }

    #[test]
    fn multiplies_area_by_unit_price() {
        let cost = material_cost(dec!(250), &profile(Some(dec!(7.49))));

        assert_eq!(cost, Some(dec!(1872.50)));
    }

    #[test]
    fn rounds_to_cents() {
        let cost = material_cost(dec!(10.333), &profile(Some(dec!(3.33))));

        // 34.40889 -> 34.41
        assert_eq!(cost, Some(dec!(34.41)));
    }

    #[test]
    fn unpriced_profile_has_no_cost() {
        assert_eq!(material_cost(dec!(250), &profile(None)), None);
    }

    #[test]
    fn non_positive_area_has_no_cost() {
        assert_eq!(material_cost(dec!(0), &profile(Some(dec!(5)))), None);
    }

    #[test]
    fn overflowing_area_has_no_cost() {
        assert_eq!(material_cost(Decimal::MAX, &profile(Some(dec!(7.49)))), None);
    }
}
