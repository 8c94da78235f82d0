use crate::store::models::{CategorySummary, MenuItem, MenuSummary};
use crate::Category;

/// Items whose category equals `category` case-insensitively, in insertion order.
pub fn items_by_category<'a>(items: &'a [MenuItem], category: &str) -> Vec<&'a MenuItem> {
    let wanted = category.to_lowercase();
    items.iter().filter(|item| item.category == wanted).collect()
}

/// Mean price of the matching items rounded to two decimals, or `0.0` when none match.
pub fn average_price(items: &[MenuItem], category: &str) -> f64 {
    let matching = items_by_category(items, category);
    if matching.is_empty() {
        return 0.0;
    }

    let total: f64 = matching.iter().map(|item| item.price).sum();
    #[allow(clippy::cast_precision_loss)]
    let mean = total / matching.len() as f64;

    round_to_cents(mean)
}

/// Groups items under the fixed home categories, skipping the empty ones.
pub fn build_summary(items: &[MenuItem]) -> MenuSummary {
    let categories = Category::ALL
        .iter()
        .filter_map(|category| {
            let matching = items_by_category(items, category.as_str());
            if matching.is_empty() {
                return None;
            }

            Some(CategorySummary {
                category: *category,
                label: category.label().to_string(),
                average_price: average_price(items, category.as_str()),
                items: matching.into_iter().cloned().collect(),
            })
        })
        .collect();

    MenuSummary {
        total_items: items.len(),
        categories,
    }
}

/// Rounds to two decimals from the exact binary value, with exact midpoints
/// going up.
///
/// Scaling by 100 before rounding rounds twice: the mean of 1.04 and 1.05 is
/// stored just below 1.045, yet `mean * 100.0` lands on 104.5.
#[allow(clippy::float_cmp)]
fn round_to_cents(value: f64) -> f64 {
    // the only representable midpoints are the odd multiples of 1/8
    let eighths = value * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 == 1.0 {
        return (value * 100.0).ceil() / 100.0;
    }

    // float formatting rounds the exact value
    format!("{value:.2}").parse().unwrap_or(value)
}
