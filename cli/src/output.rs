//! Result rendering for the terminal.

use bodyfuel_shared::{Labels, Locale, MacroBreakdown};
use std::fmt::Write;

/// Render the daily target as aligned text rows
pub fn render_text(breakdown: &MacroBreakdown, locale: Locale, details: bool) -> String {
    let labels = Labels::for_locale(locale);
    let result = &breakdown.result;
    let width = [labels.calories, labels.protein, labels.fat, labels.carbs]
        .iter()
        .map(|s| s.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = writeln!(out, "{}", labels.result_heading);
    let _ = writeln!(out, "  {:<width$}  {} kcal", labels.calories, result.calories);
    let _ = writeln!(out, "  {:<width$}  {} g", labels.protein, result.protein_grams);
    let _ = writeln!(out, "  {:<width$}  {} g", labels.fat, result.fat_grams);
    let _ = writeln!(out, "  {:<width$}  {} g", labels.carbs, result.carb_grams);

    if details {
        out.push('\n');
        let _ = writeln!(out, "  BMR   {:.0} kcal", breakdown.bmr);
        let _ = writeln!(out, "  TDEE  {:.0} kcal", breakdown.tdee);
        let _ = writeln!(
            out,
            "  {} {} kcal + {} {} kcal + {} {} kcal",
            labels.protein,
            breakdown.protein_kcal,
            labels.fat,
            breakdown.fat_kcal,
            labels.carbs,
            breakdown.carbs_kcal
        );
        if breakdown.floor_applied {
            let _ = writeln!(out, "  {}", labels.floor_applied);
        }
    }

    out.push('\n');
    out.push_str(labels.note);
    out
}

/// Render as JSON: the plain result, or the full breakdown with `details`
pub fn render_json(breakdown: &MacroBreakdown, details: bool) -> Result<String, serde_json::Error> {
    if details {
        serde_json::to_string_pretty(breakdown)
    } else {
        serde_json::to_string_pretty(&breakdown.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bodyfuel_shared::{compute_breakdown, ActivityLevel, CalculationInput, Goal, Sex};

    fn cut_breakdown() -> MacroBreakdown {
        compute_breakdown(&CalculationInput {
            sex: Sex::Female,
            age_years: 30,
            height_cm: 160.0,
            weight_kg: 55.0,
            activity: ActivityLevel::Low,
            goal: Goal::Cut,
        })
    }

    #[test]
    fn text_lists_every_macro() {
        let text = render_text(&cut_breakdown(), Locale::En, false);
        assert!(text.starts_with("Daily target\n"));
        assert!(text.contains("Calories  1200 kcal"));
        assert!(text.contains("Protein   110 g"));
        assert!(text.contains("Fat       55 g"));
        assert!(text.contains("Carbs     66 g"));
        assert!(text.ends_with("carbs come from the remaining calories."));
        assert!(!text.contains("BMR"));
    }

    #[test]
    fn text_details_mention_floor() {
        let text = render_text(&cut_breakdown(), Locale::En, true);
        assert!(text.contains("BMR   1239 kcal"));
        assert!(text.contains("TDEE  1487 kcal"));
        assert!(text.contains("The 1200 kcal minimum was applied."));
    }

    #[test]
    fn text_in_arabic() {
        let text = render_text(&cut_breakdown(), Locale::Ar, false);
        assert!(text.starts_with("النتيجة اليومية"));
        assert!(text.contains("1200 kcal"));
    }

    #[test]
    fn json_plain_and_detailed() {
        let plain: serde_json::Value =
            serde_json::from_str(&render_json(&cut_breakdown(), false).unwrap()).unwrap();
        assert_eq!(plain["calories"], 1200);
        assert!(plain.get("bmr").is_none());

        let detailed: serde_json::Value =
            serde_json::from_str(&render_json(&cut_breakdown(), true).unwrap()).unwrap();
        assert_eq!(detailed["floor_applied"], true);
        assert_eq!(detailed["result"]["carb_grams"], 66);
    }
}
