use crate::domain::analysis::{entities::AnalysisPattern, extractor::MenuField};

/// Display label for a menu field name; unknown names come back unchanged.
pub fn field_label(field: &str) -> &str {
    match field.parse::<MenuField>() {
        Ok(field) => field.label(),
        Err(_) => field,
    }
}

impl MenuField {
    pub fn label(&self) -> &'static str {
        match self {
            MenuField::Rating => "Satisfaction rating",
            MenuField::Calories => "Calories",
            MenuField::CookingTime => "Cooking time (min)",
            MenuField::NutritionScore => "Nutrition score",
            MenuField::Cost => "Cost (JPY)",
        }
    }
}

/// Predefined analyses, in display order.
pub static ANALYSIS_PATTERNS: [AnalysisPattern; 5] = [
    AnalysisPattern {
        id: "cooking-satisfaction",
        name: "Cooking time vs. satisfaction",
        x_field: MenuField::CookingTime,
        y_field: MenuField::Rating,
        description: "How the time spent cooking affects satisfaction",
    },
    AnalysisPattern {
        id: "calorie-satisfaction",
        name: "Calories vs. satisfaction",
        x_field: MenuField::Calories,
        y_field: MenuField::Rating,
        description: "How calorie content relates to satisfaction",
    },
    AnalysisPattern {
        id: "nutrition-satisfaction",
        name: "Nutrition score vs. satisfaction",
        x_field: MenuField::NutritionScore,
        y_field: MenuField::Rating,
        description: "How nutritional balance influences satisfaction",
    },
    AnalysisPattern {
        id: "cost-satisfaction",
        name: "Cost vs. satisfaction",
        x_field: MenuField::Cost,
        y_field: MenuField::Rating,
        description: "Cost performance of meals against satisfaction",
    },
    AnalysisPattern {
        id: "time-calories",
        name: "Cooking time vs. calories",
        x_field: MenuField::CookingTime,
        y_field: MenuField::Calories,
        description: "Whether more elaborate dishes tend to be higher in calories",
    },
];

pub fn find_pattern(id: &str) -> Option<&'static AnalysisPattern> {
    ANALYSIS_PATTERNS.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_fields_have_fixed_labels() {
        assert_eq!(field_label("calories"), "Calories");
        assert_eq!(field_label("rating"), "Satisfaction rating");
        assert_eq!(field_label("cookingTime"), "Cooking time (min)");
    }

    #[test]
    fn unknown_field_label_is_passthrough() {
        assert_eq!(field_label("unknownField"), "unknownField");
        assert_eq!(field_label("cooking_time"), "cooking_time");
        assert_eq!(field_label("nutrition_score"), "nutrition_score");
    }

    #[test]
    fn catalog_never_uses_rating_as_x() {
        assert_eq!(ANALYSIS_PATTERNS.len(), 5);
        for pattern in &ANALYSIS_PATTERNS {
            assert_ne!(pattern.x_field, MenuField::Rating);
            assert!(matches!(
                pattern.y_field,
                MenuField::Rating | MenuField::Calories
            ));
        }
    }

    #[test]
    fn pattern_ids_are_unique_and_findable() {
        for pattern in &ANALYSIS_PATTERNS {
            let found = find_pattern(pattern.id).unwrap();
            assert_eq!(found, pattern);
        }
        assert!(find_pattern("nope").is_none());
    }
}
