//! Field metadata for the house attribute form.
//!
//! Every attribute the prediction service accepts is described here once:
//! its wire key, its display label, and which control edits it. The control
//! kind doubles as the field's domain — closed-choice fields can only ever
//! hold one of their enumerated values.

const WATERFRONT_OPTIONS: &[(i64, &str)] = &[(0, "No"), (1, "Yes")];

const VIEW_OPTIONS: &[(i64, &str)] = &[
    (0, "None"),
    (1, "Average"),
    (2, "Good"),
    (3, "Excellent"),
];

const CONDITION_OPTIONS: &[(i64, &str)] = &[
    (1, "Poor"),
    (2, "Fair"),
    (3, "Average"),
    (4, "Good"),
    (5, "Excellent"),
];

/// Which control edits a field, and therefore which values it admits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free-form whole-number entry.
    Numeric,
    /// Closed set of values rendered as a dropdown with display labels.
    Labeled(&'static [(i64, &'static str)]),
    /// Closed inclusive integer range rendered as a dropdown.
    Range { min: i64, max: i64 },
}

impl FieldKind {
    /// Whether `value` lies inside this field's domain.
    pub fn allows(&self, value: i64) -> bool {
        match self {
            FieldKind::Numeric => true,
            FieldKind::Labeled(options) => options.iter().any(|(v, _)| *v == value),
            FieldKind::Range { min, max } => (*min..=*max).contains(&value),
        }
    }

    /// Display label for `value`, when this kind carries labels.
    pub fn label_for(&self, value: i64) -> Option<&'static str> {
        match self {
            FieldKind::Labeled(options) => options
                .iter()
                .find(|(v, _)| *v == value)
                .map(|(_, label)| *label),
            _ => None,
        }
    }
}

/// One variant per attribute the prediction service accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Bedrooms,
    Bathrooms,
    SqftLiving,
    Floors,
    Waterfront,
    View,
    Condition,
    Grade,
    SqftAbove,
    SqftBasement,
    YrBuilt,
    YrRenovated,
}

impl Field {
    /// Every field, in form order.
    pub fn all() -> &'static [Field] {
        &[
            Field::Bedrooms,
            Field::Bathrooms,
            Field::SqftLiving,
            Field::Floors,
            Field::Waterfront,
            Field::View,
            Field::Condition,
            Field::Grade,
            Field::SqftAbove,
            Field::SqftBasement,
            Field::YrBuilt,
            Field::YrRenovated,
        ]
    }

    /// Key used for this field in the request body.
    pub fn key(&self) -> &'static str {
        match self {
            Field::Bedrooms => "bedrooms",
            Field::Bathrooms => "bathrooms",
            Field::SqftLiving => "sqft_living",
            Field::Floors => "floors",
            Field::Waterfront => "waterfront",
            Field::View => "view",
            Field::Condition => "condition",
            Field::Grade => "grade",
            Field::SqftAbove => "sqft_above",
            Field::SqftBasement => "sqft_basement",
            Field::YrBuilt => "yr_built",
            Field::YrRenovated => "yr_renovated",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Bedrooms => "Bedrooms",
            Field::Bathrooms => "Bathrooms",
            Field::SqftLiving => "Living Area (sqft)",
            Field::Floors => "Floors",
            Field::Waterfront => "Waterfront",
            Field::View => "View Quality",
            Field::Condition => "Condition",
            Field::Grade => "Grade",
            Field::SqftAbove => "Above Ground Area (sqft)",
            Field::SqftBasement => "Basement Area (sqft)",
            Field::YrBuilt => "Year Built",
            Field::YrRenovated => "Year Renovated",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Field::Waterfront => FieldKind::Labeled(WATERFRONT_OPTIONS),
            Field::View => FieldKind::Labeled(VIEW_OPTIONS),
            Field::Condition => FieldKind::Labeled(CONDITION_OPTIONS),
            Field::Grade => FieldKind::Range { min: 1, max: 12 },
            Field::Floors => FieldKind::Range { min: 1, max: 5 },
            _ => FieldKind::Numeric,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn all_lists_twelve_distinct_fields() {
        let fields = Field::all();
        assert_eq!(fields.len(), 12);

        let mut keys: Vec<_> = fields.iter().map(|f| f.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), 12, "wire keys must be unique");
    }

    #[test]
    fn numeric_kind_allows_any_value() {
        assert!(FieldKind::Numeric.allows(0));
        assert!(FieldKind::Numeric.allows(-40));
        assert!(FieldKind::Numeric.allows(1_000_000));
    }

    #[test]
    fn waterfront_is_binary() {
        let kind = Field::Waterfront.kind();
        assert!(kind.allows(0));
        assert!(kind.allows(1));
        assert!(!kind.allows(2));
        assert!(!kind.allows(-1));
    }

    #[test]
    fn view_admits_only_its_four_levels() {
        let kind = Field::View.kind();
        for value in 0..=3 {
            assert!(kind.allows(value));
        }
        assert!(!kind.allows(4));
    }

    #[test]
    fn condition_admits_only_one_through_five() {
        let kind = Field::Condition.kind();
        assert!(!kind.allows(0));
        for value in 1..=5 {
            assert!(kind.allows(value));
        }
        assert!(!kind.allows(6));
    }

    #[test]
    fn grade_and_floors_are_inclusive_ranges() {
        let grade = Field::Grade.kind();
        assert!(grade.allows(1));
        assert!(grade.allows(12));
        assert!(!grade.allows(0));
        assert!(!grade.allows(13));

        let floors = Field::Floors.kind();
        assert!(floors.allows(1));
        assert!(floors.allows(5));
        assert!(!floors.allows(6));
    }

    #[test]
    fn labeled_kinds_resolve_labels() {
        assert_eq!(Field::Waterfront.kind().label_for(1), Some("Yes"));
        assert_eq!(Field::Condition.kind().label_for(3), Some("Average"));
        assert_eq!(Field::View.kind().label_for(9), None);
        assert_eq!(Field::Grade.kind().label_for(7), None);
    }
}
