use crate::models::place::Destination;

/// Coarse category of a destination, derived from the catalog's free-text
/// `type` and `activities` fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DestinationCategory {
    Trekking,
    Adventure,
    Cultural,
    Urban,
    General,
}

/// Ordered predicates, first match wins. "trek" must stay ahead of the rest so
/// that "adventure trekking" lands on the longer stay.
const CATEGORY_KEYWORDS: &[(DestinationCategory, &[&str])] = &[
    (DestinationCategory::Trekking, &["trek"]),
    (DestinationCategory::Adventure, &["adventure", "natural"]),
    (DestinationCategory::Cultural, &["cultural", "religious"]),
    (DestinationCategory::Urban, &["urban", "city"]),
];

impl DestinationCategory {
    pub fn classify(destination: &Destination) -> Self {
        let fields = [
            destination.place_type.as_deref(),
            destination.activities.as_deref(),
        ];
        let text = fields
            .iter()
            .flatten()
            .map(|field| field.to_lowercase())
            .collect::<Vec<_>>()
            .join(" ");
        // Keywords match at word starts, so "trek" hits "trekking" but "city"
        // stays out of "authenticity"
        let words: Vec<&str> = text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|word| !word.is_empty())
            .collect();

        CATEGORY_KEYWORDS
            .iter()
            .find(|(_, keywords)| {
                keywords
                    .iter()
                    .any(|keyword| words.iter().any(|word| word.starts_with(keyword)))
            })
            .map(|(category, _)| *category)
            .unwrap_or(DestinationCategory::General)
    }

    /// Heuristic number of days this kind of destination deserves
    pub fn ideal_days(&self) -> u32 {
        match self {
            DestinationCategory::Trekking => 7,
            DestinationCategory::Adventure => 4,
            DestinationCategory::Cultural => 3,
            DestinationCategory::Urban => 3,
            DestinationCategory::General => 3,
        }
    }

    pub fn is_trekking(&self) -> bool {
        matches!(self, DestinationCategory::Trekking)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_by_type() {
        let cases = [
            ("Trekking", DestinationCategory::Trekking),
            ("Natural Wonder", DestinationCategory::Adventure),
            ("adventure sports", DestinationCategory::Adventure),
            ("Religious Site", DestinationCategory::Cultural),
            ("cultural", DestinationCategory::Cultural),
            ("City", DestinationCategory::Urban),
            ("urban", DestinationCategory::Urban),
            ("Lake", DestinationCategory::General),
        ];

        for (place_type, expected) in cases {
            let place = Destination::named("Somewhere").with_type(place_type);
            assert_eq!(DestinationCategory::classify(&place), expected, "type {}", place_type);
        }
    }

    #[test]
    fn test_trek_wins_over_other_keywords() {
        let place = Destination::named("Annapurna")
            .with_type("natural")
            .with_activities("Circuit trekking, Cultural visits");
        assert_eq!(DestinationCategory::classify(&place), DestinationCategory::Trekking);
    }

    #[test]
    fn test_activities_are_consulted_when_type_is_missing() {
        let place = Destination::named("Bhaktapur").with_activities("Heritage walks, city tours");
        assert_eq!(DestinationCategory::classify(&place), DestinationCategory::Urban);
    }

    #[test]
    fn test_keywords_inside_other_words_do_not_match() {
        let place = Destination::named("Bandipur")
            .with_type("Hill town")
            .with_activities("Authenticity walks, electricity museum");
        assert_eq!(DestinationCategory::classify(&place), DestinationCategory::General);

        let place = Destination::named("Patan").with_type("Multicultural heritage");
        assert_eq!(DestinationCategory::classify(&place), DestinationCategory::General);

        let place = Destination::named("Langtang").with_type("Trekking/Natural");
        assert_eq!(DestinationCategory::classify(&place), DestinationCategory::Trekking);
    }

    #[test]
    fn test_ideal_days() {
        assert_eq!(DestinationCategory::Trekking.ideal_days(), 7);
        assert_eq!(DestinationCategory::Adventure.ideal_days(), 4);
        assert_eq!(DestinationCategory::Cultural.ideal_days(), 3);
        assert_eq!(DestinationCategory::General.ideal_days(), 3);
        assert_eq!(
            DestinationCategory::classify(&Destination::named("Unknown")),
            DestinationCategory::General
        );
    }
}
