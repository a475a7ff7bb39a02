//! AnimalQuery - optional field criteria for narrowing the animal list.

use super::Animal;

const PERSONALITY_TRAITS: &str = "personalityTraits";
const PERSONALITY_TRAITS_ARRAY: &str = "personalityTraits[]";

/// Criteria for [`filter_by_query`]. Every present field must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnimalQuery {
    /// Every listed trait must appear in the animal's traits.
    pub personality_traits: Vec<String>,
    pub diet: Option<String>,
    pub species: Option<String>,
    pub name: Option<String>,
}

impl AnimalQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a query from decoded query-string pairs.
    ///
    /// `personalityTraits` (or `personalityTraits[]`) may repeat and
    /// accumulates; the scalar keys keep their last non-empty value and
    /// unknown keys are ignored. A lone empty trait value means no trait
    /// criterion, but once traits repeat every value counts, so an empty
    /// member matches no animal.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut query = Self::new();
        for (key, value) in pairs {
            let value: String = value.into();
            match key.as_ref() {
                PERSONALITY_TRAITS | PERSONALITY_TRAITS_ARRAY => {
                    query.personality_traits.push(value)
                }
                _ if value.is_empty() => {}
                "diet" => query.diet = Some(value),
                "species" => query.species = Some(value),
                "name" => query.name = Some(value),
                _ => {}
            }
        }
        if matches!(query.personality_traits.as_slice(), [only] if only.is_empty()) {
            query.personality_traits.clear();
        }
        query
    }

    pub fn with_trait(mut self, trait_name: impl Into<String>) -> Self {
        self.personality_traits.push(trait_name.into());
        self
    }

    pub fn with_diet(mut self, diet: impl Into<String>) -> Self {
        self.diet = Some(diet.into());
        self
    }

    pub fn with_species(mut self, species: impl Into<String>) -> Self {
        self.species = Some(species.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// True when no criterion is set.
    pub fn is_empty(&self) -> bool {
        self.personality_traits.is_empty()
            && self.diet.is_none()
            && self.species.is_none()
            && self.name.is_none()
    }

    /// Whether a single animal satisfies every present criterion.
    pub fn matches(&self, animal: &Animal) -> bool {
        self.personality_traits.iter().all(|t| animal.has_trait(t))
            && field_matches(&self.diet, &animal.diet)
            && field_matches(&self.species, &animal.species)
            && field_matches(&self.name, &animal.name)
    }
}

fn field_matches(expected: &Option<String>, actual: &str) -> bool {
    expected.as_deref().map_or(true, |e| e == actual)
}

/// Narrow `animals` to those matching every criterion in `query`.
///
/// Returns an owned subsequence in the original relative order; the input
/// slice is left untouched.
pub fn filter_by_query(query: &AnimalQuery, animals: &[Animal]) -> Vec<Animal> {
    animals
        .iter()
        .filter(|animal| query.matches(animal))
        .cloned()
        .collect()
}
