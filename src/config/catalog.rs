//! Validated category catalog.
//!
//! The raw category table and display order from the configuration file are
//! checked once at load time and turned into a `Catalog` that the rest of the
//! application can trust.

use super::ConfigError;
use log::*;
use rand::Rng;
use std::collections::{HashMap, HashSet};

/// A named group of selectable options.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub options: Vec<String>,
}

/// Categories in display order along with the row limits.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<Category>,
    default_rows: usize,
    max_rows: usize,
}

impl Catalog {
    /// Build a catalog from the raw configuration values, rejecting any
    /// misconfiguration with a descriptive error.
    ///
    pub fn build(
        table: &HashMap<String, Vec<String>>,
        order: &[String],
        default_rows: usize,
        max_rows: Option<usize>,
    ) -> Result<Catalog, ConfigError> {
        if table.is_empty() {
            return Err(ConfigError::NoCategories);
        }

        let order: Vec<String> = if order.is_empty() {
            let mut names: Vec<String> = table.keys().cloned().collect();
            names.sort();
            names
        } else {
            order.to_vec()
        };

        let mut seen = HashSet::new();
        let mut categories = Vec::with_capacity(order.len());
        for name in &order {
            if !seen.insert(name.as_str()) {
                return Err(ConfigError::DuplicateCategory { name: name.clone() });
            }
            let options = table
                .get(name)
                .ok_or_else(|| ConfigError::UnknownCategory { name: name.clone() })?;
            if options.is_empty() {
                return Err(ConfigError::EmptyCategory { name: name.clone() });
            }
            categories.push(Category {
                name: name.clone(),
                options: options.clone(),
            });
        }

        let mut ignored: Vec<&String> = table
            .keys()
            .filter(|name| !seen.contains(name.as_str()))
            .collect();
        ignored.sort();
        for name in ignored {
            warn!("Category '{}' is not in the display order and will not be shown", name);
        }

        if default_rows > categories.len() {
            return Err(ConfigError::InvalidRowLimits(format!(
                "default_rows is {} but only {} categories are ordered",
                default_rows,
                categories.len()
            )));
        }

        let max_rows = match max_rows {
            Some(0) => {
                return Err(ConfigError::InvalidRowLimits(
                    "max_rows must be at least 1".to_string(),
                ))
            }
            Some(max) if max < default_rows => {
                return Err(ConfigError::InvalidRowLimits(format!(
                    "max_rows ({}) is below default_rows ({})",
                    max, default_rows
                )))
            }
            Some(max) if max > categories.len() => {
                warn!(
                    "max_rows ({}) exceeds the {} ordered categories; using {}",
                    max,
                    categories.len(),
                    categories.len()
                );
                categories.len()
            }
            Some(max) => max,
            None => categories.len(),
        };

        Ok(Catalog {
            categories,
            default_rows,
            max_rows,
        })
    }

    /// Return all categories in display order.
    ///
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn default_rows(&self) -> usize {
        self.default_rows
    }

    pub fn max_rows(&self) -> usize {
        self.max_rows
    }

    /// Return the categories visible at startup.
    ///
    pub fn default_categories(&self) -> &[Category] {
        &self.categories[..self.default_rows]
    }

    /// Pick a uniformly random option for each default category.
    ///
    pub fn roll<R: Rng>(&self, rng: &mut R) -> Vec<(&str, &str)> {
        self.default_categories()
            .iter()
            .map(|category| {
                let index = rng.gen_range(0..category.options.len());
                (category.name.as_str(), category.options[index].as_str())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn table() -> HashMap<String, Vec<String>> {
        let mut table = HashMap::new();
        table.insert(
            "Theme".to_string(),
            vec!["space".to_string(), "ocean".to_string()],
        );
        table.insert(
            "Genre".to_string(),
            vec!["puzzle".to_string(), "racing".to_string(), "rpg".to_string()],
        );
        table.insert("Gameplay".to_string(), vec!["co-op".to_string()]);
        table
    }

    fn options_of<'a>(catalog: &'a Catalog, name: &str) -> Option<&'a [String]> {
        catalog
            .categories()
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.options.as_slice())
    }

    fn order(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn builds_in_display_order() {
        let catalog =
            Catalog::build(&table(), &order(&["Genre", "Theme", "Gameplay"]), 2, None).unwrap();
        let names: Vec<&str> = catalog.categories().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Genre", "Theme", "Gameplay"]);
        assert_eq!(catalog.default_rows(), 2);
        assert_eq!(catalog.max_rows(), 3);
        assert_eq!(catalog.default_categories().len(), 2);
    }

    #[test]
    fn empty_order_sorts_names() {
        let catalog = Catalog::build(&table(), &[], 1, None).unwrap();
        let names: Vec<&str> = catalog.categories().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Gameplay", "Genre", "Theme"]);
    }

    #[test]
    fn rejects_empty_table() {
        let err = Catalog::build(&HashMap::new(), &[], 0, None).unwrap_err();
        assert!(matches!(err, ConfigError::NoCategories));
    }

    #[test]
    fn rejects_category_without_options() {
        let mut table = table();
        table.insert("Art Style".to_string(), vec![]);
        let err = Catalog::build(&table, &order(&["Theme", "Art Style"]), 1, None).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyCategory { name } if name == "Art Style"));
    }

    #[test]
    fn rejects_unknown_and_duplicate_names() {
        let err = Catalog::build(&table(), &order(&["Theme", "Mood"]), 1, None).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownCategory { name } if name == "Mood"));

        let err = Catalog::build(&table(), &order(&["Theme", "Theme"]), 1, None).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateCategory { name } if name == "Theme"));
    }

    #[test]
    fn unordered_categories_are_ignored() {
        let catalog = Catalog::build(&table(), &order(&["Theme"]), 1, None).unwrap();
        assert_eq!(catalog.categories().len(), 1);
        assert!(options_of(&catalog, "Genre").is_none());
    }

    #[test]
    fn validates_row_limits() {
        let names = order(&["Theme", "Genre", "Gameplay"]);
        assert!(Catalog::build(&table(), &names, 4, None).is_err());
        assert!(Catalog::build(&table(), &names, 1, Some(0)).is_err());
        assert!(Catalog::build(&table(), &names, 2, Some(1)).is_err());

        let clamped = Catalog::build(&table(), &names, 1, Some(10)).unwrap();
        assert_eq!(clamped.max_rows(), 3);

        let limited = Catalog::build(&table(), &names, 1, Some(2)).unwrap();
        assert_eq!(limited.max_rows(), 2);
    }

    #[test]
    fn roll_picks_an_option_per_default_row() {
        let catalog =
            Catalog::build(&table(), &order(&["Genre", "Theme", "Gameplay"]), 2, None).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let idea = catalog.roll(&mut rng);
            assert_eq!(idea.len(), 2);
            assert_eq!(idea[0].0, "Genre");
            assert!(options_of(&catalog, "Genre").unwrap().iter().any(|o| o == idea[0].1));
            assert_eq!(idea[1].0, "Theme");
            assert!(options_of(&catalog, "Theme").unwrap().iter().any(|o| o == idea[1].1));
        }
    }
}
