use crate::error::LoadError;
use crate::types::{week_in_range, DayName, MealType, MAX_WEEK, MIN_WEEK};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

pub const DEFAULT_CURRENCY: &str = "R";

// ---------------------------------------------------------------------------
// Pricing
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pricing {
    #[serde(default = "default_base_price")]
    pub base_price: Decimal,
    #[serde(default = "default_low_carb_extra")]
    pub low_carb_extra: Decimal,
}

fn default_base_price() -> Decimal {
    Decimal::from(90)
}

fn default_low_carb_extra() -> Decimal {
    Decimal::from(10)
}

impl Default for Pricing {
    fn default() -> Self {
        Self {
            base_price: default_base_price(),
            low_carb_extra: default_low_carb_extra(),
        }
    }
}

impl Pricing {
    pub fn new(base_price: Decimal, low_carb_extra: Decimal) -> Self {
        Self {
            base_price,
            low_carb_extra,
        }
    }

    /// Unit price of one meal of the given type.
    pub fn price_of(&self, meal: MealType) -> Decimal {
        match meal {
            MealType::LowCarb => self
                .base_price
                .checked_add(self.low_carb_extra)
                .unwrap_or(Decimal::MAX),
            MealType::Meat | MealType::Veg => self.base_price,
        }
    }
}

// ---------------------------------------------------------------------------
// Menu entries
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayMenu {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meat: Option<MenuItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub veg: Option<MenuItem>,
    #[serde(default, alias = "lowCarb", skip_serializing_if = "Option::is_none")]
    pub low_carb: Option<MenuItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl DayMenu {
    pub fn item(&self, meal: MealType) -> Option<&MenuItem> {
        match meal {
            MealType::Meat => self.meat.as_ref(),
            MealType::Veg => self.veg.as_ref(),
            MealType::LowCarb => self.low_carb.as_ref(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, alias = "dateRange", skip_serializing_if = "Option::is_none")]
    pub date_range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(default, alias = "lowCarbExtra", skip_serializing_if = "Option::is_none")]
    pub low_carb_extra: Option<Decimal>,
    /// Meal types offered this week. Absent means all of them.
    #[serde(default, alias = "mealTypes", skip_serializing_if = "Option::is_none")]
    pub meal_types: Option<Vec<MealType>>,
    #[serde(default)]
    pub days: BTreeMap<DayName, DayMenu>,
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Weekly menu and pricing data, read-only for the lifetime of a session.
///
/// An empty catalog places no restriction on week selection and prices every
/// week with the defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    weeks: BTreeMap<u32, CatalogEntry>,
    defaults: Pricing,
    currency: String,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::empty()
    }
}

impl Catalog {
    pub fn empty() -> Self {
        Self {
            weeks: BTreeMap::new(),
            defaults: Pricing::default(),
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }

    pub fn with_defaults(mut self, defaults: Pricing) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn with_entry(mut self, week: u32, entry: CatalogEntry) -> Self {
        self.weeks.insert(week, entry);
        self
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn defaults(&self) -> Pricing {
        self.defaults
    }

    // -----------------------------------------------------------------------
    // Loading
    // -----------------------------------------------------------------------

    /// Read a catalog from a YAML file, or JSON when the extension is `.json`.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        if !path.exists() {
            return Err(LoadError::NotFound(path.display().to_string()));
        }
        let data = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&data)
        } else {
            Self::from_yaml_str(&data)
        }
    }

    /// Like [`Catalog::load`], but any failure yields the empty catalog.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(catalog) => catalog,
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "menu catalog unavailable, using default pricing with no week restriction"
                );
                Self::empty()
            }
        }
    }

    pub fn from_yaml_str(data: &str) -> Result<Self, LoadError> {
        let doc: serde_yaml::Value = serde_yaml::from_str(data)?;
        Self::from_document(doc)
    }

    pub fn from_json_str(data: &str) -> Result<Self, LoadError> {
        let doc: serde_yaml::Value = serde_json::from_str(data)?;
        Self::from_document(doc)
    }

    fn from_document(doc: serde_yaml::Value) -> Result<Self, LoadError> {
        let mapping = match doc {
            serde_yaml::Value::Null => return Ok(Self::empty()),
            serde_yaml::Value::Mapping(m) => m,
            other => serde_yaml::from_value::<serde_yaml::Mapping>(other)?,
        };

        let mut weeks = BTreeMap::new();
        for (key, value) in mapping {
            let week = parse_week_key(&key)?;
            if !week_in_range(week) {
                return Err(LoadError::WeekOutOfRange(week));
            }
            let entry: CatalogEntry = serde_yaml::from_value(value)?;
            let negative = |d: Option<Decimal>| d.is_some_and(|d| d < Decimal::ZERO);
            if negative(entry.price) || negative(entry.low_carb_extra) {
                return Err(LoadError::NegativePrice(week));
            }
            weeks.insert(week, entry);
        }

        Ok(Self {
            weeks,
            ..Self::empty()
        })
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn entry(&self, week: u32) -> Option<&CatalogEntry> {
        self.weeks.get(&week)
    }

    pub fn entries(&self) -> impl Iterator<Item = (u32, &CatalogEntry)> {
        self.weeks.iter().map(|(w, e)| (*w, e))
    }

    /// Defaults overlaid with whatever the week's entry overrides.
    pub fn pricing_for(&self, week: u32) -> Pricing {
        let Some(entry) = self.entry(week) else {
            return self.defaults;
        };
        Pricing {
            base_price: entry.price.unwrap_or(self.defaults.base_price),
            low_carb_extra: entry.low_carb_extra.unwrap_or(self.defaults.low_carb_extra),
        }
    }

    pub fn menu_for(&self, week: u32, day: DayName, meal: MealType) -> Option<&MenuItem> {
        self.entry(week)?.days.get(&day)?.item(meal)
    }

    pub fn day_note(&self, week: u32, day: DayName) -> Option<&str> {
        self.entry(week)?
            .days
            .get(&day)?
            .note
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
    }

    pub fn meal_types_for(&self, week: u32) -> Vec<MealType> {
        match self.entry(week).and_then(|e| e.meal_types.as_ref()) {
            Some(types) if !types.is_empty() => MealType::all()
                .iter()
                .copied()
                .filter(|m| types.contains(m))
                .collect(),
            _ => MealType::all().to_vec(),
        }
    }

    /// Ordered set of orderable weeks. Empty means unconstrained.
    pub fn available_weeks(&self) -> BTreeSet<u32> {
        self.weeks.keys().copied().collect()
    }

    pub fn is_constrained(&self) -> bool {
        !self.weeks.is_empty()
    }

    pub fn is_available(&self, week: u32) -> bool {
        week_in_range(week) && (!self.is_constrained() || self.weeks.contains_key(&week))
    }

    /// First two distinct available weeks, or `(1, 2)` when unconstrained.
    pub fn default_weeks(&self) -> (u32, u32) {
        let mut it = self.weeks.keys().copied();
        match (it.next(), it.next()) {
            (Some(a), Some(b)) => (a, b),
            (Some(a), None) => (a, a),
            _ => (MIN_WEEK, MIN_WEEK + 1),
        }
    }

    /// The next available week after `week`, wrapping around, that differs
    /// from `week`.
    pub fn next_distinct_week(&self, week: u32) -> Option<u32> {
        if !self.is_constrained() {
            return Some(if week >= MAX_WEEK { MIN_WEEK } else { week + 1 });
        }
        self.weeks
            .range(week.saturating_add(1)..)
            .map(|(w, _)| *w)
            .chain(self.weeks.keys().copied())
            .find(|w| *w != week)
    }
}

fn parse_week_key(key: &serde_yaml::Value) -> Result<u32, LoadError> {
    let invalid = || LoadError::InvalidWeekKey(describe_key(key));
    match key {
        serde_yaml::Value::Number(n) => n
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(invalid),
        serde_yaml::Value::String(s) => s.trim().parse::<u32>().map_err(|_| invalid()),
        _ => Err(invalid()),
    }
}

fn describe_key(key: &serde_yaml::Value) -> String {
    match key {
        serde_yaml::Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim().to_string())
            .unwrap_or_default(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
