//! Closed categorical tables used by the ordinal feature encoder.
//!
//! Each table is an ordered list of accepted values; a value's code is its
//! position in the list. Values outside the table encode as the code of the
//! table's fallback value.

/// A fixed string-to-code enumeration.
#[derive(Debug)]
pub struct CategoricalMap {
    name: &'static str,
    values: &'static [&'static str],
    fallback: &'static str,
}

impl CategoricalMap {
    const fn new(
        name: &'static str,
        values: &'static [&'static str],
        fallback: &'static str,
    ) -> Self {
        Self {
            name,
            values,
            fallback,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Value substituted when a request omits the field.
    pub fn fallback(&self) -> &'static str {
        self.fallback
    }

    pub fn values(&self) -> &'static [&'static str] {
        self.values
    }

    /// Exact lookup, `None` for values outside the table.
    pub fn lookup(&self, value: &str) -> Option<u8> {
        self.values
            .iter()
            .position(|candidate| *candidate == value)
            .map(|idx| idx as u8)
    }

    pub fn fallback_code(&self) -> u8 {
        // Every table lists its own fallback value.
        self.lookup(self.fallback).unwrap_or(0)
    }

    /// Code for `value`, or the fallback code when it is absent or unknown.
    pub fn encode(&self, value: Option<&str>) -> u8 {
        value
            .and_then(|v| self.lookup(v))
            .unwrap_or_else(|| self.fallback_code())
    }
}

pub static WORKCLASS: CategoricalMap = CategoricalMap::new(
    "workclass",
    &[
        "Private",
        "Self-emp-not-inc",
        "Self-emp-inc",
        "Federal-gov",
        "Local-gov",
        "State-gov",
        "Without-pay",
        "Never-worked",
    ],
    "Private",
);

pub static MARITAL_STATUS: CategoricalMap = CategoricalMap::new(
    "maritalStatus",
    &[
        "Married-civ-spouse",
        "Divorced",
        "Never-married",
        "Separated",
        "Widowed",
        "Married-spouse-absent",
        "Married-AF-spouse",
    ],
    "Never-married",
);

pub static OCCUPATION: CategoricalMap = CategoricalMap::new(
    "occupation",
    &[
        "Tech-support",
        "Craft-repair",
        "Other-service",
        "Sales",
        "Exec-managerial",
        "Prof-specialty",
        "Handlers-cleaners",
        "Machine-op-inspct",
        "Adm-clerical",
        "Farming-fishing",
        "Transport-moving",
        "Priv-house-serv",
        "Protective-serv",
        "Armed-Forces",
    ],
    "Other-service",
);

pub static RELATIONSHIP: CategoricalMap = CategoricalMap::new(
    "relationship",
    &[
        "Wife",
        "Own-child",
        "Husband",
        "Not-in-family",
        "Other-relative",
        "Unmarried",
    ],
    "Not-in-family",
);

pub static RACE: CategoricalMap = CategoricalMap::new(
    "race",
    &[
        "White",
        "Asian-Pac-Islander",
        "Amer-Indian-Eskimo",
        "Other",
        "Black",
    ],
    "White",
);

pub static GENDER: CategoricalMap = CategoricalMap::new("gender", &["Female", "Male"], "Male");

pub static ALL_MAPS: [&CategoricalMap; 6] = [
    &WORKCLASS,
    &MARITAL_STATUS,
    &OCCUPATION,
    &RELATIONSHIP,
    &RACE,
    &GENDER,
];
