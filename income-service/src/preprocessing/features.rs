use crate::error::InferenceError;
use crate::preprocessing::categorical::{
    CategoricalMap, GENDER, MARITAL_STATUS, OCCUPATION, RACE, RELATIONSHIP, WORKCLASS,
};
use ndarray::Array2;
use serde_json::{Map, Value};

pub const FEATURE_COUNT: usize = 9;

/// Column order expected by the ordinal model.
pub const FEATURE_ORDER: [&str; FEATURE_COUNT] = [
    "age",
    "workclass",
    "educationNum",
    "maritalStatus",
    "occupation",
    "relationship",
    "race",
    "gender",
    "hoursPerWeek",
];

const DEFAULT_AGE: i64 = 30;
const DEFAULT_EDUCATION_NUM: i64 = 10;
const DEFAULT_HOURS_PER_WEEK: i64 = 40;

/// One census record as received from a client, after defaults and coercion.
///
/// Categorical fields keep the raw string. `None` means the client sent a
/// non-string value, which encodes like an unknown value.
#[derive(Debug, Clone, PartialEq)]
pub struct IncomeFeatures {
    pub age: i64,
    pub workclass: Option<String>,
    pub education_num: i64,
    pub marital_status: Option<String>,
    pub occupation: Option<String>,
    pub relationship: Option<String>,
    pub race: Option<String>,
    pub gender: Option<String>,
    pub hours_per_week: i64,
}

impl Default for IncomeFeatures {
    fn default() -> Self {
        Self {
            age: DEFAULT_AGE,
            workclass: Some(WORKCLASS.fallback().to_string()),
            education_num: DEFAULT_EDUCATION_NUM,
            marital_status: Some(MARITAL_STATUS.fallback().to_string()),
            occupation: Some(OCCUPATION.fallback().to_string()),
            relationship: Some(RELATIONSHIP.fallback().to_string()),
            race: Some(RACE.fallback().to_string()),
            gender: Some(GENDER.fallback().to_string()),
            hours_per_week: DEFAULT_HOURS_PER_WEEK,
        }
    }
}

impl IncomeFeatures {
    /// Reads a `/predict` body. Missing keys take their documented defaults.
    pub fn from_json(body: &Value) -> Result<Self, InferenceError> {
        let object = body.as_object().ok_or_else(|| {
            InferenceError::InvalidRequest("request body must be a JSON object".to_string())
        })?;

        Ok(Self {
            age: integer_field(object, "age", DEFAULT_AGE)?,
            workclass: categorical_field(object, "workclass", &WORKCLASS)?,
            education_num: integer_field(object, "educationNum", DEFAULT_EDUCATION_NUM)?,
            marital_status: categorical_field(object, "maritalStatus", &MARITAL_STATUS)?,
            occupation: categorical_field(object, "occupation", &OCCUPATION)?,
            relationship: categorical_field(object, "relationship", &RELATIONSHIP)?,
            race: categorical_field(object, "race", &RACE)?,
            gender: categorical_field(object, "gender", &GENDER)?,
            hours_per_week: integer_field(object, "hoursPerWeek", DEFAULT_HOURS_PER_WEEK)?,
        })
    }

    pub fn encode(&self) -> EncodedFeatures {
        EncodedFeatures([
            self.age as f32,
            WORKCLASS.encode(self.workclass.as_deref()) as f32,
            self.education_num as f32,
            MARITAL_STATUS.encode(self.marital_status.as_deref()) as f32,
            OCCUPATION.encode(self.occupation.as_deref()) as f32,
            RELATIONSHIP.encode(self.relationship.as_deref()) as f32,
            RACE.encode(self.race.as_deref()) as f32,
            GENDER.encode(self.gender.as_deref()) as f32,
            self.hours_per_week as f32,
        ])
    }
}

/// The nine ordinal features in [`FEATURE_ORDER`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EncodedFeatures(pub [f32; FEATURE_COUNT]);

impl EncodedFeatures {
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    /// Single-row batch for the classifier.
    pub fn to_batch(&self) -> Result<Array2<f32>, InferenceError> {
        Ok(Array2::from_shape_vec((1, FEATURE_COUNT), self.0.to_vec())?)
    }
}

fn integer_field(
    object: &Map<String, Value>,
    key: &str,
    default: i64,
) -> Result<i64, InferenceError> {
    match object.get(key) {
        None => Ok(default),
        Some(value) => coerce_integer(key, value),
    }
}

fn coerce_integer(key: &str, value: &Value) -> Result<i64, InferenceError> {
    let invalid = || {
        InferenceError::InvalidRequest(format!("field `{}` expects an integer, got {}", key, value))
    };

    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Ok(i);
            }
            match n.as_f64() {
                Some(f) if f.is_finite() && f.abs() < i64::MAX as f64 => Ok(f.trunc() as i64),
                _ => Err(invalid()),
            }
        }
        Value::Bool(b) => Ok(i64::from(*b)),
        Value::String(s) => s.trim().parse::<i64>().map_err(|_| invalid()),
        Value::Null | Value::Array(_) | Value::Object(_) => Err(invalid()),
    }
}

fn categorical_field(
    object: &Map<String, Value>,
    key: &str,
    map: &CategoricalMap,
) -> Result<Option<String>, InferenceError> {
    match object.get(key) {
        None => Ok(Some(map.fallback().to_string())),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(Value::Array(_)) | Some(Value::Object(_)) => Err(InferenceError::InvalidRequest(
            format!("field `{}` expects a string", key),
        )),
        Some(_) => Ok(None),
    }
}
