//! Predicts the income bracket of one hard-coded profile with a model
//! trained on drop-first one-hot columns.

use anyhow::Context;
use clap::Parser;
use income_service::config::ModelConfig;
use income_service::model::{loader, Classifier, IncomeBracket};
use income_service::preprocessing::one_hot::ONE_HOT_COLUMNS;
use income_service::preprocessing::{OneHotRow, Profile};
use income_service::telemetry;
use ndarray::Array2;

#[derive(Parser, Debug)]
#[command(about = "Predict the income bracket of an example profile")]
struct Args {
    /// Path to the one-hot ONNX classifier
    #[arg(long, default_value = "income_prediction_model.onnx")]
    model: String,

    /// Name of the graph's label output
    #[arg(long, default_value = "output_label")]
    label_output: String,
}

fn example_profile() -> Profile {
    Profile {
        age: 38,
        education_num: 10,
        gender: "Male".to_string(),
        hours_per_week: 70,
        workclass: "Private".to_string(),
        marital_status: "Married-civ-spouse".to_string(),
        occupation: "Handlers-cleaners".to_string(),
        relationship: "Husband".to_string(),
        race: "Black".to_string(),
    }
}

fn main() -> anyhow::Result<()> {
    telemetry::init_tracing()?;
    let args = Args::parse();

    let config = ModelConfig {
        path: args.model,
        label_output: args.label_output,
        ..ModelConfig::default()
    };
    let classifier = loader::load_classifier(&config)
        .with_context(|| format!("loading model from {}", config.path))?;

    let row = OneHotRow::from_profile(&example_profile());
    tracing::info!(columns = ?row.active_columns(), "encoded example profile");

    let batch = Array2::from_shape_vec((1, ONE_HOT_COLUMNS.len()), row.as_slice().to_vec())?;
    let labels = classifier.predict(batch.view())?;
    let label = labels
        .first()
        .copied()
        .context("model returned no prediction")?;

    println!("Income {}", IncomeBracket::from_label(label).as_str());
    Ok(())
}
