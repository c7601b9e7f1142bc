//! Text output for prediction results and catalog listings.

use super::catalog::{crop_emoji, CropInfo, DiseaseInfo};
use crate::api::{CropPrediction, Diagnosis};

/// Upper-case the first character, as crop names arrive in lower case.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Ranked list of recommended crops.
pub fn format_predictions(predictions: &[CropPrediction]) -> String {
    if predictions.is_empty() {
        return "No crops recommended for this location.\n".to_string();
    }

    predictions
        .iter()
        .enumerate()
        .map(|(idx, prediction)| {
            let mut entry = format!(
                "{} #{} {} ({:.2}%)\n",
                crop_emoji(&prediction.crop),
                idx + 1,
                capitalize(&prediction.crop),
                prediction.confidence
            );
            if !prediction.info.is_empty() {
                entry.push_str(&format!("   {}\n", prediction.info));
            }
            entry
        })
        .collect()
}

/// Disease class, confidence and treatment details.
pub fn format_diagnosis(diagnosis: &Diagnosis) -> String {
    let mut out = format!(
        "Disease: {}\nConfidence: {:.2}%\n\n📝 Information:\n   {}\n",
        diagnosis.class(),
        diagnosis.confidence_percent(),
        diagnosis.info()
    );

    if let Some(url) = diagnosis.wiki_url() {
        out.push_str(&format!("🔗 Read more: {url}\n"));
    }

    let suggestions = diagnosis.suggestions();
    if !suggestions.is_empty() {
        out.push_str("\n💊 Recommended Medicines & Shops:\n");
        for s in suggestions {
            out.push_str(&format!(
                "   💊 {}\n      {}\n      {}\n",
                s.medicine, s.usage, s.shop
            ));
        }
    }
    out
}

pub fn format_crop_catalog(crops: &[&CropInfo]) -> String {
    crops
        .iter()
        .map(|crop| format!("{} {}\n   {}\n", crop.emoji, capitalize(crop.name), crop.summary))
        .collect()
}

pub fn format_disease_catalog(diseases: &[&DiseaseInfo]) -> String {
    diseases
        .iter()
        .map(|disease| format!("{}\n   {}\n", disease.name, disease.summary))
        .collect()
}
