use std::fmt;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

/// Query parameters for the actionable-explanation call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ActionTargets {
    pub target_class: String,
    pub undesirable_class: String,
}

impl Default for ActionTargets {
    fn default() -> Self {
        Self {
            target_class: "Graduate".to_string(),
            undesirable_class: "Dropout".to_string(),
        }
    }
}

/// One element of the `/predict` response array.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PredictionResult {
    pub prediction_label: String,
    #[serde(default)]
    pub class_probabilities: ClassProbabilities,
}

/// Class → probability pairs in the order the backend sent them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClassProbabilities(pub Vec<(String, f64)>);

impl ClassProbabilities {
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(label, prob)| (label.as_str(), *prob))
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.iter()
            .find(|(name, _)| *name == label)
            .map(|(_, prob)| prob)
    }
}

impl<'de> Deserialize<'de> for ClassProbabilities {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedVisitor;

        impl<'de> Visitor<'de> for OrderedVisitor {
            type Value = ClassProbabilities;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of class label to probability")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((label, prob)) = map.next_entry::<String, f64>()? {
                    entries.push((label, prob));
                }
                Ok(ClassProbabilities(entries))
            }
        }

        deserializer.deserialize_map(OrderedVisitor)
    }
}

/// `/local_explanation` response.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct LocalExplanation {
    #[serde(default)]
    pub class_names: Vec<String>,
    #[serde(default)]
    pub explanations: Vec<ClassExplanation>,
}

impl LocalExplanation {
    /// Explanation block for `class_name`, if the backend sent one.
    pub fn for_class(&self, class_name: &str) -> Option<&ClassExplanation> {
        self.explanations
            .iter()
            .find(|explanation| explanation.class_name == class_name)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ClassExplanation {
    pub class_name: String,
    #[serde(default)]
    pub top_5_features: Vec<FeatureImpact>,
}

/// Signed contribution of one feature to a class probability.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FeatureImpact {
    pub feature: String,
    pub impact: f64,
}

/// `/actionable_explanations` response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ActionableExplanation {
    pub recommendation_type: String,
    pub message: String,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

/// `/model_info` response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ModelInfo {
    pub global_explanation_report: ExplanationReport,
    pub metadata: ModelMetadata,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ExplanationReport {
    #[serde(rename = "INPUT")]
    pub input: String,
    #[serde(rename = "OUTPUT")]
    pub output: String,
    #[serde(rename = "HOW")]
    pub how: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ModelMetadata {
    pub model_performance: ModelPerformance,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ModelPerformance {
    pub test_accuracy: MetricValue,
    pub f1_score_weighted: MetricValue,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A metric the backend may report as a number or as preformatted text.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// `/global_explanation` response.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct GlobalImportance {
    #[serde(default)]
    pub top_features: Vec<FeatureImportance>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FeatureImportance {
    pub feature: String,
    pub importance: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prediction_keeps_probability_order() {
        let json = r#"{
            "prediction_label": "Dropout",
            "class_probabilities": {"Graduate": 0.1, "Dropout": 0.7, "Enrolled": 0.2},
            "extra": true
        }"#;
        let parsed: PredictionResult = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.prediction_label, "Dropout");
        let labels: Vec<&str> = parsed.class_probabilities.iter().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["Graduate", "Dropout", "Enrolled"]);
        assert_eq!(parsed.class_probabilities.get("Dropout"), Some(0.7));
        assert_eq!(parsed.class_probabilities.get("Unknown"), None);
    }

    #[test]
    fn parses_local_explanation_shape() {
        let json = r#"{
            "class_names": ["Dropout", "Graduate"],
            "explanations": [
                {"class_name": "Dropout", "top_5_features": [{"feature": "Admission grade", "impact": -0.31}]},
                {"class_name": "Graduate", "top_5_features": []}
            ]
        }"#;
        let parsed: LocalExplanation = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.class_names, vec!["Dropout", "Graduate"]);
        let dropout = parsed.for_class("Dropout").unwrap();
        assert_eq!(dropout.top_5_features[0].impact, -0.31);
        assert!(parsed.for_class("Enrolled").is_none());
    }

    #[test]
    fn parses_model_info_with_numeric_or_text_metrics() {
        let json = r#"{
            "global_explanation_report": {"INPUT": "14 features", "OUTPUT": "3 classes", "HOW": "Boosted trees"},
            "metadata": {"model_performance": {"test_accuracy": 0.87, "f1_score_weighted": "0.86", "notes": "Held-out split"}}
        }"#;
        let parsed: ModelInfo = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.global_explanation_report.how, "Boosted trees");
        let perf = &parsed.metadata.model_performance;
        assert_eq!(perf.test_accuracy.to_string(), "0.87");
        assert_eq!(perf.f1_score_weighted.to_string(), "0.86");
        assert_eq!(perf.notes.as_deref(), Some("Held-out split"));
    }

    #[test]
    fn actionable_suggestions_default_to_empty() {
        let parsed: ActionableExplanation =
            serde_json::from_str(r#"{"recommendation_type":"HOW TO","message":"Keep going"}"#)
                .unwrap();
        assert!(parsed.suggestions.is_empty());
    }
}
