//! Static help text shown when hovering form labels and metrics.

use crate::form::FieldId;

/// Help text for a form field.
pub fn field_help(field: FieldId) -> &'static str {
    match field {
        FieldId::ApplicationOrder => {
            "Lower application order may correlate with higher interest in the program."
        }
        FieldId::InflationRate => {
            "Economic instability can indirectly influence student stress and financial stability."
        }
        FieldId::ApplicationMode => {
            "How the student applied, which can correlate with administrative pathways."
        }
        FieldId::Gdp => "Higher GDP environments may have more support infrastructure.",
        FieldId::UnemploymentRate => {
            "High unemployment can increase financial pressure, impacting dropout likelihood."
        }
        FieldId::Course => {
            "Curriculum category code; some programs have higher overall attrition."
        }
        FieldId::FirstSemEvaluations => {
            "More evaluations can indicate course difficulty or engagement level."
        }
        FieldId::SecondSemEvaluations => {
            "Similar to first semester: workload and pressure indicators."
        }
        FieldId::AgeAtEnrollment => {
            "Non-traditional age students may face additional responsibilities."
        }
        FieldId::AdmissionGrade => {
            "Higher admission grades often correlate with academic preparedness."
        }
        FieldId::FirstSemApproved => {
            "Approved units show academic success and sustained engagement."
        }
        FieldId::FirstSemGrade => {
            "High grades reflect academic confidence and lower dropout odds."
        }
        FieldId::SecondSemGrade => {
            "Second semester performance indicates adaptation and consistency."
        }
        FieldId::SecondSemApproved => "Approved units reflect academic momentum.",
    }
}

/// Hover text for the weighted F1 metric.
pub const F1_HELP: &str = "A balanced measure of performance.";
