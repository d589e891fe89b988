use std::cmp::Ordering;

use shared_types::{
    Capability, CapabilityCounts, ModelCategory, NormalizedModel, SortField, SortOrder,
};

use super::state::DashboardState;

enum SortValue<'a> {
    Number(f64),
    Text(&'a str),
    Missing,
}

impl SortValue<'_> {
    fn as_text(&self) -> String {
        match self {
            SortValue::Number(n) => n.to_string(),
            SortValue::Text(s) => s.to_string(),
            SortValue::Missing => String::new(),
        }
    }
}

fn sort_value(model: &NormalizedModel, field: SortField) -> SortValue<'_> {
    match field {
        SortField::Name => SortValue::Text(&model.name),
        SortField::ProviderId => SortValue::Text(&model.provider_id),
        SortField::Type => model
            .model_type
            .as_deref()
            .map_or(SortValue::Missing, SortValue::Text),
        SortField::ContextWindow => model
            .context_window
            .map_or(SortValue::Missing, |c| SortValue::Number(c as f64)),
        SortField::Latency => model.latency.map_or(SortValue::Missing, SortValue::Number),
        SortField::Uptime => model.uptime.map_or(SortValue::Missing, SortValue::Number),
    }
}

/// Numbers compare numerically, text case-insensitively; missing values
/// sort before everything else
fn compare(a: &NormalizedModel, b: &NormalizedModel, field: SortField) -> Ordering {
    match (sort_value(a, field), sort_value(b, field)) {
        (SortValue::Number(x), SortValue::Number(y)) => x.total_cmp(&y),
        (SortValue::Missing, SortValue::Missing) => Ordering::Equal,
        (SortValue::Missing, _) => Ordering::Less,
        (_, SortValue::Missing) => Ordering::Greater,
        (x, y) => {
            let (x, y) = (x.as_text(), y.as_text());
            x.to_lowercase()
                .cmp(&y.to_lowercase())
                .then_with(|| x.cmp(&y))
        }
    }
}

fn matches_search(model: &NormalizedModel, needle: &str) -> bool {
    needle.is_empty()
        || model.name.to_lowercase().contains(needle)
        || model.provider_id.to_lowercase().contains(needle)
}

fn has_all(model: &NormalizedModel, capabilities: &[Capability]) -> bool {
    capabilities
        .iter()
        .all(|capability| model.capabilities.has(*capability))
}

/// Rows of the dashboard table for the given state
pub fn render(state: &DashboardState, models: &[NormalizedModel]) -> Vec<NormalizedModel> {
    let needle = state.search().trim().to_lowercase();
    let tab = state.tab();

    let mut rows: Vec<NormalizedModel> = models
        .iter()
        .filter(|model| tab.matches(model.model_type.as_deref()))
        .filter(|model| matches_search(model, &needle))
        .filter(|model| has_all(model, state.capabilities()))
        .cloned()
        .collect();

    let field = state.sort_field();
    match state.sort_order() {
        SortOrder::Asc => rows.sort_by(|a, b| compare(a, b, field)),
        SortOrder::Desc => rows.sort_by(|a, b| compare(b, a, field)),
    }

    rows
}

pub fn capability_counts(models: &[NormalizedModel]) -> CapabilityCounts {
    let count = |capability: Capability| {
        models
            .iter()
            .filter(|model| model.capabilities.has(capability))
            .count()
    };

    CapabilityCounts {
        function_calling: count(Capability::FunctionCalling),
        vision: count(Capability::Vision),
        audio: count(Capability::Audio),
        reasoning: count(Capability::Reasoning),
    }
}

/// Models of one category that report an uptime, highest uptime first
pub fn category_listing(category: ModelCategory, models: &[NormalizedModel]) -> Vec<NormalizedModel> {
    let mut listed: Vec<NormalizedModel> = models
        .iter()
        .filter(|model| category.matches(model.model_type.as_deref()))
        .filter(|model| model.uptime.is_some())
        .cloned()
        .collect();

    listed.sort_by(|a, b| {
        let uptime_a = a.uptime.unwrap_or(0.0);
        let uptime_b = b.uptime.unwrap_or(0.0);
        uptime_b.total_cmp(&uptime_a)
    });

    listed
}
