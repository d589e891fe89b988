use serde::Deserialize;
use shared_types::{Capability, ModelCategory, SortField, SortOrder};

use crate::dashboard::DashboardState;
use crate::error::ApiError;

/// Query string of `GET /api/dashboard`
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    pub tab: Option<String>,
    pub search: Option<String>,
    /// Comma-separated capability keys, all of which must be present
    pub capabilities: Option<String>,
    pub sort: Option<SortField>,
    pub order: Option<SortOrder>,
}

impl DashboardQuery {
    pub fn to_state(&self) -> Result<DashboardState, ApiError> {
        let mut state = DashboardState::default();

        if let Some(tab) = self.tab.as_deref() {
            let category = ModelCategory::from_slug(tab)
                .ok_or_else(|| ApiError::InvalidRequest(format!("Unknown tab: {}", tab)))?;
            state = state.select_tab(category);
        }

        if let Some(search) = self.search.as_deref() {
            state = state.with_search(search);
        }

        if let Some(capabilities) = self.capabilities.as_deref() {
            for key in capabilities.split(',').filter(|key| !key.trim().is_empty()) {
                let capability = Capability::from_key(key).ok_or_else(|| {
                    ApiError::InvalidRequest(format!("Unknown capability: {}", key.trim()))
                })?;
                state = state.require_capability(capability);
            }
        }

        if let Some(field) = self.sort {
            state = state.with_sort(field, self.order.unwrap_or_default());
        } else if let Some(order) = self.order {
            state = state.with_sort(state.sort_field(), order);
        }

        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_is_default_state() {
        let state = DashboardQuery::default().to_state().unwrap();
        assert_eq!(state, DashboardState::default());
    }

    #[test]
    fn test_full_query() {
        let query = DashboardQuery {
            tab: Some("embedding".to_string()),
            search: Some("bge".to_string()),
            capabilities: Some("vision, function_calling,vision".to_string()),
            sort: Some(SortField::Uptime),
            order: Some(SortOrder::Desc),
        };
        let state = query.to_state().unwrap();
        assert_eq!(state.tab(), ModelCategory::Embeddings);
        assert_eq!(state.search(), "bge");
        assert_eq!(
            state.capabilities(),
            &[Capability::Vision, Capability::FunctionCalling]
        );
        assert_eq!(state.sort_field(), SortField::Uptime);
        assert_eq!(state.sort_order(), SortOrder::Desc);
    }

    #[test]
    fn test_unknown_values_are_rejected() {
        let query = DashboardQuery {
            tab: Some("video".to_string()),
            ..DashboardQuery::default()
        };
        assert!(matches!(query.to_state(), Err(ApiError::InvalidRequest(_))));

        let query = DashboardQuery {
            capabilities: Some("telepathy".to_string()),
            ..DashboardQuery::default()
        };
        assert!(matches!(query.to_state(), Err(ApiError::InvalidRequest(_))));
    }
}
