//! Query parameters shared by list endpoints.

use serde::Deserialize;
use transco_core::query::{ListQuery, QueryError, QueryField};
use transco_shared::types::PageRequest;

/// `?filterBy=&sortBy=&page=` on list endpoints.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    /// `field=value[,field=value...]`, all must match.
    pub filter_by: Option<String>,
    /// `field=asc|desc[,...]`.
    pub sort_by: Option<String>,
    /// Page number (0-indexed).
    pub page: Option<u32>,
}

impl ListParams {
    /// Parses the filter and sort strings for entity fields `F`.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown fields, non-filterable fields, malformed
    /// pairs and unknown directions.
    pub fn query<F: QueryField>(&self) -> Result<ListQuery<F>, QueryError> {
        ListQuery::parse(self.filter_by.as_deref(), self.sort_by.as_deref())
    }

    /// The requested page with the configured page size.
    #[must_use]
    pub fn page(&self, page_size: u32) -> PageRequest {
        PageRequest::new(self.page.unwrap_or(0), page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use transco_core::query::{CompanyField, SortDirection};

    #[test]
    fn test_missing_params_mean_first_page_unfiltered() {
        let params = ListParams::default();

        assert!(params.query::<CompanyField>().unwrap().is_empty());
        assert_eq!(params.page(20), PageRequest::new(0, 20));
    }

    #[test]
    fn test_params_parse_filter_sort_and_page() {
        let params = ListParams {
            filter_by: Some("name=acme".to_string()),
            sort_by: Some("name=DESC".to_string()),
            page: Some(3),
        };

        let query = params.query::<CompanyField>().unwrap();
        assert_eq!(query.filters[0].needle, "acme");
        assert_eq!(query.sort[0].direction, SortDirection::Desc);
        assert_eq!(params.page(10).offset(), 30);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let params = ListParams {
            sort_by: Some("salary=asc".to_string()),
            ..ListParams::default()
        };

        assert!(params.query::<CompanyField>().is_err());
    }
}
