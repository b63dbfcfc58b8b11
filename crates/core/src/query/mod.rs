//! Typed filter and sort keys for list endpoints.
//!
//! List endpoints accept `filterBy=field=value,...` and
//! `sortBy=field=asc|desc,...`. Both strings are parsed once, at the HTTP
//! boundary, into a [`ListQuery`] over the entity's [`QueryField`] set;
//! anything not in that set is rejected there.

pub mod error;
pub mod fields;

pub use error::QueryError;
pub use fields::{CompanyField, DriverField, TransportField};

/// A field of an entity that list queries may refer to.
pub trait QueryField: Copy + Eq + std::fmt::Debug + Sized + 'static {
    /// Entity name used in error messages.
    const ENTITY: &'static str;

    /// Every field of the entity.
    const ALL: &'static [Self];

    /// Name of the field on the wire.
    fn name(self) -> &'static str;

    /// Whether the field supports substring filtering.
    fn is_filterable(self) -> bool;

    /// Looks a field up by its wire name.
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.name() == name)
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

impl std::str::FromStr for SortDirection {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(Self::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(Self::Desc)
        } else {
            Err(QueryError::UnknownDirection(s.to_string()))
        }
    }
}

/// One ordering criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey<F> {
    /// Field to order by.
    pub field: F,
    /// Direction.
    pub direction: SortDirection,
}

/// Case-insensitive substring match on a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFilter<F> {
    /// Field to match.
    pub field: F,
    /// Text the field must contain.
    pub needle: String,
}

/// Validated filters and ordering for a list query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery<F> {
    /// Filters, all of which must match.
    pub filters: Vec<FieldFilter<F>>,
    /// Ordering criteria, most significant first.
    pub sort: Vec<SortKey<F>>,
}

impl<F> Default for ListQuery<F> {
    fn default() -> Self {
        Self {
            filters: Vec::new(),
            sort: Vec::new(),
        }
    }
}

impl<F: QueryField> ListQuery<F> {
    /// Parses optional `filterBy` and `sortBy` strings.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed pairs, unknown or non-filterable
    /// fields, and unknown sort directions.
    pub fn parse(filter_by: Option<&str>, sort_by: Option<&str>) -> Result<Self, QueryError> {
        Ok(Self {
            filters: filter_by.map(parse_filters::<F>).transpose()?.unwrap_or_default(),
            sort: sort_by.map(parse_sort::<F>).transpose()?.unwrap_or_default(),
        })
    }

    /// Returns true if the query neither filters nor sorts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty() && self.sort.is_empty()
    }
}

/// Parses `field=value[,field=value...]` into filters.
///
/// # Errors
///
/// See [`ListQuery::parse`].
pub fn parse_filters<F: QueryField>(input: &str) -> Result<Vec<FieldFilter<F>>, QueryError> {
    pairs(input)
        .map(|pair| {
            let (name, value) = pair?;
            let field = lookup::<F>(name)?;
            if !field.is_filterable() {
                return Err(QueryError::NotFilterable {
                    entity: F::ENTITY,
                    field: name.to_string(),
                });
            }
            Ok(FieldFilter {
                field,
                needle: value.to_string(),
            })
        })
        .collect()
}

/// Parses `field=asc|desc[,...]` into sort keys.
///
/// # Errors
///
/// See [`ListQuery::parse`].
pub fn parse_sort<F: QueryField>(input: &str) -> Result<Vec<SortKey<F>>, QueryError> {
    pairs(input)
        .map(|pair| {
            let (name, value) = pair?;
            Ok(SortKey {
                field: lookup::<F>(name)?,
                direction: value.parse()?,
            })
        })
        .collect()
}

fn lookup<F: QueryField>(name: &str) -> Result<F, QueryError> {
    F::from_name(name).ok_or_else(|| QueryError::UnknownField {
        entity: F::ENTITY,
        field: name.to_string(),
    })
}

/// Splits `a=b,c=d` into trimmed pairs, skipping empty segments.
fn pairs(input: &str) -> impl Iterator<Item = Result<(&str, &str), QueryError>> {
    input
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let (key, value) = segment
                .split_once('=')
                .ok_or_else(|| QueryError::Malformed(segment.to_string()))?;
            let (key, value) = (key.trim(), value.trim());
            if key.is_empty() || value.is_empty() {
                return Err(QueryError::Malformed(segment.to_string()));
            }
            Ok((key, value))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_absent_strings_give_empty_query() {
        let query = ListQuery::<CompanyField>::parse(None, None).unwrap();
        assert!(query.is_empty());
    }

    #[test]
    fn test_parse_filters_and_sort() {
        let query =
            ListQuery::<DriverField>::parse(Some("firstName=ann,lastName=lee"), Some("salary=DESC,lastName=asc"))
                .unwrap();

        assert_eq!(
            query.filters,
            vec![
                FieldFilter {
                    field: DriverField::FirstName,
                    needle: "ann".to_string()
                },
                FieldFilter {
                    field: DriverField::LastName,
                    needle: "lee".to_string()
                },
            ]
        );
        assert_eq!(
            query.sort,
            vec![
                SortKey {
                    field: DriverField::Salary,
                    direction: SortDirection::Desc
                },
                SortKey {
                    field: DriverField::LastName,
                    direction: SortDirection::Asc
                },
            ]
        );
    }

    #[test]
    fn test_whitespace_and_trailing_commas_are_tolerated() {
        let sort = parse_sort::<CompanyField>(" name = asc ,").unwrap();
        assert_eq!(sort.len(), 1);
        assert_eq!(sort[0].direction, SortDirection::Asc);
    }

    #[rstest]
    #[case("name")]
    #[case("=asc")]
    #[case("name=")]
    fn test_malformed_pairs_are_rejected(#[case] input: &str) {
        assert!(matches!(
            parse_sort::<CompanyField>(input),
            Err(QueryError::Malformed(_))
        ));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = parse_sort::<CompanyField>("revenue=asc").unwrap_err();
        assert_eq!(err.to_string(), "company has no field 'revenue'");
    }

    #[test]
    fn test_unknown_direction_is_rejected() {
        let err = parse_sort::<CompanyField>("name=up").unwrap_err();
        assert_eq!(err, QueryError::UnknownDirection("up".to_string()));
    }

    #[test]
    fn test_non_text_field_cannot_be_filtered() {
        let err = parse_filters::<DriverField>("salary=100").unwrap_err();
        assert!(matches!(err, QueryError::NotFilterable { .. }));
    }

    #[test]
    fn test_filter_value_may_contain_spaces() {
        let filters = parse_filters::<TransportField>("endAddress=Main Street 5").unwrap();
        assert_eq!(filters[0].needle, "Main Street 5");
    }
}
