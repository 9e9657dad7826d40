use serde::Deserialize;

/// Catalog filter state, one field per facet. `None` / empty means the facet
/// is unconstrained. The struct round-trips through the query string the
/// storefront keeps in the address bar: `parse` accepts whatever arrives in a
/// shared link, `to_query_string` emits the canonical form the client writes
/// back with `history.replaceState` (replace, not push, so the back button
/// does not step through every filter tweak).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    pub category: Option<i32>,
    pub modality: Option<i32>,
    pub type_id: Option<i32>,
    pub colors: Vec<i32>,
}

impl CatalogFilter {
    /// Read a filter from a raw query string. Recognized keys are `category`,
    /// `modality`, `type` and `colors` (comma-separated ids); anything else is
    /// ignored. Values that do not parse as non-negative integers leave the
    /// facet unconstrained rather than failing the request.
    pub fn parse(query: &str) -> Self {
        let mut filter = CatalogFilter::default();

        for pair in query.trim_start_matches('?').split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            let value = urlencoding::decode(value)
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| value.to_string());

            match key {
                "category" => filter.category = parse_id(&value),
                "modality" => filter.modality = parse_id(&value),
                "type" => filter.type_id = parse_id(&value),
                "colors" => filter.colors = parse_color_list(&value),
                _ => {}
            }
        }

        filter
    }

    /// Canonical query string: only the constrained facets, in the fixed
    /// order category, modality, type, colors. No leading `?`.
    pub fn to_query_string(&self) -> String {
        let mut params = Vec::new();

        if let Some(category) = self.category {
            params.push(format!("category={}", category));
        }
        if let Some(modality) = self.modality {
            params.push(format!("modality={}", modality));
        }
        if let Some(type_id) = self.type_id {
            params.push(format!("type={}", type_id));
        }
        if !self.colors.is_empty() {
            let ids: Vec<String> = self.colors.iter().map(|id| id.to_string()).collect();
            params.push(format!("colors={}", ids.join(",")));
        }

        params.join("&")
    }
}

fn parse_id(value: &str) -> Option<i32> {
    value.trim().parse::<i32>().ok().filter(|id| *id >= 0)
}

fn parse_color_list(value: &str) -> Vec<i32> {
    value.split(',').filter_map(parse_id).collect()
}

/// Wire shape of the query parameters: everything arrives as strings, colors
/// as one comma-separated value.
#[derive(Debug, Default, Deserialize)]
struct RawCatalogFilter {
    category: Option<String>,
    modality: Option<String>,
    #[serde(rename = "type")]
    type_id: Option<String>,
    colors: Option<String>,
}

impl<'de> Deserialize<'de> for CatalogFilter {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawCatalogFilter::deserialize(deserializer)?;

        Ok(CatalogFilter {
            category: raw.category.as_deref().and_then(parse_id),
            modality: raw.modality.as_deref().and_then(parse_id),
            type_id: raw.type_id.as_deref().and_then(parse_id),
            colors: raw
                .colors
                .as_deref()
                .map(parse_color_list)
                .unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_filter() -> CatalogFilter {
        CatalogFilter {
            category: Some(1),
            modality: Some(2),
            type_id: Some(3),
            colors: vec![4, 5, 6],
        }
    }

    #[test]
    fn test_round_trip() {
        for filter in [
            CatalogFilter::default(),
            full_filter(),
            CatalogFilter {
                category: Some(0),
                ..Default::default()
            },
            CatalogFilter {
                colors: vec![7],
                ..Default::default()
            },
        ] {
            assert_eq!(CatalogFilter::parse(&filter.to_query_string()), filter);
        }
    }

    #[test]
    fn test_serialize_fixed_order() {
        assert_eq!(
            full_filter().to_query_string(),
            "category=1&modality=2&type=3&colors=4,5,6"
        );
    }

    #[test]
    fn test_serialize_omits_empty_facets() {
        let mut filter = full_filter();
        filter.category = None;
        assert_eq!(filter.to_query_string(), "modality=2&type=3&colors=4,5,6");

        let mut filter = full_filter();
        filter.modality = None;
        assert_eq!(filter.to_query_string(), "category=1&type=3&colors=4,5,6");

        let mut filter = full_filter();
        filter.type_id = None;
        assert_eq!(filter.to_query_string(), "category=1&modality=2&colors=4,5,6");

        let mut filter = full_filter();
        filter.colors.clear();
        assert_eq!(filter.to_query_string(), "category=1&modality=2&type=3");

        assert_eq!(CatalogFilter::default().to_query_string(), "");
    }

    #[test]
    fn test_parse_ignores_unknown_keys() {
        let filter = CatalogFilter::parse("category=1&utm_source=mail&page=2");
        assert_eq!(filter.category, Some(1));
        assert_eq!(filter.modality, None);
        assert_eq!(filter.type_id, None);
        assert!(filter.colors.is_empty());
    }

    #[test]
    fn test_parse_malformed_values_unconstrained() {
        let filter = CatalogFilter::parse("category=abc&modality=-5&colors=x,2,,3");
        assert_eq!(filter.category, None);
        assert_eq!(filter.modality, None);
        assert_eq!(filter.colors, vec![2, 3]);
    }

    #[test]
    fn test_parse_leading_question_mark_and_encoded_comma() {
        let filter = CatalogFilter::parse("?colors=1%2C2");
        assert_eq!(filter.colors, vec![1, 2]);
    }

    #[test]
    fn test_deserialize_from_query_params() {
        let filter: CatalogFilter = serde_json::from_value(serde_json::json!({
            "category": "3",
            "colors": "1,2",
            "other": "ignored",
        }))
        .unwrap();

        assert_eq!(filter.category, Some(3));
        assert_eq!(filter.modality, None);
        assert_eq!(filter.colors, vec![1, 2]);
    }
}
