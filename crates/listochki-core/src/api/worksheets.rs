//! Worksheet catalog endpoints.

use serde::{Deserialize, Serialize};

use crate::models::{PaginatedResponse, WorksheetDetail, WorksheetListItem};

use super::gateway::{Gateway, Query, Result};

/// Catalog filters. Every set field is sent verbatim as a query parameter
/// named after its serde name; unset fields are omitted. No client-side
/// validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorksheetFilters {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub category: Option<i64>,
    #[serde(rename = "category__slug")]
    pub category_slug: Option<String>,
    pub grade_level: Option<String>,
    pub difficulty: Option<String>,
    pub search: Option<String>,
    pub ordering: Option<String>,
    #[serde(rename = "tags__slug")]
    pub tags_slug: Option<String>,
}

impl WorksheetFilters {
    pub fn to_query(&self) -> Query {
        let numbers = [
            ("page", self.page.map(i64::from)),
            ("page_size", self.page_size.map(i64::from)),
            ("category", self.category),
        ];
        let strings = [
            ("category__slug", &self.category_slug),
            ("grade_level", &self.grade_level),
            ("difficulty", &self.difficulty),
            ("search", &self.search),
            ("ordering", &self.ordering),
            ("tags__slug", &self.tags_slug),
        ];

        numbers
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| (key, v.to_string())))
            .chain(
                strings
                    .into_iter()
                    .filter_map(|(key, value)| value.clone().map(|v| (key, v))),
            )
            .collect()
    }

    /// Set a filter by its query parameter name. Returns false for an
    /// unknown key or a numeric key with a non-numeric value.
    pub fn set(&mut self, key: &str, value: &str) -> bool {
        let value = value.to_string();
        match key {
            "page" => return Self::set_number(&mut self.page, &value),
            "page_size" => return Self::set_number(&mut self.page_size, &value),
            "category" => return Self::set_number(&mut self.category, &value),
            "category__slug" => self.category_slug = Some(value),
            "grade_level" => self.grade_level = Some(value),
            "difficulty" => self.difficulty = Some(value),
            "search" => self.search = Some(value),
            "ordering" => self.ordering = Some(value),
            "tags__slug" => self.tags_slug = Some(value),
            _ => return false,
        }
        true
    }

    fn set_number<T: std::str::FromStr>(slot: &mut Option<T>, value: &str) -> bool {
        match value.parse() {
            Ok(n) => {
                *slot = Some(n);
                true
            }
            Err(_) => false,
        }
    }
}

#[derive(Clone)]
pub struct WorksheetsApi {
    gateway: Gateway,
}

impl WorksheetsApi {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub async fn list(&self, filters: &WorksheetFilters) -> Result<PaginatedResponse<WorksheetListItem>> {
        self.gateway.get_json("/api/worksheets/", filters.to_query()).await
    }

    /// Unknown slugs fail with `TransportFailure::NotFound`.
    pub async fn detail(&self, slug: &str) -> Result<WorksheetDetail> {
        self.gateway
            .get_json(&self.gateway.slug_path("/api/worksheets/", slug, "")?, Query::new())
            .await
    }

    /// Absolute download URL. No request is made.
    pub fn download_url(&self, id: i64) -> String {
        self.gateway.url_for(&Self::download_path(id))
    }

    /// Raw file payload (usually a PDF).
    pub async fn download(&self, id: i64) -> Result<Vec<u8>> {
        self.gateway.get_bytes(&Self::download_path(id)).await
    }

    /// Worksheets from the same category, picked by the server.
    pub async fn similar(&self, slug: &str) -> Result<Vec<WorksheetListItem>> {
        self.gateway
            .get_list(&self.gateway.slug_path("/api/worksheets/", slug, "similar/")?, Query::new())
            .await
    }

    /// Featured worksheets for the home page.
    pub async fn featured(&self) -> Result<Vec<WorksheetListItem>> {
        self.gateway.get_list("/api/worksheets/featured/", Query::new()).await
    }

    pub async fn search(
        &self,
        query: &str,
        page: Option<u32>,
    ) -> Result<PaginatedResponse<WorksheetListItem>> {
        let mut params: Query = vec![("q", query.to_string())];
        if let Some(page) = page {
            params.push(("page", page.to_string()));
        }
        self.gateway.get_json("/api/worksheets/search/", params).await
    }

    fn download_path(id: i64) -> String {
        format!("/api/worksheets/{}/download/", id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{MockTransport, BASE_URL};
    use crate::api::TransportFailure;
    use crate::models::fixtures::{detail_json, list_item_json};
    use crate::models::GradeLevel;

    fn page_json(items: &[String]) -> String {
        format!(
            r#"{{"count": {n}, "total_pages": 1, "current_page": 1, "page_size": 21,
                "next": null, "previous": null, "results": [{items}]}}"#,
            n = items.len(),
            items = items.join(",")
        )
    }

    #[test]
    fn test_download_url_makes_no_request() {
        let mock = MockTransport::new();
        let api = WorksheetsApi::new(mock.gateway());

        assert_eq!(api.download_url(42), format!("{BASE_URL}/api/worksheets/42/download/"));
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn test_filters_are_passed_through() {
        let mock = MockTransport::new();
        mock.respond("/api/worksheets/", 200, page_json(&[]));
        let api = WorksheetsApi::new(mock.gateway());

        let filters = WorksheetFilters {
            grade_level: Some("grade2".to_string()),
            search: Some("fractions".to_string()),
            ..Default::default()
        };
        api.list(&filters).await.expect("list succeeds");

        let requests = mock.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, format!("{BASE_URL}/api/worksheets/"));
        assert_eq!(
            requests[0].query,
            vec![
                ("grade_level", "grade2".to_string()),
                ("search", "fractions".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_filters_send_nothing() {
        assert!(WorksheetFilters::default().to_query().is_empty());
    }

    #[test]
    fn test_all_filters_combine() {
        let mut filters = WorksheetFilters::default();
        assert!(filters.set("page", "3"));
        assert!(filters.set("page_size", "30"));
        assert!(filters.set("category", "5"));
        assert!(filters.set("category__slug", "slozhenie"));
        assert!(filters.set("grade_level", GradeLevel::Grade1.as_str()));
        assert!(filters.set("difficulty", "hard"));
        assert!(filters.set("ordering", "-views_count"));
        assert!(filters.set("tags__slug", "schet"));
        assert!(!filters.set("page", "three"));
        assert!(!filters.set("color", "red"));

        let query = filters.to_query();
        assert_eq!(query.len(), 8);
        assert_eq!(query[0], ("page", "3".to_string()));
        assert!(query.contains(&("ordering", "-views_count".to_string())));
    }

    #[tokio::test]
    async fn test_list_rejects_out_of_enum_values() {
        let mock = MockTransport::new();
        mock.respond(
            "/api/worksheets/",
            200,
            page_json(&[list_item_json(1, "a", "grade9", "easy")]),
        );

        let err = WorksheetsApi::new(mock.gateway())
            .list(&WorksheetFilters::default())
            .await
            .unwrap_err();
        assert!(matches!(err, TransportFailure::InvalidResponse { .. }));
    }

    #[tokio::test]
    async fn test_detail_decodes_category_and_tags() {
        let mock = MockTransport::new();
        mock.respond(
            "/api/worksheets/slozhenie-do-10/",
            200,
            detail_json("slozhenie-do-10", "grade1", "hard"),
        );

        let detail = WorksheetsApi::new(mock.gateway())
            .detail("slozhenie-do-10")
            .await
            .expect("detail");
        assert_eq!(detail.grade_level, GradeLevel::Grade1);
        assert_eq!(detail.category.slug, "slozhenie");
        assert!(detail.has_tag("schet"));
    }

    #[tokio::test]
    async fn test_detail_rejects_out_of_enum_values() {
        let mock = MockTransport::new();
        mock.respond(
            "/api/worksheets/a/",
            200,
            detail_json("a", "grade7", "easy"),
        );
        mock.respond(
            "/api/worksheets/b/",
            200,
            detail_json("b", "grade2", "extreme"),
        );
        let api = WorksheetsApi::new(mock.gateway());

        for slug in ["a", "b"] {
            let err = api.detail(slug).await.unwrap_err();
            assert!(matches!(err, TransportFailure::InvalidResponse { .. }), "{slug}: {err:?}");
        }
    }

    #[tokio::test]
    async fn test_similar_and_featured_unwrap() {
        let mock = MockTransport::new();
        mock.respond(
            "/api/worksheets/slozhenie-do-10/similar/",
            200,
            format!("[{}]", list_item_json(2, "b", "grade1", "medium")),
        );
        mock.respond(
            "/api/worksheets/featured/",
            200,
            page_json(&[
                list_item_json(3, "c", "preschool", "easy"),
                list_item_json(4, "d", "grade5", "hard"),
            ]),
        );
        let api = WorksheetsApi::new(mock.gateway());

        let similar = api.similar("slozhenie-do-10").await.expect("similar");
        assert_eq!(similar.len(), 1);
        assert_eq!(similar[0].slug, "b");

        let featured = api.featured().await.expect("featured");
        assert_eq!(featured.len(), 2);
    }

    #[tokio::test]
    async fn test_download_returns_bytes() {
        let mock = MockTransport::new();
        mock.respond("/api/worksheets/42/download/", 200, b"%PDF-1.7".to_vec());

        let bytes = WorksheetsApi::new(mock.gateway())
            .download(42)
            .await
            .expect("download");
        assert_eq!(bytes, b"%PDF-1.7");
    }

    #[tokio::test]
    async fn test_search_sends_q_and_page() {
        let mock = MockTransport::new();
        mock.respond("/api/worksheets/search/", 200, page_json(&[]));

        WorksheetsApi::new(mock.gateway())
            .search("дроби", Some(2))
            .await
            .expect("search");
        assert_eq!(
            mock.requests()[0].query,
            vec![("q", "дроби".to_string()), ("page", "2".to_string())]
        );
    }
}
