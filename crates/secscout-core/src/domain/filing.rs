use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::wire::null_as_default;
use super::Cik;

/// Form type of the annual report.
pub const ANNUAL_REPORT_FORM: &str = "10-K";

/// Search request for the most recent filing of one form type.
///
/// Only constructed through [`FilingQuery::latest`], so the window is always
/// the single newest match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilingQuery {
    cik: Cik,
    form_type: String,
    from: usize,
    size: usize,
}

impl FilingQuery {
    pub fn latest(cik: Cik, form_type: impl Into<String>) -> Self {
        Self {
            cik,
            form_type: form_type.into(),
            from: 0,
            size: 1,
        }
    }

    pub fn cik(&self) -> &Cik {
        &self.cik
    }

    pub fn form_type(&self) -> &str {
        &self.form_type
    }

    pub const fn from(&self) -> usize {
        self.from
    }

    pub const fn size(&self) -> usize {
        self.size
    }

    /// Lucene-style expression understood by the search endpoint.
    pub fn query_string(&self) -> String {
        format!(
            "cik:\"{}\" AND formType:\"{}\"",
            self.cik.as_str(),
            self.form_type
        )
    }

    /// JSON request body. The endpoint expects `from` and `size` as strings.
    pub fn to_body(&self) -> Value {
        json!({
            "query": { "query_string": { "query": self.query_string() } },
            "from": self.from.to_string(),
            "size": self.size.to_string(),
            "sort": [{ "filedAt": { "order": "desc" } }],
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilingTotal {
    #[serde(deserialize_with = "null_as_default")]
    pub value: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub relation: String,
}

/// Parsed filing search response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilingResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: FilingTotal,
    #[serde(default)]
    pub query: Value,
    /// `None` when the response carries no `filings` field at all.
    #[serde(default)]
    pub filings: Option<Vec<Filing>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Filing {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub accession_no: String,
    #[serde(deserialize_with = "null_as_default")]
    pub cik: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ticker: String,
    #[serde(deserialize_with = "null_as_default")]
    pub company_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub company_name_long: String,
    #[serde(deserialize_with = "null_as_default")]
    pub form_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub filed_at: String,
    pub link_to_txt: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub link_to_html: String,
    #[serde(deserialize_with = "null_as_default")]
    pub link_to_xbrl: String,
    #[serde(deserialize_with = "null_as_default")]
    pub link_to_filing_details: String,
    #[serde(deserialize_with = "null_as_default")]
    pub entities: Vec<FilingEntity>,
    #[serde(deserialize_with = "null_as_default")]
    pub document_format_files: Vec<FilingDocument>,
    #[serde(deserialize_with = "null_as_default")]
    pub data_files: Vec<FilingDocument>,
    #[serde(deserialize_with = "null_as_default")]
    pub period_of_report: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilingEntity {
    #[serde(deserialize_with = "null_as_default")]
    pub company_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub cik: String,
    #[serde(deserialize_with = "null_as_default")]
    pub irs_no: String,
    #[serde(deserialize_with = "null_as_default")]
    pub state_of_incorporation: String,
    #[serde(deserialize_with = "null_as_default")]
    pub fiscal_year_end: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub entity_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub act: String,
    #[serde(deserialize_with = "null_as_default")]
    pub file_no: String,
    #[serde(deserialize_with = "null_as_default")]
    pub film_no: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sic: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilingDocument {
    #[serde(deserialize_with = "null_as_default")]
    pub sequence: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub document_url: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub document_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub size: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_query_requests_single_newest_match() {
        let query = FilingQuery::latest(Cik::parse("0000320193").expect("valid"), "10-K");
        let body = query.to_body();

        assert_eq!(body["from"], "0");
        assert_eq!(body["size"], "1");
        assert_eq!(
            body["query"]["query_string"]["query"],
            "cik:\"0000320193\" AND formType:\"10-K\""
        );
        assert_eq!(body["sort"][0]["filedAt"]["order"], "desc");
    }

    #[test]
    fn query_string_embeds_form_type() {
        let query = FilingQuery::latest(Cik::parse("789019").expect("valid"), "10-Q");
        assert_eq!(query.query_string(), "cik:\"789019\" AND formType:\"10-Q\"");
        assert_eq!((query.from(), query.size()), (0, 1));
    }

    #[test]
    fn decodes_nested_filing_record() {
        let json = r#"{
            "total": { "value": 31, "relation": "eq" },
            "query": { "from": 0, "size": 1 },
            "filings": [{
                "accessionNo": "0000320193-23-000106",
                "cik": "320193",
                "companyName": "Apple Inc.",
                "formType": "10-K",
                "filedAt": "2023-11-02T18:08:27-04:00",
                "linkToTxt": "https://www.sec.gov/Archives/edgar/data/320193/0000320193-23-000106.txt",
                "linkToHtml": "https://www.sec.gov/Archives/edgar/data/320193/index.htm",
                "entities": [{ "companyName": "Apple Inc.", "type": "10-K", "fiscalYearEnd": "0930" }],
                "documentFormatFiles": [{ "sequence": "1", "documentUrl": "https://x/aapl.htm", "type": "10-K", "size": "1" }],
                "dataFiles": []
            }]
        }"#;

        let result: FilingResult = serde_json::from_str(json).expect("valid response");
        assert_eq!(result.total.value, 31);

        let filings = result.filings.expect("filings present");
        let filing = &filings[0];
        assert_eq!(filing.accession_no, "0000320193-23-000106");
        assert_eq!(filing.entities[0].entity_type, "10-K");
        assert_eq!(filing.entities[0].fiscal_year_end, "0930");
        assert_eq!(filing.document_format_files[0].document_url, "https://x/aapl.htm");
        assert!(filing.link_to_txt.is_some());
    }

    #[test]
    fn null_fields_in_response_decode_as_empty() {
        let json = r#"{
            "total": null,
            "filings": [{
                "ticker": null,
                "periodOfReport": null,
                "linkToTxt": "https://example/x.txt",
                "entities": [{ "companyName": "Apple Inc.", "irsNo": null }],
                "dataFiles": null
            }]
        }"#;

        let result: FilingResult = serde_json::from_str(json).expect("nulls tolerated");
        assert_eq!(result.total, FilingTotal::default());

        let filing = &result.filings.expect("filings present")[0];
        assert!(filing.ticker.is_empty());
        assert!(filing.data_files.is_empty());
        assert_eq!(filing.entities[0].irs_no, "");
        assert_eq!(filing.link_to_txt.as_deref(), Some("https://example/x.txt"));
    }
}
