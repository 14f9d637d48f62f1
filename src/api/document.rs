use serde::{Deserialize, Serialize};

/// Document type for introducing Russian-produced goods into circulation.
pub const DOC_TYPE_LP_INTRODUCE_GOODS: &str = "LP_INTRODUCE_GOODS";

/// Goods-introduction document as the CRPT API expects it.
///
/// Wire names follow the downstream contract: snake_case except
/// `importRequest` and the description's `participantInn`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub description: Description,
    pub doc_id: String,
    pub doc_status: String,
    pub doc_type: String,
    #[serde(rename = "importRequest")]
    pub import_request: bool,
    pub owner_inn: String,
    pub participant_inn: String,
    pub producer_inn: String,
    pub production_date: String,
    pub production_type: String,
    pub products: Vec<Product>,
    pub reg_date: String,
    pub reg_number: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Description {
    #[serde(rename = "participantInn")]
    pub participant_inn: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub certificate_document: String,
    pub certificate_document_date: String,
    pub certificate_document_number: String,
    pub owner_inn: String,
    pub producer_inn: String,
    pub production_date: String,
    pub tnved_code: String,
    pub uit_code: String,
    pub uitu_code: String,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            description: Description {
                participant_inn: String::new(),
            },
            doc_id: String::new(),
            doc_status: String::new(),
            doc_type: DOC_TYPE_LP_INTRODUCE_GOODS.to_string(),
            import_request: false,
            owner_inn: String::new(),
            participant_inn: String::new(),
            producer_inn: String::new(),
            production_date: String::new(),
            production_type: String::new(),
            products: Vec::new(),
            reg_date: String::new(),
            reg_number: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        let doc = Document {
            description: Description {
                participant_inn: "123456789".to_string(),
            },
            doc_id: "doc1".to_string(),
            import_request: true,
            ..Document::default()
        };

        let json: serde_json::Value = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["doc_type"], DOC_TYPE_LP_INTRODUCE_GOODS);
        assert_eq!(json["importRequest"], true);
        assert_eq!(json["description"]["participantInn"], "123456789");
        assert_eq!(json["doc_id"], "doc1");
        assert!(json.get("import_request").is_none());
    }
}
